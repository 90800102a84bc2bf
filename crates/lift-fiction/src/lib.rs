//! Scene engine for The Lift That Lies.
//!
//! The game is a fixed table of five floors. Each floor offers a short menu
//! of choices, and every choice is a list of effects applied to the
//! [`PlayerState`]. A [`GameSession`] drives the table one choice at a time
//! and reports what happened as a [`Turn`], leaving console I/O to the
//! caller. Progress is persisted through a [`SaveStore`].

/// Conditions, effects, and scene definitions.
pub mod choice;
/// Session configuration.
pub mod config;
/// Error types for the scene engine.
pub mod error;
/// Turn outcomes, endings, and surfaced events.
pub mod outcome;
/// Player state management.
pub mod player;
/// Save file persistence.
pub mod save;
/// Scene session management.
pub mod session;
/// The floor-by-floor transition table.
pub mod story;

pub use config::GameConfig;
pub use error::{FictionError, FictionResult};
pub use outcome::{Ending, Event, Outcome, Turn};
pub use player::{Floor, Health, PlayerState};
pub use save::{JsonFileStore, MemoryStore, SaveRecord, SaveStore};
pub use session::GameSession;
