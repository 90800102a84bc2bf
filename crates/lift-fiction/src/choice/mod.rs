//! Choice engine for the floor scenes.
//!
//! This module provides scene definitions, conditions, and effects.

mod condition;
mod effect;
mod scene;

pub use condition::Condition;
pub use effect::{Effect, apply_effects};
pub use scene::{Action, Note, Scene, SceneOption};
