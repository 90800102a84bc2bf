//! Condition evaluation for scene branches.

use crate::player::PlayerState;

/// A condition that can be evaluated against player state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Condition {
    /// Check if the player holds an item.
    HasItem {
        /// Item name.
        item: &'static str,
    },
    /// Check if a flag is set to `true`.
    FlagSet {
        /// Flag key.
        key: &'static str,
    },
    /// Logical NOT.
    Not(&'static Condition),
    /// Logical AND.
    All(&'static [Condition]),
    /// Logical OR.
    Any(&'static [Condition]),
    /// Always true.
    #[default]
    Always,
}

impl Condition {
    /// Evaluate the condition against the current state.
    pub fn evaluate(&self, player: &PlayerState) -> bool {
        match self {
            Condition::HasItem { item } => player.has_item(item),
            Condition::FlagSet { key } => player.flag(key),
            Condition::Not(inner) => !inner.evaluate(player),
            Condition::All(conditions) => conditions.iter().all(|c| c.evaluate(player)),
            Condition::Any(conditions) => conditions.iter().any(|c| c.evaluate(player)),
            Condition::Always => true,
        }
    }
}
