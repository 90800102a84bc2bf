//! Effects that modify player state.

use super::condition::Condition;
use crate::outcome::{Ending, Event};
use crate::player::{Floor, Health, PlayerState};

/// An effect that can be applied when a choice is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Show a line of story text.
    Say {
        /// The text.
        text: &'static str,
    },
    /// Give an item to the player.
    GiveItem {
        /// Item name.
        item: &'static str,
    },
    /// Set a player flag.
    SetFlag {
        /// Flag key.
        key: &'static str,
        /// Value to set.
        value: bool,
    },
    /// Hurt the player.
    Damage {
        /// Hit points lost.
        amount: u32,
        /// What hurt, shown to the player.
        reason: &'static str,
    },
    /// Move the player to another floor.
    MoveTo {
        /// Target floor.
        floor: Floor,
    },
    /// Finish the story.
    End {
        /// Which ending.
        ending: Ending,
    },
    /// Apply one of two effect lists depending on a condition.
    Branch {
        /// Checked against the state at the time the branch is reached.
        when: Condition,
        /// Applied when the condition holds.
        then: &'static [Effect],
        /// Applied otherwise.
        otherwise: &'static [Effect],
    },
}

impl Effect {
    /// Apply this effect, recording anything the player should see.
    ///
    /// Returns the ending if the effect finished the story.
    pub fn apply(&self, player: &mut PlayerState, events: &mut Vec<Event>) -> Option<Ending> {
        match *self {
            Effect::Say { text } => events.push(Event::Narration(text)),
            Effect::GiveItem { item } => {
                if player.add_item(item) {
                    events.push(Event::Obtained(item));
                }
            }
            Effect::SetFlag { key, value } => player.set_flag(key, value),
            Effect::Damage { amount, reason } => {
                events.push(Event::Damaged { amount, reason });
                if player.apply_damage(amount) == Health::Depleted {
                    return Some(Ending::Dead);
                }
            }
            Effect::MoveTo { floor } => player.set_floor(floor),
            Effect::End { ending } => return Some(ending),
            Effect::Branch {
                when,
                then,
                otherwise,
            } => {
                let branch = if when.evaluate(player) { then } else { otherwise };
                return apply_effects(branch, player, events);
            }
        }
        None
    }
}

/// Apply effects in order, stopping at the first one that ends the story.
pub fn apply_effects(
    effects: &[Effect],
    player: &mut PlayerState,
    events: &mut Vec<Event>,
) -> Option<Ending> {
    effects
        .iter()
        .find_map(|effect| effect.apply(player, events))
}
