//! What a single choice produced.

use std::fmt;

use crate::player::Floor;

/// A way the story can end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ending {
    /// Hit points ran out.
    Dead,
    /// The keycard opened the final door.
    Escaped,
    /// The player admitted the truth on the last floor.
    ReleasedByTruth,
}

impl Ending {
    /// The title printed after `ENDING:`.
    pub fn title(self) -> &'static str {
        match self {
            Ending::Dead => "The Building Keeps You.",
            Ending::Escaped => "You Escape.",
            Ending::ReleasedByTruth => "The Building Lets You Go (Barely).",
        }
    }

    /// Closing narration shown before the title, if any.
    pub fn epilogue(self) -> Option<&'static str> {
        match self {
            Ending::Dead => Some("Your vision fades. The lift hums like it\u{2019}s satisfied."),
            Ending::Escaped | Ending::ReleasedByTruth => None,
        }
    }
}

impl fmt::Display for Ending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ENDING: {}", self.title())
    }
}

/// Something the player should be told about, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A line of story text.
    Narration(&'static str),
    /// Hit points were lost.
    Damaged {
        /// Hit points lost.
        amount: u32,
        /// What hurt.
        reason: &'static str,
    },
    /// A new item went into the inventory.
    Obtained(&'static str),
    /// The game was written to the save store.
    Saved,
    /// The story is over.
    Ended(Ending),
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Narration(text) => f.write_str(text),
            Event::Damaged { amount, reason } => write!(f, "Ouch: -{amount} HP ({reason})."),
            Event::Obtained(item) => write!(f, "You obtained: {item}"),
            Event::Saved => f.write_str("Saved."),
            Event::Ended(ending) => write!(f, "{ending}"),
        }
    }
}

/// Where the session goes after a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep playing on this floor.
    Continue(Floor),
    /// The story reached an ending. The save is gone.
    Ended(Ending),
    /// The player walked away. Nothing was saved or erased.
    Quit,
}

impl Outcome {
    /// Whether the driving loop should stop.
    pub fn is_final(self) -> bool {
        !matches!(self, Outcome::Continue(_))
    }
}

/// The result of one accepted choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// Messages to show, oldest first.
    pub events: Vec<Event>,
    /// Where the session goes next.
    pub outcome: Outcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_messages() {
        let hurt = Event::Damaged {
            amount: 1,
            reason: "You cut your hand.",
        };
        assert_eq!(hurt.to_string(), "Ouch: -1 HP (You cut your hand.).");
        assert_eq!(Event::Obtained("coin").to_string(), "You obtained: coin");
        assert_eq!(
            Event::Ended(Ending::Escaped).to_string(),
            "ENDING: You Escape."
        );
    }

    #[test]
    fn only_death_has_epilogue() {
        assert!(Ending::Dead.epilogue().is_some());
        assert!(Ending::Escaped.epilogue().is_none());
        assert!(Ending::ReleasedByTruth.epilogue().is_none());
    }

    #[test]
    fn final_outcomes() {
        assert!(!Outcome::Continue(Floor::Two).is_final());
        assert!(Outcome::Ended(Ending::Dead).is_final());
        assert!(Outcome::Quit.is_final());
    }
}
