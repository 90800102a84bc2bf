//! Scene definitions and their option menus.

use super::condition::Condition;
use super::effect::Effect;
use crate::player::{Floor, PlayerState};

/// What picking an option does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Apply these effects in order.
    Effects(&'static [Effect]),
    /// Write the player state to the save store.
    Save,
    /// Leave without saving.
    Quit,
}

/// A single entry of a scene menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneOption {
    /// What the player types.
    pub key: &'static str,
    /// The text shown next to the key.
    pub label: &'static str,
    /// What happens when it is picked.
    pub action: Action,
}

/// A line that is only shown while a condition holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    /// When to show the line.
    pub when: Condition,
    /// The line.
    pub text: &'static str,
}

/// The scene played on one floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scene {
    /// The floor this scene belongs to.
    pub floor: Floor,
    /// Opening lines, always shown.
    pub intro: &'static [&'static str],
    /// Extra lines that depend on the player.
    pub notes: &'static [Note],
    /// The question above the menu.
    pub prompt: &'static str,
    /// The menu, in display order.
    pub options: &'static [SceneOption],
}

impl Scene {
    /// Find the option for an already-normalized key.
    pub fn option(&self, key: &str) -> Option<&'static SceneOption> {
        self.options.iter().find(|option| option.key == key)
    }

    /// All accepted keys, in display order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.options.iter().map(|option| option.key)
    }

    /// Intro lines followed by the notes that apply to `player`.
    pub fn describe(&self, player: &PlayerState) -> Vec<&'static str> {
        let notes = self
            .notes
            .iter()
            .filter(|note| note.when.evaluate(player))
            .map(|note| note.text);
        self.intro.iter().copied().chain(notes).collect()
    }
}
