//! Configuration for a game session.

use std::path::PathBuf;

/// Where the save file lives unless told otherwise.
pub const DEFAULT_SAVE_PATH: &str = "save.json";

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Path of the JSON save file.
    pub save_path: PathBuf,
    /// Clear the terminal before each scene.
    pub clear_screen: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            clear_screen: true,
        }
    }
}

impl GameConfig {
    /// Set the save file path.
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    /// Enable or disable screen clearing.
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }
}
