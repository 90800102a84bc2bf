//! Save file persistence.
//!
//! The save is a flat JSON record:
//!
//! ```json
//! { "floor": 2, "hp": 3, "inventory": ["coin"], "flags": { "truth_1": true } }
//! ```
//!
//! Loading is forgiving. A missing or mistyped field falls back to its fresh
//! value on its own, so old or hand-edited saves still load.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::error::FictionResult;
use crate::player::{Floor, PlayerState, STARTING_HP};

/// The persisted form of a [`PlayerState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    /// Floor number.
    #[serde(default, deserialize_with = "floor_or_ground")]
    pub floor: i64,
    /// Hit points.
    #[serde(default = "starting_hp", deserialize_with = "hp_or_starting")]
    pub hp: i32,
    /// Held items.
    #[serde(default, deserialize_with = "or_default")]
    pub inventory: Vec<String>,
    /// Story flags.
    #[serde(default, deserialize_with = "or_default")]
    pub flags: BTreeMap<String, bool>,
}

fn starting_hp() -> i32 {
    STARTING_HP
}

fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Whole-number floats such as `2.0` count as their integer.
fn floor_or_ground<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let floor = value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
            .map(|f| f as i64)
    });
    Ok(floor.unwrap_or_default())
}

/// A dead player is never saved, so hp at or below zero is corrupt.
fn hp_or_starting<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value)
        .ok()
        .filter(|hp: &i32| *hp > 0)
        .unwrap_or(STARTING_HP))
}

impl SaveRecord {
    /// Encode as pretty-printed JSON.
    pub fn to_json(&self) -> FictionResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode from JSON text.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Decode from raw file bytes. Invalid UTF-8 is a decode error.
    pub fn from_bytes(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}

impl From<&PlayerState> for SaveRecord {
    fn from(player: &PlayerState) -> Self {
        Self {
            floor: i64::from(player.floor().number()),
            hp: player.hp(),
            inventory: player.inventory().to_vec(),
            flags: player.flags().clone(),
        }
    }
}

impl From<SaveRecord> for PlayerState {
    fn from(record: SaveRecord) -> Self {
        PlayerState::from_parts(
            Floor::from_number(record.floor),
            record.hp,
            record.inventory,
            record.flags,
        )
    }
}

/// Somewhere a game can be put away and picked up again.
pub trait SaveStore {
    /// Read the saved player, if there is one.
    ///
    /// Unreadable contents count as no save.
    fn load(&self) -> FictionResult<Option<PlayerState>>;

    /// Replace the save with `player`.
    fn save(&mut self, player: &PlayerState) -> FictionResult<()>;

    /// Remove the save. Erasing when nothing is saved is fine.
    fn erase(&mut self) -> FictionResult<()>;
}

impl<S: SaveStore + ?Sized> SaveStore for &mut S {
    fn load(&self) -> FictionResult<Option<PlayerState>> {
        (**self).load()
    }

    fn save(&mut self, player: &PlayerState) -> FictionResult<()> {
        (**self).save(player)
    }

    fn erase(&mut self) -> FictionResult<()> {
        (**self).erase()
    }
}

fn decode(bytes: &[u8], origin: &str) -> Option<PlayerState> {
    match SaveRecord::from_bytes(bytes) {
        Ok(record) => Some(record.into()),
        Err(error) => {
            warn!(origin, error = %error, "save_unreadable");
            None
        }
    }
}

/// Stores the game as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// A store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The save file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| "save.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SaveStore for JsonFileStore {
    fn load(&self) -> FictionResult<Option<PlayerState>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };
        Ok(decode(&bytes, &self.path.display().to_string()))
    }

    fn save(&mut self, player: &PlayerState) -> FictionResult<()> {
        let json = SaveRecord::from(player).to_json()?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // Write aside first so a failed write never clobbers the old save.
        let tmp = self.temp_path();
        fs::write(&tmp, json)?;
        if let Err(error) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(error.into());
        }

        info!(path = %self.path.display(), floor = %player.floor(), "game_saved");
        Ok(())
    }

    fn erase(&mut self) -> FictionResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "save_erased");
                Ok(())
            }
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

/// Keeps the encoded save in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    contents: Option<String>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `text`, as if read from a file.
    pub fn with_contents(text: impl Into<String>) -> Self {
        Self {
            contents: Some(text.into()),
        }
    }

    /// The encoded save, if any.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Whether something is saved.
    pub fn is_saved(&self) -> bool {
        self.contents.is_some()
    }
}

impl SaveStore for MemoryStore {
    fn load(&self) -> FictionResult<Option<PlayerState>> {
        Ok(self
            .contents
            .as_deref()
            .and_then(|text| decode(text.as_bytes(), "memory")))
    }

    fn save(&mut self, player: &PlayerState) -> FictionResult<()> {
        self.contents = Some(SaveRecord::from(player).to_json()?);
        Ok(())
    }

    fn erase(&mut self) -> FictionResult<()> {
        self.contents = None;
        Ok(())
    }
}
