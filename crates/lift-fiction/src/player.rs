//! Player state management.

use std::collections::BTreeMap;
use std::fmt;

/// Hit points a fresh player starts with.
pub const STARTING_HP: i32 = 3;

/// A stop of the lift. Each floor hosts exactly one scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Floor {
    /// Where every run starts.
    #[default]
    Zero,
    /// The mirror.
    One,
    /// The payment slot.
    Two,
    /// The riddle keypad.
    Three,
    /// The final door.
    Four,
}

impl Floor {
    /// All floors, bottom to top.
    pub const ALL: [Floor; 5] = [Floor::Zero, Floor::One, Floor::Two, Floor::Three, Floor::Four];

    /// The number shown on the header and stored in the save file.
    pub fn number(self) -> u8 {
        match self {
            Floor::Zero => 0,
            Floor::One => 1,
            Floor::Two => 2,
            Floor::Three => 3,
            Floor::Four => 4,
        }
    }

    /// Map a stored floor number back to a floor.
    ///
    /// Anything outside `0..=3` lands on the last floor.
    pub fn from_number(number: i64) -> Self {
        match number {
            0 => Floor::Zero,
            1 => Floor::One,
            2 => Floor::Two,
            3 => Floor::Three,
            _ => Floor::Four,
        }
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Whether the player can keep going after taking damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Health {
    /// Hit points remain.
    Standing,
    /// Hit points reached zero or below.
    Depleted,
}

/// The player's progress through the lift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    floor: Floor,
    hp: i32,
    inventory: Vec<String>,
    flags: BTreeMap<String, bool>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerState {
    /// A fresh player on floor 0 with full hit points and empty pockets.
    pub fn new() -> Self {
        Self {
            floor: Floor::Zero,
            hp: STARTING_HP,
            inventory: Vec::new(),
            flags: BTreeMap::new(),
        }
    }

    /// Rebuild a player from stored parts. Duplicate items are dropped.
    pub fn from_parts(
        floor: Floor,
        hp: i32,
        inventory: impl IntoIterator<Item = String>,
        flags: BTreeMap<String, bool>,
    ) -> Self {
        let mut state = Self {
            floor,
            hp,
            inventory: Vec::new(),
            flags,
        };
        for item in inventory {
            state.add_item(item);
        }
        state
    }

    /// Place the player on a floor.
    pub fn at_floor(mut self, floor: Floor) -> Self {
        self.floor = floor;
        self
    }

    /// Set the hit points.
    pub fn with_hp(mut self, hp: i32) -> Self {
        self.hp = hp;
        self
    }

    /// Add an item to the inventory.
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.add_item(item);
        self
    }

    /// Set a flag.
    pub fn with_flag(mut self, key: impl Into<String>, value: bool) -> Self {
        self.set_flag(key, value);
        self
    }

    /// Current floor.
    pub fn floor(&self) -> Floor {
        self.floor
    }

    /// Move to another floor.
    pub fn set_floor(&mut self, floor: Floor) {
        self.floor = floor;
    }

    /// Remaining hit points. May be zero or negative after a fatal hit.
    pub fn hp(&self) -> i32 {
        self.hp
    }

    /// Items held, in the order they were obtained.
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    /// All flags that were ever set.
    pub fn flags(&self) -> &BTreeMap<String, bool> {
        &self.flags
    }

    /// Lose `amount` hit points.
    pub fn apply_damage(&mut self, amount: u32) -> Health {
        debug_assert!(amount > 0, "damage must be positive");
        let amount = i32::try_from(amount).unwrap_or(i32::MAX);
        self.hp = self.hp.saturating_sub(amount);
        if self.is_depleted() {
            Health::Depleted
        } else {
            Health::Standing
        }
    }

    /// Whether the hit points ran out.
    pub fn is_depleted(&self) -> bool {
        self.hp <= 0
    }

    /// Check if the player has an item.
    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|held| held == item)
    }

    /// Add an item to inventory. Returns `false` if it was already held.
    pub fn add_item(&mut self, item: impl Into<String>) -> bool {
        let item = item.into();
        if self.has_item(&item) {
            return false;
        }
        self.inventory.push(item);
        true
    }

    /// Read a flag. Unset flags read as `false`.
    pub fn flag(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    /// Set a flag, overwriting any previous value.
    pub fn set_flag(&mut self, key: impl Into<String>, value: bool) {
        self.flags.insert(key.into(), value);
    }
}
