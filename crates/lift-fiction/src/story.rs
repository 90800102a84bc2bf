//! The floor-by-floor transition table.
//!
//! Every floor has exactly one [`Scene`]. Each scene ends its menu with the
//! same save and quit entries; everything else is a list of effects.

use crate::choice::{Action, Condition, Effect, Note, Scene, SceneOption};
use crate::outcome::Ending;
use crate::player::Floor;

/// Item names.
pub mod item {
    /// Found behind the hidden panel on floor 0.
    pub const SCREWDRIVER: &str = "small screwdriver";
    /// Taken from the mirror on floor 1.
    pub const GLASS_SHARD: &str = "glass shard";
    /// Pried out from under the tile on floor 2.
    pub const COIN: &str = "coin";
    /// The riddle's reward on floor 3.
    pub const KEYCARD: &str = "keycard";
}

/// Flag names.
pub mod flag {
    /// The hidden panel on floor 0 was opened.
    pub const PANEL_FOUND: &str = "panel_found";
    /// The player told the truth on floor 1.
    pub const TRUTH_1: &str = "truth_1";
    /// The riddle on floor 3 was solved.
    pub const RIDDLE_OK: &str = "riddle_ok";
    /// The coin was offered on floor 4. Nothing reads it.
    pub const PAID: &str = "paid";
}

const SAVE: SceneOption = SceneOption {
    key: "s",
    label: "Save",
    action: Action::Save,
};

const QUIT: SceneOption = SceneOption {
    key: "q",
    label: "Quit",
    action: Action::Quit,
};

const HAS_KEYCARD: Condition = Condition::HasItem {
    item: item::KEYCARD,
};

const HAS_COIN: Condition = Condition::HasItem { item: item::COIN };

const CAN_PRY: Condition = Condition::Any(&[
    Condition::HasItem {
        item: item::SCREWDRIVER,
    },
    Condition::HasItem {
        item: item::GLASS_SHARD,
    },
]);

const CAN_EXIT: Condition = Condition::All(&[
    HAS_KEYCARD,
    Condition::Any(&[HAS_COIN, Condition::FlagSet { key: flag::TRUTH_1 }]),
]);

static SCENES: [Scene; 5] = [
    Scene {
        floor: Floor::Zero,
        intro: &[
            "You wake up in a silent lift. No buttons. Only a keypad (0-9).",
            "A tiny speaker whispers: 'Choose a floor. Choose wrong, repeat.'",
        ],
        notes: &[],
        prompt: "What do you do?",
        options: &[
            SceneOption {
                key: "1",
                label: "Look for a hidden panel",
                action: Action::Effects(&[
                    Effect::GiveItem {
                        item: item::SCREWDRIVER,
                    },
                    Effect::SetFlag {
                        key: flag::PANEL_FOUND,
                        value: true,
                    },
                    Effect::MoveTo { floor: Floor::One },
                ]),
            },
            SceneOption {
                key: "2",
                label: "Punch random floor code (e.g., 7)",
                action: Action::Effects(&[
                    Effect::Damage {
                        amount: 1,
                        reason: "The lift jolts and bites your fingers (yes, bites).",
                    },
                    Effect::MoveTo { floor: Floor::One },
                ]),
            },
            SceneOption {
                key: "3",
                label: "Try '0' (ground?)",
                action: Action::Effects(&[Effect::MoveTo { floor: Floor::Two }]),
            },
            SAVE,
            QUIT,
        ],
    },
    Scene {
        floor: Floor::One,
        intro: &[
            "Floor 1: The lights flicker. A note is taped to the mirror:",
            "'TRUTH OPENS DOORS. LIES OPEN TRAPS.'",
        ],
        notes: &[],
        prompt: "The lift door is locked. There\u{2019}s a voice prompt:",
        options: &[
            SceneOption {
                key: "t",
                label: "Say: 'I am afraid.' (truth)",
                action: Action::Effects(&[
                    Effect::Say {
                        text: "The lock clicks. The lift seems\u{2026} disappointed.",
                    },
                    Effect::SetFlag {
                        key: flag::TRUTH_1,
                        value: true,
                    },
                    Effect::MoveTo { floor: Floor::Three },
                ]),
            },
            SceneOption {
                key: "l",
                label: "Say: 'I am in control.' (lie)",
                action: Action::Effects(&[
                    Effect::Say {
                        text: "The keypad flashes red. A thin gas hisses out.",
                    },
                    Effect::Damage {
                        amount: 1,
                        reason: "You inhale panic.",
                    },
                    Effect::MoveTo { floor: Floor::One },
                ]),
            },
            SceneOption {
                key: "b",
                label: "Break mirror for something sharp",
                action: Action::Effects(&[
                    Effect::GiveItem {
                        item: item::GLASS_SHARD,
                    },
                    Effect::Damage {
                        amount: 1,
                        reason: "You cut your hand.",
                    },
                    Effect::MoveTo { floor: Floor::Three },
                ]),
            },
            SAVE,
            QUIT,
        ],
    },
    Scene {
        floor: Floor::Two,
        intro: &[
            "Floor 2: The lift plays a cheerful jingle. Too cheerful.",
            "A slot opens: 'PAYMENT REQUIRED'.",
        ],
        notes: &[Note {
            when: Condition::Not(&HAS_COIN),
            text: "You notice a loose tile in the corner.",
        }],
        prompt: "What now?",
        options: &[
            SceneOption {
                key: "p",
                label: "Pry the loose tile",
                action: Action::Effects(&[Effect::Branch {
                    when: CAN_PRY,
                    then: &[
                        Effect::GiveItem { item: item::COIN },
                        Effect::Say {
                            text: "The slot now expects payment.",
                        },
                    ],
                    otherwise: &[Effect::Damage {
                        amount: 1,
                        reason: "You strain your fingers pulling the tile.",
                    }],
                }]),
            },
            SceneOption {
                key: "k",
                label: "Kick the slot",
                action: Action::Effects(&[Effect::Damage {
                    amount: 1,
                    reason: "The slot shocks you for disrespect.",
                }]),
            },
            SceneOption {
                key: "0",
                label: "Try the '0' code again",
                action: Action::Effects(&[Effect::MoveTo { floor: Floor::Four }]),
            },
            SAVE,
            QUIT,
        ],
    },
    Scene {
        floor: Floor::Three,
        intro: &[
            "Floor 3: A keypad asks a riddle:",
            "  'I speak without a mouth and hear without ears.'",
            "  'I have no body, but I come alive with wind.'",
        ],
        notes: &[],
        prompt: "Answer?",
        options: &[
            SceneOption {
                key: "e",
                label: "echo",
                action: Action::Effects(&[
                    Effect::Say {
                        text: "Correct. The lift purrs. A panel slides open.",
                    },
                    Effect::GiveItem {
                        item: item::KEYCARD,
                    },
                    Effect::SetFlag {
                        key: flag::RIDDLE_OK,
                        value: true,
                    },
                    Effect::MoveTo { floor: Floor::Four },
                ]),
            },
            SceneOption {
                key: "f",
                label: "fire",
                action: Action::Effects(&[
                    Effect::Damage {
                        amount: 1,
                        reason: "Wrong. The lift screams (somehow).",
                    },
                    Effect::MoveTo { floor: Floor::One },
                ]),
            },
            SAVE,
            QUIT,
        ],
    },
    Scene {
        floor: Floor::Four,
        intro: &[
            "Floor 4: A final door. It has a keycard reader and a message:",
            "'ONLY THOSE WHO PAID MAY LEAVE.'",
        ],
        notes: &[],
        prompt: "What do you do?",
        options: &[
            SceneOption {
                key: "u",
                label: "Use keycard",
                action: Action::Effects(&[Effect::Branch {
                    when: HAS_KEYCARD,
                    then: &[Effect::Branch {
                        when: CAN_EXIT,
                        then: &[
                            Effect::Say {
                                text: "The door opens. Cold air. Real air.",
                            },
                            Effect::End {
                                ending: Ending::Escaped,
                            },
                        ],
                        otherwise: &[
                            Effect::Say {
                                text: "Denied. The building wants one more thing.",
                            },
                            Effect::Damage {
                                amount: 1,
                                reason: "The reader burns your thumb.",
                            },
                        ],
                    }],
                    otherwise: &[Effect::Say {
                        text: "You don\u{2019}t have a keycard.",
                    }],
                }]),
            },
            SceneOption {
                key: "o",
                label: "Offer coin",
                action: Action::Effects(&[Effect::Branch {
                    when: HAS_COIN,
                    then: &[
                        Effect::Say {
                            text: "The slot accepts it. A green light appears.",
                        },
                        Effect::SetFlag {
                            key: flag::PAID,
                            value: true,
                        },
                    ],
                    otherwise: &[Effect::Say {
                        text: "No coin to offer.",
                    }],
                }]),
            },
            SceneOption {
                key: "t",
                label: "Tell the truth: 'I don\u{2019}t know if I deserve to leave.'",
                action: Action::Effects(&[
                    Effect::Say {
                        text: "The speaker goes quiet. Then: 'Accepted.'",
                    },
                    Effect::End {
                        ending: Ending::ReleasedByTruth,
                    },
                ]),
            },
            SAVE,
            QUIT,
        ],
    },
];

/// The scene played on `floor`.
pub fn scene_for(floor: Floor) -> &'static Scene {
    &SCENES[usize::from(floor.number())]
}

/// Every scene, bottom floor first.
pub fn scenes() -> &'static [Scene] {
    &SCENES
}
