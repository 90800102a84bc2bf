//! Scene session management.
//!
//! `GameSession` owns the player and the save store. The caller shows
//! [`GameSession::scene`], feeds the typed answer to
//! [`GameSession::choose`], and renders the returned [`Turn`].

use tracing::{debug, info};

use crate::choice::{Action, Scene, apply_effects};
use crate::error::{FictionError, FictionResult};
use crate::outcome::{Ending, Event, Outcome, Turn};
use crate::player::PlayerState;
use crate::save::SaveStore;
use crate::story;

/// A single run through the lift.
pub struct GameSession<S> {
    player: PlayerState,
    store: S,
    finished: bool,
}

impl<S: SaveStore> GameSession<S> {
    /// Start a fresh run on floor 0.
    pub fn new(store: S) -> Self {
        Self::resume(PlayerState::new(), store)
    }

    /// Continue from a previously saved player.
    pub fn resume(player: PlayerState, store: S) -> Self {
        Self {
            player,
            store,
            finished: false,
        }
    }

    /// Get the player state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Get the save store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The scene for the player's current floor.
    pub fn scene(&self) -> &'static Scene {
        story::scene_for(self.player.floor())
    }

    /// Whether an ending was reached or the player quit.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Take one choice of the current scene.
    ///
    /// The input is trimmed and lowercased before matching. An unknown key
    /// leaves the player untouched and returns
    /// [`FictionError::InvalidChoice`].
    pub fn choose(&mut self, input: &str) -> FictionResult<Turn> {
        if self.finished {
            return Err(FictionError::SessionOver);
        }

        let key = input.trim().to_lowercase();
        let scene = self.scene();
        let option = scene
            .option(&key)
            .ok_or_else(|| FictionError::InvalidChoice(key.clone()))?;
        debug!(floor = %scene.floor, key = option.key, "choice_accepted");

        match option.action {
            Action::Save => {
                self.store.save(&self.player)?;
                Ok(Turn {
                    events: vec![Event::Saved],
                    outcome: Outcome::Continue(self.player.floor()),
                })
            }
            Action::Quit => {
                self.finished = true;
                debug!(floor = %scene.floor, "session_quit");
                Ok(Turn {
                    events: Vec::new(),
                    outcome: Outcome::Quit,
                })
            }
            Action::Effects(effects) => {
                let mut events = Vec::new();
                match apply_effects(effects, &mut self.player, &mut events) {
                    Some(ending) => self.finish(ending, events),
                    None => {
                        debug!(
                            floor = %self.player.floor(),
                            hp = self.player.hp(),
                            "scene_entered"
                        );
                        Ok(Turn {
                            events,
                            outcome: Outcome::Continue(self.player.floor()),
                        })
                    }
                }
            }
        }
    }

    fn finish(&mut self, ending: Ending, mut events: Vec<Event>) -> FictionResult<Turn> {
        self.finished = true;
        if let Some(epilogue) = ending.epilogue() {
            events.push(Event::Narration(epilogue));
        }
        events.push(Event::Ended(ending));

        self.store.erase()?;
        info!(?ending, floor = %self.player.floor(), "story_ended");

        Ok(Turn {
            events,
            outcome: Outcome::Ended(ending),
        })
    }

    /// Hand back the player and the store.
    pub fn into_parts(self) -> (PlayerState, S) {
        (self.player, self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{Floor, STARTING_HP};
    use crate::save::MemoryStore;
    use crate::story::{flag, item};

    fn session_with(player: PlayerState) -> GameSession<MemoryStore> {
        let mut store = MemoryStore::new();
        store.save(&player).unwrap();
        GameSession::resume(player, store)
    }

    #[test]
    fn fresh_session() {
        let session = GameSession::new(MemoryStore::new());
        assert_eq!(session.player(), &PlayerState::new());
        assert_eq!(session.scene().floor, Floor::Zero);
        assert!(!session.is_finished());
    }

    #[test]
    fn try_zero_goes_to_floor_two() {
        let mut session = GameSession::new(MemoryStore::new());
        let turn = session.choose("3").unwrap();

        assert_eq!(turn.outcome, Outcome::Continue(Floor::Two));
        assert_eq!(session.player().floor(), Floor::Two);
        assert_eq!(session.player().hp(), STARTING_HP);
        assert!(session.player().inventory().is_empty());
    }

    #[test]
    fn hidden_panel_gives_screwdriver() {
        let mut session = GameSession::new(MemoryStore::new());
        let turn = session.choose("1").unwrap();

        assert_eq!(turn.events, vec![Event::Obtained(item::SCREWDRIVER)]);
        assert!(session.player().flag(flag::PANEL_FOUND));
        assert_eq!(session.player().floor(), Floor::One);
    }

    #[test]
    fn random_code_bites() {
        let mut session = GameSession::new(MemoryStore::new());
        session.choose("2").unwrap();
        assert_eq!(session.player().hp(), 2);
        assert_eq!(session.player().floor(), Floor::One);
    }

    #[test]
    fn truth_on_floor_one() {
        let mut session = session_with(PlayerState::new().at_floor(Floor::One));
        session.choose("t").unwrap();
        assert!(session.player().flag(flag::TRUTH_1));
        assert_eq!(session.player().floor(), Floor::Three);
    }

    #[test]
    fn lie_on_floor_one_stays() {
        let mut session = session_with(PlayerState::new().at_floor(Floor::One));
        let turn = session.choose("l").unwrap();
        assert_eq!(turn.outcome, Outcome::Continue(Floor::One));
        assert_eq!(session.player().hp(), 2);
    }

    #[test]
    fn break_mirror() {
        let mut session = session_with(PlayerState::new().at_floor(Floor::One));
        let turn = session.choose("b").unwrap();
        assert_eq!(
            turn.events,
            vec![
                Event::Obtained(item::GLASS_SHARD),
                Event::Damaged {
                    amount: 1,
                    reason: "You cut your hand.",
                },
            ]
        );
        assert_eq!(session.player().floor(), Floor::Three);
        assert_eq!(session.player().hp(), 2);
    }

    #[test]
    fn pry_tile_with_screwdriver() {
        let mut session = session_with(
            PlayerState::new()
                .at_floor(Floor::Two)
                .with_item(item::SCREWDRIVER),
        );
        session.choose("p").unwrap();
        assert!(session.player().has_item(item::COIN));
        assert_eq!(session.player().hp(), STARTING_HP);
        assert_eq!(session.player().floor(), Floor::Two);
    }

    #[test]
    fn pry_tile_bare_handed_hurts() {
        let mut session = session_with(PlayerState::new().at_floor(Floor::Two));
        session.choose("p").unwrap();
        assert!(!session.player().has_item(item::COIN));
        assert_eq!(session.player().hp(), 2);
    }

    #[test]
    fn pry_tile_twice_keeps_one_coin() {
        let mut session = session_with(
            PlayerState::new()
                .at_floor(Floor::Two)
                .with_item(item::GLASS_SHARD),
        );
        session.choose("p").unwrap();
        let turn = session.choose("p").unwrap();
        assert!(!turn.events.contains(&Event::Obtained(item::COIN)));
        assert_eq!(
            session
                .player()
                .inventory()
                .iter()
                .filter(|i| *i == item::COIN)
                .count(),
            1
        );
    }

    #[test]
    fn wrong_riddle_answer() {
        let mut session = session_with(PlayerState::new().at_floor(Floor::Three));
        session.choose("f").unwrap();
        assert_eq!(session.player().hp(), 2);
        assert_eq!(session.player().floor(), Floor::One);
    }

    #[test]
    fn right_riddle_answer() {
        let mut session = session_with(PlayerState::new().at_floor(Floor::Three));
        session.choose("E").unwrap();
        assert!(session.player().has_item(item::KEYCARD));
        assert!(session.player().flag(flag::RIDDLE_OK));
        assert_eq!(session.player().floor(), Floor::Four);
    }

    #[test]
    fn keycard_and_coin_escape() {
        let mut session = session_with(
            PlayerState::new()
                .at_floor(Floor::Four)
                .with_item(item::KEYCARD)
                .with_item(item::COIN),
        );
        assert!(session.store().is_saved());

        let turn = session.choose("u").unwrap();

        assert_eq!(turn.outcome, Outcome::Ended(Ending::Escaped));
        assert_eq!(turn.events.last(), Some(&Event::Ended(Ending::Escaped)));
        assert!(!session.store().is_saved());
        assert!(session.is_finished());
    }

    #[test]
    fn keycard_and_truth_escape() {
        let mut session = session_with(
            PlayerState::new()
                .at_floor(Floor::Four)
                .with_item(item::KEYCARD)
                .with_flag(flag::TRUTH_1, true),
        );
        let turn = session.choose("u").unwrap();
        assert_eq!(turn.outcome, Outcome::Ended(Ending::Escaped));
    }

    #[test]
    fn keycard_alone_burns() {
        let mut session = session_with(
            PlayerState::new()
                .at_floor(Floor::Four)
                .with_item(item::KEYCARD),
        );
        let turn = session.choose("u").unwrap();
        assert_eq!(turn.outcome, Outcome::Continue(Floor::Four));
        assert_eq!(session.player().hp(), 2);
        assert!(session.store().is_saved());
    }

    #[test]
    fn no_keycard_changes_nothing() {
        let before = PlayerState::new().at_floor(Floor::Four).with_item(item::COIN);
        let mut session = session_with(before.clone());
        let turn = session.choose("u").unwrap();
        assert_eq!(
            turn.events,
            vec![Event::Narration("You don\u{2019}t have a keycard.")]
        );
        assert_eq!(session.player(), &before);
    }

    #[test]
    fn offering_coin_keeps_it() {
        let mut session = session_with(PlayerState::new().at_floor(Floor::Four).with_item(item::COIN));
        session.choose("o").unwrap();
        assert!(session.player().flag(flag::PAID));
        assert!(session.player().has_item(item::COIN));
    }

    #[test]
    fn offering_nothing() {
        let before = PlayerState::new().at_floor(Floor::Four);
        let mut session = session_with(before.clone());
        let turn = session.choose("o").unwrap();
        assert_eq!(turn.events, vec![Event::Narration("No coin to offer.")]);
        assert_eq!(session.player(), &before);
    }

    #[test]
    fn paid_flag_does_not_open_the_door() {
        let mut session = session_with(
            PlayerState::new()
                .at_floor(Floor::Four)
                .with_item(item::KEYCARD)
                .with_flag(flag::PAID, true),
        );
        let turn = session.choose("u").unwrap();
        assert_eq!(turn.outcome, Outcome::Continue(Floor::Four));
    }

    #[test]
    fn truth_releases_empty_handed() {
        let mut session = session_with(PlayerState::new().at_floor(Floor::Four));
        let turn = session.choose("t").unwrap();
        assert_eq!(turn.outcome, Outcome::Ended(Ending::ReleasedByTruth));
        assert!(!session.store().is_saved());
    }

    #[test]
    fn last_hit_point_is_fatal() {
        let mut session = session_with(PlayerState::new().at_floor(Floor::Two).with_hp(1));
        let turn = session.choose("k").unwrap();

        assert_eq!(turn.outcome, Outcome::Ended(Ending::Dead));
        assert_eq!(
            &turn.events[turn.events.len() - 2..],
            [
                Event::Narration(Ending::Dead.epilogue().unwrap()),
                Event::Ended(Ending::Dead),
            ]
        );
        assert!(!session.store().is_saved());
        assert!(matches!(
            session.choose("k"),
            Err(FictionError::SessionOver)
        ));
    }

    #[test]
    fn fatal_hit_skips_the_move() {
        let mut session = session_with(PlayerState::new().at_floor(Floor::Three).with_hp(1));
        session.choose("f").unwrap();
        assert_eq!(session.player().floor(), Floor::Three);
        assert_eq!(session.player().hp(), 0);
    }

    #[test]
    fn invalid_choice_changes_nothing() {
        let before = PlayerState::new().at_floor(Floor::Two).with_item(item::COIN);
        let mut session = session_with(before.clone());

        for input in ["x", "", "pry", "1", "u"] {
            assert!(matches!(
                session.choose(input),
                Err(FictionError::InvalidChoice(_))
            ));
        }
        assert_eq!(session.player(), &before);
        assert!(!session.is_finished());
    }

    #[test]
    fn input_is_trimmed_and_lowercased() {
        let mut session = session_with(PlayerState::new().at_floor(Floor::One));
        session.choose("  T \n").unwrap();
        assert_eq!(session.player().floor(), Floor::Three);
    }

    #[test]
    fn save_keeps_state_and_scene() {
        let mut session = GameSession::new(MemoryStore::new());
        session.choose("3").unwrap();
        let before = session.player().clone();

        let turn = session.choose("s").unwrap();

        assert_eq!(turn.events, vec![Event::Saved]);
        assert_eq!(turn.outcome, Outcome::Continue(Floor::Two));
        assert_eq!(session.player(), &before);
        assert_eq!(session.store().load().unwrap(), Some(before));
    }

    #[test]
    fn quit_leaves_the_save_alone() {
        let saved = PlayerState::new().at_floor(Floor::Three);
        let mut session = session_with(saved.clone());
        session.choose("e").unwrap();

        let turn = session.choose("q").unwrap();

        assert_eq!(turn.outcome, Outcome::Quit);
        assert!(session.is_finished());
        let (_, store) = session.into_parts();
        assert_eq!(store.load().unwrap(), Some(saved));
    }

    #[test]
    fn borrowed_store() {
        let mut store = MemoryStore::new();
        {
            let mut session = GameSession::new(&mut store);
            session.choose("s").unwrap();
        }
        assert!(store.is_saved());
    }
}
