//! The interactive game loop.

use std::io::{self, BufRead, IsTerminal, Write};

use tracing::info;

use lift_fiction::{
    Event, FictionError, FictionResult, GameConfig, GameSession, JsonFileStore, Outcome,
    PlayerState, SaveStore,
};

use crate::console::Console;

/// Play on the terminal until an ending, a quit, or closed input.
pub fn run(config: &GameConfig) -> Result<(), String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let clear = config.clear_screen && stdout.is_terminal();

    let mut console = Console::new(stdin.lock(), stdout.lock(), clear);
    let store = JsonFileStore::new(&config.save_path);

    play(&mut console, store).map_err(|e| e.to_string())
}

/// Drive a session over any console and store.
pub fn play<R, W, S>(console: &mut Console<R, W>, store: S) -> FictionResult<()>
where
    R: BufRead,
    W: Write,
    S: SaveStore,
{
    console.clear()?;
    console.title()?;

    let Some(player) = choose_start(console, &store)? else {
        return Ok(());
    };
    let mut session = GameSession::resume(player, store);
    let mut recent: Vec<Event> = Vec::new();

    loop {
        console.clear()?;
        console.events(&recent)?;
        console.header(session.player())?;
        console.scene(session.scene(), session.player())?;

        let turn = loop {
            let Some(line) = console.read_line("> ")? else {
                // Closed input suspends the game like a quit.
                return Ok(());
            };
            match session.choose(&line) {
                Ok(turn) => break turn,
                Err(FictionError::InvalidChoice(_)) => {
                    console.invalid_choice()?;
                    console.menu(session.scene())?;
                }
                Err(e) => return Err(e),
            }
        };

        match turn.outcome {
            Outcome::Continue(_) if turn.events.contains(&Event::Saved) => {
                console.events(&turn.events)?;
                console.pause()?;
                recent.clear();
            }
            Outcome::Continue(_) => recent = turn.events,
            Outcome::Ended(_) => {
                console.events(&turn.events)?;
                console.pause()?;
                return Ok(());
            }
            Outcome::Quit => return Ok(()),
        }
    }
}

/// Offer to continue an existing save. `None` means the input closed.
fn choose_start<R, W, S>(
    console: &mut Console<R, W>,
    store: &S,
) -> FictionResult<Option<PlayerState>>
where
    R: BufRead,
    W: Write,
    S: SaveStore,
{
    let Some(saved) = store.load()? else {
        return Ok(Some(PlayerState::new()));
    };

    let Some(answer) = console.read_line("Found a save. Continue? (y/n): ")? else {
        return Ok(None);
    };
    if answer.trim().eq_ignore_ascii_case("y") {
        info!(floor = %saved.floor(), hp = saved.hp(), "save_resumed");
        Ok(Some(saved))
    } else {
        Ok(Some(PlayerState::new()))
    }
}
