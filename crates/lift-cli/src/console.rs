//! Line-based terminal I/O: rendering scenes and reading answers.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use lift_fiction::choice::Scene;
use lift_fiction::{Event, PlayerState};

const TITLE: &str = "THE LIFT THAT LIES";
const RULE_WIDTH: usize = 54;

/// A console that reads answers from `input` and writes to `output`.
pub struct Console<R, W> {
    input: R,
    output: W,
    clear: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wrap `input` and `output`. `clear` enables screen wipes.
    pub fn new(input: R, output: W, clear: bool) -> Self {
        Self {
            input,
            output,
            clear,
        }
    }

    /// Wipe the terminal, if clearing is enabled.
    pub fn clear(&mut self) -> io::Result<()> {
        if self.clear {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    /// The game title, shown once at startup.
    pub fn title(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}\n", TITLE.bold())
    }

    /// Show `prompt` and read one line. `None` means the input is closed.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Wait for Enter before the screen moves on.
    pub fn pause(&mut self) -> io::Result<()> {
        self.read_line("Press Enter...").map(drop)
    }

    /// Status bar with floor, hit points, and inventory.
    pub fn header(&mut self, player: &PlayerState) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.output, "{rule}")?;
        writeln!(
            self.output,
            "{}  |  Floor: {}  HP: {}  Inv: [{}]",
            TITLE.bold(),
            player.floor(),
            player.hp(),
            player.inventory().join(", ")
        )?;
        writeln!(self.output, "{rule}")
    }

    /// Intro lines and notes, then the menu.
    pub fn scene(&mut self, scene: &Scene, player: &PlayerState) -> io::Result<()> {
        for line in scene.describe(player) {
            writeln!(self.output, "{line}")?;
        }
        writeln!(self.output)?;
        self.menu(scene)
    }

    /// The scene prompt and its keyed options.
    pub fn menu(&mut self, scene: &Scene) -> io::Result<()> {
        writeln!(self.output, "{}", scene.prompt)?;
        for option in scene.options {
            writeln!(self.output, "  [{}] {}", option.key, option.label)?;
        }
        Ok(())
    }

    /// Warn that the last answer matched no option.
    pub fn invalid_choice(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}\n", "Invalid choice. Try again.".yellow())
    }

    /// Messages from a turn, colored by kind.
    pub fn events(&mut self, events: &[Event]) -> io::Result<()> {
        if events.is_empty() {
            return Ok(());
        }
        writeln!(self.output)?;
        for event in events {
            let text = event.to_string();
            match event {
                Event::Narration(_) => writeln!(self.output, "{text}")?,
                Event::Damaged { .. } => writeln!(self.output, "{}", text.red())?,
                Event::Obtained(_) => writeln!(self.output, "{}", text.green())?,
                Event::Saved => writeln!(self.output, "{}", text.cyan())?,
                Event::Ended(_) => writeln!(self.output, "{}\n", text.bold())?,
            }
        }
        writeln!(self.output)
    }

    /// Give back the output, for inspection.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
