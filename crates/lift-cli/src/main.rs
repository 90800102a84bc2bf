//! Console frontend for The Lift That Lies.

mod console;
mod play;

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lift_fiction::GameConfig;
use lift_fiction::config::DEFAULT_SAVE_PATH;

#[derive(Parser)]
#[command(
    name = "lift",
    about = "The Lift That Lies: a short text adventure in an elevator that lies",
    version
)]
struct Cli {
    /// Save file location
    #[arg(long, value_name = "PATH", default_value = DEFAULT_SAVE_PATH)]
    save: PathBuf,

    /// Keep previous output instead of clearing the screen between scenes
    #[arg(long)]
    no_clear: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let config = GameConfig::default()
        .with_save_path(cli.save)
        .with_clear_screen(!cli.no_clear);

    if let Err(e) = play::run(&config) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Log to stderr so the story on stdout stays clean. `RUST_LOG` overrides.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}
