//! Mancala-Rust: Kalah in the terminal.
//!
//! ## Usage
//!
//! - `mancala-rust` - Watch the AI play itself
//! - `mancala-rust play` - Play a game (see `--help` for modes)
//! - `mancala-rust rules` - Print the rules

use std::io;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};

use mancala_rust::board::Player;
use mancala_rust::config::{AiConfig, Difficulty};
use mancala_rust::session::{Mode, Session, RULES_TEXT};

/// Mancala-Rust: Kalah with a minimax opponent
#[derive(Parser)]
#[command(name = "mancala-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal
    Play {
        /// Who controls each side
        #[arg(long, value_enum, default_value_t = Mode::HumanVsAi)]
        mode: Mode,
        /// AI strength
        #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
        difficulty: Difficulty,
        /// Side the AI plays against a human (1 or 2)
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=2))]
        ai_player: u8,
        /// Seed for the AI's random moves
        #[arg(long)]
        seed: Option<u64>,
        /// Pause before each AI move, in milliseconds
        #[arg(long, default_value_t = 0)]
        delay_ms: u64,
    },
    /// Print the rules
    Rules,
    /// Let the AI play itself
    Demo {
        #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
        difficulty: Difficulty,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play {
            mode,
            difficulty,
            ai_player,
            seed,
            delay_ms,
        }) => {
            let ai_player = if ai_player == 1 {
                Player::Player1
            } else {
                Player::Player2
            };
            let session = Session::new(mode, AiConfig::new(difficulty))
                .with_ai_player(ai_player)
                .with_delay(Duration::from_millis(delay_ms));
            run_session(session, seed)
        }
        Some(Commands::Rules) => {
            println!("{RULES_TEXT}");
            Ok(())
        }
        Some(Commands::Demo { difficulty, seed }) => {
            let session = Session::new(Mode::AiVsAi, AiConfig::new(difficulty));
            run_session(session, seed)
        }
        None => {
            let session = Session::new(Mode::AiVsAi, AiConfig::default());
            run_session(session, None)
        }
    }
}

fn run_session(session: Session, seed: Option<u64>) -> anyhow::Result<()> {
    let mut session = match seed {
        Some(seed) => session.with_seed(seed),
        None => session,
    };
    println!("Welcome to Mancala!\n");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session
        .run(stdin.lock(), &mut stdout)
        .context("game aborted")?;
    Ok(())
}
