//! Text game driver.
//!
//! Runs one game over any line-oriented input and output, so the same loop
//! serves the terminal and the tests. Human players type a pit letter on
//! their own side, or one of the commands below (case-insensitive):
//!
//! - `RULES` - Show the rules
//! - `HELP` - Show the pit labels
//! - `QUIT` - Leave the game
//!
//! ## Example
//!
//! ```
//! use mancala_rust::config::{AiConfig, Difficulty};
//! use mancala_rust::session::{Mode, Session};
//!
//! let mut session = Session::new(Mode::AiVsAi, AiConfig::new(Difficulty::Easy)).with_seed(3);
//! let mut out = Vec::new();
//! let outcome = session.run(std::io::empty(), &mut out).unwrap();
//! assert!(outcome.is_some());
//! ```

use std::io::{BufRead, Write};
use std::time::Duration;

use anyhow::Context;
use clap::ValueEnum;
use log::info;

use crate::board::{Pit, Player};
use crate::config::AiConfig;
use crate::rules::{GameState, MoveReport, Outcome};
use crate::search::best_move;

pub const RULES_TEXT: &str = "\
=== MANCALA RULES ===

Setup:
- Each player owns 6 pits and the store on their right.
- Every pit starts with 4 seeds; both stores start empty.
- Player 1 owns pits A-F and store 1, Player 2 owns pits G-L and store 2.

Playing:
1. On your turn pick a non-empty pit on your side.
2. Its seeds are sown one at a time counter-clockwise.
3. Your opponent's store is skipped while sowing.
4. Last seed in your own store: you move again.
5. Last seed in an empty pit of yours, opposite a loaded pit:
   that seed and everything opposite go to your store.

Game end:
- The game ends as soon as one side has no seeds.
- The other side's seeds go into that side's store.
- The fuller store wins.
";

pub const HELP_TEXT: &str = "\
Player 1's pits: A B C D E F   store: 1
Player 2's pits: G H I J K L   store: 2

Type RULES to show the rules, QUIT to leave.
";

/// Who controls each side.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Two humans share the keyboard
    #[value(name = "hvh")]
    HumanVsHuman,
    /// A human against the computer
    #[value(name = "hva")]
    HumanVsAi,
    /// The computer plays both sides
    #[value(name = "ava")]
    AiVsAi,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Mode::HumanVsHuman => "hvh",
            Mode::HumanVsAi => "hva",
            Mode::AiVsAi => "ava",
        };
        write!(f, "{name}")
    }
}

/// A line of human input, interpreted for the player to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(Pit),
    Rules,
    Help,
    Quit,
    /// Input that cannot be played; carries the message to show
    Invalid(String),
}

pub struct Session {
    game: GameState,
    mode: Mode,
    ai: AiConfig,
    /// Side the computer plays in `HumanVsAi`
    ai_player: Player,
    rng: fastrand::Rng,
    delay: Duration,
}

impl Session {
    pub fn new(mode: Mode, ai: AiConfig) -> Self {
        Self {
            game: GameState::new(),
            mode,
            ai,
            ai_player: Player::Player2,
            rng: fastrand::Rng::new(),
            delay: Duration::ZERO,
        }
    }

    /// Seed the AI's random source so games can be replayed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = fastrand::Rng::with_seed(seed);
        self
    }

    pub fn with_ai_player(mut self, player: Player) -> Self {
        self.ai_player = player;
        self
    }

    /// Pause before each computer move.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    fn is_ai_turn(&self) -> bool {
        match self.mode {
            Mode::HumanVsHuman => false,
            Mode::HumanVsAi => self.game.turn == self.ai_player,
            Mode::AiVsAi => true,
        }
    }

    /// Interpret one line of human input for the player to move.
    pub fn parse_command(&self, line: &str) -> Command {
        let response = line.trim().to_uppercase();
        match response.as_str() {
            "QUIT" => return Command::Quit,
            "RULES" => return Command::Rules,
            "HELP" => return Command::Help,
            _ => {}
        }

        let player = self.game.turn;
        match response.parse::<Pit>() {
            Ok(pit) if !pit.is_store() && pit.owner() == player => {
                if self.game.board[pit] == 0 {
                    Command::Invalid("Please pick a non-empty pit.".to_string())
                } else {
                    Command::Move(pit)
                }
            }
            _ => Command::Invalid("Please pick a letter on your side of the board.".to_string()),
        }
    }

    /// Play the game to the end.
    ///
    /// Returns the outcome, or `None` if a human quit or the input ran out.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        out: &mut W,
    ) -> anyhow::Result<Option<Outcome>> {
        let mut lines = input.lines();
        writeln!(out, "{}", self.game.board)?;

        while !self.game.is_over() {
            let pit = if self.is_ai_turn() {
                self.ai_move(out)?
            } else {
                match self.ask_for_move(&mut lines, out)? {
                    Some(pit) => pit,
                    None => return Ok(None),
                }
            };

            let report = self
                .game
                .play(pit)
                .with_context(|| format!("move {pit} was refused"))?;
            self.narrate(&report, out)?;
            writeln!(out, "{}", self.game.board)?;
        }

        let outcome = self.game.outcome;
        if let Some(outcome) = outcome {
            let board = &self.game.board;
            let (s1, s2) = (board.store(Player::Player1), board.store(Player::Player2));
            match outcome {
                Outcome::Tie => writeln!(out, "Game Over - It's a tie! ({s1} - {s2})")?,
                Outcome::Winner(player) => {
                    writeln!(out, "Game Over - {player} wins! ({s1} - {s2})")?
                }
            }
            info!("game over after {} moves: {outcome} ({s1} - {s2})", self.game.n);
        }
        Ok(outcome)
    }

    fn ai_move<W: Write>(&mut self, out: &mut W) -> anyhow::Result<Pit> {
        let player = self.game.turn;
        writeln!(out, "{player} (AI) is thinking...")?;
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        let pit = best_move(&self.game.board, player, &self.ai, &mut self.rng)?;
        writeln!(out, "{player} (AI) chooses pit {pit}")?;
        info!("{player} ({}) plays {pit}", self.ai.difficulty);
        Ok(pit)
    }

    /// Prompt until the human enters a playable pit. `None` means quit.
    fn ask_for_move<I, W>(&mut self, lines: &mut I, out: &mut W) -> anyhow::Result<Option<Pit>>
    where
        I: Iterator<Item = std::io::Result<String>>,
        W: Write,
    {
        let player = self.game.turn;
        let pits = player.pits();
        loop {
            writeln!(
                out,
                "{player}, choose move: {}-{} (or QUIT)",
                pits[0],
                pits[pits.len() - 1]
            )?;
            write!(out, "> ")?;
            out.flush()?;

            let Some(line) = lines.next() else {
                return Ok(None);
            };
            let line = line.context("failed to read move")?;

            match self.parse_command(&line) {
                Command::Move(pit) => return Ok(Some(pit)),
                Command::Quit => {
                    writeln!(out, "Thanks for playing!")?;
                    return Ok(None);
                }
                Command::Rules => writeln!(out, "{RULES_TEXT}")?,
                Command::Help => writeln!(out, "{HELP_TEXT}")?,
                Command::Invalid(msg) => writeln!(out, "{msg}")?,
            }
        }
    }

    fn narrate<W: Write>(&self, report: &MoveReport, out: &mut W) -> std::io::Result<()> {
        if report.captured > 0 {
            writeln!(
                out,
                "{} captures {} seeds from pit {}!",
                report.player,
                report.captured,
                report.landing.opposite().unwrap_or(report.landing)
            )?;
        }
        if report.extra_turn && report.outcome.is_none() {
            writeln!(out, "{} lands in the store and moves again.", report.player)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::config::Difficulty;
    use crate::constants::TOTAL_SEEDS;
    use std::io::Cursor;

    fn human_session() -> Session {
        Session::new(Mode::HumanVsHuman, AiConfig::default())
    }

    #[test]
    fn test_parse_commands() {
        let session = human_session();
        assert_eq!(session.parse_command("quit"), Command::Quit);
        assert_eq!(session.parse_command(" Rules "), Command::Rules);
        assert_eq!(session.parse_command("help"), Command::Help);
        assert_eq!(session.parse_command("c"), Command::Move(Pit::C));
    }

    #[test]
    fn test_parse_rejects_wrong_side() {
        let session = human_session();
        for input in ["G", "1", "2", "Z", "", "AB"] {
            assert!(matches!(session.parse_command(input), Command::Invalid(_)), "{input}");
        }
    }

    #[test]
    fn test_parse_rejects_empty_pit() {
        let mut session = human_session();
        session.game = GameState::from_board(Board::new().with(&[(Pit::B, 0)]), Player::Player1);
        assert_eq!(
            session.parse_command("B"),
            Command::Invalid("Please pick a non-empty pit.".to_string())
        );
    }

    #[test]
    fn test_quit() {
        let mut session = human_session();
        let mut out = Vec::new();
        let outcome = session.run(Cursor::new("rules\nquit\n"), &mut out).unwrap();
        assert_eq!(outcome, None);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("=== MANCALA RULES ==="));
        assert!(text.contains("Thanks for playing!"));
    }

    #[test]
    fn test_human_moves_and_reprompt() {
        let mut session = human_session();
        let mut out = Vec::new();
        // G is not Player 1's; C lands in the store; A passes the turn
        let outcome = session.run(Cursor::new("G\nC\nA\n"), &mut out).unwrap();
        assert_eq!(outcome, None);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Please pick a letter on your side of the board."));
        assert!(text.contains("Player 1 lands in the store and moves again."));
        assert!(text.contains("Player 2, choose move: G-L (or QUIT)"));
        assert_eq!(session.game().n, 2);
        assert_eq!(session.game().turn, Player::Player2);
    }

    #[test]
    fn test_human_against_ai() {
        let config = AiConfig::new(Difficulty::Medium);
        let mut session = Session::new(Mode::HumanVsAi, config).with_seed(5);
        let mut out = Vec::new();
        // Player 1 plays A, the AI answers, then the input runs out
        let outcome = session.run(Cursor::new("A\n"), &mut out).unwrap();
        assert_eq!(outcome, None);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Player 2 (AI) chooses pit"));
        assert_eq!(session.game().turn, Player::Player1);
    }

    #[test]
    fn test_ai_vs_ai_finishes() {
        let config = AiConfig::new(Difficulty::Easy);
        let mut session = Session::new(Mode::AiVsAi, config).with_seed(11);
        let mut out = Vec::new();
        let outcome = session.run(std::io::empty(), &mut out).unwrap();
        assert!(outcome.is_some());
        let board = &session.game().board;
        assert_eq!(board.total(), TOTAL_SEEDS);
        assert_eq!(
            board.store(Player::Player1) + board.store(Player::Player2),
            TOTAL_SEEDS
        );
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Game Over"));
    }
}
