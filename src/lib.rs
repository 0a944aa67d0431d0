//! Mancala-Rust: a Kalah engine with a minimax opponent.
//!
//! This crate implements the two-player pit-and-seed game on a 14-slot
//! board (six pits and one store per player), with a computer opponent
//! driven by alpha-beta search.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, search depths, and evaluation weights
//! - [`board`] - Pits, players, and the board value type
//! - [`rules`] - Sowing, capture, extra turns, and the end-of-game harvest
//! - [`eval`] - Static evaluation heuristic
//! - [`config`] - Difficulty tiers and AI settings
//! - [`search`] - Minimax with alpha-beta pruning
//! - [`session`] - Text game driver
//!
//! ## Example
//!
//! ```
//! use mancala_rust::board::Pit;
//! use mancala_rust::config::{AiConfig, Difficulty};
//! use mancala_rust::rules::GameState;
//! use mancala_rust::search::best_move;
//!
//! // Start a game and play a move
//! let mut game = GameState::new();
//! let report = game.play(Pit::C).unwrap();
//! assert!(report.extra_turn);
//!
//! // Ask the AI for the next move
//! let config = AiConfig::new(Difficulty::Medium);
//! let mut rng = fastrand::Rng::with_seed(1);
//! let pit = best_move(&game.board, game.turn, &config, &mut rng).unwrap();
//! println!("AI plays {pit}");
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod eval;
pub mod rules;
pub mod search;
pub mod session;
