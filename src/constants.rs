//! Constants for board geometry, search depths, and evaluation weights.
//!
//! The board is a 14-slot array laid out in sowing order, so the successor
//! of every slot is simply the next index (wrapping at the end):
//!
//! ```text
//! index: 0 1 2 3 4 5   6    7 8 9 10 11 12   13
//! slot:  A B C D E F Store1 L K J I  H  G  Store2
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of slots on the board (12 pits + 2 stores).
pub const SLOTS: usize = 14;

/// Pits per player.
pub const PITS_PER_SIDE: usize = 6;

/// Seeds placed in every pit at the start of a game.
pub const STARTING_SEEDS: u8 = 4;

/// Seeds on the board for the whole game.
pub const TOTAL_SEEDS: u32 = (2 * PITS_PER_SIDE) as u32 * STARTING_SEEDS as u32;

/// Index of Player 1's store.
pub const STORE1: usize = 6;

/// Index of Player 2's store.
pub const STORE2: usize = 13;

/// Sowing successor of each slot.
pub const NEXT_SLOT: [usize; SLOTS] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 0];

/// Pit directly across the board. Stores map to themselves and are never
/// used for capture.
pub const OPPOSITE_SLOT: [usize; SLOTS] = [12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0, 13];

// =============================================================================
// Search Parameters
// =============================================================================

/// Search depth for the Easy tier.
pub const DEPTH_EASY: u8 = 2;

/// Search depth for the Medium tier.
pub const DEPTH_MEDIUM: u8 = 4;

/// Search depth for the Hard tier.
pub const DEPTH_HARD: u8 = 6;

/// Probability that the Easy tier plays a random move instead of searching.
pub const RANDOM_OVERRIDE_PROB: f64 = 0.3;

// =============================================================================
// Evaluation Weights
// =============================================================================

/// Weight of the store difference.
pub const WEIGHT_STORE: f64 = 2.0;

/// Weight of the seeds-in-play difference.
pub const WEIGHT_SEEDS: f64 = 1.0;

/// Weight of the empty pit difference (opponent's minus own).
pub const WEIGHT_EMPTY: f64 = 0.5;

/// Per-rank bonus for each seed, rank 6 being the pit next to the store.
pub const WEIGHT_POSITION: f64 = 0.1;

/// Bonus for each own empty pit facing a non-empty opponent pit.
pub const WEIGHT_CAPTURE_THREAT: f64 = 0.5;
