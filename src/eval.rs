//! Static evaluation of a board.
//!
//! The score is built from five terms, all signed from the point of view
//! of one player:
//!
//! - store difference
//! - seeds-in-play difference
//! - opponent's empty pits minus own empty pits
//! - positional bonus for own seeds near the own store
//! - capture threats: own empty pits facing a loaded opponent pit
//!
//! The last two terms only look at the evaluating player's side, so
//! `evaluate(b, P1)` is not simply `-evaluate(b, P2)`.

use crate::board::{Board, Player};
use crate::constants::{
    WEIGHT_CAPTURE_THREAT, WEIGHT_EMPTY, WEIGHT_POSITION, WEIGHT_SEEDS, WEIGHT_STORE,
};

/// Weights for the evaluation terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalWeights {
    pub store: f64,
    pub seeds: f64,
    pub empty_pits: f64,
    pub position: f64,
    pub capture_threat: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            store: WEIGHT_STORE,
            seeds: WEIGHT_SEEDS,
            empty_pits: WEIGHT_EMPTY,
            position: WEIGHT_POSITION,
            capture_threat: WEIGHT_CAPTURE_THREAT,
        }
    }
}

/// Evaluate `board` from `player`'s point of view. Higher is better for `player`.
pub fn evaluate(board: &Board, player: Player, weights: &EvalWeights) -> f64 {
    let opponent = player.opponent();

    let store = board.store(player) as f64 - board.store(opponent) as f64;
    let seeds = board.side_total(player) as f64 - board.side_total(opponent) as f64;
    let empty = board.empty_pits(opponent) as f64 - board.empty_pits(player) as f64;

    let mut score = store * weights.store + seeds * weights.seeds + empty * weights.empty_pits;
    score += position_bonus(board, player, weights.position);
    score += capture_threats(board, player) as f64 * weights.capture_threat;
    score
}

/// Seeds weighted by rank 1..6, rank 6 being the pit next to the store.
fn position_bonus(board: &Board, player: Player, weight: f64) -> f64 {
    player
        .pits_toward_store()
        .iter()
        .enumerate()
        .map(|(i, &pit)| board[pit] as f64 * (i + 1) as f64 * weight)
        .sum()
}

/// Own empty pits whose opposite pit holds seeds.
fn capture_threats(board: &Board, player: Player) -> u32 {
    player
        .pits()
        .iter()
        .filter(|&&pit| board[pit] == 0)
        .filter_map(|&pit| pit.opposite())
        .filter(|&opp| board[opp] > 0)
        .count() as u32
}
