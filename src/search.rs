//! Minimax search with alpha-beta pruning.
//!
//! Player 1 is always the maximizing side and Player 2 the minimizing side;
//! leaves are scored with [`evaluate`] from a fixed perspective player
//! chosen by the caller. An extra turn keeps the same role for the next
//! ply, so a chain of store landings is searched as consecutive moves by
//! the same side.
//!
//! Every child is searched on its own copy of the board. `Board` is `Copy`,
//! so a branch can never observe a sibling's sowing or harvest.

use log::debug;

use crate::board::{Board, Pit, Player};
use crate::config::AiConfig;
use crate::eval::{evaluate, EvalWeights};
use crate::rules::{check_winner, sow, valid_moves, MoveError};

/// Outcome of a search from the root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// Best move found, `None` at a leaf
    pub best_move: Option<Pit>,
    /// Minimax value of the root from the perspective player's view
    pub score: f64,
    /// Nodes visited
    pub nodes: u64,
}

/// Depth-limited alpha-beta search. Holds the per-search node counter.
struct Searcher<'a> {
    weights: &'a EvalWeights,
    perspective: Player,
    nodes: u64,
}

impl Searcher<'_> {
    fn alpha_beta(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> (f64, Option<Pit>) {
        self.nodes += 1;

        // The terminal test may harvest, so it runs on this node's own copy.
        let mut board = *board;
        if depth == 0 || check_winner(&mut board).is_some() {
            return (evaluate(&board, self.perspective, self.weights), None);
        }

        let side = if maximizing {
            Player::Player1
        } else {
            Player::Player2
        };
        let moves = valid_moves(&board, side);
        if moves.is_empty() {
            return (evaluate(&board, self.perspective, self.weights), None);
        }

        let mut best_move = None;
        let mut best_score = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for pit in moves {
            let mut child = board;
            let next = sow(&mut child, side, pit).next;
            let (score, _) =
                self.alpha_beta(&child, depth - 1, alpha, beta, next == Player::Player1);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(pit);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(pit);
                }
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }

        (best_score, best_move)
    }
}

/// Alpha-beta minimax over `board`.
///
/// The side to move is Player 1 when `maximizing` is true and Player 2
/// otherwise. Leaves are scored from `perspective`'s point of view. Among
/// equally scored moves the first one in [`Player::pits`] order wins.
pub fn minimax(
    board: &Board,
    depth: u8,
    alpha: f64,
    beta: f64,
    maximizing: bool,
    perspective: Player,
    weights: &EvalWeights,
) -> (f64, Option<Pit>) {
    let mut searcher = Searcher {
        weights,
        perspective,
        nodes: 0,
    };
    searcher.alpha_beta(board, depth, alpha, beta, maximizing)
}

/// Full-window search for `player` to move, scored from `player`'s view.
pub fn search(board: &Board, player: Player, depth: u8, weights: &EvalWeights) -> SearchResult {
    let mut searcher = Searcher {
        weights,
        perspective: player,
        nodes: 0,
    };
    let (score, best_move) = searcher.alpha_beta(
        board,
        depth,
        f64::NEG_INFINITY,
        f64::INFINITY,
        player == Player::Player1,
    );
    debug!(
        "search {player} depth={depth} nodes={} score={score:.2} move={}",
        searcher.nodes,
        best_move.map_or_else(|| "-".to_string(), |p| p.to_string())
    );
    SearchResult {
        best_move,
        score,
        nodes: searcher.nodes,
    }
}

/// Choose a move for `player`.
///
/// On the Easy tier a random legal move is played with probability
/// `config.random_override`; otherwise, and on every other tier, the move
/// comes from a search of `config.depth` plies. Medium and Hard never touch
/// `rng`, so they are a pure function of the board.
pub fn best_move(
    board: &Board,
    player: Player,
    config: &AiConfig,
    rng: &mut fastrand::Rng,
) -> Result<Pit, MoveError> {
    let moves = valid_moves(board, player);
    if moves.is_empty() {
        return Err(MoveError::NoLegalMove(player));
    }

    let p = config.effective_override();
    if p > 0.0 && rng.f64() < p {
        let pit = moves[rng.usize(..moves.len())];
        debug!("{player} plays random move {pit}");
        return Ok(pit);
    }

    let result = search(board, player, config.depth, &config.weights);
    Ok(result.best_move.unwrap_or(moves[0]))
}
