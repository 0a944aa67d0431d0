//! Game rules: sowing, capture, extra turns, and the end-of-game harvest.
//!
//! The engine is built from three free functions over a [`Board`]:
//!
//! - [`valid_moves`] lists the pits a player may sow from
//! - [`apply_move`] sows one pit and returns whose turn is next
//! - [`check_winner`] is the terminal test, harvesting the board when one
//!   side has run out of seeds
//!
//! [`GameState`] ties them together and guarantees that the terminal test
//! runs after every move.

use std::fmt;

use crate::board::{Board, Pit, Player};

/// Reasons a move can be refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The pit is a store or belongs to the other player
    NotYourPit(Pit),
    /// The pit holds no seeds
    EmptyPit(Pit),
    /// The side to move has no seeds on a board that is not finished
    NoLegalMove(Player),
    /// The game has already been decided
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NotYourPit(pit) => write!(f, "Illegal move: pit {pit} is not yours"),
            MoveError::EmptyPit(pit) => write!(f, "Illegal move: pit {pit} is empty"),
            MoveError::NoLegalMove(player) => write!(f, "{player} has no legal move"),
            MoveError::GameOver => write!(f, "Illegal move: the game is over"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{player} wins"),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// What happened while sowing a single pit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sowing {
    /// Slot that received the last seed
    pub landing: Pit,
    /// Player to move next
    pub next: Player,
    /// Seeds moved into the mover's store by a capture
    pub captured: u8,
}

impl Sowing {
    pub fn extra_turn(&self, mover: Player) -> bool {
        self.next == mover
    }
}

/// Pits `player` may sow from, in enumeration order.
pub fn valid_moves(board: &Board, player: Player) -> Vec<Pit> {
    player
        .pits()
        .iter()
        .copied()
        .filter(|&pit| board[pit] > 0)
        .collect()
}

/// Check that `player` may sow `pit` on `board`.
pub fn check_move(board: &Board, player: Player, pit: Pit) -> Result<(), MoveError> {
    if pit.is_store() || pit.owner() != player {
        return Err(MoveError::NotYourPit(pit));
    }
    if board[pit] == 0 {
        return Err(MoveError::EmptyPit(pit));
    }
    Ok(())
}

/// Sow `pit` for `player` and return the player to move next.
///
/// The board is left untouched when the move is refused.
pub fn apply_move(board: &mut Board, player: Player, pit: Pit) -> Result<Player, MoveError> {
    check_move(board, player, pit)?;
    Ok(sow(board, player, pit).next)
}

/// Sow a pit that is known to be legal.
///
/// Callers must have taken `pit` from [`valid_moves`].
pub fn sow(board: &mut Board, player: Player, pit: Pit) -> Sowing {
    debug_assert!(check_move(board, player, pit).is_ok());

    let skip = player.opponent().store();
    let mut seeds = std::mem::take(&mut board[pit]);
    let mut landing = pit;

    while seeds > 0 {
        landing = landing.next();
        if landing == skip {
            continue;
        }
        board[landing] += 1;
        seeds -= 1;
    }

    if landing == player.store() {
        return Sowing {
            landing,
            next: player,
            captured: 0,
        };
    }

    let mut captured = 0;
    if !landing.is_store() && landing.owner() == player && board[landing] == 1 {
        if let Some(opposite) = landing.opposite() {
            if board[opposite] > 0 {
                captured = std::mem::take(&mut board[opposite]);
                captured += std::mem::take(&mut board[landing]);
                board[player.store()] += captured;
            }
        }
    }

    Sowing {
        landing,
        next: player.opponent(),
        captured,
    }
}

/// Terminal test with harvest.
///
/// If either side's pits are all empty, the other side's remaining seeds are
/// swept into that side's store and the winner is decided on stores. Returns
/// `None` without touching the board while both sides still have seeds.
/// Calling it again on a harvested board yields the same outcome.
pub fn check_winner(board: &mut Board) -> Option<Outcome> {
    let p1_total = board.side_total(Player::Player1);
    let p2_total = board.side_total(Player::Player2);

    let harvester = if p1_total == 0 {
        Player::Player2
    } else if p2_total == 0 {
        Player::Player1
    } else {
        return None;
    };

    for &pit in harvester.pits() {
        let seeds = std::mem::take(&mut board[pit]);
        board[harvester.store()] += seeds;
    }

    let (s1, s2) = (board.store(Player::Player1), board.store(Player::Player2));
    Some(match s1.cmp(&s2) {
        std::cmp::Ordering::Greater => Outcome::Winner(Player::Player1),
        std::cmp::Ordering::Less => Outcome::Winner(Player::Player2),
        std::cmp::Ordering::Equal => Outcome::Tie,
    })
}

/// Everything the driver needs to narrate one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub player: Player,
    pub pit: Pit,
    pub landing: Pit,
    pub next: Player,
    pub extra_turn: bool,
    pub captured: u8,
    pub outcome: Option<Outcome>,
}

/// A board together with the player to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub turn: Player,
    /// Set once the harvest has run; the board is frozen afterwards.
    pub outcome: Option<Outcome>,
    /// Number of moves played.
    pub n: usize,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// The starting position, Player 1 to move.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Player::Player1)
    }

    /// Resume from an arbitrary position. The terminal test runs immediately,
    /// so a board with an empty side is harvested on construction.
    pub fn from_board(mut board: Board, turn: Player) -> Self {
        let outcome = check_winner(&mut board);
        Self {
            board,
            turn,
            outcome,
            n: 0,
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn valid_moves(&self) -> Vec<Pit> {
        if self.is_over() {
            Vec::new()
        } else {
            valid_moves(&self.board, self.turn)
        }
    }

    /// Play `pit` for the player to move, then run the terminal test.
    pub fn play(&mut self, pit: Pit) -> Result<MoveReport, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let player = self.turn;
        check_move(&self.board, player, pit)?;

        let sowing = sow(&mut self.board, player, pit);
        self.outcome = check_winner(&mut self.board);
        self.turn = sowing.next;
        self.n += 1;

        Ok(MoveReport {
            player,
            pit,
            landing: sowing.landing,
            next: sowing.next,
            extra_turn: sowing.extra_turn(player),
            captured: sowing.captured,
            outcome: self.outcome,
        })
    }
}
