use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::constants::{NEXT_SLOT, OPPOSITE_SLOT, SLOTS, STARTING_SEEDS, STORE1, STORE2};

/// One of the two players. Player 1 always moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// The player's own store.
    pub fn store(self) -> Pit {
        match self {
            Player::Player1 => Pit::Store1,
            Player::Player2 => Pit::Store2,
        }
    }

    /// The player's pits in move enumeration order (`A..F` or `G..L`).
    ///
    /// This order is also the search tie-break order.
    pub fn pits(self) -> &'static [Pit; 6] {
        match self {
            Player::Player1 => &[Pit::A, Pit::B, Pit::C, Pit::D, Pit::E, Pit::F],
            Player::Player2 => &[Pit::G, Pit::H, Pit::I, Pit::J, Pit::K, Pit::L],
        }
    }

    /// The player's pits in sowing order, ending with the pit next to the store.
    pub fn pits_toward_store(self) -> &'static [Pit; 6] {
        match self {
            Player::Player1 => &[Pit::A, Pit::B, Pit::C, Pit::D, Pit::E, Pit::F],
            Player::Player2 => &[Pit::L, Pit::K, Pit::J, Pit::I, Pit::H, Pit::G],
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Player::Player1 => 1,
            Player::Player2 => 2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// A slot on the board. Discriminants follow the sowing cycle, so
/// `pit as usize` indexes the board array directly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Pit {
    A = 0,
    B,
    C,
    D,
    E,
    F,
    Store1,
    L,
    K,
    J,
    I,
    H,
    G,
    Store2,
}

impl Pit {
    /// All slots in board index order.
    pub const ALL: [Pit; SLOTS] = [
        Pit::A,
        Pit::B,
        Pit::C,
        Pit::D,
        Pit::E,
        Pit::F,
        Pit::Store1,
        Pit::L,
        Pit::K,
        Pit::J,
        Pit::I,
        Pit::H,
        Pit::G,
        Pit::Store2,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(i: usize) -> Pit {
        Pit::ALL[i]
    }

    /// Sowing successor. Visits every slot, including the opponent's store;
    /// skipping that store is the sower's job.
    #[inline]
    pub fn next(self) -> Pit {
        Pit::from_index(NEXT_SLOT[self.index()])
    }

    /// The pit directly across the board, or `None` for stores.
    #[inline]
    pub fn opposite(self) -> Option<Pit> {
        if self.is_store() {
            None
        } else {
            Some(Pit::from_index(OPPOSITE_SLOT[self.index()]))
        }
    }

    #[inline]
    pub fn is_store(self) -> bool {
        matches!(self, Pit::Store1 | Pit::Store2)
    }

    /// The player a pit or store belongs to.
    pub fn owner(self) -> Player {
        match self.index() {
            0..=STORE1 => Player::Player1,
            _ => Player::Player2,
        }
    }

    /// Single character label: `A`..`L` for pits, `1`/`2` for stores.
    pub fn label(self) -> char {
        match self {
            Pit::A => 'A',
            Pit::B => 'B',
            Pit::C => 'C',
            Pit::D => 'D',
            Pit::E => 'E',
            Pit::F => 'F',
            Pit::G => 'G',
            Pit::H => 'H',
            Pit::I => 'I',
            Pit::J => 'J',
            Pit::K => 'K',
            Pit::L => 'L',
            Pit::Store1 => '1',
            Pit::Store2 => '2',
        }
    }
}

impl fmt::Display for Pit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error returned when a string does not name a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePitError(pub String);

impl fmt::Display for ParsePitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a pit: {:?}", self.0)
    }
}

impl std::error::Error for ParsePitError {}

impl FromStr for Pit {
    type Err = ParsePitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(ParsePitError(s.to_string()));
        };
        let c = c.to_ascii_uppercase();
        Pit::ALL
            .iter()
            .copied()
            .find(|p| p.label() == c)
            .ok_or_else(|| ParsePitError(s.to_string()))
    }
}

/// Seed counts for all 14 slots.
///
/// `Board` is `Copy`: cloning a board for a search branch is a 14-byte copy,
/// and no two branches can ever share storage.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    seeds: [u8; SLOTS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The starting position: four seeds in every pit, both stores empty.
    pub fn new() -> Self {
        let mut seeds = [STARTING_SEEDS; SLOTS];
        seeds[STORE1] = 0;
        seeds[STORE2] = 0;
        Self { seeds }
    }

    /// A board with no seeds anywhere. Mostly useful for building positions.
    pub fn empty() -> Self {
        Self { seeds: [0; SLOTS] }
    }

    /// Build a board from raw counts in board index order.
    pub fn from_seeds(seeds: [u8; SLOTS]) -> Self {
        Self { seeds }
    }

    /// Set several slots at once, returning the modified board.
    pub fn with(mut self, slots: &[(Pit, u8)]) -> Self {
        for &(pit, n) in slots {
            self[pit] = n;
        }
        self
    }

    pub fn seeds(&self) -> &[u8; SLOTS] {
        &self.seeds
    }

    /// Seeds in `player`'s store.
    pub fn store(&self, player: Player) -> u32 {
        self[player.store()] as u32
    }

    /// Seeds still in play on `player`'s side (stores excluded).
    pub fn side_total(&self, player: Player) -> u32 {
        player.pits().iter().map(|&p| self[p] as u32).sum()
    }

    /// Number of empty pits on `player`'s side.
    pub fn empty_pits(&self, player: Player) -> u32 {
        player.pits().iter().filter(|&&p| self[p] == 0).count() as u32
    }

    /// Seeds on the whole board, stores included.
    pub fn total(&self) -> u32 {
        self.seeds.iter().map(|&n| n as u32).sum()
    }
}

impl Index<Pit> for Board {
    type Output = u8;

    #[inline]
    fn index(&self, pit: Pit) -> &u8 {
        &self.seeds[pit.index()]
    }
}

impl IndexMut<Pit> for Board {
    #[inline]
    fn index_mut(&mut self, pit: Pit) -> &mut u8 {
        &mut self.seeds[pit.index()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "     +----+----+----+----+----+----+";

        writeln!(f, "       G    H    I    J    K    L      <<< Player 2")?;
        writeln!(f, "{border}")?;
        write!(f, "     |")?;
        for &pit in Player::Player2.pits() {
            write!(f, " {:>2} |", self[pit])?;
        }
        writeln!(f)?;
        writeln!(
            f,
            " {:>2}  +----+----+----+----+----+----+  {:>2}",
            self[Pit::Store2],
            self[Pit::Store1]
        )?;
        write!(f, "     |")?;
        for &pit in Player::Player1.pits() {
            write!(f, " {:>2} |", self[pit])?;
        }
        writeln!(f)?;
        writeln!(f, "{border}")?;
        writeln!(f, "  2    A    B    C    D    E    F    1  Player 1 >>>")
    }
}
