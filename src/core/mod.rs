//! Contains various components and structures supporting the creation of an Othello board. This
//! includes `SQ`, `Player`, `Cell`, `MoveList`, and the scoring primitives.

pub mod move_list;
pub mod rays;
pub mod score;
pub mod sq;

use std::fmt;
use std::ops::Not;

/// Number of rows on the board.
pub const ROW_CNT: usize = 8;
/// Number of columns on the board.
pub const COL_CNT: usize = 8;
/// Number of squares on the board.
pub const SQ_CNT: usize = ROW_CNT * COL_CNT;
/// Number of players.
pub const PLAYER_CNT: usize = 2;
/// Number of directions a capture can travel in.
pub const DIR_CNT: usize = 8;

/// Array of both players, indexed by their enum value.
pub const ALL_PLAYERS: [Player; PLAYER_CNT] = [Player::Black, Player::White];

/// The eight `(row, column)` steps in the order every scan visits them.
///
/// Move generation relies on this order being fixed, as it decides the order
/// legal moves are reported in.
pub const DIRECTIONS: [(i8, i8); DIR_CNT] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Enum to represent the Players Black & White.
///
/// Black is player `0` and moves first from the standard opening.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    Black = 0,
    White = 1,
}

impl Player {
    /// Returns the `Cell` holding one of this player's pieces.
    #[inline(always)]
    pub fn cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl Not for Player {
    type Output = Player;

    #[inline(always)]
    fn not(self) -> Self::Output {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            if *self == Player::Black {
                "Black"
            } else {
                "White"
            }
        )
    }
}

/// The state of a single square.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Black,
    White,
    Empty,
}

impl Cell {
    /// Returns if nothing occupies this cell.
    #[inline(always)]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Character used when displaying a board.
    pub fn character(self) -> char {
        match self {
            Cell::Black => 'B',
            Cell::White => 'W',
            Cell::Empty => '-',
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.character())
    }
}
