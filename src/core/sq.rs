//! Contains the representation of a board's square.
//!
//! Internally, a `SQ` is just a u8, the linear index `row * 8 + column`. The
//! number of a `SQ` maps to the following squares of the board:
//!
//! ```md,ignore
//!      0  1  2  3  4  5  6  7
//! 0 |  0  1  2  3  4  5  6  7
//! 1 |  8  9 10 11 12 13 14 15
//! 2 | 16 17 18 19 20 21 22 23
//! 3 | 24 25 26 27 28 29 30 31
//! 4 | 32 33 34 35 36 37 38 39
//! 5 | 40 41 42 43 44 45 46 47
//! 6 | 48 49 50 51 52 53 54 55
//! 7 | 56 57 58 59 60 61 62 63
//! ```
//!
//! A move is nothing more than the square a piece is placed on, so `SQ` doubles as
//! the move type throughout the crate. Ordering of squares is the ordering of their
//! linear index, which is what the search uses to break ties.
//!
//! # Examples
//!
//! ```rust
//! use othello::core::sq::SQ;
//! let sq = SQ::new(2, 3);
//!
//! assert_eq!(sq.0, 19);
//! assert_eq!(sq.row(), 2);
//! assert_eq!(sq.col(), 3);
//! ```
//!
//! # Use of `NO_SQ`
//!
//! `NO_SQ` is used to signify the lack of a legal square. It should never be used to index
//! a board.

use super::{COL_CNT, ROW_CNT, SQ_CNT};

use std::fmt;

/// Represents a singular square of the board.
#[derive(Copy, Clone, Default, Hash, PartialEq, PartialOrd, Ord, Eq, Debug)]
#[repr(transparent)]
pub struct SQ(pub u8);

/// `SQ` representing no square available.
pub const NO_SQ: SQ = SQ(64);

impl SQ {
    /// Creates a square from its row and column.
    ///
    /// # Panics
    ///
    /// Debug builds panic if either coordinate is outside `[0, 8)`.
    #[inline(always)]
    pub fn new(row: u8, col: u8) -> SQ {
        debug_assert!((row as usize) < ROW_CNT && (col as usize) < COL_CNT);
        SQ(row * COL_CNT as u8 + col)
    }

    /// Creates a square from signed coordinates, returning `None` if they fall off the board.
    #[inline]
    pub fn checked(row: i8, col: i8) -> Option<SQ> {
        if row >= 0 && row < ROW_CNT as i8 && col >= 0 && col < COL_CNT as i8 {
            Some(SQ::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Returns if a `SQ` is within the legal bounds of a square,
    /// which is inclusively between 0 - 63.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use othello::core::sq::SQ;
    /// let sq_ok = SQ(5);
    /// let no_sq = SQ(64);
    ///
    /// assert!(sq_ok.is_okay());
    /// assert!(!no_sq.is_okay());
    /// ```
    #[inline(always)]
    pub const fn is_okay(self) -> bool {
        (self.0 as usize) < SQ_CNT
    }

    /// Row of the square, counted from the top.
    #[inline(always)]
    pub fn row(self) -> u8 {
        self.0 / COL_CNT as u8
    }

    /// Column of the square, counted from the left.
    #[inline(always)]
    pub fn col(self) -> u8 {
        self.0 % COL_CNT as u8
    }

    /// Returns the square reached by stepping `(d_row, d_col)` from this one, or `None`
    /// if the step leaves the board.
    #[inline]
    pub fn offset(self, (d_row, d_col): (i8, i8)) -> Option<SQ> {
        SQ::checked(self.row() as i8 + d_row, self.col() as i8 + d_col)
    }

    /// Returns the linear index, for indexing arrays.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterator over every square, in increasing linear order.
    pub fn all() -> impl Iterator<Item = SQ> {
        (0..SQ_CNT as u8).map(SQ)
    }
}

impl fmt::Display for SQ {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_okay() {
            write!(f, "({}, {})", self.row(), self.col())
        } else {
            write!(f, "(none)")
        }
    }
}
