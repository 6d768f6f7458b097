//! Primitives for determining the value / score of a position.
//!
//! A `Value` stores a single `i32` to represent a score, always the piece difference from
//! some player's point of view. A `ScoringMove` pairs a move with the `Value` it leads to.

use super::sq::SQ;

use std::fmt;

/// Type for `i32` to determine the `Value` of an evaluation.
pub type Value = i32;

pub const INFINITE: Value = 32001;
pub const NEG_INFINITE: Value = -32001;

/// A move along with the score the search assigned to it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ScoringMove {
    pub sq: SQ,
    pub score: Value,
}

impl ScoringMove {
    /// Creates a new `ScoringMove`.
    #[inline(always)]
    pub fn new(sq: SQ, score: Value) -> Self {
        ScoringMove { sq, score }
    }

    /// Returns if this move should replace `other` as the best found so far.
    ///
    /// A higher score always wins. Equal scores go to the square with the smaller
    /// linear index, so the choice is reproducible no matter the order moves were
    /// searched in.
    #[inline]
    pub fn beats(&self, other: &ScoringMove) -> bool {
        self.score > other.score || (self.score == other.score && self.sq < other.sq)
    }
}

impl fmt::Display for ScoringMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} score: {}", self.sq, self.score)
    }
}
