//! Miscellaneous tools used for Searching. Most notably this module contains the
//! `Searcher` trait for building bots, and the leaf evaluation.

pub mod eval;

use crate::board::Board;
use crate::core::sq::SQ;

/// Defines an object that can play Othello.
pub trait Searcher {
    fn name() -> &'static str
    where
        Self: Sized;

    /// Returns a move for the side to move on `board`, searching `depth` plies deep,
    /// or `None` if that side has no legal move and must pass.
    fn best_move(board: Board, depth: u16) -> Option<SQ>
    where
        Self: Sized;
}
