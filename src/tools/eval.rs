//! Module for simply evaluating the strength of a current position.
//!
//! This is a VERY basic evaluation: the material difference, nothing more. Corners, edges
//! and mobility are not considered. It exists to score the leaves of a search.

use crate::core::score::Value;
use crate::core::Player;
use crate::Board;

/// A simple evaluation structure.
///
/// ```
/// use othello::tools::eval::Eval;
/// use othello::{Board, Player};
///
/// let board = Board::start_pos();
/// let score = Eval::eval(&board, Player::Black);
/// assert_eq!(score, 0);
/// ```
pub struct Eval;

impl Eval {
    /// Returns the number of `perspective`'s pieces minus the number of the opponent's.
    #[inline]
    pub fn eval(board: &Board, perspective: Player) -> Value {
        board.count_pieces(perspective) as Value - board.count_pieces(!perspective) as Value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sq::SQ;

    #[test]
    fn eval_is_antisymmetric() {
        let mut board = Board::start_pos();
        board.apply_move(SQ::new(2, 3));
        assert_eq!(Eval::eval(&board, Player::Black), 3);
        assert_eq!(Eval::eval(&board, Player::White), -3);
    }

    #[test]
    fn eval_ignores_turn() {
        let mut board = Board::start_pos();
        board.apply_move(SQ::new(2, 3));
        let mut other = board;
        other.pass();
        assert_eq!(
            Eval::eval(&board, Player::Black),
            Eval::eval(&other, Player::Black)
        );
    }
}
