//! Legal move generation.
//!
//! Moves are found by working outward from the mover's own pieces: from every square the
//! mover occupies, each direction is walked across a run of opponent pieces. A run of one or
//! more that ends on an empty square makes that square a legal destination.
//!
//! Squares are visited in row-major order and directions in the order of [`DIRECTIONS`], so
//! the order of the resulting list is fixed for a given board. A destination reached from
//! several pieces or directions is only reported the first time it is found.
//!
//! [`DIRECTIONS`]: ../../core/constant.DIRECTIONS.html

use super::Board;
use crate::core::move_list::MoveList;
use crate::core::rays::ray;
use crate::core::sq::SQ;
use crate::core::{Player, DIR_CNT};

/// Returns every legal move for `player`.
///
/// An empty list is not an error: it means `player` has to pass.
///
/// # Examples
///
/// ```
/// use othello::{Board, Player};
/// use othello::core::sq::SQ;
/// use othello::board::movegen::legal_moves;
///
/// let board = Board::start_pos();
/// let moves = legal_moves(&board, Player::Black);
/// assert_eq!(moves.sorted(), vec![SQ::new(2, 3), SQ::new(3, 2), SQ::new(4, 5), SQ::new(5, 4)]);
/// ```
pub fn legal_moves(board: &Board, player: Player) -> MoveList {
    let own = player.cell();
    let opp = (!player).cell();
    let mut list = MoveList::default();
    let mut found: u64 = 0;

    for origin in SQ::all().filter(|sq| board.cell_at(*sq) == own) {
        for dir in 0..DIR_CNT {
            let walk = ray(origin, dir);
            let run = walk
                .iter()
                .take_while(|s| board.cell_at(**s) == opp)
                .count();
            if run == 0 || run == walk.len() {
                continue;
            }
            let dest = walk[run];
            let bit = 1u64 << dest.0;
            if board.cell_at(dest).is_empty() && found & bit == 0 {
                found |= bit;
                list.push(dest);
            }
        }
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;

    #[test]
    fn opening_moves_in_scan_order() {
        let board = Board::start_pos();
        let moves = legal_moves(&board, Player::Black);
        // (3,4) is scanned first: (4,4) leads to (5,4), then (3,3) leads to (3,2).
        // (4,3) follows: (3,3) leads to (2,3), then (4,4) leads to (4,5).
        assert_eq!(
            moves.vec(),
            vec![SQ::new(5, 4), SQ::new(3, 2), SQ::new(2, 3), SQ::new(4, 5)]
        );
    }

    #[test]
    fn duplicates_reported_once() {
        // (2,2) is reachable from (4,2) and from (4,4); (2,4) only from (4,2).
        let mut board = Board::empty(Player::Black);
        board.set_cell(SQ::new(4, 2), Cell::Black);
        board.set_cell(SQ::new(3, 2), Cell::White);
        board.set_cell(SQ::new(4, 4), Cell::Black);
        board.set_cell(SQ::new(3, 3), Cell::White);
        let moves = legal_moves(&board, Player::Black);
        assert_eq!(moves.vec(), vec![SQ::new(2, 2), SQ::new(2, 4)]);
    }

    #[test]
    fn stuck_player_gets_empty_list() {
        let mut board = Board::empty(Player::White);
        board.set_cell(SQ::new(0, 0), Cell::White);
        board.set_cell(SQ::new(0, 1), Cell::Black);
        board.set_cell(SQ::new(0, 2), Cell::White);
        assert!(legal_moves(&board, Player::White).is_empty());
        assert_eq!(legal_moves(&board, Player::Black).vec(), vec![SQ::new(0, 3)]);
    }
}
