//! Contains all of the currently completed standard bots/searchers/AIs.
//!
//! [`AlphaBetaSearcher`] is the engine proper. [`MiniMaxSearcher`] searches the same tree
//! without pruning, and [`RandomBot`] is there to play against.
//!
//! [`AlphaBetaSearcher`]: struct.AlphaBetaSearcher.html
//! [`MiniMaxSearcher`]: struct.MiniMaxSearcher.html
//! [`RandomBot`]: struct.RandomBot.html

pub mod alphabeta;
pub mod minimax;

use rand::Rng;

use crate::board::Board;
use crate::core::sq::SQ;
use crate::core::Player;
use crate::tools::Searcher;

/// State shared by every node of a single search.
struct SearchContext {
    /// The player the whole tree is scored for.
    root: Player,
    nodes: u64,
}

impl SearchContext {
    fn new(root: Player) -> Self {
        SearchContext { root, nodes: 0 }
    }
}

/// Searcher that randomly chooses a move. The fastest, yet dumbest, searcher we have to offer.
pub struct RandomBot {}

/// Searcher that uses a MiniMax algorithm to search for a best move.
pub struct MiniMaxSearcher {}

/// Searcher that uses an alpha-beta algorithm to search for a best move.
pub struct AlphaBetaSearcher {}

impl Searcher for RandomBot {
    fn name() -> &'static str {
        "Random Searcher"
    }

    fn best_move(board: Board, _depth: u16) -> Option<SQ> {
        let moves = board.generate_moves();
        if moves.is_empty() {
            None
        } else {
            Some(moves[rand::thread_rng().gen_range(0..moves.len())])
        }
    }
}

impl Searcher for MiniMaxSearcher {
    fn name() -> &'static str {
        "Simple Searcher"
    }

    fn best_move(board: Board, depth: u16) -> Option<SQ> {
        minimax::minimax_search(&board, board.turn(), depth).map(|m| m.sq)
    }
}

impl Searcher for AlphaBetaSearcher {
    fn name() -> &'static str {
        "AlphaBeta Searcher"
    }

    fn best_move(board: Board, depth: u16) -> Option<SQ> {
        alphabeta::alpha_beta_search(&board, board.turn(), depth).map(|m| m.sq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Pruning must never change the answer.

    #[test]
    fn minimax_alpha_equality() {
        let boards = Board::random().pseudo_random(7_331).min_moves(6).many(6);
        for board in boards.iter() {
            for depth in 1..4 {
                assert_eq!(
                    MiniMaxSearcher::best_move(*board, depth),
                    AlphaBetaSearcher::best_move(*board, depth)
                );
            }
        }
    }

    #[test]
    fn alpha_beta_visits_fewer_nodes() {
        let board = Board::start_pos();
        for depth in 4..7 {
            let (ab_best, ab_nodes) =
                alphabeta::alpha_beta_search_with_stats(&board, Player::Black, depth);
            let (mm_best, mm_nodes) = minimax::minimax_search_with_stats(&board, Player::Black, depth);
            assert_eq!(ab_best, mm_best);
            assert!(
                ab_nodes < mm_nodes,
                "depth {}: alpha-beta {} nodes, minimax {} nodes",
                depth,
                ab_nodes,
                mm_nodes
            );
        }
    }

    #[test]
    fn random_bot_plays_legal_moves() {
        let board = Board::start_pos();
        for _ in 0..10 {
            let mov = RandomBot::best_move(board, 0).unwrap();
            assert!(board.legal_move(mov));
        }
        assert_eq!(RandomBot::best_move(Board::empty(Player::White), 0), None);
    }
}
