//! The alpha-beta algorithm.
//!
//! Scores are always counted from the point of view of the player searching at the root.
//! Nodes where the root player is to move maximize, nodes where the opponent is to move
//! minimize. A node whose mover has no legal move is scored on the spot rather than
//! passing, so every ply of the tree is a placement.

use std::cmp::{max, min};

use super::SearchContext;
use crate::board::Board;
use crate::core::score::*;
use crate::core::sq::SQ;
use crate::core::Player;
use crate::tools::eval::Eval;

/// Searches every legal move of `player` to `depth` plies and returns the best, or `None`
/// if `player` has no legal move.
///
/// Each root move is searched with a full window, so the score attached to every root move
/// is exact. Ties between root moves go to the smaller square index.
pub fn alpha_beta_search(board: &Board, player: Player, depth: u16) -> Option<ScoringMove> {
    alpha_beta_search_with_stats(board, player, depth).0
}

/// Same as [`alpha_beta_search`], also returning the number of nodes visited below the root.
///
/// [`alpha_beta_search`]: fn.alpha_beta_search.html
pub fn alpha_beta_search_with_stats(
    board: &Board,
    player: Player,
    depth: u16,
) -> (Option<ScoringMove>, u64) {
    let mut ctx = SearchContext::new(player);
    let mut best: Option<ScoringMove> = None;

    for mov in board.generate_moves_for(player) {
        let score = search_child(board, mov, player, depth, &mut ctx);
        let candidate = ScoringMove::new(mov, score);
        if best.map_or(true, |b| candidate.beats(&b)) {
            best = Some(candidate);
        }
    }

    match best {
        Some(m) => debug!(
            "alpha-beta {} depth {}: {} ({} nodes)",
            player, depth, m, ctx.nodes
        ),
        None => debug!("alpha-beta {} depth {}: no legal move", player, depth),
    }
    (best, ctx.nodes)
}

fn search_child(board: &Board, mov: SQ, player: Player, depth: u16, ctx: &mut SearchContext) -> Value {
    let mut child = *board;
    child.apply_move_for(mov, player);
    alpha_beta(
        &child,
        depth.saturating_sub(1),
        false,
        !player,
        NEG_INFINITE,
        INFINITE,
        ctx,
    )
}

fn alpha_beta(
    board: &Board,
    depth: u16,
    maximizing: bool,
    turn: Player,
    mut alpha: Value,
    mut beta: Value,
    ctx: &mut SearchContext,
) -> Value {
    ctx.nodes += 1;
    if depth == 0 {
        return Eval::eval(board, ctx.root);
    }

    let moves = board.generate_moves_for(turn);
    if moves.is_empty() {
        return Eval::eval(board, ctx.root);
    }

    if maximizing {
        let mut max_eval = NEG_INFINITE;
        for mov in moves {
            let mut child = *board;
            child.apply_move_for(mov, turn);
            let eval = alpha_beta(&child, depth - 1, false, !turn, alpha, beta, ctx);
            max_eval = max(max_eval, eval);
            alpha = max(alpha, eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = INFINITE;
        for mov in moves {
            let mut child = *board;
            child.apply_move_for(mov, turn);
            let eval = alpha_beta(&child, depth - 1, true, !turn, alpha, beta, ctx);
            min_eval = min(min_eval, eval);
            beta = min(beta, eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_leaves_board_alone() {
        let board = Board::start_pos();
        let copy = board;
        alpha_beta_search(&board, Player::Black, 4);
        assert_eq!(board, copy);
    }

    #[test]
    fn opening_depth_one() {
        // Every opening move flips one disc, leaving Black 4 - 1 up.
        let best = alpha_beta_search(&Board::start_pos(), Player::Black, 1).unwrap();
        assert_eq!(best, ScoringMove::new(SQ::new(2, 3), 3));
    }

    #[test]
    fn depth_zero_acts_as_depth_one() {
        let board = Board::start_pos();
        assert_eq!(
            alpha_beta_search(&board, Player::Black, 0),
            alpha_beta_search(&board, Player::Black, 1)
        );
    }

    #[test]
    fn perspective_stays_with_root() {
        // After one reply White's best is to flip back, so depth 2 scores 0 for Black.
        let best = alpha_beta_search(&Board::start_pos(), Player::Black, 2).unwrap();
        assert_eq!(best.score, 0);
        let best = alpha_beta_search(&Board::start_pos(), Player::White, 1).unwrap();
        assert_eq!(best.score, 3);
    }

    #[test]
    fn stuck_player_gets_none() {
        let board = Board::empty(Player::Black);
        assert_eq!(alpha_beta_search(&board, Player::Black, 3), None);
    }
}
