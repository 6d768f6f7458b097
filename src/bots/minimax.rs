//! Plain minimax, without pruning.
//!
//! Visits every node to the given depth. It follows exactly the same scoring rules as
//! [`alphabeta`], so the two always agree on both the move and the score; this one is just
//! slower. Mostly useful as a reference.
//!
//! [`alphabeta`]: ../alphabeta/index.html

use std::cmp::{max, min};

use super::SearchContext;
use crate::board::Board;
use crate::core::score::*;
use crate::core::Player;
use crate::tools::eval::Eval;

pub fn minimax_search(board: &Board, player: Player, depth: u16) -> Option<ScoringMove> {
    minimax_search_with_stats(board, player, depth).0
}

/// Same as [`minimax_search`], also returning the number of nodes visited below the root.
///
/// [`minimax_search`]: fn.minimax_search.html
pub fn minimax_search_with_stats(
    board: &Board,
    player: Player,
    depth: u16,
) -> (Option<ScoringMove>, u64) {
    let mut ctx = SearchContext::new(player);
    let mut best: Option<ScoringMove> = None;

    for mov in board.generate_moves_for(player) {
        let mut child = *board;
        child.apply_move_for(mov, player);
        let score = minimax(&child, depth.saturating_sub(1), false, !player, &mut ctx);
        let candidate = ScoringMove::new(mov, score);
        if best.map_or(true, |b| candidate.beats(&b)) {
            best = Some(candidate);
        }
    }

    if let Some(m) = best {
        debug!("minimax {} depth {}: {} ({} nodes)", player, depth, m, ctx.nodes);
    }
    (best, ctx.nodes)
}

fn minimax(board: &Board, depth: u16, maximizing: bool, turn: Player, ctx: &mut SearchContext) -> Value {
    ctx.nodes += 1;
    if depth == 0 {
        return Eval::eval(board, ctx.root);
    }

    let moves = board.generate_moves_for(turn);
    if moves.is_empty() {
        return Eval::eval(board, ctx.root);
    }

    let mut best_value = if maximizing { NEG_INFINITE } else { INFINITE };
    for mov in moves {
        let mut child = *board;
        child.apply_move_for(mov, turn);
        let value = minimax(&child, depth - 1, !maximizing, !turn, ctx);
        best_value = if maximizing {
            max(best_value, value)
        } else {
            min(best_value, value)
        };
    }
    best_value
}
