//! This module contains an engine for actually playing Othello.
//!
//! A [`Game`] owns the one authoritative [`Board`] of a session. Searchers only ever see
//! copies of it; moves they pick are applied back here.
//!
//! [`Game`]: struct.Game.html
//! [`Board`]: ../board/struct.Board.html

use failure::Fail;

use crate::board::Board;
use crate::core::move_list::MoveList;
use crate::core::sq::SQ;
use crate::core::Player;
use crate::tools::Searcher;

use std::fmt;

/// Search depth for each difficulty level, starting at level 1.
pub const DIFFICULTY_DEPTHS: [u16; 5] = [1, 2, 4, 7, 10];

/// Returns the search depth for a difficulty level between 1 and 5.
///
/// ```
/// use othello::engine::depth_for_difficulty;
///
/// assert_eq!(depth_for_difficulty(1), Some(1));
/// assert_eq!(depth_for_difficulty(5), Some(10));
/// assert_eq!(depth_for_difficulty(6), None);
/// ```
pub fn depth_for_difficulty(level: u8) -> Option<u16> {
    if level == 0 {
        return None;
    }
    DIFFICULTY_DEPTHS.get(level as usize - 1).cloned()
}

/// Errors from driving a `Game` with moves from outside the engine.
#[derive(Fail, Debug, PartialEq, Eq)]
pub enum GameError {
    #[fail(display = "illegal move for {}: {}", player, sq)]
    IllegalMove { player: Player, sq: SQ },
    #[fail(display = "the game is over")]
    GameOver,
}

/// How a finished game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    Win(Player),
    Draw,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GameResult::Win(player) => write!(f, "{} wins", player),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}

/// What happened during a single turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Turn {
    Played(Player, SQ),
    Passed(Player),
}

/// The moves of a finished game and its outcome.
#[derive(Clone, Debug)]
pub struct GameRecord {
    pub moves: Vec<SQ>,
    pub result: GameResult,
    pub black: u8,
    pub white: u8,
}

/// A game in progress.
pub struct Game {
    board: Board,
    depth: u16,
    moves: Vec<SQ>,
}

impl Game {
    /// Starts a game from `board`, with searchers looking `depth` plies ahead.
    pub fn new(board: Board, depth: u16) -> Game {
        Game {
            board,
            depth,
            moves: Vec::new(),
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the search depth used by `step`.
    pub fn depth(&self) -> u16 {
        self.depth
    }

    /// Returns every move placed so far, in order.
    pub fn moves(&self) -> &[SQ] {
        &self.moves
    }

    /// Returns if the board is full or neither player can move.
    pub fn is_over(&self) -> bool {
        self.board.is_game_over()
    }

    /// Returns the legal moves of the side to move.
    pub fn legal_moves(&self) -> MoveList {
        self.board.generate_moves()
    }

    /// Plays one turn for the side to move using `S`. If that side has no legal move the turn
    /// is passed without searching.
    pub fn step<S: Searcher>(&mut self) -> Turn {
        let player = self.board.turn();
        match S::best_move(self.board, self.depth) {
            Some(sq) => {
                self.place(sq);
                info!("{} plays {}", player, sq);
                Turn::Played(player, sq)
            }
            None => {
                self.board.pass();
                info!("{} has no legal move and passes", player);
                Turn::Passed(player)
            }
        }
    }

    /// Plays a move chosen outside the engine, such as one typed in by a person.
    ///
    /// Unlike the searchers, the move is checked first. On error the board is untouched.
    pub fn play_move(&mut self, sq: SQ) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let player = self.board.turn();
        if !self.board.legal_move(sq) {
            warn!("rejected illegal move {} for {}", sq, player);
            return Err(GameError::IllegalMove { player, sq });
        }
        self.place(sq);
        info!("{} plays {}", player, sq);
        Ok(())
    }

    /// Passes the turn of the side to move.
    pub fn pass(&mut self) {
        info!("{} passes", self.board.turn());
        self.board.pass();
    }

    /// Lets `S` play both sides until the game is over.
    pub fn play_full_game<S: Searcher>(&mut self) -> GameRecord {
        info!(
            "starting game: {} vs itself at depth {}",
            S::name(),
            self.depth
        );
        while !self.is_over() {
            self.step::<S>();
        }
        let record = self.record();
        info!(
            "game over after {} moves: {} ({} - {})",
            record.moves.len(),
            record.result,
            record.black,
            record.white
        );
        record
    }

    /// Returns the outcome by piece count. Only meaningful once the game is over.
    pub fn result(&self) -> GameResult {
        match self.board.leader() {
            Some(player) => GameResult::Win(player),
            None => GameResult::Draw,
        }
    }

    /// Returns the moves played so far, along with the current result and piece counts.
    pub fn record(&self) -> GameRecord {
        GameRecord {
            moves: self.moves.clone(),
            result: self.result(),
            black: self.board.count_pieces(Player::Black),
            white: self.board.count_pieces(Player::White),
        }
    }

    fn place(&mut self, sq: SQ) {
        self.board.apply_move(sq);
        self.moves.push(sq);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot_prelude::*;
    use crate::core::Cell;

    #[test]
    fn difficulty_table() {
        let depths: Vec<Option<u16>> = (0..7).map(depth_for_difficulty).collect();
        assert_eq!(
            depths,
            vec![None, Some(1), Some(2), Some(4), Some(7), Some(10), None]
        );
    }

    #[test]
    fn illegal_move_rejected() {
        let mut game = Game::new(Board::start_pos(), 1);
        let before = *game.board();
        assert_eq!(
            game.play_move(SQ::new(0, 0)),
            Err(GameError::IllegalMove {
                player: Player::Black,
                sq: SQ::new(0, 0)
            })
        );
        assert_eq!(*game.board(), before);
        assert!(game.moves().is_empty());

        assert_eq!(game.play_move(SQ::new(2, 3)), Ok(()));
        assert_eq!(game.board().turn(), Player::White);
        assert_eq!(game.moves(), &[SQ::new(2, 3)][..]);
    }

    #[test]
    fn step_passes_when_stuck() {
        // White has nothing to capture, Black does.
        let mut board = Board::empty(Player::White);
        board.set_cell(SQ::new(0, 0), Cell::Black);
        board.set_cell(SQ::new(0, 1), Cell::White);
        let mut game = Game::new(board, 2);
        assert_eq!(game.step::<AlphaBetaSearcher>(), Turn::Passed(Player::White));
        assert_eq!(
            game.step::<AlphaBetaSearcher>(),
            Turn::Played(Player::Black, SQ::new(0, 2))
        );
        assert!(game.is_over());
        assert_eq!(game.result(), GameResult::Win(Player::Black));
        assert_eq!(game.play_move(SQ::new(1, 1)), Err(GameError::GameOver));
    }

    #[test]
    fn draw_on_equal_counts() {
        let mut board = Board::empty(Player::Black);
        board.set_cell(SQ::new(0, 0), Cell::Black);
        board.set_cell(SQ::new(7, 7), Cell::White);
        let game = Game::new(board, 1);
        assert!(game.is_over());
        assert_eq!(game.result(), GameResult::Draw);
    }
}
