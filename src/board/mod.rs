//! This module contains [`Board`], the object representing the current state of an Othello
//! board. All modifications to the current state of the board are done through this object,
//! as well as gathering information about the current state of the board.
//!
//! Move generation lives in [`movegen`], and reading / writing the text position format
//! lives in [`position`].
//!
//! [`Board`]: struct.Board.html
//! [`movegen`]: movegen/index.html
//! [`position`]: position/index.html

pub mod movegen;
pub mod position;

use crate::core::move_list::MoveList;
use crate::core::rays::ray;
use crate::core::sq::SQ;
use crate::core::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use std::fmt;

pub use self::position::PositionError;

/// Squares occupied in the standard opening, along with their owner.
const OPENING: [(u8, u8, Cell); 4] = [
    (3, 3, Cell::White),
    (3, 4, Cell::Black),
    (4, 3, Cell::Black),
    (4, 4, Cell::White),
];

/// Represents an Othello board.
///
/// A `Board` is a plain value: 64 cells stored contiguously, plus the player whose turn it
/// is. Copying a board copies every cell, so a copy handed to a searcher can never change the
/// board it was copied from.
///
/// # Examples
///
/// ```
/// use othello::Board;
///
/// let mut board = Board::start_pos();
///
/// let moves = board.generate_moves();
/// let copy = board; // boards are copied by value
/// board.apply_move(moves[0]);
///
/// assert_eq!(copy.count_all_pieces(), 4);
/// assert_eq!(board.count_all_pieces(), 5);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; SQ_CNT],
    turn: Player,
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty_string())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Board: {} to move\n{}", self.turn, &self.pretty_string())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::start_pos()
    }
}

impl Board {
    /// Constructs a board from the standard opening, Black to move.
    ///
    /// # Examples
    ///
    /// ```
    /// use othello::{Board, Player};
    ///
    /// let board = Board::start_pos();
    /// assert_eq!(board.count_pieces(Player::Black), 2);
    /// assert_eq!(board.count_pieces(Player::White), 2);
    /// ```
    pub fn start_pos() -> Board {
        let mut board = Board::empty(Player::Black);
        for &(row, col, cell) in OPENING.iter() {
            board.set_cell(SQ::new(row, col), cell);
        }
        board
    }

    /// Constructs a board with no pieces on it.
    pub fn empty(turn: Player) -> Board {
        Board {
            cells: [Cell::Empty; SQ_CNT],
            turn,
        }
    }

    /// Constructs a board from all 64 cells in row-major order.
    pub fn from_cells(cells: [Cell; SQ_CNT], turn: Player) -> Board {
        Board { cells, turn }
    }

    /// Returns a builder for random positions. See [`RandBoard`].
    ///
    /// [`RandBoard`]: struct.RandBoard.html
    pub fn random() -> RandBoard {
        RandBoard::default()
    }

    /// Applies a move for the player whose turn it is, then passes the turn to
    /// the opponent.
    ///
    /// # Safety
    ///
    /// The move must be legal for the side to move. This is not checked.
    pub fn apply_move(&mut self, sq: SQ) {
        let player = self.turn;
        self.apply_move_for(sq, player);
        self.turn = !player;
    }

    /// Places a piece for `player` on `sq` and flips every run of opponent pieces the
    /// placement captures. The turn is left alone.
    ///
    /// Each of the eight directions is handled on its own: a run is flipped only if it holds
    /// at least one opponent piece and is closed off by one of `player`'s pieces.
    ///
    /// # Safety
    ///
    /// `sq` must be a member of `generate_moves_for(player)`. Nothing is re-validated here.
    pub fn apply_move_for(&mut self, sq: SQ, player: Player) {
        debug_assert!(sq.is_okay());
        let own = player.cell();
        let opp = (!player).cell();
        self.cells[sq.index()] = own;
        for dir in 0..DIR_CNT {
            let walk = ray(sq, dir);
            let run = walk
                .iter()
                .take_while(|s| self.cells[s.index()] == opp)
                .count();
            if run > 0 && run < walk.len() && self.cells[walk[run].index()] == own {
                for s in walk[..run].iter() {
                    self.cells[s.index()] = own;
                }
            }
        }
    }

    /// Hands the turn to the other player without placing a piece.
    pub fn pass(&mut self) {
        self.turn = !self.turn;
    }

    /// Returns the player whose turn it is.
    #[inline(always)]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Sets the player whose turn it is.
    pub fn set_turn(&mut self, player: Player) {
        self.turn = player;
    }

    /// Returns the contents of a square.
    #[inline(always)]
    pub fn cell_at(&self, sq: SQ) -> Cell {
        self.cells[sq.index()]
    }

    /// Overwrites a single square. Intended for building positions; flips nothing.
    pub fn set_cell(&mut self, sq: SQ, cell: Cell) {
        self.cells[sq.index()] = cell;
    }

    /// Returns the number of pieces belonging to `player`.
    pub fn count_pieces(&self, player: Player) -> u8 {
        let cell = player.cell();
        self.cells.iter().filter(|c| **c == cell).count() as u8
    }

    /// Returns the number of pieces on the board, for both players.
    pub fn count_all_pieces(&self) -> u8 {
        self.cells.iter().filter(|c| !c.is_empty()).count() as u8
    }

    /// Returns the number of empty squares.
    pub fn count_empty(&self) -> u8 {
        SQ_CNT as u8 - self.count_all_pieces()
    }

    /// Returns if every square holds a piece.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Returns if neither player has a legal move, meaning the game cannot continue.
    pub fn is_game_over(&self) -> bool {
        self.is_full() || ALL_PLAYERS.iter().all(|p| !self.has_moves(*p))
    }

    /// Returns the player with strictly more pieces, or `None` if the counts are equal.
    pub fn leader(&self) -> Option<Player> {
        let black = self.count_pieces(Player::Black);
        let white = self.count_pieces(Player::White);
        if black > white {
            Some(Player::Black)
        } else if white > black {
            Some(Player::White)
        } else {
            None
        }
    }

    /// Returns the legal moves for the side to move.
    pub fn generate_moves(&self) -> MoveList {
        self.generate_moves_for(self.turn)
    }

    /// Returns the legal moves for `player`. An empty list means `player` must pass.
    pub fn generate_moves_for(&self, player: Player) -> MoveList {
        movegen::legal_moves(self, player)
    }

    /// Returns if `player` has at least one legal move.
    pub fn has_moves(&self, player: Player) -> bool {
        !self.generate_moves_for(player).is_empty()
    }

    /// Returns if `sq` is a legal move for the side to move.
    pub fn legal_move(&self, sq: SQ) -> bool {
        sq.is_okay() && self.generate_moves().contains(sq)
    }

    /// Returns a prettified String of the current `Board`, for easy command line displaying.
    ///
    /// Black pieces are shown as `B`, white pieces as `W` and empty squares as `-`. Rows and
    /// columns are labelled with the indices moves are entered with.
    pub fn pretty_string(&self) -> String {
        let mut s = String::with_capacity(SQ_CNT * 2 + 40);
        s.push_str("  ");
        for col in 0..COL_CNT {
            s.push_str(&format!(" {}", col));
        }
        s.push('\n');
        for sq in SQ::all() {
            if sq.col() == 0 {
                s.push_str(&format!("{} ", sq.row()));
            }
            s.push(' ');
            s.push(self.cell_at(sq).character());
            if sq.col() as usize == COL_CNT - 1 {
                s.push('\n');
            }
        }
        s
    }
}

/// Builder for random, reachable positions.
///
/// Positions are produced by playing uniformly random legal moves from the standard opening,
/// passing whenever the side to move is stuck. Supplying a seed makes the output repeatable.
///
/// ```
/// use othello::board::{Board, RandBoard};
///
/// let rand_boards: Vec<Board> = RandBoard::new()
///     .pseudo_random(12455)
///     .min_moves(4)
///     .many(10);
/// assert_eq!(rand_boards.len(), 10);
/// ```
pub struct RandBoard {
    minimum_move: u16,
    rng: StdRng,
}

/// Fewest random moves played unless `min_moves` says otherwise.
const DEFAULT_MIN_MOVES: u16 = 2;

impl Default for RandBoard {
    fn default() -> Self {
        RandBoard::new()
    }
}

impl RandBoard {
    /// Create a new `RandBoard` object, seeded from entropy.
    pub fn new() -> Self {
        RandBoard {
            minimum_move: DEFAULT_MIN_MOVES,
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a `Vec<Board>` full of `Boards` containing random positions. The
    /// `Vec` will be of size 'size'.
    pub fn many(mut self, size: usize) -> Vec<Board> {
        (0..size).map(|_| self.go()).collect()
    }

    /// Creates a singular `Board` with a random position.
    pub fn one(mut self) -> Board {
        self.go()
    }

    /// Turns PseudoRandom generation on. This allows for the same random `Board`s
    /// to be created from the same seed.
    pub fn pseudo_random(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Sets the minimum moves a randomly generated `Board` must contain.
    pub fn min_moves(mut self, moves: u16) -> Self {
        self.minimum_move = moves;
        self
    }

    fn go(&mut self) -> Board {
        let mut board = Board::start_pos();
        let mut played: u16 = 0;
        while !board.is_game_over() {
            if played >= self.minimum_move && self.rng.gen_range(0..8) == 0 {
                break;
            }
            let moves = board.generate_moves();
            if moves.is_empty() {
                board.pass();
                continue;
            }
            let mov = moves[self.rng.gen_range(0..moves.len())];
            board.apply_move(mov);
            played += 1;
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> SQ {
        SQ::new(row, col)
    }

    #[test]
    fn start_pos_layout() {
        let board = Board::start_pos();
        assert_eq!(board.turn(), Player::Black);
        assert_eq!(board.cell_at(sq(3, 3)), Cell::White);
        assert_eq!(board.cell_at(sq(3, 4)), Cell::Black);
        assert_eq!(board.cell_at(sq(4, 3)), Cell::Black);
        assert_eq!(board.cell_at(sq(4, 4)), Cell::White);
        assert_eq!(board.count_empty(), 60);
        assert!(!board.is_full());
        assert_eq!(board.leader(), None);
    }

    #[test]
    fn apply_flips_single_run() {
        let mut board = Board::start_pos();
        board.apply_move(sq(2, 3));
        assert_eq!(board.cell_at(sq(2, 3)), Cell::Black);
        assert_eq!(board.cell_at(sq(3, 3)), Cell::Black);
        assert_eq!(board.count_pieces(Player::Black), 4);
        assert_eq!(board.count_pieces(Player::White), 1);
        assert_eq!(board.turn(), Player::White);
    }

    #[test]
    fn apply_flips_several_directions() {
        // Closed runs to the west and north-west of (3,3).
        let mut board = Board::empty(Player::Black);
        board.set_cell(sq(0, 0), Cell::Black);
        board.set_cell(sq(1, 1), Cell::White);
        board.set_cell(sq(2, 2), Cell::White);
        board.set_cell(sq(3, 0), Cell::Black);
        board.set_cell(sq(3, 1), Cell::White);
        board.set_cell(sq(3, 2), Cell::White);
        // Unclosed run: nothing past (3,4).
        board.set_cell(sq(3, 4), Cell::White);
        board.apply_move_for(sq(3, 3), Player::Black);

        assert_eq!(board.cell_at(sq(1, 1)), Cell::Black);
        assert_eq!(board.cell_at(sq(2, 2)), Cell::Black);
        assert_eq!(board.cell_at(sq(3, 1)), Cell::Black);
        assert_eq!(board.cell_at(sq(3, 2)), Cell::Black);
        assert_eq!(board.cell_at(sq(3, 4)), Cell::White);
        assert_eq!(board.turn(), Player::Black);
    }

    #[test]
    fn run_to_edge_is_not_flipped() {
        let mut board = Board::empty(Player::White);
        board.set_cell(sq(0, 6), Cell::Black);
        board.set_cell(sq(0, 7), Cell::Black);
        board.set_cell(sq(1, 4), Cell::Black);
        board.set_cell(sq(2, 4), Cell::White);
        board.apply_move_for(sq(0, 5), Player::White);
        board.apply_move_for(sq(0, 4), Player::White);
        assert_eq!(board.cell_at(sq(0, 6)), Cell::Black);
        assert_eq!(board.cell_at(sq(0, 7)), Cell::Black);
        assert_eq!(board.cell_at(sq(1, 4)), Cell::White);
    }

    #[test]
    fn game_over_when_nobody_moves() {
        let mut board = Board::empty(Player::Black);
        board.set_cell(sq(0, 0), Cell::Black);
        board.set_cell(sq(7, 7), Cell::Black);
        assert!(board.is_game_over());
        assert_eq!(board.leader(), Some(Player::Black));
    }

    #[test]
    fn pretty_string_layout() {
        let s = Board::start_pos().pretty_string();
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "   0 1 2 3 4 5 6 7");
        assert_eq!(lines[4], "3  - - - W B - - -");
        assert_eq!(lines[5], "4  - - - B W - - -");
    }

    #[test]
    fn rand_board_gen_one() {
        let boards_1 = Board::random().pseudo_random(550087423).min_moves(3).one();
        let boards_2 = Board::random().pseudo_random(550087423).min_moves(3).one();
        assert_eq!(boards_1, boards_2);
        assert!(boards_1.count_all_pieces() >= 7);
    }

    #[test]
    fn rand_board_defaults_agree() {
        let a = RandBoard::new().pseudo_random(8_675_309).many(10);
        let b = RandBoard::default().pseudo_random(8_675_309).many(10);
        assert_eq!(a, b);
        for board in a.iter() {
            // Each placement adds exactly one piece to the four of the opening.
            assert!(board.count_all_pieces() >= 4 + DEFAULT_MIN_MOVES as u8);
        }
    }

    #[test]
    fn rand_board_gen_many() {
        let mut boards_1 = Board::random().pseudo_random(222227835).many(5);
        let mut boards_2 = Board::random().pseudo_random(222227835).many(5);

        assert_eq!(boards_1.len(), boards_2.len());
        while !boards_1.is_empty() {
            assert_eq!(boards_1.pop(), boards_2.pop());
        }
    }
}
