//! Reading and writing boards in the text position format.
//!
//! A position is a whitespace separated list of integers. The first is the side to move,
//! `0` for Black and `1` for White. The next 64 are the squares in row-major order, using
//! `0` for a black piece, `1` for a white piece and `5` for an empty square.
//!
//! ```md,ignore
//! 0
//! 5 5 5 5 5 5 5 5
//! 5 5 5 5 5 5 5 5
//! 5 5 5 5 5 5 5 5
//! 5 5 5 1 0 5 5 5
//! 5 5 5 0 1 5 5 5
//! 5 5 5 5 5 5 5 5
//! 5 5 5 5 5 5 5 5
//! 5 5 5 5 5 5 5 5
//! ```

use super::Board;
use crate::core::sq::SQ;
use crate::core::{Cell, Player, COL_CNT, SQ_CNT};

use failure::Fail;

use std::fs;
use std::io;
use std::path::Path;

const BLACK_TOKEN: &str = "0";
const WHITE_TOKEN: &str = "1";
const EMPTY_TOKEN: &str = "5";

/// Represents possible Errors encountered while building a `Board` from a position.
#[derive(Fail, Debug)]
pub enum PositionError {
    #[fail(display = "position is empty, expected a turn indicator")]
    MissingTurn,
    #[fail(display = "invalid turn: {}, expected '0' or '1'", turn)]
    UnrecognizedTurn { turn: String },
    #[fail(display = "invalid number of cells: {}, expected 64", cells)]
    IncorrectCellAmount { cells: usize },
    #[fail(display = "unrecognized cell: {} at index {}, expected '0', '1' or '5'", cell, index)]
    UnrecognizedCell { cell: String, index: usize },
    #[fail(display = "could not read position: {}", _0)]
    Io(#[cause] io::Error),
}

impl From<io::Error> for PositionError {
    fn from(err: io::Error) -> PositionError {
        PositionError::Io(err)
    }
}

impl Board {
    /// Builds a board from a position string.
    ///
    /// # Examples
    ///
    /// ```
    /// use othello::{Board, Player};
    ///
    /// let start = Board::start_pos();
    /// let board = Board::from_position(&start.position()).unwrap();
    /// assert_eq!(board, start);
    /// assert_eq!(board.turn(), Player::Black);
    /// ```
    pub fn from_position(position: &str) -> Result<Board, PositionError> {
        let mut tokens = position.split_whitespace();

        let turn_token = tokens.next().ok_or(PositionError::MissingTurn)?;
        let turn = match turn_token {
            BLACK_TOKEN => Player::Black,
            WHITE_TOKEN => Player::White,
            _ => {
                return Err(PositionError::UnrecognizedTurn {
                    turn: turn_token.to_string(),
                })
            }
        };

        let cell_tokens: Vec<&str> = tokens.collect();
        if cell_tokens.len() != SQ_CNT {
            return Err(PositionError::IncorrectCellAmount {
                cells: cell_tokens.len(),
            });
        }

        let mut cells = [Cell::Empty; SQ_CNT];
        for (index, token) in cell_tokens.iter().enumerate() {
            cells[index] = match *token {
                BLACK_TOKEN => Cell::Black,
                WHITE_TOKEN => Cell::White,
                EMPTY_TOKEN => Cell::Empty,
                _ => {
                    return Err(PositionError::UnrecognizedCell {
                        cell: token.to_string(),
                        index,
                    })
                }
            };
        }
        Ok(Board::from_cells(cells, turn))
    }

    /// Reads a board from a file holding a position.
    pub fn from_position_file<P: AsRef<Path>>(path: P) -> Result<Board, PositionError> {
        let contents = fs::read_to_string(path)?;
        Board::from_position(&contents)
    }

    /// Returns the position string of the board: the turn on the first line, then one
    /// line per row.
    pub fn position(&self) -> String {
        let mut s = String::with_capacity(SQ_CNT * 2 + 2);
        s.push_str(match self.turn() {
            Player::Black => BLACK_TOKEN,
            Player::White => WHITE_TOKEN,
        });
        s.push('\n');
        for sq in SQ::all() {
            s.push_str(match self.cell_at(sq) {
                Cell::Black => BLACK_TOKEN,
                Cell::White => WHITE_TOKEN,
                Cell::Empty => EMPTY_TOKEN,
            });
            s.push(if sq.col() as usize == COL_CNT - 1 { '\n' } else { ' ' });
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPENING_WHITE: &str = "1
        5 5 5 5 5 5 5 5
        5 5 5 5 5 5 5 5
        5 5 5 5 5 5 5 5
        5 5 5 1 0 5 5 5
        5 5 5 0 1 5 5 5
        5 5 5 5 5 5 5 5
        5 5 5 5 5 5 5 5
        5 5 5 5 5 5 5 5";

    #[test]
    fn parse_opening() {
        let board = Board::from_position(OPENING_WHITE).unwrap();
        assert_eq!(board.turn(), Player::White);
        let mut expected = Board::start_pos();
        expected.set_turn(Player::White);
        assert_eq!(board, expected);
    }

    #[test]
    fn position_output() {
        let s = Board::start_pos().position();
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "0");
        assert_eq!(lines[4], "5 5 5 1 0 5 5 5");
    }

    #[test]
    fn errors() {
        match Board::from_position("   ") {
            Err(PositionError::MissingTurn) => {}
            other => panic!("unexpected: {:?}", other),
        }
        match Board::from_position("2 5 5") {
            Err(PositionError::UnrecognizedTurn { turn }) => assert_eq!(turn, "2"),
            other => panic!("unexpected: {:?}", other),
        }
        match Board::from_position("0 5 5 5") {
            Err(PositionError::IncorrectCellAmount { cells }) => assert_eq!(cells, 3),
            other => panic!("unexpected: {:?}", other),
        }
        let bad = OPENING_WHITE.replacen("1 0", "1 7", 1);
        match Board::from_position(&bad) {
            Err(PositionError::UnrecognizedCell { cell, index }) => {
                assert_eq!(cell, "7");
                assert_eq!(index, 28);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn missing_file() {
        match Board::from_position_file("/nonexistent/othello/position.txt") {
            Err(PositionError::Io(_)) => {}
            other => panic!("unexpected: {:?}", other),
        }
    }
}
