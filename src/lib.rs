//! An Othello (Reversi) engine.
//!
//! This crate is separated into a few parts: the board representation & associated
//! functions (`board` and `core`), the searchers that pick moves (`bots`), a game
//! session that strings turns together (`engine`), and its text front end (`console`).
//!
//! # Usage
//!
//! Add `othello` to the dependencies in your project's `Cargo.toml`.
//!
//! # Safety
//!
//! Move application trusts its caller. Applying a move that `generate_moves` did not return
//! leaves the board in a state no legal game could reach. Use [`Game::play_move`] to apply
//! moves that come from outside the engine, which checks them first.
//!
//! # Examples
//!
//! You can create a [`Board`] with the starting position like so:
//!
//! ```
//! use othello::Board;
//! let board = Board::start_pos();
//! ```
//!
//! Generating a list of moves (Contained inside a [`MoveList`]) can be done with:
//!
//! ```
//! # use othello::Board;
//! # let board = Board::start_pos();
//! let list = board.generate_moves();
//! assert_eq!(list.len(), 4);
//! ```
//!
//! Asking a searcher for a move and applying it:
//!
//! ```
//! use othello::Board;
//! use othello::bot_prelude::*;
//!
//! let mut board = Board::start_pos();
//! if let Some(mov) = AlphaBetaSearcher::best_move(board, 3) {
//!     board.apply_move(mov);
//! }
//! assert_eq!(board.count_all_pieces(), 5);
//! ```
//!
//! Positions can be read from the text position format:
//!
//! ```
//! use othello::Board;
//! let board = Board::from_position(&Board::start_pos().position()).unwrap();
//! ```
//!
//! [`MoveList`]: core/move_list/struct.MoveList.html
//! [`Board`]: board/struct.Board.html
//! [`Game::play_move`]: engine/struct.Game.html#method.play_move

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate failure;
extern crate rand;

pub mod board;
pub mod bot_prelude;
pub mod bots;
pub mod console;
pub mod core;
pub mod engine;
pub mod tools;

#[doc(no_inline)]
pub use crate::board::Board;
#[doc(no_inline)]
pub use crate::core::move_list::MoveList;
#[doc(no_inline)]
pub use crate::core::sq::SQ;
#[doc(no_inline)]
pub use crate::core::{Cell, Player};
