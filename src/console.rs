//! Text front end for playing a game from a terminal.
//!
//! Input is read from any `BufRead` and output goes to any `Write`. The binary hands in stdin
//! and stdout; anything else that speaks bytes works the same way.

use failure::Fail;

use crate::board::{Board, PositionError};
use crate::bots::AlphaBetaSearcher;
use crate::core::sq::SQ;
use crate::core::Player;
use crate::engine::{depth_for_difficulty, Game, GameResult, Turn};

use std::io::{self, BufRead, Write};
use std::path::Path;

/// Errors from resolving the settings of a session.
#[derive(Fail, Debug)]
pub enum ConfigError {
    #[fail(display = "no search depth for difficulty {}", difficulty)]
    UnknownDifficulty { difficulty: u8 },
    #[fail(display = "{}: {}", path, cause)]
    Position {
        path: String,
        #[cause]
        cause: PositionError,
    },
}

/// Settings for one session.
#[derive(Debug)]
pub struct GameConfig {
    pub depth: u16,
    /// The side typed in by a person. `None` lets the engine play both sides.
    pub human: Option<Player>,
    pub board: Board,
}

impl GameConfig {
    /// Resolves a session. An explicit `depth` wins over `difficulty`. Without a `position`
    /// file the game starts from the standard opening.
    pub fn new(
        difficulty: u8,
        depth: Option<u16>,
        position: Option<&Path>,
        human: Option<Player>,
    ) -> Result<GameConfig, ConfigError> {
        let depth = depth
            .or_else(|| depth_for_difficulty(difficulty))
            .ok_or(ConfigError::UnknownDifficulty { difficulty })?;
        let board = match position {
            Some(path) => {
                Board::from_position_file(path).map_err(|cause| ConfigError::Position {
                    path: path.display().to_string(),
                    cause,
                })?
            }
            None => Board::start_pos(),
        };
        Ok(GameConfig { depth, human, board })
    }
}

/// Plays a whole session and reports the outcome. Returns the game as it was left, which is
/// unfinished if the input ran out first.
pub fn run<R: BufRead, W: Write>(config: GameConfig, input: R, out: &mut W) -> io::Result<Game> {
    debug!("search depth {}, human {:?}", config.depth, config.human);
    let mut game = Game::new(config.board, config.depth);
    writeln!(out, "Welcome to Othello")?;
    writeln!(out, "Initial board:")?;
    writeln!(out, "{}", game.board().pretty_string())?;

    match config.human {
        Some(human) => play_interactive(&mut game, human, input, out)?,
        None => {
            game.play_full_game::<AlphaBetaSearcher>();
        }
    }

    report(&game, config.human, out)?;
    Ok(game)
}

/// Alternates between moves read from `input` for `human` and moves searched for the engine.
///
/// Unreadable and illegal moves are reported and asked for again. Running out of input leaves
/// the game unfinished.
pub fn play_interactive<R: BufRead, W: Write>(
    game: &mut Game,
    human: Player,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "You are {}", human)?;
    let mut lines = input.lines();

    while !game.is_over() {
        if game.board().turn() == human {
            if game.legal_moves().is_empty() {
                writeln!(out, "No valid moves available for you!")?;
                game.pass();
                continue;
            }
            write!(out, "Enter your move (row column): ")?;
            out.flush()?;
            let line = match lines.next() {
                Some(line) => line?,
                None => {
                    writeln!(out)?;
                    info!("input closed, leaving the game");
                    return Ok(());
                }
            };
            let sq = match parse_move(&line) {
                Some(sq) => sq,
                None => {
                    writeln!(out, "Could not read a move from {:?}", line.trim())?;
                    continue;
                }
            };
            if let Err(e) = game.play_move(sq) {
                writeln!(out, "Invalid move! {}", e)?;
                continue;
            }
            writeln!(out, "Board after your move:")?;
        } else {
            match game.step::<AlphaBetaSearcher>() {
                Turn::Played(_, sq) => writeln!(out, "Computer plays: {} {}", sq.row(), sq.col())?,
                Turn::Passed(_) => {
                    writeln!(out, "No valid moves available for computer!")?;
                    continue;
                }
            }
            writeln!(out, "Board after computer's move:")?;
        }
        writeln!(out, "{}", game.board().pretty_string())?;
    }
    Ok(())
}

/// Reads a move typed as two whitespace separated numbers, row first.
pub fn parse_move(line: &str) -> Option<SQ> {
    let mut parts = line.split_whitespace().map(|t| t.parse::<i8>());
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(row)), Some(Ok(col)), None) => SQ::checked(row, col),
        _ => None,
    }
}

/// Writes the final board, the piece counts and who won.
pub fn report<W: Write>(game: &Game, human: Option<Player>, out: &mut W) -> io::Result<()> {
    if !game.is_over() {
        return writeln!(out, "Game abandoned.");
    }
    let record = game.record();
    writeln!(out, "{}", game.board().pretty_string())?;
    writeln!(
        out,
        "Black {} : White {} after {} moves",
        record.black,
        record.white,
        record.moves.len()
    )?;
    match (record.result, human) {
        (GameResult::Draw, _) => writeln!(out, "It's a draw!"),
        (GameResult::Win(winner), Some(human)) if winner == human => writeln!(out, "You win!"),
        (GameResult::Win(_), Some(_)) => writeln!(out, "Computer wins!"),
        (GameResult::Win(winner), None) => writeln!(out, "{} wins!", winner),
    }
}
