extern crate clap;
extern crate env_logger;
extern crate othello;

use clap::{Parser, ValueEnum};

use othello::console::{self, GameConfig};
use othello::Player;

use std::io;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "othello", about = "Play Othello against an alpha-beta searcher")]
struct Args {
    /// File holding the starting position (turn, then 64 cells; 5 = empty)
    #[arg(long)]
    position: Option<PathBuf>,

    /// Difficulty, from 1 (extremely easy) to 5 (extremely hard)
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5))]
    difficulty: u8,

    /// Search depth in plies; overrides the difficulty
    #[arg(long)]
    depth: Option<u16>,

    /// Let the computer play both sides
    #[arg(long)]
    self_play: bool,

    /// The side the human plays
    #[arg(long, value_enum, default_value_t = Side::Black)]
    human: Side,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Side {
    Black,
    White,
}

impl From<Side> for Player {
    fn from(side: Side) -> Player {
        match side {
            Side::Black => Player::Black,
            Side::White => Player::White,
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let human = if args.self_play {
        None
    } else {
        Some(args.human.into())
    };
    let config = match GameConfig::new(args.difficulty, args.depth, args.position.as_deref(), human) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = console::run(config, stdin.lock(), &mut stdout.lock()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
