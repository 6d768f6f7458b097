//! Easy importing of all available bots.

pub use crate::bots::AlphaBetaSearcher;
pub use crate::bots::MiniMaxSearcher;
pub use crate::bots::RandomBot;

pub use crate::tools::Searcher;
