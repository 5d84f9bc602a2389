//! Minimax search over two-player, constant-sum games.
//!
//! A game is described by implementing `Game` for it. `minimax`,
//! `alpha_beta` and `alpha_beta_cutoff` choose an action for the player to
//! move in the game's start state; the `Strategy` types behind them can
//! search from any state and report statistics about the last search.

pub mod error;
pub mod games;
pub mod interface;
pub mod stats;
pub mod strategies;
pub mod util;

pub use error::{Result, SearchError};
pub use interface::{Game, Heuristic, Payoffs, PlayerOf, State, Strategy, Value};
pub use stats::SearchStats;
pub use strategies::alpha_beta::{
    alpha_beta, alpha_beta_cutoff, AlphaBeta, AlphaBetaCutoff, CutoffOptions,
};
pub use strategies::minimax::{minimax, Minimax};
pub use strategies::random::Random;
