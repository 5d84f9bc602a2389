//! Errors reported by the searches.

use thiserror::Error;

/// Errors that abort a search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SearchError {
    /// A non-terminal state generated no actions. `ply` counts the moves
    /// from the state the search started at.
    #[error("non-terminal state at ply {ply} has no available actions")]
    NoAvailableActions { ply: usize },

    /// The caller broke the contract of a search entry point.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A terminal payoff vector did not score the searching player.
    #[error("terminal payoffs have no entry for player {player}")]
    MissingPayoff { player: String },
}

pub type Result<T> = std::result::Result<T, SearchError>;
