//! Counters collected during a search.

use std::fmt::{Display, Formatter};

/// Runtime stats for the last search performed by a strategy.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States entered by a value function, the root included.
    pub nodes_visited: usize,
    /// Calls to `Game::evaluate_terminal`.
    pub terminal_evaluations: usize,
    /// Calls to the heuristic at the depth cutoff.
    pub heuristic_evaluations: usize,
    /// Times a node skipped at least one of its actions because of the
    /// alpha-beta window.
    pub prunes: usize,
}

impl SearchStats {
    pub(crate) fn reset(&mut self) {
        *self = SearchStats::default();
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} nodes, {} terminal evaluations, {} heuristic evaluations, {} prunes",
            self.nodes_visited, self.terminal_evaluations, self.heuristic_evaluations, self.prunes
        )
    }
}
