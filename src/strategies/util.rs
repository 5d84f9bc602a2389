use super::super::error::{Result, SearchError};
use super::super::interface::*;
use super::super::stats::SearchStats;

// Reuses the action buffers of finished frames, so a search only allocates
// one buffer per ply of its deepest line.
pub(super) struct ActionPool<A> {
    pool: Vec<Vec<A>>,
}

impl<A> Default for ActionPool<A> {
    fn default() -> Self {
        ActionPool { pool: Vec::new() }
    }
}

impl<A> ActionPool<A> {
    pub(super) fn alloc(&mut self) -> Vec<A> {
        self.pool.pop().unwrap_or_default()
    }

    pub(super) fn free(&mut self, mut actions: Vec<A>) {
        actions.clear();
        self.pool.push(actions);
    }
}

// Generate the actions of a non-terminal state, failing if there are none.
pub(super) fn generate_actions<G: Game>(
    game: &G, state: &G::S, pool: &mut ActionPool<G::A>, ply: usize,
) -> Result<Vec<G::A>> {
    let mut actions = pool.alloc();
    game.generate_actions(state, &mut actions);
    if actions.is_empty() {
        pool.free(actions);
        return Err(SearchError::NoAvailableActions { ply });
    }
    Ok(actions)
}

// The payoff of `player` at a terminal state.
pub(super) fn terminal_value<G: Game>(
    game: &G, state: &G::S, player: PlayerOf<G>, stats: &mut SearchStats,
) -> Result<Value> {
    stats.terminal_evaluations += 1;
    game.evaluate_terminal(state)
        .get(player)
        .ok_or_else(|| SearchError::MissingPayoff { player: format!("{:?}", player) })
}
