//! A strategy that randomly chooses an action, for use in tests.

use super::super::error::{Result, SearchError};
use super::super::interface::*;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Plays a uniformly random legal action.
pub struct Random<R = ThreadRng> {
    rng: R,
}

impl Random<ThreadRng> {
    pub fn new() -> Self {
        Random { rng: rand::thread_rng() }
    }
}

impl Default for Random<ThreadRng> {
    fn default() -> Self {
        Random::new()
    }
}

impl<R: Rng> Random<R> {
    /// A random strategy drawing from `rng`, e.g. a seeded one for
    /// reproducible games.
    pub fn with_rng(rng: R) -> Self {
        Random { rng }
    }
}

impl<G: Game, R: Rng> Strategy<G> for Random<R> {
    fn choose_action(&mut self, game: &G, state: &G::S) -> Result<Option<G::A>> {
        if game.is_terminal(state) {
            return Ok(None);
        }
        let mut actions = Vec::new();
        game.generate_actions(state, &mut actions);
        match actions.choose(&mut self.rng) {
            Some(action) => Ok(Some(action.clone())),
            // The searched state itself is stuck.
            None => Err(SearchError::NoAvailableActions { ply: 0 }),
        }
    }
}
