//! An implementation of plain Minimax.
//!
//! Searches the whole game tree without pruning. The searching player
//! maximizes its own payoff and assumes the opponent minimizes it, which is
//! only sound for two-player, constant-sum games.

use super::super::error::Result;
use super::super::interface::*;
use super::super::stats::SearchStats;
use super::util::*;

pub struct Minimax<G: Game> {
    action_pool: ActionPool<G::A>,
    stats: SearchStats,
    prev_value: Option<Value>,
}

impl<G: Game> Minimax<G> {
    pub fn new() -> Minimax<G> {
        Minimax {
            action_pool: ActionPool::default(),
            stats: SearchStats::default(),
            prev_value: None,
        }
    }

    /// Value of the root for the player to move there, from the last search.
    pub fn root_value(&self) -> Option<Value> {
        self.prev_value
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn max_value(
        &mut self, game: &G, state: &G::S, player: PlayerOf<G>, ply: usize,
    ) -> Result<(Value, Option<G::A>)> {
        self.stats.nodes_visited += 1;
        if game.is_terminal(state) {
            return Ok((terminal_value(game, state, player, &mut self.stats)?, None));
        }
        let actions = generate_actions(game, state, &mut self.action_pool, ply)?;
        let mut best = Value::NEG_INFINITY;
        let mut best_action = None;
        for action in actions.iter() {
            let next = game.transition(state, action);
            let (value, _) = self.min_value(game, &next, player, ply + 1)?;
            // Strictly better than any action found so far.
            if value > best || best_action.is_none() {
                best = value;
                best_action = Some(action.clone());
            }
        }
        self.action_pool.free(actions);
        Ok((best, best_action))
    }

    fn min_value(
        &mut self, game: &G, state: &G::S, player: PlayerOf<G>, ply: usize,
    ) -> Result<(Value, Option<G::A>)> {
        self.stats.nodes_visited += 1;
        if game.is_terminal(state) {
            return Ok((terminal_value(game, state, player, &mut self.stats)?, None));
        }
        let actions = generate_actions(game, state, &mut self.action_pool, ply)?;
        let mut best = Value::INFINITY;
        let mut best_action = None;
        for action in actions.iter() {
            let next = game.transition(state, action);
            let (value, _) = self.max_value(game, &next, player, ply + 1)?;
            if value < best || best_action.is_none() {
                best = value;
                best_action = Some(action.clone());
            }
        }
        self.action_pool.free(actions);
        Ok((best, best_action))
    }
}

impl<G: Game> Default for Minimax<G> {
    fn default() -> Self {
        Minimax::new()
    }
}

impl<G: Game> Strategy<G> for Minimax<G> {
    fn choose_action(&mut self, game: &G, state: &G::S) -> Result<Option<G::A>> {
        self.stats.reset();
        self.prev_value = None;
        let (value, action) = self.max_value(game, state, state.player_to_move(), 0)?;
        self.prev_value = Some(value);
        log::debug!("minimax: root value {}, {}", value, self.stats);
        Ok(action)
    }
}

/// Choose an action for the player to move in the start state of `game`,
/// searching the full game tree.
///
/// Returns `None` if the start state is terminal.
pub fn minimax<G: Game>(game: &G) -> Result<Option<G::A>> {
    Minimax::<G>::new().choose_action(game, &game.start_state())
}
