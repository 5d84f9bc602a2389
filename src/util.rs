//! Utility functions for playing games between strategies.

use super::error::{Result, SearchError};
use super::interface::*;

/// Play a complete game from the start state of `game`, with the two
/// strategies taking turns; `s1` moves first.
///
/// Returns the terminal state reached and its payoffs. A
/// `SearchError::NoAvailableActions` raised by a strategy is reported with
/// its ply counted from the start state.
pub fn battle_royale<G, S1, S2>(
    game: &G, s1: &mut S1, s2: &mut S2,
) -> Result<(G::S, Payoffs<PlayerOf<G>>)>
where
    G: Game,
    S1: Strategy<G>,
    S2: Strategy<G>,
{
    let mut state = game.start_state();
    let mut strategies: [&mut dyn Strategy<G>; 2] = [s1, s2];
    let mut s = 0;
    let mut ply = 0;
    while !game.is_terminal(&state) {
        let strategy = &mut strategies[s];
        // Strategies count plies from the state they searched.
        let choice = strategy.choose_action(game, &state).map_err(|err| match err {
            SearchError::NoAvailableActions { ply: depth } => {
                SearchError::NoAvailableActions { ply: ply + depth }
            }
            err => err,
        })?;
        match choice {
            Some(action) => state = game.transition(&state, &action),
            None => return Err(SearchError::NoAvailableActions { ply }),
        }
        s = 1 - s;
        ply += 1;
    }
    let payoffs = game.evaluate_terminal(&state);
    log::debug!("game over after {} plies", ply);
    Ok((state, payoffs))
}
