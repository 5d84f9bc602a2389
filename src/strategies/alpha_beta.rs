//! An implementation of Minimax with alpha-beta pruning.
//!
//! Returns the same action as `Minimax` while skipping the branches that
//! cannot affect the decision at the root. `AlphaBetaCutoff` additionally
//! stops expanding the tree after a fixed number of plies and scores the
//! frontier with a caller-supplied heuristic.

use super::super::error::{Result, SearchError};
use super::super::interface::*;
use super::super::stats::SearchStats;
use super::util::*;

// Decides where the search stops expanding non-terminal states.
trait Horizon<G: Game> {
    // The static value of a non-terminal state `ply` moves below the root,
    // or `None` to expand it.
    fn cutoff(&self, state: &G::S, player: PlayerOf<G>, ply: usize) -> Option<Value>;
}

// Expands every non-terminal state.
struct Unbounded;

impl<G: Game> Horizon<G> for Unbounded {
    fn cutoff(&self, _: &G::S, _: PlayerOf<G>, _: usize) -> Option<Value> {
        None
    }
}

// Scores every non-terminal state at `cutoff_ply` with the heuristic, i.e.
// once the remaining depth budget reaches zero.
struct PlyLimit<'h, H> {
    cutoff_ply: usize,
    heuristic: &'h H,
}

impl<'h, G: Game, H: Heuristic<G>> Horizon<G> for PlyLimit<'h, H> {
    fn cutoff(&self, state: &G::S, player: PlayerOf<G>, ply: usize) -> Option<Value> {
        if ply >= self.cutoff_ply {
            Some(<H as Heuristic<G>>::estimate(self.heuristic, state, player))
        } else {
            None
        }
    }
}

// The state of one search call.
struct Search<'a, G: Game, Z> {
    game: &'a G,
    // The player to move at the root, whose payoff is maximized.
    player: PlayerOf<G>,
    horizon: &'a Z,
    action_pool: &'a mut ActionPool<G::A>,
    stats: &'a mut SearchStats,
}

impl<'a, G: Game, Z: Horizon<G>> Search<'a, G, Z> {
    // The value of `state` if it is not to be expanded. Terminal states are
    // always scored by their payoff, never by the horizon.
    fn leaf_value(&mut self, state: &G::S, ply: usize) -> Result<Option<Value>> {
        if self.game.is_terminal(state) {
            return terminal_value(self.game, state, self.player, self.stats).map(Some);
        }
        let value = self.horizon.cutoff(state, self.player, ply);
        if value.is_some() {
            self.stats.heuristic_evaluations += 1;
            log::trace!("depth cutoff at ply {}", ply);
        }
        Ok(value)
    }

    fn max_value(
        &mut self, state: &G::S, mut alpha: Value, beta: Value, ply: usize,
    ) -> Result<(Value, Option<G::A>)> {
        self.stats.nodes_visited += 1;
        if let Some(value) = self.leaf_value(state, ply)? {
            return Ok((value, None));
        }
        let actions = generate_actions(self.game, state, self.action_pool, ply)?;
        let mut best = Value::NEG_INFINITY;
        let mut best_action = None;
        for (i, action) in actions.iter().enumerate() {
            let next = self.game.transition(state, action);
            let (value, _) = self.min_value(&next, alpha, beta, ply + 1)?;
            if value > best || best_action.is_none() {
                best = value;
                best_action = Some(action.clone());
                alpha = alpha.max(best);
            }
            // The minimizing ancestor will never allow this line.
            if best >= beta {
                if i + 1 < actions.len() {
                    self.stats.prunes += 1;
                    log::trace!("beta cutoff at ply {}", ply);
                }
                break;
            }
        }
        self.action_pool.free(actions);
        Ok((best, best_action))
    }

    fn min_value(
        &mut self, state: &G::S, alpha: Value, mut beta: Value, ply: usize,
    ) -> Result<(Value, Option<G::A>)> {
        self.stats.nodes_visited += 1;
        if let Some(value) = self.leaf_value(state, ply)? {
            return Ok((value, None));
        }
        let actions = generate_actions(self.game, state, self.action_pool, ply)?;
        let mut best = Value::INFINITY;
        let mut best_action = None;
        for (i, action) in actions.iter().enumerate() {
            let next = self.game.transition(state, action);
            let (value, _) = self.max_value(&next, alpha, beta, ply + 1)?;
            if value < best || best_action.is_none() {
                best = value;
                best_action = Some(action.clone());
                beta = beta.min(best);
            }
            if best <= alpha {
                if i + 1 < actions.len() {
                    self.stats.prunes += 1;
                    log::trace!("alpha cutoff at ply {}", ply);
                }
                break;
            }
        }
        self.action_pool.free(actions);
        Ok((best, best_action))
    }
}

// Run a search from `state` over the full (-inf, inf) window.
fn search_root<G: Game, Z: Horizon<G>>(
    game: &G, state: &G::S, horizon: &Z, action_pool: &mut ActionPool<G::A>,
    stats: &mut SearchStats,
) -> Result<(Value, Option<G::A>)> {
    stats.reset();
    let mut search =
        Search { game, player: state.player_to_move(), horizon, action_pool, stats };
    search.max_value(state, Value::NEG_INFINITY, Value::INFINITY, 0)
}

pub struct AlphaBeta<G: Game> {
    action_pool: ActionPool<G::A>,
    stats: SearchStats,
    prev_value: Option<Value>,
}

impl<G: Game> AlphaBeta<G> {
    pub fn new() -> AlphaBeta<G> {
        AlphaBeta {
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
}

impl<G: Game> Default for AlphaBeta<G> {
    fn default() -> Self {
        AlphaBeta::new()
    }
}

impl<G: Game> Strategy<G> for AlphaBeta<G> {
    fn choose_action(&mut self, game: &G, state: &G::S) -> Result<Option<G::A>> {
        self.prev_value = None;
        let (value, action) =
            search_root(game, state, &Unbounded, &mut self.action_pool, &mut self.stats)?;
        self.prev_value = Some(value);
        log::debug!("alpha-beta: root value {}, {}", value, self.stats);
        Ok(action)
    }
}

/// Options to use for the depth-limited search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CutoffOptions {
    cutoff_ply: usize,
}

impl CutoffOptions {
    /// Defaults to a cutoff of two plies: the searching player's move and
    /// the opponent's reply.
    pub fn new() -> Self {
        CutoffOptions { cutoff_ply: 2 }
    }

    /// Number of plies to search before applying the heuristic.
    ///
    /// With 1, the heuristic scores the states that result from the
    /// searching player's move; with 2, the states after the opponent's
    /// reply; and so on. Must be positive.
    pub fn with_cutoff_ply(mut self, cutoff_ply: usize) -> Self {
        self.cutoff_ply = cutoff_ply;
        self
    }

    pub fn cutoff_ply(&self) -> usize {
        self.cutoff_ply
    }

    fn validate(&self) -> Result<()> {
        if self.cutoff_ply == 0 {
            return Err(SearchError::InvalidArgument {
                message: "cutoff_ply must be positive".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for CutoffOptions {
    fn default() -> Self {
        CutoffOptions::new()
    }
}

/// Alpha-beta search that estimates states beyond a fixed depth.
///
/// The result is only as good as the heuristic. Terminal states within the
/// cutoff are still scored by their payoffs, and the heuristic is never
/// called on a terminal state.
pub struct AlphaBetaCutoff<G: Game, H> {
    heuristic: H,
    opts: CutoffOptions,
    action_pool: ActionPool<G::A>,
    stats: SearchStats,
    prev_value: Option<Value>,
}

impl<G: Game, H: Heuristic<G>> AlphaBetaCutoff<G, H> {
    pub fn new(heuristic: H, opts: CutoffOptions) -> Result<Self> {
        opts.validate()?;
        Ok(AlphaBetaCutoff {
            heuristic,
            opts,
            action_pool: ActionPool::default(),
            stats: SearchStats::default(),
            prev_value: None,
        })
    }

    pub fn with_cutoff_ply(heuristic: H, cutoff_ply: usize) -> Result<Self> {
        Self::new(heuristic, CutoffOptions::new().with_cutoff_ply(cutoff_ply))
    }

    pub fn options(&self) -> &CutoffOptions {
        &self.opts
    }

    /// Value of the root for the player to move there, from the last search.
    pub fn root_value(&self) -> Option<Value> {
        self.prev_value
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

impl<G: Game, H: Heuristic<G>> Strategy<G> for AlphaBetaCutoff<G, H> {
    fn choose_action(&mut self, game: &G, state: &G::S) -> Result<Option<G::A>> {
        self.prev_value = None;
        let horizon = PlyLimit { cutoff_ply: self.opts.cutoff_ply, heuristic: &self.heuristic };
        let (value, action) =
            search_root(game, state, &horizon, &mut self.action_pool, &mut self.stats)?;
        self.prev_value = Some(value);
        log::debug!(
            "alpha-beta cutoff at {} plies: root value {}, {}",
            self.opts.cutoff_ply,
            value,
            self.stats
        );
        Ok(action)
    }
}

/// Choose an action for the player to move in the start state of `game`,
/// using alpha-beta pruning over the full game tree.
///
/// Returns `None` if the start state is terminal.
pub fn alpha_beta<G: Game>(game: &G) -> Result<Option<G::A>> {
    AlphaBeta::<G>::new().choose_action(game, &game.start_state())
}

/// Choose an action for the player to move in the start state of `game`,
/// searching `cutoff_ply` plies deep and scoring non-terminal states there
/// with `heuristic`.
///
/// Fails with `SearchError::InvalidArgument` if `cutoff_ply` is zero, before
/// touching the game. Returns `None` if the start state is terminal.
pub fn alpha_beta_cutoff<G: Game, H: Heuristic<G>>(
    game: &G, cutoff_ply: usize, heuristic: H,
) -> Result<Option<G::A>> {
    let mut strategy = AlphaBetaCutoff::<G, H>::with_cutoff_ply(heuristic, cutoff_ply)?;
    strategy.choose_action(game, &game.start_state())
}
