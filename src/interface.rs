//! The common structures and traits.

use super::error::Result;
use std::fmt::Debug;

/// A real-valued score of a game state from one player's perspective.
/// Higher values are better for that player.
pub type Value = f64;

/// The payoff assigned to every player at a terminal state.
///
/// Games are assumed to be constant-sum: the sum of all entries is the same
/// for every terminal state.
#[derive(Clone, Debug, PartialEq)]
pub struct Payoffs<P> {
    entries: Vec<(P, Value)>,
}

impl<P: Copy + Eq> Payoffs<P> {
    pub fn new() -> Self {
        Payoffs { entries: Vec::with_capacity(2) }
    }

    /// Payoffs of a zero-sum game: `player` gets `value` and `opponent` its
    /// negation.
    pub fn zero_sum(player: P, opponent: P, value: Value) -> Self {
        Payoffs::new().with(player, value).with(opponent, -value)
    }

    /// Set the payoff of `player`, replacing any previous entry.
    pub fn with(mut self, player: P, value: Value) -> Self {
        match self.entries.iter_mut().find(|(p, _)| *p == player) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((player, value)),
        }
        self
    }

    pub fn get(&self, player: P) -> Option<Value> {
        self.entries.iter().find(|(p, _)| *p == player).map(|&(_, v)| v)
    }

    /// Sum across all players. Constant for a constant-sum game.
    pub fn total(&self) -> Value {
        self.entries.iter().map(|&(_, v)| v).sum()
    }
}

impl<P: Copy + Eq> Default for Payoffs<P> {
    fn default() -> Self {
        Payoffs::new()
    }
}

impl<P: Copy + Eq> FromIterator<(P, Value)> for Payoffs<P> {
    fn from_iter<I: IntoIterator<Item = (P, Value)>>(iter: I) -> Self {
        iter.into_iter().fold(Payoffs::new(), |payoffs, (p, v)| payoffs.with(p, v))
    }
}

/// A game position. The search never mutates one; new positions come from
/// `Game::transition`.
pub trait State {
    /// Identifies a player.
    type Player: Copy + Eq + Debug;

    /// The player whose turn it is in this position.
    fn player_to_move(&self) -> Self::Player;
}

/// Shorthand for the player type of a game.
pub type PlayerOf<G> = <<G as Game>::S as State>::Player;

/// Defines the rules for a two-player, constant-sum, perfect-knowledge game.
///
/// A game ties together types for the state and actions, generates the legal
/// actions from a particular state, and scores terminal states. Every method
/// is expected to be a pure function of its arguments.
pub trait Game {
    /// The type of the game state.
    type S: State;
    /// The type of game actions.
    type A: Clone;

    /// The initial state of a search episode.
    fn start_state(&self) -> Self::S;

    /// Append the legal actions at `state` to `actions`, which is empty on
    /// entry.
    ///
    /// Must generate at least one action for every non-terminal state. The
    /// order is significant: among equally valued actions, searches pick the
    /// first one generated.
    fn generate_actions(&self, state: &Self::S, actions: &mut Vec<Self::A>);

    /// The state reached by playing `action` at `state`.
    fn transition(&self, state: &Self::S, action: &Self::A) -> Self::S;

    fn is_terminal(&self, state: &Self::S) -> bool;

    /// Payoffs for every player. Only called on terminal states.
    fn evaluate_terminal(&self, state: &Self::S) -> Payoffs<PlayerOf<Self>>;
}

/// Estimates the value of a non-terminal state for a player.
///
/// Any `Fn(&S, Player) -> Value` closure is a heuristic.
pub trait Heuristic<G: Game> {
    /// Never called on terminal states.
    fn estimate(&self, state: &G::S, player: PlayerOf<G>) -> Value;
}

impl<G, F> Heuristic<G> for F
where
    G: Game,
    F: Fn(&G::S, PlayerOf<G>) -> Value,
{
    fn estimate(&self, state: &G::S, player: PlayerOf<G>) -> Value {
        self(state, player)
    }
}

/// Defines a method of choosing an action for the player to move.
pub trait Strategy<G: Game> {
    /// Returns `None` if `state` is terminal.
    fn choose_action(&mut self, game: &G, state: &G::S) -> Result<Option<G::A>>;
}
