#![allow(dead_code)]

use adversarial_search::games::tree::Node;
use adversarial_search::{Game, Payoffs, PlayerOf, Value};
use rand::Rng;
use std::cell::{Cell, RefCell};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Wraps a game and records how the searches use it.
pub struct Counting<G: Game> {
    inner: G,
    pub generate_calls: Cell<usize>,
    pub transitions: Cell<usize>,
    pub evaluated: RefCell<Vec<G::S>>,
}

impl<G: Game> Counting<G> {
    pub fn new(inner: G) -> Self {
        Counting {
            inner,
            generate_calls: Cell::new(0),
            transitions: Cell::new(0),
            evaluated: RefCell::new(Vec::new()),
        }
    }
}

impl<G: Game> Game for Counting<G>
where
    G::S: Clone,
{
    type S = G::S;
    type A = G::A;

    fn start_state(&self) -> G::S {
        self.inner.start_state()
    }

    fn generate_actions(&self, state: &G::S, actions: &mut Vec<G::A>) {
        self.generate_calls.set(self.generate_calls.get() + 1);
        self.inner.generate_actions(state, actions)
    }

    fn transition(&self, state: &G::S, action: &G::A) -> G::S {
        self.transitions.set(self.transitions.get() + 1);
        self.inner.transition(state, action)
    }

    fn is_terminal(&self, state: &G::S) -> bool {
        self.inner.is_terminal(state)
    }

    fn evaluate_terminal(&self, state: &G::S) -> Payoffs<PlayerOf<Self>> {
        self.evaluated.borrow_mut().push(state.clone());
        self.inner.evaluate_terminal(state)
    }
}

/// A random tree up to `depth` plies deep. Branches end early now and then,
/// and leaf values are small integers so that ties are common.
pub fn random_tree<R: Rng>(rng: &mut R, depth: usize, max_branching: usize) -> Node {
    if depth == 0 || rng.gen_ratio(1, 8) {
        return Node::leaf(rng.gen_range(-4..=4) as Value);
    }
    let branching = rng.gen_range(1..=max_branching);
    Node::branch((0..branching).map(|_| random_tree(rng, depth - 1, max_branching)).collect())
}
