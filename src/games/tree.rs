//! A game given by an explicit game tree.
//!
//! Players 0 and 1 alternate, player 0 moving at the root. Each leaf holds
//! the payoff of player 0; player 1 gets its negation. Useful for checking
//! searches against hand-computed trees.

use crate::error::{Result, SearchError};
use crate::interface::{self, Payoffs, Value};

/// A node of the game tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// A terminal state, with the payoff of player 0.
    Leaf(Value),
    /// A non-terminal state; each child is reached by one action.
    Branch(Vec<Node>),
}

impl Node {
    pub fn leaf(value: Value) -> Node {
        Node::Leaf(value)
    }

    pub fn branch(children: Vec<Node>) -> Node {
        Node::Branch(children)
    }

    /// Number of nodes in this subtree, itself included.
    pub fn size(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Branch(children) => 1 + children.iter().map(Node::size).sum::<usize>(),
        }
    }
}

/// A position in the tree: the child indices taken from the root.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    path: Vec<usize>,
}

impl Position {
    pub fn root() -> Position {
        Position::default()
    }

    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Number of moves played to reach this position.
    pub fn ply(&self) -> usize {
        self.path.len()
    }
}

impl interface::State for Position {
    type Player = usize;

    fn player_to_move(&self) -> usize {
        self.path.len() % 2
    }
}

pub struct GameTree {
    root: Node,
}

impl GameTree {
    pub fn new(root: Node) -> GameTree {
        GameTree { root }
    }

    /// A uniform tree with `branching` children per branch, whose leaves
    /// from left to right are `leaves`.
    ///
    /// The number of leaves must be a power of `branching`; a single leaf
    /// gives a tree whose root is terminal.
    pub fn uniform(branching: usize, leaves: &[Value]) -> Result<GameTree> {
        if branching < 2 {
            return Err(SearchError::InvalidArgument {
                message: format!("branching factor {} is below 2", branching),
            });
        }
        let mut level: Vec<Node> = leaves.iter().map(|&v| Node::Leaf(v)).collect();
        if level.is_empty() {
            return Err(SearchError::InvalidArgument { message: "no leaves".to_string() });
        }
        while level.len() > 1 {
            if level.len() % branching != 0 {
                return Err(SearchError::InvalidArgument {
                    message: format!(
                        "{} leaves is not a power of the branching factor {}",
                        leaves.len(),
                        branching
                    ),
                });
            }
            let mut next = Vec::with_capacity(level.len() / branching);
            let mut children = level.into_iter().peekable();
            while children.peek().is_some() {
                next.push(Node::Branch(children.by_ref().take(branching).collect()));
            }
            level = next;
        }
        Ok(GameTree::new(level.remove(0)))
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The node at `pos`.
    ///
    /// Panics if the path does not exist in this tree.
    pub fn node(&self, pos: &Position) -> &Node {
        pos.path.iter().fold(&self.root, |node, &i| match node {
            Node::Branch(children) => &children[i],
            Node::Leaf(_) => panic!("path {:?} continues past a leaf", pos.path),
        })
    }
}

impl interface::Game for GameTree {
    type S = Position;
    type A = usize;

    fn start_state(&self) -> Position {
        Position::root()
    }

    fn generate_actions(&self, pos: &Position, actions: &mut Vec<usize>) {
        if let Node::Branch(children) = self.node(pos) {
            actions.extend(0..children.len());
        }
    }

    fn transition(&self, pos: &Position, action: &usize) -> Position {
        let mut path = Vec::with_capacity(pos.path.len() + 1);
        path.extend_from_slice(&pos.path);
        path.push(*action);
        Position { path }
    }

    fn is_terminal(&self, pos: &Position) -> bool {
        matches!(self.node(pos), Node::Leaf(_))
    }

    fn evaluate_terminal(&self, pos: &Position) -> Payoffs<usize> {
        match self.node(pos) {
            Node::Leaf(value) => Payoffs::zero_sum(0, 1, *value),
            Node::Branch(_) => Payoffs::new(),
        }
    }
}
