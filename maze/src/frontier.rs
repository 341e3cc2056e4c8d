//! Exploration order of the solver.
//!
//! Both frontiers keep nodes in insertion order and answer membership by a
//! linear scan. They differ only in which end `remove` takes from.

use std::{collections::VecDeque, fmt::Display, str::FromStr};

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use crate::{error::SolveError, grid::Point, node::Node};

/// The collection of discovered but not yet explored nodes.
///
/// `add` does not de-duplicate; the solver checks `contains_state` first.
pub trait Frontier {
    fn add(&mut self, node: Node);

    fn contains_state(&self, state: Point) -> bool;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;

    /// Drop every pending node so the frontier can seed a new run.
    fn clear(&mut self);

    /// Take the next node to explore, or [`SolveError::EmptyFrontier`].
    fn remove(&mut self) -> Result<Node, SolveError>;
}

/// Last in, first out: depth-first exploration.
#[derive(Debug, Default)]
pub struct StackFrontier {
    nodes: Vec<Node>,
}

impl StackFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    fn add(&mut self, node: Node) {
        self.nodes.push(node);
    }

    fn contains_state(&self, state: Point) -> bool {
        self.nodes.iter().any(|node| node.state == state)
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }

    fn remove(&mut self) -> Result<Node, SolveError> {
        self.nodes.pop().ok_or(SolveError::EmptyFrontier)
    }
}

/// First in, first out: breadth-first exploration. The first path found to
/// any cell uses the fewest possible moves.
#[derive(Debug, Default)]
pub struct QueueFrontier {
    nodes: VecDeque<Node>,
}

impl QueueFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for QueueFrontier {
    fn add(&mut self, node: Node) {
        self.nodes.push_back(node);
    }

    fn contains_state(&self, state: Point) -> bool {
        self.nodes.iter().any(|node| node.state == state)
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }

    fn remove(&mut self) -> Result<Node, SolveError> {
        self.nodes.pop_front().ok_or(SolveError::EmptyFrontier)
    }
}

/// Which frontier the solver creates for a run.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[serde(alias = "dfs")]
    Stack,
    #[default]
    #[serde(alias = "bfs")]
    Queue,
}

impl Strategy {
    /// A fresh, empty frontier with this strategy's removal order.
    pub fn frontier(self) -> Box<dyn Frontier> {
        match self {
            Strategy::Stack => Box::new(StackFrontier::new()),
            Strategy::Queue => Box::new(QueueFrontier::new()),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Strategy::Stack => "stack",
                Strategy::Queue => "queue",
            }
        )
    }
}

impl FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stack" | "dfs" => Ok(Strategy::Stack),
            "queue" | "bfs" => Ok(Strategy::Queue),
            _ => Err(anyhow!("Invalid strategy: {} (expected stack or queue)", s)),
        }
    }
}
