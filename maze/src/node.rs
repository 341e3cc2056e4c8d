//! Search tree records and the arena that owns them once they leave the frontier.

use crate::grid::{Direction, Point};

/// Index of a node inside a [`NodeArena`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(usize);

/// An immutable record of a visited state and how it was reached.
///
/// The root has neither a parent nor an action; every other node has both.
/// `parent` is a non-owning index into the arena holding already removed
/// nodes, so a parent is always created before any of its children.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Node {
    pub state: Point,
    pub parent: Option<NodeId>,
    pub action: Option<Direction>,
}

impl Node {
    pub fn root(state: Point) -> Self {
        Self {
            state,
            parent: None,
            action: None,
        }
    }

    pub fn child(state: Point, parent: NodeId, action: Direction) -> Self {
        Self {
            state,
            parent: Some(parent),
            action: Some(action),
        }
    }
}

/// Append-only storage for nodes removed from the frontier.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Walk from `node` up to the root and return the `(action, state)` pairs
    /// in forward order. The root itself carries no action and is left out.
    pub fn backtrack(&self, node: &Node) -> Vec<(Direction, Point)> {
        let mut path = Vec::new();
        let mut current = Some(node);

        while let Some(node) = current {
            let Some(action) = node.action else {
                break;
            };
            path.push((action, node.state));
            current = node.parent.and_then(|id| self.get(id));
        }

        path.reverse();
        path
    }
}
