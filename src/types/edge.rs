//! The undirected edge struct.

use serde::{Deserialize, Serialize};

use super::NodeId;

/// An unordered pair of nodes.
///
/// `a` and `b` keep the orientation the edge was declared with, which is
/// only used for display. Equality and hashing go through [`Edge::key`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Edge {
    /// First endpoint as declared.
    pub a: NodeId,
    /// Second endpoint as declared.
    pub b: NodeId,
}

impl Edge {
    /// Create a new edge between two nodes.
    pub fn new(a: NodeId, b: NodeId) -> Self {
        Self { a, b }
    }

    /// Orientation-independent key: the smaller endpoint comes first.
    pub fn key(&self) -> (NodeId, NodeId) {
        if self.a <= self.b {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }

    /// True if both endpoints are the same node.
    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }

    /// Given one endpoint, return the other one.
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if node == self.a {
            Some(self.b)
        } else if node == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl std::hash::Hash for Edge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<(NodeId, NodeId)> for Edge {
    fn from((a, b): (NodeId, NodeId)) -> Self {
        Self::new(a, b)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -- {}", self.a, self.b)
    }
}
