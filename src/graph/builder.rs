//! Fluent API for building UndirectedGraph instances.

use crate::types::{Edge, NodeId, WalkResult};

use super::UndirectedGraph;

/// Fluent builder for constructing an UndirectedGraph.
///
/// Nodes and edges are collected as given and validated in [`build`].
///
/// [`build`]: GraphBuilder::build
pub struct GraphBuilder {
    nodes: Vec<NodeId>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a node, which may stay isolated.
    pub fn node(&mut self, id: NodeId) -> &mut Self {
        self.nodes.push(id);
        self
    }

    /// Add several nodes.
    pub fn nodes(&mut self, ids: impl IntoIterator<Item = NodeId>) -> &mut Self {
        self.nodes.extend(ids);
        self
    }

    /// Add an undirected edge between two nodes.
    pub fn edge(&mut self, a: NodeId, b: NodeId) -> &mut Self {
        self.edges.push(Edge::new(a, b));
        self
    }

    /// Add several edges.
    pub fn edges(&mut self, pairs: impl IntoIterator<Item = (NodeId, NodeId)>) -> &mut Self {
        self.edges.extend(pairs.into_iter().map(Edge::from));
        self
    }

    /// Build the final graph.
    ///
    /// Explicit nodes come first in node order, then edge endpoints in the
    /// order the edges were declared.
    pub fn build(&self) -> WalkResult<UndirectedGraph> {
        UndirectedGraph::from_parts(self.nodes.clone(), self.edges.clone())
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
