//! Core graph structure: nodes + undirected edges with an adjacency index.

use std::collections::HashMap;

use crate::types::{Edge, NodeId, WalkError, WalkResult, SAMPLE_EDGES};

use super::GraphBuilder;

/// An undirected, unweighted graph with integer node ids.
///
/// Node order and neighbour order follow insertion order, so every traversal
/// over the same graph is reproducible.
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph {
    /// All nodes in order of first appearance.
    nodes: Vec<NodeId>,
    /// Unique edges in declaration order.
    edges: Vec<Edge>,
    /// Node id -> position in `nodes` and `adjacency`.
    index: HashMap<NodeId, usize>,
    /// Neighbours of each node, in edge insertion order.
    adjacency: Vec<Vec<NodeId>>,
}

impl UndirectedGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed demonstration graph.
    pub fn sample() -> Self {
        let mut graph = Self::new();
        for (a, b) in SAMPLE_EDGES {
            // The sample has no self-loops, so this cannot fail.
            let _ = graph.add_edge(Edge::new(a, b));
        }
        graph
    }

    /// Create from pre-existing data (used by the builder).
    pub fn from_parts(nodes: Vec<NodeId>, edges: Vec<Edge>) -> WalkResult<Self> {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node);
        }
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    /// Start a fluent builder.
    pub fn builder() -> GraphBuilder {
        GraphBuilder::new()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of unique edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `node` is a known node.
    pub fn contains(&self, node: NodeId) -> bool {
        self.index.contains_key(&node)
    }

    /// All nodes adjacent to `node`, in adjacency order.
    ///
    /// Unknown nodes have no neighbours.
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        match self.index.get(&node) {
            Some(&idx) => &self.adjacency[idx],
            None => &[],
        }
    }

    /// Number of neighbours, or an error for an unknown node.
    pub fn degree(&self, node: NodeId) -> WalkResult<usize> {
        self.index
            .get(&node)
            .map(|&idx| self.adjacency[idx].len())
            .ok_or(WalkError::NodeNotFound(node))
    }

    /// All nodes in order of first appearance.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// All unique edges in declaration order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Add a node. Returns false if it was already present.
    pub(crate) fn add_node(&mut self, node: NodeId) -> bool {
        if self.index.contains_key(&node) {
            return false;
        }
        self.index.insert(node, self.nodes.len());
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        true
    }

    /// Add an undirected edge, adding its endpoints if needed.
    ///
    /// Duplicates in either orientation are ignored.
    pub(crate) fn add_edge(&mut self, edge: Edge) -> WalkResult<()> {
        if edge.is_self_loop() {
            return Err(WalkError::SelfLoop(edge.a));
        }

        self.add_node(edge.a);
        self.add_node(edge.b);

        let a_idx = self.index[&edge.a];
        if self.adjacency[a_idx].contains(&edge.b) {
            return Ok(());
        }
        let b_idx = self.index[&edge.b];

        self.adjacency[a_idx].push(edge.b);
        self.adjacency[b_idx].push(edge.a);
        self.edges.push(edge);
        Ok(())
    }
}
