//! In-memory graph: the structure every traversal walks over.

pub mod builder;
pub mod traversal;
pub mod undirected_graph;

pub use builder::GraphBuilder;
pub use traversal::hop_distances;
pub use undirected_graph::UndirectedGraph;
