//! graph-walk: step-by-step BFS and DFS traversal with an animation seam.
//!
//! A small undirected graph is walked breadth-first or depth-first. Each
//! visit and each edge followed is reported to a [`Renderer`], which may
//! pause the walk between steps; a [`Prompter`] collects the start and goal
//! nodes and shows the result.

pub mod cli;
pub mod config;
pub mod engine;
pub mod graph;
pub mod render;
pub mod session;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::{GraphConfig, SessionConfig};
pub use engine::{
    wait_while_paused, Algorithm, BfsEngine, DfsEngine, Phase, TraversalEngine, TraversalOutcome,
    TraversalState, TraversalStats,
};
pub use graph::{hop_distances, GraphBuilder, UndirectedGraph};
pub use render::{
    circular_layout, Layout, NullRenderer, PauseToken, Position, Prompter, ReadlinePrompter,
    RecordingRenderer, Renderer, ScriptedPrompter, StdinPrompter, TerminalRenderer,
};
pub use session::{AbortReason, SessionController, SessionReport};
pub use types::{
    now_micros, Edge, NodeId, NodeInput, RenderEvent, WalkError, WalkResult, SAMPLE_EDGES,
};
