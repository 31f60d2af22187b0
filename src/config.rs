//! Session configuration with TOML persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::Algorithm;
use crate::graph::{GraphBuilder, UndirectedGraph};
use crate::types::{NodeId, WalkResult, DEFAULT_LAYOUT_SCALE, DEFAULT_STEP_DELAY_MS, SAMPLE_EDGES};

/// Complete session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Traversal to run
    pub algorithm: Algorithm,

    /// Delay after each animated move (milliseconds)
    pub step_delay_ms: u64,

    /// How many times to ask for the start node before giving up
    pub max_prompt_attempts: u32,

    /// Radius of the on-screen layout
    pub layout_scale: f64,

    /// The graph to walk
    pub graph: GraphConfig,
}

/// Graph definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Undirected edges as `[a, b]` pairs
    pub edges: Vec<(NodeId, NodeId)>,

    /// Extra nodes, possibly isolated
    pub nodes: Vec<NodeId>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Bfs,
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
            max_prompt_attempts: 1,
            layout_scale: DEFAULT_LAYOUT_SCALE,
            graph: GraphConfig::default(),
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            edges: SAMPLE_EDGES.to_vec(),
            nodes: Vec::new(),
        }
    }
}

impl GraphConfig {
    /// Build the configured graph.
    pub fn build(&self) -> WalkResult<UndirectedGraph> {
        let mut builder = GraphBuilder::new();
        builder.nodes(self.nodes.iter().copied());
        builder.edges(self.edges.iter().copied());
        builder.build()
    }
}

impl SessionConfig {
    /// Load configuration from a TOML file. Missing keys take defaults.
    pub fn load(path: &Path) -> WalkResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration as TOML.
    pub fn save(&self, path: &Path) -> WalkResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from `path` when given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> WalkResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}
