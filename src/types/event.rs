//! Render events and the typed node-input parse result.

use serde::Serialize;

use super::NodeId;

/// One call made on a renderer, as seen by a recorder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RenderEvent {
    /// The graph was laid out with this many nodes.
    Layout { nodes: usize },
    /// A node was highlighted as visited.
    Visited { node: NodeId },
    /// A node was reset to unvisited.
    Unvisited { node: NodeId },
    /// The marker moved from one node to another.
    Move { from: NodeId, to: NodeId },
    /// One idle tick elapsed while paused.
    PausedTick,
}

impl RenderEvent {
    /// Return a human-readable name for this event.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Layout { .. } => "layout",
            Self::Visited { .. } => "visited",
            Self::Unvisited { .. } => "unvisited",
            Self::Move { .. } => "move",
            Self::PausedTick => "paused_tick",
        }
    }
}

impl std::fmt::Display for RenderEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Layout { nodes } => write!(f, "layout {} nodes", nodes),
            Self::Visited { node } => write!(f, "visited {}", node),
            Self::Unvisited { node } => write!(f, "unvisited {}", node),
            Self::Move { from, to } => write!(f, "move {} -> {}", from, to),
            Self::PausedTick => write!(f, "paused"),
        }
    }
}

/// What a prompter got back from the user when asked for a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeInput {
    /// A well-formed node id. It may still be missing from the graph.
    Node(NodeId),
    /// An integer that no node can have, such as a negative one.
    OutOfRange(i64),
    /// Text that is not an integer node id.
    Malformed(String),
    /// The dialog was dismissed or the input stream ended.
    Cancelled,
}

impl NodeInput {
    /// Parse raw prompt text. `None` means the prompt was cancelled.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Cancelled;
        };
        let trimmed = raw.trim();
        if let Ok(id) = trimmed.parse::<NodeId>() {
            return Self::Node(id);
        }
        match trimmed.parse::<i64>() {
            Ok(n) => Self::OutOfRange(n),
            Err(_) => Self::Malformed(trimmed.to_string()),
        }
    }

    /// True for empty or whitespace-only text.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Malformed(s) if s.is_empty())
    }
}
