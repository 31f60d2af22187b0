//! Per-run traversal state and the outcome it turns into.

use std::collections::HashSet;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::types::{now_micros, NodeId, WalkError};

/// Which traversal to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Breadth-first search.
    #[default]
    Bfs,
    /// Depth-first search.
    Dfs,
}

impl Algorithm {
    /// Return the lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
        }
    }

    /// Upper-case label used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
        }
    }

    /// Parse an algorithm from a name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "bfs" | "breadth" | "breadth-first" => Some(Self::Bfs),
            "dfs" | "depth" | "depth-first" => Some(Self::Dfs),
            _ => None,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = WalkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| WalkError::UnknownAlgorithm(s.to_string()))
    }
}

/// Lifecycle of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Created, nothing visited yet.
    Idle,
    /// At least one step taken, frontier not exhausted.
    Running,
    /// The goal was visited. Terminal.
    GoalReached,
    /// Every reachable node was visited. Terminal.
    Exhausted,
}

impl Phase {
    /// True for `GoalReached` and `Exhausted`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::GoalReached | Self::Exhausted)
    }
}

/// Counters collected during a run.
///
/// `visit_count` counts nodes appended to the path. BFS also bumps
/// `enqueue_count` and `extension_count` for every discovered neighbour.
/// DFS has a single counter family: `enqueue_count` mirrors `visit_count`
/// and `extension_count` stays zero. `queue_size` is a snapshot: the
/// frontier length at the last discovery for BFS, the path length at the
/// last visit for DFS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TraversalStats {
    pub enqueue_count: u64,
    pub extension_count: u64,
    pub visit_count: u64,
    pub queue_size: usize,
}

/// Mutable state of one traversal run.
#[derive(Debug, Clone)]
pub struct TraversalState {
    pub(crate) visited: HashSet<NodeId>,
    pub(crate) path: Vec<NodeId>,
    pub(crate) goal: Option<NodeId>,
    pub(crate) goal_reached: bool,
    pub(crate) stats: TraversalStats,
    pub(crate) phase: Phase,
    pub(crate) started_at: u64,
    pub(crate) clock: Instant,
}

impl TraversalState {
    /// Fresh state for a run toward an optional goal.
    pub fn new(goal: Option<NodeId>) -> Self {
        Self {
            visited: HashSet::new(),
            path: Vec::new(),
            goal,
            goal_reached: false,
            stats: TraversalStats::default(),
            phase: Phase::Idle,
            started_at: now_micros(),
            clock: Instant::now(),
        }
    }

    /// Nodes marked visited so far. BFS marks on discovery.
    pub fn visited(&self) -> &HashSet<NodeId> {
        &self.visited
    }

    /// Visitation order so far.
    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    /// The goal, if any.
    pub fn goal(&self) -> Option<NodeId> {
        self.goal
    }

    /// Whether the goal has been visited.
    pub fn goal_reached(&self) -> bool {
        self.goal_reached
    }

    /// Counters so far.
    pub fn stats(&self) -> TraversalStats {
        self.stats
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn is_goal(&self, node: NodeId) -> bool {
        self.goal == Some(node)
    }

    /// Flip `goal_reached` on. Happens at most once per run.
    pub(crate) fn reach_goal(&mut self) {
        debug_assert!(!self.goal_reached);
        self.goal_reached = true;
        self.phase = Phase::GoalReached;
    }

    /// Freeze the state into an outcome.
    pub fn outcome(&self, algorithm: Algorithm, start: NodeId) -> TraversalOutcome {
        TraversalOutcome {
            algorithm,
            start,
            goal: self.goal,
            path: self.path.clone(),
            goal_reached: self.goal_reached,
            phase: self.phase,
            stats: self.stats,
            started_at: self.started_at,
            elapsed_micros: u64::try_from(self.clock.elapsed().as_micros()).unwrap_or(u64::MAX),
        }
    }
}

/// Result of a finished traversal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraversalOutcome {
    pub algorithm: Algorithm,
    pub start: NodeId,
    pub goal: Option<NodeId>,
    /// Visitation order.
    pub path: Vec<NodeId>,
    pub goal_reached: bool,
    pub phase: Phase,
    pub stats: TraversalStats,
    /// Wall-clock start, in microseconds since the Unix epoch.
    pub started_at: u64,
    /// Monotonic run time, including animation and pauses.
    pub elapsed_micros: u64,
}

impl TraversalOutcome {
    /// The path rendered like `[1, 2, 3]`.
    pub fn path_label(&self) -> String {
        format!("{:?}", self.path)
    }
}
