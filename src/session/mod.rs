//! One interactive traversal session, from prompts to the final report.

use serde::Serialize;

use crate::config::SessionConfig;
use crate::engine::{Algorithm, TraversalOutcome};
use crate::graph::UndirectedGraph;
use crate::render::{Prompter, Renderer};
use crate::types::{NodeId, NodeInput};

const INVALID_TITLE: &str = "Invalid Input";
const NOT_AN_INTEGER: &str = "Please enter a valid integer node.";
const START_NOT_IN_GRAPH: &str = "Node not in the graph. Please enter a valid node.";
const GOAL_NOT_IN_GRAPH: &str = "Goal node not in the graph. Please enter a valid node.";

/// Prompt text for the start node.
pub const START_PROMPT: &str = "Enter the starting node:";
/// Prompt text for the goal node.
pub const GOAL_PROMPT: &str = "Enter the goal node:";

/// Why a session ended without running a traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum AbortReason {
    /// The start prompt was dismissed.
    Cancelled,
    /// Every start prompt got an invalid answer.
    InvalidStart { attempts: u32 },
}

impl std::fmt::Display for AbortReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cancelled => write!(f, "start node prompt cancelled"),
            Self::InvalidStart { attempts } => {
                write!(f, "no valid start node after {} attempt(s)", attempts)
            }
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "result", rename_all = "snake_case")]
pub enum SessionReport {
    /// A traversal ran to completion.
    Completed(TraversalOutcome),
    /// No traversal ran.
    Aborted(AbortReason),
}

impl SessionReport {
    /// The outcome, if a traversal ran.
    pub fn outcome(&self) -> Option<&TraversalOutcome> {
        match self {
            Self::Completed(outcome) => Some(outcome),
            Self::Aborted(_) => None,
        }
    }

    /// True if the session was aborted.
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted(_))
    }
}

/// Wires a graph, an engine, a renderer and a prompter for one run.
pub struct SessionController<'a> {
    graph: &'a UndirectedGraph,
    algorithm: Algorithm,
    max_prompt_attempts: u32,
}

impl<'a> SessionController<'a> {
    /// A controller that aborts after the first invalid start node.
    pub fn new(graph: &'a UndirectedGraph, algorithm: Algorithm) -> Self {
        Self {
            graph,
            algorithm,
            max_prompt_attempts: 1,
        }
    }

    /// A controller using the algorithm and prompt policy from `config`.
    pub fn from_config(graph: &'a UndirectedGraph, config: &SessionConfig) -> Self {
        Self::new(graph, config.algorithm).with_max_prompt_attempts(config.max_prompt_attempts)
    }

    /// Ask for the start node up to `attempts` times (at least once).
    pub fn with_max_prompt_attempts(mut self, attempts: u32) -> Self {
        self.max_prompt_attempts = attempts.max(1);
        self
    }

    /// The algorithm this controller runs.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Ask for a start node that exists in the graph.
    ///
    /// Each invalid answer shows a warning. A cancelled prompt aborts at
    /// once; running out of attempts aborts too.
    pub fn choose_start(&self, prompter: &mut dyn Prompter) -> Result<NodeId, AbortReason> {
        for attempt in 1..=self.max_prompt_attempts {
            match prompter.ask_node(START_PROMPT) {
                NodeInput::Node(id) if self.graph.contains(id) => return Ok(id),
                NodeInput::Node(id) => {
                    log::info!("Start node {} not in graph (attempt {})", id, attempt);
                    prompter.show_warning(INVALID_TITLE, START_NOT_IN_GRAPH);
                }
                NodeInput::OutOfRange(n) => {
                    log::info!("Start node {} not in graph (attempt {})", n, attempt);
                    prompter.show_warning(INVALID_TITLE, START_NOT_IN_GRAPH);
                }
                NodeInput::Malformed(raw) => {
                    log::info!("Start node {:?} is not an integer (attempt {})", raw, attempt);
                    prompter.show_warning(INVALID_TITLE, NOT_AN_INTEGER);
                }
                NodeInput::Cancelled => {
                    log::info!("Start node prompt cancelled");
                    return Err(AbortReason::Cancelled);
                }
            }
        }
        Err(AbortReason::InvalidStart {
            attempts: self.max_prompt_attempts,
        })
    }

    /// Ask once for a goal node. Anything but a known node means no goal.
    pub fn choose_goal(&self, prompter: &mut dyn Prompter) -> Option<NodeId> {
        match prompter.ask_node(GOAL_PROMPT) {
            NodeInput::Node(id) if self.graph.contains(id) => Some(id),
            NodeInput::Node(id) => {
                log::info!("Goal node {} not in graph, running without a goal", id);
                prompter.show_warning(INVALID_TITLE, GOAL_NOT_IN_GRAPH);
                None
            }
            NodeInput::OutOfRange(n) => {
                log::info!("Goal node {} not in graph, running without a goal", n);
                prompter.show_warning(INVALID_TITLE, GOAL_NOT_IN_GRAPH);
                None
            }
            input @ NodeInput::Malformed(_) if input.is_blank() => None,
            NodeInput::Malformed(raw) => {
                log::info!("Goal node {:?} is not an integer, running without a goal", raw);
                prompter.show_warning(INVALID_TITLE, NOT_AN_INTEGER);
                None
            }
            NodeInput::Cancelled => None,
        }
    }

    /// Lay out the graph, prompt for nodes, run the traversal and report.
    pub fn run(&self, renderer: &mut dyn Renderer, prompter: &mut dyn Prompter) -> SessionReport {
        renderer.layout(self.graph);

        let start = match self.choose_start(prompter) {
            Ok(start) => start,
            Err(reason) => {
                log::info!("Session aborted: {}", reason);
                return SessionReport::Aborted(reason);
            }
        };
        let goal = self.choose_goal(prompter);
        log::info!(
            "Running {} from {} (goal {:?})",
            self.algorithm,
            start,
            goal
        );

        let outcome = self.algorithm.run(self.graph, start, goal, renderer);
        let (title, text) = summary(&outcome);
        prompter.show_message(&title, &text);
        SessionReport::Completed(outcome)
    }
}

/// Title and body of the final message for an outcome.
pub fn summary(outcome: &TraversalOutcome) -> (String, String) {
    let label = outcome.algorithm.label();
    let title = format!("{} Completed", label);

    let text = match outcome.goal {
        Some(goal) if outcome.goal_reached => format!(
            "Goal node {} reached!\n{} traversal path: {}",
            goal,
            label,
            outcome.path_label()
        ),
        _ => {
            let mut text = format!("{} traversal path: {}", label, outcome.path_label());
            if outcome.algorithm == Algorithm::Bfs {
                text.push_str(&format!(
                    "\nEnqueues: {}\nExtensions: {}\nQueue Size: {}",
                    outcome.stats.enqueue_count,
                    outcome.stats.extension_count,
                    outcome.stats.queue_size
                ));
            }
            text
        }
    };

    (title, text)
}
