//! Error types for the graph-walk library.

use thiserror::Error;

/// All errors that can occur in the graph-walk library.
///
/// Bad node ids typed at a prompt are not errors: the session controller
/// recovers from them locally. These variants cover graph construction,
/// configuration and the command line.
#[derive(Error, Debug)]
pub enum WalkError {
    /// Node not found by ID.
    #[error("Node ID {0} not found")]
    NodeNotFound(u64),

    /// Self-loop not allowed.
    #[error("Self-loop not allowed on node {0}")]
    SelfLoop(u64),

    /// Unknown traversal algorithm name.
    #[error("Unknown algorithm: {0} (expected \"bfs\" or \"dfs\")")]
    UnknownAlgorithm(String),

    /// Configuration could not be parsed or serialized.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The line editor could not be set up.
    #[error("Terminal error: {0}")]
    Terminal(#[from] rustyline::error::ReadlineError),
}

impl From<toml::de::Error> for WalkError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for WalkError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Config(e.to_string())
    }
}

/// Convenience result type for graph-walk operations.
pub type WalkResult<T> = Result<T, WalkError>;
