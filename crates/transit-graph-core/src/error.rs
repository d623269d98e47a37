//! Error types and exit codes for transit-graph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (no path, disconnected graph, timeout, I/O)
//! - 2: Usage error (bad flags/args, unknown station)
//! - 3: Data error (invalid or duplicate connection in the network feed)

mod macros;

use thiserror::Error;

/// Exit codes for the transit-graph CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed network feed (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or analysing a transport network
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("unknown station: {id}")]
    UnknownNode { id: String },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },

    // Data errors (exit code 3)
    #[error("invalid connection {from} - {to}: {reason}")]
    InvalidEdge {
        from: String,
        to: String,
        reason: String,
    },

    #[error("duplicate connection {from} - {to}")]
    DuplicateEdge { from: String, to: String },

    #[error("no connection between {from} and {to}")]
    NoSuchEdge { from: String, to: String },

    // Generic failures (exit code 1)
    #[error("no path from {from} to {to}")]
    NoPath { from: String, to: String },

    #[error("graph is disconnected ({unreachable_pairs} unreachable station pairs)")]
    Disconnected { unreachable_pairs: usize },

    #[error("{operation} exceeded its search limit ({limit})")]
    Timeout { operation: String, limit: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl GraphError {
    /// Create an error for a station that is not part of the graph
    pub fn unknown_node(id: impl std::fmt::Display) -> Self {
        GraphError::UnknownNode { id: id.to_string() }
    }

    /// Create an error for a rejected connection
    pub fn invalid_edge(
        from: impl std::fmt::Display,
        to: impl std::fmt::Display,
        reason: impl std::fmt::Display,
    ) -> Self {
        GraphError::InvalidEdge {
            from: from.to_string(),
            to: to.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for unreachable endpoints
    pub fn no_path(from: impl std::fmt::Display, to: impl std::fmt::Display) -> Self {
        GraphError::NoPath {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Create an error for an exhausted search budget
    pub fn timeout(operation: &str, limit: impl std::fmt::Display) -> Self {
        GraphError::Timeout {
            operation: operation.to_string(),
            limit: limit.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UsageError(_)
            | GraphError::UnknownNode { .. }
            | GraphError::InvalidConfig { .. } => ExitCode::Usage,

            GraphError::InvalidEdge { .. }
            | GraphError::DuplicateEdge { .. }
            | GraphError::NoSuchEdge { .. } => ExitCode::Data,

            GraphError::NoPath { .. }
            | GraphError::Disconnected { .. }
            | GraphError::Timeout { .. }
            | GraphError::Io(_)
            | GraphError::Json(_)
            | GraphError::Toml(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::UnknownNode { .. } => "unknown_node",
            GraphError::InvalidConfig { .. } => "invalid_config",
            GraphError::InvalidEdge { .. } => "invalid_edge",
            GraphError::DuplicateEdge { .. } => "duplicate_edge",
            GraphError::NoSuchEdge { .. } => "no_such_edge",
            GraphError::NoPath { .. } => "no_path",
            GraphError::Disconnected { .. } => "disconnected",
            GraphError::Timeout { .. } => "timeout",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for transit-graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
