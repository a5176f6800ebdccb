//! Error types and exit codes for skein
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (invalid graph file, unknown vertex, rejected operation)

use thiserror::Error;

/// Exit codes reported by the skein binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph file, unknown vertex (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during skein operations
#[derive(Error, Debug)]
pub enum SkeinError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("vertex already exists: {id}")]
    DuplicateVertex { id: String },

    #[error("edge already exists: {from} -> {to}")]
    DuplicateEdge { from: String, to: String },

    #[error("vertex not found: {id}")]
    VertexNotFound { id: String },

    #[error("{operation} requires an undirected graph")]
    DirectedUnsupported { operation: String },

    #[error("cannot {operation} on an empty graph")]
    EmptyGraph { operation: String },

    #[error("invalid graph description at line {line}: {reason}")]
    InvalidFormat { line: usize, reason: String },

    // Generic failures (exit code 1)
    #[error("vertex handle does not belong to this graph")]
    ForeignVertex,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SkeinError {
    /// Create an error for a vertex id that is already registered
    pub fn duplicate_vertex(id: impl std::fmt::Display) -> Self {
        SkeinError::DuplicateVertex { id: id.to_string() }
    }

    /// Create an error for a directed adjacency that is already present
    pub fn duplicate_edge(from: impl std::fmt::Display, to: impl std::fmt::Display) -> Self {
        SkeinError::DuplicateEdge {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Create an error for a vertex id that is absent from the graph
    pub fn vertex_not_found(id: impl std::fmt::Display) -> Self {
        SkeinError::VertexNotFound { id: id.to_string() }
    }

    /// Create an error for an operation that rejects directed graphs
    pub fn directed_unsupported(operation: &str) -> Self {
        SkeinError::DirectedUnsupported {
            operation: operation.to_string(),
        }
    }

    /// Create an error for an operation that needs at least one vertex
    pub fn empty_graph(operation: &str) -> Self {
        SkeinError::EmptyGraph {
            operation: operation.to_string(),
        }
    }

    /// Create an error for a malformed graph description line
    pub fn invalid_format(line: usize, reason: impl Into<String>) -> Self {
        SkeinError::InvalidFormat {
            line,
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SkeinError::UsageError(_) => ExitCode::Usage,

            SkeinError::DuplicateVertex { .. }
            | SkeinError::DuplicateEdge { .. }
            | SkeinError::VertexNotFound { .. }
            | SkeinError::DirectedUnsupported { .. }
            | SkeinError::EmptyGraph { .. }
            | SkeinError::InvalidFormat { .. } => ExitCode::Data,

            SkeinError::ForeignVertex | SkeinError::Io(_) | SkeinError::Json(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            SkeinError::UsageError(_) => "usage_error",
            SkeinError::DuplicateVertex { .. } => "duplicate_vertex",
            SkeinError::DuplicateEdge { .. } => "duplicate_edge",
            SkeinError::VertexNotFound { .. } => "vertex_not_found",
            SkeinError::DirectedUnsupported { .. } => "directed_unsupported",
            SkeinError::EmptyGraph { .. } => "empty_graph",
            SkeinError::InvalidFormat { .. } => "invalid_format",
            SkeinError::ForeignVertex => "foreign_vertex",
            SkeinError::Io(_) => "io_error",
            SkeinError::Json(_) => "json_error",
        }
    }

    /// Convert error to JSON representation for structured error output
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

/// Result type alias for skein operations
pub type Result<T> = std::result::Result<T, SkeinError>;
