//! Error types and exit codes for graphbench
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (IO, interrupted sweep, unavailable result sink)
//! - 2: Usage error (bad flags/args, invalid configuration values)
//! - 3: Data error (vertex index outside the graph)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the graphbench binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - out-of-range vertex (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graphbench operations
#[derive(Error, Debug)]
pub enum GraphBenchError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("vertex {vertex} out of range for graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("result sink unavailable at {path:?}: {reason}")]
    SinkUnavailable { path: PathBuf, reason: String },

    #[error("Benchmark interrupted. Completed rows were written.")]
    Interrupted,
}

impl GraphBenchError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphBenchError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a vertex index outside `0..vertex_count`
    pub fn vertex_out_of_range(vertex: usize, vertex_count: usize) -> Self {
        GraphBenchError::VertexOutOfRange {
            vertex,
            vertex_count,
        }
    }

    /// Create an error for a result sink that could not be opened or written
    pub fn sink_unavailable(path: impl Into<PathBuf>, error: impl std::fmt::Display) -> Self {
        GraphBenchError::SinkUnavailable {
            path: path.into(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphBenchError::UsageError(_)
            | GraphBenchError::InvalidValue { .. } => ExitCode::Usage,

            GraphBenchError::VertexOutOfRange { .. } => ExitCode::Data,

            GraphBenchError::Io(_)
            | GraphBenchError::Json(_)
            | GraphBenchError::Toml(_)
            | GraphBenchError::TomlSer(_)
            | GraphBenchError::SinkUnavailable { .. }
            | GraphBenchError::Interrupted => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GraphBenchError::UsageError(_) => "usage_error",
            GraphBenchError::InvalidValue { .. } => "invalid_value",
            GraphBenchError::VertexOutOfRange { .. } => "vertex_out_of_range",
            GraphBenchError::Io(_) => "io_error",
            GraphBenchError::Json(_) => "json_error",
            GraphBenchError::Toml(_) => "toml_error",
            GraphBenchError::TomlSer(_) => "toml_error",
            GraphBenchError::SinkUnavailable { .. } => "sink_unavailable",
            GraphBenchError::Interrupted => "interrupted",
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

/// Result type alias for graphbench operations
pub type Result<T> = std::result::Result<T, GraphBenchError>;
