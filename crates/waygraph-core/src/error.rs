//! Error types and exit codes for waygraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (invalid graph, missing source, bad weights)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph or query (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graph loading and solving
#[derive(Error, Debug)]
pub enum WaygraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("{algorithm} does not support edge weight {weight}")]
    UnsupportedWeight { algorithm: String, weight: u64 },

    #[error("way count for {node} depends on visit order (zero-weight edge into a finalized node)")]
    AmbiguousWayCount { node: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl WaygraphError {
    /// Create an invalid-input error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        WaygraphError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create the error for a source (or target) that is not part of the graph
    pub fn node_not_in_graph(role: &str, node: impl std::fmt::Debug) -> Self {
        WaygraphError::InvalidInput {
            reason: format!("{} node {:?} is not in the graph", role, node),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        WaygraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        WaygraphError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        WaygraphError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WaygraphError::UnknownFormat(_)
            | WaygraphError::UsageError(_)
            | WaygraphError::InvalidValue { .. }
            | WaygraphError::Unsupported { .. } => ExitCode::Usage,

            WaygraphError::InvalidInput { .. }
            | WaygraphError::UnsupportedWeight { .. }
            | WaygraphError::AmbiguousWayCount { .. }
            | WaygraphError::NotFound { .. } => ExitCode::Data,

            WaygraphError::Io(_)
            | WaygraphError::Json(_)
            | WaygraphError::Yaml(_)
            | WaygraphError::Toml(_)
            | WaygraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            WaygraphError::UnknownFormat(_) => "unknown_format",
            WaygraphError::UsageError(_) => "usage_error",
            WaygraphError::InvalidValue { .. } => "invalid_value",
            WaygraphError::Unsupported { .. } => "unsupported",
            WaygraphError::InvalidInput { .. } => "invalid_input",
            WaygraphError::UnsupportedWeight { .. } => "unsupported_weight",
            WaygraphError::AmbiguousWayCount { .. } => "ambiguous_way_count",
            WaygraphError::NotFound { .. } => "not_found",
            WaygraphError::Io(_) => "io_error",
            WaygraphError::Json(_) => "json_error",
            WaygraphError::Yaml(_) => "yaml_error",
            WaygraphError::Toml(_) => "toml_error",
            WaygraphError::Other(_) => "other",
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

/// Result type alias for waygraph operations
pub type Result<T> = std::result::Result<T, WaygraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_data_error() {
        let err = WaygraphError::node_not_in_graph("source", "7");
        assert_eq!(err.exit_code(), ExitCode::Data);
        assert_eq!(err.error_type(), "invalid_input");
        assert!(err.to_string().contains("\"7\""));
    }

    #[test]
    fn test_usage_errors_exit_2() {
        assert_eq!(
            WaygraphError::UnknownFormat("xml".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            WaygraphError::invalid_value("modulus", 0).exit_code(),
            ExitCode::Usage
        );
    }

    #[test]
    fn test_to_json_envelope() {
        let err = WaygraphError::UnsupportedWeight {
            algorithm: "0-1 BFS".to_string(),
            weight: 7,
        };
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "unsupported_weight");
        assert_eq!(
            json["error"]["message"],
            "0-1 BFS does not support edge weight 7"
        );
    }

    #[test]
    fn test_io_error_is_failure() {
        let err: WaygraphError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.exit_code(), ExitCode::Failure);
        assert_eq!(i32::from(err.exit_code()), 1);
    }
}
