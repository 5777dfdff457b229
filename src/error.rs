//! Error types for the viewer
//!
//! The organization pipeline itself never fails; these errors come from reading inputs,
//! setting up the parser, writing output and running the server.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for viewer operations
#[derive(Error, Debug)]
pub enum ViewerError {
    /// IO errors (file reads, output writes, socket binds)
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// A required input file does not exist
    #[error("CSS file not found: {path:?}")]
    FileNotFound { path: PathBuf },

    /// Source could not be parsed at all
    #[error("Parse error in file {file:?}: {message}")]
    Parse { file: PathBuf, message: String },

    /// Tree-sitter language setup errors
    #[error("Failed to set up tree-sitter language: {message}")]
    TreeSitterLanguage { message: String },

    /// Server startup errors
    #[error("Server error: {message}")]
    Server { message: String },

    /// Port outside 1..=65535
    #[error("Port must be between 1 and 65535, got '{value}'")]
    InvalidPort { value: String },
}

/// Result type alias for viewer operations
pub type ViewerResult<T> = Result<T, ViewerError>;

impl From<std::io::Error> for ViewerError {
    fn from(err: std::io::Error) -> Self {
        ViewerError::Io {
            source: err,
            message: "IO operation failed".to_string(),
        }
    }
}

impl From<serde_json::Error> for ViewerError {
    fn from(err: serde_json::Error) -> Self {
        ViewerError::Json {
            source: err,
            message: "JSON operation failed".to_string(),
        }
    }
}

/// Helper trait for converting IO errors with context
pub trait IoContext<T> {
    fn with_io_context(self, message: &str) -> ViewerResult<T>;
}

impl<T> IoContext<T> for Result<T, std::io::Error> {
    fn with_io_context(self, message: &str) -> ViewerResult<T> {
        self.map_err(|e| ViewerError::Io {
            message: message.to_string(),
            source: e,
        })
    }
}

/// Helper trait for converting JSON errors with context
pub trait JsonContext<T> {
    fn with_json_context(self, message: &str) -> ViewerResult<T>;
}

impl<T> JsonContext<T> for Result<T, serde_json::Error> {
    fn with_json_context(self, message: &str) -> ViewerResult<T> {
        self.map_err(|e| ViewerError::Json {
            message: message.to_string(),
            source: e,
        })
    }
}
