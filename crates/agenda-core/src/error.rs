//! Error types for the agenda library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::ExportFormat;

/// Comprehensive error type for all agenda operations.
#[derive(Error, Debug)]
pub enum AgendaError {
    /// Plan not found for the given ID
    #[error("Plan with ID {id} not found")]
    PlanNotFound { id: String },
    /// Requested export format is neither tabular nor paginated
    #[error("Unsupported export format '{format}'. Use 'excel' (tabular) or 'pdf' (paginated)")]
    UnsupportedFormat { format: String },
    /// Unexpected failure while building or serializing a document
    #[error("Failed to render {format} report: {message}")]
    RenderFailure {
        format: ExportFormat,
        message: String,
    },
    /// Export artifact missing at download time
    #[error("Export file '{name}' not found")]
    FileNotFound { name: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> AgendaError {
        AgendaError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl AgendaError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps any displayable failure from a document serializer.
    pub fn render_failure(format: ExportFormat, error: impl fmt::Display) -> Self {
        Self::RenderFailure {
            format,
            message: error.to_string(),
        }
    }

    /// Wraps an I/O error with the path it happened at.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }

    /// Whether the error means "the thing asked for does not exist".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AgendaError::PlanNotFound { .. } | AgendaError::FileNotFound { .. }
        )
    }

    /// Whether the error was caused by the caller's input rather than the
    /// service.
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            AgendaError::UnsupportedFormat { .. } | AgendaError::InvalidInput { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|source| AgendaError::Database {
            message: message.to_string(),
            source,
        })
    }
}

/// Maps a blocking-task join failure into a configuration error.
pub(crate) fn join_error(e: &tokio::task::JoinError) -> AgendaError {
    AgendaError::Configuration {
        message: format!("Task join error: {e}"),
    }
}

/// Result type alias for agenda operations
pub type Result<T> = std::result::Result<T, AgendaError>;
