//! Error types for the workspace engine.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all workspace operations.
#[derive(Error, Debug)]
pub enum WerkstattError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Project not found in the user store or the example registry
    #[error("Project '{id}' not found")]
    ProjectNotFound { id: String },
    /// Feature not found within the open project
    #[error("Feature '{id}' not found in project")]
    FeatureNotFound { id: String },
    /// Example id that does not resolve in the static registry.
    /// This is a programmer error, not a recoverable user error.
    #[error("Example project '{id}' is not part of the registry")]
    ExampleNotFound { id: String },
    /// A store mutation was attempted against an example-namespace id.
    /// Example projects are immutable; edits must go through clone-on-write.
    #[error("Project '{id}' is a read-only example and cannot be updated in place")]
    ExampleImmutable { id: String },
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

impl WerkstattError {
    /// Creates a new database error with context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.to_string(),
            source,
        }
    }

    /// Creates an input validation error.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| WerkstattError::database_error(message, e))
    }
}

/// Result type alias for workspace operations
pub type Result<T> = std::result::Result<T, WerkstattError>;
