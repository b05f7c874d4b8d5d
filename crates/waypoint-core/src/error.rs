//! Error types for the roadmap library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all roadmap operations.
#[derive(Error, Debug)]
pub enum RoadmapError {
    /// No JSON object could be extracted from a model completion
    #[error("Malformed model response: no JSON object found in completion (snippet: {snippet:?})")]
    MalformedResponse {
        /// Truncated copy of the raw completion, for logging
        snippet: String,
    },
    /// Normalization produced a roadmap with zero steps
    #[error("Model response produced a roadmap with no steps")]
    EmptyRoadmap,
    /// Roadmap not found for the given ID
    #[error("Roadmap with ID {id} not found")]
    RoadmapNotFound { id: u64 },
    /// Caller is not allowed to perform the operation
    #[error("Unauthorized: {reason}")]
    Unauthorized { reason: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{}': {source}", path.display())]
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

/// Coarse classification of a [`RoadmapError`], assigned at the throw site.
///
/// Interface layers map kinds to protocol codes through fixed tables rather
/// than inspecting error message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The upstream generator returned text no JSON could be extracted from
    MalformedResponse,
    /// The upstream generator returned a structurally valid but empty roadmap
    EmptyRoadmap,
    /// The requested resource does not exist
    NotFound,
    /// The request itself was invalid
    InvalidInput,
    /// The caller lacks permission
    Unauthorized,
    /// Storage, serialization, or configuration failure
    Internal,
}

impl RoadmapError {
    /// Returns the typed kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RoadmapError::MalformedResponse { .. } => ErrorKind::MalformedResponse,
            RoadmapError::EmptyRoadmap => ErrorKind::EmptyRoadmap,
            RoadmapError::RoadmapNotFound { .. } => ErrorKind::NotFound,
            RoadmapError::InvalidInput { .. } => ErrorKind::InvalidInput,
            RoadmapError::Unauthorized { .. } => ErrorKind::Unauthorized,
            RoadmapError::Database { .. }
            | RoadmapError::FileSystem { .. }
            | RoadmapError::XdgDirectory(_)
            | RoadmapError::Serialization { .. }
            | RoadmapError::Configuration { .. } => ErrorKind::Internal,
        }
    }

    /// Returns the HTTP status code equivalent for this error.
    ///
    /// A fixed table keyed on [`ErrorKind`]; front ends that speak other
    /// protocols translate from the same kinds.
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            // The generator is an upstream collaborator, so unusable output
            // is a gateway failure rather than a client error.
            ErrorKind::MalformedResponse | ErrorKind::EmptyRoadmap => 502,
            ErrorKind::NotFound => 404,
            ErrorKind::InvalidInput => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Internal => 500,
        }
    }

    /// Creates a database error with additional context.
    pub fn database(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Creates an input validation error for a named field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| RoadmapError::database(message, e))
    }
}

/// Result type alias for roadmap operations
pub type Result<T> = std::result::Result<T, RoadmapError>;
