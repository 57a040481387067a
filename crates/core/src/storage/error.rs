use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// Absence is not an error anywhere in this layer: lookups return `Option`
/// or an empty `Vec`, and idempotent deletes/updates report success on zero
/// matched rows.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Caller input failed a precondition before any statement ran.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// A uniqueness rule was violated (duplicate email).
    #[error("Conflict: {0}")]
    Conflict(String),
    /// Credential check failed. Deliberately does not say which field.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
