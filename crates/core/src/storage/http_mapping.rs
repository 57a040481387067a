//! Pure functions for mapping repository errors to HTTP status codes.
//!
//! The API layer sitting above this crate turns [`RepositoryError`] values
//! into responses; the mapping lives here so it stays next to the error
//! definitions and has no side effects.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `InvalidInput` -> 400 (Bad Request)
/// - `Unauthorized` -> 401 (Unauthorized)
/// - `Conflict` -> 409 (Conflict)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `QueryFailed` -> 500 (Internal Server Error)
/// - `Serialization` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use storekeep_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::Conflict("email already used".to_string());
/// assert_eq!(repository_error_to_status_code(&error), 409);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::InvalidInput(_) => 400,
        RepositoryError::Unauthorized(_) => 401,
        RepositoryError::Conflict(_) => 409,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::Serialization(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_maps_to_400() {
        let error = RepositoryError::InvalidInput("password must not be empty".to_string());
        assert_eq!(repository_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_unauthorized_maps_to_401() {
        let error = RepositoryError::Unauthorized("wrong email or password".to_string());
        assert_eq!(repository_error_to_status_code(&error), 401);
    }

    #[test]
    fn test_conflict_maps_to_409() {
        let error = RepositoryError::Conflict("email already used".to_string());
        assert_eq!(repository_error_to_status_code(&error), 409);
    }

    #[test]
    fn test_connection_failed_maps_to_503() {
        let error = RepositoryError::ConnectionFailed("database file is locked".to_string());
        assert_eq!(repository_error_to_status_code(&error), 503);
    }

    #[test]
    fn test_query_failed_maps_to_500() {
        let error = RepositoryError::QueryFailed("no such table: cart".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_serialization_maps_to_500() {
        let error = RepositoryError::Serialization("invalid JSON in order_items".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }
}
