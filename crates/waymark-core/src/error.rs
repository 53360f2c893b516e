//! Error types for waymark.

use thiserror::Error;

/// Result type alias using waymark's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for waymark operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Latitude or longitude outside the valid range
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// Malformed search request (mode combination, radius, page bounds)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Location record not found
    #[error("Record not found: {0}")]
    RecordNotFound(uuid::Uuid),

    /// Storage-layer failure, opaque to the engine
    #[error("Storage error: {0}")]
    Storage(String),

    /// Search cancelled by deadline or caller token
    #[error("Operation cancelled")]
    Cancelled,
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Storage(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_error_display_invalid_coordinate() {
        let err = Error::InvalidCoordinate("latitude 91 out of range".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid coordinate: latitude 91 out of range"
        );
    }

    #[test]
    fn test_error_display_invalid_request() {
        let err = Error::InvalidRequest("radius without center".to_string());
        assert_eq!(err.to_string(), "Invalid request: radius without center");
    }

    #[test]
    fn test_error_display_not_found() {
        let err = Error::NotFound("category".to_string());
        assert_eq!(err.to_string(), "Not found: category");
    }

    #[test]
    fn test_error_display_record_not_found() {
        let id = Uuid::nil();
        let err = Error::RecordNotFound(id);
        assert_eq!(err.to_string(), format!("Record not found: {}", id));
    }

    #[test]
    fn test_error_display_storage() {
        let err = Error::Storage("connection reset".to_string());
        assert_eq!(err.to_string(), "Storage error: connection reset");
    }

    #[test]
    fn test_error_display_cancelled() {
        let err = Error::Cancelled;
        assert_eq!(err.to_string(), "Operation cancelled");
    }

    #[test]
    fn test_record_not_found_with_random_uuid() {
        let id = Uuid::new_v4();
        let err = Error::RecordNotFound(id);
        assert!(err.to_string().contains(&id.to_string()));
    }

    #[test]
    fn test_result_type_ok() {
        fn get_result() -> Result<i32> {
            Ok(42)
        }
        let result = get_result();
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), 42);
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }

    #[test]
    fn test_error_debug_format() {
        let err = Error::NotFound("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("NotFound"));
    }
}
