//! Error types for reprose

use thiserror::Error;

/// Main error type for reprose operations
#[derive(Error, Debug)]
pub enum ReproseError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Model response could not be interpreted
    #[error("Response error: {0}")]
    Response(String),
}

/// Result type alias for reprose operations
pub type Result<T> = std::result::Result<T, ReproseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReproseError::Config("bad key".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad key");

        let err = ReproseError::Response("empty".to_string());
        assert_eq!(err.to_string(), "Response error: empty");
    }

    #[test]
    fn test_io_error_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ReproseError = io.into();
        assert!(matches!(err, ReproseError::Io(_)));
        assert!(err.to_string().starts_with("IO error:"));
    }
}
