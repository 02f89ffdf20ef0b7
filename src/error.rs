//! Error types for the tracking library

use thiserror::Error;

/// Result type alias for the tracking library
pub type Result<T> = std::result::Result<T, TrackError>;

/// Errors that can occur on the configuration surface.
///
/// Frame processing itself is total and never fails; only loading and
/// validating a `TrackerConfig` can produce an error.
#[derive(Error, Debug)]
pub enum TrackError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl TrackError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = TrackError::config("min_confidence out of range");
        assert_eq!(
            err.to_string(),
            "Configuration error: min_confidence out of range"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: TrackError = io.into();
        assert!(matches!(err, TrackError::IoError(_)));
    }
}
