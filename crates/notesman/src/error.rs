//! Error types for notesman.
//!
//! File failures are recoverable: the session reports them and returns to the
//! menu. Console failures end the session.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for notesman operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Notes File Errors ===
    /// Opening, reading, writing or truncating the notes file failed.
    #[error("{}: {source}", .path.display())]
    FileAccess {
        /// Path of the notes file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create a parent directory of the notes file.
    #[error("failed to create directory {}: {source}", .path.display())]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Console Errors ===
    /// Reading from stdin or writing to stdout failed.
    #[error("console I/O error: {0}")]
    Console(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for notesman operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a file access error for the given path.
    #[must_use]
    pub fn file_access(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_file_access_display() {
        let err = Error::file_access(
            "notes.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
        );
        assert_eq!(err.to_string(), "notes.txt: access denied");
    }

    #[test]
    fn test_directory_create_display() {
        let err = Error::DirectoryCreate {
            path: PathBuf::from("/root/forbidden"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/root/forbidden"));
        assert!(msg.contains("access denied"));
    }

    #[test]
    fn test_from_io_error_is_console() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Console(_)));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "default_file must not be empty".to_string(),
        };
        assert!(err.to_string().contains("default_file"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }

    #[test]
    fn test_source_is_preserved() {
        use std::error::Error as _;

        let err = Error::file_access("notes.txt", io::Error::other("disk full"));
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("disk full"));
    }
}
