//! Logger error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while setting up file logging
#[derive(Error, Debug)]
pub enum LogError {
    /// The log file could not be opened or created
    #[error("Failed to open log file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File logging was already initialised on this logger
    #[error("File logging already initialized at {}", .path.display())]
    AlreadyInitialized { path: PathBuf },
}

impl LogError {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// Path the failing operation was about
    pub fn path(&self) -> &std::path::Path {
        match self {
            LogError::Open { path, .. } | LogError::AlreadyInitialized { path } => path,
        }
    }
}

pub type LogResult<T> = Result<T, LogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_error_message() {
        let err = LogError::open(
            "/nowhere/app.log",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        let message = err.to_string();
        assert!(message.contains("/nowhere/app.log"));
        assert!(message.contains("missing"));
        assert_eq!(err.path(), std::path::Path::new("/nowhere/app.log"));
    }
}
