//! Error types for friend-links

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the triage pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// No usable GitHub credential was found
    #[error("authentication error: {0}")]
    Auth(String),

    /// A call to the issue tracker failed (list, comment or close)
    #[error("issue tracker request failed: {0}")]
    Tracker(String),

    /// Configuration could not be interpreted
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The registry file could not be read
    #[error("failed to read registry {}: {source}", .path.display())]
    RegistryRead {
        /// Registry path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The registry file is not a valid registry document
    #[error("failed to parse registry {}: {message}", .path.display())]
    RegistryParse {
        /// Registry path
        path: PathBuf,
        /// What was wrong with the document
        message: String,
    },

    /// The registry file could not be written
    #[error("failed to write registry {}: {message}", .path.display())]
    RegistryWrite {
        /// Registry path
        path: PathBuf,
        /// Underlying failure
        message: String,
    },

    /// The configured target category does not exist in the registry
    #[error("registry has no category matching {0}")]
    CategoryNotFound(String),
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        Self::Tracker(err.to_string())
    }
}

/// Result alias using the crate error type
pub type Result<T> = std::result::Result<T, Error>;
