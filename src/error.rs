//! Error types for lando-cli

use thiserror::Error;

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading history or talking to Lando
#[derive(Error, Debug)]
pub enum Error {
    /// The path is not a repository, or git refused a query
    #[error("repository error: {0}")]
    Repository(String),

    /// A branch, ref or commit name does not resolve
    #[error("ref not found: {0}")]
    RefNotFound(String),

    /// HEAD does not point at a branch
    #[error("HEAD is detached; check out a branch first")]
    DetachedHead,

    /// git could not produce a patch for a commit
    #[error("patch unavailable for {commit}: {reason}")]
    PatchUnavailable {
        /// Commit the patch was requested for
        commit: String,
        /// What git reported
        reason: String,
    },

    /// Missing or malformed configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Lando answered with a non-success status
    #[error("Lando API error ({status}): {body}")]
    LandoApi {
        /// HTTP status code
        status: u16,
        /// Response body, as returned
        body: String,
    },

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O failure (spawning git, reading config)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file is not valid TOML
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The user declined to submit
    #[error("cancelled")]
    Cancelled,
}
