// Error types for app-rater.
// Covers configuration, lookup transport, response parsing, and store errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RaterError {
    #[error("An app ID must be specified before refreshing ratings")]
    MissingAppId,

    #[error("Lookup request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Lookup returned HTTP {0}")]
    Status(u16),

    #[error("Invalid lookup response: {0}")]
    Parse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Broad classification of a [`RaterError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Transport,
    Parse,
    Storage,
}

impl RaterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RaterError::MissingAppId | RaterError::Config(_) | RaterError::InvalidUrl(_) => {
                ErrorKind::Configuration
            }
            RaterError::Transport(_) | RaterError::Status(_) => ErrorKind::Transport,
            RaterError::Parse(_) => ErrorKind::Parse,
            RaterError::Json(_) | RaterError::Io(_) => ErrorKind::Storage,
        }
    }
}

pub type Result<T> = std::result::Result<T, RaterError>;
