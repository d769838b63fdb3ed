use thiserror::Error;

use crate::domain::{Version, VersionBump};

/// Unified error type for tag-bump operations
#[derive(Error, Debug)]
pub enum TagBumpError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid bump type: {0}")]
    InvalidBump(String),

    #[error("Cannot apply a {1} bump to {0}: version component overflow")]
    Overflow(Version, VersionBump),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),
}

/// Convenience type alias for Results in tag-bump
pub type Result<T> = std::result::Result<T, TagBumpError>;

impl TagBumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        TagBumpError::Config(msg.into())
    }

    /// Create an invalid bump kind error carrying the rejected input
    pub fn invalid_bump(kind: impl Into<String>) -> Self {
        TagBumpError::InvalidBump(kind.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        TagBumpError::Tag(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        TagBumpError::Remote(msg.into())
    }
}
