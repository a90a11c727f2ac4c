//! Error types for review-rs.

use thiserror::Error;

use crate::saved::ViewId;

/// Which view collection an operation addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    /// The automatically populated recent history.
    Recent,
    /// The user-managed saved views.
    Saved,
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Collection::Recent => f.write_str("recent"),
            Collection::Saved => f.write_str("saved"),
        }
    }
}

/// The main error type for review-rs operations.
#[derive(Error, Debug)]
pub enum ReviewError {
    /// The host has no 3D viewport to sample or restore into.
    #[error("no 3D viewport available")]
    NoViewportAvailable,

    /// Navigation or restore on an empty collection.
    #[error("no {0} views")]
    EmptyCollection(Collection),

    /// A saved view identifier no longer exists.
    #[error("view '{0}' not found")]
    StaleIdentifier(ViewId),

    /// Two saved views share an identifier.
    #[error("duplicate view id '{0}'")]
    DuplicateIdentifier(ViewId),

    /// The highest saved view identifier is already in use.
    #[error("no view ids left after '{0}'")]
    IdentifierOverflow(ViewId),

    /// An operation that requires a selection found none.
    #[error("no views selected")]
    NothingSelected,

    /// A serialized rotation could not be decoded.
    #[error("invalid rotation '{0}': expected four space-separated floats (w x y z)")]
    InvalidRotation(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for review-rs operations.
pub type Result<T> = std::result::Result<T, ReviewError>;
