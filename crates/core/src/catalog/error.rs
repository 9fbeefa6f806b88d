//! Catalog error types.

use std::fmt;

use thiserror::Error;

use crate::storage::UploadError;

/// The record kinds managed by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// News article ("noticia").
    News,
    /// Podcast episode.
    Podcast,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::News => f.write_str("news article"),
            Self::Podcast => f.write_str("podcast"),
        }
    }
}

/// Catalog operation errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No record with this id.
    #[error("{kind} not found with id: {id}")]
    NotFound {
        /// Record kind.
        kind: EntityKind,
        /// Requested id.
        id: i64,
    },

    /// An asset upload failed; nothing was persisted.
    #[error(transparent)]
    Upload(#[from] UploadError),

    /// Repository operation failed.
    #[error("repository error: {0}")]
    Repository(String),
}

impl CatalogError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(kind: EntityKind, id: i64) -> Self {
        Self::NotFound { kind, id }
    }

    /// Create a repository error.
    #[must_use]
    pub fn repository(msg: impl Into<String>) -> Self {
        Self::Repository(msg.into())
    }
}
