//! Errors raised by [`crate::ItemStore`] implementations.

use thiserror::Error;

/// Failure to read from or write to the item collection.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing database could not be reached when the store was opened.
    #[error("database unavailable: {0}")]
    Unavailable(String),
    /// The payload cannot be stored as a document.
    #[error("invalid document: {0}")]
    InvalidDocument(String),
    #[cfg(feature = "postgres")]
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[cfg(feature = "postgres")]
    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}
