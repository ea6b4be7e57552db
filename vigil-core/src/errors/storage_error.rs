//! Storage faults.
//!
//! The verdict cache degrades every one of these to a cache miss at the
//! call site; they only surface directly from maintenance commands.

/// Errors raised by the SQLite verdict cache.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("Cache serialization error: {message}")]
    Serialization { message: String },

    #[error("Cache lock poisoned")]
    LockPoisoned,
}
