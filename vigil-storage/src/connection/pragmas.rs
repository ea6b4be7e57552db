//! SQLite pragmas for the verdict cache.

use rusqlite::Connection;
use vigil_core::errors::StorageError;

/// Apply pragmas to the write connection.
pub fn apply_pragmas(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;
         PRAGMA busy_timeout = 5000;",
    )
    .map_err(sqlite_err)
}

/// Apply pragmas to a pooled read connection.
pub fn apply_read_pragmas(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "PRAGMA query_only = ON;
         PRAGMA busy_timeout = 5000;",
    )
    .map_err(sqlite_err)
}

pub(crate) fn sqlite_err(e: rusqlite::Error) -> StorageError {
    StorageError::Sqlite {
        message: e.to_string(),
    }
}
