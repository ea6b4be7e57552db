//! Connection management: one serialized writer plus a read pool.

pub mod pool;
pub mod pragmas;

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rusqlite::Connection;
use vigil_core::errors::StorageError;

use self::pool::ReadPool;
use self::pragmas::{apply_pragmas, sqlite_err};
use crate::migrations;

/// Manages the write connection and the read pool for one cache database.
pub struct CacheDb {
    writer: Mutex<Connection>,
    readers: Option<ReadPool>,
    path: Option<PathBuf>,
}

impl CacheDb {
    /// Open the database at the given path, apply pragmas, run migrations.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::Sqlite {
                message: format!("create cache dir {}: {e}", parent.display()),
            })?;
        }
        let writer = Connection::open(path).map_err(sqlite_err)?;
        apply_pragmas(&writer)?;
        migrations::run_migrations(&writer)?;

        let readers = ReadPool::open(path, ReadPool::default_size())?;

        Ok(Self {
            writer: Mutex::new(writer),
            readers: Some(readers),
            path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory database (for testing). Reads share the writer
    /// connection, since separate in-memory connections see separate data.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let writer = Connection::open_in_memory().map_err(sqlite_err)?;
        apply_pragmas(&writer)?;
        migrations::run_migrations(&writer)?;
        Ok(Self {
            writer: Mutex::new(writer),
            readers: None,
            path: None,
        })
    }

    /// Execute a write operation on the serialized writer connection.
    pub fn with_writer<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        let guard = self.writer.lock().map_err(|_| StorageError::LockPoisoned)?;
        f(&guard)
    }

    /// Execute a read operation on a pooled read connection.
    pub fn with_reader<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        match &self.readers {
            Some(pool) => pool.with_conn(f),
            None => self.with_writer(f),
        }
    }

    /// Database file path (None for in-memory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
