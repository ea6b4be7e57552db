//! Versioned schema migrations, tracked via `PRAGMA user_version`.

pub mod v001_initial;

use rusqlite::Connection;
use vigil_core::errors::StorageError;

use crate::connection::pragmas::sqlite_err;

const MIGRATIONS: &[(i64, &str)] = &[(1, v001_initial::MIGRATION_SQL)];

/// Apply any migrations newer than the database's current version.
pub fn run_migrations(conn: &Connection) -> Result<(), StorageError> {
    let current: i64 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(sqlite_err)?;

    for (version, sql) in MIGRATIONS {
        if *version <= current {
            continue;
        }
        conn.execute_batch(sql).map_err(sqlite_err)?;
        conn.pragma_update(None, "user_version", version)
            .map_err(sqlite_err)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();

        let version: i64 = conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, 1);
    }

    #[test]
    fn verdict_cache_table_exists() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='verdict_cache'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }
}
