//! The cache store: explicit composite keys, TTL, degrade-to-miss.

use std::path::Path;

use tracing::warn;
use vigil_core::errors::StorageError;
use vigil_core::types::Violation;
use xxhash_rust::xxh3::xxh3_64;

use crate::connection::CacheDb;
use crate::queries::verdict_cache::{self, VerdictRow};
use crate::retention;

/// Compute the content fingerprint of a file. Hashing the full content
/// rather than mtime keeps verdicts correct under checkout/restore, where
/// mtimes are unreliable.
#[inline]
pub fn fingerprint(content: &[u8]) -> u64 {
    xxh3_64(content)
}

/// The explicit composite cache key. Any component changing means the key
/// no longer resolves; invalidation is implicit, never a deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheKey {
    pub path: String,
    pub content_hash: u64,
    pub check_name: String,
    pub ruleset_version: u32,
}

impl CacheKey {
    pub fn new(
        path: impl Into<String>,
        content: &[u8],
        check_name: impl Into<String>,
        ruleset_version: u32,
    ) -> Self {
        Self {
            path: path.into(),
            content_hash: fingerprint(content),
            check_name: check_name.into(),
            ruleset_version,
        }
    }

    fn hash_bytes(&self) -> Vec<u8> {
        self.content_hash.to_le_bytes().to_vec()
    }
}

/// A cached verdict.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub passed: bool,
    pub violations: Vec<Violation>,
    pub output_excerpt: Option<String>,
    pub created_at: i64,
    pub ttl_secs: u64,
}

impl CacheEntry {
    /// An entry past its TTL is treated identically to a missing one.
    pub fn is_expired(&self, now: i64) -> bool {
        now.saturating_sub(self.created_at) > self.ttl_secs as i64
    }
}

/// Cache statistics for the maintenance command.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    pub entries: u64,
    pub oldest_created_at: Option<i64>,
    pub path: Option<String>,
}

/// Content-addressed verdict store backed by SQLite.
///
/// All read/write errors degrade to "treat as miss" with a warning; a
/// disabled store behaves as an always-missing cache.
pub struct CacheStore {
    db: Option<CacheDb>,
}

impl CacheStore {
    /// Open the on-disk store at `<dir>/vigil.db`.
    pub fn open(dir: &Path) -> Result<Self, StorageError> {
        let db = CacheDb::open(&dir.join("vigil.db"))?;
        Ok(Self { db: Some(db) })
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self {
            db: Some(CacheDb::open_in_memory()?),
        })
    }

    /// A store that never hits. Used when caching is disabled or the
    /// database could not be opened.
    pub fn disabled() -> Self {
        Self { db: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.db.is_some()
    }

    /// Look up a verdict. Returns `None` on miss, expiry, or any storage
    /// or deserialization error.
    pub fn get(&self, key: &CacheKey, now: i64) -> Option<CacheEntry> {
        let db = self.db.as_ref()?;
        let row = db
            .with_reader(|conn| {
                verdict_cache::get(
                    conn,
                    &key.path,
                    &key.hash_bytes(),
                    &key.check_name,
                    key.ruleset_version,
                )
            })
            .unwrap_or_else(|e| {
                warn!(check = %key.check_name, error = %e, "cache read failed; treating as miss");
                None
            })?;

        let violations: Vec<Violation> = match serde_json::from_str(&row.violations_json) {
            Ok(v) => v,
            Err(e) => {
                warn!(check = %key.check_name, error = %e, "cache entry unreadable; treating as miss");
                return None;
            }
        };

        let entry = CacheEntry {
            passed: row.passed,
            violations,
            output_excerpt: row.output_excerpt,
            created_at: row.created_at,
            ttl_secs: row.ttl_secs,
        };
        if entry.is_expired(now) {
            return None;
        }
        Some(entry)
    }

    /// Store a verdict. Errors are logged and swallowed; the caller never
    /// depends on the write having happened.
    pub fn put(&self, key: &CacheKey, entry: &CacheEntry) {
        let Some(db) = self.db.as_ref() else { return };
        let violations_json = match serde_json::to_string(&entry.violations) {
            Ok(json) => json,
            Err(e) => {
                warn!(check = %key.check_name, error = %e, "cache serialization failed; skipping write");
                return;
            }
        };
        let row = VerdictRow {
            path: key.path.clone(),
            content_hash: key.hash_bytes(),
            check_name: key.check_name.clone(),
            ruleset_version: key.ruleset_version,
            passed: entry.passed,
            violations_json,
            output_excerpt: entry.output_excerpt.clone(),
            created_at: entry.created_at,
            ttl_secs: entry.ttl_secs,
        };
        if let Err(e) = db.with_writer(|conn| verdict_cache::upsert(conn, &row)) {
            warn!(check = %key.check_name, error = %e, "cache write failed; continuing without");
        }
    }

    /// Sweep entries older than the retention horizon.
    pub fn sweep(&self, now: i64, older_than_secs: i64) -> Result<u64, StorageError> {
        match self.db.as_ref() {
            Some(db) => db.with_writer(|conn| retention::sweep(conn, now, older_than_secs)),
            None => Ok(0),
        }
    }

    /// Entry count and age statistics.
    pub fn stats(&self) -> Result<CacheStats, StorageError> {
        match self.db.as_ref() {
            Some(db) => db.with_reader(|conn| {
                Ok(CacheStats {
                    entries: verdict_cache::count(conn)? as u64,
                    oldest_created_at: verdict_cache::oldest_created_at(conn)?,
                    path: db.path().map(|p| p.display().to_string()),
                })
            }),
            None => Ok(CacheStats::default()),
        }
    }
}
