//! V001: Initial schema — the verdict cache.

pub const MIGRATION_SQL: &str = r#"
-- Verdict cache: content-fingerprint-addressed check verdicts.
-- The composite key makes invalidation implicit: a changed file or a bumped
-- rule-set version simply stops resolving, and the stale row ages out via
-- the retention sweep. Rows are superseded by INSERT OR REPLACE, never
-- mutated in place.
CREATE TABLE IF NOT EXISTS verdict_cache (
    path TEXT NOT NULL,
    content_hash BLOB NOT NULL,
    check_name TEXT NOT NULL,
    ruleset_version INTEGER NOT NULL,
    passed INTEGER NOT NULL,
    violations_json TEXT NOT NULL,
    output_excerpt TEXT,
    created_at INTEGER NOT NULL,
    ttl_secs INTEGER NOT NULL,
    PRIMARY KEY (path, content_hash, check_name, ruleset_version)
) STRICT;

CREATE INDEX IF NOT EXISTS idx_verdict_cache_age
    ON verdict_cache(created_at);
"#;
