//! Verdict cache configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the persisted verdict cache.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CacheConfig {
    /// Enabled unless set to false.
    pub enabled: Option<bool>,
    /// Directory holding `vigil.db`. Default: `.vigil` under the project root.
    pub dir: Option<PathBuf>,
    /// TTL for cheap scanner checks, in seconds. Default: 1 day.
    pub scan_ttl_secs: Option<u64>,
    /// TTL for expensive external-tool checks, in seconds. Default: 7 days.
    pub tool_ttl_secs: Option<u64>,
    /// Entries older than this many days are swept. Default: 30.
    pub retention_days: Option<u32>,
}

impl CacheConfig {
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    pub fn effective_dir(&self, root: &std::path::Path) -> PathBuf {
        match &self.dir {
            Some(dir) => dir.clone(),
            None => root.join(".vigil"),
        }
    }

    pub fn effective_scan_ttl_secs(&self) -> u64 {
        self.scan_ttl_secs.unwrap_or(24 * 60 * 60)
    }

    pub fn effective_tool_ttl_secs(&self) -> u64 {
        self.tool_ttl_secs.unwrap_or(7 * 24 * 60 * 60)
    }

    pub fn effective_retention_days(&self) -> u32 {
        self.retention_days.unwrap_or(30)
    }
}
