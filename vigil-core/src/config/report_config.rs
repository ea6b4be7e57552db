//! Report rendering configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the console report.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Detailed entries printed per severity before summarising. Default: 10.
    pub max_shown_per_severity: Option<usize>,
    /// ANSI colour output. Default: true.
    pub color: Option<bool>,
}

impl ReportConfig {
    pub fn effective_max_shown(&self) -> usize {
        self.max_shown_per_severity.unwrap_or(10)
    }

    pub fn effective_color(&self) -> bool {
        self.color.unwrap_or(true)
    }
}
