//! Per-check outcome.

use serde::{Deserialize, Serialize};

use super::violation::Violation;

/// The outcome of one named check against one file event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    /// Whether a failure of this check gates the final exit status.
    pub blocking: bool,
    pub violations: Vec<Violation>,
    pub duration_ms: u64,
    /// Bounded excerpt of external-tool output, for human display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_excerpt: Option<String>,
    pub from_cache: bool,
    /// Set when the check itself faulted (spawn failure, timeout, panic).
    /// A faulted check is recorded as failed; siblings are unaffected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckResult {
    pub fn passed(name: impl Into<String>, blocking: bool, duration_ms: u64) -> Self {
        Self {
            name: name.into(),
            passed: true,
            blocking,
            violations: Vec::new(),
            duration_ms,
            output_excerpt: None,
            from_cache: false,
            error: None,
        }
    }

    pub fn failed(
        name: impl Into<String>,
        blocking: bool,
        violations: Vec<Violation>,
        duration_ms: u64,
    ) -> Self {
        Self {
            name: name.into(),
            passed: false,
            blocking,
            violations,
            duration_ms,
            output_excerpt: None,
            from_cache: false,
            error: None,
        }
    }

    /// A check that could not run to a verdict. Recorded as failed with the
    /// fault captured, so the report always covers every attempted check.
    pub fn errored(name: impl Into<String>, blocking: bool, error: impl Into<String>) -> Self {
        let error = error.into();
        Self {
            name: name.into(),
            passed: false,
            blocking,
            violations: Vec::new(),
            duration_ms: 0,
            output_excerpt: Some(error.clone()),
            from_cache: false,
            error: Some(error),
        }
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.output_excerpt = Some(excerpt.into());
        self
    }

    pub fn cached(mut self) -> Self {
        self.from_cache = true;
        self
    }
}
