//! The aggregated audit report and the four-way exit taxonomy.

use serde::{Deserialize, Serialize};

use super::check::CheckResult;
use super::severity::Severity;

/// Process exit status contract consumed by automation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExitStatus {
    /// All required checks passed.
    Success,
    /// A blocking violation or failed blocking check was found.
    CheckFailure,
    /// Malformed event or invalid configuration; no checks were run.
    ConfigError,
    /// An unhandled fault in the engine itself.
    UnexpectedError,
}

impl ExitStatus {
    pub fn code(&self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::CheckFailure => 1,
            ExitStatus::ConfigError => 2,
            ExitStatus::UnexpectedError => 3,
        }
    }
}

/// Violation counts bucketed by severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
}

impl SeverityCounts {
    pub fn add(&mut self, severity: Severity) {
        match severity {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
            Severity::Info => self.infos += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.errors + self.warnings + self.infos
    }
}

/// The final report for one audit invocation. Check results are ordered by
/// check name regardless of execution timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub file: String,
    pub results: Vec<CheckResult>,
    pub counts: SeverityCounts,
    pub exit: ExitStatus,
}

impl AuditReport {
    /// An empty passing report, used when no check applies to the event.
    pub fn empty(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            results: Vec::new(),
            counts: SeverityCounts::default(),
            exit: ExitStatus::Success,
        }
    }
}
