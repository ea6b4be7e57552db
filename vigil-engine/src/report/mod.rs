//! Reporter / gate — severity aggregation and the exit-code decision.

pub mod console;

use vigil_core::types::{AuditReport, CheckResult, ExitStatus, Severity, SeverityCounts};

/// Aggregate check results into the final report.
///
/// Results are sorted by check name so report ordering never depends on
/// execution timing. The exit gate: any error-severity violation, or any
/// blocking check that did not pass, fails the run; warning- and info-only
/// results exit successfully but stay visible in the report.
pub fn aggregate(file: &str, mut results: Vec<CheckResult>) -> AuditReport {
    results.sort_by(|a, b| a.name.cmp(&b.name));

    let mut counts = SeverityCounts::default();
    for result in &results {
        for violation in &result.violations {
            counts.add(violation.severity);
        }
    }

    let gate_failed = results.iter().any(|r| r.blocking && !r.passed)
        || results
            .iter()
            .flat_map(|r| r.violations.iter())
            .any(|v| v.severity == Severity::Error);

    AuditReport {
        file: file.to_string(),
        results,
        counts,
        exit: if gate_failed {
            ExitStatus::CheckFailure
        } else {
            ExitStatus::Success
        },
    }
}
