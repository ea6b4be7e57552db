//! Scanner-based check execution.

use std::time::Instant;

use vigil_core::types::{CheckFamily, CheckResult, Severity, Violation};

use crate::registry::RuleRegistry;
use crate::scanner::{self, ScanContext};

/// Run one rule family against the shared scan context.
pub fn run(
    name: &str,
    family: CheckFamily,
    ctx: &ScanContext,
    registry: &RuleRegistry,
    warnings_as_errors: bool,
    blocking: bool,
) -> CheckResult {
    let start = Instant::now();
    let violations = scanner::scan(ctx, registry.rules_for(family));
    let passed = verdict(&violations, warnings_as_errors);
    CheckResult {
        name: name.to_string(),
        passed,
        blocking,
        violations,
        duration_ms: start.elapsed().as_millis() as u64,
        output_excerpt: None,
        from_cache: false,
        error: None,
    }
}

/// A check passes unless it found an error-severity violation, or a warning
/// while the family escalates warnings. The violations themselves keep the
/// severity the rule assigned at match time; escalation is a gate concern.
pub fn verdict(violations: &[Violation], warnings_as_errors: bool) -> bool {
    !violations.iter().any(|v| {
        v.severity == Severity::Error || (warnings_as_errors && v.severity == Severity::Warning)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vigil_core::types::RuleCategory;

    fn violation(severity: Severity) -> Violation {
        Violation {
            rule_id: "naming/component-pascal".to_string(),
            file: "a.tsx".to_string(),
            line: 1,
            severity,
            category: RuleCategory::Naming,
            message: "test".to_string(),
            suggestion: None,
            excerpt: None,
        }
    }

    #[test]
    fn warnings_pass_by_default() {
        assert!(verdict(&[violation(Severity::Warning)], false));
        assert!(verdict(&[violation(Severity::Info)], false));
    }

    #[test]
    fn errors_always_fail() {
        assert!(!verdict(&[violation(Severity::Error)], false));
    }

    #[test]
    fn escalation_fails_warnings() {
        assert!(!verdict(&[violation(Severity::Warning)], true));
        assert!(verdict(&[violation(Severity::Info)], true));
    }
}
