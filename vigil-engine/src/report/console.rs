//! Console reporter — human-readable output with colour codes.
//!
//! Output is truncated per severity: the first N violations of each severity
//! print in full, the remainder is summarised by count, so the report stays
//! bounded regardless of violation volume.

use vigil_core::types::{AuditReport, CheckResult, ExitStatus, Severity};

pub struct ConsoleRenderer {
    use_color: bool,
    max_shown: usize,
}

impl ConsoleRenderer {
    pub fn new(use_color: bool, max_shown: usize) -> Self {
        Self {
            use_color,
            max_shown: max_shown.max(1),
        }
    }

    pub fn render(&self, report: &AuditReport) -> String {
        let mut output = String::new();
        let mut shown = [0usize; 3];
        let mut hidden = [0usize; 3];

        output.push_str("╔══════════════════════════════════════════╗\n");
        output.push_str("║             Vigil Audit Report           ║\n");
        output.push_str("╚══════════════════════════════════════════╝\n\n");
        output.push_str(&format!("file: {}\n\n", report.file));

        if report.results.is_empty() {
            output.push_str("no checks applied to this file\n\n");
        }

        for result in &report.results {
            self.render_check(result, &mut shown, &mut hidden, &mut output);
        }

        for (idx, label) in [(0, "errors"), (1, "warnings"), (2, "infos")] {
            if hidden[idx] > 0 {
                output.push_str(&format!("  … and {} more {label}\n", hidden[idx]));
            }
        }
        if hidden.iter().any(|&n| n > 0) {
            output.push('\n');
        }

        let passed = report.results.iter().filter(|r| r.passed).count();
        output.push_str(&format!(
            "─── Summary: {}/{} checks passed, {} errors, {} warnings, {} infos ───\n",
            passed,
            report.results.len(),
            report.counts.errors,
            report.counts.warnings,
            report.counts.infos,
        ));
        match report.exit {
            ExitStatus::Success => output.push_str("Result: PASSED ✓\n"),
            _ => output.push_str("Result: FAILED ✗\n"),
        }
        output
    }

    fn render_check(
        &self,
        result: &CheckResult,
        shown: &mut [usize; 3],
        hidden: &mut [usize; 3],
        output: &mut String,
    ) {
        let symbol = if result.error.is_some() {
            "⚡"
        } else if result.passed {
            "✓"
        } else {
            "✗"
        };
        let cached = if result.from_cache { " (cached)" } else { "" };
        output.push_str(&format!(
            "{symbol} {} — {}ms{cached}\n",
            result.name, result.duration_ms
        ));

        if let Some(error) = &result.error {
            output.push_str(&format!("  check failed to run: {error}\n"));
        }

        for violation in &result.violations {
            let idx = severity_index(violation.severity);
            if shown[idx] >= self.max_shown {
                hidden[idx] += 1;
                continue;
            }
            shown[idx] += 1;

            let cs = self.color_start(violation.severity);
            let ce = self.color_end();
            output.push_str(&format!(
                "  {cs}{}{ce}: {}:{}: {} [{}]\n",
                violation.severity, violation.file, violation.line, violation.message, violation.rule_id,
            ));
            if let Some(suggestion) = &violation.suggestion {
                output.push_str(&format!("    → {suggestion}\n"));
            }
        }

        if result.violations.is_empty() {
            if let Some(excerpt) = &result.output_excerpt {
                if !result.passed {
                    for line in excerpt.lines() {
                        output.push_str(&format!("  | {line}\n"));
                    }
                }
            }
        }
        output.push('\n');
    }

    fn color_start(&self, severity: Severity) -> &'static str {
        if !self.use_color {
            return "";
        }
        match severity {
            Severity::Error => "\x1b[31m",
            Severity::Warning => "\x1b[33m",
            Severity::Info => "\x1b[36m",
        }
    }

    fn color_end(&self) -> &'static str {
        if self.use_color {
            "\x1b[0m"
        } else {
            ""
        }
    }
}

fn severity_index(severity: Severity) -> usize {
    match severity {
        Severity::Error => 0,
        Severity::Warning => 1,
        Severity::Info => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::aggregate;
    use vigil_core::types::{RuleCategory, Violation};

    fn warning(line: u32) -> Violation {
        Violation {
            rule_id: "naming/component-pascal".to_string(),
            file: "a.tsx".to_string(),
            line,
            severity: Severity::Warning,
            category: RuleCategory::Naming,
            message: format!("warning on line {line}"),
            suggestion: None,
            excerpt: None,
        }
    }

    fn result_with_warnings(n: u32) -> CheckResult {
        CheckResult {
            name: "naming".to_string(),
            passed: true,
            blocking: true,
            violations: (1..=n).map(warning).collect(),
            duration_ms: 2,
            output_excerpt: None,
            from_cache: false,
            error: None,
        }
    }

    #[test]
    fn truncates_beyond_max_shown() {
        let report = aggregate("a.tsx", vec![result_with_warnings(7)]);
        let rendered = ConsoleRenderer::new(false, 3).render(&report);
        assert!(rendered.contains("warning on line 3"));
        assert!(!rendered.contains("warning on line 4"));
        assert!(rendered.contains("… and 4 more warnings"));
        assert!(rendered.contains("7 warnings"));
    }

    #[test]
    fn no_ansi_codes_without_color() {
        let report = aggregate("a.tsx", vec![result_with_warnings(1)]);
        let rendered = ConsoleRenderer::new(false, 10).render(&report);
        assert!(!rendered.contains("\x1b["));
    }

    #[test]
    fn cached_results_are_marked() {
        let mut result = result_with_warnings(0);
        result.from_cache = true;
        let report = aggregate("a.tsx", vec![result]);
        let rendered = ConsoleRenderer::new(false, 10).render(&report);
        assert!(rendered.contains("(cached)"));
    }

    #[test]
    fn empty_report_renders_pass() {
        let report = aggregate("a.tsx", vec![]);
        let rendered = ConsoleRenderer::new(false, 10).render(&report);
        assert!(rendered.contains("no checks applied"));
        assert!(rendered.contains("PASSED"));
    }
}
