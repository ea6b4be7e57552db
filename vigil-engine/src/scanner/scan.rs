//! The violation scanner: applies a family's rules to one file's content.

use tracing::debug;
use vigil_core::types::{RuleCategory, Violation};

use super::context::ScanContext;
use super::refine;
use super::suppression;
use crate::registry::Rule;

/// Scan the file against the given rules.
///
/// Deterministic: for fixed content and a fixed rule slice, the returned
/// violations are identical and identically ordered. Violations from all
/// rules are concatenated; overlapping rules may legitimately both fire on
/// the same line.
pub fn scan(ctx: &ScanContext, rules: &[Rule]) -> Vec<Violation> {
    let lines = ctx.lines();
    let mut out = Vec::new();

    let complexity_rules: Vec<&Rule> = rules
        .iter()
        .filter(|r| r.category == RuleCategory::Complexity)
        .collect();
    if !complexity_rules.is_empty() {
        refine::complexity::scan(ctx, &complexity_rules, &lines, &mut out);
    }
    for rule in rules.iter().filter(|r| r.category == RuleCategory::Nesting) {
        refine::nesting::scan(ctx, rule, &lines, &mut out);
    }

    for rule in rules
        .iter()
        .filter(|r| !matches!(r.category, RuleCategory::Complexity | RuleCategory::Nesting))
    {
        scan_rule(ctx, rule, &lines, &mut out);
    }

    debug!(path = %ctx.path, violations = out.len(), "scan complete");
    out
}

fn scan_rule(ctx: &ScanContext, rule: &Rule, lines: &[&str], out: &mut Vec<Violation>) {
    // The shared-module import check is file-level, so one hit silences the
    // whole rule before its matchers run.
    if rule.category == RuleCategory::InfraDuplication {
        if let Some(module) = &rule.shared_module {
            if refine::duplication::imports_shared_module(&ctx.content, module) {
                return;
            }
        }
    }

    for matcher in &rule.matchers {
        for caps in matcher.pattern.captures_iter(&ctx.content) {
            let Some(m) = caps.get(0) else { continue };
            if ctx.in_comment(m.start()) {
                continue;
            }
            let line = ctx.line_of_offset(m.start());
            // The one per-match override, checked before the violation is
            // materialised.
            if suppression::is_suppressed(lines, line, &rule.id) {
                continue;
            }
            let name = caps.get(1).map(|g| g.as_str());
            if let Some(violation) =
                refine::refine(ctx, rule, name, m.as_str(), line, matcher.context_window)
            {
                out.push(violation);
            }
        }
    }
}
