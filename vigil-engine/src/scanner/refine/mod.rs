//! Category-specific refinements layered on top of plain pattern matching.
//!
//! A matcher finds candidates; the refinement for the rule's category
//! decides whether a candidate becomes a violation and fills in the rendered
//! message and suggestion. These are documented heuristics over raw text,
//! not guaranteed-precise static analysis; the Violation contract does not
//! depend on how a match was produced.

pub mod accessibility;
pub mod complexity;
pub mod duplication;
pub mod layering;
pub mod naming;
pub mod nesting;

use vigil_core::types::{RuleCategory, Violation};

use super::context::ScanContext;
use crate::registry::Rule;

/// Dispatch one pattern candidate to its category refinement.
pub fn refine(
    ctx: &ScanContext,
    rule: &Rule,
    name: Option<&str>,
    matched_text: &str,
    line: u32,
    window: usize,
) -> Option<Violation> {
    match rule.category {
        RuleCategory::Naming => naming::refine(ctx, rule, name, line, window),
        RuleCategory::Layering => layering::refine(ctx, rule, name?, line, window),
        RuleCategory::Accessibility => accessibility::refine(ctx, rule, matched_text, line, window),
        RuleCategory::Security | RuleCategory::InfraDuplication | RuleCategory::Prose => {
            Some(materialize(
                ctx,
                rule,
                line,
                window,
                rule.message.clone(),
                rule.suggestion.clone(),
            ))
        }
        // Whole-file analyses run as dedicated passes, never per-candidate.
        RuleCategory::Complexity | RuleCategory::Nesting => None,
    }
}

/// Build the violation for a confirmed match.
pub(crate) fn materialize(
    ctx: &ScanContext,
    rule: &Rule,
    line: u32,
    window: usize,
    message: String,
    suggestion: Option<String>,
) -> Violation {
    Violation {
        rule_id: rule.id.clone(),
        file: ctx.path.clone(),
        line,
        severity: rule.severity,
        category: rule.category,
        message,
        suggestion,
        excerpt: Some(ctx.excerpt(line, window)),
    }
}
