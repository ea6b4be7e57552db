//! Accessibility refinements: attribute presence checks on matched markup.
//!
//! Rust's regex engine has no lookaround, so the matcher grabs the candidate
//! tag and the refinement inspects its attributes.

use vigil_core::types::Violation;

use super::materialize;
use crate::registry::Rule;
use crate::scanner::context::ScanContext;

pub fn refine(
    ctx: &ScanContext,
    rule: &Rule,
    matched_text: &str,
    line: u32,
    window: usize,
) -> Option<Violation> {
    match rule.id.as_str() {
        "accessibility/img-alt" => {
            if matched_text.contains("alt=") {
                return None;
            }
        }
        "accessibility/click-handler" => {
            // The tag may continue past the match; check the whole line for
            // a keyboard handler or an explicit role.
            let context = ctx.line((line - 1) as usize);
            if context.contains("onKeyDown")
                || context.contains("onKeyPress")
                || context.contains("onKeyUp")
                || context.contains("role=")
            {
                return None;
            }
        }
        _ => {}
    }
    Some(materialize(
        ctx,
        rule,
        line,
        window,
        rule.message.clone(),
        rule.suggestion.clone(),
    ))
}
