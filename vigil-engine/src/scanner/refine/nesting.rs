//! Nesting pass: leading indentation quantised into a nesting level.
//!
//! Dividing indentation by a fixed quantum assumes a consistent indent unit;
//! tab-indented or reformatted code can misreport levels. Known imprecision
//! of the text-heuristic engine.

use vigil_core::types::Violation;

use super::materialize;
use crate::registry::Rule;
use crate::scanner::context::ScanContext;
use crate::scanner::suppression;

pub fn scan(ctx: &ScanContext, rule: &Rule, lines: &[&str], out: &mut Vec<Violation>) {
    let quantum = ctx.thresholds.effective_indent_width().max(1);
    let max = ctx.thresholds.effective_max_nesting();

    for (idx, text) in lines.iter().enumerate() {
        if text.trim().is_empty() {
            continue;
        }
        if ctx.in_comment(ctx.line_offset(idx)) {
            continue;
        }
        let level = indent_columns(text, quantum) / quantum;
        if level <= max {
            continue;
        }
        let line = idx as u32 + 1;
        if suppression::is_suppressed(lines, line, &rule.id) {
            continue;
        }
        // Flagged once per offending line.
        out.push(materialize(
            ctx,
            rule,
            line,
            0,
            format!("nesting level {level} exceeds the maximum of {max}"),
            rule.suggestion.clone(),
        ));
    }
}

/// Leading whitespace in columns, a tab counting as one quantum.
fn indent_columns(line: &str, quantum: u32) -> u32 {
    let mut columns = 0u32;
    for c in line.chars() {
        match c {
            ' ' => columns += 1,
            '\t' => columns += quantum,
            _ => break,
        }
    }
    columns
}
