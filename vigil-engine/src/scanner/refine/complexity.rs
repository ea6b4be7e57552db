//! Complexity pass: function spans by brace-depth tracking, with length,
//! branching, and parameter metrics.
//!
//! Function boundaries are approximated by tracking brace depth from a
//! detected signature line to the line where depth returns to zero. This
//! assumes the opening brace appears on or after the signature line and can
//! misfire on unusual formatting; a known imprecision of the text-heuristic
//! engine.

use once_cell::sync::Lazy;
use regex::Regex;
use vigil_core::types::Violation;

use super::materialize;
use crate::registry::Rule;
use crate::scanner::context::ScanContext;
use crate::scanner::suppression;

static BRANCH_KEYWORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:if|for|while|case|catch)\b|&&|\|\|").expect("static pattern"));

/// One detected function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSpan {
    pub name: String,
    /// 1-based, inclusive.
    pub start_line: u32,
    pub end_line: u32,
    pub param_count: usize,
}

impl FunctionSpan {
    pub fn length(&self) -> u32 {
        self.end_line - self.start_line
    }
}

/// Run every complexity-category rule in one pass over shared spans.
pub fn scan(ctx: &ScanContext, rules: &[&Rule], lines: &[&str], out: &mut Vec<Violation>) {
    let spans: Vec<FunctionSpan> = rules
        .iter()
        .find(|r| !r.matchers.is_empty())
        .map(|r| function_spans(ctx, r))
        .unwrap_or_default();

    for rule in rules {
        match rule.id.as_str() {
            "complexity/function-length" => {
                let max = ctx.thresholds.effective_max_function_lines();
                for span in &spans {
                    if span.length() > max {
                        push_unless_suppressed(
                            ctx,
                            rule,
                            lines,
                            span.start_line,
                            format!(
                                "function `{}` is {} lines long (max {max})",
                                span.name,
                                span.length()
                            ),
                            out,
                        );
                    }
                }
            }
            "complexity/cyclomatic" => {
                let max = ctx.thresholds.effective_max_cyclomatic();
                for span in &spans {
                    let complexity = cyclomatic(ctx, span);
                    if complexity > max {
                        push_unless_suppressed(
                            ctx,
                            rule,
                            lines,
                            span.start_line,
                            format!(
                                "function `{}` has approximate cyclomatic complexity {complexity} (max {max})",
                                span.name
                            ),
                            out,
                        );
                    }
                }
            }
            "complexity/parameter-count" => {
                let max = ctx.thresholds.effective_max_params() as usize;
                for span in &spans {
                    if span.param_count > max {
                        push_unless_suppressed(
                            ctx,
                            rule,
                            lines,
                            span.start_line,
                            format!(
                                "function `{}` takes {} parameters (max {max})",
                                span.name, span.param_count
                            ),
                            out,
                        );
                    }
                }
            }
            "complexity/file-length" => {
                let max = ctx.thresholds.effective_max_file_lines() as usize;
                if ctx.line_count() > max {
                    push_unless_suppressed(
                        ctx,
                        rule,
                        lines,
                        1,
                        format!("file is {} lines long (max {max})", ctx.line_count()),
                        out,
                    );
                }
            }
            _ => {}
        }
    }
}

fn push_unless_suppressed(
    ctx: &ScanContext,
    rule: &Rule,
    lines: &[&str],
    line: u32,
    message: String,
    out: &mut Vec<Violation>,
) {
    if suppression::is_suppressed(lines, line, &rule.id) {
        return;
    }
    out.push(materialize(ctx, rule, line, 0, message, rule.suggestion.clone()));
}

/// Detect function spans from the rule's signature matchers.
pub fn function_spans(ctx: &ScanContext, rule: &Rule) -> Vec<FunctionSpan> {
    let mut spans = Vec::new();
    for matcher in &rule.matchers {
        for caps in matcher.pattern.captures_iter(&ctx.content) {
            let m = match caps.get(0) {
                Some(m) => m,
                None => continue,
            };
            if ctx.in_comment(m.start()) {
                continue;
            }
            let name = caps
                .get(1)
                .map(|g| g.as_str().to_string())
                .unwrap_or_else(|| "<anonymous>".to_string());
            if let Some(span) = trace_span(ctx, m.start(), name) {
                spans.push(span);
            }
        }
    }
    spans.sort_by_key(|s| s.start_line);
    spans.dedup_by_key(|s| s.start_line);
    spans
}

/// Follow brace depth from the signature to the closing brace.
fn trace_span(ctx: &ScanContext, sign_offset: usize, name: String) -> Option<FunctionSpan> {
    let bytes = ctx.content.as_bytes();
    let open = ctx.content[sign_offset..].find('{')? + sign_offset;

    let mut depth = 0usize;
    let mut end = None;
    for (i, b) in bytes[open..].iter().enumerate() {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    end = Some(open + i);
                    break;
                }
            }
            _ => {}
        }
    }

    let start_line = ctx.line_of_offset(sign_offset);
    // An unbalanced body swallows the rest of the file; still report it,
    // clamped to the last line.
    let end_line = match end {
        Some(offset) => ctx.line_of_offset(offset),
        None => ctx.line_count() as u32,
    };
    Some(FunctionSpan {
        name,
        start_line,
        end_line,
        param_count: param_count(&ctx.content[sign_offset..open]),
    })
}

/// Parameter count by comma-splitting the signature's parameter list.
fn param_count(signature: &str) -> usize {
    let open = match signature.find('(') {
        Some(i) => i,
        // Paren-less arrow (`x => …`) always takes exactly one parameter.
        None => return usize::from(signature.contains("=>")),
    };
    let mut depth = 0usize;
    let mut count = 0usize;
    let mut seen_any = false;
    for c in signature[open..].chars() {
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    break;
                }
            }
            ',' if depth == 1 => count += 1,
            c if depth >= 1 && !c.is_whitespace() => seen_any = true,
            _ => {}
        }
    }
    if !seen_any {
        0
    } else {
        count + 1
    }
}

/// 1 + branching/loop/logical-operator occurrences within the span.
fn cyclomatic(ctx: &ScanContext, span: &FunctionSpan) -> u32 {
    let mut count = 1u32;
    for idx in (span.start_line - 1)..span.end_line {
        let line = ctx.line(idx as usize);
        count += BRANCH_KEYWORDS.find_iter(line).count() as u32;
        count += ternary_count(line);
    }
    count
}

/// `?` used as a ternary, excluding optional chaining and nullish
/// coalescing.
fn ternary_count(line: &str) -> u32 {
    let bytes = line.as_bytes();
    let mut count = 0u32;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'?' {
            let next = bytes.get(i + 1).copied();
            if next == Some(b'?') {
                i += 2;
                continue;
            }
            if next != Some(b'.') {
                count += 1;
            }
        }
        i += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::LayerDirs;
    use vigil_core::config::{ClassifyConfig, Thresholds};
    use vigil_core::types::{FileClassification, FxHashSet, Layer};

    fn ctx(content: &str) -> ScanContext {
        let classification = FileClassification::new(
            "test.ts".to_string(),
            Layer::Unknown,
            FxHashSet::default(),
            Vec::new(),
        );
        ScanContext::new(
            "test.ts",
            content.to_string(),
            classification,
            Thresholds::default(),
            LayerDirs::from_config(&ClassifyConfig::default()),
        )
    }

    fn signature_rule() -> Rule {
        let registry = crate::registry::RuleRegistry::builtin().unwrap();
        let rule = registry
            .iter()
            .find(|r| r.id == "complexity/function-length")
            .unwrap()
            .clone();
        rule
    }

    #[test]
    fn span_tracks_brace_depth() {
        let content = "function greet(name) {\n  if (name) {\n    return name;\n  }\n  return 'hi';\n}\n";
        let spans = function_spans(&ctx(content), &signature_rule());
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].name, "greet");
        assert_eq!(spans[0].start_line, 1);
        assert_eq!(spans[0].end_line, 6);
        assert_eq!(spans[0].param_count, 1);
    }

    #[test]
    fn arrow_function_detected() {
        let content = "export const load = async (id, opts) => {\n  return fetch(id, opts);\n};\n";
        let spans = function_spans(&ctx(content), &signature_rule());
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].name, "load");
        assert_eq!(spans[0].param_count, 2);
    }

    #[test]
    fn params_counted_through_nested_braces() {
        assert_eq!(param_count("function f({ a, b }, c)"), 2);
        assert_eq!(param_count("function f()"), 0);
        assert_eq!(param_count("function f(a)"), 1);
    }

    #[test]
    fn ternaries_counted_but_not_optional_chaining() {
        assert_eq!(ternary_count("const v = a ? b : c;"), 1);
        assert_eq!(ternary_count("const v = a?.b ?? c;"), 0);
    }

    #[test]
    fn long_function_flagged_with_both_numbers() {
        let mut content = String::from("function big() {\n");
        for i in 0..80 {
            content.push_str(&format!("  work({i});\n"));
        }
        content.push_str("}\n");

        let ctx = ctx(&content);
        let registry = crate::registry::RuleRegistry::builtin().unwrap();
        let rules: Vec<&Rule> = registry
            .rules_for(vigil_core::types::CheckFamily::Complexity)
            .iter()
            .filter(|r| r.id == "complexity/function-length")
            .collect();
        let lines = ctx.lines();
        let mut out = Vec::new();
        scan(&ctx, &rules, &lines, &mut out);

        assert_eq!(out.len(), 1);
        assert!(out[0].message.contains("81"));
        assert!(out[0].message.contains("50"));
    }
}
