//! Inline suppression markers.
//!
//! `vigil-ignore` on the matched line or the line immediately above it
//! discards the match; a trailing rule list narrows the suppression to the
//! named rules. `eslint-disable-next-line` is honoured the same way, since
//! the scanned trees already carry it. This is the only per-match override,
//! checked before a violation is materialised.

const MARKERS: &[&str] = &["vigil-ignore", "eslint-disable-next-line"];
const COMMENT_TOKENS: &[&str] = &["//", "/*", "#", "<!--"];

/// A parsed suppression directive (used by tooling that lists them).
#[derive(Debug, Clone)]
pub struct SuppressionDirective {
    /// 1-based line the marker is on.
    pub line: u32,
    /// Empty means every rule is suppressed.
    pub rule_ids: Vec<String>,
}

/// Whether a violation of `rule_id` at 1-based `line` is suppressed.
pub fn is_suppressed(lines: &[&str], line: u32, rule_id: &str) -> bool {
    if line == 0 {
        return false;
    }
    let idx = (line - 1) as usize;

    if idx < lines.len() && line_suppresses(lines[idx], rule_id) {
        return true;
    }
    idx > 0 && idx - 1 < lines.len() && line_suppresses(lines[idx - 1], rule_id)
}

/// Extract every suppression directive in the file.
pub fn extract_suppressions(lines: &[&str]) -> Vec<SuppressionDirective> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(i, line)| {
            parse_marker(line).map(|rule_ids| SuppressionDirective {
                line: i as u32 + 1,
                rule_ids,
            })
        })
        .collect()
}

fn line_suppresses(line: &str, rule_id: &str) -> bool {
    match parse_marker(line) {
        Some(rule_ids) => rule_ids.is_empty() || rule_ids.iter().any(|r| r == rule_id),
        None => false,
    }
}

/// Parse a marker on the line. Returns the suppressed rule ids (empty for
/// suppress-all), or `None` when the line carries no marker.
fn parse_marker(line: &str) -> Option<Vec<String>> {
    let trimmed = line.trim();
    for marker in MARKERS {
        let Some(pos) = trimmed.find(marker) else { continue };
        let before = &trimmed[..pos];
        if !COMMENT_TOKENS.iter().any(|token| before.contains(token)) {
            continue;
        }
        let after = trimmed[pos + marker.len()..]
            .trim()
            .trim_end_matches("*/")
            .trim_end_matches("-->")
            .trim();
        if after.is_empty() {
            return Some(Vec::new());
        }
        return Some(after.split(',').map(|s| s.trim().to_string()).collect());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_marker_suppresses_all_rules() {
        let lines = vec!["// vigil-ignore", "eval(code)"];
        assert!(is_suppressed(&lines, 2, "security/eval"));
        assert!(is_suppressed(&lines, 2, "naming/component-pascal"));
    }

    #[test]
    fn rule_list_narrows_suppression() {
        let lines = vec!["// vigil-ignore security/eval, naming/constant-case", "eval(code)"];
        assert!(is_suppressed(&lines, 2, "security/eval"));
        assert!(!is_suppressed(&lines, 2, "security/raw-html"));
    }

    #[test]
    fn same_line_marker_counts() {
        let lines = vec!["eval(code) // vigil-ignore"];
        assert!(is_suppressed(&lines, 1, "security/eval"));
    }

    #[test]
    fn marker_outside_comment_is_ignored() {
        let lines = vec!["const vigilIgnore = 'vigil-ignore'", "eval(code)"];
        assert!(!is_suppressed(&lines, 2, "security/eval"));
    }

    #[test]
    fn eslint_disable_next_line_recognised() {
        let lines = vec!["// eslint-disable-next-line", "eval(code)"];
        assert!(is_suppressed(&lines, 2, "security/eval"));
    }

    #[test]
    fn block_comment_marker_recognised() {
        let lines = vec!["/* vigil-ignore security/eval */", "eval(code)"];
        assert!(is_suppressed(&lines, 2, "security/eval"));
    }

    #[test]
    fn extraction_lists_all_directives() {
        let lines = vec![
            "// vigil-ignore",
            "code",
            "// vigil-ignore security/eval",
        ];
        let directives = extract_suppressions(&lines);
        assert_eq!(directives.len(), 2);
        assert!(directives[0].rule_ids.is_empty());
        assert_eq!(directives[1].rule_ids, vec!["security/eval"]);
    }
}
