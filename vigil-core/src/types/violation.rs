//! One detected rule firing against a specific file and line.

use serde::{Deserialize, Serialize};

use super::category::RuleCategory;
use super::severity::Severity;

/// A concrete violation. The severity is copied from the rule at match time
/// and never re-derived afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub rule_id: String,
    pub file: String,
    /// 1-based line number of the match.
    pub line: u32,
    pub severity: Severity,
    pub category: RuleCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Matched line ± the rule's context window, clamped to file bounds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
}

impl Violation {
    /// `file:line: severity: message` — the terse location form used in logs.
    pub fn location(&self) -> String {
        format!("{}:{}: {}: {}", self.file, self.line, self.severity, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_format() {
        let v = Violation {
            rule_id: "naming/component-pascal".into(),
            file: "src/components/myWidget.tsx".into(),
            line: 3,
            severity: Severity::Warning,
            category: RuleCategory::Naming,
            message: "component export `myWidget` should be PascalCase".into(),
            suggestion: Some("MyWidget".into()),
            excerpt: None,
        };
        assert_eq!(
            v.location(),
            "src/components/myWidget.tsx:3: warning: component export `myWidget` should be PascalCase"
        );
    }

    #[test]
    fn optional_fields_omitted_from_json() {
        let v = Violation {
            rule_id: "security/eval".into(),
            file: "a.ts".into(),
            line: 1,
            severity: Severity::Error,
            category: RuleCategory::Security,
            message: "avoid eval".into(),
            suggestion: None,
            excerpt: None,
        };
        let json = serde_json::to_string(&v).unwrap();
        assert!(!json.contains("suggestion"));
        assert!(!json.contains("excerpt"));
    }
}
