//! Rule and matcher types. Rules are pure data: no rule depends on another
//! rule's result, and a rule never carries code paths of its own.

use regex::Regex;
use vigil_core::types::{RuleCategory, Severity};

/// One pattern plus the context-window size (in lines) attached to excerpts.
#[derive(Debug, Clone)]
pub struct Matcher {
    pub pattern: Regex,
    pub context_window: usize,
}

/// A named, immutable rule definition.
#[derive(Debug, Clone)]
pub struct Rule {
    pub id: String,
    pub category: RuleCategory,
    pub severity: Severity,
    /// Evaluated independently against the full file text. A rule with no
    /// matchers is a whole-file analysis (complexity, nesting, file length).
    pub matchers: Vec<Matcher>,
    pub message: String,
    pub suggestion: Option<String>,
    /// Infra-duplication only: the shared module whose import suppresses
    /// this rule for the whole file.
    pub shared_module: Option<String>,
}
