//! The builtin rule catalog.
//!
//! Adding a rule means adding an entry here (and bumping
//! [`super::RULESET_VERSION`]); no other component needs to change.

use vigil_core::types::{RuleCategory, Severity};

/// Declarative source for one rule. Compiled into a [`super::Rule`] when the
/// registry is built.
pub(crate) struct RuleSpec {
    pub id: &'static str,
    pub category: RuleCategory,
    pub severity: Severity,
    /// (pattern, context window in lines)
    pub patterns: &'static [(&'static str, usize)],
    pub message: &'static str,
    pub suggestion: Option<&'static str>,
    pub shared_module: Option<&'static str>,
}

/// Export-signature shape shared by the naming rules. Case checks live in
/// the naming refinement, not the pattern.
const EXPORT_SIGN: &str =
    r"(?m)^\s*export\s+(?:default\s+)?(?:const|function|class)\s+([A-Za-z_][A-Za-z0-9_]*)";

/// Function-signature shapes shared by the complexity rules. The span finder
/// starts brace tracking from these lines.
const FUNCTION_SIGNS: &[(&str, usize)] = &[
    (
        r"(?m)^\s*(?:export\s+)?(?:default\s+)?(?:async\s+)?function\s*\*?\s*([A-Za-z_$][\w$]*)?\s*\(",
        0,
    ),
    (
        r"(?m)^\s*(?:export\s+)?const\s+([A-Za-z_$][\w$]*)\s*=\s*(?:async\s+)?(?:\([^)]*\)|[A-Za-z_$][\w$]*)\s*=>",
        0,
    ),
];

pub(crate) const BUILTIN_RULES: &[RuleSpec] = &[
    // ── naming ──────────────────────────────────────────────────────────
    RuleSpec {
        id: "naming/component-pascal",
        category: RuleCategory::Naming,
        severity: Severity::Warning,
        patterns: &[(EXPORT_SIGN, 1)],
        message: "component export `{name}` should be PascalCase",
        suggestion: None,
        shared_module: None,
    },
    RuleSpec {
        id: "naming/hook-name",
        category: RuleCategory::Naming,
        severity: Severity::Warning,
        patterns: &[(EXPORT_SIGN, 1)],
        message: "hook export `{name}` should be camelCase and begin with the hook prefix",
        suggestion: None,
        shared_module: None,
    },
    RuleSpec {
        id: "naming/constant-case",
        category: RuleCategory::Naming,
        severity: Severity::Warning,
        patterns: &[(
            r#"(?m)^(?:export\s+)?const\s+([a-z][A-Za-z0-9_]*)\s*=\s*(?:-?\d|['"`{])"#,
            1,
        )],
        message: "module-level constant `{name}` should be UPPER_SNAKE_CASE",
        suggestion: None,
        shared_module: None,
    },
    RuleSpec {
        id: "naming/type-pascal",
        category: RuleCategory::Naming,
        severity: Severity::Warning,
        patterns: &[(
            r"(?m)^\s*(?:export\s+)?(?:interface|type|enum)\s+([A-Za-z_][A-Za-z0-9_]*)\b",
            1,
        )],
        message: "type `{name}` should be PascalCase",
        suggestion: None,
        shared_module: None,
    },
    RuleSpec {
        id: "naming/unclear-identifier",
        category: RuleCategory::Naming,
        severity: Severity::Info,
        patterns: &[
            (r"\b(?:let|const|var)\s+(?:temp|data|result)\d*\s*=", 1),
            (r"\b(?:let|const|var)\s+x\d*\s*=", 1),
        ],
        message: "identifier gives no hint of its meaning",
        suggestion: Some("pick a name that describes the value"),
        shared_module: None,
    },
    // ── layering ────────────────────────────────────────────────────────
    RuleSpec {
        id: "layering/import-boundary",
        category: RuleCategory::Layering,
        severity: Severity::Error,
        patterns: &[
            (
                r#"(?m)^\s*import\s+(?:type\s+)?(?:[\w*\s{},$]+\s+from\s+)?['"]([^'"]+)['"]"#,
                1,
            ),
            (r#"require\s*\(\s*['"]([^'"]+)['"]\s*\)"#, 1),
        ],
        message: "import crosses a layer boundary",
        suggestion: None,
        shared_module: None,
    },
    // ── complexity (whole-file analyses) ────────────────────────────────
    RuleSpec {
        id: "complexity/function-length",
        category: RuleCategory::Complexity,
        severity: Severity::Warning,
        patterns: FUNCTION_SIGNS,
        message: "function is too long",
        suggestion: Some("split the function into smaller pieces"),
        shared_module: None,
    },
    RuleSpec {
        id: "complexity/cyclomatic",
        category: RuleCategory::Complexity,
        severity: Severity::Warning,
        patterns: FUNCTION_SIGNS,
        message: "function branches too much",
        suggestion: Some("extract branches into helper functions"),
        shared_module: None,
    },
    RuleSpec {
        id: "complexity/parameter-count",
        category: RuleCategory::Complexity,
        severity: Severity::Warning,
        patterns: FUNCTION_SIGNS,
        message: "function takes too many parameters",
        suggestion: Some("group related parameters into an options object"),
        shared_module: None,
    },
    RuleSpec {
        id: "complexity/file-length",
        category: RuleCategory::Complexity,
        severity: Severity::Warning,
        patterns: &[],
        message: "file is too long",
        suggestion: Some("split the file by responsibility"),
        shared_module: None,
    },
    RuleSpec {
        id: "nesting/max-depth",
        category: RuleCategory::Nesting,
        severity: Severity::Warning,
        patterns: &[],
        message: "nesting is too deep",
        suggestion: Some("flatten with early returns or extracted helpers"),
        shared_module: None,
    },
    // ── security ────────────────────────────────────────────────────────
    RuleSpec {
        id: "security/eval",
        category: RuleCategory::Security,
        severity: Severity::Error,
        patterns: &[(r"\beval\s*\(", 1), (r"\bnew\s+Function\s*\(", 1)],
        message: "dynamic code evaluation is forbidden",
        suggestion: None,
        shared_module: None,
    },
    RuleSpec {
        id: "security/raw-html",
        category: RuleCategory::Security,
        severity: Severity::Error,
        patterns: &[
            (r"\.innerHTML\s*=", 1),
            (r"dangerouslySetInnerHTML", 1),
        ],
        message: "raw HTML injection risks XSS",
        suggestion: Some("sanitize the markup or use a safe rendering API"),
        shared_module: None,
    },
    RuleSpec {
        id: "security/hardcoded-secret",
        category: RuleCategory::Security,
        severity: Severity::Error,
        patterns: &[
            (r"sk-ant-[A-Za-z0-9-]{8,}", 0),
            (r"\bsk-[A-Za-z0-9]{32,}\b", 0),
            (
                r#"(?i)\b(?:secret|password|token|api_?key)\b\s*[:=]\s*['"][^'"]{12,}['"]"#,
                0,
            ),
        ],
        message: "possible hardcoded credential",
        suggestion: Some("load credentials from the environment or a secret manager"),
        shared_module: None,
    },
    RuleSpec {
        id: "security/debug-leftover",
        category: RuleCategory::Security,
        severity: Severity::Warning,
        patterns: &[
            (r"console\.(?:log|debug|trace)\s*\(", 1),
            (r"\bdebugger\b", 1),
        ],
        message: "leftover debug output can leak internals",
        suggestion: Some("remove the debug statement or use the project logger"),
        shared_module: None,
    },
    // ── infra-duplication ───────────────────────────────────────────────
    RuleSpec {
        id: "infra-duplication/debounce",
        category: RuleCategory::InfraDuplication,
        severity: Severity::Warning,
        patterns: &[(r"(?m)\b(?:function\s+debounce\b|const\s+debounce\s*=)", 1)],
        message: "reimplements the shared debounce helper",
        suggestion: Some("use debounce from shared/timing"),
        shared_module: Some("shared/timing"),
    },
    RuleSpec {
        id: "infra-duplication/throttle",
        category: RuleCategory::InfraDuplication,
        severity: Severity::Warning,
        patterns: &[(r"(?m)\b(?:function\s+throttle\b|const\s+throttle\s*=)", 1)],
        message: "reimplements the shared throttle helper",
        suggestion: Some("use throttle from shared/timing"),
        shared_module: Some("shared/timing"),
    },
    RuleSpec {
        id: "infra-duplication/retry",
        category: RuleCategory::InfraDuplication,
        severity: Severity::Warning,
        patterns: &[(
            r"(?m)\b(?:function\s+retry[A-Za-z]*\b|const\s+retry[A-Za-z]*\s*=)",
            1,
        )],
        message: "reimplements the shared retry helper",
        suggestion: Some("use withRetry from shared/retry"),
        shared_module: Some("shared/retry"),
    },
    RuleSpec {
        id: "infra-duplication/memoize",
        category: RuleCategory::InfraDuplication,
        severity: Severity::Warning,
        patterns: &[(r"(?m)\b(?:function\s+memoize\b|const\s+memoize\s*=)", 1)],
        message: "reimplements the shared memoization helper",
        suggestion: Some("use memoize from shared/cache"),
        shared_module: Some("shared/cache"),
    },
    RuleSpec {
        id: "infra-duplication/date-format",
        category: RuleCategory::InfraDuplication,
        severity: Severity::Warning,
        patterns: &[(
            r"(?m)\b(?:function\s+formatDate\b|const\s+formatDate\s*=)",
            1,
        )],
        message: "reimplements the shared date formatter",
        suggestion: Some("use formatDate from shared/format"),
        shared_module: Some("shared/format"),
    },
    RuleSpec {
        id: "infra-duplication/error-subclass",
        category: RuleCategory::InfraDuplication,
        severity: Severity::Warning,
        patterns: &[(r"class\s+[A-Za-z]\w*Error\s+extends\s+Error\b", 1)],
        message: "defines a custom error subclass",
        suggestion: Some("extend AppError from shared/errors"),
        shared_module: Some("shared/errors"),
    },
    // ── accessibility ───────────────────────────────────────────────────
    RuleSpec {
        id: "accessibility/img-alt",
        category: RuleCategory::Accessibility,
        severity: Severity::Warning,
        patterns: &[(r"<img\b[^>]*>", 1)],
        message: "images must provide alt text",
        suggestion: Some("add an alt attribute (empty for decorative images)"),
        shared_module: None,
    },
    RuleSpec {
        id: "accessibility/click-handler",
        category: RuleCategory::Accessibility,
        severity: Severity::Warning,
        patterns: &[(r"<(?:div|span)\b[^>]*\bonClick\b", 1)],
        message: "clickable non-interactive element is not keyboard accessible",
        suggestion: Some("add a keyboard handler and a role, or use a button"),
        shared_module: None,
    },
    // ── prose ───────────────────────────────────────────────────────────
    RuleSpec {
        id: "prose/todo-marker",
        category: RuleCategory::Prose,
        severity: Severity::Info,
        patterns: &[(r"\b(?:TODO|FIXME|TBD)\b", 0)],
        message: "unresolved placeholder in documentation",
        suggestion: None,
        shared_module: None,
    },
    RuleSpec {
        id: "prose/empty-link",
        category: RuleCategory::Prose,
        severity: Severity::Warning,
        patterns: &[(r"\[[^\]]+\]\(\s*\)", 0)],
        message: "link has no target",
        suggestion: None,
        shared_module: None,
    },
];
