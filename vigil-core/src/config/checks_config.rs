//! Per-family check configuration and numeric thresholds.

use serde::{Deserialize, Serialize};

use crate::types::CheckFamily;

const SOURCE_GLOBS: &[&str] = &["**/*.ts", "**/*.tsx", "**/*.js", "**/*.jsx", "**/*.mjs", "**/*.cjs"];
const PROSE_GLOBS: &[&str] = &["**/*.md", "**/*.mdx", "**/*.txt"];

/// Configuration for one scanner check family.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FamilyConfig {
    /// Enabled unless set to false.
    pub enabled: Option<bool>,
    /// File-pattern globs this family applies to. Empty means the family
    /// default (source extensions, or prose extensions for the prose family).
    pub include: Vec<String>,
    /// Escalate this family's warnings to gate the exit status.
    pub warnings_as_errors: Option<bool>,
}

impl FamilyConfig {
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    pub fn effective_warnings_as_errors(&self) -> bool {
        self.warnings_as_errors.unwrap_or(false)
    }
}

/// Numeric thresholds shared by the complexity family.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Thresholds {
    /// Maximum function length in lines. Default: 50.
    pub max_function_lines: Option<u32>,
    /// Maximum approximate cyclomatic complexity. Default: 10.
    pub max_cyclomatic: Option<u32>,
    /// Maximum parameter count. Default: 5.
    pub max_params: Option<u32>,
    /// Maximum nesting depth in indent levels. Default: 4.
    pub max_nesting: Option<u32>,
    /// Spaces per indent level for nesting detection. Default: 2.
    pub indent_width: Option<u32>,
    /// Maximum file length in lines. Default: 500.
    pub max_file_lines: Option<u32>,
}

impl Thresholds {
    pub fn effective_max_function_lines(&self) -> u32 {
        self.max_function_lines.unwrap_or(50)
    }

    pub fn effective_max_cyclomatic(&self) -> u32 {
        self.max_cyclomatic.unwrap_or(10)
    }

    pub fn effective_max_params(&self) -> u32 {
        self.max_params.unwrap_or(5)
    }

    pub fn effective_max_nesting(&self) -> u32 {
        self.max_nesting.unwrap_or(4)
    }

    pub fn effective_indent_width(&self) -> u32 {
        self.indent_width.unwrap_or(2)
    }

    pub fn effective_max_file_lines(&self) -> u32 {
        self.max_file_lines.unwrap_or(500)
    }
}

/// Configuration for all scanner check families.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChecksConfig {
    pub naming: FamilyConfig,
    pub layering: FamilyConfig,
    pub complexity: FamilyConfig,
    pub security: FamilyConfig,
    pub infra_duplication: FamilyConfig,
    pub accessibility: FamilyConfig,
    pub prose: FamilyConfig,
    pub thresholds: Thresholds,
}

impl ChecksConfig {
    pub fn family(&self, family: CheckFamily) -> &FamilyConfig {
        match family {
            CheckFamily::Naming => &self.naming,
            CheckFamily::Layering => &self.layering,
            CheckFamily::Complexity => &self.complexity,
            CheckFamily::Security => &self.security,
            CheckFamily::InfraDuplication => &self.infra_duplication,
            CheckFamily::Accessibility => &self.accessibility,
            CheckFamily::Prose => &self.prose,
        }
    }

    /// Effective include globs for a family: configured, or the family default.
    pub fn effective_include(&self, family: CheckFamily) -> Vec<String> {
        let configured = &self.family(family).include;
        if !configured.is_empty() {
            return configured.clone();
        }
        let defaults = if family.is_prose() { PROSE_GLOBS } else { SOURCE_GLOBS };
        defaults.iter().map(|s| s.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_default_enabled() {
        let checks = ChecksConfig::default();
        for family in CheckFamily::ALL {
            assert!(checks.family(family).effective_enabled());
        }
    }

    #[test]
    fn prose_gets_prose_globs_by_default() {
        let checks = ChecksConfig::default();
        let globs = checks.effective_include(CheckFamily::Prose);
        assert!(globs.contains(&"**/*.md".to_string()));
        assert!(!globs.contains(&"**/*.ts".to_string()));
    }

    #[test]
    fn configured_globs_win_over_defaults() {
        let mut checks = ChecksConfig::default();
        checks.naming.include = vec!["src/**/*.ts".into()];
        assert_eq!(checks.effective_include(CheckFamily::Naming), vec!["src/**/*.ts"]);
    }
}
