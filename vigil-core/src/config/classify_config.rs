//! Classification configuration: layer directories, skip-lists, exemptions.

use serde::{Deserialize, Serialize};

/// Configuration driving the file classifier. All layer directory names and
/// the hook prefix are remappable so non-React-style trees can adapt them.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClassifyConfig {
    pub component_dirs: Vec<String>,
    pub hook_dirs: Vec<String>,
    pub utility_dirs: Vec<String>,
    pub service_dirs: Vec<String>,
    pub feature_dirs: Vec<String>,
    /// Name prefix identifying hook-like exports. Default: "use".
    pub hook_prefix: Option<String>,
    /// Globs for generated/build/vendored files no check family applies to.
    pub skip: Vec<String>,
    /// Path prefixes exempt from infra-duplication rules (test helpers, the
    /// audit tooling itself).
    pub allowed_duplicate_prefixes: Vec<String>,
}

impl ClassifyConfig {
    pub fn effective_component_dirs(&self) -> Vec<String> {
        Self::or_defaults(&self.component_dirs, &["components"])
    }

    pub fn effective_hook_dirs(&self) -> Vec<String> {
        Self::or_defaults(&self.hook_dirs, &["hooks"])
    }

    pub fn effective_utility_dirs(&self) -> Vec<String> {
        Self::or_defaults(&self.utility_dirs, &["utils", "lib"])
    }

    pub fn effective_service_dirs(&self) -> Vec<String> {
        Self::or_defaults(&self.service_dirs, &["services", "api"])
    }

    pub fn effective_feature_dirs(&self) -> Vec<String> {
        Self::or_defaults(&self.feature_dirs, &["features"])
    }

    pub fn effective_hook_prefix(&self) -> String {
        self.hook_prefix.clone().unwrap_or_else(|| "use".to_string())
    }

    pub fn effective_skip(&self) -> Vec<String> {
        Self::or_defaults(
            &self.skip,
            &[
                "**/node_modules/**",
                "**/dist/**",
                "**/build/**",
                "**/coverage/**",
                "**/vendor/**",
                "**/*.min.js",
                "**/*.generated.*",
                "**/*.d.ts",
            ],
        )
    }

    pub fn effective_allowed_duplicate_prefixes(&self) -> Vec<String> {
        Self::or_defaults(
            &self.allowed_duplicate_prefixes,
            &["tests/helpers", "test/helpers", "tools/audit"],
        )
    }

    fn or_defaults(configured: &[String], defaults: &[&str]) -> Vec<String> {
        if configured.is_empty() {
            defaults.iter().map(|s| s.to_string()).collect()
        } else {
            configured.to_vec()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_react_conventions() {
        let c = ClassifyConfig::default();
        assert_eq!(c.effective_component_dirs(), vec!["components"]);
        assert_eq!(c.effective_hook_prefix(), "use");
        assert!(c.effective_skip().iter().any(|g| g.contains("node_modules")));
    }

    #[test]
    fn configured_dirs_replace_defaults() {
        let c = ClassifyConfig {
            component_dirs: vec!["widgets".into()],
            ..Default::default()
        };
        assert_eq!(c.effective_component_dirs(), vec!["widgets"]);
    }
}
