//! Top-level Vigil configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{CacheConfig, ChecksConfig, ClassifyConfig, ReportConfig, ToolConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`VIGIL_*`)
/// 3. Project config (`vigil.toml` in the project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VigilConfig {
    /// Editing tools whose events are audited. Empty means audit every event.
    pub audited_tools: Vec<String>,
    pub checks: ChecksConfig,
    pub classify: ClassifyConfig,
    pub cache: CacheConfig,
    pub report: ReportConfig,
    pub tools: Vec<ToolConfig>,
}

/// CLI arguments that override loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub cache_dir: Option<PathBuf>,
    pub no_cache: bool,
    pub no_color: bool,
}

impl VigilConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join("vigil.toml");
        if project_config_path.exists() {
            let text = std::fs::read_to_string(&project_config_path).map_err(|e| {
                ConfigError::ReadError {
                    path: project_config_path.display().to_string(),
                    message: e.to_string(),
                }
            })?;
            config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
                path: project_config_path.display().to_string(),
                message: e.to_string(),
            })?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Editing tools whose events are audited, defaulting to the file-editing
    /// tools of the surrounding pipeline.
    pub fn effective_audited_tools(&self) -> Vec<String> {
        if self.audited_tools.is_empty() {
            ["Edit", "Write", "MultiEdit", "NotebookEdit"]
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            self.audited_tools.clone()
        }
    }

    fn apply_env_overrides(config: &mut VigilConfig) {
        if let Ok(dir) = std::env::var("VIGIL_CACHE_DIR") {
            if !dir.is_empty() {
                config.cache.dir = Some(PathBuf::from(dir));
            }
        }
        if let Ok(v) = std::env::var("VIGIL_NO_CACHE") {
            if v == "1" || v.eq_ignore_ascii_case("true") {
                config.cache.enabled = Some(false);
            }
        }
        if let Ok(v) = std::env::var("VIGIL_NO_COLOR") {
            if v == "1" || v.eq_ignore_ascii_case("true") {
                config.report.color = Some(false);
            }
        }
    }

    fn apply_cli_overrides(config: &mut VigilConfig, cli: &CliOverrides) {
        if let Some(dir) = &cli.cache_dir {
            config.cache.dir = Some(dir.clone());
        }
        if cli.no_cache {
            config.cache.enabled = Some(false);
        }
        if cli.no_color {
            config.report.color = Some(false);
        }
    }

    /// Validate the resolved configuration.
    pub fn validate(config: &VigilConfig) -> Result<(), ConfigError> {
        if let Some(width) = config.checks.thresholds.indent_width {
            if width == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "checks.thresholds.indent_width".to_string(),
                    message: "must be at least 1".to_string(),
                });
            }
        }
        if let Some(shown) = config.report.max_shown_per_severity {
            if shown == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "report.max_shown_per_severity".to_string(),
                    message: "must be at least 1".to_string(),
                });
            }
        }
        let mut seen = std::collections::BTreeSet::new();
        for tool in &config.tools {
            if tool.name.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "tools.name".to_string(),
                    message: "tool name must not be empty".to_string(),
                });
            }
            if tool.command.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("tools.{}.command", tool.name),
                    message: "tool command must not be empty".to_string(),
                });
            }
            if let Some(0) = tool.timeout_secs {
                return Err(ConfigError::ValidationFailed {
                    field: format!("tools.{}.timeout_secs", tool.name),
                    message: "timeout must be at least 1 second".to_string(),
                });
            }
            if !seen.insert(tool.name.clone()) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("tools.{}", tool.name),
                    message: "duplicate tool name".to_string(),
                });
            }
        }
        Ok(())
    }
}
