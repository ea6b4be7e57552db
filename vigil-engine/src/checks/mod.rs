//! Check definitions — the named units of work the orchestrator schedules.
//!
//! A check is either scanner-based (one per enabled rule family, pure and
//! in-process) or external-tool-based (a configured subprocess). Both
//! produce the same `CheckResult` shape.

pub mod scan_check;
pub mod tool;

use globset::{Glob, GlobSet, GlobSetBuilder};
use vigil_core::config::{ToolConfig, VigilConfig};
use vigil_core::errors::ConfigError;
use vigil_core::types::{CheckFamily, FileClassification};

#[derive(Clone)]
pub enum CheckKind {
    Scan(CheckFamily),
    Tool(ToolConfig),
}

/// One schedulable check, with its cache TTL and gating flag resolved from
/// configuration.
#[derive(Clone)]
pub struct Check {
    pub name: String,
    pub kind: CheckKind,
    pub blocking: bool,
    pub ttl_secs: u64,
    /// Tool checks only: the file patterns the tool applies to.
    include: Option<GlobSet>,
}

impl Check {
    /// Build the full check set from configuration. Loaded once per process.
    pub fn plan(config: &VigilConfig) -> Result<Vec<Check>, ConfigError> {
        let mut checks = Vec::new();

        for family in CheckFamily::ALL {
            if !config.checks.family(family).effective_enabled() {
                continue;
            }
            checks.push(Check {
                name: family.check_name().to_string(),
                kind: CheckKind::Scan(family),
                blocking: true,
                ttl_secs: config.cache.effective_scan_ttl_secs(),
                include: None,
            });
        }

        for tool in &config.tools {
            let include = if tool.include.is_empty() {
                None
            } else {
                Some(build_globset(&tool.include, &tool.name)?)
            };
            checks.push(Check {
                name: tool.name.clone(),
                kind: CheckKind::Tool(tool.clone()),
                blocking: tool.effective_blocking(),
                ttl_secs: config.cache.effective_tool_ttl_secs(),
                include,
            });
        }

        Ok(checks)
    }

    /// Whether this check applies to the classified file. Ineligible checks
    /// are skipped entirely: not run, not reported.
    pub fn applies_to(&self, classification: &FileClassification, skipped: bool) -> bool {
        match &self.kind {
            CheckKind::Scan(family) => classification.is_eligible(*family),
            CheckKind::Tool(_) => {
                !skipped
                    && self
                        .include
                        .as_ref()
                        .map(|globs| globs.is_match(&classification.path))
                        .unwrap_or(true)
            }
        }
    }
}

fn build_globset(globs: &[String], tool: &str) -> Result<GlobSet, ConfigError> {
    let mut builder = GlobSetBuilder::new();
    for glob in globs {
        let compiled = Glob::new(glob).map_err(|e| ConfigError::ValidationFailed {
            field: format!("tools.{tool}.include"),
            message: format!("invalid glob `{glob}`: {e}"),
        })?;
        builder.add(compiled);
    }
    builder.build().map_err(|e| ConfigError::ValidationFailed {
        field: format!("tools.{tool}.include"),
        message: e.to_string(),
    })
}
