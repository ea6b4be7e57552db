//! External-tool check configuration.

use serde::{Deserialize, Serialize};

/// One external-tool-based check: a pre-existing type-checker, linter, or
/// formatter that Vigil shells out to. The audited file path is appended to
/// `args` when invoking the tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub name: String,
    pub command: String,
    pub args: Vec<String>,
    /// File-pattern globs this tool applies to. Empty means all files.
    pub include: Vec<String>,
    /// Subprocess timeout in seconds. Default: 60.
    pub timeout_secs: Option<u64>,
    /// A failure of this tool gates the exit status. Default: true.
    pub blocking: Option<bool>,
    /// Trailing output lines kept in the check result. Default: 20.
    pub tail_lines: Option<usize>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            command: String::new(),
            args: Vec::new(),
            include: Vec::new(),
            timeout_secs: None,
            blocking: None,
            tail_lines: None,
        }
    }
}

impl ToolConfig {
    pub fn effective_timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(60)
    }

    pub fn effective_blocking(&self) -> bool {
        self.blocking.unwrap_or(true)
    }

    pub fn effective_tail_lines(&self) -> usize {
        self.tail_lines.unwrap_or(20)
    }
}
