//! External-tool check execution.
//!
//! Shells out to a pre-existing type-checker, linter, or formatter, captures
//! its output streams, and folds the outcome into a `CheckResult`. A
//! non-zero exit from the tool is a failed check, not an engine crash; a
//! spawn failure or timeout is an errored check. The child is spawned with
//! `kill_on_drop` so a fired timeout cancels it rather than leaking it.

use std::time::{Duration, Instant};

use tokio::process::Command;
use tracing::debug;
use vigil_core::config::ToolConfig;
use vigil_core::types::CheckResult;

/// Run one external tool against the audited file.
pub async fn run(tool: &ToolConfig, file_path: &str, blocking: bool) -> CheckResult {
    let start = Instant::now();
    let timeout = Duration::from_secs(tool.effective_timeout_secs());

    let result = tokio::time::timeout(
        timeout,
        Command::new(&tool.command)
            .args(&tool.args)
            .arg(file_path)
            .kill_on_drop(true)
            .output(),
    )
    .await;

    let duration_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(Ok(output)) => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);
            let combined = format!("{stdout}\n{stderr}");
            let excerpt = tail(&combined, tool.effective_tail_lines());
            debug!(tool = %tool.name, status = ?output.status.code(), duration_ms, "tool finished");

            let mut result = CheckResult {
                name: tool.name.clone(),
                passed: output.status.success(),
                blocking,
                violations: Vec::new(),
                duration_ms,
                output_excerpt: None,
                from_cache: false,
                error: None,
            };
            if !excerpt.is_empty() {
                result.output_excerpt = Some(excerpt);
            }
            result
        }
        Ok(Err(e)) => {
            let mut result = CheckResult::errored(
                &tool.name,
                blocking,
                format!("failed to spawn `{}`: {e}", tool.command),
            );
            result.duration_ms = duration_ms;
            result
        }
        Err(_) => {
            let mut result = CheckResult::errored(
                &tool.name,
                blocking,
                format!("timed out after {}s", tool.effective_timeout_secs()),
            );
            result.duration_ms = duration_ms;
            result
        }
    }
}

/// Keep the trailing `n` lines of tool output.
fn tail(text: &str, n: usize) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let lines: Vec<&str> = trimmed.lines().collect();
    let start = lines.len().saturating_sub(n);
    lines[start..].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_keeps_trailing_lines() {
        let text = "one\ntwo\nthree\nfour";
        assert_eq!(tail(text, 2), "three\nfour");
        assert_eq!(tail(text, 10), text);
        assert_eq!(tail("", 3), "");
    }

    #[tokio::test]
    async fn missing_binary_is_an_errored_check() {
        let tool = ToolConfig {
            name: "ghost".to_string(),
            command: "vigil-no-such-binary".to_string(),
            ..Default::default()
        };
        let result = run(&tool, "a.ts", true).await;
        assert!(!result.passed);
        assert!(result.error.is_some());
    }

    #[tokio::test]
    async fn failing_tool_is_a_failed_verdict_not_a_fault() {
        let tool = ToolConfig {
            name: "fail".to_string(),
            command: "false".to_string(),
            ..Default::default()
        };
        let result = run(&tool, "a.ts", true).await;
        assert!(!result.passed);
        assert!(result.error.is_none());
    }

    #[tokio::test]
    async fn passing_tool_succeeds() {
        let tool = ToolConfig {
            name: "ok".to_string(),
            command: "true".to_string(),
            ..Default::default()
        };
        let result = run(&tool, "a.ts", true).await;
        assert!(result.passed);
    }
}
