//! Check execution faults. Always isolated to the failing check's result.

/// Errors raised while executing one check. These never propagate past the
/// orchestrator: each is folded into a failed `CheckResult` so sibling
/// checks keep running.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("Failed to spawn {tool}: {message}")]
    SpawnFailed { tool: String, message: String },

    #[error("Check {check} timed out after {timeout_ms}ms")]
    Timeout { check: String, timeout_ms: u64 },

    #[error("Check {check} panicked: {message}")]
    Panicked { check: String, message: String },
}
