//! Top-level engine error, aggregating subsystem errors via `From`.

use crate::types::ExitStatus;

use super::{CheckError, ConfigError, ScanError, StorageError};

/// Any fault that escapes the orchestrator. Configuration faults map to the
/// configuration-error exit status; everything else is an engine fault and
/// maps to the unexpected-error status.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Check error: {0}")]
    Check(#[from] CheckError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl EngineError {
    /// Exit status for a fault that aborted the whole invocation.
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            EngineError::Config(_) => ExitStatus::ConfigError,
            _ => ExitStatus::UnexpectedError,
        }
    }
}
