//! Scanner faults.

/// Errors raised while building the rule registry or scanning content.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Invalid pattern in rule {rule_id}: {message}")]
    InvalidPattern { rule_id: String, message: String },

    #[error("Invalid glob {glob}: {message}")]
    InvalidGlob { glob: String, message: String },
}
