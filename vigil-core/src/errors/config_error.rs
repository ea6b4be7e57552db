//! Configuration faults. These abort the invocation before any check runs.

/// Errors raised while loading or validating configuration, or while
/// ingesting the event payload.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("Invalid TOML in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Invalid value for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Malformed event payload: {0}")]
    InvalidEvent(String),

    #[error("Cannot read audited file {path}: {message}")]
    UnreadableFile { path: String, message: String },
}
