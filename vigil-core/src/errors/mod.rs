//! Error handling for Vigil.
//! One enum per subsystem, `thiserror` throughout, no `anyhow`.
//!
//! Violations are never errors: they are first-class detection outcomes
//! carried in check results. Only configuration faults and engine faults may
//! short-circuit an invocation; check execution faults are folded into the
//! failing check's result.

pub mod check_error;
pub mod config_error;
pub mod engine_error;
pub mod scan_error;
pub mod storage_error;

pub use check_error::CheckError;
pub use config_error::ConfigError;
pub use engine_error::EngineError;
pub use scan_error::ScanError;
pub use storage_error::StorageError;
