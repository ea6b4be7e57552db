//! Configuration system for Vigil.
//! TOML-based, layered resolution: CLI > env > project > defaults.

pub mod cache_config;
pub mod checks_config;
pub mod classify_config;
pub mod report_config;
pub mod tool_config;
pub mod vigil_config;

pub use cache_config::CacheConfig;
pub use checks_config::{ChecksConfig, FamilyConfig, Thresholds};
pub use classify_config::ClassifyConfig;
pub use report_config::ReportConfig;
pub use tool_config::ToolConfig;
pub use vigil_config::{CliOverrides, VigilConfig};
