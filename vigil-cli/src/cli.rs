//! Command-line definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vigil", version, about = "Rule-based source-compliance audit engine")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Audit one file-changed event (JSON payload on stdin, or --file).
    Audit(AuditArgs),
    /// List the builtin rule catalog.
    Rules,
    /// Show verdict-cache statistics.
    CacheStats(CacheStatsArgs),
    /// Print the version.
    Version,
}

#[derive(Args)]
pub struct AuditArgs {
    /// Audit this file directly instead of reading an event from stdin.
    #[arg(long)]
    pub file: Option<String>,
    /// Tool name recorded for a --file audit.
    #[arg(long, default_value = "Edit")]
    pub tool: String,
    /// Project root holding vigil.toml. Defaults to the working directory.
    #[arg(long)]
    pub root: Option<PathBuf>,
    /// Cache directory override.
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,
    /// Run without the verdict cache.
    #[arg(long)]
    pub no_cache: bool,
    /// Disable ANSI colour in the report.
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Args)]
pub struct CacheStatsArgs {
    #[arg(long)]
    pub root: Option<PathBuf>,
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,
}
