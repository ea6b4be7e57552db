//! Vigil CLI binary entry point.
//!
//! The numeric exit code is the only contract consumed by automation:
//! 0 success, 1 check failure, 2 configuration error, 3 unexpected error.
//! Every run prints a human-readable report regardless of outcome.

mod cli;
mod event;

use std::path::PathBuf;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use vigil_core::config::{CliOverrides, VigilConfig};
use vigil_core::types::ExitStatus;
use vigil_engine::report::console::ConsoleRenderer;
use vigil_engine::Orchestrator;
use vigil_storage::CacheStore;

use crate::cli::{AuditArgs, CacheStatsArgs, Cli, Commands};

fn main() {
    let code = run();
    std::process::exit(code);
}

fn run() -> i32 {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            ExitStatus::Success.code()
        }
        Commands::Rules => rules(),
        Commands::CacheStats(args) => cache_stats(&args),
        Commands::Audit(args) => audit(&args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("VIGIL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn audit(args: &AuditArgs) -> i32 {
    let root = args.root.clone().unwrap_or_else(|| PathBuf::from("."));
    let overrides = CliOverrides {
        cache_dir: args.cache_dir.clone(),
        no_cache: args.no_cache,
        no_color: args.no_color,
    };

    let config = match VigilConfig::load(&root, Some(&overrides)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitStatus::ConfigError.code();
        }
    };

    let event = if let Some(file) = &args.file {
        vigil_core::types::AuditEvent {
            tool_name: args.tool.clone(),
            file_path: file.clone(),
        }
    } else {
        match event::read_event(std::io::stdin()) {
            Ok(event) => event,
            Err(e) => {
                eprintln!("error: {e}");
                return ExitStatus::ConfigError.code();
            }
        }
    };

    let use_color = config.report.effective_color();
    let max_shown = config.report.effective_max_shown();
    let cache = open_cache(&config, &root);

    let orchestrator = match Orchestrator::new(config, cache) {
        Ok(orchestrator) => orchestrator,
        Err(e) => {
            eprintln!("error: {e}");
            return e.exit_status().code();
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("error: failed to start runtime: {e}");
            return ExitStatus::UnexpectedError.code();
        }
    };

    match runtime.block_on(orchestrator.run(&event)) {
        Ok(report) => {
            print!("{}", ConsoleRenderer::new(use_color, max_shown).render(&report));
            orchestrator.sweep_cache();
            report.exit.code()
        }
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_status().code()
        }
    }
}

fn rules() -> i32 {
    let registry = match vigil_engine::RuleRegistry::builtin() {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitStatus::UnexpectedError.code();
        }
    };
    println!(
        "{} rules (ruleset version {})\n",
        registry.len(),
        vigil_engine::RULESET_VERSION
    );
    println!("{:<36} {:<18} {}", "RULE", "CATEGORY", "SEVERITY");
    for rule in registry.iter() {
        println!("{:<36} {:<18} {}", rule.id, rule.category, rule.severity);
    }
    ExitStatus::Success.code()
}

fn cache_stats(args: &CacheStatsArgs) -> i32 {
    let root = args.root.clone().unwrap_or_else(|| PathBuf::from("."));
    let overrides = CliOverrides {
        cache_dir: args.cache_dir.clone(),
        no_cache: false,
        no_color: false,
    };
    let config = match VigilConfig::load(&root, Some(&overrides)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitStatus::ConfigError.code();
        }
    };

    let store = open_cache(&config, &root);
    match store.stats() {
        Ok(stats) => {
            println!("entries: {}", stats.entries);
            if let Some(path) = stats.path {
                println!("database: {path}");
            }
            if let Some(oldest) = stats.oldest_created_at {
                println!("oldest entry (unix): {oldest}");
            }
            ExitStatus::Success.code()
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitStatus::UnexpectedError.code()
        }
    }
}

/// Open the verdict cache, degrading to a disabled store on any failure:
/// the cache is an optimisation, never a reason to fail the audit.
fn open_cache(config: &VigilConfig, root: &std::path::Path) -> CacheStore {
    if !config.cache.effective_enabled() {
        return CacheStore::disabled();
    }
    let dir = config.cache.effective_dir(root);
    match CacheStore::open(&dir) {
        Ok(store) => store,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "cannot open verdict cache; running without");
            CacheStore::disabled()
        }
    }
}
