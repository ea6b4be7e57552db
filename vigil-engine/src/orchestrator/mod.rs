//! Check orchestrator — one file-changed event in, one audit report out.
//!
//! Eligibility is decided by classification, cached verdicts are reused,
//! and the remaining checks run concurrently as independent tasks. Shared
//! inputs (file content, classification) are computed once and passed as
//! immutable values; no check observes another's partial state. The final
//! report ordering is deterministic regardless of completion order.

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tokio::task::JoinSet;
use tracing::{debug, warn};

use vigil_core::config::VigilConfig;
use vigil_core::errors::{ConfigError, EngineError};
use vigil_core::types::{AuditEvent, AuditReport, CheckResult};
use vigil_storage::{CacheEntry, CacheKey, CacheStore};

use crate::checks::{scan_check, tool, Check, CheckKind};
use crate::classify::FileClassifier;
use crate::registry::{RuleRegistry, RULESET_VERSION};
use crate::report;
use crate::scanner::ScanContext;

/// Upper bound for an in-process scan check. Scanner work is pure CPU over
/// one file and normally finishes in microseconds.
const SCAN_CHECK_TIMEOUT: Duration = Duration::from_secs(10);

pub struct Orchestrator {
    config: Arc<VigilConfig>,
    registry: Arc<RuleRegistry>,
    classifier: FileClassifier,
    checks: Vec<Check>,
    cache: Arc<CacheStore>,
}

impl Orchestrator {
    pub fn new(config: VigilConfig, cache: CacheStore) -> Result<Self, EngineError> {
        let registry = RuleRegistry::builtin()?;
        let classifier = FileClassifier::new(&config)?;
        let checks = Check::plan(&config)?;
        Ok(Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
            classifier,
            checks,
            cache: Arc::new(cache),
        })
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Run the audit for one event.
    ///
    /// Configuration faults (malformed event, unreadable file) abort before
    /// any check runs; check execution faults are folded into the failing
    /// check's result and never abort siblings.
    pub async fn run(&self, event: &AuditEvent) -> Result<AuditReport, EngineError> {
        if event.file_path.is_empty() {
            return Err(ConfigError::InvalidEvent("file_path is empty".to_string()).into());
        }
        if !self.is_audited_tool(&event.tool_name) {
            debug!(tool = %event.tool_name, "event tool not audited; passing through");
            return Ok(AuditReport::empty(&event.file_path));
        }

        let content = std::fs::read_to_string(&event.file_path).map_err(|e| {
            ConfigError::UnreadableFile {
                path: event.file_path.clone(),
                message: e.to_string(),
            }
        })?;

        let classification = self.classifier.classify(&event.file_path);
        let skipped = self.classifier.is_skipped(&event.file_path);
        let content_hash = vigil_storage::fingerprint(content.as_bytes());
        let now = unix_now();

        let ctx = Arc::new(ScanContext::new(
            event.file_path.clone(),
            content,
            classification,
            self.config.checks.thresholds.clone(),
            self.classifier.layer_dirs().clone(),
        ));

        let mut results: Vec<CheckResult> = Vec::new();
        let mut join_set: JoinSet<(usize, CheckResult)> = JoinSet::new();

        for (idx, check) in self.checks.iter().enumerate() {
            if !check.applies_to(&ctx.classification, skipped) {
                continue;
            }

            let key = CacheKey {
                path: event.file_path.clone(),
                content_hash,
                check_name: check.name.clone(),
                ruleset_version: RULESET_VERSION,
            };
            if let Some(entry) = self.cache.get(&key, now) {
                debug!(check = %check.name, "cache hit");
                results.push(self.result_from_cache(check, entry));
                continue;
            }

            let check = check.clone();
            let ctx = Arc::clone(&ctx);
            let registry = Arc::clone(&self.registry);
            let warnings_as_errors = self.warnings_as_errors(&check);
            join_set.spawn(async move {
                let name = check.name.clone();
                let blocking = check.blocking;
                // Executed on its own task so a panic is contained to this
                // check's result.
                let inner = tokio::spawn(execute_check(check, ctx, registry, warnings_as_errors));
                let result = match inner.await {
                    Ok(result) => result,
                    Err(e) => CheckResult::errored(&name, blocking, format!("check panicked: {e}")),
                };
                (idx, result)
            });
        }

        while let Some(joined) = join_set.join_next().await {
            let (idx, result) = joined.map_err(|e| EngineError::Internal(e.to_string()))?;
            // Transient faults (spawn failure, timeout, panic) are not
            // verdicts and never enter the cache.
            if result.error.is_none() {
                let check = &self.checks[idx];
                let key = CacheKey {
                    path: event.file_path.clone(),
                    content_hash,
                    check_name: check.name.clone(),
                    ruleset_version: RULESET_VERSION,
                };
                self.cache.put(
                    &key,
                    &CacheEntry {
                        passed: result.passed,
                        violations: result.violations.clone(),
                        output_excerpt: result.output_excerpt.clone(),
                        created_at: now,
                        ttl_secs: check.ttl_secs,
                    },
                );
            }
            results.push(result);
        }

        Ok(report::aggregate(&event.file_path, results))
    }

    /// Sweep cache entries older than the configured retention horizon.
    pub fn sweep_cache(&self) {
        let horizon = self.config.cache.effective_retention_days() as i64 * 24 * 60 * 60;
        match self.cache.sweep(unix_now(), horizon) {
            Ok(0) => {}
            Ok(deleted) => debug!(deleted, "cache retention sweep"),
            Err(e) => warn!(error = %e, "cache retention sweep failed"),
        }
    }

    fn is_audited_tool(&self, tool_name: &str) -> bool {
        self.config
            .effective_audited_tools()
            .iter()
            .any(|t| t == "*" || t == tool_name)
    }

    fn warnings_as_errors(&self, check: &Check) -> bool {
        match &check.kind {
            CheckKind::Scan(family) => self
                .config
                .checks
                .family(*family)
                .effective_warnings_as_errors(),
            CheckKind::Tool(_) => false,
        }
    }

    /// Rehydrate a cached verdict. Scan verdicts are re-derived from the
    /// cached violations so a config-level escalation change takes effect
    /// without invalidating the cache.
    fn result_from_cache(&self, check: &Check, entry: CacheEntry) -> CheckResult {
        let passed = match &check.kind {
            CheckKind::Scan(_) => {
                scan_check::verdict(&entry.violations, self.warnings_as_errors(check))
            }
            CheckKind::Tool(_) => entry.passed,
        };
        CheckResult {
            name: check.name.clone(),
            passed,
            blocking: check.blocking,
            violations: entry.violations,
            duration_ms: 0,
            output_excerpt: entry.output_excerpt,
            from_cache: true,
            error: None,
        }
    }
}

async fn execute_check(
    check: Check,
    ctx: Arc<ScanContext>,
    registry: Arc<RuleRegistry>,
    warnings_as_errors: bool,
) -> CheckResult {
    match check.kind {
        CheckKind::Scan(family) => {
            let name = check.name.clone();
            let blocking = check.blocking;
            let handle = tokio::task::spawn_blocking(move || {
                scan_check::run(&check.name, family, &ctx, &registry, warnings_as_errors, blocking)
            });
            match tokio::time::timeout(SCAN_CHECK_TIMEOUT, handle).await {
                Ok(Ok(result)) => result,
                Ok(Err(e)) => {
                    CheckResult::errored(&name, blocking, format!("check panicked: {e}"))
                }
                Err(_) => CheckResult::errored(
                    &name,
                    blocking,
                    format!("timed out after {}s", SCAN_CHECK_TIMEOUT.as_secs()),
                ),
            }
        }
        CheckKind::Tool(tool_config) => tool::run(&tool_config, &ctx.path, check.blocking).await,
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
