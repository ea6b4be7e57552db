//! Rule registry — the immutable, versioned catalog of builtin rules.
//!
//! Loaded once per process and read lock-free by every concurrent check.
//! Extension happens by composition (adding entries to the builtin table),
//! never by runtime mutation.

pub mod builtin;
pub mod types;

pub use types::{Matcher, Rule};

use regex::Regex;
use vigil_core::errors::ScanError;
use vigil_core::types::{CheckFamily, FxHashMap};

/// Version stamp participating in every cache key. Bump on any change to
/// the builtin rule table so stale cached verdicts stop resolving.
pub const RULESET_VERSION: u32 = 1;

/// The compiled rule catalog, grouped by check family.
pub struct RuleRegistry {
    by_family: FxHashMap<CheckFamily, Vec<Rule>>,
    total: usize,
}

impl RuleRegistry {
    /// Compile the builtin catalog.
    pub fn builtin() -> Result<Self, ScanError> {
        let mut by_family: FxHashMap<CheckFamily, Vec<Rule>> = FxHashMap::default();
        let mut total = 0;

        for spec in builtin::BUILTIN_RULES {
            let mut matchers = Vec::with_capacity(spec.patterns.len());
            for (pattern, context_window) in spec.patterns {
                let pattern = Regex::new(pattern).map_err(|e| ScanError::InvalidPattern {
                    rule_id: spec.id.to_string(),
                    message: e.to_string(),
                })?;
                matchers.push(Matcher {
                    pattern,
                    context_window: *context_window,
                });
            }
            let rule = Rule {
                id: spec.id.to_string(),
                category: spec.category,
                severity: spec.severity,
                matchers,
                message: spec.message.to_string(),
                suggestion: spec.suggestion.map(str::to_string),
                shared_module: spec.shared_module.map(str::to_string),
            };
            by_family.entry(spec.category.family()).or_default().push(rule);
            total += 1;
        }

        Ok(Self { by_family, total })
    }

    /// Rules for one check family, in catalog order.
    pub fn rules_for(&self, family: CheckFamily) -> &[Rule] {
        self.by_family.get(&family).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All rules, family by family in check-name order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        CheckFamily::ALL.into_iter().flat_map(|f| self.rules_for(f).iter())
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
