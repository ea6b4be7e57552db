//! File classification: inferred layer, per-family eligibility, exemptions.

use super::category::CheckFamily;
use super::collections::FxHashSet;

/// Architectural layer a file belongs to, inferred from its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Component,
    Hook,
    Utility,
    Service,
    Feature,
    Unknown,
}

impl Layer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Component => "component",
            Layer::Hook => "hook",
            Layer::Utility => "utility",
            Layer::Service => "service",
            Layer::Feature => "feature",
            Layer::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification result for one file. Created once per event and shared
/// immutably by every check. Classification is total: it never fails, an
/// unrecognised path just gets `Layer::Unknown` and default eligibility.
#[derive(Debug, Clone)]
pub struct FileClassification {
    pub path: String,
    pub layer: Layer,
    eligible: FxHashSet<CheckFamily>,
    pub exemptions: Vec<String>,
}

impl FileClassification {
    pub fn new(
        path: String,
        layer: Layer,
        eligible: FxHashSet<CheckFamily>,
        exemptions: Vec<String>,
    ) -> Self {
        Self {
            path,
            layer,
            eligible,
            exemptions,
        }
    }

    /// Whether a check family applies to this file at all.
    pub fn is_eligible(&self, family: CheckFamily) -> bool {
        self.eligible.contains(&family)
    }

    /// Families this file is eligible for, in check-name order.
    pub fn eligible_families(&self) -> impl Iterator<Item = CheckFamily> + '_ {
        CheckFamily::ALL
            .into_iter()
            .filter(move |f| self.eligible.contains(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eligibility_lookup() {
        let mut eligible = FxHashSet::default();
        eligible.insert(CheckFamily::Naming);
        let c = FileClassification::new("src/a.ts".into(), Layer::Unknown, eligible, vec![]);
        assert!(c.is_eligible(CheckFamily::Naming));
        assert!(!c.is_eligible(CheckFamily::Prose));
        assert_eq!(c.eligible_families().count(), 1);
    }
}
