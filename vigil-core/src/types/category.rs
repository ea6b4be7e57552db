//! Rule taxonomy and check families.
//!
//! A `RuleCategory` is the fixed taxonomy a rule belongs to. A `CheckFamily`
//! is the unit of eligibility and caching: each family runs as one named
//! check per file event. Nesting rules ride along with the complexity family.

use serde::{Deserialize, Serialize};

/// Fixed taxonomy of rule categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleCategory {
    Naming,
    Layering,
    Complexity,
    Nesting,
    Security,
    InfraDuplication,
    Accessibility,
    Prose,
}

impl RuleCategory {
    /// The check family this category is scanned under.
    pub fn family(&self) -> CheckFamily {
        match self {
            RuleCategory::Naming => CheckFamily::Naming,
            RuleCategory::Layering => CheckFamily::Layering,
            RuleCategory::Complexity | RuleCategory::Nesting => CheckFamily::Complexity,
            RuleCategory::Security => CheckFamily::Security,
            RuleCategory::InfraDuplication => CheckFamily::InfraDuplication,
            RuleCategory::Accessibility => CheckFamily::Accessibility,
            RuleCategory::Prose => CheckFamily::Prose,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCategory::Naming => "naming",
            RuleCategory::Layering => "layering",
            RuleCategory::Complexity => "complexity",
            RuleCategory::Nesting => "nesting",
            RuleCategory::Security => "security",
            RuleCategory::InfraDuplication => "infra-duplication",
            RuleCategory::Accessibility => "accessibility",
            RuleCategory::Prose => "prose",
        }
    }
}

impl std::fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scanner-based check families. Each enabled family is one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckFamily {
    Naming,
    Layering,
    Complexity,
    Security,
    InfraDuplication,
    Accessibility,
    Prose,
}

impl CheckFamily {
    /// All families, in check-name order.
    pub const ALL: [CheckFamily; 7] = [
        CheckFamily::Accessibility,
        CheckFamily::Complexity,
        CheckFamily::InfraDuplication,
        CheckFamily::Layering,
        CheckFamily::Naming,
        CheckFamily::Prose,
        CheckFamily::Security,
    ];

    /// Stable check name used in reports and cache keys.
    pub fn check_name(&self) -> &'static str {
        match self {
            CheckFamily::Naming => "naming",
            CheckFamily::Layering => "layering",
            CheckFamily::Complexity => "complexity",
            CheckFamily::Security => "security",
            CheckFamily::InfraDuplication => "infra-duplication",
            CheckFamily::Accessibility => "accessibility",
            CheckFamily::Prose => "prose",
        }
    }

    /// True for families that scan prose rather than source code.
    pub fn is_prose(&self) -> bool {
        matches!(self, CheckFamily::Prose)
    }
}

impl std::fmt::Display for CheckFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.check_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nesting_scans_under_complexity() {
        assert_eq!(RuleCategory::Nesting.family(), CheckFamily::Complexity);
        assert_eq!(RuleCategory::Complexity.family(), CheckFamily::Complexity);
    }

    #[test]
    fn all_families_sorted_by_check_name() {
        let names: Vec<&str> = CheckFamily::ALL.iter().map(|f| f.check_name()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
