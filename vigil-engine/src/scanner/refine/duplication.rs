//! Infra-duplication refinement: the shared-module import check.
//!
//! A file that already imports the shared module it supposedly duplicates is
//! wrapping or re-exporting it, so the rule is suppressed for that file.
//! The check is file-level and runs before any of the rule's matchers.

/// Whether the file imports the given shared module.
pub fn imports_shared_module(content: &str, module: &str) -> bool {
    content.lines().any(|line| {
        let trimmed = line.trim_start();
        (trimmed.starts_with("import") || trimmed.contains("require(")) && trimmed.contains(module)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_of_shared_module_detected() {
        let content = "import { debounce } from '@/shared/timing';\nconst debounce2 = 1;";
        assert!(imports_shared_module(content, "shared/timing"));
    }

    #[test]
    fn require_form_detected() {
        let content = "const { debounce } = require('shared/timing');";
        assert!(imports_shared_module(content, "shared/timing"));
    }

    #[test]
    fn mention_outside_import_does_not_count() {
        let content = "// talks about shared/timing in a comment\nconst debounce = () => {};";
        assert!(!imports_shared_module(content, "shared/timing"));
    }
}
