//! File classifier — maps a path to a layer, per-family eligibility, and
//! exemption flags.
//!
//! Classification is a pure function of path and configuration, computed
//! once per event and shared immutably by every check. It never fails: an
//! unrecognised path yields `Layer::Unknown` with default eligibility.
//! Exemption is decided here, before any scanning, so exempted families are
//! simply never run against the file.

use globset::{Glob, GlobSet, GlobSetBuilder};
use vigil_core::config::{ClassifyConfig, VigilConfig};
use vigil_core::errors::ConfigError;
use vigil_core::types::{CheckFamily, FileClassification, FxHashSet, Layer};

/// The configured layer directory names plus the hook prefix. Shared by the
/// classifier (layer of the audited file) and the layering refinement
/// (layer of an import target).
#[derive(Debug, Clone)]
pub struct LayerDirs {
    component_dirs: Vec<String>,
    hook_dirs: Vec<String>,
    utility_dirs: Vec<String>,
    service_dirs: Vec<String>,
    feature_dirs: Vec<String>,
    hook_prefix: String,
}

impl LayerDirs {
    pub fn from_config(classify: &ClassifyConfig) -> Self {
        Self {
            component_dirs: classify.effective_component_dirs(),
            hook_dirs: classify.effective_hook_dirs(),
            utility_dirs: classify.effective_utility_dirs(),
            service_dirs: classify.effective_service_dirs(),
            feature_dirs: classify.effective_feature_dirs(),
            hook_prefix: classify.effective_hook_prefix(),
        }
    }

    pub fn hook_prefix(&self) -> &str {
        &self.hook_prefix
    }

    /// Layer named by any segment of a module path, if one is.
    pub fn layer_of_import(&self, target: &str) -> Option<Layer> {
        let segments: Vec<&str> = target.split('/').collect();
        self.layer_of_segments(&segments)
    }

    fn layer_of_segments(&self, segments: &[&str]) -> Option<Layer> {
        let has = |names: &[String]| segments.iter().any(|s| names.iter().any(|n| n == s));
        if has(&self.component_dirs) {
            Some(Layer::Component)
        } else if has(&self.hook_dirs) {
            Some(Layer::Hook)
        } else if has(&self.service_dirs) {
            Some(Layer::Service)
        } else if has(&self.utility_dirs) {
            Some(Layer::Utility)
        } else if has(&self.feature_dirs) {
            Some(Layer::Feature)
        } else {
            None
        }
    }

    /// True when a file stem is hook-shaped: the prefix followed by an
    /// uppercase letter (`useCart`, not `user`).
    pub fn has_hook_shape(&self, stem: &str) -> bool {
        stem.strip_prefix(self.hook_prefix.as_str())
            .and_then(|rest| rest.chars().next())
            .is_some_and(|c| c.is_uppercase())
    }
}

pub struct FileClassifier {
    dirs: LayerDirs,
    skip: GlobSet,
    family_globs: Vec<(CheckFamily, GlobSet)>,
    allowed_duplicate_prefixes: Vec<String>,
}

impl FileClassifier {
    pub fn new(config: &VigilConfig) -> Result<Self, ConfigError> {
        let classify = &config.classify;
        let skip = build_globset(&classify.effective_skip(), "classify.skip")?;

        let mut family_globs = Vec::with_capacity(CheckFamily::ALL.len());
        for family in CheckFamily::ALL {
            let globs = config.checks.effective_include(family);
            let set = build_globset(&globs, &format!("checks.{family}.include"))?;
            family_globs.push((family, set));
        }

        Ok(Self {
            dirs: LayerDirs::from_config(classify),
            skip,
            family_globs,
            allowed_duplicate_prefixes: classify.effective_allowed_duplicate_prefixes(),
        })
    }

    /// The configured layer directories, for sharing with the scan context.
    pub fn layer_dirs(&self) -> &LayerDirs {
        &self.dirs
    }

    /// Classify a path. Total: never fails.
    pub fn classify(&self, path: &str) -> FileClassification {
        let normalized = path.replace('\\', "/");
        let layer = self.infer_layer(&normalized);

        let mut eligible = FxHashSet::default();
        let mut exemptions = Vec::new();

        if self.skip.is_match(&normalized) {
            exemptions.push("matches skip pattern (generated or vendored)".to_string());
            return FileClassification::new(path.to_string(), layer, eligible, exemptions);
        }

        for (family, globs) in &self.family_globs {
            if globs.is_match(&normalized) {
                eligible.insert(*family);
            }
        }

        if let Some(prefix) = self.allowed_duplicate_prefix(&normalized) {
            eligible.remove(&CheckFamily::InfraDuplication);
            exemptions.push(format!("path is under allowed-duplicate prefix `{prefix}`"));
        }

        FileClassification::new(path.to_string(), layer, eligible, exemptions)
    }

    /// Whether the path is on the global skip-list.
    pub fn is_skipped(&self, path: &str) -> bool {
        self.skip.is_match(&path.replace('\\', "/"))
    }

    /// Infer the layer from path segments and naming shape.
    fn infer_layer(&self, path: &str) -> Layer {
        let segments: Vec<&str> = path.split('/').collect();
        let parents = &segments[..segments.len().saturating_sub(1)];
        let file_name = segments.last().copied().unwrap_or("");
        let stem = file_name.split('.').next().unwrap_or(file_name);

        match self.dirs.layer_of_segments(parents) {
            // A hooks directory makes a file a hook whether or not its name
            // carries the prefix; the prefix alone does not.
            Some(layer) => layer,
            None => {
                // Naming-shape fallback: a PascalCase .tsx/.jsx file is a
                // component wherever it lives.
                let ext = file_name.rsplit('.').next();
                if matches!(ext, Some("tsx") | Some("jsx"))
                    && stem.chars().next().is_some_and(|c| c.is_uppercase())
                {
                    Layer::Component
                } else {
                    Layer::Unknown
                }
            }
        }
    }

    fn allowed_duplicate_prefix(&self, path: &str) -> Option<&str> {
        self.allowed_duplicate_prefixes
            .iter()
            .find(|prefix| path.starts_with(prefix.as_str()))
            .map(String::as_str)
    }
}

fn build_globset(globs: &[String], field: &str) -> Result<GlobSet, ConfigError> {
    let mut builder = GlobSetBuilder::new();
    for glob in globs {
        let compiled = Glob::new(glob).map_err(|e| ConfigError::ValidationFailed {
            field: field.to_string(),
            message: format!("invalid glob `{glob}`: {e}"),
        })?;
        builder.add(compiled);
    }
    builder.build().map_err(|e| ConfigError::ValidationFailed {
        field: field.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> FileClassifier {
        FileClassifier::new(&VigilConfig::default()).unwrap()
    }

    #[test]
    fn components_dir_is_component_layer() {
        let c = classifier().classify("src/components/Button.tsx");
        assert_eq!(c.layer, Layer::Component);
        assert!(c.is_eligible(CheckFamily::Naming));
        assert!(!c.is_eligible(CheckFamily::Prose));
    }

    #[test]
    fn hooks_dir_is_hook_layer() {
        let c = classifier().classify("src/hooks/useCart.ts");
        assert_eq!(c.layer, Layer::Hook);
    }

    #[test]
    fn pascal_tsx_outside_known_dirs_is_component() {
        let c = classifier().classify("src/misc/Banner.tsx");
        assert_eq!(c.layer, Layer::Component);
    }

    #[test]
    fn unknown_path_gets_permissive_classification() {
        let c = classifier().classify("src/whatever/thing.ts");
        assert_eq!(c.layer, Layer::Unknown);
        assert!(c.is_eligible(CheckFamily::Naming));
        assert!(c.is_eligible(CheckFamily::InfraDuplication));
        assert!(c.exemptions.is_empty());
    }

    #[test]
    fn markdown_is_prose_only() {
        let c = classifier().classify("docs/guide.md");
        assert!(c.is_eligible(CheckFamily::Prose));
        assert!(!c.is_eligible(CheckFamily::Naming));
    }

    #[test]
    fn skip_list_disables_everything() {
        let c = classifier().classify("dist/bundle.min.js");
        assert_eq!(c.eligible_families().count(), 0);
        assert!(!c.exemptions.is_empty());
    }

    #[test]
    fn node_modules_skipped() {
        assert!(classifier().is_skipped("node_modules/react/index.js"));
    }

    #[test]
    fn allowed_duplicate_prefix_exempts_infra_duplication_only() {
        let c = classifier().classify("tests/helpers/debounce.ts");
        assert!(!c.is_eligible(CheckFamily::InfraDuplication));
        assert!(c.is_eligible(CheckFamily::Naming));
        assert!(c.exemptions.iter().any(|e| e.contains("allowed-duplicate")));
    }

    #[test]
    fn import_target_layer_resolution() {
        let c = classifier();
        assert_eq!(
            c.layer_dirs().layer_of_import("@/components/Button"),
            Some(Layer::Component)
        );
        assert_eq!(
            c.layer_dirs().layer_of_import("app/services/userApi"),
            Some(Layer::Service)
        );
        assert_eq!(c.layer_dirs().layer_of_import("react"), None);
    }

    #[test]
    fn hook_shape_requires_uppercase_after_prefix() {
        let dirs = LayerDirs::from_config(&ClassifyConfig::default());
        assert!(dirs.has_hook_shape("useCart"));
        assert!(!dirs.has_hook_shape("user"));
        assert!(!dirs.has_hook_shape("cart"));
    }
}
