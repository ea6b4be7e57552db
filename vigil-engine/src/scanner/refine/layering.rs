//! Layering refinement: import targets checked against a per-layer
//! allow-list. Relative imports and package imports always pass.

use vigil_core::types::{Layer, Violation};

use super::materialize;
use crate::registry::Rule;
use crate::scanner::context::ScanContext;

pub fn refine(
    ctx: &ScanContext,
    rule: &Rule,
    target: &str,
    line: u32,
    window: usize,
) -> Option<Violation> {
    if target.starts_with('.') {
        return None;
    }
    // A module path that names no layer directory is a package import.
    let target_layer = ctx.dirs.layer_of_import(target)?;
    let source_layer = ctx.classification.layer;
    if allowed(source_layer, target_layer) {
        return None;
    }

    let message = match (source_layer, target_layer) {
        (Layer::Component, Layer::Service) => {
            format!("component imports `{target}` from the service layer directly; go through a hook")
        }
        (Layer::Utility, Layer::Component | Layer::Feature) => {
            format!("utility module imports `{target}` from the {target_layer} layer")
        }
        _ => format!("{source_layer} layer must not import `{target}` from the {target_layer} layer"),
    };

    Some(materialize(ctx, rule, line, window, message, rule.suggestion.clone()))
}

/// Per-layer allow-list. A target layer the path cannot resolve never
/// reaches this point.
fn allowed(source: Layer, target: Layer) -> bool {
    match source {
        Layer::Component => matches!(target, Layer::Component | Layer::Hook | Layer::Utility),
        Layer::Hook => matches!(target, Layer::Hook | Layer::Service | Layer::Utility),
        Layer::Service => matches!(target, Layer::Service | Layer::Utility),
        Layer::Utility => matches!(target, Layer::Utility),
        // Feature and unclassified files may import anything.
        Layer::Feature | Layer::Unknown => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utilities_depend_only_on_utilities() {
        assert!(allowed(Layer::Utility, Layer::Utility));
        assert!(!allowed(Layer::Utility, Layer::Component));
        assert!(!allowed(Layer::Utility, Layer::Feature));
        assert!(!allowed(Layer::Utility, Layer::Service));
    }

    #[test]
    fn components_reach_services_only_via_hooks() {
        assert!(allowed(Layer::Component, Layer::Hook));
        assert!(allowed(Layer::Component, Layer::Utility));
        assert!(!allowed(Layer::Component, Layer::Service));
    }

    #[test]
    fn unknown_layer_is_unrestricted() {
        assert!(allowed(Layer::Unknown, Layer::Service));
        assert!(allowed(Layer::Unknown, Layer::Component));
    }
}
