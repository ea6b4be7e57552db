//! Naming refinements: case conventions by layer and declaration shape.

use vigil_core::types::{Layer, Violation};

use super::materialize;
use crate::registry::Rule;
use crate::scanner::context::ScanContext;

pub fn refine(
    ctx: &ScanContext,
    rule: &Rule,
    name: Option<&str>,
    line: u32,
    window: usize,
) -> Option<Violation> {
    match rule.id.as_str() {
        "naming/component-pascal" => {
            let name = name?;
            if ctx.classification.layer != Layer::Component {
                return None;
            }
            // Hook-shaped helpers co-located with components are fine.
            if ctx.dirs.has_hook_shape(name) || is_pascal_case(name) {
                return None;
            }
            Some(materialize(
                ctx,
                rule,
                line,
                window,
                rule.message.replace("{name}", name),
                Some(to_pascal_case(name)),
            ))
        }
        "naming/hook-name" => {
            let name = name?;
            if ctx.classification.layer != Layer::Hook {
                return None;
            }
            if ctx.dirs.has_hook_shape(name) && !name.contains('_') {
                return None;
            }
            Some(materialize(
                ctx,
                rule,
                line,
                window,
                rule.message.replace("{name}", name),
                Some(format!("{}{}", ctx.dirs.hook_prefix(), to_pascal_case(name))),
            ))
        }
        "naming/constant-case" => {
            let name = name?;
            if is_upper_snake(name) {
                return None;
            }
            Some(materialize(
                ctx,
                rule,
                line,
                window,
                rule.message.replace("{name}", name),
                Some(to_upper_snake(name)),
            ))
        }
        "naming/type-pascal" => {
            let name = name?;
            if is_pascal_case(name) {
                return None;
            }
            Some(materialize(
                ctx,
                rule,
                line,
                window,
                rule.message.replace("{name}", name),
                Some(to_pascal_case(name)),
            ))
        }
        // Pattern-only naming rules need no shaping.
        _ => Some(materialize(
            ctx,
            rule,
            line,
            window,
            rule.message.clone(),
            rule.suggestion.clone(),
        )),
    }
}

fn is_pascal_case(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_uppercase()) && !name.contains('_')
}

fn is_upper_snake(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_uppercase() || c.is_numeric() || c == '_')
}

fn to_pascal_case(name: &str) -> String {
    name.split('_')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

fn to_upper_snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            out.push('_');
        }
        out.extend(c.to_uppercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_conversion() {
        assert_eq!(to_pascal_case("myWidget"), "MyWidget");
        assert_eq!(to_pascal_case("my_widget"), "MyWidget");
        assert!(is_pascal_case("MyWidget"));
        assert!(!is_pascal_case("myWidget"));
    }

    #[test]
    fn upper_snake_conversion() {
        assert_eq!(to_upper_snake("maxRetries"), "MAX_RETRIES");
        assert_eq!(to_upper_snake("timeout"), "TIMEOUT");
        assert!(is_upper_snake("MAX_RETRIES"));
        assert!(!is_upper_snake("maxRetries"));
    }
}
