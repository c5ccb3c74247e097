// SplashForge - core/template.rs
//
// Declarative layout templates, embedded at compile time and rendered by
// plain `{{variable}}` substitution.  No control flow, no escaping: the
// templates are trusted content shipped with the binary and every value
// is produced by this crate.

use crate::util::constants;
use crate::util::error::TemplateError;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Embedded template content, keyed by logical name.
/// Each tuple is (name, template text).
pub fn builtin_template_sources() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            constants::STORYBOARD_TEMPLATE,
            include_str!("../../templates/splash.storyboard"),
        ),
        (
            constants::DRAWABLE_TEMPLATE,
            include_str!("../../templates/splash_drawable.xml"),
        ),
    ]
}

/// Placeholder syntax: `{{name}}` with optional inner whitespace.
/// The pattern is a constant exercised by the unit tests below.
fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("placeholder pattern is valid")
    })
}

/// Render the embedded template `name` with the supplied variables.
///
/// Fails with `NotFound` when no template is embedded under `name`, and
/// with `MissingVariable` when the template references a placeholder the
/// mapping does not cover.  A missing value is never replaced by an
/// empty string.
pub fn render(name: &str, variables: &HashMap<&str, String>) -> Result<String, TemplateError> {
    let template = builtin_template_sources()
        .into_iter()
        .find(|(n, _)| *n == name)
        .map(|(_, content)| content)
        .ok_or_else(|| TemplateError::NotFound {
            name: name.to_string(),
        })?;

    substitute(name, template, variables)
}

/// Single-pass substitution over `template`, erroring on the first
/// placeholder without a value.
fn substitute(
    name: &str,
    template: &str,
    variables: &HashMap<&str, String>,
) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;

    for caps in placeholder_regex().captures_iter(template) {
        let (full, var) = match (caps.get(0), caps.get(1)) {
            (Some(full), Some(var)) => (full, var.as_str()),
            _ => continue,
        };

        let value = variables
            .get(var)
            .ok_or_else(|| TemplateError::MissingVariable {
                template: name.to_string(),
                variable: var.to_string(),
            })?;

        out.push_str(&template[last..full.start()]);
        out.push_str(value);
        last = full.end();
    }

    out.push_str(&template[last..]);
    Ok(out)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&'static str, &str)]) -> HashMap<&'static str, String> {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn test_substitutes_all_placeholders() {
        let rendered = substitute(
            "t",
            "x=\"{{x}}\" y=\"{{y}}\" x again {{x}}",
            &vars(&[("x", "157.0"), ("y", "423.0")]),
        )
        .unwrap();
        assert_eq!(rendered, "x=\"157.0\" y=\"423.0\" x again 157.0");
    }

    #[test]
    fn test_inner_whitespace_is_tolerated() {
        let rendered = substitute("t", "<w>{{ width }}</w>", &vars(&[("width", "100.0")])).unwrap();
        assert_eq!(rendered, "<w>100.0</w>");
    }

    #[test]
    fn test_missing_variable_is_an_error() {
        let result = substitute("board", "{{present}} {{absent}}", &vars(&[("present", "ok")]));
        match result {
            Err(TemplateError::MissingVariable { template, variable }) => {
                assert_eq!(template, "board");
                assert_eq!(variable, "absent");
            }
            other => panic!("expected MissingVariable, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_template_name() {
        let result = render("nonexistent.tpl", &HashMap::new());
        assert!(
            matches!(result, Err(TemplateError::NotFound { .. })),
            "expected NotFound, got {result:?}"
        );
    }

    #[test]
    fn test_text_without_placeholders_passes_through() {
        let rendered = substitute("t", "no placeholders here", &HashMap::new()).unwrap();
        assert_eq!(rendered, "no placeholders here");
    }

    #[test]
    fn test_storyboard_template_is_embedded_and_renders() {
        let rendered = render(
            crate::util::constants::STORYBOARD_TEMPLATE,
            &vars(&[
                ("height", "50.0"),
                ("width", "100.0"),
                ("x", "157.0"),
                ("y", "423.0"),
                ("imageAsset", "BootSplash"),
                ("backgroundColor", "BootSplash"),
            ]),
        )
        .unwrap();
        assert!(
            rendered.contains("x=\"157.0\" y=\"423.0\" width=\"100.0\" height=\"50.0\""),
            "storyboard frame not rendered as expected"
        );
        assert!(!rendered.contains("{{"), "unrendered placeholder left behind");
    }

    #[test]
    fn test_drawable_template_is_embedded_and_renders() {
        let rendered = render(
            crate::util::constants::DRAWABLE_TEMPLATE,
            &vars(&[("imageName", "bootsplash_image"), ("colorName", "bootsplash_color")]),
        )
        .unwrap();
        assert!(rendered.contains("@drawable/bootsplash_image"));
        assert!(rendered.contains("@color/bootsplash_color"));
        assert!(!rendered.contains("{{"), "unrendered placeholder left behind");
    }
}
