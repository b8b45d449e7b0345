//! Flattens the token store into CSS custom properties.
//!
//! Names are `--harbor-` followed by the token path joined with `-`. Base
//! tokens carry no layer segment; semantic and component tokens are prefixed
//! with `semantic` and `component`. The dark layer shares the semantic
//! names so its block overrides them.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::tokens::TokenStore;

/// Library namespace shared by every generated variable.
pub const CSS_VARIABLE_PREFIX: &str = "harbor";
/// Segment inserted before semantic (and dark) token paths.
pub const SEMANTIC_SEGMENT: &str = "semantic";
/// Segment inserted before component token paths.
pub const COMPONENT_SEGMENT: &str = "component";
/// Media query wrapping the dark-mode overrides.
pub const DARK_MODE_MEDIA_QUERY: &str = "@media (prefers-color-scheme: dark)";
/// Selector that forces dark mode regardless of the OS preference.
pub const FORCED_DARK_SELECTOR: &str = ":root[data-theme=\"dark\"]";

#[derive(Debug, Error)]
/// Failures while walking the token store.
pub enum TokenError {
    /// A layer could not be converted into a value tree.
    #[error("failed to serialize token layer `{layer}`: {source}")]
    Serialize {
        layer: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One generated custom-property declaration.
pub struct CssVariable {
    pub name: String,
    pub value: String,
}

impl CssVariable {
    /// `name: value;`
    pub fn declaration(&self) -> String {
        format!("{}: {};", self.name, self.value)
    }
}

/// Builds `--harbor-<segments...>`.
pub fn variable_name<S: AsRef<str>>(segments: &[S]) -> String {
    let mut name = format!("--{CSS_VARIABLE_PREFIX}");
    for segment in segments {
        name.push('-');
        name.push_str(segment.as_ref());
    }
    name
}

/// `var(--harbor-<path>)` for a dash-joined token path such as
/// `semantic-text-primary`.
pub fn var_ref(path: &str) -> String {
    format!("var(--{CSS_VARIABLE_PREFIX}-{path})")
}

/// Base, semantic and component variables in declaration order.
pub fn css_variables(store: &TokenStore) -> Result<Vec<CssVariable>, TokenError> {
    let mut out = Vec::new();
    flatten_layer("base", None, store.base, &mut out)?;
    flatten_layer("semantic", Some(SEMANTIC_SEGMENT), store.semantic, &mut out)?;
    flatten_layer("component", Some(COMPONENT_SEGMENT), store.component, &mut out)?;
    Ok(out)
}

/// Dark-layer variables; names match the semantic layer's.
pub fn dark_css_variables(store: &TokenStore) -> Result<Vec<CssVariable>, TokenError> {
    let mut out = Vec::new();
    flatten_layer("dark", Some(SEMANTIC_SEGMENT), store.dark, &mut out)?;
    Ok(out)
}

/// Renders `selector { ... }` with every declaration on its own line.
pub fn render_block(selector: &str, variables: &[CssVariable], indent: usize) -> String {
    let pad = " ".repeat(indent);
    let mut block = format!("{pad}{selector} {{\n");
    for variable in variables {
        block.push_str(&pad);
        block.push_str("  ");
        block.push_str(&variable.declaration());
        block.push('\n');
    }
    block.push_str(&pad);
    block.push_str("}\n");
    block
}

/// Complete stylesheet: light `:root`, the OS-preference dark block and the
/// forced dark block.
pub fn generate_stylesheet(store: &TokenStore) -> Result<String, TokenError> {
    let light = css_variables(store)?;
    let dark = dark_css_variables(store)?;

    let mut css = render_block(":root", &light, 0);
    css.push('\n');
    css.push_str(DARK_MODE_MEDIA_QUERY);
    css.push_str(" {\n");
    css.push_str(&render_block(":root:not([data-theme=\"light\"])", &dark, 2));
    css.push_str("}\n\n");
    css.push_str(&render_block(FORCED_DARK_SELECTOR, &dark, 0));
    Ok(css)
}

fn flatten_layer<T: Serialize>(
    layer: &'static str,
    segment: Option<&str>,
    tokens: &T,
    out: &mut Vec<CssVariable>,
) -> Result<(), TokenError> {
    let tree = serde_json::to_value(tokens)
        .map_err(|source| TokenError::Serialize { layer, source })?;
    let mut path: Vec<String> = segment.map(str::to_string).into_iter().collect();
    flatten_value(&mut path, &tree, out);
    Ok(())
}

fn flatten_value(path: &mut Vec<String>, value: &Value, out: &mut Vec<CssVariable>) {
    let leaf = match value {
        Value::Object(map) => {
            for (key, child) in map {
                path.push(key.clone());
                flatten_value(path, child, out);
                path.pop();
            }
            return;
        }
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        Value::Null => return,
    };
    out.push(CssVariable {
        name: variable_name(path),
        value: leaf,
    });
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    fn find<'a>(variables: &'a [CssVariable], name: &str) -> Option<&'a str> {
        variables
            .iter()
            .find(|variable| variable.name == name)
            .map(|variable| variable.value.as_str())
    }

    #[test]
    fn base_leaf_names_are_namespaced_by_category_and_path() {
        let variables = css_variables(&TokenStore::default()).unwrap();
        assert_eq!(find(&variables, "--harbor-color-navy-900"), Some("#0A1F44"));
        assert_eq!(find(&variables, "--harbor-spacing-md"), Some("16px"));
        assert_eq!(find(&variables, "--harbor-spacing-2xl"), Some("48px"));
        assert_eq!(find(&variables, "--harbor-font-weight-semibold"), Some("600"));
        assert_eq!(find(&variables, "--harbor-font-line-height-normal"), Some("1.5"));
        assert_eq!(find(&variables, "--harbor-motion-duration-fast"), Some("120ms"));
        assert_eq!(find(&variables, "--harbor-z-index-modal"), Some("1400"));
    }

    #[test]
    fn semantic_and_component_layers_resolve_to_base_values() {
        let variables = css_variables(&TokenStore::default()).unwrap();
        assert_eq!(find(&variables, "--harbor-semantic-text-primary"), Some("#0A1F44"));
        assert_eq!(find(&variables, "--harbor-semantic-brand-on-primary"), Some("#FFFFFF"));
        assert_eq!(
            find(&variables, "--harbor-component-card-navy-background"),
            Some("#0A1F44")
        );
        assert_eq!(find(&variables, "--harbor-component-button-radius"), Some("8px"));
    }

    #[test]
    fn every_leaf_appears_exactly_once() {
        let variables = css_variables(&TokenStore::default()).unwrap();
        let names: HashSet<_> = variables.iter().map(|variable| &variable.name).collect();
        assert_eq!(names.len(), variables.len());
        // 8 color groups: white, black and 6 scales of 11 shades.
        let colors = variables
            .iter()
            .filter(|variable| variable.name.starts_with("--harbor-color-"))
            .count();
        assert_eq!(colors, 2 + 6 * 11);
    }

    #[test]
    fn emission_is_deterministic_and_in_declaration_order() {
        let store = TokenStore::default();
        let first = css_variables(&store).unwrap();
        let second = css_variables(&store).unwrap();
        assert_eq!(first, second);
        assert_eq!(first[0].name, "--harbor-color-white");
        assert_eq!(first[2].name, "--harbor-color-navy-50");
        assert_eq!(generate_stylesheet(&store).unwrap(), generate_stylesheet(&store).unwrap());
    }

    #[test]
    fn dark_layer_overrides_semantic_names() {
        let store = TokenStore::default();
        let light = css_variables(&store).unwrap();
        let dark = dark_css_variables(&store).unwrap();
        for variable in &dark {
            assert!(variable.name.starts_with("--harbor-semantic-"), "{}", variable.name);
            assert!(find(&light, &variable.name).is_some(), "{}", variable.name);
        }
        assert_eq!(find(&dark, "--harbor-semantic-surface-default"), Some("#0B1426"));
    }

    #[test]
    fn stylesheet_contains_light_root_and_dark_blocks() {
        let css = generate_stylesheet(&TokenStore::default()).unwrap();
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("prefers-color-scheme: dark"));
        assert!(css.contains(FORCED_DARK_SELECTOR));
        assert!(css.contains("  --harbor-color-navy-900: #0A1F44;\n"));
        assert!(css.contains("    --harbor-semantic-text-primary: #F8FAFC;\n"));
    }

    #[test]
    fn helpers_build_names_and_references() {
        assert_eq!(variable_name(&["color", "teal", "500"]), "--harbor-color-teal-500");
        assert_eq!(var_ref("semantic-text-primary"), "var(--harbor-semantic-text-primary)");
        let variable = CssVariable {
            name: "--harbor-radius-sm".to_string(),
            value: "4px".to_string(),
        };
        assert_eq!(variable.declaration(), "--harbor-radius-sm: 4px;");
    }
}
