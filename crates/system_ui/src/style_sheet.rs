//! Create-or-replace injection of the generated token stylesheet.
//!
//! The document head is reached through [`StyleHost`] so the replace contract
//! can be exercised without a browser. A host must end every
//! [`inject_style_sheet`] call with exactly one `<style>` node carrying the id.

use design_tokens::{generate_stylesheet, TokenError, TokenStore, STYLE_ELEMENT_ID};
use thiserror::Error;

#[derive(Debug, Error)]
/// Failures while writing a stylesheet into a document.
pub enum StyleInjectionError {
    /// No `window`/`document` is reachable (non-browser target or worker).
    #[error("no browser document is available")]
    NoDocument,
    /// The document has no `<head>` element.
    #[error("document has no <head> element")]
    NoHead,
    /// A DOM call threw.
    #[error("DOM operation `{operation}` failed: {message}")]
    Dom {
        operation: &'static str,
        message: String,
    },
    /// The stylesheet could not be generated.
    #[error(transparent)]
    Tokens(#[from] TokenError),
}

/// Minimal view of a document head that can hold `<style>` nodes.
pub trait StyleHost {
    /// Removes one node with `id`; returns whether a node was removed.
    fn remove_style(&mut self, id: &str) -> Result<bool, StyleInjectionError>;

    /// Appends a new `<style id=..>` node holding `css`.
    fn append_style(&mut self, id: &str, css: &str) -> Result<(), StyleInjectionError>;
}

/// Replaces any stylesheet registered under `id` with `css`.
pub fn inject_style_sheet<H>(host: &mut H, id: &str, css: &str) -> Result<(), StyleInjectionError>
where
    H: StyleHost + ?Sized,
{
    while host.remove_style(id)? {}
    host.append_style(id, css)
}

/// Generates the default token stylesheet and injects it into `host`.
pub fn inject_design_tokens_into<H>(host: &mut H) -> Result<(), StyleInjectionError>
where
    H: StyleHost + ?Sized,
{
    let css = generate_stylesheet(&TokenStore::default())?;
    inject_style_sheet(host, STYLE_ELEMENT_ID, &css)
}

/// Injects the default token stylesheet into the live browser document.
pub fn inject_design_tokens() -> Result<(), StyleInjectionError> {
    let mut head = DocumentHead::current()?;
    inject_design_tokens_into(&mut head)
}

fn dom_error(operation: &'static str) -> impl Fn(wasm_bindgen::JsValue) -> StyleInjectionError {
    move |err| StyleInjectionError::Dom {
        operation,
        message: format!("{err:?}"),
    }
}

/// Selector for a `<style>` child of the head carrying `id`.
///
/// The attribute form accepts ids that are not valid CSS identifiers.
fn style_selector(id: &str) -> String {
    let escaped = id.replace('\\', "\\\\").replace('"', "\\\"");
    format!("style[id=\"{escaped}\"]")
}

/// [`StyleHost`] over a browser `Document`.
///
/// Only `<style>` elements inside `<head>` are replaced; an element elsewhere
/// in the page that happens to share the id is left alone.
pub struct DocumentHead {
    document: web_sys::Document,
}

impl DocumentHead {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// Head of the current window's document.
    pub fn current() -> Result<Self, StyleInjectionError> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(Self::new)
            .ok_or(StyleInjectionError::NoDocument)
    }
}

impl StyleHost for DocumentHead {
    fn remove_style(&mut self, id: &str) -> Result<bool, StyleInjectionError> {
        let head = self.document.head().ok_or(StyleInjectionError::NoHead)?;
        match head
            .query_selector(&style_selector(id))
            .map_err(dom_error("query_selector"))?
        {
            Some(existing) => {
                existing.remove();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn append_style(&mut self, id: &str, css: &str) -> Result<(), StyleInjectionError> {
        let head = self.document.head().ok_or(StyleInjectionError::NoHead)?;
        let style = self
            .document
            .create_element("style")
            .map_err(dom_error("create_element"))?;
        style.set_id(id);
        style.set_text_content(Some(css));
        head.append_child(&style).map_err(dom_error("append_child"))?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One `<style>` node held by [`MemoryHead`].
pub struct StyleNode {
    pub id: String,
    pub css: String,
}

#[derive(Debug, Default, Clone)]
/// In-memory [`StyleHost`] for tests, previews and server-side rendering.
pub struct MemoryHead {
    nodes: Vec<StyleNode>,
}

impl MemoryHead {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[StyleNode] {
        &self.nodes
    }

    pub fn count_with_id(&self, id: &str) -> usize {
        self.nodes.iter().filter(|node| node.id == id).count()
    }

    pub fn css_for(&self, id: &str) -> Option<&str> {
        self.nodes
            .iter()
            .find(|node| node.id == id)
            .map(|node| node.css.as_str())
    }

    /// Inserts a node without the replace contract, as foreign markup would.
    pub fn push_raw(&mut self, id: &str, css: &str) {
        self.nodes.push(StyleNode {
            id: id.to_string(),
            css: css.to_string(),
        });
    }
}

impl StyleHost for MemoryHead {
    fn remove_style(&mut self, id: &str) -> Result<bool, StyleInjectionError> {
        match self.nodes.iter().position(|node| node.id == id) {
            Some(index) => {
                self.nodes.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn append_style(&mut self, id: &str, css: &str) -> Result<(), StyleInjectionError> {
        self.push_raw(id, css);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn injecting_twice_leaves_one_node_with_the_latest_css() {
        let mut head = MemoryHead::new();
        inject_style_sheet(&mut head, "sheet", ":root { --a: 1; }").unwrap();
        inject_style_sheet(&mut head, "sheet", ":root { --a: 2; }").unwrap();
        assert_eq!(head.count_with_id("sheet"), 1);
        assert_eq!(head.css_for("sheet"), Some(":root { --a: 2; }"));
    }

    #[test]
    fn injection_collapses_duplicates_and_keeps_other_nodes() {
        let mut head = MemoryHead::new();
        head.push_raw("app", "body {}");
        head.push_raw("sheet", "old");
        head.push_raw("sheet", "older");
        inject_style_sheet(&mut head, "sheet", "new").unwrap();
        assert_eq!(
            head.nodes(),
            &[
                StyleNode {
                    id: "app".to_string(),
                    css: "body {}".to_string(),
                },
                StyleNode {
                    id: "sheet".to_string(),
                    css: "new".to_string(),
                },
            ]
        );
    }

    #[test]
    fn design_tokens_land_under_the_fixed_id() {
        let mut head = MemoryHead::new();
        inject_design_tokens_into(&mut head).unwrap();
        inject_design_tokens_into(&mut head).unwrap();
        assert_eq!(head.count_with_id(STYLE_ELEMENT_ID), 1);
        let css = head.css_for(STYLE_ELEMENT_ID).unwrap();
        assert!(css.contains("--harbor-color-navy-900"));
        assert!(css.contains("prefers-color-scheme: dark"));
    }

    #[test]
    fn replacement_targets_only_head_style_elements() {
        assert_eq!(
            style_selector(STYLE_ELEMENT_ID),
            "style[id=\"harbor-design-tokens\"]"
        );
        assert_eq!(style_selector("a\"b"), "style[id=\"a\\\"b\"]");
        assert_eq!(style_selector("a\\b"), "style[id=\"a\\\\b\"]");
    }
}
