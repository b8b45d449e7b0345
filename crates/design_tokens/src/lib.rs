//! Harbor design tokens.
//!
//! The crate holds the static token store ([`BASE`], [`SEMANTIC`],
//! [`COMPONENT`], [`DARK`]), the WCAG contrast calculator, the CSS
//! custom-property emitter and the theme factory. It has no DOM
//! dependency; `system_ui` injects what [`generate_stylesheet`] returns.

pub mod color;
pub mod contrast;
pub mod css;
pub mod theme;
pub mod tokens;
pub mod values;

pub use color::{Color, ColorParseError};
pub use contrast::{
    audit_text_pairs, contrast_ratio, contrast_ratio_hex, relative_luminance,
    validate_accessibility, validate_accessibility_hex, ContrastCheck, WcagLevel,
    DEFAULT_MIN_CONTRAST,
};
pub use css::{
    css_variables, dark_css_variables, generate_stylesheet, var_ref, CssVariable, TokenError,
    CSS_VARIABLE_PREFIX,
};
pub use theme::{create_theme, Theme, ThemeMode, ThemeModeParseError};
pub use tokens::{TokenStore, BASE, COMPONENT, DARK, SEMANTIC};

/// Id of the `<style>` element that carries the generated variables.
pub const STYLE_ELEMENT_ID: &str = "harbor-design-tokens";
