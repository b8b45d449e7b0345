//! Shared structural, control, typography, overlay and layout primitives.
//!
//! Every variant enum maps to a `data-ui-variant` token and, where the
//! variant changes color, to a style record built from `var(--harbor-*)`
//! references. Primitives never carry literal colors.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use design_tokens::var_ref;

use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod layout;
mod overlays;

pub use controls::{Button, CheckboxField, IconButton, TextField};
pub use data_display::{Badge, EmptyState, Heading, Panel, Surface, Text};
pub use layout::{Cluster, Grid, Stack};
pub use overlays::{MenuItem, MenuSeparator, MenuSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Semantic surface variants for structural primitives.
pub enum SurfaceVariant {
    /// Paper surface.
    #[default]
    Standard,
    /// Page background.
    Muted,
    /// Sunken well.
    Inset,
}

impl SurfaceVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Muted => "muted",
            Self::Inset => "inset",
        }
    }

    pub(crate) fn background(self) -> String {
        match self {
            Self::Standard => var_ref("semantic-surface-paper"),
            Self::Muted => var_ref("semantic-surface-default"),
            Self::Inset => var_ref("semantic-surface-sunken"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shadow depth applied to surfaces.
pub enum Elevation {
    #[default]
    Flat,
    Raised,
    Overlay,
}

impl Elevation {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Raised => "raised",
            Self::Overlay => "overlay",
        }
    }

    pub(crate) fn shadow(self) -> String {
        match self {
            Self::Flat => var_ref("shadow-none"),
            Self::Raised => var_ref("shadow-sm"),
            Self::Overlay => var_ref("shadow-lg"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Neutral action on a paper surface.
    #[default]
    Standard,
    /// Filled navy call to action.
    Primary,
    /// Outlined teal action.
    Secondary,
    /// Borderless action for toolbars and menus.
    Quiet,
    /// Destructive action.
    Danger,
}

/// Color triple resolved for a button variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ButtonStyle {
    pub background: String,
    pub text: String,
    pub border: String,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Quiet => "quiet",
            Self::Danger => "danger",
        }
    }

    pub(crate) fn style(self) -> ButtonStyle {
        let (background, text, border) = match self {
            Self::Standard => (
                var_ref("semantic-surface-paper"),
                var_ref("semantic-text-primary"),
                var_ref("semantic-border-default"),
            ),
            Self::Primary => (
                var_ref("component-button-primary-background"),
                var_ref("component-button-primary-text"),
                var_ref("component-button-primary-background"),
            ),
            Self::Secondary => (
                "transparent".to_string(),
                var_ref("semantic-brand-secondary"),
                var_ref("semantic-brand-secondary"),
            ),
            Self::Quiet => (
                "transparent".to_string(),
                var_ref("semantic-text-primary"),
                "transparent".to_string(),
            ),
            Self::Danger => (
                var_ref("semantic-status-error"),
                var_ref("semantic-text-inverse"),
                var_ref("semantic-status-error"),
            ),
        };
        ButtonStyle {
            background,
            text,
            border,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Corner treatment for buttons.
pub enum ButtonShape {
    /// Component button radius.
    #[default]
    Standard,
    /// Fully rounded ends.
    Pill,
    /// Square footprint, fully rounded.
    Circle,
}

impl ButtonShape {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Pill => "pill",
            Self::Circle => "circle",
        }
    }

    pub(crate) fn radius(self) -> String {
        match self {
            Self::Standard => var_ref("component-button-radius"),
            Self::Pill | Self::Circle => var_ref("radius-full"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared input-field variants.
pub enum FieldVariant {
    #[default]
    Standard,
    /// Field placed on a dark navigation surface.
    Inverse,
}

impl FieldVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Inverse => "inverse",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared text roles.
pub enum TextRole {
    #[default]
    Body,
    Label,
    Caption,
    Title,
    Code,
}

impl TextRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Label => "label",
            Self::Caption => "caption",
            Self::Title => "title",
            Self::Code => "code",
        }
    }

    pub(crate) fn font_size(self) -> String {
        match self {
            Self::Body => var_ref("font-size-md"),
            Self::Label | Self::Code => var_ref("font-size-sm"),
            Self::Caption => var_ref("font-size-xs"),
            Self::Title => var_ref("font-size-xl"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared text tone; each tone is a semantic color role.
pub enum TextTone {
    #[default]
    Primary,
    Secondary,
    Accent,
    Success,
    Warning,
    Danger,
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    pub(crate) fn color(self) -> String {
        match self {
            Self::Primary => var_ref("semantic-text-primary"),
            Self::Secondary => var_ref("semantic-text-secondary"),
            Self::Accent => var_ref("semantic-brand-secondary"),
            Self::Success => var_ref("semantic-status-success"),
            Self::Warning => var_ref("semantic-status-warning"),
            Self::Danger => var_ref("semantic-status-error"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared layout gap tokens.
pub enum LayoutGap {
    None,
    Sm,
    #[default]
    Md,
    Lg,
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    pub(crate) fn length(self) -> String {
        var_ref(&format!("spacing-{}", self.token()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared layout padding tokens.
pub enum LayoutPadding {
    None,
    Sm,
    #[default]
    Md,
    Lg,
}

impl LayoutPadding {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    pub(crate) fn length(self) -> String {
        var_ref(&format!("spacing-{}", self.token()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared layout alignment tokens.
pub enum LayoutAlign {
    #[default]
    Stretch,
    Start,
    Center,
    End,
}

impl LayoutAlign {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared layout justification tokens.
pub enum LayoutJustify {
    #[default]
    Start,
    Center,
    Between,
    End,
}

impl LayoutJustify {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::Between => "between",
            Self::End => "end",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Joins `property: value` pairs into an inline `style` attribute.
pub(crate) fn inline_style<V: AsRef<str>>(declarations: &[(&str, V)]) -> String {
    declarations
        .iter()
        .map(|(property, value)| format!("{property}: {};", value.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_is_appended_only_when_present() {
        assert_eq!(merge_layout_class("ui-stack", None), "ui-stack");
        assert_eq!(merge_layout_class("ui-stack", Some("")), "ui-stack");
        assert_eq!(merge_layout_class("ui-stack", Some("page")), "ui-stack page");
    }

    #[test]
    fn inline_style_joins_declarations() {
        let style = inline_style(&[("color", var_ref("semantic-text-primary")), ("gap", "0".into())]);
        assert_eq!(style, "color: var(--harbor-semantic-text-primary); gap: 0;");
    }

    #[test]
    fn button_variants_resolve_to_token_references() {
        let primary = ButtonVariant::Primary.style();
        assert_eq!(primary.background, "var(--harbor-component-button-primary-background)");
        assert_eq!(primary.text, "var(--harbor-component-button-primary-text)");
        for variant in [
            ButtonVariant::Standard,
            ButtonVariant::Secondary,
            ButtonVariant::Quiet,
            ButtonVariant::Danger,
        ] {
            let style = variant.style();
            for value in [&style.background, &style.text, &style.border] {
                assert!(
                    value.starts_with("var(--harbor-") || value == "transparent",
                    "{variant:?}: {value}"
                );
            }
        }
    }

    #[test]
    fn spacing_enums_map_onto_the_spacing_scale() {
        assert_eq!(LayoutGap::Sm.length(), "var(--harbor-spacing-sm)");
        assert_eq!(LayoutPadding::None.length(), "var(--harbor-spacing-none)");
        assert_eq!(ButtonShape::Circle.radius(), "var(--harbor-radius-full)");
    }
}
