//! Harbor component library.
//!
//! Primitives and composite components are styled exclusively through
//! `var(--harbor-*)` references produced by [`design_tokens`], so every
//! color, spacing and radius follows the injected token stylesheet and the
//! active theme. Markup carries the stable `data-ui-primitive`,
//! `data-ui-kind` and `data-ui-variant` attributes for styling hooks and
//! tests.
//!
//! Applications mount [`ThemeProvider`] once, call
//! [`inject_design_tokens`] and [`inject_component_styles`] at boot and
//! compose the components below.

mod component_styles;
mod components;
mod icon;
mod primitives;
mod style_sheet;
mod theme_provider;

pub use component_styles::{
    component_stylesheet, inject_component_styles, inject_component_styles_into,
    COMPONENT_STYLE_ELEMENT_ID, VISUALLY_HIDDEN_CLASS,
};
pub use components::{
    avatar_face, avatar_overflow, clamp_percent, initials, next_tab_index, previous_tab_index,
    sparkline_points, Avatar, AvatarEntry, AvatarFace, AvatarGroup, AvatarSize, Card, CardHeader,
    CardStyle, CardVariant, Loader, LoaderSize, LoaderVariant, MetricCard, NavBarState, NavItem,
    NavMenu, NavSelection, TabItem, Tabs, TopNavBar, TransferItem, TransferList, TransferSide,
    TransferState, Trend, SPARKLINE_HEIGHT, SPARKLINE_WIDTH,
};
pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Badge, Button, ButtonShape, ButtonSize, ButtonVariant, CheckboxField, Cluster, Elevation,
    EmptyState, FieldVariant, Grid, Heading, IconButton, LayoutAlign, LayoutGap, LayoutJustify,
    LayoutPadding, MenuItem, MenuSeparator, MenuSurface, Panel, Stack, Surface, SurfaceVariant,
    Text, TextField, TextRole, TextTone,
};
pub use style_sheet::{
    inject_design_tokens, inject_design_tokens_into, inject_style_sheet, DocumentHead, MemoryHead,
    StyleHost, StyleInjectionError, StyleNode,
};
pub use theme_provider::{
    apply_theme_attribute, use_theme, ThemeContext, ThemeProvider, THEME_ATTRIBUTE,
};

/// Convenience imports for application crates.
pub mod prelude {
    pub use crate::{
        use_theme, Avatar, AvatarEntry, AvatarGroup, AvatarSize, Badge, Button, ButtonShape,
        ButtonSize, ButtonVariant, Card, CardHeader, CardVariant, CheckboxField, Cluster,
        Elevation, EmptyState, FieldVariant, Grid, Heading, Icon, IconButton, IconName, IconSize,
        LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, Loader, LoaderSize, LoaderVariant,
        MenuItem, MenuSeparator, MenuSurface, MetricCard, NavItem, NavMenu, NavSelection, Panel,
        Stack, Surface, SurfaceVariant, TabItem, Tabs, Text, TextField, TextRole, TextTone,
        ThemeProvider, TopNavBar, TransferItem, TransferList, Trend,
    };
    pub use design_tokens::{ThemeMode, TokenStore};
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use design_tokens::{css_variables, TokenStore};

    const SOURCES: &[(&str, &str)] = &[
        ("component_styles.rs", include_str!("component_styles.rs")),
        ("icon.rs", include_str!("icon.rs")),
        ("primitives/mod.rs", include_str!("primitives/mod.rs")),
        ("primitives/controls.rs", include_str!("primitives/controls.rs")),
        ("primitives/data_display.rs", include_str!("primitives/data_display.rs")),
        ("primitives/layout.rs", include_str!("primitives/layout.rs")),
        ("primitives/overlays.rs", include_str!("primitives/overlays.rs")),
        ("components/avatar.rs", include_str!("components/avatar.rs")),
        ("components/card.rs", include_str!("components/card.rs")),
        ("components/loader.rs", include_str!("components/loader.rs")),
        ("components/metric_card.rs", include_str!("components/metric_card.rs")),
        ("components/nav_bar.rs", include_str!("components/nav_bar.rs")),
        ("components/tabs.rs", include_str!("components/tabs.rs")),
        ("components/transfer_list.rs", include_str!("components/transfer_list.rs")),
    ];

    fn referenced_tokens(source: &str) -> Vec<String> {
        let mut names = Vec::new();
        let mut rest = source;
        while let Some(start) = rest.find("var_ref(\"") {
            rest = &rest[start + "var_ref(\"".len()..];
            if let Some(end) = rest.find('"') {
                names.push(rest[..end].to_string());
                rest = &rest[end..];
            }
        }
        names
    }

    #[test]
    fn every_literal_token_reference_resolves() {
        let defined: BTreeSet<String> = css_variables(&TokenStore::default())
            .unwrap()
            .into_iter()
            .map(|variable| variable.name)
            .collect();

        let mut missing = Vec::new();
        for (file, source) in SOURCES {
            for name in referenced_tokens(source) {
                if !defined.contains(&format!("--harbor-{name}")) {
                    missing.push(format!("{file}: {name}"));
                }
            }
        }
        assert!(missing.is_empty(), "unresolved token references: {missing:?}");
    }

    #[test]
    fn component_sources_carry_no_hex_colors() {
        for (file, source) in SOURCES {
            let code = source.split("#[cfg(test)]").next().unwrap_or(source);
            for line in code.lines() {
                let hex = line.find("\"#").map(|at| &line[at + 2..]).filter(|tail| {
                    let digits = tail.chars().take_while(|c| c.is_ascii_hexdigit()).count();
                    matches!(digits, 3 | 6 | 8) && tail[digits..].starts_with('"')
                });
                assert!(hex.is_none(), "{file} hardcodes a color: {line}");
            }
        }
    }
}
