//! Theme objects built from the token store for a light or dark mode.
//!
//! A [`Theme`] is the toolkit-facing view of the tokens: it serializes to the
//! camelCase JSON shape theme providers expect and is rebuilt on every call.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;
use crate::tokens::{SemanticTokens, BASE, DARK, SEMANTIC};

/// Corner radius applied by the light theme.
pub const LIGHT_BORDER_RADIUS: u16 = 12;
/// Corner radius applied by the dark theme.
pub const DARK_BORDER_RADIUS: u16 = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme mode `{0}`; expected `light` or `dark`")]
/// Rejected [`ThemeMode`] string.
pub struct ThemeModeParseError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Color scheme a theme is built for.
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Lower-case token used in JSON, the `data-theme` attribute and file names.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The other mode.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Semantic layer that backs the mode.
    pub fn semantic_tokens(self) -> &'static SemanticTokens {
        match self {
            Self::Light => &SEMANTIC,
            Self::Dark => &DARK,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ThemeModeParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteColor {
    pub main: Color,
    pub light: Color,
    pub dark: Color,
    pub contrast_text: Color,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundPalette {
    pub default: Color,
    pub paper: Color,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPalette {
    pub primary: Color,
    pub secondary: Color,
    pub disabled: Color,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub mode: ThemeMode,
    pub primary: PaletteColor,
    pub secondary: PaletteColor,
    pub error: PaletteColor,
    pub warning: PaletteColor,
    pub success: PaletteColor,
    pub background: BackgroundPalette,
    pub text: TextPalette,
    pub divider: Color,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonTypography {
    pub text_transform: String,
    pub font_weight: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: String,
    pub font_family_mono: String,
    pub font_size: u16,
    pub font_weight_regular: u16,
    pub font_weight_medium: u16,
    pub font_weight_bold: u16,
    pub button: ButtonTypography,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    pub border_radius: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonDefaults {
    pub border_radius: u16,
    pub disable_elevation: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDefaults {
    pub border_radius: u16,
    pub box_shadow: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Per-component overrides that vary by mode.
pub struct ComponentDefaults {
    pub button: ButtonDefaults,
    pub card: CardDefaults,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Complete theme for one mode.
pub struct Theme {
    pub palette: Palette,
    pub typography: Typography,
    pub shape: Shape,
    pub components: ComponentDefaults,
}

impl Theme {
    pub fn mode(&self) -> ThemeMode {
        self.palette.mode
    }

    /// Pretty-printed camelCase JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn palette_color(main: Color, light: Color, dark: Color, contrast_text: Color) -> PaletteColor {
    PaletteColor {
        main,
        light,
        dark,
        contrast_text,
    }
}

fn palette(mode: ThemeMode) -> Palette {
    let roles = mode.semantic_tokens();
    let c = &BASE.color;
    let (primary, secondary, error, warning, success) = match mode {
        ThemeMode::Light => (
            palette_color(c.navy.s900, c.navy.s700, c.navy.s950, c.white),
            palette_color(c.teal.s600, c.teal.s400, c.teal.s800, c.white),
            palette_color(c.red.s700, c.red.s500, c.red.s800, c.white),
            palette_color(c.amber.s700, c.amber.s500, c.amber.s800, c.white),
            palette_color(c.green.s700, c.green.s500, c.green.s800, c.white),
        ),
        ThemeMode::Dark => (
            palette_color(c.teal.s400, c.teal.s300, c.teal.s600, c.navy.s950),
            palette_color(c.navy.s300, c.navy.s200, c.navy.s500, c.navy.s950),
            palette_color(c.red.s400, c.red.s300, c.red.s600, c.navy.s950),
            palette_color(c.amber.s400, c.amber.s300, c.amber.s600, c.navy.s950),
            palette_color(c.green.s400, c.green.s300, c.green.s600, c.navy.s950),
        ),
    };

    Palette {
        mode,
        primary,
        secondary,
        error,
        warning,
        success,
        background: BackgroundPalette {
            default: *roles.surface.default,
            paper: *roles.surface.paper,
        },
        text: TextPalette {
            primary: *roles.text.primary,
            secondary: *roles.text.secondary,
            disabled: *roles.text.disabled,
        },
        divider: *roles.border.default,
    }
}

fn typography() -> Typography {
    let font = &BASE.font;
    Typography {
        font_family: font.family.sans.css(),
        font_family_mono: font.family.mono.css(),
        font_size: font.size.sm.0,
        font_weight_regular: font.weight.regular.0,
        font_weight_medium: font.weight.medium.0,
        font_weight_bold: font.weight.bold.0,
        button: ButtonTypography {
            text_transform: "none".to_string(),
            font_weight: font.weight.semibold.0,
        },
    }
}

fn component_defaults(mode: ThemeMode) -> ComponentDefaults {
    match mode {
        ThemeMode::Light => ComponentDefaults {
            button: ButtonDefaults {
                border_radius: BASE.radius.md.0,
                disable_elevation: true,
            },
            card: CardDefaults {
                border_radius: LIGHT_BORDER_RADIUS,
                box_shadow: BASE.shadow.md.0.to_string(),
            },
        },
        ThemeMode::Dark => ComponentDefaults {
            button: ButtonDefaults {
                border_radius: BASE.radius.sm.0,
                disable_elevation: true,
            },
            card: CardDefaults {
                border_radius: DARK_BORDER_RADIUS,
                box_shadow: BASE.shadow.none.0.to_string(),
            },
        },
    }
}

/// Builds the theme for `mode`.
pub fn create_theme(mode: ThemeMode) -> Theme {
    let border_radius = match mode {
        ThemeMode::Light => LIGHT_BORDER_RADIUS,
        ThemeMode::Dark => DARK_BORDER_RADIUS,
    };

    Theme {
        palette: palette(mode),
        typography: typography(),
        shape: Shape { border_radius },
        components: component_defaults(mode),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn palette_mode_matches_the_requested_mode() {
        assert_eq!(create_theme(ThemeMode::Light).palette.mode, ThemeMode::Light);
        assert_eq!(create_theme(ThemeMode::Dark).palette.mode, ThemeMode::Dark);
    }

    #[test]
    fn modes_use_fixed_radii_and_backgrounds() {
        let light = create_theme(ThemeMode::Light);
        let dark = create_theme(ThemeMode::Dark);
        assert_eq!(light.shape.border_radius, 12);
        assert_eq!(dark.shape.border_radius, 8);
        assert_eq!(light.palette.background.default.to_hex(), "#F8FAFC");
        assert_eq!(dark.palette.background.default.to_hex(), "#0B1426");
        assert_ne!(light.components, dark.components);
    }

    #[test]
    fn theme_serializes_to_camel_case_json() {
        let value = serde_json::to_value(create_theme(ThemeMode::Dark)).unwrap();
        assert_eq!(value["palette"]["mode"], "dark");
        assert_eq!(value["palette"]["primary"]["contrastText"], "#0B1426");
        assert_eq!(value["typography"]["button"]["textTransform"], "none");
        assert_eq!(value["shape"]["borderRadius"], 8);
        assert_eq!(value["components"]["card"]["borderRadius"], 8);
    }

    #[test]
    fn theme_round_trips_through_json() {
        let theme = create_theme(ThemeMode::Light);
        let json = theme.to_json_pretty().unwrap();
        let parsed: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, theme);
    }

    #[test]
    fn creation_is_deterministic() {
        assert_eq!(create_theme(ThemeMode::Dark), create_theme(ThemeMode::Dark));
    }

    #[test]
    fn mode_strings_parse_case_insensitively() {
        assert_eq!("Dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(" light ".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert_eq!(
            "sepia".parse::<ThemeMode>(),
            Err(ThemeModeParseError("sepia".to_string()))
        );
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
    }
}
