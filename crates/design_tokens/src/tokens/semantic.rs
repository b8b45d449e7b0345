//! Contextual color roles. Every role is a reference into [`BASE`], so a
//! missing primitive fails to compile instead of falling back at runtime.

use serde::Serialize;

use super::base::BASE;
use crate::color::Color;

/// Alias of a primitive color.
pub type ColorRef = &'static Color;

#[derive(Debug, Serialize)]
pub struct TextRoles {
    pub primary: ColorRef,
    pub secondary: ColorRef,
    pub disabled: ColorRef,
    pub inverse: ColorRef,
    pub link: ColorRef,
}

#[derive(Debug, Serialize)]
pub struct SurfaceRoles {
    pub default: ColorRef,
    pub paper: ColorRef,
    pub raised: ColorRef,
    pub sunken: ColorRef,
    pub inverse: ColorRef,
}

#[derive(Debug, Serialize)]
pub struct BorderRoles {
    pub default: ColorRef,
    pub strong: ColorRef,
    pub focus: ColorRef,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BrandRoles {
    pub primary: ColorRef,
    pub primary_hover: ColorRef,
    pub secondary: ColorRef,
    pub on_primary: ColorRef,
}

#[derive(Debug, Serialize)]
pub struct StatusRoles {
    pub error: ColorRef,
    pub warning: ColorRef,
    pub success: ColorRef,
    pub info: ColorRef,
}

#[derive(Debug, Serialize)]
pub struct FocusRoles {
    pub ring: ColorRef,
}

#[derive(Debug, Serialize)]
/// Root of a semantic layer. The light and dark layers share this shape so
/// their variables share names.
pub struct SemanticTokens {
    pub text: TextRoles,
    pub surface: SurfaceRoles,
    pub border: BorderRoles,
    pub brand: BrandRoles,
    pub status: StatusRoles,
    pub focus: FocusRoles,
}

/// A foreground/background pairing the semantic layer promises to keep readable.
#[derive(Debug, Clone, Copy)]
pub struct TextPair {
    /// Dotted role path of the foreground, e.g. `text.primary`.
    pub foreground_role: &'static str,
    /// Dotted role path of the background.
    pub background_role: &'static str,
    pub foreground: Color,
    pub background: Color,
}

impl SemanticTokens {
    /// Text/surface pairs that must meet body-text contrast.
    pub fn text_pairs(&self) -> Vec<TextPair> {
        let pair = |foreground_role, foreground: ColorRef, background_role, background: ColorRef| {
            TextPair {
                foreground_role,
                background_role,
                foreground: *foreground,
                background: *background,
            }
        };

        vec![
            pair("text.primary", self.text.primary, "surface.default", self.surface.default),
            pair("text.primary", self.text.primary, "surface.paper", self.surface.paper),
            pair("text.secondary", self.text.secondary, "surface.default", self.surface.default),
            pair("text.secondary", self.text.secondary, "surface.paper", self.surface.paper),
            pair("text.link", self.text.link, "surface.paper", self.surface.paper),
            pair("status.error", self.status.error, "surface.paper", self.surface.paper),
            pair("status.error", self.status.error, "surface.default", self.surface.default),
            pair("status.success", self.status.success, "surface.default", self.surface.default),
            pair("brand.on-primary", self.brand.on_primary, "brand.primary", self.brand.primary),
        ]
    }
}

/// Light-mode semantic layer.
pub static SEMANTIC: SemanticTokens = SemanticTokens {
    text: TextRoles {
        primary: &BASE.color.navy.s900,
        secondary: &BASE.color.gray.s600,
        disabled: &BASE.color.gray.s400,
        inverse: &BASE.color.white,
        link: &BASE.color.navy.s600,
    },
    surface: SurfaceRoles {
        default: &BASE.color.gray.s50,
        paper: &BASE.color.white,
        raised: &BASE.color.white,
        sunken: &BASE.color.gray.s100,
        inverse: &BASE.color.navy.s900,
    },
    border: BorderRoles {
        default: &BASE.color.gray.s200,
        strong: &BASE.color.gray.s400,
        focus: &BASE.color.teal.s600,
    },
    brand: BrandRoles {
        primary: &BASE.color.navy.s900,
        primary_hover: &BASE.color.navy.s700,
        secondary: &BASE.color.teal.s600,
        on_primary: &BASE.color.white,
    },
    status: StatusRoles {
        error: &BASE.color.red.s700,
        warning: &BASE.color.amber.s700,
        success: &BASE.color.green.s700,
        info: &BASE.color.navy.s600,
    },
    focus: FocusRoles {
        ring: &BASE.color.teal.s500,
    },
};

/// Dark-mode semantic layer.
pub static DARK: SemanticTokens = SemanticTokens {
    text: TextRoles {
        primary: &BASE.color.gray.s50,
        secondary: &BASE.color.gray.s300,
        disabled: &BASE.color.gray.s500,
        inverse: &BASE.color.navy.s900,
        link: &BASE.color.teal.s300,
    },
    surface: SurfaceRoles {
        default: &BASE.color.navy.s950,
        paper: &BASE.color.navy.s900,
        raised: &BASE.color.navy.s800,
        sunken: &BASE.color.gray.s950,
        inverse: &BASE.color.gray.s50,
    },
    border: BorderRoles {
        default: &BASE.color.navy.s700,
        strong: &BASE.color.navy.s500,
        focus: &BASE.color.teal.s400,
    },
    brand: BrandRoles {
        primary: &BASE.color.teal.s400,
        primary_hover: &BASE.color.teal.s300,
        secondary: &BASE.color.navy.s300,
        on_primary: &BASE.color.navy.s950,
    },
    status: StatusRoles {
        error: &BASE.color.red.s400,
        warning: &BASE.color.amber.s400,
        success: &BASE.color.green.s400,
        info: &BASE.color.navy.s300,
    },
    focus: FocusRoles {
        ring: &BASE.color.teal.s400,
    },
};
