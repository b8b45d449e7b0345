//! Primitive design values. Every other layer aliases into this one.

use serde::Serialize;

use crate::color::Color;
use crate::values::{Easing, FontStack, FontWeight, LineHeight, Ms, Px, Shadow, ZIndex};

#[derive(Debug, Serialize)]
/// Eleven-step tonal scale from lightest (50) to darkest (950).
pub struct ColorScale {
    #[serde(rename = "50")]
    pub s50: Color,
    #[serde(rename = "100")]
    pub s100: Color,
    #[serde(rename = "200")]
    pub s200: Color,
    #[serde(rename = "300")]
    pub s300: Color,
    #[serde(rename = "400")]
    pub s400: Color,
    #[serde(rename = "500")]
    pub s500: Color,
    #[serde(rename = "600")]
    pub s600: Color,
    #[serde(rename = "700")]
    pub s700: Color,
    #[serde(rename = "800")]
    pub s800: Color,
    #[serde(rename = "900")]
    pub s900: Color,
    #[serde(rename = "950")]
    pub s950: Color,
}

impl ColorScale {
    /// Shade lookup by its numeric step.
    pub fn shade(&self, step: u16) -> Option<Color> {
        let color = match step {
            50 => self.s50,
            100 => self.s100,
            200 => self.s200,
            300 => self.s300,
            400 => self.s400,
            500 => self.s500,
            600 => self.s600,
            700 => self.s700,
            800 => self.s800,
            900 => self.s900,
            950 => self.s950,
            _ => return None,
        };
        Some(color)
    }
}

#[derive(Debug, Serialize)]
pub struct BaseColors {
    pub white: Color,
    pub black: Color,
    pub navy: ColorScale,
    pub gray: ColorScale,
    pub teal: ColorScale,
    pub red: ColorScale,
    pub amber: ColorScale,
    pub green: ColorScale,
}

#[derive(Debug, Serialize)]
pub struct SpacingScale {
    pub none: Px,
    #[serde(rename = "2xs")]
    pub xxs: Px,
    pub xs: Px,
    pub sm: Px,
    pub md: Px,
    pub lg: Px,
    pub xl: Px,
    #[serde(rename = "2xl")]
    pub xxl: Px,
    #[serde(rename = "3xl")]
    pub xxxl: Px,
}

#[derive(Debug, Serialize)]
pub struct FontFamilies {
    pub sans: FontStack,
    pub mono: FontStack,
}

#[derive(Debug, Serialize)]
pub struct FontSizes {
    pub xs: Px,
    pub sm: Px,
    pub md: Px,
    pub lg: Px,
    pub xl: Px,
    #[serde(rename = "2xl")]
    pub xxl: Px,
    #[serde(rename = "3xl")]
    pub xxxl: Px,
}

#[derive(Debug, Serialize)]
pub struct FontWeights {
    pub regular: FontWeight,
    pub medium: FontWeight,
    pub semibold: FontWeight,
    pub bold: FontWeight,
}

#[derive(Debug, Serialize)]
pub struct LineHeights {
    pub tight: LineHeight,
    pub normal: LineHeight,
    pub relaxed: LineHeight,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct FontTokens {
    pub family: FontFamilies,
    pub size: FontSizes,
    pub weight: FontWeights,
    pub line_height: LineHeights,
}

#[derive(Debug, Serialize)]
pub struct RadiusScale {
    pub none: Px,
    pub sm: Px,
    pub md: Px,
    pub lg: Px,
    pub xl: Px,
    pub full: Px,
}

#[derive(Debug, Serialize)]
pub struct ShadowScale {
    pub none: Shadow,
    pub sm: Shadow,
    pub md: Shadow,
    pub lg: Shadow,
}

#[derive(Debug, Serialize)]
pub struct Durations {
    pub fast: Ms,
    pub normal: Ms,
    pub slow: Ms,
}

#[derive(Debug, Serialize)]
pub struct Easings {
    pub standard: Easing,
    pub emphasized: Easing,
}

#[derive(Debug, Serialize)]
pub struct MotionTokens {
    pub duration: Durations,
    pub easing: Easings,
}

#[derive(Debug, Serialize)]
pub struct ZIndexScale {
    pub base: ZIndex,
    pub dropdown: ZIndex,
    pub sticky: ZIndex,
    pub overlay: ZIndex,
    pub modal: ZIndex,
    pub toast: ZIndex,
}

#[derive(Debug, Serialize)]
pub struct BreakpointScale {
    pub sm: Px,
    pub md: Px,
    pub lg: Px,
    pub xl: Px,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Root of the primitive layer.
pub struct BaseTokens {
    pub color: BaseColors,
    pub spacing: SpacingScale,
    pub font: FontTokens,
    pub radius: RadiusScale,
    pub shadow: ShadowScale,
    pub motion: MotionTokens,
    pub z_index: ZIndexScale,
    pub breakpoint: BreakpointScale,
}

/// The primitive layer.
pub static BASE: BaseTokens = BaseTokens {
    color: BaseColors {
        white: Color::WHITE,
        black: Color::BLACK,
        navy: ColorScale {
            s50: Color::hex(0xEEF2F8),
            s100: Color::hex(0xD9E2F0),
            s200: Color::hex(0xB3C4E0),
            s300: Color::hex(0x8AA3CC),
            s400: Color::hex(0x5E7FB5),
            s500: Color::hex(0x3D5F99),
            s600: Color::hex(0x2C4A7E),
            s700: Color::hex(0x1F3866),
            s800: Color::hex(0x152B52),
            s900: Color::hex(0x0A1F44),
            s950: Color::hex(0x0B1426),
        },
        gray: ColorScale {
            s50: Color::hex(0xF8FAFC),
            s100: Color::hex(0xF1F5F9),
            s200: Color::hex(0xE2E8F0),
            s300: Color::hex(0xCBD5E1),
            s400: Color::hex(0x94A3B8),
            s500: Color::hex(0x64748B),
            s600: Color::hex(0x475569),
            s700: Color::hex(0x334155),
            s800: Color::hex(0x1E293B),
            s900: Color::hex(0x0F172A),
            s950: Color::hex(0x020617),
        },
        teal: ColorScale {
            s50: Color::hex(0xF0FDFA),
            s100: Color::hex(0xCCFBF1),
            s200: Color::hex(0x99F6E4),
            s300: Color::hex(0x5EEAD4),
            s400: Color::hex(0x2DD4BF),
            s500: Color::hex(0x14B8A6),
            s600: Color::hex(0x0D9488),
            s700: Color::hex(0x0F766E),
            s800: Color::hex(0x115E59),
            s900: Color::hex(0x134E4A),
            s950: Color::hex(0x042F2E),
        },
        red: ColorScale {
            s50: Color::hex(0xFEF2F2),
            s100: Color::hex(0xFEE2E2),
            s200: Color::hex(0xFECACA),
            s300: Color::hex(0xFCA5A5),
            s400: Color::hex(0xF87171),
            s500: Color::hex(0xEF4444),
            s600: Color::hex(0xDC2626),
            s700: Color::hex(0xB91C1C),
            s800: Color::hex(0x991B1B),
            s900: Color::hex(0x7F1D1D),
            s950: Color::hex(0x450A0A),
        },
        amber: ColorScale {
            s50: Color::hex(0xFFFBEB),
            s100: Color::hex(0xFEF3C7),
            s200: Color::hex(0xFDE68A),
            s300: Color::hex(0xFCD34D),
            s400: Color::hex(0xFBBF24),
            s500: Color::hex(0xF59E0B),
            s600: Color::hex(0xD97706),
            s700: Color::hex(0xB45309),
            s800: Color::hex(0x92400E),
            s900: Color::hex(0x78350F),
            s950: Color::hex(0x451A03),
        },
        green: ColorScale {
            s50: Color::hex(0xF0FDF4),
            s100: Color::hex(0xDCFCE7),
            s200: Color::hex(0xBBF7D0),
            s300: Color::hex(0x86EFAC),
            s400: Color::hex(0x4ADE80),
            s500: Color::hex(0x22C55E),
            s600: Color::hex(0x16A34A),
            s700: Color::hex(0x15803D),
            s800: Color::hex(0x166534),
            s900: Color::hex(0x14532D),
            s950: Color::hex(0x052E16),
        },
    },
    spacing: SpacingScale {
        none: Px(0),
        xxs: Px(2),
        xs: Px(4),
        sm: Px(8),
        md: Px(16),
        lg: Px(24),
        xl: Px(32),
        xxl: Px(48),
        xxxl: Px(64),
    },
    font: FontTokens {
        family: FontFamilies {
            sans: FontStack(&["Inter", "Segoe UI", "Roboto", "Helvetica Neue", "sans-serif"]),
            mono: FontStack(&["JetBrains Mono", "SFMono-Regular", "Menlo", "monospace"]),
        },
        size: FontSizes {
            xs: Px(12),
            sm: Px(14),
            md: Px(16),
            lg: Px(18),
            xl: Px(20),
            xxl: Px(24),
            xxxl: Px(30),
        },
        weight: FontWeights {
            regular: FontWeight(400),
            medium: FontWeight(500),
            semibold: FontWeight(600),
            bold: FontWeight(700),
        },
        line_height: LineHeights {
            tight: LineHeight(1.25),
            normal: LineHeight(1.5),
            relaxed: LineHeight(1.75),
        },
    },
    radius: RadiusScale {
        none: Px(0),
        sm: Px(4),
        md: Px(8),
        lg: Px(12),
        xl: Px(16),
        full: Px(9999),
    },
    shadow: ShadowScale {
        none: Shadow("none"),
        sm: Shadow("0 1px 2px rgba(10, 31, 68, 0.08)"),
        md: Shadow("0 4px 12px rgba(10, 31, 68, 0.12)"),
        lg: Shadow("0 12px 32px rgba(10, 31, 68, 0.18)"),
    },
    motion: MotionTokens {
        duration: Durations {
            fast: Ms(120),
            normal: Ms(200),
            slow: Ms(320),
        },
        easing: Easings {
            standard: Easing("cubic-bezier(0.2, 0, 0, 1)"),
            emphasized: Easing("cubic-bezier(0.3, 0, 0, 1.2)"),
        },
    },
    z_index: ZIndexScale {
        base: ZIndex(0),
        dropdown: ZIndex(1000),
        sticky: ZIndex(1100),
        overlay: ZIndex(1300),
        modal: ZIndex(1400),
        toast: ZIndex(1500),
    },
    breakpoint: BreakpointScale {
        sm: Px(600),
        md: Px(900),
        lg: Px(1200),
        xl: Px(1536),
    },
};
