//! WCAG 2.x relative luminance, contrast ratio and accessibility checks.

use serde::Serialize;

use crate::color::{Color, ColorParseError};
use crate::theme::ThemeMode;
use crate::tokens::COMPONENT;

/// Minimum ratio used when the caller does not supply one (WCAG AA body text).
pub const DEFAULT_MIN_CONTRAST: f64 = 4.5;

const LINEAR_THRESHOLD: f64 = 0.03928;

fn linearize(channel: f64) -> f64 {
    if channel <= LINEAR_THRESHOLD {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in `[0, 1]`.
pub fn relative_luminance(color: Color) -> f64 {
    let [r, g, b] = color.unit_channels().map(linearize);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Contrast ratio in `[1, 21]`; argument order does not matter.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// True iff the pair reaches `min_ratio` (default [`DEFAULT_MIN_CONTRAST`]).
pub fn validate_accessibility(foreground: Color, background: Color, min_ratio: Option<f64>) -> bool {
    contrast_ratio(foreground, background) >= min_ratio.unwrap_or(DEFAULT_MIN_CONTRAST)
}

/// Parses both inputs, then computes [`contrast_ratio`].
pub fn contrast_ratio_hex(a: &str, b: &str) -> Result<f64, ColorParseError> {
    Ok(contrast_ratio(Color::parse(a)?, Color::parse(b)?))
}

/// Parses both inputs, then runs [`validate_accessibility`].
pub fn validate_accessibility_hex(
    foreground: &str,
    background: &str,
    min_ratio: Option<f64>,
) -> Result<bool, ColorParseError> {
    Ok(validate_accessibility(
        Color::parse(foreground)?,
        Color::parse(background)?,
        min_ratio,
    ))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
/// WCAG conformance thresholds.
pub enum WcagLevel {
    /// Large text at AA (3:1).
    AaLarge,
    /// Body text at AA (4.5:1).
    #[default]
    Aa,
    /// Large text at AAA (4.5:1).
    AaaLarge,
    /// Body text at AAA (7:1).
    Aaa,
}

impl WcagLevel {
    /// Minimum ratio required by the level.
    pub const fn min_ratio(self) -> f64 {
        match self {
            Self::AaLarge => 3.0,
            Self::Aa | Self::AaaLarge => 4.5,
            Self::Aaa => 7.0,
        }
    }

    /// Stable token used in reports and config files.
    pub const fn token(self) -> &'static str {
        match self {
            Self::AaLarge => "aa-large",
            Self::Aa => "aa",
            Self::AaaLarge => "aaa-large",
            Self::Aaa => "aaa",
        }
    }

    /// Parses a [`WcagLevel::token`] string.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim() {
            "aa-large" => Some(Self::AaLarge),
            "aa" => Some(Self::Aa),
            "aaa-large" => Some(Self::AaaLarge),
            "aaa" => Some(Self::Aaa),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Outcome of checking one foreground/background pair.
pub struct ContrastCheck {
    pub foreground_role: &'static str,
    pub background_role: &'static str,
    pub foreground: Color,
    pub background: Color,
    pub ratio: f64,
    pub level: WcagLevel,
    pub passes: bool,
}

/// Checks every declared text pair of the mode's semantic layer, plus the
/// fixed component pairs, against `level`.
pub fn audit_text_pairs(mode: ThemeMode, level: WcagLevel) -> Vec<ContrastCheck> {
    mode.semantic_tokens()
        .text_pairs()
        .into_iter()
        .chain(COMPONENT.text_pairs())
        .map(|pair| {
            let ratio = contrast_ratio(pair.foreground, pair.background);
            ContrastCheck {
                foreground_role: pair.foreground_role,
                background_role: pair.background_role,
                foreground: pair.foreground,
                background: pair.background,
                ratio,
                level,
                passes: ratio >= level.min_ratio(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tokens::DARK;

    const SAMPLE: &[&str] = &[
        "#000000", "#FFFFFF", "#0A1F44", "#14B8A6", "#777777", "#AAAAAA", "#B91C1C", "#F8FAFC",
    ];

    #[test]
    fn identical_colors_have_ratio_exactly_one() {
        for hex in SAMPLE {
            let color = Color::parse(hex).unwrap();
            assert_eq!(contrast_ratio(color, color), 1.0, "{hex}");
        }
    }

    #[test]
    fn black_and_white_reach_the_maximum_in_either_order() {
        let forward = contrast_ratio_hex("#000000", "#FFFFFF").unwrap();
        let backward = contrast_ratio_hex("#FFFFFF", "#000000").unwrap();
        assert!((forward - 21.0).abs() < 0.1, "{forward}");
        assert!((backward - 21.0).abs() < 0.1, "{backward}");
    }

    #[test]
    fn ratio_is_symmetric_and_bounded() {
        for a in SAMPLE {
            for b in SAMPLE {
                let ab = contrast_ratio_hex(a, b).unwrap();
                let ba = contrast_ratio_hex(b, a).unwrap();
                assert_eq!(ab, ba, "{a} vs {b}");
                assert!((1.0..=21.0 + 1e-9).contains(&ab), "{a} vs {b}: {ab}");
            }
        }
    }

    #[test]
    fn shorthand_hex_matches_long_form() {
        let short = Color::parse("#fa0").unwrap();
        let long = Color::parse("#FFAA00").unwrap();
        assert_eq!(relative_luminance(short), relative_luminance(long));
        assert_eq!(
            contrast_ratio_hex("#fa0", "#fff").unwrap(),
            contrast_ratio_hex("#FFAA00", "#FFFFFF").unwrap()
        );
    }

    #[test]
    fn luminance_endpoints() {
        assert_eq!(relative_luminance(Color::BLACK), 0.0);
        assert!((relative_luminance(Color::WHITE) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn default_threshold_is_aa_body_text() {
        assert!(validate_accessibility_hex("#000000", "#FFFFFF", None).unwrap());
        assert!(contrast_ratio_hex("#AAAAAA", "#FFFFFF").unwrap() < 4.5);
        assert!(!validate_accessibility_hex("#AAAAAA", "#FFFFFF", None).unwrap());
    }

    #[test]
    fn explicit_threshold_overrides_default() {
        let ratio = contrast_ratio_hex("#777777", "#FFFFFF").unwrap();
        assert!(ratio >= 3.0);
        assert!(validate_accessibility_hex("#777777", "#FFFFFF", Some(3.0)).unwrap());
        assert_eq!(
            validate_accessibility_hex("#777777", "#FFFFFF", None).unwrap(),
            ratio >= DEFAULT_MIN_CONTRAST
        );
    }

    #[test]
    fn malformed_input_is_rejected_before_calculation() {
        assert!(contrast_ratio_hex("#12", "#FFFFFF").is_err());
        assert!(validate_accessibility_hex("#FFFFFF", "navy", None).is_err());
    }

    #[test]
    fn wcag_levels_round_trip_through_tokens() {
        for level in [WcagLevel::AaLarge, WcagLevel::Aa, WcagLevel::AaaLarge, WcagLevel::Aaa] {
            assert_eq!(WcagLevel::from_token(level.token()), Some(level));
        }
        assert_eq!(WcagLevel::from_token("a"), None);
        assert_eq!(WcagLevel::default().min_ratio(), DEFAULT_MIN_CONTRAST);
    }

    #[test]
    fn built_in_text_pairs_pass_aa_in_both_modes() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let checks = audit_text_pairs(mode, WcagLevel::Aa);
            assert!(!checks.is_empty());
            for check in checks {
                assert!(
                    check.passes,
                    "{mode:?}: {} on {} is {:.2}",
                    check.foreground_role, check.background_role, check.ratio
                );
            }
        }
    }

    #[test]
    fn audit_covers_component_fills() {
        let checks = audit_text_pairs(ThemeMode::Dark, WcagLevel::Aa);
        let covers = |foreground: &str, background: &str| {
            checks
                .iter()
                .any(|c| c.foreground_role == foreground && c.background_role == background)
        };
        assert!(covers("component.transfer.selected-text", "component.transfer.selected-background"));
        assert!(covers("component.metric.trend-up-inverse", "component.card.navy-background"));
        assert!(covers("component.metric.trend-down", "component.card.white-background"));
        assert!(covers("status.success", "surface.default"));
    }

    #[test]
    fn selected_transfer_rows_need_their_own_text_color() {
        let ratio = contrast_ratio(*DARK.text.primary, *COMPONENT.transfer.selected_background);
        assert!(ratio < 1.1);
        let ratio = contrast_ratio(
            *COMPONENT.transfer.selected_text,
            *COMPONENT.transfer.selected_background,
        );
        assert!(ratio >= DEFAULT_MIN_CONTRAST);
    }

    #[test]
    fn navy_card_trends_pass_aa() {
        let navy = *COMPONENT.card.navy_background;
        for color in [
            COMPONENT.metric.trend_up_inverse,
            COMPONENT.metric.trend_down_inverse,
            COMPONENT.metric.trend_flat_inverse,
        ] {
            assert!(contrast_ratio(*color, navy) >= DEFAULT_MIN_CONTRAST);
        }
    }
}
