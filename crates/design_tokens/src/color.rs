//! sRGB color values and the textual forms accepted at the token boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Reasons a color string is rejected before it reaches the contrast calculator.
pub enum ColorParseError {
    /// Input was empty after trimming.
    #[error("color value is empty")]
    Empty,
    /// Hex form did not have 3 or 6 digits.
    #[error("hex color `{input}` must have 3 or 6 digits, found {digits}")]
    InvalidLength {
        /// Original input.
        input: String,
        /// Number of digits after the optional `#`.
        digits: usize,
    },
    /// Hex form contained a non-hex character.
    #[error("hex color `{input}` contains a non-hex digit")]
    InvalidDigit {
        /// Original input.
        input: String,
    },
    /// `rgb(...)` form was malformed or a channel was outside 0-255.
    #[error("rgb color `{input}` must be `rgb(r, g, b)` with channels 0-255")]
    InvalidRgb {
        /// Original input.
        input: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// A single opaque sRGB color with 8-bit channels.
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Pure white.
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    /// Pure black.
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);

    /// Builds a color from its three channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a packed `0xRRGGBB` literal.
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Parses `#rgb`, `#rrggbb` (the `#` is optional) or `rgb(r, g, b)`.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::Empty);
        }

        let lower = trimmed.to_ascii_lowercase();
        if let Some(body) = lower
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_rgb_channels(body).ok_or_else(|| ColorParseError::InvalidRgb {
                input: input.to_string(),
            });
        }

        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let expanded = normalize_hex_digits(digits).map_err(|err| match err {
            HexShape::Length(len) => ColorParseError::InvalidLength {
                input: input.to_string(),
                digits: len,
            },
            HexShape::Digit => ColorParseError::InvalidDigit {
                input: input.to_string(),
            },
        })?;

        let value = u32::from_str_radix(&expanded, 16).map_err(|_| {
            ColorParseError::InvalidDigit {
                input: input.to_string(),
            }
        })?;
        Ok(Self::hex(value))
    }

    /// Upper-case `#RRGGBB` form.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels mapped into `[0, 1]`.
    pub fn unit_channels(self) -> [f64; 3] {
        [self.r, self.g, self.b].map(|channel| f64::from(channel) / 255.0)
    }
}

enum HexShape {
    Length(usize),
    Digit,
}

/// Expands 3-digit shorthand into the 6-digit form.
fn normalize_hex_digits(digits: &str) -> Result<String, HexShape> {
    if !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(HexShape::Digit);
    }
    match digits.len() {
        3 => Ok(digits.chars().flat_map(|ch| [ch, ch]).collect()),
        6 => Ok(digits.to_string()),
        len => Err(HexShape::Length(len)),
    }
}

fn parse_rgb_channels(body: &str) -> Option<Color> {
    let channels = body
        .split(',')
        .map(|part| part.trim().parse::<u8>().ok())
        .collect::<Option<Vec<_>>>()?;
    match channels.as_slice() {
        [r, g, b] => Some(Color::rgb(*r, *g, *b)),
        _ => None,
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_long_short_and_rgb_forms_to_the_same_color() {
        let long = Color::parse("#AABBCC").expect("long hex");
        let short = Color::parse("#abc").expect("short hex");
        let bare = Color::parse("aabbcc").expect("bare hex");
        let rgb = Color::parse("rgb(170, 187, 204)").expect("rgb");

        assert_eq!(long, Color::rgb(0xAA, 0xBB, 0xCC));
        assert_eq!(short, long);
        assert_eq!(bare, long);
        assert_eq!(rgb, long);
    }

    #[test]
    fn displays_as_upper_case_six_digit_hex() {
        assert_eq!(Color::hex(0x0a1f44).to_string(), "#0A1F44");
        assert_eq!(Color::parse("#fff").unwrap().to_hex(), "#FFFFFF");
    }

    #[test]
    fn rejects_malformed_inputs() {
        assert_eq!(Color::parse("   "), Err(ColorParseError::Empty));
        assert_eq!(
            Color::parse("#abcd"),
            Err(ColorParseError::InvalidLength {
                input: "#abcd".to_string(),
                digits: 4,
            })
        );
        assert!(matches!(
            Color::parse("#GG0000"),
            Err(ColorParseError::InvalidDigit { .. })
        ));
        assert!(matches!(
            Color::parse("rgb(256, 0, 0)"),
            Err(ColorParseError::InvalidRgb { .. })
        ));
        assert!(matches!(
            Color::parse("rgb(1, 2)"),
            Err(ColorParseError::InvalidRgb { .. })
        ));
    }

    #[test]
    fn serde_round_trips_through_hex_strings() {
        let json = serde_json::to_string(&Color::hex(0x14B8A6)).expect("serialize");
        assert_eq!(json, "\"#14B8A6\"");
        let back: Color = serde_json::from_str("\"#14b8a6\"").expect("deserialize");
        assert_eq!(back, Color::hex(0x14B8A6));
    }
}
