//! Leaf value kinds held by the token store.
//!
//! Each kind serializes to the CSS-legal string it is emitted as, so the
//! variable emitter only has to stringify leaves.

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Pixel length, emitted with a `px` suffix.
pub struct Px(pub u16);

impl Px {
    /// CSS length string.
    pub fn css(self) -> String {
        format!("{}px", self.0)
    }
}

impl Serialize for Px {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.css())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Duration in milliseconds, emitted with an `ms` suffix.
pub struct Ms(pub u16);

impl Ms {
    /// CSS time string.
    pub fn css(self) -> String {
        format!("{}ms", self.0)
    }
}

impl Serialize for Ms {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.css())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
/// Unitless numeric font weight.
pub struct FontWeight(pub u16);

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
/// Unitless line-height multiplier.
pub struct LineHeight(pub f32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
/// Unitless stacking order.
pub struct ZIndex(pub u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
/// Verbatim `box-shadow` value.
pub struct Shadow(pub &'static str);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
/// Verbatim timing function.
pub struct Easing(pub &'static str);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Ordered font-family fallback list.
pub struct FontStack(pub &'static [&'static str]);

impl FontStack {
    /// Comma-joined `font-family` value; names containing spaces are quoted.
    pub fn css(self) -> String {
        self.0
            .iter()
            .map(|family| {
                if family.contains(' ') {
                    format!("\"{family}\"")
                } else {
                    (*family).to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Serialize for FontStack {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.css())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn unit_bearing_values_carry_their_suffix() {
        assert_eq!(serde_json::to_string(&Px(16)).unwrap(), "\"16px\"");
        assert_eq!(serde_json::to_string(&Ms(200)).unwrap(), "\"200ms\"");
        assert_eq!(serde_json::to_string(&FontWeight(600)).unwrap(), "600");
        assert_eq!(serde_json::to_string(&LineHeight(1.5)).unwrap(), "1.5");
    }

    #[test]
    fn font_stack_quotes_multi_word_families() {
        let stack = FontStack(&["Inter", "Segoe UI", "sans-serif"]);
        assert_eq!(stack.css(), "Inter, \"Segoe UI\", sans-serif");
    }
}
