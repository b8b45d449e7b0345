//! The token store: primitive, semantic, component and dark-mode layers.
//!
//! All layers are `static` and never mutated. Semantic and component values
//! borrow from [`BASE`] rather than copying it.

mod base;
mod component;
mod semantic;

pub use base::*;
pub use component::*;
pub use semantic::*;

#[derive(Debug, Clone, Copy)]
/// Handle over the four layers consumed by the emitter and theme factory.
pub struct TokenStore {
    pub base: &'static BaseTokens,
    pub semantic: &'static SemanticTokens,
    pub component: &'static ComponentTokens,
    pub dark: &'static SemanticTokens,
}

impl Default for TokenStore {
    fn default() -> Self {
        Self {
            base: &BASE,
            semantic: &SEMANTIC,
            component: &COMPONENT,
            dark: &DARK,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use super::*;
    use crate::color::Color;

    #[test]
    fn semantic_roles_reference_base_values_instead_of_copying_them() {
        assert!(ptr::eq(SEMANTIC.text.primary, &BASE.color.navy.s900));
        assert!(ptr::eq(SEMANTIC.brand.on_primary, &BASE.color.white));
        assert!(ptr::eq(DARK.surface.default, &BASE.color.navy.s950));
        assert!(ptr::eq(COMPONENT.card.navy_background, &BASE.color.navy.s900));
        assert!(ptr::eq(COMPONENT.button.radius, &BASE.radius.md));
    }

    #[test]
    fn scale_lookup_matches_named_fields() {
        assert_eq!(BASE.color.navy.shade(900), Some(Color::hex(0x0A1F44)));
        assert_eq!(BASE.color.gray.shade(50), Some(Color::hex(0xF8FAFC)));
        assert_eq!(BASE.color.gray.shade(450), None);
    }

    #[test]
    fn default_store_exposes_the_static_layers() {
        let store = TokenStore::default();
        assert!(ptr::eq(store.base, &BASE));
        assert!(ptr::eq(store.dark, &DARK));
        assert_eq!(store.semantic.text_pairs().len(), store.dark.text_pairs().len());
    }
}
