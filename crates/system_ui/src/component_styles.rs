//! Static rules that inline styles cannot express: keyframes and the
//! visually-hidden utility class.
//!
//! Colors never appear here; components keep reading them from token
//! variables in their inline styles.

use crate::style_sheet::{inject_style_sheet, DocumentHead, StyleHost, StyleInjectionError};

/// Id of the `<style>` element holding [`component_stylesheet`].
pub const COMPONENT_STYLE_ELEMENT_ID: &str = "harbor-component-styles";

pub(crate) const SPIN_ANIMATION: &str = "harbor-loader-spin";
pub(crate) const PULSE_ANIMATION: &str = "harbor-loader-pulse";
pub(crate) const SLIDE_ANIMATION: &str = "harbor-loader-slide";

/// Class that hides content visually while keeping it in the accessibility tree.
pub const VISUALLY_HIDDEN_CLASS: &str = "ui-visually-hidden";

const KEYFRAMES: &[(&str, &str)] = &[
    (SPIN_ANIMATION, "  to { transform: rotate(360deg); }\n"),
    (
        PULSE_ANIMATION,
        "  0%, 80%, 100% { opacity: 0.3; transform: scale(0.75); }\n  40% { opacity: 1; transform: scale(1); }\n",
    ),
    (
        SLIDE_ANIMATION,
        "  from { transform: translateX(-100%); }\n  to { transform: translateX(250%); }\n",
    ),
];

/// Stylesheet shared by every component, injected next to the token sheet.
pub fn component_stylesheet() -> String {
    let mut css = String::new();
    for (name, frames) in KEYFRAMES {
        css.push_str(&format!("@keyframes {name} {{\n{frames}}}\n\n"));
    }
    css.push_str(&format!(
        ".{VISUALLY_HIDDEN_CLASS} {{\n  position: absolute;\n  width: 1px;\n  height: 1px;\n  \
         padding: 0;\n  margin: -1px;\n  overflow: hidden;\n  clip: rect(0, 0, 0, 0);\n  \
         white-space: nowrap;\n  border: 0;\n}}\n\n"
    ));
    css.push_str(
        "@media (prefers-reduced-motion: reduce) {\n  .ui-loader [data-ui-slot] {\n    \
         animation-iteration-count: 1 !important;\n  }\n}\n",
    );
    css
}

/// Injects [`component_stylesheet`] into `host` under [`COMPONENT_STYLE_ELEMENT_ID`].
pub fn inject_component_styles_into<H>(host: &mut H) -> Result<(), StyleInjectionError>
where
    H: StyleHost + ?Sized,
{
    inject_style_sheet(host, COMPONENT_STYLE_ELEMENT_ID, &component_stylesheet())
}

/// Injects the component stylesheet into the live browser document.
pub fn inject_component_styles() -> Result<(), StyleInjectionError> {
    let mut head = DocumentHead::current()?;
    inject_component_styles_into(&mut head)
}

#[cfg(test)]
mod tests {
    use design_tokens::STYLE_ELEMENT_ID;

    use super::*;
    use crate::style_sheet::{inject_design_tokens_into, MemoryHead};
    use crate::LoaderVariant;

    #[test]
    fn every_loader_animation_has_keyframes() {
        let css = component_stylesheet();
        for variant in [LoaderVariant::Spinner, LoaderVariant::Dots, LoaderVariant::Bar] {
            let name = variant.animation_name();
            assert!(
                css.contains(&format!("@keyframes {name} {{")),
                "missing keyframes for {name}"
            );
        }
    }

    #[test]
    fn visually_hidden_rule_is_defined() {
        let css = component_stylesheet();
        assert!(css.contains(".ui-visually-hidden {"));
        assert!(css.contains("clip: rect(0, 0, 0, 0);"));
    }

    #[test]
    fn component_sheet_sits_beside_the_token_sheet() {
        let mut head = MemoryHead::new();
        inject_design_tokens_into(&mut head).unwrap();
        inject_component_styles_into(&mut head).unwrap();
        inject_component_styles_into(&mut head).unwrap();
        assert_eq!(head.count_with_id(STYLE_ELEMENT_ID), 1);
        assert_eq!(head.count_with_id(COMPONENT_STYLE_ELEMENT_ID), 1);
        assert_ne!(COMPONENT_STYLE_ELEMENT_ID, STYLE_ELEMENT_ID);
    }

    #[test]
    fn sheet_carries_no_raw_colors() {
        let css = component_stylesheet();
        assert!(!css.contains('#'));
        assert!(!css.contains("rgb"));
    }
}
