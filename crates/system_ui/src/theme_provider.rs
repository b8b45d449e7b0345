//! Theme context: exposes the active [`Theme`] to descendants and mirrors
//! the mode onto `<html data-theme>` so the forced dark variables apply.

use design_tokens::{create_theme, Theme, ThemeMode};
use leptos::logging::warn;
use leptos::*;

use crate::style_sheet::StyleInjectionError;

/// Attribute written on the document element.
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy)]
/// Reactive theme handle provided through context.
pub struct ThemeContext {
    pub mode: Signal<ThemeMode>,
    pub theme: Signal<Theme>,
}

impl ThemeContext {
    /// Context whose theme tracks `mode`.
    pub fn new(mode: Signal<ThemeMode>) -> Self {
        let theme = create_memo(move |_| create_theme(mode.get()));
        Self {
            mode,
            theme: theme.into(),
        }
    }
}

/// Writes `data-theme` on the root element of the current document.
pub fn apply_theme_attribute(mode: ThemeMode) -> Result<(), StyleInjectionError> {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .ok_or(StyleInjectionError::NoDocument)?;
    root.set_attribute(THEME_ATTRIBUTE, mode.token())
        .map_err(|err| StyleInjectionError::Dom {
            operation: "set_attribute",
            message: format!("{err:?}"),
        })
}

#[component]
/// Provides [`ThemeContext`] and keeps the document's `data-theme` in sync.
pub fn ThemeProvider(
    /// Active mode; defaults to light.
    #[prop(optional, into)]
    mode: MaybeSignal<ThemeMode>,
    children: Children,
) -> impl IntoView {
    let mode = Signal::derive(move || mode.get());
    let context = ThemeContext::new(mode);
    provide_context(context);

    create_effect(move |_| {
        let mode = mode.get();
        if let Err(err) = apply_theme_attribute(mode) {
            warn!("failed to apply {THEME_ATTRIBUTE}={}: {err}", mode.token());
        }
    });

    view! {
        <div
            class="ui-theme-root"
            data-ui-primitive="true"
            data-ui-kind="theme-provider"
            data-theme=move || mode.get().token()
        >
            {children()}
        </div>
    }
}

/// The nearest provided theme context, or a static light theme outside any provider.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
        .unwrap_or_else(|| ThemeContext::new(Signal::derive(|| ThemeMode::Light)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn context_theme_follows_the_mode_signal() {
        let runtime = create_runtime();
        let mode = create_rw_signal(ThemeMode::Light);
        let context = ThemeContext::new(mode.into());
        assert_eq!(context.theme.get_untracked().palette.mode, ThemeMode::Light);
        assert_eq!(context.theme.get_untracked().shape.border_radius, 12);

        mode.set(ThemeMode::Dark);
        assert_eq!(context.mode.get_untracked(), ThemeMode::Dark);
        assert_eq!(context.theme.get_untracked().palette.mode, ThemeMode::Dark);
        assert_eq!(context.theme.get_untracked().shape.border_radius, 8);
        runtime.dispose();
    }

    #[test]
    fn use_theme_without_provider_falls_back_to_light() {
        let runtime = create_runtime();
        let context = use_theme();
        assert_eq!(context.mode.get_untracked(), ThemeMode::Light);
        assert_eq!(context.theme.get_untracked(), create_theme(ThemeMode::Light));
        runtime.dispose();
    }
}
