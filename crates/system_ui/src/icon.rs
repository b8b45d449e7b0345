//! Centralized icon catalog.
//!
//! Components reference icons by semantic name only; the SVG bodies live in
//! one table so no component embeds ad hoc markup. Paths use a 24px grid and
//! inherit `currentColor`, so icon color always comes from the surrounding
//! token-driven text color.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers.
pub enum IconName {
    /// Search field glyph.
    Search,
    /// Hamburger menu for collapsed navigation.
    Navigation,
    /// Menu disclosure chevron.
    ChevronDown,
    /// Move-right chevron.
    ChevronRight,
    /// Move-left chevron.
    ChevronLeft,
    /// Checkmark.
    Checkmark,
    /// Dismiss/close.
    Dismiss,
    /// Generic person placeholder.
    Person,
    /// Sign-out action.
    SignOut,
    /// Upward trend.
    TrendUp,
    /// Downward trend.
    TrendDown,
    /// Flat trend.
    TrendFlat,
    /// Light color scheme.
    Sunny,
    /// Dark color scheme.
    Moon,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Navigation => "navigation",
            Self::ChevronDown => "chevron-down",
            Self::ChevronRight => "chevron-right",
            Self::ChevronLeft => "chevron-left",
            Self::Checkmark => "checkmark",
            Self::Dismiss => "dismiss",
            Self::Person => "person",
            Self::SignOut => "sign-out",
            Self::TrendUp => "trend-up",
            Self::TrendDown => "trend-down",
            Self::TrendFlat => "trend-flat",
            Self::Sunny => "sunny",
            Self::Moon => "moon",
        }
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::Search => {
                r#"<path d="M10 2.75a7.25 7.25 0 0 1 5.63 11.82l4.9 4.9a.75.75 0 0 1-.98 1.13l-.08-.07-4.9-4.9A7.25 7.25 0 1 1 10 2.75Zm0 1.5a5.75 5.75 0 1 0 0 11.5 5.75 5.75 0 0 0 0-11.5Z"/>"#
            }
            Self::Navigation => {
                r#"<path d="M3.75 6h16.5a.75.75 0 0 1 0 1.5H3.75a.75.75 0 0 1 0-1.5Zm0 5.25h16.5a.75.75 0 0 1 0 1.5H3.75a.75.75 0 0 1 0-1.5Zm0 5.25h16.5a.75.75 0 0 1 0 1.5H3.75a.75.75 0 0 1 0-1.5Z"/>"#
            }
            Self::ChevronDown => {
                r#"<path d="M4.22 8.47c.3-.3.77-.3 1.06 0L12 15.19l6.72-6.72a.75.75 0 1 1 1.06 1.06l-7.25 7.25c-.3.3-.77.3-1.06 0L4.22 9.53a.75.75 0 0 1 0-1.06Z"/>"#
            }
            Self::ChevronRight => {
                r#"<path d="M8.47 4.22c-.3.3-.3.77 0 1.06L15.19 12l-6.72 6.72a.75.75 0 1 0 1.06 1.06l7.25-7.25c.3-.3.3-.77 0-1.06L9.53 4.22a.75.75 0 0 0-1.06 0Z"/>"#
            }
            Self::ChevronLeft => {
                r#"<path d="M15.53 4.22c.3.3.3.77 0 1.06L8.81 12l6.72 6.72a.75.75 0 1 1-1.06 1.06l-7.25-7.25c-.3-.3-.3-.77 0-1.06l7.25-7.25a.75.75 0 0 1 1.06 0Z"/>"#
            }
            Self::Checkmark => {
                r#"<path d="M4.53 12.97a.75.75 0 0 0-1.06 1.06l4.5 4.5c.3.3.77.3 1.06 0l11-11a.75.75 0 0 0-1.06-1.06L8.5 16.94l-3.97-3.97Z"/>"#
            }
            Self::Dismiss => {
                r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98Z"/>"#
            }
            Self::Person => {
                r#"<path d="M12 2a5 5 0 1 1 0 10 5 5 0 0 1 0-10Zm0 1.5a3.5 3.5 0 1 0 0 7 3.5 3.5 0 0 0 0-7ZM17.75 14A2.25 2.25 0 0 1 20 16.25v.57c0 .9-.32 1.76-.9 2.44C17.53 21.1 15.15 22 12 22s-5.53-.9-7.1-2.74a3.75 3.75 0 0 1-.9-2.43v-.58C4 15.01 5 14 6.25 14h11.5Zm0 1.5H6.25a.75.75 0 0 0-.75.75v.58c0 .53.2 1.05.54 1.46C7.3 19.76 9.26 20.5 12 20.5s4.7-.74 5.96-2.21c.35-.41.54-.93.54-1.47v-.57a.75.75 0 0 0-.75-.75Z"/>"#
            }
            Self::SignOut => {
                r#"<path d="M8.5 11.25a.75.75 0 0 1 .75-.75h8.69l-1.72-1.72a.75.75 0 1 1 1.06-1.06l3 3c.3.3.3.77 0 1.06l-3 3a.75.75 0 1 1-1.06-1.06l1.72-1.72H9.25a.75.75 0 0 1-.75-.75ZM5.75 3A2.75 2.75 0 0 0 3 5.75v12.5A2.75 2.75 0 0 0 5.75 21h6.5A2.75 2.75 0 0 0 15 18.25V16.5h-1.5v1.75c0 .69-.56 1.25-1.25 1.25h-6.5c-.69 0-1.25-.56-1.25-1.25V5.75c0-.69.56-1.25 1.25-1.25h6.5c.69 0 1.25.56 1.25 1.25V7.5H15V5.75A2.75 2.75 0 0 0 12.25 3h-6.5Z"/>"#
            }
            Self::TrendUp => {
                r#"<path d="M13.75 6h6.5c.38 0 .7.28.74.65l.01.1v6.5a.75.75 0 0 1-1.5.1V8.56l-7.22 7.22a.75.75 0 0 1-.98.07l-.08-.07-2.72-2.72-4.72 4.72a.75.75 0 0 1-1.13-.98l.07-.08 5.25-5.25a.75.75 0 0 1 .98-.07l.08.07 2.72 2.72 6.69-6.69h-4.69a.75.75 0 0 1-.74-.65L13 6.75c0-.38.28-.7.65-.74l.1-.01Z"/>"#
            }
            Self::TrendDown => {
                r#"<path d="M13.75 18h6.5c.38 0 .7-.28.74-.65l.01-.1v-6.5a.75.75 0 0 0-1.5-.1v4.91l-7.22-7.22a.75.75 0 0 0-.98-.07l-.08.07-2.72 2.72-4.72-4.72a.75.75 0 0 0-1.13.98l.07.08 5.25 5.25c.27.27.68.3.98.07l.08-.07 2.72-2.72 6.69 6.69h-4.69a.75.75 0 0 0-.74.65l-.01.1c0 .38.28.7.65.74l.1.01Z"/>"#
            }
            Self::TrendFlat => {
                r#"<path d="M4.75 11.25h14.5a.75.75 0 0 1 0 1.5H4.75a.75.75 0 0 1 0-1.5Z"/>"#
            }
            Self::Sunny => {
                r#"<path d="M12 7a5 5 0 1 1 0 10 5 5 0 0 1 0-10Zm0 1.5a3.5 3.5 0 1 0 0 7 3.5 3.5 0 0 0 0-7ZM12 2c.41 0 .75.34.75.75v1.5a.75.75 0 0 1-1.5 0v-1.5c0-.41.34-.75.75-.75Zm0 17c.41 0 .75.34.75.75v1.5a.75.75 0 0 1-1.5 0v-1.5c0-.41.34-.75.75-.75ZM2 12c0-.41.34-.75.75-.75h1.5a.75.75 0 0 1 0 1.5h-1.5A.75.75 0 0 1 2 12Zm17 0c0-.41.34-.75.75-.75h1.5a.75.75 0 0 1 0 1.5h-1.5A.75.75 0 0 1 19 12Z"/>"#
            }
            Self::Moon => {
                r#"<path d="M20.03 14.9a.75.75 0 0 0-.96-.93 7.25 7.25 0 0 1-9.04-9.04.75.75 0 0 0-.93-.96A9 9 0 1 0 20.03 14.9Zm-9.49-8.93a8.75 8.75 0 0 0 7.49 9.99A7.5 7.5 0 1 1 10.54 5.97Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 14px, dense controls.
    Xs,
    /// 16px, menus and buttons.
    #[default]
    Sm,
    /// 20px, navigation bar actions.
    Md,
    /// 24px, avatar placeholders.
    Lg,
}

impl IconSize {
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders a catalog icon as inline SVG.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}
