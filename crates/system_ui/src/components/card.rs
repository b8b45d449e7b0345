use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Card color treatments.
pub enum CardVariant {
    /// Navy fill with inverse text, for hero summaries.
    Navy,
    /// White paper card.
    #[default]
    White,
    /// Transparent card with a hairline border.
    Outlined,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved colors for a [`CardVariant`].
pub struct CardStyle {
    pub background: String,
    pub text: String,
    pub border: String,
}

impl CardVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Navy => "navy",
            Self::White => "white",
            Self::Outlined => "outlined",
        }
    }

    /// Token references for the variant.
    pub fn style(self) -> CardStyle {
        let (background, text, border) = match self {
            Self::Navy => (
                "component-card-navy-background",
                "component-card-navy-text",
                "component-card-navy-background",
            ),
            Self::White => (
                "component-card-white-background",
                "component-card-white-text",
                "component-card-white-background",
            ),
            Self::Outlined => (
                "semantic-surface-default",
                "semantic-text-primary",
                "component-card-outline",
            ),
        };
        CardStyle {
            background: var_ref(background),
            text: var_ref(text),
            border: var_ref(border),
        }
    }

    fn shadow(self) -> String {
        match self {
            Self::Outlined => var_ref("shadow-none"),
            Self::Navy | Self::White => var_ref("component-card-shadow"),
        }
    }
}

#[component]
/// Content card.
pub fn Card(
    #[prop(default = CardVariant::White)] variant: CardVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    let colors = variant.style();
    let style = inline_style(&[
        ("background", colors.background),
        ("color", colors.text),
        ("border", format!("1px solid {}", colors.border)),
        ("border-radius", var_ref("component-card-radius")),
        ("padding", var_ref("component-card-padding")),
        ("box-shadow", variant.shadow()),
    ]);

    view! {
        <article
            class=merge_layout_class("ui-card", layout_class)
            style=style
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-variant=variant.token()
        >
            {children()}
        </article>
    }
}

#[component]
/// Title row of a [`Card`] with optional subtitle and trailing actions.
pub fn CardHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <header
            class="ui-card-header"
            style=inline_style(&[
                ("display", "flex".to_string()),
                ("justify-content", "space-between".to_string()),
                ("gap", var_ref("spacing-sm")),
                ("margin-bottom", var_ref("spacing-md")),
            ])
            data-ui-primitive="true"
            data-ui-kind="card-header"
        >
            <div data-ui-slot="copy">
                <div
                    data-ui-slot="title"
                    style=inline_style(&[
                        ("font-size", var_ref("font-size-lg")),
                        ("font-weight", var_ref("font-weight-semibold")),
                    ])
                >
                    {title}
                </div>
                {subtitle.map(|subtitle| view! {
                    <div
                        data-ui-slot="subtitle"
                        style=inline_style(&[
                            ("font-size", var_ref("font-size-sm")),
                            ("opacity", "0.8".to_string()),
                        ])
                    >
                        {subtitle}
                    </div>
                })}
            </div>
            {children.map(|children| view! { <div data-ui-slot="actions">{children()}</div> })}
        </header>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn variants_dispatch_to_component_tokens() {
        assert_eq!(
            CardVariant::Navy.style(),
            CardStyle {
                background: "var(--harbor-component-card-navy-background)".to_string(),
                text: "var(--harbor-component-card-navy-text)".to_string(),
                border: "var(--harbor-component-card-navy-background)".to_string(),
            }
        );
        assert_eq!(
            CardVariant::Outlined.style().border,
            "var(--harbor-component-card-outline)"
        );
        assert_eq!(CardVariant::default(), CardVariant::White);
    }

    #[test]
    fn only_outlined_cards_drop_the_shadow() {
        assert_eq!(CardVariant::Outlined.shadow(), "var(--harbor-shadow-none)");
        assert_eq!(CardVariant::Navy.shadow(), "var(--harbor-component-card-shadow)");
    }
}
