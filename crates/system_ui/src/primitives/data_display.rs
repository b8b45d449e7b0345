use super::*;

fn surface_style(variant: SurfaceVariant, elevation: Elevation, padding: LayoutPadding) -> String {
    inline_style(&[
        ("background", variant.background()),
        ("color", var_ref("semantic-text-primary")),
        ("box-shadow", elevation.shadow()),
        ("padding", padding.length()),
        ("border-radius", var_ref("radius-lg")),
    ])
}

#[component]
/// Generic surface primitive.
pub fn Surface(
    #[prop(default = SurfaceVariant::Standard)] variant: SurfaceVariant,
    #[prop(default = Elevation::Flat)] elevation: Elevation,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-surface", layout_class)
            style=surface_style(variant, elevation, padding)
            data-ui-primitive="true"
            data-ui-kind="surface"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-elevation=elevation.token()
            data-ui-padding=padding.token()
            role=role
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Sectioning panel; a raised [`Surface`] rendered as `<section>`.
pub fn Panel(
    #[prop(default = SurfaceVariant::Standard)] variant: SurfaceVariant,
    #[prop(default = Elevation::Raised)] elevation: Elevation,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-panel", layout_class)
            style=surface_style(variant, elevation, padding)
            data-ui-primitive="true"
            data-ui-kind="panel"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-elevation=elevation.token()
            data-ui-padding=padding.token()
            aria-label=aria_label
        >
            {children()}
        </section>
    }
}

#[component]
/// Shared text primitive.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let family = if role == TextRole::Code {
        var_ref("font-family-mono")
    } else {
        var_ref("font-family-sans")
    };

    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            style=inline_style(&[
                ("color", tone.color()),
                ("font-size", role.font_size()),
                ("font-family", family),
            ])
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Shared heading primitive exposed to assistive tech at `level`.
pub fn Heading(
    #[prop(default = 2)] level: u8,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let level = level.clamp(1, 6);
    let size = match level {
        1 => "font-size-3xl",
        2 => "font-size-2xl",
        3 => "font-size-xl",
        _ => "font-size-lg",
    };

    view! {
        <div
            class=merge_layout_class("ui-heading", layout_class)
            style=inline_style(&[
                ("color", tone.color()),
                ("font-size", var_ref(size)),
                ("font-weight", var_ref("font-weight-semibold")),
                ("line-height", var_ref("font-line-height-tight")),
            ])
            role="heading"
            aria-level=level
            data-ui-primitive="true"
            data-ui-kind="heading"
            data-ui-slot=ui_slot
            data-ui-variant=TextRole::Title.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Compact status badge primitive.
pub fn Badge(
    #[prop(default = TextTone::Secondary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-badge", layout_class)
            style=inline_style(&[
                ("color", tone.color()),
                ("border-color", tone.color()),
                ("border-radius", var_ref("radius-full")),
                ("font-size", var_ref("font-size-xs")),
                ("padding", format!("0 {}", var_ref("spacing-sm"))),
            ])
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Empty state content block.
pub fn EmptyState(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            style=inline_style(&[
                ("color", var_ref("semantic-text-secondary")),
                ("padding", var_ref("spacing-lg")),
                ("text-align", "center".to_string()),
            ])
            role="status"
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            {children()}
        </div>
    }
}
