use super::*;

#[component]
/// Raised surface for dropdown menus and popovers.
pub fn MenuSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu-surface", layout_class)
            style=inline_style(&[
                ("background", var_ref("semantic-surface-raised")),
                ("color", var_ref("semantic-text-primary")),
                ("border-color", var_ref("semantic-border-default")),
                ("border-radius", var_ref("radius-md")),
                ("box-shadow", Elevation::Overlay.shadow()),
                ("z-index", var_ref("z-index-dropdown")),
            ])
            id=id
            role=role
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="menu-surface"
            data-ui-elevation=Elevation::Overlay.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Menu entry rendered as a quiet button with `role="menuitem"`.
pub fn MenuItem(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <Button
            layout_class=layout_class.unwrap_or("")
            id=id.unwrap_or_default()
            role="menuitem".to_string()
            disabled=disabled
            selected=selected
            ui_slot="menu-item"
            variant=ButtonVariant::Quiet
            on_click=Callback::new(move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            })
        >
            {icon.map(|icon| view! { <Icon icon=icon size=IconSize::Sm /> })}
            {children()}
        </Button>
    }
}

#[component]
/// Divider between menu groups.
pub fn MenuSeparator(#[prop(optional)] layout_class: Option<&'static str>) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu-separator", layout_class)
            style=inline_style(&[("border-top-color", var_ref("semantic-border-default"))])
            role="separator"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="menu-separator"
        ></div>
    }
}
