use wasm_bindgen::JsCast;

use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One tab in a [`Tabs`] strip.
pub struct TabItem {
    pub id: String,
    pub label: String,
}

impl TabItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Index after `current`, wrapping to the first tab.
pub fn next_tab_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current.min(len - 1) + 1) % len
    }
}

/// Index before `current`, wrapping to the last tab.
pub fn previous_tab_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current.min(len - 1) + len - 1) % len
    }
}

fn index_for_key(key: &str, current: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match key {
        "ArrowRight" => Some(next_tab_index(current, len)),
        "ArrowLeft" => Some(previous_tab_index(current, len)),
        "Home" => Some(0),
        "End" => Some(len - 1),
        _ => None,
    }
}

fn tab_dom_id(prefix: &str, id: &str) -> String {
    format!("{prefix}-tab-{id}")
}

fn focus_element(id: &str) {
    if let Some(element) = document()
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = element.focus();
    }
}

#[component]
/// Tab strip with a selection indicator and roving focus.
///
/// `selected` is owned by the caller, which renders the active panel as
/// `children`. Arrow keys wrap; Home and End jump to the ends.
pub fn Tabs(
    tabs: Vec<TabItem>,
    selected: RwSignal<usize>,
    #[prop(into)] aria_label: String,
    /// Prefix for generated element ids; must be unique per page.
    #[prop(default = "harbor")]
    id_prefix: &'static str,
    #[prop(optional)] on_change: Option<Callback<usize>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let len = tabs.len();
    let dom_ids = StoredValue::new(
        tabs.iter()
            .map(|tab| tab_dom_id(id_prefix, &tab.id))
            .collect::<Vec<_>>(),
    );
    let panel_id = format!("{id_prefix}-tabpanel");

    let select = move |index: usize| {
        if selected.get_untracked() != index {
            selected.set(index);
            if let Some(on_change) = on_change.as_ref() {
                on_change.call(index);
            }
        }
    };

    let buttons = tabs
        .into_iter()
        .enumerate()
        .map(|(index, tab)| {
            let is_selected = Signal::derive(move || selected.get() == index);
            let dom_id = dom_ids.with_value(|ids| ids[index].clone());
            view! {
                <Button
                    variant=ButtonVariant::Quiet
                    id=dom_id
                    role="tab"
                    ui_slot="tab"
                    aria_selected=Signal::derive(move || Some(is_selected.get()))
                    aria_controls=panel_id.clone()
                    tabindex=Signal::derive(move || Some(if is_selected.get() { 0 } else { -1 }))
                    selected=is_selected
                    on_click=Callback::new(move |_| select(index))
                    on_keydown=Callback::new(move |ev: KeyboardEvent| {
                        if let Some(target) = index_for_key(&ev.key(), selected.get_untracked(), len) {
                            ev.prevent_default();
                            select(target);
                            dom_ids.with_value(|ids| focus_element(&ids[target]));
                        }
                    })
                >
                    <span
                        data-ui-slot="tab-label"
                        style=move || inline_style(&[(
                            "border-bottom",
                            format!(
                                "{} solid {}",
                                var_ref("component-tabs-indicator-thickness"),
                                if is_selected.get() {
                                    var_ref("component-tabs-indicator")
                                } else {
                                    "transparent".to_string()
                                },
                            ),
                        )])
                    >
                        {tab.label}
                    </span>
                </Button>
            }
        })
        .collect_view();

    view! {
        <div
            class=merge_layout_class("ui-tabs", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tabs"
        >
            <div
                role="tablist"
                aria-label=aria_label
                data-ui-slot="tablist"
                style=inline_style(&[
                    ("display", "flex".to_string()),
                    ("gap", var_ref("component-tabs-gap")),
                    ("border-bottom", format!("1px solid {}", var_ref("semantic-border-default"))),
                ])
            >
                {buttons}
            </div>
            <div
                id=panel_id.clone()
                role="tabpanel"
                tabindex="0"
                data-ui-slot="panel"
                aria-labelledby=move || dom_ids.with_value(|ids| ids.get(selected.get()).cloned())
            >
                {children()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn arrow_navigation_wraps() {
        assert_eq!(next_tab_index(0, 3), 1);
        assert_eq!(next_tab_index(2, 3), 0);
        assert_eq!(previous_tab_index(0, 3), 2);
        assert_eq!(previous_tab_index(1, 3), 0);
    }

    #[test]
    fn empty_and_out_of_range_indices_are_safe() {
        assert_eq!(next_tab_index(0, 0), 0);
        assert_eq!(previous_tab_index(5, 0), 0);
        assert_eq!(next_tab_index(9, 3), 0);
        assert_eq!(previous_tab_index(9, 3), 1);
    }

    #[test]
    fn keys_map_to_target_tabs() {
        assert_eq!(index_for_key("ArrowRight", 1, 4), Some(2));
        assert_eq!(index_for_key("ArrowLeft", 0, 4), Some(3));
        assert_eq!(index_for_key("Home", 3, 4), Some(0));
        assert_eq!(index_for_key("End", 0, 4), Some(3));
        assert_eq!(index_for_key("Enter", 0, 4), None);
        assert_eq!(index_for_key("End", 0, 0), None);
    }

    #[test]
    fn tab_ids_are_prefixed() {
        assert_eq!(tab_dom_id("harbor", "overview"), "harbor-tab-overview");
    }
}
