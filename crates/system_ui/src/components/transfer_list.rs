use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Entry that can be moved between the two lists.
pub struct TransferItem {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub disabled: bool,
}

impl TransferItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    fn matches(&self, filter: &str) -> bool {
        filter.is_empty() || self.label.to_lowercase().contains(filter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// One of the two lists.
pub enum TransferSide {
    Left,
    Right,
}

impl TransferSide {
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Contents, check marks and filter of a [`TransferList`].
///
/// An id lives on exactly one side. Moved ids are unchecked.
pub struct TransferState {
    left: Vec<TransferItem>,
    right: Vec<TransferItem>,
    checked: BTreeSet<String>,
    filter: String,
}

impl TransferState {
    /// Builds the state; ids already on the right are dropped from the left,
    /// and repeated ids keep their first occurrence.
    pub fn new(left: Vec<TransferItem>, right: Vec<TransferItem>) -> Self {
        let mut seen = BTreeSet::new();
        let right: Vec<_> = right
            .into_iter()
            .filter(|item| seen.insert(item.id.clone()))
            .collect();
        let left = left
            .into_iter()
            .filter(|item| seen.insert(item.id.clone()))
            .collect();
        Self {
            left,
            right,
            checked: BTreeSet::new(),
            filter: String::new(),
        }
    }

    pub fn items(&self, side: TransferSide) -> &[TransferItem] {
        match side {
            TransferSide::Left => &self.left,
            TransferSide::Right => &self.right,
        }
    }

    fn items_mut(&mut self, side: TransferSide) -> &mut Vec<TransferItem> {
        match side {
            TransferSide::Left => &mut self.left,
            TransferSide::Right => &mut self.right,
        }
    }

    pub fn ids(&self, side: TransferSide) -> Vec<String> {
        self.items(side).iter().map(|item| item.id.clone()).collect()
    }

    pub fn side_of(&self, id: &str) -> Option<TransferSide> {
        [TransferSide::Left, TransferSide::Right]
            .into_iter()
            .find(|side| self.items(*side).iter().any(|item| item.id == id))
    }

    fn find(&self, id: &str) -> Option<&TransferItem> {
        self.left.iter().chain(&self.right).find(|item| item.id == id)
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.contains(id)
    }

    /// Flips the check mark on `id`. Unknown and disabled items are ignored.
    /// Returns whether the item is checked afterwards.
    pub fn toggle_checked(&mut self, id: &str) -> bool {
        match self.find(id) {
            Some(item) if !item.disabled => {
                if !self.checked.remove(id) {
                    self.checked.insert(id.to_string());
                }
                self.checked.contains(id)
            }
            _ => false,
        }
    }

    pub fn checked_count(&self, side: TransferSide) -> usize {
        self.items(side)
            .iter()
            .filter(|item| self.checked.contains(&item.id))
            .count()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    /// Items on `side` whose label contains the filter, ignoring case.
    pub fn visible(&self, side: TransferSide) -> Vec<&TransferItem> {
        let filter = self.filter.trim().to_lowercase();
        self.items(side)
            .iter()
            .filter(|item| item.matches(&filter))
            .collect()
    }

    fn move_where(&mut self, to: TransferSide, pick: impl Fn(&TransferItem) -> bool) -> usize {
        let from = to.opposite();
        let (moving, staying): (Vec<_>, Vec<_>) =
            std::mem::take(self.items_mut(from)).into_iter().partition(|item| pick(item));
        *self.items_mut(from) = staying;
        for item in &moving {
            self.checked.remove(&item.id);
        }
        let moved = moving.len();
        self.items_mut(to).extend(moving);
        moved
    }

    /// Moves the checked items from the opposite side onto `to`.
    pub fn move_checked(&mut self, to: TransferSide) -> usize {
        let checked = self.checked.clone();
        self.move_where(to, |item| checked.contains(&item.id))
    }

    /// Moves every visible, enabled item from the opposite side onto `to`.
    pub fn move_all(&mut self, to: TransferSide) -> usize {
        let filter = self.filter.trim().to_lowercase();
        self.move_where(to, |item| !item.disabled && item.matches(&filter))
    }
}

/// Row style; a checked row pairs the selection fill with its own text color.
fn transfer_row_style(checked: bool) -> String {
    let (background, color) = if checked {
        (
            var_ref("component-transfer-selected-background"),
            var_ref("component-transfer-selected-text"),
        )
    } else {
        ("transparent".to_string(), "inherit".to_string())
    };
    inline_style(&[
        ("padding", var_ref("component-transfer-item-padding")),
        ("background", background),
        ("color", color),
    ])
}

#[component]
fn TransferPane(
    side: TransferSide,
    title: String,
    state: RwSignal<TransferState>,
) -> impl IntoView {
    let rows = move || {
        let items: Vec<TransferItem> =
            state.with(|s| s.visible(side).into_iter().cloned().collect());
        items
            .into_iter()
            .map(|item| {
                let id = StoredValue::new(item.id.clone());
                let checked = Signal::derive(move || {
                    id.with_value(|id| state.with(|s| s.is_checked(id)))
                });
                view! {
                    <li
                        data-ui-slot="item"
                        data-ui-state=move || if checked.get() { "checked" } else { "unchecked" }
                        style=move || transfer_row_style(checked.get())
                    >
                        <label>
                            <CheckboxField
                                aria_label=item.label.clone()
                                checked=checked
                                disabled=item.disabled
                                on_change=Callback::new(move |_| {
                                    id.with_value(|id| {
                                        state.update(|s| {
                                            s.toggle_checked(id);
                                        })
                                    })
                                })
                            />
                            <span>{item.label.clone()}</span>
                        </label>
                    </li>
                }
            })
            .collect_view()
    };
    let counts = move || {
        state.with(|s| format!("{}/{}", s.checked_count(side), s.items(side).len()))
    };

    view! {
        <section
            data-ui-slot="pane"
            data-ui-side=side.token()
            aria-label=title.clone()
            style=inline_style(&[
                ("border", format!("1px solid {}", var_ref("semantic-border-default"))),
                ("border-radius", var_ref("radius-md")),
                ("min-width", "12rem".to_string()),
            ])
        >
            <header data-ui-slot="pane-header">
                <span>{title}</span>
                <span data-ui-slot="count">{counts}</span>
            </header>
            <ul role="list" data-ui-slot="items">
                {rows}
            </ul>
        </section>
    }
}

#[component]
/// Two lists with controls for moving checked or all items across.
///
/// `on_change` receives the left and right ids after every move.
pub fn TransferList(
    left: Vec<TransferItem>,
    right: Vec<TransferItem>,
    #[prop(default = "Available".into(), into)] left_title: String,
    #[prop(default = "Selected".into(), into)] right_title: String,
    #[prop(optional)] on_change: Option<Callback<(Vec<String>, Vec<String>)>>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let state = create_rw_signal(TransferState::new(left, right));

    let apply = move |change: fn(&mut TransferState, TransferSide) -> usize, to: TransferSide| {
        let moved = state.try_update(|s| change(s, to)).unwrap_or(0);
        if moved > 0 {
            if let Some(on_change) = on_change.as_ref() {
                let ids = state.with_untracked(|s| {
                    (s.ids(TransferSide::Left), s.ids(TransferSide::Right))
                });
                on_change.call(ids);
            }
        }
    };
    let nothing_checked = move |side: TransferSide| {
        Signal::derive(move || state.with(|s| s.checked_count(side) == 0))
    };

    view! {
        <div
            class=merge_layout_class("ui-transfer-list", layout_class)
            data-ui-primitive="true"
            data-ui-kind="transfer-list"
        >
            <TextField
                input_type="search"
                ui_slot="filter"
                aria_label="Filter items".to_string()
                placeholder="Filter".to_string()
                value=Signal::derive(move || state.with(|s| s.filter().to_string()))
                on_input=Callback::new(move |text: String| state.update(|s| s.set_filter(text)))
            />
            <div
                data-ui-slot="lists"
                style=inline_style(&[
                    ("display", "flex".to_string()),
                    ("gap", var_ref("spacing-md")),
                    ("align-items", "center".to_string()),
                ])
            >
                <TransferPane side=TransferSide::Left title=left_title state=state />
                <div
                    data-ui-slot="actions"
                    role="group"
                    aria-label="Move items"
                    style=inline_style(&[
                        ("display", "flex".to_string()),
                        ("flex-direction", "column".to_string()),
                        ("gap", var_ref("spacing-xs")),
                    ])
                >
                    <Button
                        aria_label="Move all right".to_string()
                        on_click=Callback::new(move |_| apply(TransferState::move_all, TransferSide::Right))
                    >
                        "\u{226B}"
                    </Button>
                    <IconButton
                        icon=IconName::ChevronRight
                        variant=ButtonVariant::Standard
                        aria_label="Move checked right".to_string()
                        disabled=nothing_checked(TransferSide::Left)
                        on_click=Callback::new(move |_| apply(TransferState::move_checked, TransferSide::Right))
                    />
                    <IconButton
                        icon=IconName::ChevronLeft
                        variant=ButtonVariant::Standard
                        aria_label="Move checked left".to_string()
                        disabled=nothing_checked(TransferSide::Right)
                        on_click=Callback::new(move |_| apply(TransferState::move_checked, TransferSide::Left))
                    />
                    <Button
                        aria_label="Move all left".to_string()
                        on_click=Callback::new(move |_| apply(TransferState::move_all, TransferSide::Left))
                    >
                        "\u{226A}"
                    </Button>
                </div>
                <TransferPane side=TransferSide::Right title=right_title state=state />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> TransferState {
        TransferState::new(
            vec![
                TransferItem::new("a", "Alpha"),
                TransferItem::new("b", "Bravo"),
                TransferItem::new("c", "Charlie").disabled(),
                TransferItem::new("d", "Delta"),
            ],
            vec![TransferItem::new("e", "Echo")],
        )
    }

    #[test]
    fn construction_keeps_sides_disjoint() {
        let state = TransferState::new(
            vec![TransferItem::new("a", "Alpha"), TransferItem::new("b", "Bravo")],
            vec![TransferItem::new("b", "Bravo"), TransferItem::new("b", "Bravo again")],
        );
        assert_eq!(state.ids(TransferSide::Left), vec!["a"]);
        assert_eq!(state.ids(TransferSide::Right), vec!["b"]);
        assert_eq!(state.side_of("b"), Some(TransferSide::Right));
        assert_eq!(state.side_of("z"), None);
    }

    #[test]
    fn disabled_and_unknown_items_cannot_be_checked() {
        let mut state = sample();
        assert!(!state.toggle_checked("c"));
        assert!(!state.toggle_checked("missing"));
        assert!(state.toggle_checked("a"));
        assert!(!state.toggle_checked("a"));
        assert_eq!(state.checked_count(TransferSide::Left), 0);
    }

    #[test]
    fn move_checked_transfers_and_clears_marks() {
        let mut state = sample();
        state.toggle_checked("b");
        state.toggle_checked("d");
        state.toggle_checked("e");

        assert_eq!(state.move_checked(TransferSide::Right), 2);
        assert_eq!(state.ids(TransferSide::Left), vec!["a", "c"]);
        assert_eq!(state.ids(TransferSide::Right), vec!["e", "b", "d"]);
        assert!(!state.is_checked("b"));
        assert!(!state.is_checked("d"));
        assert!(state.is_checked("e"));
    }

    #[test]
    fn move_all_skips_disabled_and_filtered_items() {
        let mut state = sample();
        state.set_filter("  A ");
        assert_eq!(
            state
                .visible(TransferSide::Left)
                .iter()
                .map(|item| item.id.as_str())
                .collect::<Vec<_>>(),
            vec!["a", "b", "c", "d"]
        );
        state.set_filter("ha");
        assert_eq!(state.move_all(TransferSide::Right), 1);
        assert_eq!(state.ids(TransferSide::Left), vec!["b", "c", "d"]);

        state.set_filter("");
        assert_eq!(state.move_all(TransferSide::Right), 2);
        assert_eq!(state.ids(TransferSide::Left), vec!["c"]);
        assert_eq!(state.ids(TransferSide::Right), vec!["e", "a", "b", "d"]);
    }

    #[test]
    fn every_id_stays_on_exactly_one_side() {
        let mut state = sample();
        state.move_all(TransferSide::Left);
        state.toggle_checked("a");
        state.move_checked(TransferSide::Right);
        state.move_all(TransferSide::Left);
        let mut all = state.ids(TransferSide::Left);
        all.extend(state.ids(TransferSide::Right));
        all.sort();
        assert_eq!(all, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn checked_rows_carry_the_selection_text_color() {
        let checked = transfer_row_style(true);
        assert!(checked.contains("background: var(--harbor-component-transfer-selected-background);"));
        assert!(checked.contains("color: var(--harbor-component-transfer-selected-text);"));
        assert!(transfer_row_style(false).contains("color: inherit;"));
    }
}
