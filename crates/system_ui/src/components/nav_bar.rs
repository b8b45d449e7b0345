use serde::{Deserialize, Serialize};

use super::*;

/// Menu id reserved for the account menu.
const ACCOUNT_MENU_ID: &str = "account";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Leaf destination inside a [`NavMenu`].
pub struct NavItem {
    pub id: String,
    pub label: String,
}

impl NavItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Top-level dropdown in the navigation bar.
pub struct NavMenu {
    pub id: String,
    pub label: String,
    pub items: Vec<NavItem>,
}

impl NavMenu {
    pub fn new(id: impl Into<String>, label: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Emitted when a menu item is chosen.
pub struct NavSelection {
    pub menu_id: String,
    pub item_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Transient interaction state of [`TopNavBar`].
pub struct NavBarState {
    /// Id of the single open menu, if any.
    pub open_menu: Option<String>,
    pub search_text: String,
    pub mobile_search_open: bool,
}

impl NavBarState {
    pub fn is_open(&self, menu_id: &str) -> bool {
        self.open_menu.as_deref() == Some(menu_id)
    }

    /// Opens `menu_id`, closing any other; closes it if already open.
    pub fn toggle_menu(&mut self, menu_id: &str) {
        if self.is_open(menu_id) {
            self.open_menu = None;
        } else {
            self.open_menu = Some(menu_id.to_string());
        }
    }

    pub fn close_menus(&mut self) {
        self.open_menu = None;
    }

    /// Closes the open menu and reports the choice.
    pub fn select(&mut self, menu_id: &str, item_id: &str) -> NavSelection {
        self.close_menus();
        NavSelection {
            menu_id: menu_id.to_string(),
            item_id: item_id.to_string(),
        }
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Trimmed query to emit, or `None` when the field is blank.
    pub fn submit_search(&mut self) -> Option<String> {
        let query = self.search_text.trim();
        if query.is_empty() {
            return None;
        }
        let query = query.to_string();
        self.mobile_search_open = false;
        Some(query)
    }

    /// Shows or hides the collapsed search field; menus close when it opens.
    pub fn toggle_mobile_search(&mut self) {
        self.mobile_search_open = !self.mobile_search_open;
        if self.mobile_search_open {
            self.close_menus();
        }
    }
}

#[component]
fn NavDropdown(
    menu: NavMenu,
    state: RwSignal<NavBarState>,
    on_select: Option<Callback<NavSelection>>,
) -> impl IntoView {
    let NavMenu { id, label, items } = menu;
    let menu_id = StoredValue::new(id);
    let items = StoredValue::new(items);
    let is_open = Signal::derive(move || state.with(|s| menu_id.with_value(|id| s.is_open(id))));
    let surface_id = menu_id.with_value(|id| format!("harbor-nav-menu-{id}"));

    let entries = move || {
        items.with_value(|items| {
            items
                .iter()
                .map(|item| {
                    let item_id = item.id.clone();
                    let item_label = item.label.clone();
                    view! {
                        <MenuItem on_click=Callback::new(move |_| {
                            let selection = menu_id.with_value(|menu_id| {
                                state.try_update(|s| s.select(menu_id, &item_id))
                            });
                            if let (Some(selection), Some(on_select)) =
                                (selection, on_select.as_ref())
                            {
                                on_select.call(selection);
                            }
                        })>
                            {item_label}
                        </MenuItem>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="ui-nav-dropdown" data-ui-slot="menu" data-ui-state=move || if is_open.get() { "open" } else { "closed" }>
            <Button
                variant=ButtonVariant::Quiet
                ui_slot="menu-trigger"
                aria_haspopup="menu".to_string()
                aria_controls=surface_id.clone()
                aria_expanded=Signal::derive(move || Some(is_open.get()))
                trailing_icon=IconName::ChevronDown
                on_click=Callback::new(move |_| {
                    menu_id.with_value(|id| state.update(|s| s.toggle_menu(id)));
                })
            >
                {label}
            </Button>
            <Show when=move || is_open.get() fallback=|| ()>
                <MenuSurface id=surface_id.clone() role="menu".to_string()>
                    {entries()}
                </MenuSurface>
            </Show>
        </div>
    }
}

#[component]
/// Application bar with dropdown menus, search and an account menu.
///
/// Only one menu is open at a time; Escape closes it. Blank searches are
/// not emitted.
pub fn TopNavBar(
    #[prop(into)] brand: String,
    #[prop(optional)] menus: Vec<NavMenu>,
    #[prop(optional, into)] user_name: Option<String>,
    #[prop(optional, into)] user_avatar: Option<String>,
    #[prop(default = "Search".into(), into)] search_placeholder: String,
    #[prop(optional)] on_select: Option<Callback<NavSelection>>,
    #[prop(optional)] on_search: Option<Callback<String>>,
    #[prop(optional)] on_logout: Option<Callback<()>>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let state = create_rw_signal(NavBarState::default());
    let account_open = Signal::derive(move || state.with(|s| s.is_open(ACCOUNT_MENU_ID)));
    let mobile_search_open = Signal::derive(move || state.with(|s| s.mobile_search_open));

    let submit = move || {
        if let Some(query) = state.try_update(NavBarState::submit_search).flatten() {
            if let Some(on_search) = on_search.as_ref() {
                on_search.call(query);
            }
        }
    };

    let dropdowns = menus
        .into_iter()
        .map(|menu| view! { <NavDropdown menu=menu state=state on_select=on_select /> })
        .collect_view();

    let account_name = user_name.clone().unwrap_or_else(|| "Account".to_string());
    let account_avatar = match user_avatar {
        Some(src) => view! { <Avatar name=account_name.clone() src=src size=AvatarSize::Sm /> }.into_view(),
        None => view! { <Avatar name=account_name.clone() size=AvatarSize::Sm /> }.into_view(),
    };
    let user_name = StoredValue::new(user_name);

    view! {
        <header
            class=merge_layout_class("ui-top-nav-bar", layout_class)
            role="banner"
            style=inline_style(&[
                ("background", var_ref("component-navbar-background")),
                ("color", var_ref("component-navbar-text")),
                ("min-height", var_ref("component-navbar-height")),
                ("padding", format!("0 {}", var_ref("spacing-md"))),
                ("z-index", var_ref("z-index-sticky")),
            ])
            data-ui-primitive="true"
            data-ui-kind="top-nav-bar"
            data-ui-mobile-search=move || bool_token(mobile_search_open.get())
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Escape" {
                    state.update(NavBarState::close_menus);
                }
            }
        >
            <div data-ui-slot="brand" style=inline_style(&[("font-weight", var_ref("font-weight-bold"))])>
                {brand}
            </div>
            <nav aria-label="Primary" data-ui-slot="menus">
                {dropdowns}
            </nav>
            <form
                role="search"
                data-ui-slot="search"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }
            >
                <TextField
                    variant=FieldVariant::Inverse
                    input_type="search"
                    aria_label=search_placeholder.clone()
                    placeholder=search_placeholder
                    value=Signal::derive(move || state.with(|s| s.search_text.clone()))
                    on_input=Callback::new(move |text: String| state.update(|s| s.set_search_text(text)))
                />
            </form>
            <IconButton
                icon=IconName::Search
                ui_slot="mobile-search-toggle"
                aria_label="Toggle search".to_string()
                aria_expanded=Signal::derive(move || Some(mobile_search_open.get()))
                on_click=Callback::new(move |_| state.update(NavBarState::toggle_mobile_search))
            />
            <div class="ui-nav-dropdown" data-ui-slot="account">
                <Button
                    variant=ButtonVariant::Quiet
                    shape=ButtonShape::Pill
                    ui_slot="account-trigger"
                    aria_label=format!("{account_name} menu")
                    aria_haspopup="menu".to_string()
                    aria_expanded=Signal::derive(move || Some(account_open.get()))
                    on_click=Callback::new(move |_| state.update(|s| s.toggle_menu(ACCOUNT_MENU_ID)))
                >
                    {account_avatar}
                </Button>
                <Show when=move || account_open.get() fallback=|| ()>
                    <MenuSurface role="menu".to_string()>
                        {user_name.get_value().map(|name| view! {
                            <div data-ui-slot="account-name">{name}</div>
                            <MenuSeparator />
                        })}
                        <MenuItem
                            icon=IconName::SignOut
                            on_click=Callback::new(move |_| {
                                state.update(NavBarState::close_menus);
                                if let Some(on_logout) = on_logout.as_ref() {
                                    on_logout.call(());
                                }
                            })
                        >
                            "Sign out"
                        </MenuItem>
                    </MenuSurface>
                </Show>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn opening_a_menu_closes_the_other() {
        let mut state = NavBarState::default();
        state.toggle_menu("products");
        assert!(state.is_open("products"));
        state.toggle_menu("docs");
        assert!(state.is_open("docs"));
        assert!(!state.is_open("products"));
        state.toggle_menu("docs");
        assert_eq!(state.open_menu, None);
    }

    #[test]
    fn selecting_an_item_closes_the_menu() {
        let mut state = NavBarState::default();
        state.toggle_menu("products");
        let selection = state.select("products", "billing");
        assert_eq!(
            selection,
            NavSelection {
                menu_id: "products".to_string(),
                item_id: "billing".to_string(),
            }
        );
        assert_eq!(state.open_menu, None);
    }

    #[test]
    fn blank_search_is_not_submitted() {
        let mut state = NavBarState::default();
        assert_eq!(state.submit_search(), None);
        state.set_search_text("   \t");
        assert_eq!(state.submit_search(), None);
        state.set_search_text("  invoices ");
        assert_eq!(state.submit_search(), Some("invoices".to_string()));
    }

    #[test]
    fn mobile_search_closes_menus_and_submission_collapses_it() {
        let mut state = NavBarState::default();
        state.toggle_menu(ACCOUNT_MENU_ID);
        state.toggle_mobile_search();
        assert!(state.mobile_search_open);
        assert_eq!(state.open_menu, None);

        state.set_search_text("q");
        assert_eq!(state.submit_search(), Some("q".to_string()));
        assert!(!state.mobile_search_open);
    }
}
