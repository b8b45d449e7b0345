//! Story pages. Each entry point returns a detached view for the registry.

use leptos::*;

mod components;
mod foundations;

pub use foundations::{swatch_groups, variables_with_prefix, SwatchGroup};

pub(crate) fn colors() -> View {
    view! { <foundations::ColorsStory /> }.into_view()
}

pub(crate) fn typography() -> View {
    view! { <foundations::TypographyStory /> }.into_view()
}

pub(crate) fn spacing() -> View {
    view! { <foundations::SpacingStory /> }.into_view()
}

pub(crate) fn contrast() -> View {
    view! { <foundations::ContrastStory /> }.into_view()
}

pub(crate) fn buttons() -> View {
    view! { <components::ButtonsStory /> }.into_view()
}

pub(crate) fn cards() -> View {
    view! { <components::CardsStory /> }.into_view()
}

pub(crate) fn metric_cards() -> View {
    view! { <components::MetricCardsStory /> }.into_view()
}

pub(crate) fn nav_bar() -> View {
    view! { <components::NavBarStory /> }.into_view()
}

pub(crate) fn tabs() -> View {
    view! { <components::TabsStory /> }.into_view()
}

pub(crate) fn avatars() -> View {
    view! { <components::AvatarsStory /> }.into_view()
}

pub(crate) fn loaders() -> View {
    view! { <components::LoadersStory /> }.into_view()
}

pub(crate) fn transfer_list() -> View {
    view! { <components::TransferListStory /> }.into_view()
}
