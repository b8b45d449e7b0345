use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use system_ui::{inject_component_styles, inject_design_tokens};
use ui_showcase::{initial_story_slug, load_preferences, story_path, ShowcaseLayout, StoryPage};

/// Installs the token and component stylesheets before the first render.
pub fn boot() {
    match inject_design_tokens() {
        Ok(()) => logging::log!("harbor design tokens injected"),
        Err(err) => logging::warn!("design token injection failed: {err}"),
    }
    if let Err(err) = inject_component_styles() {
        logging::warn!("component style injection failed: {err}");
    }
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Harbor design system" />
        <Meta name="description" content="Tokens, themes and components of the Harbor design system." />

        <Router>
            <ShowcaseLayout>
                <Routes>
                    <Route path="" view=CatalogEntry />
                    <Route path="/stories/:slug" view=StoryRoute />
                    <Route path="/*any" view=StoryRoute />
                </Routes>
            </ShowcaseLayout>
        </Router>
    }
}

#[component]
fn CatalogEntry() -> impl IntoView {
    let slug = initial_story_slug(&load_preferences());
    view! { <Redirect path=story_path(slug) /> }
}

#[component]
fn StoryRoute() -> impl IntoView {
    let params = use_params_map();
    let slug = move || {
        params
            .with(|map| map.get("slug").cloned())
            .unwrap_or_else(|| "unknown".to_string())
    };

    move || view! { <StoryPage slug=slug() /> }
}
