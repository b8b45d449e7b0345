//! Harbor story catalog.
//!
//! Foundations pages render the token store (palette, type scale, spacing,
//! contrast audit) straight from `design_tokens`; component pages compose
//! `system_ui` with live callbacks so interaction rules can be reviewed in
//! the browser. The viewer's theme choice and last story persist in
//! `localStorage`.

use leptos::*;
use system_ui::prelude::*;

mod preferences;
mod registry;
mod stories;

pub use preferences::{
    load_preferences, save_preferences, ShowcasePreferences, PREFERENCES_KEY,
};
pub use registry::{default_story, find_story, stories_in, Story, StoryGroup, STORIES};
pub use stories::{swatch_groups, variables_with_prefix, SwatchGroup};

/// Path of a story page.
pub fn story_path(slug: &str) -> String {
    format!("/stories/{slug}")
}

#[derive(Debug, Clone, Copy)]
struct PreferencesContext(RwSignal<ShowcasePreferences>);

#[component]
fn ThemeToggle(preferences: RwSignal<ShowcasePreferences>) -> impl IntoView {
    let mode = Signal::derive(move || preferences.with(|p| p.theme));
    move || {
        let icon = if mode.get().is_dark() { IconName::Sunny } else { IconName::Moon };
        view! {
            <IconButton
                icon=icon
                ui_slot="theme-toggle"
                aria_label=format!("Switch to {} mode", mode.get().toggled())
                on_click=Callback::new(move |_| preferences.update(|p| p.theme = p.theme.toggled()))
            />
        }
    }
}

#[component]
fn StoryNav() -> impl IntoView {
    let PreferencesContext(preferences) = expect_context::<PreferencesContext>();
    let current = Signal::derive(move || preferences.with(|p| p.last_story.clone()));

    view! {
        <nav aria-label="Stories" data-ui-slot="story-nav">
            <Stack gap=LayoutGap::Md>
                {StoryGroup::ALL
                    .into_iter()
                    .map(|group| view! {
                        <Stack gap=LayoutGap::Sm>
                            <Heading level=2 tone=TextTone::Secondary>{group.title()}</Heading>
                            <ul role="list">
                                {stories_in(group)
                                    .map(|story| {
                                        let is_current = move || {
                                            current.with(|slug| slug.as_deref() == Some(story.slug))
                                        };
                                        view! {
                                            <li>
                                                <a
                                                    href=story_path(story.slug)
                                                    aria-current=move || is_current().then_some("page")
                                                >
                                                    {story.title}
                                                </a>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </Stack>
                    })
                    .collect_view()}
            </Stack>
        </nav>
    }
}

#[component]
/// Page chrome: theme provider, header with the theme toggle and the story
/// navigation beside `children`.
pub fn ShowcaseLayout(children: Children) -> impl IntoView {
    let preferences = create_rw_signal(load_preferences());
    let last_saved = create_rw_signal(preferences.with_untracked(|p| p.encode().ok()));
    provide_context(PreferencesContext(preferences));

    create_effect(move |_| {
        let snapshot = preferences.get();
        let serialized = match snapshot.encode() {
            Ok(serialized) => serialized,
            Err(err) => {
                logging::warn!("showcase preferences serialize failed: {err}");
                return;
            }
        };
        if last_saved.get_untracked().as_deref() == Some(serialized.as_str()) {
            return;
        }
        last_saved.set(Some(serialized));
        if let Err(err) = save_preferences(&snapshot) {
            logging::warn!("showcase preferences save failed: {err}");
        }
    });

    let mode = Signal::derive(move || preferences.with(|p| p.theme));

    view! {
        <ThemeProvider mode=mode>
            <Surface variant=SurfaceVariant::Muted padding=LayoutPadding::None layout_class="showcase-root">
                <header data-ui-slot="showcase-header">
                    <Cluster justify=LayoutJustify::Between padding=LayoutPadding::Md>
                        <Heading level=1>"Harbor design system"</Heading>
                        <ThemeToggle preferences=preferences />
                    </Cluster>
                </header>
                <Cluster align=LayoutAlign::Start gap=LayoutGap::Lg padding=LayoutPadding::Md>
                    <StoryNav />
                    <main data-ui-slot="story" style="flex: 1; min-width: 0;">
                        {children()}
                    </main>
                </Cluster>
            </Surface>
        </ThemeProvider>
    }
}

#[component]
/// Renders the story registered under `slug`, or a not-found notice.
pub fn StoryPage(#[prop(into)] slug: String) -> impl IntoView {
    let Some(story) = find_story(&slug) else {
        return view! {
            <EmptyState>
                <Heading level=2>"Story not found"</Heading>
                <Text>{format!("No story is registered as \"{slug}\".")}</Text>
                <a href=story_path(default_story().slug)>"Back to the catalog"</a>
            </EmptyState>
        }
        .into_view();
    };

    if let Some(PreferencesContext(preferences)) = use_context::<PreferencesContext>() {
        if preferences.with_untracked(|p| p.last_story.as_deref() != Some(story.slug)) {
            preferences.update(|p| p.last_story = Some(story.slug.to_string()));
        }
    }

    view! {
        <article data-ui-slot="story-page" data-story=story.slug>
            <Stack gap=LayoutGap::Lg>
                <header>
                    <Heading level=2>{story.title}</Heading>
                    <Text tone=TextTone::Secondary>{story.summary}</Text>
                </header>
                {(story.render)()}
            </Stack>
        </article>
    }
    .into_view()
}

/// Slug to open at `/`: the last viewed story when it still exists.
pub fn initial_story_slug(preferences: &ShowcasePreferences) -> &'static str {
    preferences
        .last_story
        .as_deref()
        .and_then(find_story)
        .unwrap_or_else(default_story)
        .slug
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn story_paths_nest_under_stories() {
        assert_eq!(story_path("tabs"), "/stories/tabs");
    }

    #[test]
    fn initial_story_prefers_a_known_last_story() {
        let mut preferences = ShowcasePreferences::default();
        assert_eq!(initial_story_slug(&preferences), "colors");

        preferences.last_story = Some("transfer-list".to_string());
        assert_eq!(initial_story_slug(&preferences), "transfer-list");

        preferences.last_story = Some("retired-story".to_string());
        assert_eq!(initial_story_slug(&preferences), "colors");
    }
}
