use leptos::View;
use serde::Serialize;

use crate::stories;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Navigation section a story is listed under.
pub enum StoryGroup {
    Foundations,
    Components,
}

impl StoryGroup {
    pub const ALL: [Self; 2] = [Self::Foundations, Self::Components];

    pub fn title(self) -> &'static str {
        match self {
            Self::Foundations => "Foundations",
            Self::Components => "Components",
        }
    }
}

#[derive(Clone, Copy, Serialize)]
/// One demo page.
pub struct Story {
    /// URL segment; lowercase kebab-case, unique.
    pub slug: &'static str,
    pub title: &'static str,
    pub group: StoryGroup,
    pub summary: &'static str,
    #[serde(skip)]
    pub render: fn() -> View,
}

impl std::fmt::Debug for Story {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Story")
            .field("slug", &self.slug)
            .field("group", &self.group)
            .finish_non_exhaustive()
    }
}

/// Every story, in navigation order.
pub static STORIES: &[Story] = &[
    Story {
        slug: "colors",
        title: "Colors",
        group: StoryGroup::Foundations,
        summary: "Base color scales and semantic roles.",
        render: stories::colors,
    },
    Story {
        slug: "typography",
        title: "Typography",
        group: StoryGroup::Foundations,
        summary: "Font families, sizes, weights and line heights.",
        render: stories::typography,
    },
    Story {
        slug: "spacing",
        title: "Spacing and radius",
        group: StoryGroup::Foundations,
        summary: "Spacing scale, corner radii and elevation.",
        render: stories::spacing,
    },
    Story {
        slug: "contrast",
        title: "Contrast audit",
        group: StoryGroup::Foundations,
        summary: "WCAG ratios for every semantic text pair in both modes.",
        render: stories::contrast,
    },
    Story {
        slug: "buttons",
        title: "Buttons",
        group: StoryGroup::Components,
        summary: "Button variants, sizes, shapes and icon buttons.",
        render: stories::buttons,
    },
    Story {
        slug: "cards",
        title: "Cards",
        group: StoryGroup::Components,
        summary: "Navy, white and outlined cards with headers.",
        render: stories::cards,
    },
    Story {
        slug: "metric-card",
        title: "Metric card",
        group: StoryGroup::Components,
        summary: "Headline numbers with trends and sparklines.",
        render: stories::metric_cards,
    },
    Story {
        slug: "nav-bar",
        title: "Navigation bar",
        group: StoryGroup::Components,
        summary: "Top bar with menus, search and account actions.",
        render: stories::nav_bar,
    },
    Story {
        slug: "tabs",
        title: "Tabs",
        group: StoryGroup::Components,
        summary: "Keyboard navigable tab strip.",
        render: stories::tabs,
    },
    Story {
        slug: "avatars",
        title: "Avatars",
        group: StoryGroup::Components,
        summary: "Image, initials and placeholder avatars plus groups.",
        render: stories::avatars,
    },
    Story {
        slug: "loaders",
        title: "Loaders",
        group: StoryGroup::Components,
        summary: "Spinner, dots and progress bar.",
        render: stories::loaders,
    },
    Story {
        slug: "transfer-list",
        title: "Transfer list",
        group: StoryGroup::Components,
        summary: "Dual list with filtering and disabled items.",
        render: stories::transfer_list,
    },
];

/// Looks a story up by slug.
pub fn find_story(slug: &str) -> Option<&'static Story> {
    STORIES.iter().find(|story| story.slug == slug)
}

pub fn stories_in(group: StoryGroup) -> impl Iterator<Item = &'static Story> {
    STORIES.iter().filter(move |story| story.group == group)
}

/// Story shown when no slug is given.
pub fn default_story() -> &'static Story {
    &STORIES[0]
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn slugs_are_unique_kebab_case() {
        let mut seen = BTreeSet::new();
        for story in STORIES {
            assert!(seen.insert(story.slug), "duplicate slug {}", story.slug);
            assert!(
                story
                    .slug
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "slug {} is not kebab-case",
                story.slug
            );
        }
    }

    #[test]
    fn every_group_has_stories() {
        for group in StoryGroup::ALL {
            assert!(stories_in(group).count() > 0, "{} is empty", group.title());
        }
    }

    #[test]
    fn lookup_by_slug() {
        assert_eq!(find_story("metric-card").map(|story| story.title), Some("Metric card"));
        assert!(find_story("missing").is_none());
        assert_eq!(default_story().slug, "colors");
    }
}
