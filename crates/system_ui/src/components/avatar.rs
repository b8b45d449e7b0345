use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Avatar diameter.
pub enum AvatarSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl AvatarSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn diameter(self) -> String {
        var_ref(&format!("component-avatar-size-{}", self.token()))
    }

    fn icon_size(self) -> IconSize {
        match self {
            Self::Sm => IconSize::Xs,
            Self::Md => IconSize::Sm,
            Self::Lg => IconSize::Lg,
        }
    }
}

/// Upper-cased first letters of the first and last words of `name`.
///
/// A single word yields one letter; a blank name yields `None`.
pub fn initials(name: &str) -> Option<String> {
    let mut words = name.split_whitespace();
    let first = words.next()?.chars().next()?;
    let mut out: String = first.to_uppercase().collect();
    if let Some(last) = words.last().and_then(|word| word.chars().next()) {
        out.extend(last.to_uppercase());
    }
    Some(out)
}

/// Which face an avatar shows given its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarFace {
    Image(String),
    Initials(String),
    Placeholder,
}

/// Image when a source is present and has not failed, initials when the
/// name yields any, otherwise the placeholder glyph.
pub fn avatar_face(src: Option<&str>, name: &str, image_failed: bool) -> AvatarFace {
    match src {
        Some(src) if !src.trim().is_empty() && !image_failed => AvatarFace::Image(src.to_string()),
        _ => initials(name).map_or(AvatarFace::Placeholder, AvatarFace::Initials),
    }
}

/// Number of avatars rendered and the hidden remainder for `+N`.
pub fn avatar_overflow(total: usize, max: usize) -> (usize, usize) {
    let shown = total.min(max.max(1));
    (shown, total - shown)
}

fn avatar_style(size: AvatarSize) -> String {
    inline_style(&[
        ("display", "inline-flex".to_string()),
        ("align-items", "center".to_string()),
        ("justify-content", "center".to_string()),
        ("flex-shrink", "0".to_string()),
        ("overflow", "hidden".to_string()),
        ("width", size.diameter()),
        ("height", size.diameter()),
        ("border-radius", var_ref("radius-full")),
        ("background", var_ref("component-avatar-fallback-background")),
        ("color", var_ref("component-avatar-fallback-text")),
        ("font-weight", var_ref("font-weight-semibold")),
    ])
}

const AVATAR_IMAGE_STYLE: &str =
    "display: block; width: 100%; height: 100%; object-fit: cover; border-radius: inherit;";

#[component]
/// Circular user image that falls back to initials when the image is
/// missing or fails to load.
pub fn Avatar(
    #[prop(into)] name: String,
    #[prop(optional, into)] src: Option<String>,
    #[prop(default = AvatarSize::Md)] size: AvatarSize,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let image_failed = create_rw_signal(false);
    let label = name.clone();
    let face = move || avatar_face(src.as_deref(), &name, image_failed.get());

    view! {
        <span
            class=merge_layout_class("ui-avatar", layout_class)
            style=avatar_style(size)
            role="img"
            aria-label=label.clone()
            data-ui-primitive="true"
            data-ui-kind="avatar"
            data-ui-size=size.token()
        >
            {move || match face() {
                AvatarFace::Image(src) => view! {
                    <img
                        src=src
                        alt=""
                        data-ui-slot="image"
                        style=AVATAR_IMAGE_STYLE
                        on:error=move |_| image_failed.set(true)
                    />
                }
                .into_view(),
                AvatarFace::Initials(text) => view! {
                    <span data-ui-slot="initials" aria-hidden="true">{text}</span>
                }
                .into_view(),
                AvatarFace::Placeholder => view! {
                    <span data-ui-slot="placeholder" aria-hidden="true">
                        <Icon icon=IconName::Person size=size.icon_size() />
                    </span>
                }
                .into_view(),
            }}
        </span>
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One member of an [`AvatarGroup`].
pub struct AvatarEntry {
    pub name: String,
    pub src: Option<String>,
}

impl AvatarEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            src: None,
        }
    }

    pub fn with_src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }
}

#[component]
/// Overlapping avatar row that collapses members beyond `max` into `+N`.
pub fn AvatarGroup(
    entries: Vec<AvatarEntry>,
    #[prop(default = 4)] max: usize,
    #[prop(default = AvatarSize::Md)] size: AvatarSize,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let (shown, hidden) = avatar_overflow(entries.len(), max);
    let avatars = entries
        .into_iter()
        .take(shown)
        .map(|entry| match entry.src {
            Some(src) => view! { <Avatar name=entry.name src=src size=size /> }.into_view(),
            None => view! { <Avatar name=entry.name size=size /> }.into_view(),
        })
        .collect_view();

    view! {
        <span
            class=merge_layout_class("ui-avatar-group", layout_class)
            role="group"
            data-ui-primitive="true"
            data-ui-kind="avatar-group"
            data-ui-size=size.token()
        >
            {avatars}
            {(hidden > 0).then(|| view! {
                <span
                    style=avatar_style(size)
                    data-ui-slot="overflow"
                    aria-label=format!("{hidden} more")
                >
                    {format!("+{hidden}")}
                </span>
            })}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn initials_use_first_and_last_words() {
        assert_eq!(initials("Ada Lovelace"), Some("AL".to_string()));
        assert_eq!(initials("grace brewster murray hopper"), Some("GH".to_string()));
        assert_eq!(initials("  plato  "), Some("P".to_string()));
        assert_eq!(initials("   "), None);
        assert_eq!(initials(""), None);
    }

    #[test]
    fn initials_uppercase_non_ascii_letters() {
        assert_eq!(initials("émile zola"), Some("ÉZ".to_string()));
    }

    #[test]
    fn face_falls_back_from_image_to_initials_to_placeholder() {
        assert_eq!(
            avatar_face(Some("/a.png"), "Ada Lovelace", false),
            AvatarFace::Image("/a.png".to_string())
        );
        assert_eq!(
            avatar_face(Some("/a.png"), "Ada Lovelace", true),
            AvatarFace::Initials("AL".to_string())
        );
        assert_eq!(avatar_face(Some(" "), "Ada", false), AvatarFace::Initials("A".to_string()));
        assert_eq!(avatar_face(None, "", false), AvatarFace::Placeholder);
    }

    #[test]
    fn group_overflow_counts_hidden_members() {
        assert_eq!(avatar_overflow(6, 4), (4, 2));
        assert_eq!(avatar_overflow(3, 4), (3, 0));
        assert_eq!(avatar_overflow(2, 0), (1, 1));
        assert_eq!(avatar_overflow(0, 4), (0, 0));
    }

    #[test]
    fn avatar_is_a_clipped_circle_holding_a_cover_image() {
        let style = avatar_style(AvatarSize::Lg);
        assert!(style.starts_with("display: inline-flex;"));
        assert!(style.contains("overflow: hidden;"));
        assert!(style.contains("border-radius: var(--harbor-radius-full);"));
        assert!(AVATAR_IMAGE_STYLE.contains("width: 100%;"));
        assert!(AVATAR_IMAGE_STYLE.contains("object-fit: cover;"));
    }
}
