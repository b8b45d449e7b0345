use super::*;
use crate::component_styles::{
    PULSE_ANIMATION, SLIDE_ANIMATION, SPIN_ANIMATION, VISUALLY_HIDDEN_CLASS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Loader animations.
pub enum LoaderVariant {
    #[default]
    Spinner,
    Dots,
    /// Linear bar; determinate when a value is supplied.
    Bar,
}

impl LoaderVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Spinner => "spinner",
            Self::Dots => "dots",
            Self::Bar => "bar",
        }
    }

    /// Keyframes name driving this variant, defined by the component stylesheet.
    pub fn animation_name(self) -> &'static str {
        match self {
            Self::Spinner => SPIN_ANIMATION,
            Self::Dots => PULSE_ANIMATION,
            Self::Bar => SLIDE_ANIMATION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Loader footprint.
pub enum LoaderSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl LoaderSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn extent(self) -> String {
        match self {
            Self::Sm => var_ref("spacing-md"),
            Self::Md => var_ref("spacing-lg"),
            Self::Lg => var_ref("spacing-2xl"),
        }
    }

    fn stroke(self) -> String {
        match self {
            Self::Sm => var_ref("spacing-2xs"),
            Self::Md | Self::Lg => var_ref("spacing-xs"),
        }
    }

    fn dot(self) -> String {
        match self {
            Self::Sm => var_ref("spacing-xs"),
            Self::Md => var_ref("spacing-sm"),
            Self::Lg => var_ref("spacing-md"),
        }
    }
}

fn loader_root_style(variant: LoaderVariant) -> String {
    match variant {
        LoaderVariant::Bar => inline_style(&[
            ("position", "relative".to_string()),
            ("display", "flex".to_string()),
            ("align-items", "center".to_string()),
            ("width", "100%".to_string()),
        ]),
        LoaderVariant::Spinner | LoaderVariant::Dots => inline_style(&[
            ("position", "relative".to_string()),
            ("display", "inline-flex".to_string()),
            ("align-items", "center".to_string()),
            ("gap", var_ref("spacing-xs")),
        ]),
    }
}

fn spinner_style(size: LoaderSize) -> String {
    inline_style(&[
        ("display", "inline-block".to_string()),
        ("box-sizing", "border-box".to_string()),
        ("width", size.extent()),
        ("height", size.extent()),
        ("border-style", "solid".to_string()),
        ("border-width", size.stroke()),
        ("border-color", var_ref("component-loader-track")),
        ("border-top-color", var_ref("component-loader-indicator")),
        ("border-radius", var_ref("radius-full")),
        ("animation-name", SPIN_ANIMATION.to_string()),
        ("animation-duration", var_ref("component-loader-cycle")),
        ("animation-timing-function", "linear".to_string()),
        ("animation-iteration-count", "infinite".to_string()),
    ])
}

fn dot_style(size: LoaderSize, index: usize) -> String {
    let cycle = var_ref("component-loader-cycle");
    inline_style(&[
        ("display", "inline-block".to_string()),
        ("width", size.dot()),
        ("height", size.dot()),
        ("background", var_ref("component-loader-indicator")),
        ("border-radius", var_ref("radius-full")),
        ("animation-name", PULSE_ANIMATION.to_string()),
        ("animation-duration", cycle.clone()),
        ("animation-delay", format!("calc({cycle} * {index} / 3)")),
        ("animation-timing-function", "ease-in-out".to_string()),
        ("animation-iteration-count", "infinite".to_string()),
    ])
}

fn bar_indicator_style(percent: Option<f64>) -> String {
    let mut entries = vec![
        ("display", "block".to_string()),
        ("height", "100%".to_string()),
        ("background", var_ref("component-loader-indicator")),
        ("border-radius", var_ref("radius-full")),
    ];
    match percent {
        Some(p) => {
            entries.push(("width", format!("{p:.1}%")));
            entries.push(("transition", "width 0.2s ease-out".to_string()));
        }
        None => {
            entries.push(("width", "40%".to_string()));
            entries.push(("animation-name", SLIDE_ANIMATION.to_string()));
            entries.push(("animation-duration", var_ref("component-loader-cycle")));
            entries.push(("animation-timing-function", "ease-in-out".to_string()));
            entries.push(("animation-iteration-count", "infinite".to_string()));
        }
    }
    inline_style(&entries)
}

/// Clamps a determinate progress value into `0..=100`; non-finite input is 0.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

#[component]
/// Busy indicator announced through `role="status"`.
pub fn Loader(
    #[prop(default = LoaderVariant::Spinner)] variant: LoaderVariant,
    #[prop(default = LoaderSize::Md)] size: LoaderSize,
    /// Accessible description of what is loading.
    #[prop(default = "Loading".into(), into)]
    label: String,
    /// Determinate progress for [`LoaderVariant::Bar`], in percent.
    #[prop(optional, into)]
    value: MaybeSignal<Option<f64>>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let percent = Signal::derive(move || value.get().map(clamp_percent));

    let body = match variant {
        LoaderVariant::Spinner => view! {
            <span data-ui-slot="spinner" aria-hidden="true" style=spinner_style(size)></span>
        }
        .into_view(),
        LoaderVariant::Dots => (0..3)
            .map(|index| {
                view! {
                    <span data-ui-slot="dot" aria-hidden="true" style=dot_style(size, index)></span>
                }
            })
            .collect_view(),
        LoaderVariant::Bar => view! {
            <span
                data-ui-slot="track"
                aria-hidden="true"
                style=inline_style(&[
                    ("display", "block".to_string()),
                    ("flex", "1 1 auto".to_string()),
                    ("overflow", "hidden".to_string()),
                    ("background", var_ref("component-loader-track")),
                    ("border-radius", var_ref("radius-full")),
                    ("height", var_ref("spacing-xs")),
                ])
            >
                <span
                    data-ui-slot="indicator"
                    data-ui-state=move || if percent.get().is_some() { "determinate" } else { "indeterminate" }
                    style=move || bar_indicator_style(percent.get())
                ></span>
            </span>
        }
        .into_view(),
    };

    view! {
        <span
            class=merge_layout_class("ui-loader", layout_class)
            role="status"
            aria-live="polite"
            aria-label=label.clone()
            aria-valuemin=move || percent.get().map(|_| 0)
            aria-valuemax=move || percent.get().map(|_| 100)
            aria-valuenow=move || percent.get().map(|p| p.round() as i32)
            data-ui-primitive="true"
            data-ui-kind="loader"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            style=loader_root_style(variant)
        >
            {body}
            <span data-ui-slot="label" class=VISUALLY_HIDDEN_CLASS>{label}</span>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn determinate_values_are_clamped() {
        assert_eq!(clamp_percent(-5.0), 0.0);
        assert_eq!(clamp_percent(42.5), 42.5);
        assert_eq!(clamp_percent(250.0), 100.0);
        assert_eq!(clamp_percent(f64::NAN), 0.0);
        assert_eq!(clamp_percent(f64::INFINITY), 0.0);
    }

    #[test]
    fn tokens_are_stable() {
        assert_eq!(LoaderVariant::default().token(), "spinner");
        assert_eq!(LoaderVariant::Bar.token(), "bar");
        assert_eq!(LoaderSize::Lg.extent(), "var(--harbor-spacing-2xl)");
    }

    #[test]
    fn spinner_draws_a_visible_ring_that_spins() {
        let style = spinner_style(LoaderSize::Md);
        assert!(style.contains("display: inline-block;"));
        assert!(style.contains("border-style: solid;"));
        assert!(style.contains("border-width: var(--harbor-spacing-xs);"));
        assert!(style.contains("animation-name: harbor-loader-spin;"));
        assert!(style.contains("animation-iteration-count: infinite;"));
    }

    #[test]
    fn dots_have_a_size_and_staggered_pulse() {
        let style = dot_style(LoaderSize::Sm, 2);
        assert!(style.contains("width: var(--harbor-spacing-xs);"));
        assert!(style.contains("height: var(--harbor-spacing-xs);"));
        assert!(style.contains("animation-name: harbor-loader-pulse;"));
        assert!(style.contains("calc(var(--harbor-component-loader-cycle) * 2 / 3)"));
    }

    #[test]
    fn only_the_indeterminate_bar_slides() {
        let moving = bar_indicator_style(None);
        assert!(moving.contains("animation-name: harbor-loader-slide;"));
        assert!(moving.contains("width: 40%;"));

        let fixed = bar_indicator_style(Some(62.5));
        assert!(!fixed.contains("animation-name"));
        assert!(fixed.contains("width: 62.5%;"));
        assert!(fixed.contains("height: 100%;"));
    }

    #[test]
    fn loader_root_is_laid_out() {
        assert!(loader_root_style(LoaderVariant::Dots).contains("display: inline-flex;"));
        assert!(loader_root_style(LoaderVariant::Bar).contains("display: flex;"));
    }
}
