use super::*;

/// Sparkline viewbox width.
pub const SPARKLINE_WIDTH: f64 = 120.0;
/// Sparkline viewbox height.
pub const SPARKLINE_HEIGHT: f64 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Direction of change shown beside a metric.
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Flat => "flat",
        }
    }

    pub(crate) fn icon(self) -> IconName {
        match self {
            Self::Up => IconName::TrendUp,
            Self::Down => IconName::TrendDown,
            Self::Flat => IconName::TrendFlat,
        }
    }

    /// Trend color readable on `variant`'s fill.
    ///
    /// Navy and white cards keep fixed fills, so they use fixed component
    /// tokens. Outlined cards sit on the page surface and follow the mode
    /// through the semantic status roles.
    pub fn color_on(self, variant: CardVariant) -> String {
        let path = match (variant, self) {
            (CardVariant::Navy, Self::Up) => "component-metric-trend-up-inverse",
            (CardVariant::Navy, Self::Down) => "component-metric-trend-down-inverse",
            (CardVariant::Navy, Self::Flat) => "component-metric-trend-flat-inverse",
            (CardVariant::White, Self::Up) => "component-metric-trend-up",
            (CardVariant::White, Self::Down) => "component-metric-trend-down",
            (CardVariant::White, Self::Flat) => "component-metric-trend-flat",
            (CardVariant::Outlined, Self::Up) => "semantic-status-success",
            (CardVariant::Outlined, Self::Down) => "semantic-status-error",
            (CardVariant::Outlined, Self::Flat) => "semantic-text-secondary",
        };
        var_ref(path)
    }
}

/// SVG polyline `points` for `samples` scaled into a `width` x `height` box.
///
/// Returns `None` for fewer than two finite samples or a degenerate box. A
/// constant series is drawn as a horizontal line through the middle.
pub fn sparkline_points(samples: &[f64], width: f64, height: f64) -> Option<String> {
    let values: Vec<f64> = samples.iter().copied().filter(|v| v.is_finite()).collect();
    if values.len() < 2 || !(width > 0.0 && height > 0.0) {
        return None;
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    let step = width / (values.len() - 1) as f64;

    let points = values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let x = step * index as f64;
            let y = if range == 0.0 {
                height / 2.0
            } else {
                height - (value - min) / range * height
            };
            format!("{x:.2},{y:.2}")
        })
        .collect::<Vec<_>>()
        .join(" ");
    Some(points)
}

#[component]
/// Headline number with optional unit, trend and sparkline.
pub fn MetricCard(
    #[prop(into)] label: String,
    #[prop(into)] value: MaybeSignal<String>,
    #[prop(optional, into)] unit: Option<String>,
    #[prop(optional)] trend: Option<Trend>,
    /// Change caption shown next to the trend, e.g. `+4.2%`.
    #[prop(optional, into)]
    delta: Option<String>,
    #[prop(optional, into)] samples: MaybeSignal<Vec<f64>>,
    #[prop(default = CardVariant::White)] variant: CardVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let points = Signal::derive(move || {
        samples.with(|samples| sparkline_points(samples, SPARKLINE_WIDTH, SPARKLINE_HEIGHT))
    });

    view! {
        <Card variant=variant layout_class=layout_class.unwrap_or("") aria_label=label.clone()>
            <div
                class="ui-metric-card"
                data-ui-primitive="true"
                data-ui-kind="metric-card"
                data-ui-trend=trend.map(Trend::token)
            >
                <div
                    data-ui-slot="label"
                    style=inline_style(&[("font-size", var_ref("font-size-sm"))])
                >
                    {label}
                </div>
                <div
                    data-ui-slot="value"
                    style=inline_style(&[
                        ("font-size", var_ref("font-size-3xl")),
                        ("font-weight", var_ref("font-weight-bold")),
                        ("line-height", var_ref("font-line-height-tight")),
                    ])
                >
                    {move || value.get()}
                    {unit.map(|unit| view! { <span data-ui-slot="unit">{unit}</span> })}
                </div>
                {trend.map(|trend| view! {
                    <div
                        data-ui-slot="trend"
                        style=inline_style(&[("color", trend.color_on(variant))])
                    >
                        <Icon icon=trend.icon() size=IconSize::Sm />
                        {delta.clone().map(|delta| view! { <span>{delta}</span> })}
                    </div>
                })}
                {move || points.get().map(|points| view! {
                    <svg
                        data-ui-slot="sparkline"
                        viewBox=format!("0 0 {SPARKLINE_WIDTH} {SPARKLINE_HEIGHT}")
                        preserveAspectRatio="none"
                        aria-hidden="true"
                    >
                        <polyline
                            points=points
                            fill="none"
                            stroke=var_ref("component-metric-sparkline-stroke")
                            stroke-width="2"
                        ></polyline>
                    </svg>
                })}
            </div>
        </Card>
    }
}
