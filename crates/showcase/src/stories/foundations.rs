use design_tokens::{
    audit_text_pairs, css_variables, var_ref, ContrastCheck, CssVariable, ThemeMode, TokenStore,
    WcagLevel, CSS_VARIABLE_PREFIX,
};
use leptos::*;
use system_ui::prelude::*;

/// Variables whose name continues `--harbor-` with `prefix`.
pub fn variables_with_prefix(prefix: &str) -> Vec<CssVariable> {
    let head = format!("--{CSS_VARIABLE_PREFIX}-{prefix}");
    match css_variables(&TokenStore::default()) {
        Ok(variables) => variables
            .into_iter()
            .filter(|variable| variable.name.starts_with(&head))
            .collect(),
        Err(err) => {
            logging::warn!("token flattening failed: {err}");
            Vec::new()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Swatches sharing a family segment, e.g. every `navy` shade.
pub struct SwatchGroup {
    pub family: String,
    pub swatches: Vec<CssVariable>,
}

/// Groups variables by the segment following `prefix`. Single-segment names
/// such as `color-white` fall into a `base` family.
pub fn swatch_groups(variables: Vec<CssVariable>, prefix: &str) -> Vec<SwatchGroup> {
    let head = format!("--{CSS_VARIABLE_PREFIX}-{prefix}");
    let mut groups: Vec<SwatchGroup> = Vec::new();
    for variable in variables {
        let Some(rest) = variable.name.strip_prefix(&head) else {
            continue;
        };
        let family = match rest.split_once('-') {
            Some((family, _)) => family.to_string(),
            None => "base".to_string(),
        };
        match groups.iter_mut().find(|group| group.family == family) {
            Some(group) => group.swatches.push(variable),
            None => groups.push(SwatchGroup {
                family,
                swatches: vec![variable],
            }),
        }
    }
    groups
}

fn css_reference(variable: &CssVariable) -> String {
    format!("var({})", variable.name)
}

fn format_ratio(ratio: f64) -> String {
    format!("{ratio:.2}:1")
}

#[component]
fn SwatchTile(variable: CssVariable) -> impl IntoView {
    view! {
        <figure data-ui-slot="swatch">
            <div
                aria-hidden="true"
                style=format!(
                    "background: {}; height: 3rem; border-radius: {}; border: 1px solid {};",
                    css_reference(&variable),
                    var_ref("radius-md"),
                    var_ref("semantic-border-default"),
                )
            ></div>
            <figcaption>
                <Text role=TextRole::Code>{variable.name.clone()}</Text>
                <Text role=TextRole::Caption tone=TextTone::Secondary>{variable.value.clone()}</Text>
            </figcaption>
        </figure>
    }
}

#[component]
fn SwatchSection(title: &'static str, prefix: &'static str) -> impl IntoView {
    let groups = swatch_groups(variables_with_prefix(prefix), prefix);
    view! {
        <Panel>
            <Stack gap=LayoutGap::Md>
                <Heading level=2>{title}</Heading>
                {groups
                    .into_iter()
                    .map(|group| view! {
                        <Stack gap=LayoutGap::Sm>
                            <Heading level=3 tone=TextTone::Secondary>{group.family}</Heading>
                            <Grid min_column=140>
                                {group
                                    .swatches
                                    .into_iter()
                                    .map(|variable| view! { <SwatchTile variable=variable /> })
                                    .collect_view()}
                            </Grid>
                        </Stack>
                    })
                    .collect_view()}
            </Stack>
        </Panel>
    }
}

#[component]
pub(super) fn ColorsStory() -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Lg>
            <SwatchSection title="Base palette" prefix="color-" />
            <SwatchSection title="Semantic roles" prefix="semantic-" />
        </Stack>
    }
}

#[component]
pub(super) fn TypographyStory() -> impl IntoView {
    let sizes = variables_with_prefix("font-size-");
    let weights = variables_with_prefix("font-weight-");
    let families = variables_with_prefix("font-family-");

    view! {
        <Stack gap=LayoutGap::Lg>
            <Panel>
                <Stack gap=LayoutGap::Md>
                    <Heading level=2>"Families"</Heading>
                    {families
                        .into_iter()
                        .map(|variable| view! {
                            <div style=format!("font-family: {};", css_reference(&variable))>
                                <Text role=TextRole::Code>{variable.name.clone()}</Text>
                                <p>"Harbor keeps every surface on one token grid."</p>
                            </div>
                        })
                        .collect_view()}
                </Stack>
            </Panel>
            <Panel>
                <Stack gap=LayoutGap::Sm>
                    <Heading level=2>"Sizes"</Heading>
                    {sizes
                        .into_iter()
                        .map(|variable| {
                            let value = variable.value.clone();
                            let style = format!("font-size: {};", css_reference(&variable));
                            view! {
                            <Cluster gap=LayoutGap::Md>
                                <Badge>{value}</Badge>
                                <span style=style>
                                    "Quarterly revenue"
                                </span>
                            </Cluster>
                            }
                        })
                        .collect_view()}
                </Stack>
            </Panel>
            <Panel>
                <Stack gap=LayoutGap::Sm>
                    <Heading level=2>"Weights"</Heading>
                    {weights
                        .into_iter()
                        .map(|variable| view! {
                            <span style=format!("font-weight: {};", css_reference(&variable))>
                                {format!("{} ({})", variable.name, variable.value)}
                            </span>
                        })
                        .collect_view()}
                </Stack>
            </Panel>
        </Stack>
    }
}

#[component]
pub(super) fn SpacingStory() -> impl IntoView {
    let spacing = variables_with_prefix("spacing-");
    let radii = variables_with_prefix("radius-");
    let shadows = variables_with_prefix("shadow-");
    let accent = var_ref("semantic-brand-secondary");

    view! {
        <Stack gap=LayoutGap::Lg>
            <Panel>
                <Stack gap=LayoutGap::Sm>
                    <Heading level=2>"Spacing"</Heading>
                    {spacing
                        .into_iter()
                        .map(|variable| {
                            let name = variable.name.clone();
                            let value = variable.value.clone();
                            let style = format!(
                                "display: inline-block; height: 0.75rem; width: {}; background: {};",
                                css_reference(&variable),
                                accent,
                            );
                            view! {
                            <Cluster gap=LayoutGap::Md>
                                <Text role=TextRole::Code>{name}</Text>
                                <span
                                    aria-hidden="true"
                                    style=style
                                ></span>
                                <Text tone=TextTone::Secondary>{value}</Text>
                            </Cluster>
                            }
                        })
                        .collect_view()}
                </Stack>
            </Panel>
            <Panel>
                <Stack gap=LayoutGap::Sm>
                    <Heading level=2>"Radius"</Heading>
                    <Grid min_column=120>
                        {radii
                            .into_iter()
                            .map(|variable| view! {
                                <div
                                    style=format!(
                                        "height: 4rem; border-radius: {}; border: 2px solid {};",
                                        css_reference(&variable),
                                        var_ref("semantic-border-strong"),
                                    )
                                >
                                    <Text role=TextRole::Caption>{variable.value.clone()}</Text>
                                </div>
                            })
                            .collect_view()}
                    </Grid>
                </Stack>
            </Panel>
            <Panel>
                <Stack gap=LayoutGap::Sm>
                    <Heading level=2>"Elevation"</Heading>
                    <Grid min_column=160>
                        {shadows
                            .into_iter()
                            .map(|variable| view! {
                                <div
                                    style=format!(
                                        "height: 4rem; box-shadow: {}; background: {};",
                                        css_reference(&variable),
                                        var_ref("semantic-surface-paper"),
                                    )
                                >
                                    <Text role=TextRole::Code>{variable.name.clone()}</Text>
                                </div>
                            })
                            .collect_view()}
                    </Grid>
                </Stack>
            </Panel>
        </Stack>
    }
}

#[component]
fn ContrastRow(check: ContrastCheck) -> impl IntoView {
    let (tone, verdict) = if check.passes {
        (TextTone::Success, "pass")
    } else {
        (TextTone::Danger, "fail")
    };
    view! {
        <tr>
            <td>{check.foreground_role}</td>
            <td>{check.background_role}</td>
            <td>
                <span style=format!(
                    "color: {}; background: {}; padding: 0 {};",
                    check.foreground,
                    check.background,
                    var_ref("spacing-xs"),
                )>"Aa"</span>
            </td>
            <td>{format_ratio(check.ratio)}</td>
            <td><Badge tone=tone>{verdict}</Badge></td>
        </tr>
    }
}

#[component]
pub(super) fn ContrastStory() -> impl IntoView {
    let level = WcagLevel::Aa;
    view! {
        <Stack gap=LayoutGap::Lg>
            {[ThemeMode::Light, ThemeMode::Dark]
                .into_iter()
                .map(|mode| {
                    let checks = audit_text_pairs(mode, level);
                    let failures = checks.iter().filter(|check| !check.passes).count();
                    view! {
                        <Panel>
                            <Stack gap=LayoutGap::Sm>
                                <Cluster justify=LayoutJustify::Between>
                                    <Heading level=2>{format!("{mode} mode")}</Heading>
                                    <Badge tone=if failures == 0 { TextTone::Success } else { TextTone::Danger }>
                                        {format!("{failures} below {}", format_ratio(level.min_ratio()))}
                                    </Badge>
                                </Cluster>
                                <table data-ui-slot="contrast-table">
                                    <thead>
                                        <tr>
                                            <th scope="col">"Foreground"</th>
                                            <th scope="col">"Background"</th>
                                            <th scope="col">"Sample"</th>
                                            <th scope="col">"Ratio"</th>
                                            <th scope="col">{level.token().to_uppercase()}</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {checks
                                            .into_iter()
                                            .map(|check| view! { <ContrastRow check=check /> })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            </Stack>
                        </Panel>
                    }
                })
                .collect_view()}
        </Stack>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn base_palette_groups_by_family() {
        let groups = swatch_groups(variables_with_prefix("color-"), "color-");
        let families: Vec<&str> = groups.iter().map(|group| group.family.as_str()).collect();
        assert_eq!(families, vec!["base", "navy", "gray", "teal", "red", "amber", "green"]);

        let navy = &groups[1];
        assert_eq!(navy.swatches.len(), 11);
        assert_eq!(navy.swatches[9].name, "--harbor-color-navy-900");
        assert_eq!(groups[0].swatches.len(), 2);
    }

    #[test]
    fn semantic_roles_group_by_role() {
        let groups = swatch_groups(variables_with_prefix("semantic-"), "semantic-");
        let families: Vec<&str> = groups.iter().map(|group| group.family.as_str()).collect();
        assert_eq!(
            families,
            vec!["text", "surface", "border", "brand", "status", "focus"]
        );
    }

    #[test]
    fn prefixes_do_not_leak_into_other_categories() {
        assert!(variables_with_prefix("radius-")
            .iter()
            .all(|variable| variable.name.starts_with("--harbor-radius-")));
        assert!(variables_with_prefix("nothing-").is_empty());
    }

    #[test]
    fn ratios_render_with_two_decimals() {
        assert_eq!(format_ratio(21.0), "21.00:1");
        assert_eq!(format_ratio(4.4999), "4.50:1");
    }
}
