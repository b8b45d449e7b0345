use leptos::*;
use system_ui::prelude::*;

const EVENT_LOG_CAPACITY: usize = 5;

/// Prepends `entry`, dropping the oldest entries beyond `capacity`.
fn record_event(events: &mut Vec<String>, entry: String, capacity: usize) {
    events.insert(0, entry);
    events.truncate(capacity);
}

#[component]
fn EventLog(events: RwSignal<Vec<String>>) -> impl IntoView {
    view! {
        <Surface variant=SurfaceVariant::Inset ui_slot="event-log" aria_label="Event log".to_string()>
            {move || {
                let entries = events.get();
                if entries.is_empty() {
                    view! { <Text tone=TextTone::Secondary>"No events yet."</Text> }.into_view()
                } else {
                    entries
                        .into_iter()
                        .map(|entry| view! { <Text role=TextRole::Code>{entry}</Text> })
                        .collect_view()
                }
            }}
        </Surface>
    }
}

fn log_to(events: RwSignal<Vec<String>>) -> impl Fn(String) + Copy {
    move |entry| events.update(|events| record_event(events, entry, EVENT_LOG_CAPACITY))
}

#[component]
pub(super) fn ButtonsStory() -> impl IntoView {
    let clicks = create_rw_signal(0_u32);
    view! {
        <Stack gap=LayoutGap::Lg>
            <Panel>
                <Stack gap=LayoutGap::Md>
                    <Heading level=2>"Variants"</Heading>
                    <Cluster gap=LayoutGap::Sm>
                        <Button variant=ButtonVariant::Primary on_click=Callback::new(move |_| clicks.update(|n| *n += 1))>
                            "Primary"
                        </Button>
                        <Button variant=ButtonVariant::Secondary>"Secondary"</Button>
                        <Button>"Standard"</Button>
                        <Button variant=ButtonVariant::Quiet>"Quiet"</Button>
                        <Button variant=ButtonVariant::Danger leading_icon=IconName::Dismiss>"Delete"</Button>
                        <Button variant=ButtonVariant::Primary disabled=true>"Disabled"</Button>
                    </Cluster>
                    <Text tone=TextTone::Secondary>
                        {move || format!("Primary clicked {} times", clicks.get())}
                    </Text>
                </Stack>
            </Panel>
            <Panel>
                <Stack gap=LayoutGap::Md>
                    <Heading level=2>"Sizes and shapes"</Heading>
                    <Cluster gap=LayoutGap::Sm>
                        <Button size=ButtonSize::Sm>"Small"</Button>
                        <Button size=ButtonSize::Md>"Medium"</Button>
                        <Button size=ButtonSize::Lg>"Large"</Button>
                        <Button shape=ButtonShape::Pill variant=ButtonVariant::Secondary trailing_icon=IconName::ChevronRight>
                            "Pill"
                        </Button>
                    </Cluster>
                    <Cluster gap=LayoutGap::Sm>
                        <IconButton icon=IconName::Search aria_label="Search".to_string() />
                        <IconButton icon=IconName::Navigation aria_label="Open navigation".to_string() />
                        <IconButton icon=IconName::Checkmark variant=ButtonVariant::Primary aria_label="Confirm".to_string() />
                        <IconButton icon=IconName::Dismiss variant=ButtonVariant::Danger aria_label="Dismiss".to_string() />
                    </Cluster>
                </Stack>
            </Panel>
        </Stack>
    }
}

#[component]
pub(super) fn CardsStory() -> impl IntoView {
    view! {
        <Grid min_column=260>
            <Card variant=CardVariant::Navy>
                <CardHeader title="Navy" subtitle="Hero summaries" />
                <Text>"Inverse text on the brand surface."</Text>
            </Card>
            <Card variant=CardVariant::White>
                <CardHeader title="White" subtitle="Default paper">
                    <Badge tone=TextTone::Accent>"default"</Badge>
                </CardHeader>
                <Text>"Raised paper card for most content."</Text>
            </Card>
            <Card variant=CardVariant::Outlined>
                <CardHeader title="Outlined" subtitle="Low emphasis" />
                <Text>"Hairline border, no shadow."</Text>
            </Card>
        </Grid>
    }
}

#[component]
pub(super) fn MetricCardsStory() -> impl IntoView {
    let visitors = create_rw_signal(vec![420.0, 435.0, 410.0, 470.0, 520.0, 505.0, 560.0]);
    let latest = Signal::derive(move || {
        visitors.with(|samples| {
            samples
                .last()
                .map(|value| format!("{value:.0}"))
                .unwrap_or_default()
        })
    });

    view! {
        <Stack gap=LayoutGap::Lg>
            <Grid min_column=240>
                <MetricCard
                    label="Monthly revenue"
                    value="48.2"
                    unit="k USD"
                    trend=Trend::Up
                    delta="+6.4%"
                    samples=vec![31.0, 33.5, 32.0, 38.0, 41.5, 45.0, 48.2]
                    variant=CardVariant::Navy
                />
                <MetricCard
                    label="Churn"
                    value="2.1"
                    unit="%"
                    trend=Trend::Down
                    delta="-0.3 pts"
                    samples=vec![2.9, 2.7, 2.6, 2.4, 2.2, 2.1]
                />
                <MetricCard
                    label="Open tickets"
                    value="17"
                    trend=Trend::Flat
                    delta="no change"
                    samples=vec![17.0, 17.0, 17.0, 17.0]
                    variant=CardVariant::Outlined
                />
                <MetricCard label="New region" value="0" samples=vec![0.0] />
                <MetricCard
                    label="Live visitors"
                    value=latest
                    trend=Trend::Up
                    samples=Signal::derive(move || visitors.get())
                />
            </Grid>
            <Cluster gap=LayoutGap::Sm>
                <Button
                    variant=ButtonVariant::Secondary
                    on_click=Callback::new(move |_| {
                        visitors.update(|samples| {
                            let next = samples.last().copied().unwrap_or(0.0) * 1.04;
                            samples.push(next.round());
                            if samples.len() > 12 {
                                samples.remove(0);
                            }
                        })
                    })
                >
                    "Add sample"
                </Button>
            </Cluster>
        </Stack>
    }
}

#[component]
pub(super) fn NavBarStory() -> impl IntoView {
    let events = create_rw_signal(Vec::<String>::new());
    let log = log_to(events);
    let menus = vec![
        NavMenu::new(
            "products",
            "Products",
            vec![
                NavItem::new("billing", "Billing"),
                NavItem::new("payments", "Payments"),
                NavItem::new("reports", "Reports"),
            ],
        ),
        NavMenu::new(
            "resources",
            "Resources",
            vec![NavItem::new("docs", "Documentation"), NavItem::new("status", "System status")],
        ),
    ];

    view! {
        <Stack gap=LayoutGap::Md>
            <TopNavBar
                brand="Harbor"
                menus=menus
                user_name="Ada Lovelace"
                on_select=Callback::new(move |selection: NavSelection| {
                    log(format!("select {}/{}", selection.menu_id, selection.item_id))
                })
                on_search=Callback::new(move |query: String| log(format!("search \"{query}\"")))
                on_logout=Callback::new(move |_| log("logout".to_string()))
            />
            <EventLog events=events />
        </Stack>
    }
}

#[component]
pub(super) fn TabsStory() -> impl IntoView {
    let selected = create_rw_signal(0_usize);
    let events = create_rw_signal(Vec::<String>::new());
    let log = log_to(events);
    let tabs = vec![
        TabItem::new("overview", "Overview"),
        TabItem::new("activity", "Activity"),
        TabItem::new("settings", "Settings"),
    ];
    let panels = ["Account summary and plan.", "Recent sign-ins and changes.", "Notification preferences."];

    view! {
        <Stack gap=LayoutGap::Md>
            <Tabs
                tabs=tabs
                selected=selected
                aria_label="Account sections"
                id_prefix="story"
                on_change=Callback::new(move |index: usize| log(format!("tab {index}")))
            >
                <Text>{move || panels.get(selected.get()).copied().unwrap_or_default()}</Text>
            </Tabs>
            <EventLog events=events />
        </Stack>
    }
}

#[component]
pub(super) fn AvatarsStory() -> impl IntoView {
    let team = vec![
        AvatarEntry::new("Grace Hopper"),
        AvatarEntry::new("Alan Turing"),
        AvatarEntry::new("Katherine Johnson"),
        AvatarEntry::new("Edsger Dijkstra"),
        AvatarEntry::new("Barbara Liskov"),
        AvatarEntry::new("Donald Knuth"),
    ];

    view! {
        <Stack gap=LayoutGap::Lg>
            <Panel>
                <Stack gap=LayoutGap::Md>
                    <Heading level=2>"Fallbacks"</Heading>
                    <Cluster gap=LayoutGap::Md>
                        <Avatar name="Broken Image" src="/assets/avatars/missing.png" />
                        <Avatar name="Ada Lovelace" />
                        <Avatar name="" />
                    </Cluster>
                </Stack>
            </Panel>
            <Panel>
                <Stack gap=LayoutGap::Md>
                    <Heading level=2>"Sizes"</Heading>
                    <Cluster gap=LayoutGap::Md>
                        <Avatar name="Linus Torvalds" size=AvatarSize::Sm />
                        <Avatar name="Linus Torvalds" size=AvatarSize::Md />
                        <Avatar name="Linus Torvalds" size=AvatarSize::Lg />
                    </Cluster>
                </Stack>
            </Panel>
            <Panel>
                <Stack gap=LayoutGap::Md>
                    <Heading level=2>"Group"</Heading>
                    <AvatarGroup entries=team max=4 />
                </Stack>
            </Panel>
        </Stack>
    }
}

#[component]
pub(super) fn LoadersStory() -> impl IntoView {
    let progress = create_rw_signal(35.0_f64);
    view! {
        <Stack gap=LayoutGap::Lg>
            <Panel>
                <Cluster gap=LayoutGap::Lg>
                    <Loader variant=LoaderVariant::Spinner size=LoaderSize::Sm />
                    <Loader variant=LoaderVariant::Spinner />
                    <Loader variant=LoaderVariant::Spinner size=LoaderSize::Lg />
                    <Loader variant=LoaderVariant::Dots label="Syncing" />
                    <Loader variant=LoaderVariant::Bar label="Fetching" />
                </Cluster>
            </Panel>
            <Panel>
                <Stack gap=LayoutGap::Md>
                    <Heading level=2>"Determinate"</Heading>
                    <Loader
                        variant=LoaderVariant::Bar
                        label="Uploading"
                        value=Signal::derive(move || Some(progress.get()))
                    />
                    <Cluster gap=LayoutGap::Sm>
                        <Button on_click=Callback::new(move |_| progress.update(|p| *p = clamp_step(*p - 10.0)))>
                            "-10%"
                        </Button>
                        <Button on_click=Callback::new(move |_| progress.update(|p| *p = clamp_step(*p + 10.0)))>
                            "+10%"
                        </Button>
                        <Text tone=TextTone::Secondary>{move || format!("{:.0}%", progress.get())}</Text>
                    </Cluster>
                </Stack>
            </Panel>
        </Stack>
    }
}

fn clamp_step(value: f64) -> f64 {
    system_ui::clamp_percent(value)
}

#[component]
pub(super) fn TransferListStory() -> impl IntoView {
    let events = create_rw_signal(Vec::<String>::new());
    let log = log_to(events);
    let left = vec![
        TransferItem::new("read", "Read invoices"),
        TransferItem::new("write", "Edit invoices"),
        TransferItem::new("refund", "Issue refunds"),
        TransferItem::new("owner", "Transfer ownership").disabled(),
        TransferItem::new("export", "Export reports"),
    ];
    let right = vec![TransferItem::new("view", "View dashboard")];

    view! {
        <Stack gap=LayoutGap::Md>
            <TransferList
                left=left
                right=right
                left_title="Available permissions"
                right_title="Granted"
                on_change=Callback::new(move |(left, right): (Vec<String>, Vec<String>)| {
                    log(format!("left [{}] right [{}]", left.join(", "), right.join(", ")))
                })
            />
            <EventLog events=events />
        </Stack>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn event_log_keeps_newest_first_and_caps_length() {
        let mut events = Vec::new();
        for index in 0..7 {
            record_event(&mut events, format!("event {index}"), 3);
        }
        assert_eq!(events, vec!["event 6", "event 5", "event 4"]);
    }

    #[test]
    fn progress_steps_stay_in_range() {
        assert_eq!(clamp_step(-5.0), 0.0);
        assert_eq!(clamp_step(105.0), 100.0);
        assert_eq!(clamp_step(45.0), 45.0);
    }
}
