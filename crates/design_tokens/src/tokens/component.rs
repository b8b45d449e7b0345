//! Per-component values. Fields alias primitives; nothing here is a fresh
//! literal.

use serde::Serialize;

use super::base::BASE;
use super::semantic::{ColorRef, TextPair};
use crate::values::{FontWeight, Ms, Px, Shadow};

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ButtonTokens {
    pub radius: &'static Px,
    pub padding_x: &'static Px,
    pub padding_y: &'static Px,
    pub font_weight: &'static FontWeight,
    pub primary_background: ColorRef,
    pub primary_text: ColorRef,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CardTokens {
    pub radius: &'static Px,
    pub padding: &'static Px,
    pub shadow: &'static Shadow,
    pub navy_background: ColorRef,
    pub navy_text: ColorRef,
    pub white_background: ColorRef,
    pub white_text: ColorRef,
    pub outline: ColorRef,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct AvatarTokens {
    pub size_sm: &'static Px,
    pub size_md: &'static Px,
    pub size_lg: &'static Px,
    pub fallback_background: ColorRef,
    pub fallback_text: ColorRef,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct NavbarTokens {
    pub height: &'static Px,
    pub background: ColorRef,
    pub text: ColorRef,
    pub search_background: ColorRef,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TabsTokens {
    pub indicator: ColorRef,
    pub indicator_thickness: &'static Px,
    pub gap: &'static Px,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct MetricTokens {
    pub trend_up: ColorRef,
    pub trend_down: ColorRef,
    pub trend_flat: ColorRef,
    /// Trend colors for the navy card, which keeps its fill in both modes.
    pub trend_up_inverse: ColorRef,
    pub trend_down_inverse: ColorRef,
    pub trend_flat_inverse: ColorRef,
    pub sparkline_stroke: ColorRef,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TransferTokens {
    pub item_padding: &'static Px,
    pub selected_background: ColorRef,
    pub selected_text: ColorRef,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct LoaderTokens {
    pub track: ColorRef,
    pub indicator: ColorRef,
    pub cycle: &'static Ms,
}

#[derive(Debug, Serialize)]
/// Root of the component layer.
pub struct ComponentTokens {
    pub button: ButtonTokens,
    pub card: CardTokens,
    pub avatar: AvatarTokens,
    pub navbar: NavbarTokens,
    pub tabs: TabsTokens,
    pub metric: MetricTokens,
    pub transfer: TransferTokens,
    pub loader: LoaderTokens,
}

impl ComponentTokens {
    /// Fixed text/fill pairs rendered by components. Component colors are not
    /// overridden by the dark block, so these hold in both modes.
    pub fn text_pairs(&self) -> Vec<TextPair> {
        let pair = |foreground_role, foreground: ColorRef, background_role, background: ColorRef| {
            TextPair {
                foreground_role,
                background_role,
                foreground: *foreground,
                background: *background,
            }
        };
        let card = &self.card;
        let metric = &self.metric;

        vec![
            pair("component.button.primary-text", self.button.primary_text, "component.button.primary-background", self.button.primary_background),
            pair("component.card.navy-text", card.navy_text, "component.card.navy-background", card.navy_background),
            pair("component.card.white-text", card.white_text, "component.card.white-background", card.white_background),
            pair("component.avatar.fallback-text", self.avatar.fallback_text, "component.avatar.fallback-background", self.avatar.fallback_background),
            pair("component.navbar.text", self.navbar.text, "component.navbar.background", self.navbar.background),
            pair("component.navbar.text", self.navbar.text, "component.navbar.search-background", self.navbar.search_background),
            pair("component.metric.trend-up", metric.trend_up, "component.card.white-background", card.white_background),
            pair("component.metric.trend-down", metric.trend_down, "component.card.white-background", card.white_background),
            pair("component.metric.trend-flat", metric.trend_flat, "component.card.white-background", card.white_background),
            pair("component.metric.trend-up-inverse", metric.trend_up_inverse, "component.card.navy-background", card.navy_background),
            pair("component.metric.trend-down-inverse", metric.trend_down_inverse, "component.card.navy-background", card.navy_background),
            pair("component.metric.trend-flat-inverse", metric.trend_flat_inverse, "component.card.navy-background", card.navy_background),
            pair("component.transfer.selected-text", self.transfer.selected_text, "component.transfer.selected-background", self.transfer.selected_background),
        ]
    }
}

/// The component layer.
pub static COMPONENT: ComponentTokens = ComponentTokens {
    button: ButtonTokens {
        radius: &BASE.radius.md,
        padding_x: &BASE.spacing.md,
        padding_y: &BASE.spacing.sm,
        font_weight: &BASE.font.weight.semibold,
        primary_background: &BASE.color.navy.s900,
        primary_text: &BASE.color.white,
    },
    card: CardTokens {
        radius: &BASE.radius.lg,
        padding: &BASE.spacing.lg,
        shadow: &BASE.shadow.md,
        navy_background: &BASE.color.navy.s900,
        navy_text: &BASE.color.white,
        white_background: &BASE.color.white,
        white_text: &BASE.color.navy.s900,
        outline: &BASE.color.gray.s200,
    },
    avatar: AvatarTokens {
        size_sm: &BASE.spacing.lg,
        size_md: &BASE.spacing.xl,
        size_lg: &BASE.spacing.xxl,
        fallback_background: &BASE.color.navy.s100,
        fallback_text: &BASE.color.navy.s900,
    },
    navbar: NavbarTokens {
        height: &BASE.spacing.xxxl,
        background: &BASE.color.navy.s900,
        text: &BASE.color.white,
        search_background: &BASE.color.navy.s800,
    },
    tabs: TabsTokens {
        indicator: &BASE.color.teal.s500,
        indicator_thickness: &BASE.spacing.xxs,
        gap: &BASE.spacing.sm,
    },
    metric: MetricTokens {
        trend_up: &BASE.color.green.s700,
        trend_down: &BASE.color.red.s700,
        trend_flat: &BASE.color.gray.s500,
        trend_up_inverse: &BASE.color.green.s300,
        trend_down_inverse: &BASE.color.red.s300,
        trend_flat_inverse: &BASE.color.gray.s300,
        sparkline_stroke: &BASE.color.teal.s600,
    },
    transfer: TransferTokens {
        item_padding: &BASE.spacing.sm,
        selected_background: &BASE.color.teal.s50,
        selected_text: &BASE.color.navy.s900,
    },
    loader: LoaderTokens {
        track: &BASE.color.gray.s200,
        indicator: &BASE.color.teal.s500,
        cycle: &BASE.motion.duration.slow,
    },
};
