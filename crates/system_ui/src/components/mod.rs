//! Harbor presentational components.
//!
//! Interaction state lives in plain types (`NavBarState`, `TransferState`,
//! tab index helpers) that the components drive through signals, so the
//! rules are testable without a DOM.

use leptos::ev::KeyboardEvent;
use leptos::*;

use design_tokens::var_ref;

use crate::primitives::{
    bool_token, inline_style, merge_layout_class, Button, ButtonShape, ButtonVariant,
    CheckboxField, FieldVariant, IconButton, MenuItem, MenuSeparator, MenuSurface, TextField,
};
use crate::{Icon, IconName, IconSize};

mod avatar;
mod card;
mod loader;
mod metric_card;
mod nav_bar;
mod tabs;
mod transfer_list;

pub use avatar::{
    avatar_face, avatar_overflow, initials, Avatar, AvatarEntry, AvatarFace, AvatarGroup,
    AvatarSize,
};
pub use card::{Card, CardHeader, CardStyle, CardVariant};
pub use loader::{clamp_percent, Loader, LoaderSize, LoaderVariant};
pub use metric_card::{sparkline_points, MetricCard, Trend, SPARKLINE_HEIGHT, SPARKLINE_WIDTH};
pub use nav_bar::{NavBarState, NavItem, NavMenu, NavSelection, TopNavBar};
pub use tabs::{next_tab_index, previous_tab_index, TabItem, Tabs};
pub use transfer_list::{TransferItem, TransferList, TransferSide, TransferState};
