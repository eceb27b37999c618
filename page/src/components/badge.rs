//! Badge pill with a hover/focus tooltip.

use leptos::prelude::*;

use super::{ICON_DEVICE_MOBILE, ICON_EYE_SLASH, ICON_GLOBE, Icon};
use crate::view_model::{BadgeKind, BadgeModel};

#[component]
pub fn Badge(badge: BadgeModel) -> impl IntoView {
    let icon = match badge.kind {
        BadgeKind::Mobile => ICON_DEVICE_MOBILE,
        BadgeKind::Nsfw => ICON_EYE_SLASH,
        BadgeKind::Origin => ICON_GLOBE,
    };

    view! {
        <span class=badge.tone.class() data-badge=badge.kind.as_str() tabindex="0">
            <Icon path=icon size="14" />
            <span class="badge-label">{badge.label}</span>
            <span class="tooltip" role="tooltip">{badge.tooltip}</span>
        </span>
    }
}
