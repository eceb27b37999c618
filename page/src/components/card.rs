//! Platform card - one per catalog record.

use leptos::prelude::*;

use super::{
    Badge, BulletList, FeatureChecklist, ICON_ARROW_SQUARE_OUT, ICON_CHECK, ICON_WARNING, Icon,
    WarningsBlock,
};
use crate::types::Tier;
use crate::view_model::{CardModel, WarningsPlacement};

/// Card layout: header (title, avatar, description, badges), content
/// blocks, and the outbound link in the footer.
#[component]
pub fn PlatformCard(card: CardModel) -> impl IntoView {
    let class = match card.tier {
        Tier::Popular => "card",
        Tier::LessPopular => "card card-secondary",
    };
    let logo_alt = card.logo_alt();
    let key = card.name.clone();

    // Popular cards show caveats before the cons, the secondary grid after them.
    let (warnings_after_pros, warnings_after_cons) = match card.warnings_placement {
        WarningsPlacement::AfterPros => (card.warnings, None),
        WarningsPlacement::AfterCons => (None, card.warnings),
    };

    let [mobile, nsfw, origin] = card.badges;
    let cta = card.cta;

    view! {
        <article class=class data-name=key>
            <header class="card-header">
                <div class="card-title-row">
                    <h3 class="card-title">{card.name}</h3>
                    <Avatar initials=card.initials favicon_url=card.favicon_url alt=logo_alt />
                </div>
                <p class="card-description">{card.description}</p>
                <div class="badge-row">
                    <Badge badge=mobile />
                    <Badge badge=nsfw />
                    <Badge badge=origin />
                </div>
            </header>

            <div class="card-content">
                {card.features.map(|lines| view! { <FeatureChecklist lines=lines /> })}
                <BulletList title="Pros" items=card.pros icon=ICON_CHECK icon_class="icon-positive" />
                {warnings_after_pros.map(|warnings| view! { <WarningsBlock warnings=warnings /> })}
                <BulletList title="Cons" items=card.cons icon=ICON_WARNING icon_class="icon-caution" />
                {warnings_after_cons.map(|warnings| view! { <WarningsBlock warnings=warnings /> })}
            </div>

            <footer class="card-footer">
                <a class="btn btn-outline" href=cta.href target=cta.target rel=cta.rel>
                    {cta.label}
                    <Icon path=ICON_ARROW_SQUARE_OUT />
                </a>
            </footer>
        </article>
    }
}

/// Favicon over an initials fallback. The page script drops images that
/// fail to load, uncovering the initials.
#[component]
fn Avatar(initials: String, favicon_url: Option<String>, alt: String) -> impl IntoView {
    view! {
        <span class="avatar">
            <span class="avatar-fallback">{initials}</span>
            {favicon_url.map(|src| view! {
                <img class="avatar-img" data-avatar="" src=src alt=alt loading="lazy" />
            })}
        </span>
    }
}
