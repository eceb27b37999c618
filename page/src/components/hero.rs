//! Hero banner: headline, change-request links, and the scroll button.

use leptos::prelude::*;

use super::{ICON_CARET_DOWN, ICON_GITHUB_LOGO, ICON_X_LOGO, Icon};
use crate::ALTERNATIVES_ANCHOR;
use crate::view_model::EXTERNAL_REL;

#[component]
pub fn Hero(repository_url: String, status_url: String) -> impl IntoView {
    let scroll_target = format!("#{}", ALTERNATIVES_ANCHOR);

    view! {
        <section id="hero" class="hero">
            <div class="hero-inner">
                <h1 class="hero-title">
                    <span class="hero-title-accent">"Explore the possibilities"</span>
                    <br />
                    <span class="muted">"and become"</span>
                    " "
                    <span class="hero-title-gradient">"discordless"</span>
                </h1>

                <p class="hero-description">
                    "Tired of Discord's mandatory ID verification and privacy concerns? "
                    "Discover smaller, privacy-focused, open-source, and decentralized "
                    "alternatives that prioritize "
                    <strong>"real control"</strong>
                    " and "
                    <strong>"freedom"</strong>
                    "."
                </p>

                <div class="hero-links">
                    <span>"Missing some alternatives? Information is outdated? Request a change on:"</span>
                    <div class="hero-link-row">
                        <a href=repository_url target="_blank" rel=EXTERNAL_REL class="icon-link" aria-label="GitHub repository">
                            <Icon path=ICON_GITHUB_LOGO />
                        </a>
                        <a href=status_url target="_blank" rel=EXTERNAL_REL class="icon-link" aria-label="Status update on X">
                            <Icon path=ICON_X_LOGO />
                        </a>
                    </div>
                </div>

                <button type="button" class="hero-scroll" data-scroll-target=scroll_target>
                    <span>"Explore alternatives"</span>
                    <Icon path=ICON_CARET_DOWN size="24" class="float" />
                </button>
            </div>
        </section>
    }
}
