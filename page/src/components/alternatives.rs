//! Comparison section - primary grid plus the "less popular" panel.

use leptos::prelude::*;

use super::{ICON_INFO, ICON_WARNING_CIRCLE, Icon, PlatformCard};
use crate::ALTERNATIVES_ANCHOR;
use crate::view_model::CardModel;

#[component]
pub fn AlternativesSection(popular: Vec<CardModel>, less_popular: Vec<CardModel>) -> impl IntoView {
    view! {
        <section id=ALTERNATIVES_ANCHOR class="alternatives">
            <div class="container">
                <div class="callout callout-info">
                    <Icon path=ICON_INFO class="callout-icon" />
                    <p>
                        "Hover over the mobile, NSFW, and origin badges on each card to see "
                        "context about what those icons actually mean for that platform "
                        "(e.g. partial mobile support, instance-specific NSFW rules, or why "
                        "\"origin\" might not matter for decentralized projects)."
                    </p>
                </div>

                <div class="callout callout-caution">
                    <Icon path=ICON_WARNING_CIRCLE class="callout-icon" />
                    <p>
                        "Due to how fast this space moves, this overview is mostly "
                        "AI-generated until more people help refine it. Always double-check "
                        "terms of service, privacy policies, and feature claims yourself; "
                        "this site can be wrong or out of date."
                    </p>
                </div>

                <div class="section-header">
                    <h2 class="section-title">
                        "Popular Discord "
                        <span class="gradient-text">"Alternatives"</span>
                    </h2>
                    <p class="section-description">
                        "A mix of different platforms, some decentralized, some centralized, "
                        "that people are turning to as they look for something less fragile "
                        "than putting everything on Discord."
                    </p>
                </div>

                <CardGrid cards=popular />

                <LessPopularPanel cards=less_popular />
            </div>
        </section>
    }
}

#[component]
fn CardGrid(cards: Vec<CardModel>) -> impl IntoView {
    view! {
        <div class="card-grid">
            {cards.into_iter().map(|card| view! { <PlatformCard card=card /> }).collect::<Vec<_>>()}
        </div>
    }
}

/// Dashed panel for the secondary tier. Not rendered when the tier is empty.
#[component]
fn LessPopularPanel(cards: Vec<CardModel>) -> impl IntoView {
    if cards.is_empty() {
        return view! { "" }.into_any();
    }

    view! {
        <div class="less-popular">
            <div>
                <h3 class="less-popular-title">"Other, less popular alternatives"</h3>
                <p class="muted">
                    "These projects don't get mentioned to me nearly as often, "
                    "but they might still be a great fit depending on your needs."
                </p>
            </div>

            <CardGrid cards=cards />

            <div class="callout callout-muted">
                <Icon path=ICON_INFO class="callout-icon" />
                <p>
                    "Disclaimer: popularity here is unfortunately based only on my own "
                    "experience of how often people mention these projects to me, not "
                    "on any hard data analysis. If you can provide good usage or "
                    "adoption data, I'd be happy to revisit and update how things "
                    "are categorized."
                </p>
            </div>
        </div>
    }
    .into_any()
}
