//! Discord-like feature checklist and the free-text lists of a card.

use leptos::prelude::*;

use super::{ICON_CHECK, ICON_WARNING, ICON_WARNING_CIRCLE, ICON_X, Icon};
use crate::types::FeatureSupport;
use crate::view_model::FeatureLine;

/// One row per feature, icon keyed to the support state.
#[component]
pub fn FeatureChecklist(lines: Vec<FeatureLine>) -> impl IntoView {
    view! {
        <div class="card-block">
            <h4 class="card-block-title">"Discord-like features"</h4>
            <ul class="feature-list">
                {lines.into_iter().map(|line| {
                    let icon = match line.support {
                        FeatureSupport::Supported => ICON_CHECK,
                        FeatureSupport::Planned => ICON_WARNING,
                        FeatureSupport::Missing => ICON_X,
                    };
                    let class = format!("feature-line feature-{}", line.support.as_str());
                    view! {
                        <li class=class data-feature=line.key.as_str()>
                            <Icon path=icon size="14" class="feature-icon" />
                            <span>
                                {line.label}
                                {line.in_development().then(|| view! {
                                    <span class="feature-note">"(in development)"</span>
                                })}
                            </span>
                        </li>
                    }
                }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

/// Titled bullet list (Pros, Cons).
#[component]
pub fn BulletList(
    title: &'static str,
    items: Vec<String>,
    icon: &'static str,
    /// Class applied to each item icon
    icon_class: &'static str,
) -> impl IntoView {
    view! {
        <div class="card-block">
            <h4 class="card-block-title">{title}</h4>
            <ul class="bullet-list">
                {items.into_iter().map(|item| view! {
                    <li>
                        <Icon path=icon size="14" class=icon_class />
                        <span>{item}</span>
                    </li>
                }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

/// Amber callout listing caveats. Callers skip it for empty lists.
#[component]
pub fn WarningsBlock(warnings: Vec<String>) -> impl IntoView {
    view! {
        <div class="card-warnings">
            <Icon path=ICON_WARNING_CIRCLE class="callout-icon" />
            <ul>
                {warnings.into_iter().map(|warning| view! { <li>{warning}</li> }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
