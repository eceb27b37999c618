//! # discordless-page
//!
//! Leptos SSR renderer for the discordless page: a hero banner plus a
//! card-grid comparison of Discord alternatives, produced as one static
//! HTML file.
//!
//! ## Quick Start
//!
//! ```rust
//! use discordless_page::{render_page, Catalog, PageOptions};
//!
//! let catalog = Catalog::bundled().unwrap();
//! let html = render_page(&catalog, &PageOptions::default());
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("id=\"alternatives\""));
//! ```
//!
//! ## Architecture
//!
//! Data flows one way: records → derived card models → HTML.
//!
//! - [`types`] - Data module schema (records, enums, feature keys)
//! - [`catalog`] - Loading and tier partitioning
//! - [`view_model`] - Pure per-record derivations (initials, badges, checklist)
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering goes through Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <MyComponent /> };
//! let html: String = view.to_html();
//! ```
//!
//! No reactive runtime or hydration is needed; the only client-side code is
//! a short inline script for the scroll button and favicon fallback.

pub mod catalog;
pub mod components;
pub mod styles;
pub mod types;
pub mod view_model;

pub use catalog::{Catalog, CatalogError, Partition};

use components::PageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use view_model::CardModel;

/// Element id of the comparison section; the hero button scrolls here.
pub const ALTERNATIVES_ANCHOR: &str = "alternatives";

/// Default link for change requests.
pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/pebtrocious/discordless";

/// Default link to the announcement post.
pub const DEFAULT_STATUS_URL: &str = "https://x.com/pebtrocious/status/2021604954956313050";

/// Page-level settings that are not part of the data module.
///
/// # Example
///
/// ```rust
/// use discordless_page::PageOptions;
///
/// let options = PageOptions {
///     title: "Chat alternatives".into(),
///     ..Default::default()
/// };
/// assert!(options.repository_url.starts_with("https://"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOptions {
    /// Document `<title>`
    pub title: String,
    /// `<meta name="description">` content
    pub description: String,
    /// Hero and footer repository link
    pub repository_url: String,
    /// Hero status-update link
    pub status_url: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Discordless | Discord alternatives".into(),
            description: "Privacy-focused, open-source and decentralized alternatives to Discord, compared side by side.".into(),
            repository_url: DEFAULT_REPOSITORY_URL.into(),
            status_url: DEFAULT_STATUS_URL.into(),
        }
    }
}

/// Render the complete page for a catalog.
///
/// Records are partitioned by tier, each one is turned into a
/// [`CardModel`], and the whole document is rendered to a string.
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
///
/// # Example
///
/// ```rust
/// use discordless_page::{render_page, Catalog, PageOptions};
/// use discordless_page::types::AlternativePlatform;
///
/// let catalog = Catalog::new(vec![AlternativePlatform {
///     name: "Zulip".into(),
///     popularity: "high".into(),
///     ..Default::default()
/// }]);
///
/// let html = render_page(&catalog, &PageOptions::default());
/// assert!(html.contains("Visit Zulip"));
/// ```
pub fn render_page(catalog: &Catalog, options: &PageOptions) -> String {
    let partition = catalog.partition();
    let popular: Vec<CardModel> = partition
        .popular
        .iter()
        .map(|alt| CardModel::from_platform(alt))
        .collect();
    let less_popular: Vec<CardModel> = partition
        .less_popular
        .iter()
        .map(|alt| CardModel::from_platform(alt))
        .collect();

    tracing::debug!(
        popular = popular.len(),
        less_popular = less_popular.len(),
        "rendering page"
    );

    let doc = view! {
        <PageDocument options=options.clone() popular=popular less_popular=less_popular />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use crate::types::AlternativePlatform;
    use crate::view_model;

    fn revolt(popularity: &str) -> AlternativePlatform {
        serde_json::from_value(json!({
            "name": "Revolt",
            "url": "https://revolt.chat",
            "popularity": popularity,
            "mobileSupport": "partial",
            "nsfwPolicy": "forbidden",
            "pros": ["Fast"],
            "cons": ["Small community"],
            "discordFeatures": { "textChannel": true, "voiceChannel": false }
        }))
        .unwrap()
    }

    fn render(platforms: Vec<AlternativePlatform>) -> String {
        render_page(&Catalog::new(platforms), &PageOptions::default())
    }

    /// Everything after `<head>`, so CSS selectors don't count as matches.
    fn body(html: &str) -> &str {
        html.split_once("</head>").map(|(_, body)| body).unwrap_or(html)
    }

    #[test]
    fn renders_empty_page() {
        let html = render(vec![]);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("discordless"));
        assert!(body(&html).contains("id=\"alternatives\""));
        assert!(!body(&html).contains("less-popular"));
    }

    #[test]
    fn hero_targets_alternatives_anchor() {
        let html = render(vec![]);
        let body = body(&html);

        assert!(body.contains("data-scroll-target=\"#alternatives\""));
        assert!(body.contains("Explore alternatives"));
        assert!(body.contains(DEFAULT_REPOSITORY_URL));
        assert!(body.contains("https://x.com/pebtrocious/status/2021604954956313050"));
    }

    #[test]
    fn revolt_card_end_to_end() {
        let html = render(vec![revolt("high")]);
        let body = body(&html);

        assert_eq!(body.matches("badge badge-caution").count(), 1);
        assert_eq!(body.matches("badge badge-negative").count(), 1);
        assert_eq!(body.matches("badge badge-neutral").count(), 1);
        assert!(body.contains("Text channels"));
        assert!(body.contains("Voice channels"));
        assert_eq!(body.matches("feature-line feature-supported").count(), 1);
        assert_eq!(body.matches("feature-line feature-planned").count(), 1);
        assert_eq!(body.matches("feature-line feature-missing").count(), 5);
        assert_eq!(body.matches("(in development)").count(), 1);
        assert!(body.contains("Fast"));
        assert!(body.contains("Small community"));
        assert!(!body.contains("card-warnings"));
        assert!(body.contains("Visit Revolt"));
        assert!(body.contains("noopener noreferrer"));
        assert!(body.contains("_blank"));
    }

    #[test]
    fn less_popular_record_only_in_secondary_group() {
        let html = render(vec![revolt("less")]);
        let body = body(&html);

        assert!(body.contains("Other, less popular alternatives"));
        assert!(body.contains("card card-secondary"));
        assert!(!body.contains("class=\"card\""));
        assert_eq!(body.matches("Visit Revolt").count(), 1);
    }

    #[test]
    fn popular_record_not_in_secondary_group() {
        let html = render(vec![revolt("high")]);
        let body = body(&html);

        assert!(body.contains("class=\"card\""));
        assert!(!body.contains("card-secondary"));
        assert!(!body.contains("Other, less popular alternatives"));
    }

    #[test]
    fn warnings_rendered_only_when_present() {
        let mut with_warnings = revolt("high");
        with_warnings.name = "Spacebar".into();
        with_warnings.warnings = Some(vec!["Not production ready".into()]);
        let mut empty_warnings = revolt("high");
        empty_warnings.warnings = Some(vec![]);

        let html = render(vec![with_warnings, empty_warnings]);
        let body = body(&html);

        assert_eq!(body.matches("card-warnings").count(), 1);
        assert!(body.contains("Not production ready"));
    }

    #[test]
    fn hero_and_footer_links_drop_opener_and_referrer() {
        let html = render(vec![]);
        let body = body(&html);

        assert_eq!(body.matches("target=\"_blank\"").count(), 3);
        assert_eq!(body.matches("rel=\"noopener noreferrer\"").count(), 3);
    }

    #[test]
    fn popular_card_places_warnings_between_pros_and_cons() {
        let mut alt = revolt("high");
        alt.warnings = Some(vec!["Centralized hosting".into()]);

        let html = render(vec![alt]);
        let body = body(&html);
        let pros = body.find(">Pros<").unwrap();
        let warnings = body.find("card-warnings").unwrap();
        let cons = body.find(">Cons<").unwrap();

        assert!(pros < warnings && warnings < cons);
    }

    #[test]
    fn less_popular_card_places_warnings_after_cons() {
        let mut alt = revolt("less");
        alt.warnings = Some(vec!["Centralized hosting".into()]);

        let html = render(vec![alt]);
        let body = body(&html);
        let pros = body.find(">Pros<").unwrap();
        let cons = body.find(">Cons<").unwrap();
        let warnings = body.find("card-warnings").unwrap();

        assert!(pros < cons && cons < warnings);
    }

    #[test]
    fn feature_block_omitted_without_map() {
        let mut alt = revolt("high");
        alt.discord_features = None;

        let html = render(vec![alt]);
        assert!(!body(&html).contains("Discord-like features"));
    }

    #[test]
    fn favicon_and_initials_fallback() {
        let mut with_logo = revolt("high");
        with_logo.name = "Matrix Element".into();
        with_logo.favicon_url = Some("https://element.io/favicon.ico".into());
        let without_logo = revolt("high");

        let html = render(vec![with_logo, without_logo]);
        let body = body(&html);

        assert_eq!(body.matches("<img").count(), 1);
        assert!(body.contains("Matrix Element logo"));
        assert!(body.contains(">ME<"));
        assert!(body.contains(">R<"));
    }

    #[test]
    fn fallback_tooltips_rendered() {
        let html = render(vec![revolt("high")]);
        let body = body(&html);

        assert!(body.contains(view_model::MOBILE_FALLBACK_NOTE));
        assert!(body.contains(view_model::ORIGIN_FALLBACK_NOTE));
        assert!(body.contains(">Origin<"));
    }

    #[test]
    fn text_is_escaped() {
        let mut alt = revolt("high");
        alt.description = "<b>bold</b> claims".into();

        let html = render(vec![alt]);
        assert!(!body(&html).contains("<b>bold</b>"));
    }

    #[test]
    fn custom_options_flow_into_document() {
        let options = PageOptions {
            title: "Chat alternatives".into(),
            repository_url: "https://example.org/repo".into(),
            ..Default::default()
        };

        let html = render_page(&Catalog::default(), &options);

        assert!(html.contains("<title>Chat alternatives</title>"));
        assert!(body(&html).contains("https://example.org/repo"));
    }

    #[test]
    fn renders_bundled_catalog() {
        let catalog = Catalog::bundled().unwrap();
        let html = render_page(&catalog, &PageOptions::default());
        let body = body(&html);

        for alt in catalog.platforms() {
            assert!(body.contains(&format!("Visit {}", alt.name)), "missing card for {}", alt.name);
        }
    }
}
