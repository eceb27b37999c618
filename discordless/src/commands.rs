//! `build` and `list` subcommands.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use discordless_page::types::{AlternativePlatform, FeatureKey, FeatureSupport, MobileSupport, NsfwPolicy};
use discordless_page::{Catalog, PageOptions, render_page};
use serde::Serialize;
use tracing::info;

pub const DEFAULT_OUT: &str = "dist/index.html";

/// Bundled data unless a file is given.
pub fn load_catalog(data: Option<&Path>) -> Result<Catalog> {
    match data {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("Failed to load alternatives from {}", path.display())),
        None => Catalog::bundled().context("Bundled alternatives data is invalid"),
    }
}

/// Render the page and write it to `out`, creating parent directories.
pub fn build(data: Option<&Path>, out: &Path, options: &PageOptions) -> Result<()> {
    let catalog = load_catalog(data)?;
    let partition = catalog.partition();
    info!(
        records = catalog.len(),
        popular = partition.popular.len(),
        less_popular = partition.less_popular.len(),
        "loaded alternatives"
    );

    let html = render_page(&catalog, options);

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(out, &html).with_context(|| format!("Failed to write {}", out.display()))?;

    info!(path = %out.display(), bytes = html.len(), "page written");
    println!("{}", out.display());
    Ok(())
}

#[derive(Debug, Serialize)]
struct ListEntry<'a> {
    name: &'a str,
    url: &'a str,
    mobile_support: MobileSupport,
    nsfw_policy: NsfwPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    features: Option<BTreeMap<&'static str, FeatureSupport>>,
}

impl<'a> ListEntry<'a> {
    fn new(alt: &'a AlternativePlatform) -> Self {
        Self {
            name: &alt.name,
            url: &alt.url,
            mobile_support: alt.mobile_support,
            nsfw_policy: alt.nsfw_policy,
            features: alt.discord_features.as_ref().map(|features| {
                FeatureKey::ALL
                    .iter()
                    .map(|&key| (key.as_str(), features.support(key)))
                    .collect()
            }),
        }
    }

    fn summary(&self) -> String {
        let Some(features) = &self.features else {
            return "no feature data".to_string();
        };
        let count = |state: FeatureSupport| features.values().filter(|s| **s == state).count();
        format!(
            "{} supported, {} in development, {} missing",
            count(FeatureSupport::Supported),
            count(FeatureSupport::Planned),
            count(FeatureSupport::Missing)
        )
    }
}

#[derive(Debug, Serialize)]
struct Listing<'a> {
    popular: Vec<ListEntry<'a>>,
    less_popular: Vec<ListEntry<'a>>,
}

/// Both groups as text or pretty JSON.
pub fn list(data: Option<&Path>, json: bool) -> Result<String> {
    let catalog = load_catalog(data)?;
    let partition = catalog.partition();
    let listing = Listing {
        popular: partition.popular.iter().map(|alt| ListEntry::new(*alt)).collect(),
        less_popular: partition.less_popular.iter().map(|alt| ListEntry::new(*alt)).collect(),
    };

    if json {
        return serde_json::to_string_pretty(&listing).context("Failed to serialize listing");
    }

    Ok(render_listing(&listing))
}

fn render_listing(listing: &Listing<'_>) -> String {
    let mut lines = Vec::new();
    for (title, entries) in [
        ("Popular", &listing.popular),
        ("Less popular", &listing.less_popular),
    ] {
        lines.push(format!("{title} ({})", entries.len()));
        lines.extend(
            entries
                .iter()
                .map(|entry| format!("  - {} ({})", entry.name, entry.summary())),
        );
    }
    lines.join("\n")
}
