//! Data types for the alternatives catalog.
//!
//! These types mirror the JSON data module one-to-one. They're designed to be:
//!
//! - **Serializable** - field names follow the data file (`faviconUrl`, `discordFeatures`, ...)
//! - **Lenient** - every optional field falls back to a documented default
//! - **Default-able** - build partial records with `..Default::default()`
//!
//! # Example
//!
//! ```rust
//! use discordless_page::types::{AlternativePlatform, MobileSupport, Tier};
//!
//! let revolt = AlternativePlatform {
//!     name: "Revolt".into(),
//!     popularity: "high".into(),
//!     mobile_support: MobileSupport::Partial,
//!     pros: vec!["Fast".into()],
//!     ..Default::default()
//! };
//!
//! assert_eq!(revolt.tier(), Tier::Popular);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Raw `popularity` value that moves a record into the secondary group.
pub const LESS_POPULAR: &str = "less";

/// One candidate platform as supplied by the data module.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativePlatform {
    /// Display name, also the stable key of the record
    pub name: String,
    /// Free-text description shown under the title
    #[serde(default)]
    pub description: String,
    /// Outbound link target
    #[serde(default)]
    pub url: String,
    /// Optional logo; initials are shown when absent or broken
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon_url: Option<String>,
    /// Tier tag. Only the exact value `"less"` is meaningful.
    #[serde(default, deserialize_with = "lenient_from_str")]
    pub popularity: String,
    /// Mobile client availability
    #[serde(default, deserialize_with = "lenient_from_str")]
    pub mobile_support: MobileSupport,
    /// Content policy regarding NSFW material
    #[serde(default, deserialize_with = "lenient_from_str")]
    pub nsfw_policy: NsfwPolicy,
    /// Flag emoji for the origin badge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_flag: Option<String>,
    /// Country or legal entity for the origin badge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_label: Option<String>,
    /// Tooltip text for the origin badge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_note: Option<String>,
    /// Tooltip text for the mobile badge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_note: Option<String>,
    /// Tooltip text for the NSFW badge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsfw_note: Option<String>,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
    /// Discord-like feature map; the checklist is omitted when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord_features: Option<DiscordFeatures>,
}

impl AlternativePlatform {
    /// Which visual group this record renders in.
    pub fn tier(&self) -> Tier {
        Tier::from_popularity(&self.popularity)
    }
}

/// Binary popularity partition.
///
/// The data field looks richer than two values, but only `"less"` is a
/// recognised tier. Everything else (including typos and the empty
/// string) lands in [`Tier::Popular`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Popular,
    LessPopular,
}

impl Tier {
    pub fn from_popularity(raw: &str) -> Self {
        if raw == LESS_POPULAR {
            Tier::LessPopular
        } else {
            Tier::Popular
        }
    }
}

/// Mobile client availability.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MobileSupport {
    Yes,
    No,
    Partial,
    #[default]
    Unknown,
}

impl From<&str> for MobileSupport {
    fn from(raw: &str) -> Self {
        match raw {
            "yes" => MobileSupport::Yes,
            "no" => MobileSupport::No,
            "partial" => MobileSupport::Partial,
            _ => MobileSupport::Unknown,
        }
    }
}

/// NSFW content policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NsfwPolicy {
    Allowed,
    Forbidden,
    Mixed,
    #[default]
    Unknown,
}

impl From<&str> for NsfwPolicy {
    fn from(raw: &str) -> Self {
        match raw {
            "allowed" => NsfwPolicy::Allowed,
            "forbidden" => NsfwPolicy::Forbidden,
            "mixed" => NsfwPolicy::Mixed,
            _ => NsfwPolicy::Unknown,
        }
    }
}

/// Accepts a string, `null`, or anything else; unrecognised input maps to the default.
fn lenient_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: for<'a> From<&'a str> + Default,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(Value::as_str)
        .map(T::from)
        .unwrap_or_default())
}

/// The fixed set of Discord-like features, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeatureKey {
    TextChannel,
    VoiceChannel,
    VideoChannel,
    ScreenSharing,
    CustomEmojis,
    CustomRoles,
    Permissions,
}

impl FeatureKey {
    /// Every key, in the order the checklist renders them.
    pub const ALL: [FeatureKey; 7] = [
        FeatureKey::TextChannel,
        FeatureKey::VoiceChannel,
        FeatureKey::VideoChannel,
        FeatureKey::ScreenSharing,
        FeatureKey::CustomEmojis,
        FeatureKey::CustomRoles,
        FeatureKey::Permissions,
    ];

    /// Key as it appears in the data file.
    pub fn as_str(self) -> &'static str {
        match self {
            FeatureKey::TextChannel => "textChannel",
            FeatureKey::VoiceChannel => "voiceChannel",
            FeatureKey::VideoChannel => "videoChannel",
            FeatureKey::ScreenSharing => "screenSharing",
            FeatureKey::CustomEmojis => "customEmojis",
            FeatureKey::CustomRoles => "customRoles",
            FeatureKey::Permissions => "permissions",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FeatureKey::TextChannel => "Text channels",
            FeatureKey::VoiceChannel => "Voice channels",
            FeatureKey::VideoChannel => "Video calls",
            FeatureKey::ScreenSharing => "Screen sharing",
            FeatureKey::CustomEmojis => "Custom emojis",
            FeatureKey::CustomRoles => "Custom roles",
            FeatureKey::Permissions => "Permissions",
        }
    }
}

/// Tri-state support of a single feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureSupport {
    /// `true` in the data
    Supported,
    /// `false` in the data, shown as "in development"
    Planned,
    /// Absent, `null`, or any non-boolean value
    Missing,
}

impl FeatureSupport {
    pub fn from_raw(raw: Option<&Value>) -> Self {
        match raw {
            Some(Value::Bool(true)) => FeatureSupport::Supported,
            Some(Value::Bool(false)) => FeatureSupport::Planned,
            _ => FeatureSupport::Missing,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FeatureSupport::Supported => "supported",
            FeatureSupport::Planned => "planned",
            FeatureSupport::Missing => "missing",
        }
    }
}

/// Raw feature mapping from the data file.
///
/// Values are kept as untyped JSON so that stray entries (strings, numbers)
/// degrade to [`FeatureSupport::Missing`] instead of failing the whole load.
/// Keys outside [`FeatureKey::ALL`] are carried but never rendered.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscordFeatures(pub BTreeMap<String, Value>);

impl DiscordFeatures {
    /// Resolve one feature. Total over [`FeatureKey::ALL`].
    pub fn support(&self, key: FeatureKey) -> FeatureSupport {
        FeatureSupport::from_raw(self.0.get(key.as_str()))
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for DiscordFeatures {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        DiscordFeatures(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
