//! Per-record derivations feeding the card components.
//!
//! Everything here is a pure function of an [`AlternativePlatform`]:
//! initials, badge tones and tooltips, the feature checklist and the
//! call-to-action link. Components only lay the results out.

use serde::Serialize;

use crate::types::{
    AlternativePlatform, DiscordFeatures, FeatureKey, FeatureSupport, MobileSupport, NsfwPolicy,
    Tier,
};

pub const MOBILE_FALLBACK_NOTE: &str = "Mobile support status is unclear.";
pub const NSFW_FALLBACK_NOTE: &str =
    "NSFW policy is not clearly documented; always read the latest rules.";
pub const ORIGIN_FALLBACK_NOTE: &str =
    "Country or legal origin of the main org; self-hosting can change this.";
pub const ORIGIN_FALLBACK_LABEL: &str = "Origin";

/// `rel` value for every outbound link on a card.
pub const EXTERNAL_REL: &str = "noopener noreferrer";

/// Avatar fallback text: first letter of the first two words, uppercased.
///
/// ```rust
/// use discordless_page::view_model::initials;
///
/// assert_eq!(initials("Mastodon Social"), "MS");
/// assert_eq!(initials("XMPP"), "X");
/// assert_eq!(initials(""), "");
/// ```
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

/// Visual category of a badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    /// Green
    Positive,
    /// Red
    Negative,
    /// Amber
    Caution,
    /// Muted grey, used for unknown values
    Neutral,
}

impl BadgeTone {
    pub fn class(self) -> &'static str {
        match self {
            BadgeTone::Positive => "badge badge-positive",
            BadgeTone::Negative => "badge badge-negative",
            BadgeTone::Caution => "badge badge-caution",
            BadgeTone::Neutral => "badge badge-neutral",
        }
    }
}

pub fn mobile_tone(value: MobileSupport) -> BadgeTone {
    match value {
        MobileSupport::Yes => BadgeTone::Positive,
        MobileSupport::No => BadgeTone::Negative,
        MobileSupport::Partial => BadgeTone::Caution,
        MobileSupport::Unknown => BadgeTone::Neutral,
    }
}

pub fn nsfw_tone(value: NsfwPolicy) -> BadgeTone {
    match value {
        NsfwPolicy::Allowed => BadgeTone::Positive,
        NsfwPolicy::Forbidden => BadgeTone::Negative,
        NsfwPolicy::Mixed => BadgeTone::Caution,
        NsfwPolicy::Unknown => BadgeTone::Neutral,
    }
}

/// Origin badge text: flag (if any) followed by the label or `"Origin"`.
pub fn origin_label(flag: Option<&str>, label: Option<&str>) -> String {
    let label = label.unwrap_or(ORIGIN_FALLBACK_LABEL);
    match flag.filter(|f| !f.is_empty()) {
        Some(flag) => format!("{flag} {label}"),
        None => label.to_string(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeKind {
    Mobile,
    Nsfw,
    Origin,
}

impl BadgeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeKind::Mobile => "mobile",
            BadgeKind::Nsfw => "nsfw",
            BadgeKind::Origin => "origin",
        }
    }
}

/// One badge with its tooltip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BadgeModel {
    pub kind: BadgeKind,
    pub label: String,
    pub tone: BadgeTone,
    pub tooltip: String,
}

impl BadgeModel {
    pub fn mobile(alt: &AlternativePlatform) -> Self {
        Self {
            kind: BadgeKind::Mobile,
            label: "Mobile".into(),
            tone: mobile_tone(alt.mobile_support),
            tooltip: alt
                .mobile_note
                .clone()
                .unwrap_or_else(|| MOBILE_FALLBACK_NOTE.into()),
        }
    }

    pub fn nsfw(alt: &AlternativePlatform) -> Self {
        Self {
            kind: BadgeKind::Nsfw,
            label: "NSFW".into(),
            tone: nsfw_tone(alt.nsfw_policy),
            tooltip: alt
                .nsfw_note
                .clone()
                .unwrap_or_else(|| NSFW_FALLBACK_NOTE.into()),
        }
    }

    pub fn origin(alt: &AlternativePlatform) -> Self {
        Self {
            kind: BadgeKind::Origin,
            label: origin_label(alt.origin_flag.as_deref(), alt.origin_label.as_deref()),
            tone: BadgeTone::Neutral,
            tooltip: alt
                .origin_note
                .clone()
                .unwrap_or_else(|| ORIGIN_FALLBACK_NOTE.into()),
        }
    }
}

/// One row of the feature checklist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureLine {
    pub key: FeatureKey,
    pub label: &'static str,
    pub support: FeatureSupport,
}

impl FeatureLine {
    pub fn in_development(&self) -> bool {
        self.support == FeatureSupport::Planned
    }
}

/// Seven rows, one per [`FeatureKey`], in declared order.
pub fn feature_checklist(features: &DiscordFeatures) -> Vec<FeatureLine> {
    FeatureKey::ALL
        .iter()
        .map(|&key| FeatureLine {
            key,
            label: key.label(),
            support: features.support(key),
        })
        .collect()
}

/// Warnings worth rendering; `None` for an absent or empty list.
pub fn visible_warnings(warnings: Option<&[String]>) -> Option<&[String]> {
    warnings.filter(|list| !list.is_empty())
}

/// Outbound link at the bottom of each card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub href: String,
    pub label: String,
    pub target: &'static str,
    pub rel: &'static str,
}

impl CallToAction {
    pub fn for_platform(alt: &AlternativePlatform) -> Self {
        Self {
            href: alt.url.clone(),
            label: format!("Visit {}", alt.name),
            target: "_blank",
            rel: EXTERNAL_REL,
        }
    }
}

/// Where the warnings block sits inside a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningsPlacement {
    /// Between Pros and Cons (primary grid)
    AfterPros,
    /// After Cons (secondary grid)
    AfterCons,
}

impl From<Tier> for WarningsPlacement {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Popular => WarningsPlacement::AfterPros,
            Tier::LessPopular => WarningsPlacement::AfterCons,
        }
    }
}

/// Everything a card needs, derived once per record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CardModel {
    pub name: String,
    pub description: String,
    pub tier: Tier,
    pub favicon_url: Option<String>,
    pub initials: String,
    pub badges: [BadgeModel; 3],
    pub features: Option<Vec<FeatureLine>>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub warnings: Option<Vec<String>>,
    pub warnings_placement: WarningsPlacement,
    pub cta: CallToAction,
}

impl CardModel {
    pub fn from_platform(alt: &AlternativePlatform) -> Self {
        let tier = alt.tier();
        Self {
            name: alt.name.clone(),
            description: alt.description.clone(),
            tier,
            favicon_url: alt.favicon_url.clone().filter(|url| !url.is_empty()),
            initials: initials(&alt.name),
            badges: [
                BadgeModel::mobile(alt),
                BadgeModel::nsfw(alt),
                BadgeModel::origin(alt),
            ],
            features: alt.discord_features.as_ref().map(feature_checklist),
            pros: alt.pros.clone(),
            cons: alt.cons.clone(),
            warnings: visible_warnings(alt.warnings.as_deref()).map(<[String]>::to_vec),
            warnings_placement: tier.into(),
            cta: CallToAction::for_platform(alt),
        }
    }

    /// Alt text for the favicon image.
    pub fn logo_alt(&self) -> String {
        format!("{} logo", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn revolt() -> AlternativePlatform {
        serde_json::from_value(json!({
            "name": "Revolt",
            "popularity": "high",
            "url": "https://revolt.chat",
            "mobileSupport": "partial",
            "nsfwPolicy": "forbidden",
            "pros": ["Fast"],
            "cons": ["Small community"],
            "discordFeatures": { "textChannel": true, "voiceChannel": false }
        }))
        .unwrap()
    }

    #[test]
    fn initials_examples() {
        assert_eq!(initials("Mastodon Social"), "MS");
        assert_eq!(initials("XMPP"), "X");
        assert_eq!(initials(""), "");
        assert_eq!(initials("matrix element server"), "ME");
        assert_eq!(initials("  Rocket   chat "), "RC");
    }

    #[test]
    fn initials_handle_non_ascii() {
        assert_eq!(initials("écho ünd"), "ÉÜ");
    }

    #[test]
    fn badge_tones_default_to_neutral() {
        assert_eq!(mobile_tone(MobileSupport::default()), BadgeTone::Neutral);
        assert_eq!(nsfw_tone(NsfwPolicy::default()), BadgeTone::Neutral);
        assert_eq!(mobile_tone(MobileSupport::Yes), BadgeTone::Positive);
        assert_eq!(mobile_tone(MobileSupport::No), BadgeTone::Negative);
        assert_eq!(nsfw_tone(NsfwPolicy::Allowed), BadgeTone::Positive);
        assert_eq!(nsfw_tone(NsfwPolicy::Mixed), BadgeTone::Caution);
    }

    #[test]
    fn fallback_tooltips_when_notes_missing() {
        let alt = AlternativePlatform {
            name: "Bare".into(),
            ..Default::default()
        };

        assert_eq!(BadgeModel::mobile(&alt).tooltip, MOBILE_FALLBACK_NOTE);
        assert_eq!(BadgeModel::nsfw(&alt).tooltip, NSFW_FALLBACK_NOTE);
        let origin = BadgeModel::origin(&alt);
        assert_eq!(origin.tooltip, ORIGIN_FALLBACK_NOTE);
        assert_eq!(origin.label, "Origin");
    }

    #[test]
    fn origin_label_combines_flag_and_label() {
        assert_eq!(origin_label(Some("🇩🇪"), Some("Germany")), "🇩🇪 Germany");
        assert_eq!(origin_label(Some("🇩🇪"), None), "🇩🇪 Origin");
        assert_eq!(origin_label(None, Some("Federated")), "Federated");
        assert_eq!(origin_label(Some(""), None), "Origin");
    }

    #[test]
    fn warnings_hidden_when_absent_or_empty() {
        assert_eq!(visible_warnings(None), None);
        assert_eq!(visible_warnings(Some(&[][..])), None);
        let list = vec!["Beta".to_string()];
        assert_eq!(visible_warnings(Some(list.as_slice())), Some(list.as_slice()));
    }

    #[test]
    fn revolt_card_model() {
        let card = CardModel::from_platform(&revolt());

        assert_eq!(card.initials, "R");
        assert_eq!(card.badges[0].tone, BadgeTone::Caution);
        assert_eq!(card.badges[1].tone, BadgeTone::Negative);
        assert_eq!(card.badges[2].tone, BadgeTone::Neutral);
        assert_eq!(card.warnings, None);
        assert_eq!(card.warnings_placement, WarningsPlacement::AfterPros);
        assert_eq!(card.cta.label, "Visit Revolt");
        assert_eq!(card.cta.rel, "noopener noreferrer");

        let features = card.features.unwrap();
        let states: Vec<_> = features.iter().map(|line| line.support).collect();
        assert_eq!(
            states,
            vec![
                FeatureSupport::Supported,
                FeatureSupport::Planned,
                FeatureSupport::Missing,
                FeatureSupport::Missing,
                FeatureSupport::Missing,
                FeatureSupport::Missing,
                FeatureSupport::Missing,
            ]
        );
        assert!(features[1].in_development());
    }

    #[test]
    fn no_feature_map_means_no_checklist() {
        let alt = AlternativePlatform {
            name: "Mumble".into(),
            popularity: "less".into(),
            ..Default::default()
        };

        let card = CardModel::from_platform(&alt);
        assert_eq!(card.features, None);
        assert_eq!(card.warnings_placement, WarningsPlacement::AfterCons);
    }

    #[test]
    fn empty_favicon_uses_initials() {
        let alt = AlternativePlatform {
            name: "Spacebar Chat".into(),
            favicon_url: Some(String::new()),
            ..Default::default()
        };

        let card = CardModel::from_platform(&alt);
        assert_eq!(card.favicon_url, None);
        assert_eq!(card.initials, "SC");
    }
}
