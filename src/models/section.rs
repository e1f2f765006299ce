use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A named recommendation shelf in the app
///
/// Sections form a closed set: everything keyed per section (cached results,
/// already-shown bookkeeping) is keyed by this enum, so an unknown section
/// name cannot reach the cache or the exclusion tracker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum RecommendationSection {
    /// Headline picks matched to the user's taste
    WorthWatching,
    /// Lesser-known titles with strong affinity scores
    HiddenGems,
    /// Finished titles worth a second run
    Rewatch,
}

impl RecommendationSection {
    /// All sections, in the order the app renders them
    pub const ALL: [RecommendationSection; 3] = [
        RecommendationSection::WorthWatching,
        RecommendationSection::HiddenGems,
        RecommendationSection::Rewatch,
    ];

    /// Canonical name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationSection::WorthWatching => "worthWatching",
            RecommendationSection::HiddenGems => "hiddenGems",
            RecommendationSection::Rewatch => "rewatch",
        }
    }
}

impl Display for RecommendationSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
