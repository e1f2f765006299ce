use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Unique identifier for a piece of catalog content
///
/// The backend issues numeric content ids; everything the dedup core tracks
/// (watchlist exclusions, already-shown bookkeeping) is keyed by this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(pub u64);

impl Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type of content
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TitleType {
    Movie,
    Series,
}

/// A movie or TV show surfaced in a recommendation section
///
/// Produced by the candidate backend and passed through to the UI; the dedup
/// core only ever looks at `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Title {
    pub id: ContentId,
    pub title: String,
    pub title_type: TitleType,
    pub release_year: Option<i32>,
    pub overview: Option<String>,
}

impl Title {
    /// Creates a title with no metadata beyond the essentials
    pub fn new(id: ContentId, title: String, title_type: TitleType) -> Self {
        Self {
            id,
            title,
            title_type,
            release_year: None,
            overview: None,
        }
    }
}
