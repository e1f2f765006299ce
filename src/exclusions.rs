use std::collections::HashSet;

use crate::models::{ContentId, RecommendationSection};

/// Session-scoped record of which titles must not be recommended again
///
/// Two kinds of exclusion feed the same union:
///   - the user's watchlist, a standing set replaced wholesale on refresh
///   - titles already surfaced this session, tracked per section
///
/// A title shown under one section is excluded everywhere: exclusion checks
/// are global even though shown-state is bucketed. The buckets exist so the
/// shown history stays inspectable per surface, not to scope the filter.
#[derive(Debug, Default)]
pub struct ExclusionTracker {
    watchlist: HashSet<ContentId>,
    worth_watching: HashSet<ContentId>,
    hidden_gems: HashSet<ContentId>,
    rewatch: HashSet<ContentId>,
}

impl ExclusionTracker {
    /// Creates a tracker with no exclusions
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the watchlist wholesale and resets all shown-state
    ///
    /// Duplicate ids in the input collapse into the set. Runs on session
    /// start and whenever the watchlist is re-fetched.
    pub fn initialize(&mut self, watchlist_ids: impl IntoIterator<Item = ContentId>) {
        self.watchlist = watchlist_ids.into_iter().collect();
        self.clear();
        tracing::debug!(
            watchlist = self.watchlist.len(),
            "Initialized exclusion tracker"
        );
    }

    /// Forgets everything shown this session, keeping the watchlist intact
    ///
    /// Idempotent.
    pub fn clear(&mut self) {
        self.worth_watching.clear();
        self.hidden_gems.clear();
        self.rewatch.clear();
    }

    /// Records that `ids` were surfaced under `section`
    pub fn mark_shown(&mut self, section: RecommendationSection, ids: &[ContentId]) {
        self.section_set_mut(section).extend(ids.iter().copied());
    }

    /// Whether `id` may not be recommended, in any section
    pub fn is_excluded(&self, id: ContentId) -> bool {
        self.watchlist.contains(&id)
            || self
                .section_sets()
                .iter()
                .any(|shown| shown.contains(&id))
    }

    /// Every currently excluded id, deduplicated across all sources
    ///
    /// Order is unspecified.
    pub fn all_excluded_ids(&self) -> Vec<ContentId> {
        let mut ids: HashSet<ContentId> = self.watchlist.iter().copied().collect();
        for shown in self.section_sets() {
            ids.extend(shown.iter().copied());
        }
        ids.into_iter().collect()
    }

    fn section_sets(&self) -> [&HashSet<ContentId>; 3] {
        [&self.worth_watching, &self.hidden_gems, &self.rewatch]
    }

    fn section_set_mut(&mut self, section: RecommendationSection) -> &mut HashSet<ContentId> {
        match section {
            RecommendationSection::WorthWatching => &mut self.worth_watching,
            RecommendationSection::HiddenGems => &mut self.hidden_gems,
            RecommendationSection::Rewatch => &mut self.rewatch,
        }
    }
}
