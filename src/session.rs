use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::cache::RecommendationCache;
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::exclusions::ExclusionTracker;
use crate::models::{ContentId, RecommendationSection};

/// Per-user recommendation state for one app session
///
/// Owns the section cache and the exclusion tracker behind independent locks,
/// one per component. Callers hold at most one lock at a time and never
/// across an await, so the two components cannot deadlock against each other.
/// Carries a generated id so every log line from this session correlates.
pub struct RecommendationSession {
    id: Uuid,
    pub(crate) cache: Mutex<RecommendationCache>,
    pub(crate) exclusions: Mutex<ExclusionTracker>,
}

impl RecommendationSession {
    /// Creates a session on the system clock
    pub fn new(config: &Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a session on an injected clock
    pub fn with_clock(config: &Config, clock: Arc<dyn Clock>) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(
            session = %id,
            ttl_secs = config.recommendation_ttl_secs,
            "Created recommendation session"
        );
        Self {
            id,
            cache: Mutex::new(RecommendationCache::with_clock(
                config.recommendation_ttl(),
                clock,
            )),
            exclusions: Mutex::new(ExclusionTracker::new()),
        }
    }

    /// The session's correlation id
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Installs a fresh watchlist and starts the session from a clean slate
    ///
    /// Resets shown-state and drops every cached section: entries filtered
    /// under the previous exclusions could otherwise resurface titles the
    /// tracker no longer remembers showing. Runs at sign-in and whenever the
    /// watchlist changes.
    pub async fn initialize(&self, watchlist_ids: Vec<ContentId>) {
        let count = watchlist_ids.len();
        self.exclusions.lock().await.initialize(watchlist_ids);
        self.cache.lock().await.clear();
        tracing::info!(
            session = %self.id,
            watchlist = count,
            "Initialized recommendation session"
        );
    }

    /// Ends the session: forgets shown-state and cached sections
    ///
    /// The watchlist stays in place for the next session under this user.
    pub async fn reset(&self) {
        self.exclusions.lock().await.clear();
        self.cache.lock().await.clear();
        tracing::info!(session = %self.id, "Reset recommendation session");
    }

    /// Drops the cached entry for one section, forcing the next fetch through
    /// to the producer
    pub async fn invalidate_section(&self, section: RecommendationSection) {
        self.cache.lock().await.clear_section(section);
        tracing::debug!(
            session = %self.id,
            section = %section,
            "Invalidated cached section"
        );
    }

    /// Whether `id` is currently excluded from recommendation
    pub async fn is_excluded(&self, id: ContentId) -> bool {
        self.exclusions.lock().await.is_excluded(id)
    }

    /// Every currently excluded id, deduplicated
    pub async fn excluded_ids(&self) -> Vec<ContentId> {
        self.exclusions.lock().await.all_excluded_ids()
    }
}
