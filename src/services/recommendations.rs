use std::collections::HashSet;
use std::sync::Arc;

use crate::error::RecsResult;
use crate::models::{ContentId, RecommendationSection, Title};
use crate::services::providers::{CandidateProducer, WatchlistSource};
use crate::session::RecommendationSession;

/// Fetches the recommendation row for one section (checks cache first)
///
/// On a cache miss the producer's candidates are filtered against the
/// session's exclusions, recorded as shown, cached, and returned. Whatever
/// this returns is what the user sees, so the survivors are committed to the
/// tracker before they leave this function. An empty filtered list is cached
/// like any other result; only a producer failure leaves the cache untouched.
pub async fn fetch_section(
    session: &RecommendationSession,
    producer: Arc<dyn CandidateProducer>,
    section: RecommendationSection,
) -> RecsResult<Vec<Title>> {
    if let Some(cached) = session.cache.lock().await.get(section) {
        tracing::debug!(
            session = %session.id(),
            section = %section,
            count = cached.len(),
            "Cache hit"
        );
        return Ok(cached);
    }

    tracing::debug!(
        session = %session.id(),
        section = %section,
        producer = producer.name(),
        "Cache miss"
    );

    // Cache miss - pull fresh candidates. No session lock is held here.
    let candidates = producer.candidates(section).await?;
    let produced = candidates.len();

    let titles = {
        let mut exclusions = session.exclusions.lock().await;
        // Repeated ids within one batch count as already shown too
        let mut kept_ids = HashSet::new();
        let kept: Vec<Title> = candidates
            .into_iter()
            .filter(|title| !exclusions.is_excluded(title.id) && kept_ids.insert(title.id))
            .collect();

        let shown: Vec<ContentId> = kept.iter().map(|title| title.id).collect();
        exclusions.mark_shown(section, &shown);
        kept
    };

    session.cache.lock().await.set(section, titles.clone());

    if titles.is_empty() {
        tracing::warn!(
            session = %session.id(),
            section = %section,
            produced = produced,
            "No candidates survived exclusion filtering"
        );
    }

    tracing::info!(
        session = %session.id(),
        section = %section,
        produced = produced,
        excluded = produced - titles.len(),
        returned = titles.len(),
        "Recommendations fetched"
    );

    Ok(titles)
}

/// Pulls the current watchlist and re-initializes the session with it
///
/// Returns how many ids now stand excluded. Cached sections are dropped
/// along the way; they were filtered under the old watchlist.
pub async fn refresh_watchlist(
    session: &RecommendationSession,
    source: Arc<dyn WatchlistSource>,
) -> RecsResult<usize> {
    let ids = source.watchlist_ids().await?;
    let fetched = ids.len();

    session.initialize(ids).await;
    let standing = session.excluded_ids().await.len();

    tracing::info!(
        session = %session.id(),
        fetched = fetched,
        standing = standing,
        "Watchlist refreshed"
    );

    Ok(standing)
}
