use crate::error::RecsResult;
use crate::models::{ContentId, RecommendationSection, Title};

/// Trait for recommendation candidate backends
///
/// The ranking service behind each section lives outside this crate (remote
/// API, on-device model, fixture data in tests). Implementations return raw
/// candidates for a section; exclusion filtering and caching happen on this
/// side of the boundary. Candidates may arrive unordered and may repeat ids.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CandidateProducer: Send + Sync {
    /// Produce candidate titles for one section
    ///
    /// May be slow; callers must not hold session locks across this call.
    async fn candidates(&self, section: RecommendationSection) -> RecsResult<Vec<Title>>;

    /// Producer name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Trait for the user's watchlist backend
///
/// Supplies the standing set of ids the user has already saved; everything it
/// returns is excluded from recommendation until the next refresh replaces it.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait WatchlistSource: Send + Sync {
    /// Fetch the current watchlist ids
    async fn watchlist_ids(&self) -> RecsResult<Vec<ContentId>>;
}
