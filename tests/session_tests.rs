use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Duration};

use couchlist_recs::{
    fetch_section, refresh_watchlist, CandidateProducer, Config, ContentId, ManualClock,
    RecommendationSection, RecommendationSession, RecsError, RecsResult, Title, TitleType,
    WatchlistSource,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn titles(ids: &[u64]) -> Vec<Title> {
    ids.iter()
        .map(|&id| Title::new(ContentId(id), format!("Title {}", id), TitleType::Movie))
        .collect()
}

fn title_ids(titles: &[Title]) -> Vec<u64> {
    titles.iter().map(|t| t.id.0).collect()
}

/// Producer serving a fixed script per section, counting every call
struct FixedProducer {
    worth_watching: Vec<Title>,
    hidden_gems: Vec<Title>,
    rewatch: Vec<Title>,
    calls: AtomicUsize,
}

impl FixedProducer {
    fn new(worth_watching: &[u64], hidden_gems: &[u64], rewatch: &[u64]) -> Arc<Self> {
        Arc::new(Self {
            worth_watching: titles(worth_watching),
            hidden_gems: titles(hidden_gems),
            rewatch: titles(rewatch),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl CandidateProducer for FixedProducer {
    async fn candidates(&self, section: RecommendationSection) -> RecsResult<Vec<Title>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(match section {
            RecommendationSection::WorthWatching => self.worth_watching.clone(),
            RecommendationSection::HiddenGems => self.hidden_gems.clone(),
            RecommendationSection::Rewatch => self.rewatch.clone(),
        })
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}

struct FailingProducer;

#[async_trait::async_trait]
impl CandidateProducer for FailingProducer {
    async fn candidates(&self, _section: RecommendationSection) -> RecsResult<Vec<Title>> {
        Err(RecsError::Producer("ranking backend unavailable".to_string()))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

struct FixedWatchlist {
    ids: Vec<ContentId>,
}

#[async_trait::async_trait]
impl WatchlistSource for FixedWatchlist {
    async fn watchlist_ids(&self) -> RecsResult<Vec<ContentId>> {
        Ok(self.ids.clone())
    }
}

fn create_test_session() -> RecommendationSession {
    RecommendationSession::new(&Config::default())
}

fn create_test_session_with_clock() -> (RecommendationSession, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::starting_at(DateTime::UNIX_EPOCH));
    let session = RecommendationSession::with_clock(&Config::default(), clock.clone());
    (session, clock)
}

#[tokio::test]
async fn test_full_session_flow() {
    init_tracing();
    let session = create_test_session();
    let producer = FixedProducer::new(&[10, 1, 2], &[2, 3], &[3, 4]);

    // Sign-in: watchlist comes down first
    let source = Arc::new(FixedWatchlist {
        ids: vec![ContentId(10)],
    });
    let standing = refresh_watchlist(&session, source).await.unwrap();
    assert_eq!(standing, 1);

    // Each section filters the watchlist and everything shown before it
    let worth_watching = fetch_section(
        &session,
        producer.clone(),
        RecommendationSection::WorthWatching,
    )
    .await
    .unwrap();
    assert_eq!(title_ids(&worth_watching), vec![1, 2]);

    let hidden_gems = fetch_section(
        &session,
        producer.clone(),
        RecommendationSection::HiddenGems,
    )
    .await
    .unwrap();
    assert_eq!(title_ids(&hidden_gems), vec![3]);

    let rewatch = fetch_section(&session, producer.clone(), RecommendationSection::Rewatch)
        .await
        .unwrap();
    assert_eq!(title_ids(&rewatch), vec![4]);

    // Revisiting a section serves the cached row, not a new producer call
    let revisited = fetch_section(
        &session,
        producer.clone(),
        RecommendationSection::WorthWatching,
    )
    .await
    .unwrap();
    assert_eq!(title_ids(&revisited), vec![1, 2]);
    assert_eq!(producer.calls(), 3);
}

#[tokio::test]
async fn test_expiry_refetches_but_exclusions_survive() {
    init_tracing();
    let (session, clock) = create_test_session_with_clock();
    session.initialize(vec![ContentId(10)]).await;

    let producer = FixedProducer::new(&[10, 1, 2], &[], &[]);
    let first = fetch_section(
        &session,
        producer.clone(),
        RecommendationSection::WorthWatching,
    )
    .await
    .unwrap();
    assert_eq!(title_ids(&first), vec![1, 2]);
    assert_eq!(producer.calls(), 1);

    // Past the TTL the cached row is gone, but the shown history is not
    clock.advance(Duration::hours(4) + Duration::seconds(1));
    let refetched = fetch_section(
        &session,
        producer.clone(),
        RecommendationSection::WorthWatching,
    )
    .await
    .unwrap();
    assert_eq!(producer.calls(), 2);
    assert!(refetched.is_empty());

    // The empty row was cached like any other result
    let cached_empty = fetch_section(
        &session,
        producer.clone(),
        RecommendationSection::WorthWatching,
    )
    .await
    .unwrap();
    assert!(cached_empty.is_empty());
    assert_eq!(producer.calls(), 2);
}

#[tokio::test]
async fn test_invalidate_section_refetches_only_that_section() {
    init_tracing();
    let session = create_test_session();
    let producer = FixedProducer::new(&[1, 2], &[3], &[]);

    fetch_section(
        &session,
        producer.clone(),
        RecommendationSection::WorthWatching,
    )
    .await
    .unwrap();
    fetch_section(
        &session,
        producer.clone(),
        RecommendationSection::HiddenGems,
    )
    .await
    .unwrap();
    assert_eq!(producer.calls(), 2);

    session
        .invalidate_section(RecommendationSection::WorthWatching)
        .await;

    // Invalidated section goes back to the producer; its titles were already
    // shown, so the refreshed row is empty
    let refreshed = fetch_section(
        &session,
        producer.clone(),
        RecommendationSection::WorthWatching,
    )
    .await
    .unwrap();
    assert!(refreshed.is_empty());
    assert_eq!(producer.calls(), 3);

    // The other section is still served from cache
    let hidden_gems = fetch_section(
        &session,
        producer.clone(),
        RecommendationSection::HiddenGems,
    )
    .await
    .unwrap();
    assert_eq!(title_ids(&hidden_gems), vec![3]);
    assert_eq!(producer.calls(), 3);
}

#[tokio::test]
async fn test_initialize_clears_cache_and_reallows_titles() {
    init_tracing();
    let session = create_test_session();
    session.initialize(vec![ContentId(10)]).await;

    let producer = FixedProducer::new(&[10, 1, 2], &[], &[]);
    let first = fetch_section(
        &session,
        producer.clone(),
        RecommendationSection::WorthWatching,
    )
    .await
    .unwrap();
    assert_eq!(title_ids(&first), vec![1, 2]);

    // Watchlist replaced by an empty one: everything is fair game again
    session.initialize(Vec::new()).await;

    let second = fetch_section(
        &session,
        producer.clone(),
        RecommendationSection::WorthWatching,
    )
    .await
    .unwrap();
    assert_eq!(title_ids(&second), vec![10, 1, 2]);
    assert_eq!(producer.calls(), 2);
}

#[tokio::test]
async fn test_reset_reallows_shown_titles_but_keeps_watchlist() {
    init_tracing();
    let session = create_test_session();
    session.initialize(vec![ContentId(10)]).await;

    let producer = FixedProducer::new(&[10, 1, 2], &[], &[]);
    fetch_section(
        &session,
        producer.clone(),
        RecommendationSection::WorthWatching,
    )
    .await
    .unwrap();

    session.reset().await;

    let after_reset = fetch_section(
        &session,
        producer.clone(),
        RecommendationSection::WorthWatching,
    )
    .await
    .unwrap();
    assert_eq!(title_ids(&after_reset), vec![1, 2]);
    assert_eq!(producer.calls(), 2);
}

#[tokio::test]
async fn test_producer_failure_propagates_and_leaves_session_clean() {
    init_tracing();
    let session = create_test_session();

    let result = fetch_section(
        &session,
        Arc::new(FailingProducer),
        RecommendationSection::Rewatch,
    )
    .await;
    assert!(matches!(result, Err(RecsError::Producer(_))));

    // Nothing was marked shown and nothing was cached
    assert!(session.excluded_ids().await.is_empty());
    let producer = FixedProducer::new(&[], &[], &[7]);
    let recovered = fetch_section(&session, producer.clone(), RecommendationSection::Rewatch)
        .await
        .unwrap();
    assert_eq!(title_ids(&recovered), vec![7]);
    assert_eq!(producer.calls(), 1);
}

#[tokio::test]
async fn test_refresh_watchlist_collapses_duplicates() {
    init_tracing();
    let session = create_test_session();

    let source = Arc::new(FixedWatchlist {
        ids: vec![ContentId(3), ContentId(4), ContentId(4)],
    });
    let standing = refresh_watchlist(&session, source).await.unwrap();

    assert_eq!(standing, 2);
    assert!(session.is_excluded(ContentId(3)).await);
    assert!(session.is_excluded(ContentId(4)).await);
}
