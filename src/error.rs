/// Errors surfaced by the recommendation core
///
/// Cache and tracker operations are total: a missing entry or an empty input
/// is a no-op or an empty result, never an error. The only
/// failures that cross this crate's boundary originate in the external
/// collaborators behind the provider traits.
#[derive(thiserror::Error, Debug)]
pub enum RecsError {
    #[error("Candidate producer error: {0}")]
    Producer(String),

    #[error("Watchlist source error: {0}")]
    WatchlistSource(String),
}

pub type RecsResult<T> = Result<T, RecsError>;
