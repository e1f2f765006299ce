//! Recommendation de-duplication core for the Couchlist client
//!
//! Keeps the "For You" screen honest across its three rows: a title the user
//! has watchlisted, or that any row has already surfaced this session, is
//! never recommended again. Candidate generation itself lives behind the
//! [`services::providers::CandidateProducer`] boundary; this crate owns the
//! session state around it: a TTL-bounded per-section result cache, the
//! exclusion bookkeeping, and the fetch orchestration tying them together.

pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod exclusions;
pub mod models;
pub mod services;
pub mod session;

pub use cache::RecommendationCache;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use error::{RecsError, RecsResult};
pub use exclusions::ExclusionTracker;
pub use models::{ContentId, RecommendationSection, Title, TitleType};
pub use services::providers::{CandidateProducer, WatchlistSource};
pub use services::recommendations::{fetch_section, refresh_watchlist};
pub use session::RecommendationSession;
