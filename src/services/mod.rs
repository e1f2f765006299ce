pub mod providers;
pub mod recommendations;

pub use providers::{CandidateProducer, WatchlistSource};
pub use recommendations::{fetch_section, refresh_watchlist};
