use chrono::{DateTime, Duration, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

/// Time source for cache expiry decisions
///
/// Expiry is a passive wall-clock comparison at access time, so the only
/// capability needed is "what time is it now". Production code uses
/// [`SystemClock`]; tests inject [`ManualClock`] to simulate elapsed time
/// instead of sleeping.
pub trait Clock: Send + Sync {
    /// Current wall-clock time
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by `Utc::now()`
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Movable clock with second resolution
///
/// Holds time still until told otherwise, which makes TTL expiry
/// deterministic in tests. Second resolution is enough: the expiry compare
/// operates at whole-second scale.
#[derive(Debug)]
pub struct ManualClock {
    secs: AtomicI64,
}

impl ManualClock {
    /// Creates a clock frozen at `start`
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            secs: AtomicI64::new(start.timestamp()),
        }
    }

    /// Moves the clock forward (or backward, with a negative duration)
    pub fn advance(&self, delta: Duration) {
        self.secs.fetch_add(delta.num_seconds(), Ordering::SeqCst);
    }

    /// Jumps the clock to an absolute time
    pub fn set(&self, to: DateTime<Utc>) {
        self.secs.store(to.timestamp(), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.secs.load(Ordering::SeqCst), 0)
            .unwrap_or(DateTime::UNIX_EPOCH)
    }
}
