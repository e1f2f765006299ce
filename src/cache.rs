use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::clock::{Clock, SystemClock};
use crate::models::{RecommendationSection, Title};

/// One cached result set, stamped at insertion time
#[derive(Debug, Clone)]
struct CacheEntry {
    titles: Vec<Title>,
    created_at: DateTime<Utc>,
}

/// Time-bounded cache of recommendation result sets, one slot per section
///
/// An entry is valid while `now - created_at <= ttl`; an expired entry
/// behaves exactly like a missing one and is purged by the next access that
/// observes it. There is no background sweep; the only consumer reads on
/// screen visits, so a wall-clock comparison at access time is all the
/// expiry machinery required. The cache holds no exclusion logic; it is
/// purely a performance layer in front of the candidate producer.
pub struct RecommendationCache {
    entries: HashMap<RecommendationSection, CacheEntry>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl RecommendationCache {
    /// Creates an empty cache on the system clock
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Creates an empty cache on an injected clock
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            clock,
        }
    }

    /// Stores a result set for `section`, replacing any prior entry
    pub fn set(&mut self, section: RecommendationSection, titles: Vec<Title>) {
        tracing::debug!(
            section = %section,
            count = titles.len(),
            "Cached section recommendations"
        );
        let entry = CacheEntry {
            titles,
            created_at: self.clock.now(),
        };
        self.entries.insert(section, entry);
    }

    /// Returns the cached result set for `section` while it is still valid
    ///
    /// Expired entries are deleted on observation and reported as absent.
    /// Repeated calls on a still-valid entry return identical values.
    pub fn get(&mut self, section: RecommendationSection) -> Option<Vec<Title>> {
        self.live_entry(section).map(|entry| entry.titles.clone())
    }

    /// Whether a valid entry exists for `section`
    ///
    /// Applies the same lazy expiry as `get`, so a `true` here means an
    /// immediate `get` returns the value.
    pub fn has(&mut self, section: RecommendationSection) -> bool {
        self.live_entry(section).is_some()
    }

    /// Drops any entry for `section`, valid or not
    pub fn clear_section(&mut self, section: RecommendationSection) {
        self.entries.remove(&section);
    }

    /// Drops every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored entries
    ///
    /// May count expired entries no access has observed yet.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up `section`, evicting the entry if its TTL has elapsed
    fn live_entry(&mut self, section: RecommendationSection) -> Option<&CacheEntry> {
        let now = self.clock.now();
        let ttl = self.ttl;

        match self.entries.entry(section) {
            Entry::Occupied(slot) => {
                if now.signed_duration_since(slot.get().created_at) <= ttl {
                    Some(slot.into_mut())
                } else {
                    slot.remove();
                    tracing::debug!(section = %section, "Evicted expired recommendation entry");
                    None
                }
            }
            Entry::Vacant(_) => None,
        }
    }
}
