//! Bug list cache policy
//!
//! Decides whether `load_bugs` has to hit the server. A fetch is skipped
//! while the last one is younger than the TTL, and also while one is still
//! in flight, so at most one `GET /bugs` is ever outstanding.

use crate::state::BugsState;
use bug_tracker_config::AppConfig;
use chrono::{DateTime, Duration, Utc};

/// Default freshness window of the bug list
pub const DEFAULT_TTL_MINUTES: i64 = 10;

/// Where the cached bug list stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// Never fetched
    Missing,
    /// Fetched, but older than the TTL
    Stale,
    /// Fetched within the TTL
    Fresh,
    /// A fetch is in flight
    InFlight,
}

impl CacheStatus {
    pub fn needs_fetch(self) -> bool {
        matches!(self, CacheStatus::Missing | CacheStatus::Stale)
    }
}

/// Freshness rule for the bug list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    ttl: Duration,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self::new(Duration::minutes(DEFAULT_TTL_MINUTES))
    }
}

impl CachePolicy {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.cache_ttl())
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Classify the bugs slice at `now`
    pub fn status(&self, state: &BugsState, now: DateTime<Utc>) -> CacheStatus {
        if state.loading {
            return CacheStatus::InFlight;
        }

        match state.last_fetch {
            None => CacheStatus::Missing,
            Some(last_fetch) if now.signed_duration_since(last_fetch) < self.ttl => {
                CacheStatus::Fresh
            }
            Some(_) => CacheStatus::Stale,
        }
    }

    pub fn should_fetch(&self, state: &BugsState, now: DateTime<Utc>) -> bool {
        self.status(state, now).needs_fetch()
    }
}
