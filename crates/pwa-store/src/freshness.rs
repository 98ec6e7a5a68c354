//! Cache freshness policies.
//!
//! Whether cached data may be reused without a refetch is decided outside
//! the fetching code, through a [`FreshnessPolicy`].

use chrono::{DateTime, Duration, Utc};

use crate::state::VariantCacheEntry;

/// Decides whether a settled cache entry is still usable.
///
/// Policies are consulted from inside [`Store::dispatch_if`](crate::Store::dispatch_if)
/// while the state lock is held. An implementation must not read or dispatch
/// through the store; doing so deadlocks.
pub trait FreshnessPolicy: Send + Sync {
    /// Returns true when `entry` can be used at `now` without a refetch.
    fn is_fresh(&self, entry: &VariantCacheEntry, now: DateTime<Utc>) -> bool;
}

/// Time-to-live policy: present data is fresh until `ttl` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtlFreshness {
    ttl: Duration,
}

impl TtlFreshness {
    /// Create a policy with the given lifetime.
    pub fn new(ttl: Duration) -> Self {
        Self { ttl }
    }

    /// Create a policy from a lifetime in seconds.
    pub fn from_secs(secs: u64) -> Self {
        let ttl = i64::try_from(secs)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX);
        Self::new(ttl)
    }
}

impl Default for TtlFreshness {
    fn default() -> Self {
        Self::new(Duration::hours(1))
    }
}

impl FreshnessPolicy for TtlFreshness {
    fn is_fresh(&self, entry: &VariantCacheEntry, now: DateTime<Utc>) -> bool {
        match entry {
            VariantCacheEntry::Present { received_at, .. } => now - *received_at < self.ttl,
            VariantCacheEntry::Pending | VariantCacheEntry::Error => false,
        }
    }
}

/// Policy that never trusts cached data.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysStale;

impl FreshnessPolicy for AlwaysStale {
    fn is_fresh(&self, _entry: &VariantCacheEntry, _now: DateTime<Utc>) -> bool {
        false
    }
}

/// The "should fetch" decision rule.
///
/// - absent: fetch
/// - pending: skip (a request is already in flight)
/// - error: fetch
/// - present: fetch only when the policy reports it stale
pub fn should_fetch(
    entry: Option<&VariantCacheEntry>,
    policy: &dyn FreshnessPolicy,
    now: DateTime<Utc>,
) -> bool {
    match entry {
        None => true,
        Some(VariantCacheEntry::Pending) => false,
        Some(VariantCacheEntry::Error) => true,
        Some(entry @ VariantCacheEntry::Present { .. }) => !policy.is_fresh(entry, now),
    }
}
