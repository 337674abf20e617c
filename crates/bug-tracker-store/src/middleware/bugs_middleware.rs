//! BugsMiddleware - turns `load_bugs` into a cached fetch

use super::{BoxFuture, Middleware, Next};
use crate::actions::{Action, BugsAction, fetch_bugs};
use crate::cache::CachePolicy;
use crate::state::AppState;
use crate::store::Store;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};

/// Handles `BugsAction::Load`
///
/// The load request itself is forwarded to the reducer (where it is a no-op)
/// so observers see it. The fetch-all call is dispatched only when the cache
/// policy says the list is missing or stale.
///
/// Loads racing on several threads are serialized by a fetch claim: only the
/// load holding it may read the cache and fetch, so at most one `GET /bugs`
/// is outstanding.
pub struct BugsMiddleware {
    policy: CachePolicy,
    clock: fn() -> DateTime<Utc>,
    fetching: AtomicBool,
}

/// Releases the fetch claim when the load finishes or is dropped
struct FetchClaim<'a>(&'a AtomicBool);

impl<'a> FetchClaim<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for FetchClaim<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl BugsMiddleware {
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            policy,
            clock: Utc::now,
            fetching: AtomicBool::new(false),
        }
    }

    /// Use a different time source for freshness checks
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }
}

impl Default for BugsMiddleware {
    fn default() -> Self {
        Self::new(CachePolicy::default())
    }
}

impl Middleware<AppState, Action> for BugsMiddleware {
    fn handle<'a>(
        &'a self,
        action: Action,
        store: &'a Store<AppState, Action>,
        next: Next<'a, AppState, Action>,
    ) -> BoxFuture<'a, ()> {
        if !matches!(action, Action::Bugs(BugsAction::Load)) {
            return next.run(action);
        }

        Box::pin(async move {
            next.run(action).await;

            let Some(_claim) = FetchClaim::acquire(&self.fetching) else {
                log::debug!("Bug list fetch already claimed, skipping fetch");
                return;
            };

            // Read state only while holding the claim, so a fetch that just
            // finished is seen as fresh
            let status = self
                .policy
                .status(&store.get_state().entities.bugs, (self.clock)());

            if status.needs_fetch() {
                log::debug!("Bug list {:?}, fetching", status);
                store.dispatch(fetch_bugs().into()).await;
            } else {
                log::debug!("Bug list {:?}, skipping fetch", status);
            }
        })
    }
}
