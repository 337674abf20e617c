//! Middleware system for Redux architecture
//!
//! Middleware sits between action dispatch and reducer execution, allowing
//! side effects, async operations, logging, and other cross-cutting concerns
//! to be handled in a composable way.
//!
//! ## Design
//!
//! ```text
//! dispatch → Middleware 1 → Middleware 2 → ... → Reducer → State → Listeners
//! ```
//!
//! Each middleware receives the action, the store, and a [`Next`] handle to
//! the rest of the chain. It can:
//! - Forward the action unchanged (`next.run(action)`)
//! - Transform it and forward the result
//! - Swallow it by not calling `next` at all
//! - Dispatch new actions through `store.dispatch`, which re-enter the chain
//!   from the top
//!
//! ## Example
//!
//! ```rust,ignore
//! struct AuditMiddleware;
//!
//! impl Middleware<AppState, Action> for AuditMiddleware {
//!     fn handle<'a>(
//!         &'a self,
//!         action: Action,
//!         store: &'a Store<AppState, Action>,
//!         next: Next<'a, AppState, Action>,
//!     ) -> BoxFuture<'a, ()> {
//!         Box::pin(async move {
//!             let before = store.get_state();
//!             next.run(action).await;
//!             log::debug!("{:?} -> {:?}", before, store.get_state());
//!         })
//!     }
//! }
//! ```

use crate::store::Store;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

mod api_middleware;
mod bugs_middleware;
mod logging;

pub use api_middleware::ApiMiddleware;
pub use bugs_middleware::BugsMiddleware;
pub use logging::LoggingMiddleware;

/// BoxFuture type alias for async middleware handlers
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Handlers take `&self` because several dispatches can be in flight at the
/// same time; keep per-call state inside the returned future.
pub trait Middleware<S, A>: Send + Sync {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `store`: Read state with `get_state`, dispatch follow-up actions
    /// - `next`: The rest of the chain; call `next.run(action)` to forward
    fn handle<'a>(
        &'a self,
        action: A,
        store: &'a Store<S, A>,
        next: Next<'a, S, A>,
    ) -> BoxFuture<'a, ()>;
}

/// Continuation over the remaining middleware, ending in the reducer
pub struct Next<'a, S, A> {
    store: &'a Store<S, A>,
    chain: &'a [Arc<dyn Middleware<S, A>>],
}

impl<'a, S, A> Next<'a, S, A>
where
    S: Clone + Send + Sync + 'static,
    A: Send + 'static,
{
    pub(crate) fn new(store: &'a Store<S, A>, chain: &'a [Arc<dyn Middleware<S, A>>]) -> Self {
        Self { store, chain }
    }

    /// Pass the action to the next middleware, or to the reducer at the end
    pub fn run(self, action: A) -> BoxFuture<'a, ()> {
        match self.chain.split_first() {
            Some((middleware, rest)) => middleware.handle(action, self.store, Next::new(self.store, rest)),
            None => {
                let store = self.store;
                Box::pin(async move { store.reduce(action) })
            }
        }
    }
}
