//! Bug tracker store
//!
//! Client-side state container for a REST bug tracker, built the Redux way:
//!
//! ```text
//! dispatch(action)
//!     │
//!     ▼
//! LoggingMiddleware ──► BugsMiddleware ──► ApiMiddleware ──► app_reducer ──► listeners
//!                            │                   │
//!                      cache check          ApiClient (GET/POST/PATCH)
//! ```
//!
//! Mutations (create, resolve, assign) reach the state only once the server
//! confirmed them. Loading the list goes through a TTL cache that also keeps
//! at most one fetch in flight.
//!
//! ```rust,ignore
//! let client = Arc::new(HttpClient::new(&config.base_url)?);
//! let store = configure_store(client, &config);
//!
//! store.dispatch(load_bugs()).await;
//! store.dispatch(resolve_bug(1u64)).await;
//!
//! for bug in selectors::get_unresolved_bugs(&store.get_state()) {
//!     println!("{}", bug.description);
//! }
//! ```

pub mod actions;
pub mod cache;
pub mod configure;
pub mod domain_models;
pub mod middleware;
pub mod reducers;
pub mod selectors;
pub mod state;
pub mod store;

#[cfg(test)]
mod test_support;

pub use actions::{Action, add_bug, assign_bug_to_user, load_bugs, resolve_bug};
pub use cache::{CachePolicy, CacheStatus};
pub use configure::{BugStore, configure_store};
pub use domain_models::{Bug, BugId, NewBug, UserId};
pub use state::AppState;
pub use store::{Store, StoreBuilder};
