//! Store wiring for the bug tracker

use crate::actions::Action;
use crate::cache::CachePolicy;
use crate::middleware::{ApiMiddleware, BugsMiddleware, LoggingMiddleware};
use crate::reducers::app_reducer;
use crate::state::AppState;
use crate::store::Store;
use bug_api_client::ApiClient;
use bug_tracker_config::AppConfig;
use std::sync::Arc;

/// The application store
pub type BugStore = Store<AppState, Action>;

/// Build the application store with its middleware chain
///
/// Order matters: logging sees every action first, the bugs middleware
/// turns `load_bugs` into a fetch, and the API middleware executes calls
/// right before the reducer.
pub fn configure_store(client: Arc<dyn ApiClient>, config: &AppConfig) -> BugStore {
    Store::builder(app_reducer::reduce)
        .add_middleware(LoggingMiddleware::new())
        .add_middleware(BugsMiddleware::new(CachePolicy::from_config(config)))
        .add_middleware(ApiMiddleware::new(client))
        .build()
}
