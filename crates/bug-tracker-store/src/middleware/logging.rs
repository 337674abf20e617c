//! LoggingMiddleware - logs all actions for debugging

use super::{BoxFuture, Middleware, Next};
use crate::{actions::Action, state::AppState, store::Store};

/// LoggingMiddleware - logs every action that passes through the store
///
/// Place it first in the chain so it also sees the follow-up actions other
/// middleware dispatch.
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware<AppState, Action> for LoggingMiddleware {
    fn handle<'a>(
        &'a self,
        action: Action,
        _store: &'a Store<AppState, Action>,
        next: Next<'a, AppState, Action>,
    ) -> BoxFuture<'a, ()> {
        // Skip None to reduce noise
        if !matches!(action, Action::None) {
            log::debug!("Action: {:?}", action);
        }
        next.run(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::BugsAction;
    use crate::reducers::app_reducer;

    #[tokio::test]
    async fn test_logging_middleware_forwards() {
        let store = Store::builder(app_reducer::reduce)
            .add_middleware(LoggingMiddleware::new())
            .build();

        store.dispatch(Action::Bugs(BugsAction::Requested)).await;
        store.dispatch(Action::None).await;

        assert!(store.get_state().entities.bugs.loading);
    }
}
