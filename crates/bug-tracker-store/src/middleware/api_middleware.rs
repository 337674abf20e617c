//! ApiMiddleware - executes declared API calls
//!
//! Converts `ApiAction::CallBegan` into a request on the injected
//! [`ApiClient`] and reports the outcome as actions:
//!
//! ```text
//! CallBegan ──► on_start ──► CallBegan (forwarded) ──► request
//!                                                        │
//!                         ┌──────────── Ok ──────────────┼──────── Err ───────────┐
//!                         ▼                                                       ▼
//!                   CallSuccess(body)                                   CallFailed(message)
//!                         ▼                                                       ▼
//!                   on_success(body)                                    on_error(message)
//! ```
//!
//! Transport errors never escape: every failure ends up as dispatched
//! actions, and exactly one of the two branches fires per call.

use super::{BoxFuture, Middleware, Next};
use crate::actions::{Action, ApiAction, ApiCall};
use crate::state::AppState;
use crate::store::Store;
use bug_api_client::ApiClient;
use std::sync::Arc;

pub struct ApiMiddleware {
    client: Arc<dyn ApiClient>,
}

impl ApiMiddleware {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    async fn fail(store: &Store<AppState, Action>, call: &ApiCall, message: String) {
        log::warn!("{} {} failed: {}", call.method, call.url, message);
        store
            .dispatch(ApiAction::CallFailed(message.clone()).into())
            .await;
        if let Some(on_error) = call.on_error {
            store.dispatch(on_error.into_action(message)).await;
        }
    }
}

impl Middleware<AppState, Action> for ApiMiddleware {
    fn handle<'a>(
        &'a self,
        action: Action,
        store: &'a Store<AppState, Action>,
        next: Next<'a, AppState, Action>,
    ) -> BoxFuture<'a, ()> {
        let call = match action {
            Action::Api(ApiAction::CallBegan(call)) => call,
            other => return next.run(other),
        };

        Box::pin(async move {
            if let Some(on_start) = call.on_start {
                store.dispatch(on_start.into_action()).await;
            }

            next.run(ApiAction::CallBegan(call.clone()).into()).await;

            log::debug!("{} {}", call.method, call.url);
            let response = match self.client.request(call.request()).await {
                Ok(response) => response,
                Err(err) => return Self::fail(store, &call, err.message()).await,
            };

            // Decode the follow-up first; a body it cannot use counts as a
            // failed call so that exactly one branch is reported
            let follow_up = match call.on_success {
                Some(on_success) => match on_success.into_action(response.data.clone()) {
                    Ok(action) => Some(action),
                    Err(err) => {
                        let message = format!("Invalid response body: {}", err);
                        return Self::fail(store, &call, message).await;
                    }
                },
                None => None,
            };

            store
                .dispatch(ApiAction::CallSuccess(response.data).into())
                .await;
            if let Some(action) = follow_up {
                store.dispatch(action).await;
            }
        })
    }
}
