//! Test doubles shared by the unit tests

use crate::actions::Action;
use crate::middleware::{BoxFuture, Middleware, Next};
use crate::state::AppState;
use crate::store::Store;
use async_trait::async_trait;
use bug_api_client::{ApiClient, ApiError, ApiRequest, ApiResponse};
use std::sync::{Arc, Mutex};

type Responder = dyn Fn(&ApiRequest) -> Result<ApiResponse, ApiError> + Send + Sync;

/// In-memory [`ApiClient`] answering every request with a closure
#[derive(Clone)]
pub struct MockApiClient {
    responder: Arc<Responder>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockApiClient {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&ApiRequest) -> Result<ApiResponse, ApiError> + Send + Sync + 'static,
    {
        Self {
            responder: Arc::new(responder),
            requests: Arc::default(),
        }
    }

    /// Requests received so far, in order
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ApiClient for MockApiClient {
    async fn request(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        // Suspend like a real network call would
        tokio::task::yield_now().await;
        (self.responder)(&request)
    }
}

/// Middleware recording every action it sees before forwarding it
#[derive(Clone, Default)]
pub struct RecordingMiddleware {
    actions: Arc<Mutex<Vec<Action>>>,
}

impl RecordingMiddleware {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actions(&self) -> Vec<Action> {
        self.actions.lock().unwrap().clone()
    }
}

impl Middleware<AppState, Action> for RecordingMiddleware {
    fn handle<'a>(
        &'a self,
        action: Action,
        _store: &'a Store<AppState, Action>,
        next: Next<'a, AppState, Action>,
    ) -> BoxFuture<'a, ()> {
        self.actions.lock().unwrap().push(action.clone());
        next.run(action)
    }
}
