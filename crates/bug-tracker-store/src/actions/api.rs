//! API call actions
//!
//! An [`ApiCall`] describes a request and what to dispatch around it. The
//! reducer never sees the network; the API middleware turns a
//! `CallBegan` into the actual request and the follow-up actions.

use super::{Action, BugsAction};
use crate::domain_models::Bug;
use bug_api_client::{ApiRequest, HttpMethod};
use serde_json::Value;

/// Network call lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum ApiAction {
    /// A call is about to be made
    CallBegan(ApiCall),
    /// Any call succeeded, carrying the raw response body
    CallSuccess(Value),
    /// Any call failed, carrying the error message
    CallFailed(String),
}

/// Declarative description of a network call
#[derive(Debug, Clone, PartialEq)]
pub struct ApiCall {
    pub url: String,
    pub method: HttpMethod,
    pub data: Option<Value>,
    /// Dispatched before the request is sent
    pub on_start: Option<StartAction>,
    /// Built from the response body once the request succeeded
    pub on_success: Option<SuccessAction>,
    /// Built from the error message once the request failed
    pub on_error: Option<ErrorAction>,
}

impl ApiCall {
    pub fn new(method: HttpMethod, url: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            url: url.into(),
            method,
            data,
            on_start: None,
            on_success: None,
            on_error: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url, None)
    }

    pub fn post(url: impl Into<String>, data: Value) -> Self {
        Self::new(HttpMethod::Post, url, Some(data))
    }

    pub fn patch(url: impl Into<String>, data: Value) -> Self {
        Self::new(HttpMethod::Patch, url, Some(data))
    }

    pub fn on_start(mut self, action: StartAction) -> Self {
        self.on_start = Some(action);
        self
    }

    pub fn on_success(mut self, action: SuccessAction) -> Self {
        self.on_success = Some(action);
        self
    }

    pub fn on_error(mut self, action: ErrorAction) -> Self {
        self.on_error = Some(action);
        self
    }

    /// Transport request for this call
    pub fn request(&self) -> ApiRequest {
        ApiRequest::new(self.method, self.url.clone(), self.data.clone())
    }
}

impl From<ApiCall> for Action {
    fn from(call: ApiCall) -> Self {
        Action::Api(ApiAction::CallBegan(call))
    }
}

/// Action dispatched before a request goes out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartAction {
    BugsRequested,
}

impl StartAction {
    pub fn into_action(self) -> Action {
        match self {
            StartAction::BugsRequested => Action::Bugs(BugsAction::Requested),
        }
    }
}

/// Action built from a successful response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessAction {
    BugAdded,
    BugResolved,
    BugAssigned,
    BugsReceived,
}

impl SuccessAction {
    /// Decode the response body into the follow-up action
    pub fn into_action(self, body: Value) -> Result<Action, serde_json::Error> {
        let action = match self {
            SuccessAction::BugAdded => BugsAction::Added(serde_json::from_value::<Bug>(body)?),
            SuccessAction::BugResolved => BugsAction::Resolved(serde_json::from_value(body)?),
            SuccessAction::BugAssigned => BugsAction::Assigned(serde_json::from_value(body)?),
            SuccessAction::BugsReceived => BugsAction::Received {
                bugs: serde_json::from_value(body)?,
                received_at: chrono::Utc::now(),
            },
        };
        Ok(Action::Bugs(action))
    }
}

/// Action built from a failed request's error message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorAction {
    BugsRequestFailed,
}

impl ErrorAction {
    pub fn into_action(self, message: String) -> Action {
        match self {
            ErrorAction::BugsRequestFailed => Action::Bugs(BugsAction::RequestFailed(message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::BugId;
    use serde_json::json;

    #[test]
    fn test_api_call_builder() {
        let call = ApiCall::get("/bugs")
            .on_start(StartAction::BugsRequested)
            .on_success(SuccessAction::BugsReceived)
            .on_error(ErrorAction::BugsRequestFailed);

        assert_eq!(call.method, HttpMethod::Get);
        assert_eq!(call.on_start, Some(StartAction::BugsRequested));
        assert_eq!(call.on_success, Some(SuccessAction::BugsReceived));
        assert_eq!(call.on_error, Some(ErrorAction::BugsRequestFailed));

        let request = call.request();
        assert_eq!(request.url, "/bugs");
        assert!(request.data.is_none());
    }

    #[test]
    fn test_success_action_decodes_bug() {
        let action = SuccessAction::BugResolved
            .into_action(json!({ "id": 1, "resolved": true }))
            .unwrap();

        match action {
            Action::Bugs(BugsAction::Resolved(bug)) => {
                assert_eq!(bug.id, Some(BugId::Number(1)));
                assert!(bug.resolved);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_success_action_decodes_list() {
        let action = SuccessAction::BugsReceived
            .into_action(json!([{ "id": 1 }, { "id": 2 }]))
            .unwrap();

        match action {
            Action::Bugs(BugsAction::Received { bugs, .. }) => assert_eq!(bugs.len(), 2),
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_success_action_rejects_wrong_shape() {
        assert!(SuccessAction::BugsReceived.into_action(json!({ "id": 1 })).is_err());
        assert!(SuccessAction::BugAdded.into_action(Value::Null).is_err());
    }

    #[test]
    fn test_error_action_carries_message() {
        let action = ErrorAction::BugsRequestFailed.into_action("boom".to_string());
        assert_eq!(
            action,
            Action::Bugs(BugsAction::RequestFailed("boom".to_string()))
        );
    }
}
