//! Bugs slice actions and action creators

use super::{Action, ApiCall, ErrorAction, StartAction, SuccessAction};
use crate::domain_models::{Bug, BugId, NewBug, UserId};
use chrono::{DateTime, Utc};
use serde_json::json;

/// REST collection all bug calls go through
pub const BUGS_URL: &str = "/bugs";

/// Actions for the bugs slice
#[derive(Debug, Clone, PartialEq)]
pub enum BugsAction {
    /// Request to load the bug list (handled by middleware, honours the cache)
    Load,
    /// A fetch-all request went out
    Requested,
    /// The server returned the full list
    Received {
        bugs: Vec<Bug>,
        received_at: DateTime<Utc>,
    },
    /// The fetch-all request failed (error message)
    RequestFailed(String),
    /// The server persisted a new bug
    Added(Bug),
    /// The server confirmed a bug as resolved
    Resolved(Bug),
    /// The server confirmed a bug assignment
    Assigned(Bug),
}

/// Load all bugs, unless the cached list is still fresh
pub fn load_bugs() -> Action {
    Action::Bugs(BugsAction::Load)
}

/// Fetch-all call issued by the bugs middleware when the cache is stale
pub fn fetch_bugs() -> ApiCall {
    ApiCall::get(BUGS_URL)
        .on_start(StartAction::BugsRequested)
        .on_success(SuccessAction::BugsReceived)
        .on_error(ErrorAction::BugsRequestFailed)
}

/// Create a bug; it appears in the list only once the server saved it
pub fn add_bug(bug: NewBug) -> Action {
    let mut body = json!({ "description": bug.description });
    if let Some(user_id) = bug.user_id {
        body["userId"] = json!(user_id);
    }

    ApiCall::post(BUGS_URL, body)
        .on_success(SuccessAction::BugAdded)
        .into()
}

/// Mark a bug as resolved once the server confirms it
pub fn resolve_bug(id: impl Into<BugId>) -> Action {
    ApiCall::patch(bug_url(&id.into()), json!({ "resolved": true }))
        .on_success(SuccessAction::BugResolved)
        .into()
}

/// Assign a bug to a user once the server confirms it
pub fn assign_bug_to_user(bug_id: impl Into<BugId>, user_id: UserId) -> Action {
    ApiCall::patch(bug_url(&bug_id.into()), json!({ "userId": user_id }))
        .on_success(SuccessAction::BugAssigned)
        .into()
}

fn bug_url(id: &BugId) -> String {
    format!("{}/{}", BUGS_URL, id)
}
