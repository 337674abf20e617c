//! Actions module
//!
//! Every state change starts as an `Action`. Actions come in two families:
//! - Domain actions (`Bugs`) describing what happened to an entity slice
//! - API actions (`Api`) describing a network call and its outcome
//!
//! API calls are declared as data ([`ApiCall`]) and executed by the API
//! middleware; their follow-up actions are typed continuations rather than
//! action-type names.

pub mod api;
pub mod bugs;

pub use api::{ApiAction, ApiCall, ErrorAction, StartAction, SuccessAction};
pub use bugs::{BugsAction, add_bug, assign_bug_to_user, fetch_bugs, load_bugs, resolve_bug};

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Network call lifecycle (handled by the API middleware)
    Api(ApiAction),
    /// Bugs slice actions
    Bugs(BugsAction),
    /// No-op action
    None,
}

impl Action {
    /// Stable name of the action, for logs and diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Action::Api(ApiAction::CallBegan(_)) => "api/callBegan",
            Action::Api(ApiAction::CallSuccess(_)) => "api/callSuccess",
            Action::Api(ApiAction::CallFailed(_)) => "api/callFailed",
            Action::Bugs(BugsAction::Load) => "bugs/load",
            Action::Bugs(BugsAction::Requested) => "bugs/bugsRequested",
            Action::Bugs(BugsAction::Received { .. }) => "bugs/bugsReceived",
            Action::Bugs(BugsAction::RequestFailed(_)) => "bugs/bugsRequestFailed",
            Action::Bugs(BugsAction::Added(_)) => "bugs/bugAdded",
            Action::Bugs(BugsAction::Resolved(_)) => "bugs/bugResolved",
            Action::Bugs(BugsAction::Assigned(_)) => "bugs/bugAssigned",
            Action::None => "none",
        }
    }
}

impl From<ApiAction> for Action {
    fn from(action: ApiAction) -> Self {
        Action::Api(action)
    }
}

impl From<BugsAction> for Action {
    fn from(action: BugsAction) -> Self {
        Action::Bugs(action)
    }
}
