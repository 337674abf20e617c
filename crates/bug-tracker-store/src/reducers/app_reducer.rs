use crate::actions::Action;
use crate::reducers::bugs_reducer;
use crate::state::AppState;

/// Root reducer - delegates each action family to its slice reducer
///
/// API lifecycle actions exist for middleware and observers; they never
/// change state.
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Bugs(bugs_action) => {
            state.entities.bugs = bugs_reducer::reduce(state.entities.bugs, bugs_action);
        }
        Action::Api(_) | Action::None => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{ApiAction, BugsAction};
    use crate::domain_models::{Bug, BugId};
    use serde_json::json;

    fn state_with_bugs() -> AppState {
        let mut state = AppState::default();
        state.entities.bugs.list = vec![Bug {
            id: Some(BugId::Number(1)),
            description: "a".to_string(),
            ..Bug::default()
        }];
        state
    }

    #[test]
    fn test_unknown_actions_are_identity() {
        let state = state_with_bugs();

        for action in [
            Action::None,
            Action::Api(ApiAction::CallSuccess(json!({ "id": 9 }))),
            Action::Api(ApiAction::CallFailed("boom".to_string())),
            Action::Bugs(BugsAction::Load),
        ] {
            assert_eq!(reduce(state.clone(), &action), state);
        }
    }

    #[test]
    fn test_bugs_actions_reach_bugs_slice() {
        let state = reduce(AppState::default(), &Action::Bugs(BugsAction::Requested));
        assert!(state.entities.bugs.loading);
    }
}
