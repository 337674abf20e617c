//! Selectors
//!
//! Read-only projections over `AppState`. They borrow from the snapshot they
//! are given, so results stay valid for as long as the caller holds it.

use crate::domain_models::{Bug, BugId, UserId};
use crate::state::AppState;

/// All bugs in list order
pub fn get_bugs(state: &AppState) -> &[Bug] {
    &state.entities.bugs.list
}

/// Bugs not yet resolved, in list order
pub fn get_unresolved_bugs(state: &AppState) -> Vec<&Bug> {
    get_bugs(state).iter().filter(|bug| !bug.resolved).collect()
}

/// Bugs assigned to the given user, in list order
pub fn get_bugs_by_user(state: &AppState, user_id: UserId) -> Vec<&Bug> {
    get_bugs(state)
        .iter()
        .filter(|bug| bug.user_id == Some(user_id))
        .collect()
}

/// Look up a single bug by id
pub fn get_bug<'a>(state: &'a AppState, id: &BugId) -> Option<&'a Bug> {
    get_bugs(state).iter().find(|bug| bug.has_id(id))
}

/// Whether a fetch-all request is in flight
pub fn is_loading(state: &AppState) -> bool {
    state.entities.bugs.loading
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bug(id: u64, resolved: bool, user_id: Option<UserId>) -> Bug {
        Bug {
            id: Some(BugId::Number(id)),
            resolved,
            user_id,
            ..Bug::default()
        }
    }

    fn create_state() -> AppState {
        let mut state = AppState::default();
        state.entities.bugs.list = vec![
            bug(1, true, Some(1)),
            bug(2, false, None),
            bug(3, false, Some(1)),
        ];
        state
    }

    #[test]
    fn test_unresolved_bugs() {
        let state = create_state();

        let result = get_unresolved_bugs(&state);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id, Some(BugId::Number(2)));
        assert_eq!(result[1].id, Some(BugId::Number(3)));
    }

    #[test]
    fn test_unresolved_bugs_is_repeatable() {
        let state = create_state();
        let before = state.clone();

        let first: Vec<Bug> = get_unresolved_bugs(&state).into_iter().cloned().collect();
        let second: Vec<Bug> = get_unresolved_bugs(&state).into_iter().cloned().collect();

        assert_eq!(first, second);
        assert_eq!(state, before);
    }

    #[test]
    fn test_bugs_by_user() {
        let state = create_state();

        let result = get_bugs_by_user(&state, 1);

        assert_eq!(result.len(), 2);
        assert!(get_bugs_by_user(&state, 42).is_empty());
    }

    #[test]
    fn test_get_bug() {
        let state = create_state();
        assert!(get_bug(&state, &BugId::Number(3)).is_some());
        assert!(get_bug(&state, &BugId::Number(4)).is_none());
    }

    #[test]
    fn test_is_loading() {
        let mut state = AppState::default();
        assert!(!is_loading(&state));
        state.entities.bugs.loading = true;
        assert!(is_loading(&state));
    }
}
