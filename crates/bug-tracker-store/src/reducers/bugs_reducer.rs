//! Bugs Reducer
//!
//! Handles state updates for the bugs slice using tagged BugsAction.
//!
//! Mutations are applied only once the server confirmed them, so a failed
//! create/resolve/assign leaves the slice untouched and needs no rollback.

use crate::actions::BugsAction;
use crate::domain_models::Bug;
use crate::state::BugsState;

/// Insert a bug, or replace the entry that already carries its id
fn upsert(list: &mut Vec<Bug>, bug: Bug) {
    let existing = bug
        .id
        .as_ref()
        .and_then(|id| list.iter().position(|b| b.has_id(id)));

    match existing {
        Some(idx) => list[idx] = bug,
        None => list.push(bug),
    }
}

/// Reduce bugs-related state based on actions
pub fn reduce(mut state: BugsState, action: &BugsAction) -> BugsState {
    match action {
        BugsAction::Load => {
            // Request action - the bugs middleware decides whether to fetch
        }

        BugsAction::Requested => {
            state.loading = true;
            log::debug!("Bug list requested");
        }

        BugsAction::Received { bugs, received_at } => {
            let mut list = Vec::with_capacity(bugs.len());
            for bug in bugs {
                upsert(&mut list, bug.clone());
            }
            if list.len() != bugs.len() {
                log::warn!(
                    "Server returned {} duplicate bug ids",
                    bugs.len() - list.len()
                );
            }
            state.list = list;
            state.loading = false;
            state.last_fetch = Some(*received_at);
            log::info!("Loaded {} bugs", state.list.len());
        }

        BugsAction::RequestFailed(error) => {
            state.loading = false;
            log::error!("Failed to load bugs: {}", error);
        }

        BugsAction::Added(bug) => {
            log::debug!("Bug added: {:?}", bug.id);
            upsert(&mut state.list, bug.clone());
        }

        BugsAction::Resolved(bug) => {
            let Some(id) = &bug.id else {
                log::warn!("Resolved bug without id, ignoring");
                return state;
            };
            match state.position(id) {
                Some(idx) => {
                    state.list[idx].resolved = true;
                    log::debug!("Bug {} resolved", id);
                }
                None => log::warn!("Resolved bug {} not found in state", id),
            }
        }

        BugsAction::Assigned(bug) => {
            let Some(id) = &bug.id else {
                log::warn!("Assigned bug without id, ignoring");
                return state;
            };
            match state.position(id) {
                Some(idx) => {
                    state.list[idx].user_id = bug.user_id;
                    log::debug!("Bug {} assigned to {:?}", id, bug.user_id);
                }
                None => log::warn!("Assigned bug {} not found in state", id),
            }
        }
    }

    state
}
