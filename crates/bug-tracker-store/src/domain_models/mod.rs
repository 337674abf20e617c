//! Domain models
//!
//! Records exchanged with the API and held in state.

mod bug;

pub use bug::{Bug, BugId, NewBug, UserId};
