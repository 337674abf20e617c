//! Bugs slice state

use crate::domain_models::{Bug, BugId};
use chrono::{DateTime, Utc};

/// Bug list plus the bookkeeping needed for loading and caching
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BugsState {
    /// Bugs in insertion order; ids are unique once assigned
    pub list: Vec<Bug>,
    /// True while a fetch-all request is in flight
    pub loading: bool,
    /// When the list was last replaced from the server
    pub last_fetch: Option<DateTime<Utc>>,
}

impl BugsState {
    /// Position of the bug with the given id
    pub fn position(&self, id: &BugId) -> Option<usize> {
        self.list.iter().position(|bug| bug.has_id(id))
    }
}
