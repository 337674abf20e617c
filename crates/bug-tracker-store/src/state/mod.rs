//! Application State Module
//!
//! Contains all state types held by the store, organized by entity slice.

mod app;
mod bugs;

pub use app::{AppState, EntitiesState};
pub use bugs::BugsState;
