//! Reducers
//!
//! Pure functions producing the next state from the current state and an
//! action. `app_reducer::reduce` is the root reducer handed to the store.

pub mod app_reducer;
pub mod bugs_reducer;
