use super::BugsState;

/// Root state tree held by the store
///
/// Replaced wholesale on every dispatch; subscribers only ever see complete
/// snapshots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub entities: EntitiesState,
}

/// Server-backed entity slices
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntitiesState {
    pub bugs: BugsState,
}
