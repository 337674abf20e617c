use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier of a user bugs can be assigned to
pub type UserId = u64;

/// Server-assigned bug identifier
///
/// The API hands out numeric ids, but string ids are accepted as well so a
/// backend switching to UUIDs does not break decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BugId {
    Number(u64),
    Text(String),
}

impl fmt::Display for BugId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BugId::Number(n) => write!(f, "{}", n),
            BugId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for BugId {
    fn from(id: u64) -> Self {
        BugId::Number(id)
    }
}

impl From<&str> for BugId {
    fn from(id: &str) -> Self {
        BugId::Text(id.to_string())
    }
}

impl From<String> for BugId {
    fn from(id: String) -> Self {
        BugId::Text(id)
    }
}

/// A bug record
///
/// `id` is `None` until the server has persisted the bug.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bug {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BugId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resolved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

impl Bug {
    /// Whether this bug carries the given server id
    pub fn has_id(&self, id: &BugId) -> bool {
        self.id.as_ref() == Some(id)
    }
}

/// Decode an explicit `null` the same way as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of a create request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBug {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

impl NewBug {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            user_id: None,
        }
    }
}
