//! Allow-listed user payload forwarded to the data service.

use serde::Serialize;
use serde_json::{Map, Value};

/// Columns of the Users table that callers may write.
///
/// Service-managed columns (`objectId`, `created`, `updated`, `ownerId`) are
/// not writable and are dropped like any other unknown field.
pub const USER_FIELDS: [&str; 6] = [
    "email",
    "First Name",
    "Last Name",
    "ID",
    "password",
    "username",
];

/// Fields that must be present for a user to be created.
pub const REQUIRED_ON_CREATE: [&str; 2] = ["email", "username"];

/// A JSON object reduced to the writable user columns.
///
/// Values are carried as-is; the data service owns typing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct UserPayload(Map<String, Value>);

impl UserPayload {
    /// Keeps only the keys listed in [`USER_FIELDS`].
    pub fn filter(mut incoming: Map<String, Value>) -> Self {
        let mut kept = Map::new();
        for field in USER_FIELDS {
            if let Some(value) = incoming.remove(field) {
                kept.insert(field.to_string(), value);
            }
        }
        Self(kept)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Required creation fields absent from this payload.
    pub fn missing_for_create(&self) -> Vec<&'static str> {
        REQUIRED_ON_CREATE
            .into_iter()
            .filter(|field| !self.contains(field))
            .collect()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}
