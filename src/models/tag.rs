//! Tag model matching the dataset's tag objects.

use serde::{Deserialize, Serialize};

/// A label attached to a record. Names are not guaranteed unique across records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub id: i64,
    pub name: String,
}

impl Tag {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
