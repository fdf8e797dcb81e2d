//! Quote domain model.

use serde::{Deserialize, Serialize};

/// A single attributed quotation with optional topical tags.
///
/// On the wire `tags` appears only when non-empty; an absent field
/// deserializes to an empty vec.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub text: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}
