//! Photo types.

use serde::{Deserialize, Serialize};

/// An image record belonging to exactly one wing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Numeric identifier.
    pub id: i64,
    /// Owning wing.
    pub wing_id: i64,
    /// Public URL of the image.
    pub url: String,
    /// Upload timestamp as sent by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}
