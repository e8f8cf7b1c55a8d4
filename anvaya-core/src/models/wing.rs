//! Wing types.

use serde::{Deserialize, Serialize};

use super::{Activity, Photo};

// ============================================================================
// Wing
// ============================================================================

/// An organizational unit owning activities and photos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wing {
    /// Numeric identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Stable, URL-safe identifier.
    pub slug: String,
    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ============================================================================
// Wing With Relations
// ============================================================================

/// A wing fetched by slug, with its activities and photos embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WingWithRelations {
    /// The wing itself.
    #[serde(flatten)]
    pub wing: Wing,
    /// Activities of this wing.
    #[serde(default)]
    pub activities: Vec<Activity>,
    /// Photos of this wing.
    #[serde(default)]
    pub photos: Vec<Photo>,
}

impl WingWithRelations {
    /// Returns the wing's slug.
    pub fn slug(&self) -> &str {
        &self.wing.slug
    }

    /// Returns true if the wing has no activities and no photos.
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty() && self.photos.is_empty()
    }
}
