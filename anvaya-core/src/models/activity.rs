//! Activity types.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A dated event record belonging to exactly one wing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Numeric identifier.
    pub id: i64,
    /// Owning wing.
    pub wing_id: i64,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Day the activity took place.
    pub activity_date: NaiveDate,
    /// Faculty coordinator, if any.
    #[serde(default)]
    pub faculty_coordinator: Option<String>,
    /// URL of the attached PDF report, if any.
    #[serde(default)]
    pub report_url: Option<String>,
    /// Creation timestamp as sent by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last-update timestamp as sent by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Activity {
    /// Returns true if a report file is attached.
    pub fn has_report(&self) -> bool {
        self.report_url.as_deref().is_some_and(|u| !u.is_empty())
    }

    /// Returns the calendar year of the activity.
    pub fn year(&self) -> i32 {
        self.activity_date.year()
    }
}
