//! Activity statistics.
//!
//! The backend groups activities by wing and returns one row per wing,
//! sorted by count descending, together with every year that has data.

use serde::{Deserialize, Serialize};

/// One row of the statistics table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WingStatistic {
    /// Wing the row counts activities for.
    pub wing_id: i64,
    /// Wing display name.
    pub wing_name: String,
    /// Wing slug.
    pub wing_slug: String,
    /// Number of activities (restricted to the filtered year, if any).
    pub activity_count: u64,
}

/// Response of the activity statistics endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityStatistics {
    /// Per-wing rows, keyed by wing id with no duplicates.
    #[serde(default)]
    pub statistics: Vec<WingStatistic>,
    /// Years for which any activity exists, newest first.
    #[serde(default)]
    pub available_years: Vec<i32>,
    /// Echo of the year filter; `None` for all-time aggregates.
    #[serde(default)]
    pub filtered_year: Option<i32>,
}

impl ActivityStatistics {
    /// Total activities across all rows.
    pub fn total_activities(&self) -> u64 {
        self.statistics.iter().map(|s| s.activity_count).sum()
    }

    /// Looks up the row for a wing.
    pub fn for_wing(&self, wing_id: i64) -> Option<&WingStatistic> {
        self.statistics.iter().find(|s| s.wing_id == wing_id)
    }

    /// Returns true if these are all-time aggregates.
    pub fn is_all_time(&self) -> bool {
        self.filtered_year.is_none()
    }
}
