//! Public read API.
//!
//! Plain GET requests with no retry and no caching. The backend decides
//! ordering; nothing is re-sorted here.

use anvaya_core::{Activity, ActivityStatistics, Photo, Wing, WingWithRelations};
use tracing::instrument;

use crate::client::{AnvayaClient, API_PREFIX};
use crate::error::ApiError;

/// Default page size for wing photos.
pub const DEFAULT_PHOTO_LIMIT: u32 = 100;

/// Default page size for the all-activities listing.
pub const DEFAULT_ACTIVITY_LIMIT: u32 = 1000;

/// Paging for a wing's photos. Values are passed through unvalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoQuery {
    /// Maximum number of photos.
    pub limit: u32,
    /// Number of photos to skip.
    pub offset: u32,
}

impl Default for PhotoQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PHOTO_LIMIT,
            offset: 0,
        }
    }
}

impl PhotoQuery {
    fn params(self) -> [(&'static str, String); 2] {
        [("limit", self.limit.to_string()), ("offset", self.offset.to_string())]
    }
}

impl AnvayaClient {
    /// Lists all wings.
    #[instrument(skip(self))]
    pub async fn get_wings(&self) -> Result<Vec<Wing>, ApiError> {
        self.http.get(&[API_PREFIX, "wings"], &[]).await
    }

    /// Fetches one wing with its activities and photos. 404 if the slug is unknown.
    #[instrument(skip(self))]
    pub async fn get_wing(&self, slug: &str) -> Result<WingWithRelations, ApiError> {
        self.http.get(&[API_PREFIX, "wings", slug], &[]).await
    }

    /// Lists a wing's photos.
    #[instrument(skip(self))]
    pub async fn get_wing_photos(&self, slug: &str, query: PhotoQuery) -> Result<Vec<Photo>, ApiError> {
        self.http
            .get(&[API_PREFIX, "wings", slug, "photos"], &query.params())
            .await
    }

    /// Lists a wing's activities, newest first.
    #[instrument(skip(self))]
    pub async fn get_wing_activities(&self, slug: &str) -> Result<Vec<Activity>, ApiError> {
        self.http
            .get(&[API_PREFIX, "wings", slug, "activities"], &[])
            .await
    }

    /// Fetches one activity. 404 if the id is unknown.
    #[instrument(skip(self))]
    pub async fn get_activity(&self, id: i64) -> Result<Activity, ApiError> {
        let id = id.to_string();
        self.http.get(&[API_PREFIX, "activities", &id], &[]).await
    }

    /// Lists activities across all wings; `limit` defaults to 1000.
    #[instrument(skip(self))]
    pub async fn get_all_activities(&self, limit: Option<u32>) -> Result<Vec<Activity>, ApiError> {
        let limit = limit.unwrap_or(DEFAULT_ACTIVITY_LIMIT);
        self.http
            .get(&[API_PREFIX, "activities"], &[("limit", limit.to_string())])
            .await
    }

    /// Fetches per-wing activity counts.
    ///
    /// Without a year the counts are all-time and no `year` parameter is sent.
    #[instrument(skip(self))]
    pub async fn get_activity_statistics(&self, year: Option<i32>) -> Result<ActivityStatistics, ApiError> {
        let query: Vec<(&str, String)> = year.map(|y| ("year", y.to_string())).into_iter().collect();
        self.http
            .get(&[API_PREFIX, "statistics", "activities"], &query)
            .await
    }
}
