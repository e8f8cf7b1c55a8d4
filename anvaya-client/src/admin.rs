//! Admin write API.
//!
//! These operations rely on the transport to attach the session token. None
//! of them check authentication up front; the server decides.

use anvaya_core::{Activity, LoginRequest, Photo, TokenResponse, ValidationError};
use tracing::{info, instrument};

use crate::client::{AnvayaClient, API_PREFIX};
use crate::error::ClientError;
use crate::upload::{photos_form, ActivityUpdate, NewActivity, UploadFile};

const ADMIN: &str = "admin";

impl AnvayaClient {
    /// Logs in and stores the returned token in the session.
    ///
    /// # Errors
    ///
    /// Wrong credentials surface as a 401 [`ClientError::Api`]. A token that
    /// cannot be stored surfaces as [`ClientError::Storage`].
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ClientError> {
        let request = LoginRequest::new(username, password);
        let response: TokenResponse = self
            .http
            .post_json(&[API_PREFIX, ADMIN, "login"], &request)
            .await?;

        self.session().store_token(&response.access_token).await?;
        info!("Logged in");
        Ok(response)
    }

    /// Uploads photos to a wing.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NoFiles`] without sending anything if
    /// `files` is empty.
    #[instrument(skip(self, files), fields(count = files.len()))]
    pub async fn upload_photos(&self, wing_id: i64, files: Vec<UploadFile>) -> Result<Vec<Photo>, ClientError> {
        if files.is_empty() {
            return Err(ValidationError::NoFiles.into());
        }

        let form = photos_form(wing_id, files)?;
        let photos: Vec<Photo> = self
            .http
            .post_multipart(&[API_PREFIX, ADMIN, "photos"], form)
            .await?;
        info!(uploaded = photos.len(), "Photos uploaded");
        Ok(photos)
    }

    /// Deletes a photo.
    #[instrument(skip(self))]
    pub async fn delete_photo(&self, id: i64) -> Result<(), ClientError> {
        let id = id.to_string();
        self.http.delete(&[API_PREFIX, ADMIN, "photos", &id]).await?;
        Ok(())
    }

    /// Creates an activity.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] without sending anything if
    /// the title or description is blank.
    #[instrument(skip(self, activity), fields(wing_id = activity.wing_id))]
    pub async fn create_activity(&self, activity: NewActivity) -> Result<Activity, ClientError> {
        activity.validate()?;

        let form = activity.into_form()?;
        let created: Activity = self
            .http
            .post_multipart(&[API_PREFIX, ADMIN, "activities"], form)
            .await?;
        info!(id = created.id, "Activity created");
        Ok(created)
    }

    /// Updates the fields present in `update`.
    #[instrument(skip(self, update), fields(fields = ?update.field_names()))]
    pub async fn update_activity(&self, id: i64, update: ActivityUpdate) -> Result<Activity, ClientError> {
        let path_id = id.to_string();
        let form = update.into_form()?;
        let updated = self
            .http
            .put_multipart(&[API_PREFIX, ADMIN, "activities", &path_id], form)
            .await?;
        Ok(updated)
    }

    /// Deletes an activity.
    #[instrument(skip(self))]
    pub async fn delete_activity(&self, id: i64) -> Result<(), ClientError> {
        let id = id.to_string();
        self.http.delete(&[API_PREFIX, ADMIN, "activities", &id]).await?;
        Ok(())
    }
}
