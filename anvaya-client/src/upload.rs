//! Multipart payloads for the admin API.
//!
//! [`NewActivity`] and [`ActivityUpdate`] carry activity fields; photos and
//! reports travel as [`UploadFile`]s.

use std::path::Path;

use anvaya_core::ValidationError;
use chrono::NaiveDate;
use reqwest::multipart::{Form, Part};
use tracing::debug;

use crate::error::ApiError;
use crate::normalize::{normalize_error, RawFailure};

/// Date format the backend expects for `activity_date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// Upload File
// ============================================================================

/// A file attached to a multipart request.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// Name sent as the part's filename.
    pub file_name: String,
    /// File contents.
    pub bytes: Vec<u8>,
    /// MIME type sent with the part.
    pub content_type: String,
}

impl UploadFile {
    /// Creates an upload from in-memory bytes, guessing the content type
    /// from the file extension.
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_for(&file_name);
        Self {
            file_name,
            bytes: bytes.into(),
            content_type,
        }
    }

    /// Overrides the content type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Reads a file from disk.
    ///
    /// # Errors
    ///
    /// Returns the IO error if the file cannot be read.
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map_or_else(|| "upload".to_string(), |n| n.to_string_lossy().into_owned());
        debug!(path = %path.display(), size = bytes.len(), "Read upload file");
        Ok(Self::new(file_name, bytes))
    }

    fn into_part(self) -> Result<Part, ApiError> {
        Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.content_type)
            .map_err(|e| normalize_error(RawFailure::other(e)))
    }
}

impl std::fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadFile")
            .field("file_name", &self.file_name)
            .field("size", &self.bytes.len())
            .field("content_type", &self.content_type)
            .finish()
    }
}

/// Guesses a MIME type from a file name's extension.
pub fn content_type_for(file_name: &str) -> String {
    mime_guess::from_path(file_name)
        .first_or_octet_stream()
        .to_string()
}

/// Builds the photo upload form: the wing id plus one `files` part per file.
pub(crate) fn photos_form(wing_id: i64, files: Vec<UploadFile>) -> Result<Form, ApiError> {
    let mut form = Form::new().text("wing_id", wing_id.to_string());
    for file in files {
        form = form.part("files", file.into_part()?);
    }
    Ok(form)
}

// ============================================================================
// Activity Payloads
// ============================================================================

/// Fields for creating an activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActivity {
    /// Owning wing.
    pub wing_id: i64,
    /// Title, required.
    pub title: String,
    /// Description, required.
    pub description: String,
    /// Date the activity took place.
    pub activity_date: NaiveDate,
    /// Faculty coordinator name.
    pub faculty_coordinator: Option<String>,
    /// Report document, usually a PDF.
    pub report_file: Option<UploadFile>,
}

impl NewActivity {
    /// Creates a payload without coordinator or report.
    pub fn new(
        wing_id: i64,
        title: impl Into<String>,
        description: impl Into<String>,
        activity_date: NaiveDate,
    ) -> Self {
        Self {
            wing_id,
            title: title.into(),
            description: description.into(),
            activity_date,
            faculty_coordinator: None,
            report_file: None,
        }
    }

    /// Sets the faculty coordinator.
    #[must_use]
    pub fn with_faculty_coordinator(mut self, name: impl Into<String>) -> Self {
        self.faculty_coordinator = Some(name.into());
        self
    }

    /// Attaches a report file.
    #[must_use]
    pub fn with_report(mut self, file: UploadFile) -> Self {
        self.report_file = Some(file);
        self
    }

    /// Checks required fields locally.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] if title or description is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::require_text("Title", &self.title)?;
        ValidationError::require_text("Description", &self.description)?;
        Ok(())
    }

    /// Builds the multipart form. Call [`validate`](Self::validate) first.
    pub(crate) fn into_form(self) -> Result<Form, ApiError> {
        let mut form = Form::new()
            .text("wing_id", self.wing_id.to_string())
            .text("title", self.title.trim().to_string())
            .text("description", self.description.trim().to_string())
            .text("activity_date", self.activity_date.format(DATE_FORMAT).to_string());

        if let Some(coordinator) = self.faculty_coordinator {
            let coordinator = coordinator.trim();
            if !coordinator.is_empty() {
                form = form.text("faculty_coordinator", coordinator.to_string());
            }
        }
        if let Some(report) = self.report_file {
            form = form.part("report_file", report.into_part()?);
        }
        Ok(form)
    }
}

/// Partial update of an activity. Only fields that are `Some` are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityUpdate {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New date.
    pub activity_date: Option<NaiveDate>,
    /// New faculty coordinator.
    pub faculty_coordinator: Option<String>,
    /// Replacement report file.
    pub report_file: Option<UploadFile>,
}

impl ActivityUpdate {
    /// Creates an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the date.
    #[must_use]
    pub fn activity_date(mut self, date: NaiveDate) -> Self {
        self.activity_date = Some(date);
        self
    }

    /// Sets the faculty coordinator.
    #[must_use]
    pub fn faculty_coordinator(mut self, name: impl Into<String>) -> Self {
        self.faculty_coordinator = Some(name.into());
        self
    }

    /// Sets the replacement report.
    #[must_use]
    pub fn report_file(mut self, file: UploadFile) -> Self {
        self.report_file = Some(file);
        self
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.activity_date.is_none()
            && self.faculty_coordinator.is_none()
            && self.report_file.is_none()
    }

    /// Names of the text fields this update sends, in form order.
    pub fn field_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.title.is_some() {
            names.push("title");
        }
        if self.description.is_some() {
            names.push("description");
        }
        if self.activity_date.is_some() {
            names.push("activity_date");
        }
        if self.faculty_coordinator.is_some() {
            names.push("faculty_coordinator");
        }
        if self.report_file.is_some() {
            names.push("report_file");
        }
        names
    }

    pub(crate) fn into_form(self) -> Result<Form, ApiError> {
        let mut form = Form::new();
        if let Some(title) = self.title {
            form = form.text("title", title.trim().to_string());
        }
        if let Some(description) = self.description {
            form = form.text("description", description.trim().to_string());
        }
        if let Some(date) = self.activity_date {
            form = form.text("activity_date", date.format(DATE_FORMAT).to_string());
        }
        if let Some(coordinator) = self.faculty_coordinator {
            form = form.text("faculty_coordinator", coordinator.trim().to_string());
        }
        if let Some(report) = self.report_file {
            form = form.part("report_file", report.into_part()?);
        }
        Ok(form)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for("team.JPG"), "image/jpeg");
        assert_eq!(content_type_for("a.jpeg"), "image/jpeg");
        assert_eq!(content_type_for("a.png"), "image/png");
        assert_eq!(content_type_for("a.webp"), "image/webp");
        assert_eq!(content_type_for("logo.svg"), "image/svg+xml");
        assert_eq!(content_type_for("report.pdf"), "application/pdf");
        assert_eq!(content_type_for("notes"), "application/octet-stream");
    }

    #[test]
    fn test_new_guesses_content_type() {
        assert_eq!(UploadFile::new("crowd.gif", vec![0]).content_type, "image/gif");
        assert_eq!(UploadFile::new("poster.SVG", vec![0]).content_type, "image/svg+xml");
        assert_eq!(UploadFile::new("blob", vec![0]).content_type, "application/octet-stream");
    }

    #[test]
    fn test_new_activity_validation() {
        assert!(NewActivity::new(1, "Hack Night", "Coding", date()).validate().is_ok());

        let err = NewActivity::new(1, "   ", "Coding", date()).validate().unwrap_err();
        assert_eq!(err, ValidationError::missing("Title"));

        let err = NewActivity::new(1, "Hack Night", "\n", date()).validate().unwrap_err();
        assert_eq!(err, ValidationError::missing("Description"));
    }

    #[test]
    fn test_update_field_names() {
        let update = ActivityUpdate::new().title("New").activity_date(date());
        assert_eq!(update.field_names(), vec!["title", "activity_date"]);
        assert!(!update.is_empty());
        assert!(ActivityUpdate::new().is_empty());
    }

    #[test]
    fn test_upload_debug_hides_bytes() {
        let file = UploadFile::new("a.png", vec![1u8; 2048]);
        let out = format!("{file:?}");
        assert!(out.contains("size: 2048"));
        assert!(out.contains("image/png"));
    }

    #[test]
    fn test_invalid_mime_is_normalized() {
        let file = UploadFile::new("a.png", vec![1]).with_content_type("not a mime\n");
        let err = photos_form(1, vec![file]).unwrap_err();
        assert_eq!(err.status(), 500);
        assert!(!err.is_network_error());
    }

    #[tokio::test]
    async fn test_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("poster.png");
        tokio::fs::write(&path, b"\x89PNG").await.unwrap();

        let file = UploadFile::from_path(&path).await.unwrap();
        assert_eq!(file.file_name, "poster.png");
        assert_eq!(file.content_type, "image/png");
        assert_eq!(file.bytes, b"\x89PNG");
    }
}
