//! Deserialization tests against payloads shaped like the backend's.

use chrono::NaiveDate;

use crate::{
    Activity, ActivityStatistics, ApiInfo, HealthStatus, LoginRequest, Photo, TokenResponse,
    Wing, WingWithRelations,
};

// ============================================================================
// Wing Tests
// ============================================================================

#[test]
fn test_wing_without_description() {
    let json = r#"{"id": 1, "name": "CodeZero", "slug": "codezero"}"#;
    let wing: Wing = serde_json::from_str(json).unwrap();

    assert_eq!(wing.id, 1);
    assert_eq!(wing.slug, "codezero");
    assert!(wing.description.is_none());

    // description is skipped when absent
    let out = serde_json::to_value(&wing).unwrap();
    assert!(out.get("description").is_none());
}

#[test]
fn test_wing_with_relations_flattened() {
    let json = r#"{
        "id": 2,
        "name": "Robotics",
        "slug": "robotics",
        "description": "Builds robots",
        "activities": [{
            "id": 10,
            "wing_id": 2,
            "title": "Line follower workshop",
            "description": "Intro session",
            "activity_date": "2024-03-15",
            "faculty_coordinator": null,
            "report_url": null
        }],
        "photos": [{"id": 5, "wing_id": 2, "url": "https://cdn.example/p.jpg"}]
    }"#;

    let wing: WingWithRelations = serde_json::from_str(json).unwrap();
    assert_eq!(wing.slug(), "robotics");
    assert_eq!(wing.wing.description.as_deref(), Some("Builds robots"));
    assert_eq!(wing.activities.len(), 1);
    assert_eq!(wing.photos.len(), 1);
    assert!(!wing.is_empty());
}

#[test]
fn test_wing_with_relations_missing_lists() {
    let json = r#"{"id": 3, "name": "Music", "slug": "music"}"#;
    let wing: WingWithRelations = serde_json::from_str(json).unwrap();
    assert!(wing.is_empty());
}

// ============================================================================
// Activity Tests
// ============================================================================

#[test]
fn test_activity_full() {
    let json = r#"{
        "id": 42,
        "wing_id": 1,
        "title": "Hackathon",
        "description": "24h build",
        "activity_date": "2023-11-02",
        "faculty_coordinator": "Dr. Rao",
        "report_url": "https://cdn.example/report.pdf",
        "created_at": "2023-11-03T10:00:00",
        "updated_at": "2023-11-04T08:30:00"
    }"#;

    let activity: Activity = serde_json::from_str(json).unwrap();
    assert_eq!(activity.activity_date, NaiveDate::from_ymd_opt(2023, 11, 2).unwrap());
    assert_eq!(activity.year(), 2023);
    assert!(activity.has_report());
    assert_eq!(activity.faculty_coordinator.as_deref(), Some("Dr. Rao"));
}

#[test]
fn test_activity_empty_report_url_is_not_a_report() {
    let json = r#"{
        "id": 1, "wing_id": 1, "title": "t", "description": "d",
        "activity_date": "2024-01-01", "report_url": ""
    }"#;
    let activity: Activity = serde_json::from_str(json).unwrap();
    assert!(!activity.has_report());
}

#[test]
fn test_activity_rejects_bad_date() {
    let json = r#"{
        "id": 1, "wing_id": 1, "title": "t", "description": "d",
        "activity_date": "15/03/2024"
    }"#;
    assert!(serde_json::from_str::<Activity>(json).is_err());
}

#[test]
fn test_photo_minimal() {
    let json = r#"{"id": 7, "wing_id": 2, "url": "https://cdn.example/7.webp"}"#;
    let photo: Photo = serde_json::from_str(json).unwrap();
    assert_eq!(photo.id, 7);
    assert!(photo.created_at.is_none());
}

// ============================================================================
// Statistics Tests
// ============================================================================

#[test]
fn test_statistics_all_time() {
    let json = r#"{
        "statistics": [
            {"wing_id": 1, "wing_name": "CodeZero", "wing_slug": "codezero", "activity_count": 7},
            {"wing_id": 2, "wing_name": "Robotics", "wing_slug": "robotics", "activity_count": 3}
        ],
        "available_years": [2024, 2023],
        "filtered_year": null
    }"#;

    let stats: ActivityStatistics = serde_json::from_str(json).unwrap();
    assert!(stats.is_all_time());
    assert_eq!(stats.total_activities(), 10);
    assert_eq!(stats.for_wing(2).map(|s| s.activity_count), Some(3));
    assert!(stats.for_wing(99).is_none());
    assert_eq!(stats.available_years, vec![2024, 2023]);
}

#[test]
fn test_statistics_filtered_year() {
    let json = r#"{"statistics": [], "available_years": [2024], "filtered_year": 2024}"#;
    let stats: ActivityStatistics = serde_json::from_str(json).unwrap();
    assert_eq!(stats.filtered_year, Some(2024));
    assert_eq!(stats.total_activities(), 0);
}

// ============================================================================
// Auth Tests
// ============================================================================

#[test]
fn test_token_response_default_type() {
    let token: TokenResponse = serde_json::from_str(r#"{"access_token": "abc"}"#).unwrap();
    assert_eq!(token.token_type, "bearer");
}

#[test]
fn test_secrets_redacted_in_debug() {
    let req = LoginRequest::new("admin", "hunter2");
    let token = TokenResponse {
        access_token: "secret-token".to_string(),
        token_type: "bearer".to_string(),
    };

    assert!(!format!("{req:?}").contains("hunter2"));
    assert!(!format!("{token:?}").contains("secret-token"));
}

#[test]
fn test_login_request_wire_shape() {
    let value = serde_json::to_value(LoginRequest::new("admin", "pw")).unwrap();
    assert_eq!(value, serde_json::json!({"username": "admin", "password": "pw"}));
}

#[test]
fn test_health_payloads() {
    let health: HealthStatus = serde_json::from_str(r#"{"status": "healthy"}"#).unwrap();
    assert!(health.is_healthy());

    let info: ApiInfo = serde_json::from_str(
        r#"{"message": "Anvaya Club API", "status": "running", "version": "1.0.0"}"#,
    )
    .unwrap();
    assert_eq!(info.version, "1.0.0");
}
