//! Integration tests for the public read API.

mod common;

use anvaya_client::PhotoQuery;
use common::{activity_json, client, photo_json};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_wings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/wings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "CodeZero", "slug": "codezero", "description": "Programming wing"},
            {"id": 2, "name": "Robotics", "slug": "robotics", "description": null}
        ])))
        .mount(&server)
        .await;

    let wings = client(&server).get_wings().await.unwrap();
    assert_eq!(wings.len(), 2);
    assert_eq!(wings[0].slug, "codezero");
    assert!(wings[1].description.is_none());
}

#[tokio::test]
async fn test_get_wing_with_relations() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/wings/codezero"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "name": "CodeZero",
            "slug": "codezero",
            "description": "Programming wing",
            "activities": [activity_json(10, 1, "Hack Night")],
            "photos": [photo_json(3, 1)]
        })))
        .mount(&server)
        .await;

    let wing = client(&server).get_wing("codezero").await.unwrap();
    assert_eq!(wing.slug(), "codezero");
    assert_eq!(wing.activities[0].title, "Hack Night");
    assert_eq!(wing.photos[0].id, 3);
}

#[tokio::test]
async fn test_wing_photos_default_paging() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/wings/codezero/photos"))
        .and(query_param("limit", "100"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([photo_json(1, 1)])))
        .expect(1)
        .mount(&server)
        .await;

    let photos = client(&server)
        .get_wing_photos("codezero", PhotoQuery::default())
        .await
        .unwrap();
    assert_eq!(photos.len(), 1);
}

#[tokio::test]
async fn test_wing_photos_custom_paging() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/wings/codezero/photos"))
        .and(query_param("limit", "5"))
        .and(query_param("offset", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let query = PhotoQuery { limit: 5, offset: 10 };
    client(&server).get_wing_photos("codezero", query).await.unwrap();
}

#[tokio::test]
async fn test_get_activity() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/activities/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(activity_json(42, 1, "Hack Night")))
        .mount(&server)
        .await;

    let activity = client(&server).get_activity(42).await.unwrap();
    assert_eq!(activity.id, 42);
    assert_eq!(activity.activity_date.to_string(), "2024-03-15");
}

#[tokio::test]
async fn test_all_activities_default_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/activities"))
        .and(query_param("limit", "1000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            activity_json(2, 1, "Later"),
            activity_json(1, 2, "Earlier")
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let activities = client(&server).get_all_activities(None).await.unwrap();
    assert_eq!(activities.len(), 2);
}

#[tokio::test]
async fn test_statistics_all_time_sends_no_year() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/statistics/activities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statistics": [
                {"wing_id": 1, "wing_name": "CodeZero", "wing_slug": "codezero", "activity_count": 7}
            ],
            "available_years": [2024, 2023],
            "filtered_year": null
        })))
        .mount(&server)
        .await;

    let stats = client(&server).get_activity_statistics(None).await.unwrap();
    assert!(stats.is_all_time());
    assert_eq!(stats.available_years, vec![2024, 2023]);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].url.query_pairs().all(|(k, _)| k != "year"));
}

#[tokio::test]
async fn test_statistics_for_year() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/statistics/activities"))
        .and(query_param("year", "2024"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statistics": [],
            "available_years": [2024],
            "filtered_year": 2024
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stats = client(&server).get_activity_statistics(Some(2024)).await.unwrap();
    assert_eq!(stats.filtered_year, Some(2024));
    assert_eq!(stats.total_activities(), 0);
}
