//! Shared helpers for the client integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anvaya_client::{AnvayaClient, ClientContext, MemoryTokenStore, Navigator, Session};
use serde_json::{json, Value};
use wiremock::MockServer;

/// Navigator that sits at a fixed path and records redirects.
pub struct RecordingNavigator {
    path: String,
    redirects: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Arc<Self> {
        Arc::new(Self {
            path: path.to_string(),
            redirects: Mutex::new(Vec::new()),
        })
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.path.clone()
    }

    fn redirect(&self, path: &str) {
        self.redirects.lock().unwrap().push(path.to_string());
    }
}

pub fn session_with_token(token: &str) -> Session {
    Session::new(Arc::new(MemoryTokenStore::with_token(token)))
}

pub fn client(server: &MockServer) -> AnvayaClient {
    client_with(server, Session::in_memory(), RecordingNavigator::at("/"))
}

pub fn client_with(server: &MockServer, session: Session, navigator: Arc<RecordingNavigator>) -> AnvayaClient {
    let ctx = ClientContext::builder()
        .base_url(server.uri())
        .timeout(Duration::from_secs(5))
        .session(session)
        .navigator(navigator)
        .build();
    AnvayaClient::new(ctx).unwrap()
}

pub fn activity_json(id: i64, wing_id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "wing_id": wing_id,
        "title": title,
        "description": "An evening of competitive programming",
        "activity_date": "2024-03-15",
        "faculty_coordinator": "Dr. Rao",
        "report_url": null,
        "created_at": "2024-03-16T10:00:00",
        "updated_at": null
    })
}

pub fn photo_json(id: i64, wing_id: i64) -> Value {
    json!({
        "id": id,
        "wing_id": wing_id,
        "url": format!("/uploads/photos/{id}.jpg"),
        "created_at": "2024-03-16T10:00:00"
    })
}
