use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use homewatt_api::models::ImportHouseResponse;
use homewatt_server::app::build_router;
use homewatt_server::configs::Storage;
use homewatt_server::tests::setup_test_db;
use serde_json::{Value, json};
use time::UtcOffset;
use tower::ServiceExt;

pub struct MockApp {
    pub storage: Arc<Storage>,
    pub router: Router,
}

impl MockApp {
    pub async fn new() -> Self {
        let storage = setup_test_db().await;
        let router = build_router(storage.clone(), UtcOffset::UTC);

        Self { storage, router }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, body)
    }

    /// Imports a house with one device at every level: `Meter` in the house,
    /// `Washer` in the Laundry room and `Dryer` in its Closet sub-room.
    pub async fn import_sample_house(&self) -> ImportHouseResponse {
        let (status, body) = self
            .post(
                "/api/houses",
                json!({
                    "name": "Lake House",
                    "address": "2 Lake Road",
                    "owner_id": 7,
                    "devices": [{ "name": "Meter", "icon": "bolt" }],
                    "rooms": [{
                        "name": "Laundry",
                        "icon": "washer",
                        "devices": [{ "name": "Washer", "icon": "washer", "status": true }],
                        "sub_rooms": [{
                            "name": "Closet",
                            "devices": [{ "name": "Dryer", "icon": "dryer" }]
                        }]
                    }],
                    "schedules": [{
                        "name": "Night wash",
                        "device": "Washer",
                        "on_time": "23:00",
                        "off_time": "01:00",
                        "days": ["Sat", "Sun"]
                    }]
                }),
            )
            .await;

        assert_eq!(status, StatusCode::CREATED);

        serde_json::from_value(body).unwrap()
    }
}
