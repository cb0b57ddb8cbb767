use axum::http::StatusCode;
use serde_json::{Value, json};
use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};

use crate::common::mock_app::MockApp;

mod common;

fn energies(body: &Value) -> Vec<f64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|value| value.as_f64().unwrap())
        .collect()
}

fn sample(device: i32, energy: f64) -> Value {
    json!({
        "device": device,
        "voltage": 230.0,
        "current": 0.5,
        "power": 115.0,
        "energy": energy
    })
}

#[tokio::test]
async fn test_empty_house_aggregates_to_zero() {
    let app = MockApp::new().await;
    let house = app.import_sample_house().await;

    let (status, body) = app.get(&format!("/api/houses/{}/consumption/hourly", house.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(energies(&body), vec![0.0; 24]);

    let (status, body) = app.get(&format!("/api/houses/{}/consumption/total", house.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "totalEnergy": 0.0 }));
}

#[tokio::test]
async fn test_ingest_without_timestamp_lands_in_current_hour() {
    let app = MockApp::new().await;
    let house = app.import_sample_house().await;
    let dryer = house.rooms[0].sub_rooms[0].devices[0].id;

    let (status, body) = app
        .post(
            &format!("/api/houses/{}/consumption/batch", house.id),
            json!({ "data": [sample(dryer, 1.25)] }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["inserted"], 1);

    let (_, body) = app.get(&format!("/api/houses/{}/consumption/hourly", house.id)).await;
    let histogram = energies(&body);
    assert_eq!(histogram.len(), 24);
    assert_eq!(histogram[23], 1.25);
    assert_eq!(histogram.iter().sum::<f64>(), 1.25);

    let (_, body) = app.get(&format!("/api/houses/{}/consumption/total", house.id)).await;
    assert_eq!(body["totalEnergy"], 1.25);
}

#[tokio::test]
async fn test_every_level_is_aggregated() {
    let app = MockApp::new().await;
    let house = app.import_sample_house().await;
    let meter = house.devices[0].id;
    let washer = house.rooms[0].devices[0].id;
    let dryer = house.rooms[0].sub_rooms[0].devices[0].id;

    let two_hours_ago = (OffsetDateTime::now_utc() - Duration::minutes(150))
        .format(&Rfc3339)
        .unwrap();
    let mut old = sample(washer, 4.0);
    old["timestamp"] = json!(two_hours_ago);

    let (status, _) = app
        .post(
            &format!("/api/houses/{}/consumption/batch", house.id),
            json!({ "data": [sample(meter, 1.0), old, sample(dryer, 2.0)] }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = app.get(&format!("/api/houses/{}/consumption/hourly", house.id)).await;
    let histogram = energies(&body);
    assert_eq!(histogram[23], 3.0);
    assert_eq!(histogram[21], 4.0);
}

#[tokio::test]
async fn test_unknown_device_rejects_whole_batch() {
    let app = MockApp::new().await;
    let house = app.import_sample_house().await;
    let meter = house.devices[0].id;

    let (status, body) = app
        .post(
            &format!("/api/houses/{}/consumption/batch", house.id),
            json!({ "data": [sample(meter, 1.0), sample(9999, 1.0)] }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], 404);
    assert!(body["error"]["message"].as_str().unwrap().contains("9999"));

    let (_, body) = app
        .get(&format!("/api/houses/{}/devices/{}/consumption", house.id, meter))
        .await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_device_from_other_house_is_unknown() {
    let app = MockApp::new().await;
    let house = app.import_sample_house().await;
    let other = app.import_sample_house().await;
    let foreign = other.devices[0].id;

    let (status, _) = app
        .post(
            &format!("/api/houses/{}/consumption/batch", house.id),
            json!({ "data": [sample(foreign, 1.0)] }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .get(&format!("/api/houses/{}/devices/{}/consumption", house.id, foreign))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_energy_rejected() {
    let app = MockApp::new().await;
    let house = app.import_sample_house().await;
    let meter = house.devices[0].id;

    let (status, body) = app
        .post(
            &format!("/api/houses/{}/consumption/batch", house.id),
            json!({ "data": [sample(meter, -1.0)] }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], 400);

    let (status, _) = app
        .post(
            &format!("/api/houses/{}/consumption/batch", house.id),
            json!({ "data": { "device": meter } }),
        )
        .await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_unknown_house_is_not_found() {
    let app = MockApp::new().await;

    for uri in ["/api/houses/999/consumption/hourly", "/api/houses/999/consumption/total"] {
        let (status, body) = app.get(uri).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "House 999 not found");
        assert!(body["error"].get("error_id").is_none());
    }

    let (status, _) = app
        .post("/api/houses/999/consumption/batch", json!({ "data": [] }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_device_records_in_time_order() {
    let app = MockApp::new().await;
    let house = app.import_sample_house().await;
    let washer = house.rooms[0].devices[0].id;

    let now = OffsetDateTime::now_utc();
    let mut later = sample(washer, 2.0);
    later["timestamp"] = json!((now - Duration::hours(1)).format(&Rfc3339).unwrap());
    let mut earlier = sample(washer, 1.0);
    earlier["timestamp"] = json!((now - Duration::hours(5)).format(&Rfc3339).unwrap());

    app.post(
        &format!("/api/houses/{}/consumption/batch", house.id),
        json!({ "data": [later, earlier] }),
    )
    .await;

    let (status, body) = app
        .get(&format!("/api/houses/{}/devices/{}/consumption", house.id, washer))
        .await;
    assert_eq!(status, StatusCode::OK);

    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["energy"], 1.0);
    assert_eq!(records[1]["energy"], 2.0);
    assert_eq!(records[0]["device_id"], washer);
}
