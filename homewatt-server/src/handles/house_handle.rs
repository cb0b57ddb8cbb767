use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use homewatt_api::models::*;
use time::OffsetDateTime;

use crate::errors::{ApiError, HouseError};
use crate::models::HouseConsumption;
use crate::repositories::{HouseConsumptionRepository, HouseRepository};
use crate::services::{HouseImportService, validate_entry};

#[derive(Clone)]
pub struct HouseState {
    pub house_import_service: Arc<HouseImportService>,
    pub house_repository: Arc<HouseRepository>,
    pub house_consumption_repository: Arc<HouseConsumptionRepository>,
}

pub fn house_router(house_state: HouseState) -> Router {
    Router::new()
        .route("/api/houses", post(import_house))
        .route(
            "/api/houses/:house_id/consumption",
            get(get_house_consumption).post(create_house_consumption),
        )
        .with_state(house_state)
}

#[utoipa::path(
    post,
    path = "/api/houses",
    tag = "house",
    request_body = ImportHouseRequest,
    responses(
        (status = 201, description = "House imported", body = ImportHouseResponse),
        (status = 400, description = "Invalid request parameters"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn import_house(
    State(state): State<HouseState>,
    Json(body): Json<ImportHouseRequest>,
) -> Result<(StatusCode, Json<ImportHouseResponse>), ApiError> {
    let response = state.house_import_service.import(&body).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/houses/{house_id}/consumption",
    tag = "house",
    params(
        ("house_id" = i32, Path, description = "House ID")
    ),
    responses(
        (status = 200, description = "House-level consumption history", body = Vec<ConsumptionRecordResponse>),
        (status = 404, description = "House not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_house_consumption(
    State(state): State<HouseState>,
    Path(house_id): Path<i32>,
) -> Result<Json<Vec<ConsumptionRecordResponse>>, ApiError> {
    state
        .house_repository
        .find_by_id(house_id)
        .await?
        .ok_or(HouseError::HouseNotFound(house_id))?;

    let records = state
        .house_consumption_repository
        .find_by_house_id(house_id)
        .await?;

    Ok(Json(records.into_iter().map(to_response).collect()))
}

#[utoipa::path(
    post,
    path = "/api/houses/{house_id}/consumption",
    tag = "house",
    params(
        ("house_id" = i32, Path, description = "House ID")
    ),
    request_body = ConsumptionEntry,
    responses(
        (status = 201, description = "Record appended", body = ConsumptionRecordResponse),
        (status = 400, description = "Invalid consumption record"),
        (status = 404, description = "House not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_house_consumption(
    State(state): State<HouseState>,
    Path(house_id): Path<i32>,
    Json(body): Json<ConsumptionEntry>,
) -> Result<(StatusCode, Json<ConsumptionRecordResponse>), ApiError> {
    validate_entry(&body)?;

    let mut transaction = state.house_repository.get_pool().begin().await?;

    state
        .house_repository
        .find_by_id_in_transaction(house_id, &mut transaction)
        .await?
        .ok_or(HouseError::HouseNotFound(house_id))?;

    let mut record = HouseConsumption {
        id: 0,
        house_id,
        device_id: body.device,
        time: body.timestamp.unwrap_or_else(OffsetDateTime::now_utc),
        voltage: body.voltage,
        current: body.current,
        power: body.power,
        energy: body.energy,
    };

    record.id = state
        .house_consumption_repository
        .create(&record, &mut transaction)
        .await?;

    transaction.commit().await?;

    Ok((StatusCode::CREATED, Json(to_response(record))))
}

fn to_response(record: HouseConsumption) -> ConsumptionRecordResponse {
    ConsumptionRecordResponse {
        id: record.id,
        device_id: record.device_id,
        timestamp: record.time,
        voltage: record.voltage,
        current: record.current,
        power: record.power,
        energy: record.energy,
    }
}

