use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use homewatt_api::models::*;

use crate::errors::ApiError;
use crate::services::ConsumptionService;

#[derive(Clone)]
pub struct ConsumptionState {
    pub consumption_service: Arc<ConsumptionService>,
}

pub fn consumption_router(consumption_state: ConsumptionState) -> Router {
    Router::new()
        .route(
            "/api/houses/:house_id/consumption/hourly",
            get(get_hourly_consumption),
        )
        .route(
            "/api/houses/:house_id/consumption/total",
            get(get_monthly_consumption),
        )
        .route(
            "/api/houses/:house_id/consumption/batch",
            post(ingest_consumption_batch),
        )
        .route(
            "/api/houses/:house_id/devices/:device_id/consumption",
            get(get_device_consumption),
        )
        .with_state(consumption_state)
}

#[utoipa::path(
    get,
    path = "/api/houses/{house_id}/consumption/hourly",
    tag = "consumption",
    params(
        ("house_id" = i32, Path, description = "House ID")
    ),
    responses(
        (status = 200, description = "Energy per hour over the last 24 hours, oldest first", body = Vec<f64>),
        (status = 404, description = "House not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_hourly_consumption(
    State(state): State<ConsumptionState>,
    Path(house_id): Path<i32>,
) -> Result<Json<Vec<f64>>, ApiError> {
    let histogram = state.consumption_service.hourly(house_id).await?;

    Ok(Json(histogram.to_vec()))
}

#[utoipa::path(
    get,
    path = "/api/houses/{house_id}/consumption/total",
    tag = "consumption",
    params(
        ("house_id" = i32, Path, description = "House ID")
    ),
    responses(
        (status = 200, description = "Energy used this month", body = MonthlyConsumptionResponse),
        (status = 404, description = "House not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_monthly_consumption(
    State(state): State<ConsumptionState>,
    Path(house_id): Path<i32>,
) -> Result<Json<MonthlyConsumptionResponse>, ApiError> {
    let total_energy = state.consumption_service.monthly_total(house_id).await?;

    Ok(Json(MonthlyConsumptionResponse { total_energy }))
}

#[utoipa::path(
    post,
    path = "/api/houses/{house_id}/consumption/batch",
    tag = "consumption",
    params(
        ("house_id" = i32, Path, description = "House ID")
    ),
    request_body = BatchConsumptionRequest,
    responses(
        (status = 201, description = "All records appended", body = BatchConsumptionResponse),
        (status = 400, description = "Invalid consumption record"),
        (status = 404, description = "House or device not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn ingest_consumption_batch(
    State(state): State<ConsumptionState>,
    Path(house_id): Path<i32>,
    Json(body): Json<BatchConsumptionRequest>,
) -> Result<(StatusCode, Json<BatchConsumptionResponse>), ApiError> {
    let inserted = state
        .consumption_service
        .ingest_batch(house_id, &body.data)
        .await?;

    Ok((StatusCode::CREATED, Json(BatchConsumptionResponse { inserted })))
}

#[utoipa::path(
    get,
    path = "/api/houses/{house_id}/devices/{device_id}/consumption",
    tag = "consumption",
    params(
        ("house_id" = i32, Path, description = "House ID"),
        ("device_id" = i32, Path, description = "Device ID")
    ),
    responses(
        (status = 200, description = "Device records, oldest first", body = Vec<ConsumptionRecordResponse>),
        (status = 404, description = "House or device not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_device_consumption(
    State(state): State<ConsumptionState>,
    Path((house_id, device_id)): Path<(i32, i32)>,
) -> Result<Json<Vec<ConsumptionRecordResponse>>, ApiError> {
    let records = state
        .consumption_service
        .device_records(house_id, device_id)
        .await?;

    let response = records
        .into_iter()
        .map(|record| ConsumptionRecordResponse {
            id: record.id,
            device_id: record.device_id,
            timestamp: record.time,
            voltage: record.voltage,
            current: record.current,
            power: record.power,
            energy: record.energy,
        })
        .collect();

    Ok(Json(response))
}
