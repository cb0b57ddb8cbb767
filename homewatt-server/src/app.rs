use std::sync::Arc;

use axum::Router;
use time::UtcOffset;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::configs::{SchemaManager, Settings, Storage};
use crate::handles::*;
use crate::repositories::{ConsumptionRecordRepository, HouseConsumptionRepository, HouseRepository};
use crate::services::{ConsumptionService, HouseImportService, HouseLoader, SqliteHouseLoader};

pub async fn create_app(settings: &Arc<Settings>) -> anyhow::Result<Router> {
    let storage = Arc::new(Storage::new(settings.database.clone(), SchemaManager::default()).await?);
    let offset = settings.metering.utc_offset()?;

    Ok(build_router(storage, offset))
}

/// Wires every route against `storage`; months start at midnight in `offset`.
pub fn build_router(storage: Arc<Storage>, offset: UtcOffset) -> Router {
    let loader: Arc<dyn HouseLoader> = Arc::new(SqliteHouseLoader::new(storage.clone()));

    let consumption_service = Arc::new(ConsumptionService::new(
        loader,
        ConsumptionRecordRepository::new(storage.clone()),
        offset,
    ));

    let houses = house_router(HouseState {
        house_import_service: Arc::new(HouseImportService::new(storage.clone())),
        house_repository: Arc::new(HouseRepository::new(storage.clone())),
        house_consumption_repository: Arc::new(HouseConsumptionRepository::new(storage.clone())),
    });

    let consumption = consumption_router(ConsumptionState { consumption_service });

    Router::new()
        .merge(houses)
        .merge(consumption)
        .merge(docs_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
