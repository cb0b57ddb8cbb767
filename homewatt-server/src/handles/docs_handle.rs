use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use super::*;

#[derive(OpenApi)]
#[openapi(
    info(title = "HomeWatt API", description = "House import and electricity consumption"),
    paths(
        import_house,
        get_house_consumption,
        create_house_consumption,
        get_hourly_consumption,
        get_monthly_consumption,
        ingest_consumption_batch,
        get_device_consumption,
    ),
    tags(
        (name = "house", description = "House import and legacy house-level history"),
        (name = "consumption", description = "Device consumption ingest and aggregation")
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new().route("/api/docs/openapi.json", get(get_openapi))
}

async fn get_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();

        for path in [
            "/api/houses",
            "/api/houses/{house_id}/consumption",
            "/api/houses/{house_id}/consumption/hourly",
            "/api/houses/{house_id}/consumption/total",
            "/api/houses/{house_id}/consumption/batch",
            "/api/houses/{house_id}/devices/{device_id}/consumption",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
