use super::{ConsumptionError, HouseError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("House error: {0}")]
    HouseError(#[from] HouseError),

    #[error("Consumption error: {0}")]
    ConsumptionError(#[from] ConsumptionError),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}
