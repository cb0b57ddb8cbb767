use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ConsumptionError {
    #[error("Device with ID {0} not found")]
    DeviceNotFound(i32),

    #[error("Invalid consumption record for device {0}")]
    InvalidConsumptionRecord(i32),
}

impl ConsumptionError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ConsumptionError::DeviceNotFound(_) => StatusCode::NOT_FOUND,
            ConsumptionError::InvalidConsumptionRecord(_) => StatusCode::BAD_REQUEST,
        }
    }
}
