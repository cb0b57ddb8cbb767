use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum HouseError {
    #[error("House {0} not found")]
    HouseNotFound(i32),

    #[error("House {0} has an inconsistent device tree")]
    InvalidHouseStructure(i32),

    #[error("Invalid request parameters: {0}")]
    InvalidRequest(String),
}

impl HouseError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HouseError::HouseNotFound(_) => StatusCode::NOT_FOUND,
            HouseError::InvalidHouseStructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            HouseError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}
