use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::Id;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumptionEntry {
    /// Device the sample belongs to
    pub device: Id,
    /// Voltage in volts
    pub voltage: f64,
    /// Current in amperes
    pub current: f64,
    /// Power in watts
    pub power: f64,
    /// Energy in watt-hours
    pub energy: f64,
    /// Sample time, ingest time when omitted
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub timestamp: Option<OffsetDateTime>,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConsumptionRequest {
    /// Samples to append, applied all or nothing
    pub data: Vec<ConsumptionEntry>,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConsumptionResponse {
    /// Number of records appended
    pub inserted: usize,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumptionRecordResponse {
    /// Record identifier
    pub id: Id,
    /// Device identifier
    pub device_id: Id,
    /// Sample time
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub voltage: f64,
    pub current: f64,
    pub power: f64,
    /// Energy in watt-hours
    pub energy: f64,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyConsumptionResponse {
    /// Energy used since the start of the current month, in watt-hours
    pub total_energy: f64,
}
