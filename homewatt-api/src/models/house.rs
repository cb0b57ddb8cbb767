use serde::{Deserialize, Serialize};

use super::{ConsumptionEntry, Id, ImportScheduleRequest};

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportDeviceRequest {
    /// Device name
    pub name: String,
    /// Icon key shown by clients
    pub icon: String,
    /// Initial on/off state
    #[serde(default)]
    pub status: bool,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSubRoomRequest {
    /// Sub-room name
    pub name: String,
    #[serde(default)]
    pub devices: Vec<ImportDeviceRequest>,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRoomRequest {
    /// Room name
    pub name: String,
    /// Icon key shown by clients
    pub icon: String,
    #[serde(default)]
    pub devices: Vec<ImportDeviceRequest>,
    #[serde(default)]
    pub sub_rooms: Vec<ImportSubRoomRequest>,
}

/// A complete house document, persisted in one go.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportHouseRequest {
    /// House name
    pub name: String,
    /// Postal address
    pub address: String,
    /// Owning user reference
    pub owner_id: Id,
    #[serde(default)]
    pub rooms: Vec<ImportRoomRequest>,
    /// Devices placed directly in the house
    #[serde(default)]
    pub devices: Vec<ImportDeviceRequest>,
    #[serde(default)]
    pub schedules: Vec<ImportScheduleRequest>,
    /// House-level consumption history
    #[serde(default)]
    pub consumption: Vec<ConsumptionEntry>,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceSummary {
    pub id: Id,
    pub name: String,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubRoomSummary {
    pub id: Id,
    pub name: String,
    pub devices: Vec<DeviceSummary>,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSummary {
    pub id: Id,
    pub name: String,
    pub devices: Vec<DeviceSummary>,
    pub sub_rooms: Vec<SubRoomSummary>,
}

/// Identifiers assigned to an imported house tree.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportHouseResponse {
    pub id: Id,
    pub name: String,
    pub rooms: Vec<RoomSummary>,
    pub devices: Vec<DeviceSummary>,
    /// Number of schedules stored
    pub schedules: usize,
}
