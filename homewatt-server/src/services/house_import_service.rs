use std::sync::Arc;

use homewatt_api::models::{
    DeviceSummary, ImportDeviceRequest, ImportHouseRequest, ImportHouseResponse, RoomSummary,
    SubRoomSummary,
};
use sqlx::{Sqlite, Transaction};
use time::OffsetDateTime;

use crate::configs::Storage;
use crate::errors::{ApiError, HouseError};
use crate::models::{Device, House, HouseConsumption, Room, Schedule, SubRoom};
use crate::repositories::{
    DeviceRepository, HouseConsumptionRepository, HouseRepository, RoomRepository,
    ScheduleRepository, SubRoomRepository,
};
use crate::services::validate_entry;

/// Where an imported device is placed.
#[derive(Clone, Copy)]
struct Placement {
    house_id: i32,
    room_id: Option<i32>,
    sub_room_id: Option<i32>,
}

/// Persists complete house documents.
pub struct HouseImportService {
    house_repository: HouseRepository,
    room_repository: RoomRepository,
    sub_room_repository: SubRoomRepository,
    device_repository: DeviceRepository,
    schedule_repository: ScheduleRepository,
    house_consumption_repository: HouseConsumptionRepository,
}

impl HouseImportService {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self {
            house_repository: HouseRepository::new(storage.clone()),
            room_repository: RoomRepository::new(storage.clone()),
            sub_room_repository: SubRoomRepository::new(storage.clone()),
            device_repository: DeviceRepository::new(storage.clone()),
            schedule_repository: ScheduleRepository::new(storage.clone()),
            house_consumption_repository: HouseConsumptionRepository::new(storage),
        }
    }

    pub async fn import(&self, request: &ImportHouseRequest) -> Result<ImportHouseResponse, ApiError> {
        validate_request(request)?;

        let now = OffsetDateTime::now_utc();
        let mut transaction = self.house_repository.get_pool().begin().await?;

        let house_id = self
            .house_repository
            .create(
                &House {
                    id: 0,
                    name: request.name.clone(),
                    address: request.address.clone(),
                    owner_id: request.owner_id,
                },
                &mut transaction,
            )
            .await?;

        let house_level = Placement { house_id, room_id: None, sub_room_id: None };
        let devices = self
            .create_devices(&request.devices, house_level, &mut transaction)
            .await?;

        let mut rooms = Vec::with_capacity(request.rooms.len());
        for room in &request.rooms {
            let room_id = self
                .room_repository
                .create(
                    &Room {
                        id: 0,
                        house_id,
                        name: room.name.clone(),
                        icon: room.icon.clone(),
                    },
                    &mut transaction,
                )
                .await?;

            let in_room = Placement { house_id, room_id: Some(room_id), sub_room_id: None };
            let room_devices = self.create_devices(&room.devices, in_room, &mut transaction).await?;

            let mut sub_rooms = Vec::with_capacity(room.sub_rooms.len());
            for sub_room in &room.sub_rooms {
                let sub_room_id = self
                    .sub_room_repository
                    .create(
                        &SubRoom {
                            id: 0,
                            room_id,
                            name: sub_room.name.clone(),
                        },
                        &mut transaction,
                    )
                    .await?;

                let in_sub_room = Placement { sub_room_id: Some(sub_room_id), ..in_room };
                let sub_room_devices = self
                    .create_devices(&sub_room.devices, in_sub_room, &mut transaction)
                    .await?;

                sub_rooms.push(SubRoomSummary {
                    id: sub_room_id,
                    name: sub_room.name.clone(),
                    devices: sub_room_devices,
                });
            }

            rooms.push(RoomSummary {
                id: room_id,
                name: room.name.clone(),
                devices: room_devices,
                sub_rooms,
            });
        }

        let known_devices: Vec<&DeviceSummary> = devices
            .iter()
            .chain(rooms.iter().flat_map(|room| {
                room.devices
                    .iter()
                    .chain(room.sub_rooms.iter().flat_map(|sub_room| sub_room.devices.iter()))
            }))
            .collect();

        for schedule in &request.schedules {
            let mut matches = known_devices.iter().filter(|device| device.name == schedule.device);
            let device_id = match (matches.next(), matches.next()) {
                (Some(device), None) => device.id,
                (None, _) => {
                    return Err(HouseError::InvalidRequest(format!(
                        "schedule '{}' references unknown device '{}'",
                        schedule.name, schedule.device
                    ))
                    .into());
                }
                (Some(_), Some(_)) => {
                    return Err(HouseError::InvalidRequest(format!(
                        "schedule '{}' references ambiguous device '{}'",
                        schedule.name, schedule.device
                    ))
                    .into());
                }
            };

            let days = serde_json::to_value(&schedule.days).map_err(anyhow::Error::from)?;

            self.schedule_repository
                .create(
                    &Schedule {
                        id: 0,
                        house_id,
                        device_id,
                        name: schedule.name.clone(),
                        on_time: schedule.on_time.clone(),
                        off_time: schedule.off_time.clone(),
                        days,
                        created_by: request.owner_id,
                    },
                    &mut transaction,
                )
                .await?;
        }

        for entry in &request.consumption {
            self.house_consumption_repository
                .create(
                    &HouseConsumption {
                        id: 0,
                        house_id,
                        device_id: entry.device,
                        time: entry.timestamp.unwrap_or(now),
                        voltage: entry.voltage,
                        current: entry.current,
                        power: entry.power,
                        energy: entry.energy,
                    },
                    &mut transaction,
                )
                .await?;
        }

        transaction.commit().await?;

        tracing::info!(house_id, rooms = rooms.len(), "imported house '{}'", request.name);

        Ok(ImportHouseResponse {
            id: house_id,
            name: request.name.clone(),
            rooms,
            devices,
            schedules: request.schedules.len(),
        })
    }

    async fn create_devices(
        &self,
        devices: &[ImportDeviceRequest],
        placement: Placement,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<Vec<DeviceSummary>, ApiError> {
        let mut created = Vec::with_capacity(devices.len());

        for device in devices {
            let id = self
                .device_repository
                .create(
                    &Device {
                        id: 0,
                        house_id: placement.house_id,
                        room_id: placement.room_id,
                        sub_room_id: placement.sub_room_id,
                        name: device.name.clone(),
                        icon: device.icon.clone(),
                        status: device.status,
                        is_room_device: placement.room_id.is_some(),
                    },
                    transaction,
                )
                .await?;

            created.push(DeviceSummary { id, name: device.name.clone() });
        }

        Ok(created)
    }
}

fn validate_request(request: &ImportHouseRequest) -> Result<(), HouseError> {
    let blank = |value: &str| value.trim().is_empty();

    if blank(&request.name) || blank(&request.address) {
        return Err(HouseError::InvalidRequest("house name and address are required".into()));
    }

    let device_names = request
        .devices
        .iter()
        .chain(request.rooms.iter().flat_map(|room| {
            room.devices
                .iter()
                .chain(room.sub_rooms.iter().flat_map(|sub_room| sub_room.devices.iter()))
        }))
        .map(|device| device.name.as_str());

    let place_names = request.rooms.iter().flat_map(|room| {
        std::iter::once(room.name.as_str())
            .chain(room.sub_rooms.iter().map(|sub_room| sub_room.name.as_str()))
    });

    if device_names.chain(place_names).any(blank) {
        return Err(HouseError::InvalidRequest("room and device names are required".into()));
    }

    if let Some(entry) = request.consumption.iter().find(|entry| validate_entry(entry).is_err()) {
        return Err(HouseError::InvalidRequest(format!(
            "invalid consumption record for device {}",
            entry.device
        )));
    }

    Ok(())
}
