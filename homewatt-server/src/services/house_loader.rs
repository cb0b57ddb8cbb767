use std::sync::Arc;

use async_trait::async_trait;

use crate::configs::Storage;
use crate::consumption::DeviceTree;
use crate::errors::{ApiError, HouseError};
use crate::repositories::{
    ConsumptionRecordRepository, DeviceRepository, HouseRepository, RoomRepository,
    SubRoomRepository,
};

/// Source of house snapshots for the aggregation endpoints.
#[async_trait]
pub trait HouseLoader: Send + Sync {
    /// Loads a house with all of its rooms, sub-rooms, devices and records,
    /// or fails with `HouseNotFound`.
    async fn load(&self, house_id: i32) -> Result<DeviceTree, ApiError>;
}

pub struct SqliteHouseLoader {
    house_repository: HouseRepository,
    room_repository: RoomRepository,
    sub_room_repository: SubRoomRepository,
    device_repository: DeviceRepository,
    record_repository: ConsumptionRecordRepository,
}

impl SqliteHouseLoader {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self {
            house_repository: HouseRepository::new(storage.clone()),
            room_repository: RoomRepository::new(storage.clone()),
            sub_room_repository: SubRoomRepository::new(storage.clone()),
            device_repository: DeviceRepository::new(storage.clone()),
            record_repository: ConsumptionRecordRepository::new(storage),
        }
    }
}

#[async_trait]
impl HouseLoader for SqliteHouseLoader {
    async fn load(&self, house_id: i32) -> Result<DeviceTree, ApiError> {
        // One read transaction so the snapshot never mixes before and after a write
        let mut transaction = self.house_repository.get_pool().begin().await?;

        let house = self
            .house_repository
            .find_by_id_in_transaction(house_id, &mut transaction)
            .await?
            .ok_or(HouseError::HouseNotFound(house_id))?;

        let rooms = self.room_repository.find_by_house_id(house_id, &mut transaction).await?;
        let sub_rooms = self
            .sub_room_repository
            .find_by_house_id(house_id, &mut transaction)
            .await?;
        let devices = self.device_repository.find_by_house_id(house_id, &mut transaction).await?;
        let records = self.record_repository.find_by_house_id(house_id, &mut transaction).await?;

        transaction.commit().await?;

        let tree = DeviceTree::assemble(house_id, Some(house), rooms, sub_rooms, devices, records)?;

        tracing::debug!(house_id, devices = tree.device_count(), "loaded house snapshot");

        Ok(tree)
    }
}
