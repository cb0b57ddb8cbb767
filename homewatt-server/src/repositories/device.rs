use std::sync::Arc;

use sqlx::{Error, Pool, Sqlite, Transaction};

use crate::configs::Storage;
use crate::models::Device;

#[derive(Clone)]
pub struct DeviceRepository {
    storage: Arc<Storage>,
}

impl DeviceRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub fn get_pool(&self) -> &Pool<Sqlite> {
        self.storage.get_pool()
    }
}

impl DeviceRepository {
    pub async fn create(
        &self,
        item: &Device,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<i32, Error> {
        let id = sqlx::query(
            r#"
            INSERT INTO devices (house_id, room_id, sub_room_id, name, icon, status, is_room_device)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(item.house_id)
        .bind(item.room_id)
        .bind(item.sub_room_id)
        .bind(&item.name)
        .bind(&item.icon)
        .bind(item.status)
        .bind(item.is_room_device)
        .execute(&mut **transaction)
        .await?
        .last_insert_rowid();

        Ok(id as i32)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Device>, Error> {
        let device: Option<Device> = sqlx::query_as("SELECT * FROM devices WHERE id = $1")
            .bind(id)
            .fetch_optional(self.storage.get_pool())
            .await?;

        Ok(device)
    }

    /// Every device of a house regardless of placement, in stored order.
    pub async fn find_by_house_id(
        &self,
        house_id: i32,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<Vec<Device>, Error> {
        let devices: Vec<Device> =
            sqlx::query_as("SELECT * FROM devices WHERE house_id = $1 ORDER BY id")
                .bind(house_id)
                .fetch_all(&mut **transaction)
                .await?;

        Ok(devices)
    }
}
