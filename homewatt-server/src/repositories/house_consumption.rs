use std::sync::Arc;

use sqlx::{Error, Pool, Sqlite, Transaction};
use time::UtcOffset;

use crate::configs::Storage;
use crate::models::HouseConsumption;

#[derive(Clone)]
pub struct HouseConsumptionRepository {
    storage: Arc<Storage>,
}

impl HouseConsumptionRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub fn get_pool(&self) -> &Pool<Sqlite> {
        self.storage.get_pool()
    }
}

impl HouseConsumptionRepository {
    pub async fn create(
        &self,
        item: &HouseConsumption,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<i32, Error> {
        let id = sqlx::query(
            r#"
            INSERT INTO house_consumption_records (house_id, device_id, time, voltage, current, power, energy)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(item.house_id)
        .bind(item.device_id)
        .bind(item.time.to_offset(UtcOffset::UTC))
        .bind(item.voltage)
        .bind(item.current)
        .bind(item.power)
        .bind(item.energy)
        .execute(&mut **transaction)
        .await?
        .last_insert_rowid();

        Ok(id as i32)
    }

    pub async fn find_by_house_id(&self, house_id: i32) -> Result<Vec<HouseConsumption>, Error> {
        let records: Vec<HouseConsumption> = sqlx::query_as(
            "SELECT * FROM house_consumption_records WHERE house_id = $1 ORDER BY time, id",
        )
        .bind(house_id)
        .fetch_all(self.storage.get_pool())
        .await?;

        Ok(records)
    }
}
