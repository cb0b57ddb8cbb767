use std::sync::Arc;

use sqlx::{Error, Pool, Sqlite, Transaction};
use time::UtcOffset;

use crate::configs::Storage;
use crate::models::ConsumptionRecord;

#[derive(Clone)]
pub struct ConsumptionRecordRepository {
    storage: Arc<Storage>,
}

impl ConsumptionRecordRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub fn get_pool(&self) -> &Pool<Sqlite> {
        self.storage.get_pool()
    }
}

impl ConsumptionRecordRepository {
    /// Appends a sample. Times are stored in UTC so that text ordering is chronological.
    pub async fn create(
        &self,
        item: &ConsumptionRecord,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<i32, Error> {
        let id = sqlx::query(
            r#"
            INSERT INTO consumption_records (device_id, time, voltage, current, power, energy)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
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

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ConsumptionRecord>, Error> {
        let record: Option<ConsumptionRecord> =
            sqlx::query_as("SELECT * FROM consumption_records WHERE id = $1")
                .bind(id)
                .fetch_optional(self.storage.get_pool())
                .await?;

        Ok(record)
    }

    /// Samples of every device in a house, in stored order.
    pub async fn find_by_house_id(
        &self,
        house_id: i32,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<Vec<ConsumptionRecord>, Error> {
        let records: Vec<ConsumptionRecord> = sqlx::query_as(
            r#"
            SELECT c.* FROM consumption_records c
                JOIN devices d ON c.device_id = d.id
                WHERE d.house_id = $1
                ORDER BY c.id
            "#,
        )
        .bind(house_id)
        .fetch_all(&mut **transaction)
        .await?;

        Ok(records)
    }
}
