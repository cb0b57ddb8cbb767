use std::sync::Arc;

use sqlx::{Error, Pool, Sqlite, Transaction};

use crate::configs::Storage;
use crate::models::Schedule;

#[derive(Clone)]
pub struct ScheduleRepository {
    storage: Arc<Storage>,
}

impl ScheduleRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub fn get_pool(&self) -> &Pool<Sqlite> {
        self.storage.get_pool()
    }
}

impl ScheduleRepository {
    pub async fn create(
        &self,
        item: &Schedule,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<i32, Error> {
        let id = sqlx::query(
            r#"
            INSERT INTO schedules (house_id, device_id, name, on_time, off_time, days, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(item.house_id)
        .bind(item.device_id)
        .bind(&item.name)
        .bind(&item.on_time)
        .bind(&item.off_time)
        .bind(&item.days)
        .bind(item.created_by)
        .execute(&mut **transaction)
        .await?
        .last_insert_rowid();

        Ok(id as i32)
    }

    pub async fn find_by_house_id(&self, house_id: i32) -> Result<Vec<Schedule>, Error> {
        let schedules: Vec<Schedule> =
            sqlx::query_as("SELECT * FROM schedules WHERE house_id = $1 ORDER BY id")
                .bind(house_id)
                .fetch_all(self.storage.get_pool())
                .await?;

        Ok(schedules)
    }
}
