use std::sync::Arc;

use sqlx::{Error, Pool, Sqlite, Transaction};

use crate::configs::Storage;
use crate::models::SubRoom;

#[derive(Clone)]
pub struct SubRoomRepository {
    storage: Arc<Storage>,
}

impl SubRoomRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub fn get_pool(&self) -> &Pool<Sqlite> {
        self.storage.get_pool()
    }
}

impl SubRoomRepository {
    pub async fn create(
        &self,
        item: &SubRoom,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<i32, Error> {
        let id = sqlx::query(
            r#"
            INSERT INTO sub_rooms (room_id, name)
            VALUES ($1, $2)
            "#,
        )
        .bind(item.room_id)
        .bind(&item.name)
        .execute(&mut **transaction)
        .await?
        .last_insert_rowid();

        Ok(id as i32)
    }

    /// Sub-rooms of every room in a house, in stored order.
    pub async fn find_by_house_id(
        &self,
        house_id: i32,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<Vec<SubRoom>, Error> {
        let sub_rooms: Vec<SubRoom> = sqlx::query_as(
            r#"
            SELECT s.* FROM sub_rooms s
                JOIN rooms r ON s.room_id = r.id
                WHERE r.house_id = $1
                ORDER BY s.id
            "#,
        )
        .bind(house_id)
        .fetch_all(&mut **transaction)
        .await?;

        Ok(sub_rooms)
    }
}
