use std::sync::Arc;

use sqlx::{Error, Pool, Sqlite, Transaction};

use crate::configs::Storage;
use crate::models::House;

#[derive(Clone)]
pub struct HouseRepository {
    storage: Arc<Storage>,
}

impl HouseRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub fn get_pool(&self) -> &Pool<Sqlite> {
        self.storage.get_pool()
    }
}

impl HouseRepository {
    pub async fn create(
        &self,
        item: &House,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<i32, Error> {
        let id = sqlx::query(
            r#"
            INSERT INTO houses (name, address, owner_id)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&item.name)
        .bind(&item.address)
        .bind(item.owner_id)
        .execute(&mut **transaction)
        .await?
        .last_insert_rowid();

        Ok(id as i32)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<House>, Error> {
        let house: Option<House> = sqlx::query_as("SELECT * FROM houses WHERE id = $1")
            .bind(id)
            .fetch_optional(self.storage.get_pool())
            .await?;

        Ok(house)
    }

    pub async fn find_by_id_in_transaction(
        &self,
        id: i32,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<Option<House>, Error> {
        let house: Option<House> = sqlx::query_as("SELECT * FROM houses WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut **transaction)
            .await?;

        Ok(house)
    }
}
