use std::sync::Arc;

use sqlx::{Error, Pool, Sqlite, Transaction};

use crate::configs::Storage;
use crate::models::Room;

#[derive(Clone)]
pub struct RoomRepository {
    storage: Arc<Storage>,
}

impl RoomRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub fn get_pool(&self) -> &Pool<Sqlite> {
        self.storage.get_pool()
    }
}

impl RoomRepository {
    pub async fn create(
        &self,
        item: &Room,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<i32, Error> {
        let id = sqlx::query(
            r#"
            INSERT INTO rooms (house_id, name, icon)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(item.house_id)
        .bind(&item.name)
        .bind(&item.icon)
        .execute(&mut **transaction)
        .await?
        .last_insert_rowid();

        Ok(id as i32)
    }

    /// Rooms of a house in stored order.
    pub async fn find_by_house_id(
        &self,
        house_id: i32,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<Vec<Room>, Error> {
        let rooms: Vec<Room> = sqlx::query_as("SELECT * FROM rooms WHERE house_id = $1 ORDER BY id")
            .bind(house_id)
            .fetch_all(&mut **transaction)
            .await?;

        Ok(rooms)
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::*;

    use super::*;

    #[tokio::test]
    async fn test_find_rooms_by_house() {
        let storage = setup_test_db().await;
        let house = create_test_house(storage.clone(), "House A").await;
        let other = create_test_house(storage.clone(), "House B").await;
        create_test_room(storage.clone(), house.id, "Kitchen").await;
        create_test_room(storage.clone(), house.id, "Bedroom").await;
        create_test_room(storage.clone(), other.id, "Garage").await;

        let repo = RoomRepository::new(storage.clone());
        let mut tx = storage.get_pool().begin().await.unwrap();
        let rooms = repo.find_by_house_id(house.id, &mut tx).await.unwrap();
        tx.commit().await.unwrap();

        let names: Vec<_> = rooms.iter().map(|room| room.name.as_str()).collect();
        assert_eq!(names, vec!["Kitchen", "Bedroom"]);
        assert!(rooms.iter().all(|room| room.house_id == house.id));
    }
}
