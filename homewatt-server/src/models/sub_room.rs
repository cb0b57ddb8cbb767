use serde::{Deserialize, Serialize};

use super::Table;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SubRoom {
    pub id: i32,
    pub room_id: i32,
    pub name: String,
}

#[derive(Clone)]
pub struct SubRoomTable;

impl Table for SubRoomTable {
    fn name(&self) -> &'static str {
        "sub_rooms"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS sub_rooms (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                room_id INTEGER NOT NULL,
                name VARCHAR(255) NOT NULL,
                FOREIGN KEY (room_id) REFERENCES rooms (id) ON DELETE CASCADE
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS sub_rooms;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec!["rooms"]
    }
}
