use serde::{Deserialize, Serialize};

use super::Table;

/// A switchable unit. Exactly one of three placements applies:
/// directly in the house (`room_id` and `sub_room_id` empty), in a room
/// (`room_id` set), or in a sub-room (`sub_room_id` set, `room_id` names its parent room).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Device {
    pub id: i32,
    pub house_id: i32,
    pub room_id: Option<i32>,
    pub sub_room_id: Option<i32>,
    pub name: String,
    pub icon: String,
    pub status: bool,
    pub is_room_device: bool,
}

#[derive(Clone)]
pub struct DeviceTable;

impl Table for DeviceTable {
    fn name(&self) -> &'static str {
        "devices"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS devices (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                house_id INTEGER NOT NULL,
                room_id INTEGER,
                sub_room_id INTEGER,
                name VARCHAR(255) NOT NULL,
                icon VARCHAR(255) NOT NULL,
                status BOOLEAN NOT NULL DEFAULT FALSE,
                is_room_device BOOLEAN NOT NULL DEFAULT FALSE,
                FOREIGN KEY (house_id) REFERENCES houses (id) ON DELETE CASCADE,
                FOREIGN KEY (room_id) REFERENCES rooms (id) ON DELETE CASCADE,
                FOREIGN KEY (sub_room_id) REFERENCES sub_rooms (id) ON DELETE CASCADE
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS devices;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec!["houses", "rooms", "sub_rooms"]
    }
}
