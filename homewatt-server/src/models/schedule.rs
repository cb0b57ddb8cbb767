use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Table;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Schedule {
    pub id: i32,
    pub house_id: i32,
    pub device_id: i32,
    pub name: String,
    pub on_time: String,
    pub off_time: String,
    /// JSON array of weekday names
    pub days: Value,
    pub created_by: i32,
}

#[derive(Clone)]
pub struct ScheduleTable;

impl Table for ScheduleTable {
    fn name(&self) -> &'static str {
        "schedules"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS schedules (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                house_id INTEGER NOT NULL,
                device_id INTEGER NOT NULL,
                name VARCHAR(255) NOT NULL,
                on_time VARCHAR(5) NOT NULL,
                off_time VARCHAR(5) NOT NULL,
                days JSON NOT NULL,
                created_by INTEGER NOT NULL,
                FOREIGN KEY (house_id) REFERENCES houses (id) ON DELETE CASCADE,
                FOREIGN KEY (device_id) REFERENCES devices (id) ON DELETE CASCADE
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS schedules;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec!["houses", "devices"]
    }
}
