use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::Table;

/// House-level consumption history. Kept for older clients, never aggregated.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct HouseConsumption {
    pub id: i32,
    pub house_id: i32,
    pub device_id: i32,
    pub time: OffsetDateTime,
    pub voltage: f64,
    pub current: f64,
    pub power: f64,
    pub energy: f64,
}

#[derive(Clone)]
pub struct HouseConsumptionTable;

impl Table for HouseConsumptionTable {
    fn name(&self) -> &'static str {
        "house_consumption_records"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS house_consumption_records (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                house_id INTEGER NOT NULL,
                device_id INTEGER NOT NULL,
                time TIMESTAMP NOT NULL,
                voltage REAL NOT NULL,
                current REAL NOT NULL,
                power REAL NOT NULL,
                energy REAL NOT NULL,
                FOREIGN KEY (house_id) REFERENCES houses (id) ON DELETE CASCADE
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS house_consumption_records;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec!["houses"]
    }
}
