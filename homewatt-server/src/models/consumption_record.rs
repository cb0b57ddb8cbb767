use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::Table;

/// One electrical sample of a device. Energy is in watt-hours.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ConsumptionRecord {
    pub id: i32,
    pub device_id: i32,
    pub time: OffsetDateTime,
    pub voltage: f64,
    pub current: f64,
    pub power: f64,
    pub energy: f64,
}

#[derive(Clone)]
pub struct ConsumptionRecordTable;

impl Table for ConsumptionRecordTable {
    fn name(&self) -> &'static str {
        "consumption_records"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS consumption_records (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                device_id INTEGER NOT NULL,
                time TIMESTAMP NOT NULL,
                voltage REAL NOT NULL,
                current REAL NOT NULL,
                power REAL NOT NULL,
                energy REAL NOT NULL,
                FOREIGN KEY (device_id) REFERENCES devices (id) ON DELETE CASCADE
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS consumption_records;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec!["devices"]
    }
}
