use serde::{Deserialize, Serialize};

use super::Table;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct House {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub owner_id: i32,
}

#[derive(Clone)]
pub struct HouseTable;

impl Table for HouseTable {
    fn name(&self) -> &'static str {
        "houses"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS houses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name VARCHAR(255) NOT NULL,
                address TEXT NOT NULL,
                owner_id INTEGER NOT NULL
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS houses;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec![]
    }
}
