use std::path::Path;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Error, SqlitePool};

use crate::configs::schema::SchemaManager;
use crate::configs::settings::Database;

#[derive(Clone)]
pub struct Storage {
    pool: SqlitePool,
}

impl Storage {
    /// Opens the pool and brings the schema up to date.
    ///
    /// In-memory databases are private to one connection, so their pool is
    /// capped at a single connection that is never released.
    pub async fn new(database: Database, schema_manager: SchemaManager) -> Result<Self, Error> {
        let in_memory = database.url.contains(":memory:");

        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(if in_memory { 1 } else { 10 })
            .connect(&database.url)
            .await?;

        let storage = Self { pool };
        storage.prepare(&schema_manager, &database).await?;

        Ok(storage)
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn prepare(&self, schema: &SchemaManager, database: &Database) -> Result<(), Error> {
        if database.clean_start {
            sqlx::query("DROP TABLE IF EXISTS _sqlx_migrations")
                .execute(&self.pool)
                .await?;
            sqlx::query(&schema.dispose_schema().join("\n"))
                .execute(&self.pool)
                .await?;

            tracing::warn!("clean start: dropped houses, devices and consumption history");
        }

        sqlx::query(&schema.create_schema().join("\n"))
            .execute(&self.pool)
            .await?;

        if let Some(migration_path) = &database.migration_path {
            let migrator = Migrator::new(Path::new(migration_path)).await?;
            migrator.run(&self.pool).await?;

            tracing::info!(path = %migration_path, "applied migrations");
        }

        Ok(())
    }
}
