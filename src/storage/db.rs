use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema, Set,
};
use std::path::{Path, PathBuf};

use crate::constants::APP_NAME;
use crate::entities::slot;
use crate::storage::SlotStore;

/// SQLite-backed slot storage
#[derive(Clone)]
pub struct SlotStorage {
    pub(crate) conn: DatabaseConnection,
    location: Option<PathBuf>,
}

impl SlotStorage {
    /// Open (or create) the slot database at `path`
    pub async fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory: {}", parent.display()))?;
        }

        let database_url = format!("sqlite://{}?mode=rwc", path.display());
        let conn = Self::connect(&database_url)
            .await
            .with_context(|| format!("Failed to open database: {}", path.display()))?;

        let storage = Self {
            conn,
            location: Some(path.to_path_buf()),
        };
        storage.init_schema().await?;
        log::info!("Opened slot storage at {}", path.display());
        Ok(storage)
    }

    /// Open a throwaway in-memory database
    pub async fn in_memory() -> Result<Self> {
        let conn = Self::connect("sqlite::memory:").await?;
        let storage = Self { conn, location: None };
        storage.init_schema().await?;
        log::info!("Opened in-memory slot storage");
        Ok(storage)
    }

    /// Default database location under the XDG data directory
    pub fn default_path() -> Result<PathBuf> {
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(APP_NAME).join(format!("{}.db", APP_NAME)))
    }

    /// Path of the backing file, `None` for in-memory storage
    pub fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    async fn connect(database_url: &str) -> Result<DatabaseConnection> {
        // A single connection keeps an in-memory database alive and serializes writes.
        let mut options = ConnectOptions::new(database_url.to_string());
        options.min_connections(1).max_connections(1).sqlx_logging(false);
        Ok(Database::connect(options).await?)
    }

    /// Initialize database schema
    async fn init_schema(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);
        let mut table = schema.create_table_from_entity(slot::Entity);
        table.if_not_exists();
        self.conn
            .execute(backend.build(&table))
            .await
            .context("Failed to create slots table")?;
        Ok(())
    }
}

#[async_trait]
impl SlotStore for SlotStorage {
    async fn read_slot(&self, key: &str) -> Result<Option<String>> {
        let row = slot::Entity::find_by_id(key.to_string())
            .one(&self.conn)
            .await
            .with_context(|| format!("Failed to read slot '{}'", key))?;
        Ok(row.map(|model| model.payload))
    }

    async fn write_slot(&self, key: &str, payload: &str) -> Result<()> {
        let model = slot::ActiveModel {
            slot: Set(key.to_string()),
            payload: Set(payload.to_string()),
            updated_at: Set(Utc::now().to_rfc3339()),
        };

        slot::Entity::insert(model)
            .on_conflict(
                OnConflict::column(slot::Column::Slot)
                    .update_columns([slot::Column::Payload, slot::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.conn)
            .await
            .with_context(|| format!("Failed to write slot '{}'", key))?;
        Ok(())
    }
}
