use anyhow::{Context, Result};
use async_trait::async_trait;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};
use std::path::Path;

use super::KeyValueStore;
use crate::entities::preference;
use crate::repositories::PreferenceRepository;

/// SQLite-backed local store
#[derive(Clone)]
pub struct LocalStorage {
    pub(crate) conn: DatabaseConnection,
}

impl LocalStorage {
    /// Open (or create) the store at `path`
    pub async fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create storage directory: {}", parent.display()))?;
            }
        }

        let database_url = format!("sqlite://{}?mode=rwc", path.display());
        Self::connect(ConnectOptions::new(database_url)).await
    }

    /// Open a throwaway in-memory store
    pub async fn in_memory() -> Result<Self> {
        let mut options = ConnectOptions::new("sqlite::memory:");
        // Every pooled connection would see its own empty memory database.
        options.min_connections(1).max_connections(1);
        Self::connect(options).await
    }

    async fn connect(mut options: ConnectOptions) -> Result<Self> {
        options.sqlx_logging(false);
        let conn = Database::connect(options)
            .await
            .context("Failed to open local store")?;

        let storage = LocalStorage { conn };
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Initialize database schema
    async fn init_schema(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);
        let mut statement = schema.create_table_from_entity(preference::Entity);
        statement.if_not_exists();

        self.conn
            .execute(backend.build(&statement))
            .await
            .context("Failed to create preferences table")?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for LocalStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(PreferenceRepository::get(&self.conn, key).await?.map(|row| row.value))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        PreferenceRepository::upsert(&self.conn, key, value).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        PreferenceRepository::delete(&self.conn, key).await?;
        Ok(())
    }
}
