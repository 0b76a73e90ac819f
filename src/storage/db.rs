use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use log::info;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};

use crate::constants::LOG_STORAGE_READY;
use crate::entities::lead;

/// Pool connections are kept this long; an in-memory database dies with its connection
const CONNECTION_KEEPALIVE: Duration = Duration::from_secs(u32::MAX as u64);

/// Local storage manager for lead records
pub struct LocalStorage {
    pub conn: DatabaseConnection,
}

impl LocalStorage {
    /// Open the `SQLite` database at `database_path`
    ///
    /// An empty path opens a private in-memory database.
    pub async fn new(database_path: &str) -> Result<Self> {
        let database_url = if database_path.is_empty() {
            "sqlite::memory:".to_string()
        } else {
            if let Some(parent) = Path::new(database_path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create database directory: {}", parent.display()))?;
                }
            }
            format!("sqlite://{}?mode=rwc", database_path)
        };

        let conn = Database::connect(Self::connect_options(&database_url))
            .await
            .with_context(|| format!("Failed to open database: {}", database_url))?;

        let storage = LocalStorage { conn };
        storage.init_schema().await?;
        info!("{}", LOG_STORAGE_READY);

        Ok(storage)
    }

    /// Pool options for `database_url`
    pub(crate) fn connect_options(database_url: &str) -> ConnectOptions {
        // A single connection keeps an in-memory database alive and shared
        let mut options = ConnectOptions::new(database_url.to_string());
        options
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(CONNECTION_KEEPALIVE) // avoid idle reaping
            .max_lifetime(CONNECTION_KEEPALIVE) // avoid lifetime rotation
            .sqlx_logging(false);
        options
    }

    /// Open a throwaway in-memory database
    pub async fn in_memory() -> Result<Self> {
        Self::new("").await
    }

    /// Initialize database schema
    async fn init_schema(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut create_leads = schema.create_table_from_entity(lead::Entity);
        create_leads.if_not_exists();
        self.conn.execute(backend.build(&create_leads)).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_options_never_recycle_the_connection() {
        let options = LocalStorage::connect_options("sqlite::memory:");
        assert_eq!(options.get_max_connections(), Some(1));
        assert_eq!(options.get_min_connections(), Some(1));
        assert_eq!(options.get_idle_timeout(), Some(CONNECTION_KEEPALIVE));
        assert_eq!(options.get_max_lifetime(), Some(CONNECTION_KEEPALIVE));
    }
}
