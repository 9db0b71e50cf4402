//! Console preferences in a SQLite database.
//!
//! One row per `(scope, name)` pair. Rows remember when they were saved so
//! the log can show how stale a default is.

use std::path::Path;

use async_sqlite::Client;
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use log::debug;

use super::{SettingsBackend, SettingsError};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS console_preferences (
    scope TEXT NOT NULL,
    name TEXT NOT NULL,
    value BLOB NOT NULL,
    saved_at TEXT NOT NULL,
    PRIMARY KEY (scope, name)
)";

/// SQLite preference store with a read-through cache per `(scope, name)`.
pub struct SqliteBackend {
    client: Client,
    cache: DashMap<(String, String), Vec<u8>>,
}

impl SqliteBackend {
    /// Opens (or creates) the preference database at `path`.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let client = async_sqlite::ClientBuilder::new().path(path).open().await?;
        client.conn(|conn| conn.execute(SCHEMA, [])).await?;
        Ok(Self {
            client,
            cache: DashMap::new(),
        })
    }
}

#[async_trait]
impl SettingsBackend for SqliteBackend {
    async fn get_bytes(&self, scope: &str, name: &str) -> Result<Option<Vec<u8>>, SettingsError> {
        let key = (scope.to_string(), name.to_string());
        if let Some(value) = self.cache.get(&key) {
            return Ok(Some(value.clone()));
        }

        let (s, n) = key.clone();
        let row: Option<(Vec<u8>, String)> = self
            .client
            .conn(move |conn| {
                let mut stmt = conn.prepare(
                    "SELECT value, saved_at FROM console_preferences WHERE scope = ?1 AND name = ?2",
                )?;
                let mut rows = stmt.query([&s, &n])?;
                match rows.next()? {
                    Some(row) => Ok(Some((row.get(0)?, row.get(1)?))),
                    None => Ok(None),
                }
            })
            .await?;

        Ok(row.map(|(value, saved_at)| {
            debug!("preference {}.{} saved at {}", scope, name, saved_at);
            self.cache.insert(key, value.clone());
            value
        }))
    }

    async fn set_bytes(
        &self,
        scope: &str,
        name: &str,
        value: Vec<u8>,
    ) -> Result<(), SettingsError> {
        let (s, n, v) = (scope.to_string(), name.to_string(), value.clone());
        let saved_at = Utc::now().to_rfc3339();
        self.client
            .conn(move |conn| {
                conn.execute(
                    "INSERT INTO console_preferences (scope, name, value, saved_at)
                     VALUES (?1, ?2, ?3, ?4)
                     ON CONFLICT(scope, name)
                     DO UPDATE SET value = excluded.value, saved_at = excluded.saved_at",
                    rusqlite::params![s, n, v, saved_at],
                )
            })
            .await?;
        self.cache.insert((scope.to_string(), name.to_string()), value);
        Ok(())
    }

    async fn clear(&self, scope: &str) -> Result<(), SettingsError> {
        let s = scope.to_string();
        let removed = self
            .client
            .conn(move |conn| conn.execute("DELETE FROM console_preferences WHERE scope = ?1", [&s]))
            .await?;
        self.cache.retain(|(s, _), _| s != scope);
        debug!("cleared {} preference(s) in scope {}", removed, scope);
        Ok(())
    }
}
