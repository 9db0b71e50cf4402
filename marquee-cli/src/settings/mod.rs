//! Typed key-value storage for console preferences.

mod backend;
mod memory;
mod sqlite;

pub use backend::SettingsBackend;
pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

use std::sync::Arc;

use log::warn;
use serde::{de::DeserializeOwned, Serialize};
use marquee_lib::console::ConsoleScreen;
use thiserror::Error;

use crate::paths;

/// Settings error type.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("database error: {0}")]
    Database(#[from] async_sqlite::Error),
    #[error("serialization error: {0}")]
    Serialization(bincode::Error),
    #[error("deserialization error: {0}")]
    Deserialization(bincode::Error),
}

/// Rows per page, saved per screen.
pub const PAGE_SIZE: &str = "page_size";

/// Simulated latency of delegated fetches in milliseconds, saved globally.
pub const LATENCY_MS: &str = "latency_ms";

/// Where a preference applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Global,
    Screen(ConsoleScreen),
}

impl Scope {
    fn key(&self) -> &'static str {
        match self {
            Scope::Global => "global",
            Scope::Screen(screen) => screen.name(),
        }
    }
}

/// Typed settings provider.
///
/// Wraps a [`SettingsBackend`] with bincode serialization.
#[derive(Clone)]
pub struct SettingsProvider {
    backend: Arc<dyn SettingsBackend>,
}

impl SettingsProvider {
    pub fn new(backend: impl SettingsBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Opens the on-disk settings, falling back to memory when the data
    /// directory or the database is unavailable.
    pub async fn open_default() -> Self {
        let Some(path) = paths::settings_db() else {
            warn!("no data directory; preferences will not persist");
            return Self::new(MemoryBackend::new());
        };
        if let Err(e) = path.parent().map_or(Ok(()), std::fs::create_dir_all) {
            warn!("cannot create data directory: {}", e);
        }
        match SqliteBackend::open(&path).await {
            Ok(backend) => Self::new(backend),
            Err(e) => {
                warn!("cannot open settings at {}: {}", path.display(), e);
                Self::new(MemoryBackend::new())
            }
        }
    }

    /// Get a typed preference.
    pub async fn get<T: DeserializeOwned>(
        &self,
        scope: Scope,
        name: &str,
    ) -> Result<Option<T>, SettingsError> {
        match self.backend.get_bytes(scope.key(), name).await? {
            Some(bytes) => Ok(Some(
                bincode::deserialize(&bytes).map_err(SettingsError::Deserialization)?,
            )),
            None => Ok(None),
        }
    }

    /// Get a typed preference, returning `default` if unset.
    pub async fn get_or<T: DeserializeOwned>(
        &self,
        scope: Scope,
        name: &str,
        default: T,
    ) -> Result<T, SettingsError> {
        Ok(self.get(scope, name).await?.unwrap_or(default))
    }

    pub async fn set<T: Serialize + Sync>(
        &self,
        scope: Scope,
        name: &str,
        value: &T,
    ) -> Result<(), SettingsError> {
        let bytes = bincode::serialize(value).map_err(SettingsError::Serialization)?;
        self.backend.set_bytes(scope.key(), name, bytes).await
    }

    /// Forget every preference saved under `scope`.
    pub async fn clear(&self, scope: Scope) -> Result<(), SettingsError> {
        self.backend.clear(scope.key()).await
    }
}
