//! Preferences kept only for the lifetime of the process.

use async_trait::async_trait;
use dashmap::DashMap;

use super::{SettingsBackend, SettingsError};

/// In-memory preference storage, used when the database cannot be opened.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: DashMap<(String, String), Vec<u8>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsBackend for MemoryBackend {
    async fn get_bytes(&self, scope: &str, name: &str) -> Result<Option<Vec<u8>>, SettingsError> {
        let key = (scope.to_string(), name.to_string());
        Ok(self.values.get(&key).map(|v| v.clone()))
    }

    async fn set_bytes(
        &self,
        scope: &str,
        name: &str,
        value: Vec<u8>,
    ) -> Result<(), SettingsError> {
        self.values.insert((scope.to_string(), name.to_string()), value);
        Ok(())
    }

    async fn clear(&self, scope: &str) -> Result<(), SettingsError> {
        self.values.retain(|(s, _), _| s != scope);
        Ok(())
    }
}
