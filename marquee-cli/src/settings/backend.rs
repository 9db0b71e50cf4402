//! Preference storage trait.

use async_trait::async_trait;

use super::SettingsError;

/// Raw byte storage behind a [`SettingsProvider`](super::SettingsProvider).
///
/// Preferences are addressed by a scope (`"global"` or a screen name) and a
/// name within it.
#[async_trait]
pub trait SettingsBackend: Send + Sync {
    /// Get the stored bytes of one preference.
    async fn get_bytes(&self, scope: &str, name: &str) -> Result<Option<Vec<u8>>, SettingsError>;

    /// Store one preference, replacing any previous value.
    async fn set_bytes(&self, scope: &str, name: &str, value: Vec<u8>)
    -> Result<(), SettingsError>;

    /// Forget every preference in a scope.
    async fn clear(&self, scope: &str) -> Result<(), SettingsError>;
}
