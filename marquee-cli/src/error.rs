//! CLI error type.

use marquee_lib::error::ViewError;
use thiserror::Error;

use crate::settings::SettingsError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    View(#[from] ViewError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("cannot encode output: {0}")]
    Json(#[from] serde_json::Error),
}
