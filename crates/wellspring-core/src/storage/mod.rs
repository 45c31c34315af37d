mod config;
pub mod database;

pub use config::{AssessmentConfig, Config, GamificationConfig, ProfileConfig};
pub use database::{Database, StoredAssessment, StoredGamification, Submission};

use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Returns `~/.config/wellspring[-dev]/` based on WELLSPRING_ENV.
///
/// Set WELLSPRING_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("WELLSPRING_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("wellspring-dev")
    } else {
        base_dir.join("wellspring")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::LoadFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
