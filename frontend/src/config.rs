//! Application configuration.
//!
//! Centralized configuration for the floor plan upload frontend.
//! The constants are the defaults; a page may override the upload
//! timings with a JSON block (see [`UploadConfig::load`]).

use serde::Deserialize;

use crate::{AppError, AppResult};

/// Application name shown in the header.
pub const APP_NAME: &str = "Floor Plan Studio";

/// Console log level for the browser logger.
pub const LOG_LEVEL: log::Level = log::Level::Debug;

/// Percentage points added to the simulated progress on every tick.
pub const PROGRESS_INCREMENT: u8 = 15;

/// Delay between two simulated progress ticks (in milliseconds).
pub const PROGRESS_INTERVAL_MS: u32 = 100;

/// Delay between reaching 100% and delivering the payload (in milliseconds).
pub const REDIRECT_DELAY_MS: u32 = 600;

/// Maximum file size advertised to the user (in bytes).
///
/// 50 MB. Informational only: larger files are logged, never rejected.
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// File picker `accept` filter.
pub const ACCEPTED_EXTENSIONS: &str = ".jpg,.jpeg,.png";

/// Id of the optional `<script type="application/json">` config block.
pub const CONFIG_ELEMENT_ID: &str = "upload-config";

/// Timings of the simulated upload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadConfig {
    /// Percentage points per tick, 1..=100
    pub progress_increment: u8,
    /// Milliseconds between ticks
    pub progress_interval_ms: u32,
    /// Milliseconds between 100% and the completion callback
    pub redirect_delay_ms: u32,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            progress_increment: PROGRESS_INCREMENT,
            progress_interval_ms: PROGRESS_INTERVAL_MS,
            redirect_delay_ms: REDIRECT_DELAY_MS,
        }
    }
}

impl UploadConfig {
    /// Parse and validate a JSON config block.
    ///
    /// Missing fields fall back to the compile-time defaults.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| AppError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the progress simulation relies on.
    pub fn validate(&self) -> AppResult<()> {
        if !(1..=100).contains(&self.progress_increment) {
            return Err(AppError::Config(format!(
                "progressIncrement must be between 1 and 100, got {}",
                self.progress_increment
            )));
        }
        if self.progress_interval_ms == 0 {
            return Err(AppError::Config(
                "progressIntervalMs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load the config from the page, or the defaults.
    pub fn load() -> Self {
        let Some(text) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
        else {
            log::debug!("No #{} block, using default upload config", CONFIG_ELEMENT_ID);
            return Self::default();
        };

        match Self::from_json(&text) {
            Ok(config) => {
                log::debug!("Loaded upload config: {:?}", config);
                config
            }
            Err(e) => {
                log::warn!("Ignoring #{} block: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = UploadConfig::from_json(r#"{ "progressIncrement": 10 }"#).unwrap();
        assert_eq!(config.progress_increment, 10);
        assert_eq!(config.progress_interval_ms, PROGRESS_INTERVAL_MS);
        assert_eq!(config.redirect_delay_ms, REDIRECT_DELAY_MS);
    }

    #[test]
    fn test_full_config() {
        let json = r#"{
            "progressIncrement": 10,
            "progressIntervalMs": 200,
            "redirectDelayMs": 500
        }"#;
        let config = UploadConfig::from_json(json).unwrap();
        assert_eq!(
            config,
            UploadConfig {
                progress_increment: 10,
                progress_interval_ms: 200,
                redirect_delay_ms: 500,
            }
        );
    }

    #[test]
    fn test_rejects_zero_increment() {
        let result = UploadConfig::from_json(r#"{ "progressIncrement": 0 }"#);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_rejects_oversized_increment() {
        let result = UploadConfig::from_json(r#"{ "progressIncrement": 101 }"#);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_rejects_zero_interval() {
        let result = UploadConfig::from_json(r#"{ "progressIntervalMs": 0 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result = UploadConfig::from_json("{ progressIncrement: ");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(UploadConfig::default().validate().is_ok());
    }
}
