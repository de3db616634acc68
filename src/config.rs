//! Application configuration module
//!
//! Settings are persisted with `confy` in the OS-specific config directory.
//! The backend endpoint can be overridden per run by the command line or the
//! environment.

use crate::constant::{
    APP_NAME, DEFAULT_ENDPOINT, DEFAULT_RESULT_FONT_SIZE, ENDPOINT_ENV_VAR, MAX_RECENT_FILES,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Confy(#[from] confy::ConfyError),
}

pub struct Config {
    pub settings: Settings,
}

impl Config {
    /// Load configuration from disk, creating default if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Settings = confy::load(APP_NAME, None)?;
        info!("Load config from {:?}", Self::config_path()?);
        Ok(Self { settings })
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(confy::get_configuration_file_path(APP_NAME, None)?)
    }

    /// Endpoint for this run: explicit override, then environment, then settings.
    pub fn endpoint(&self, cli_override: Option<&str>) -> String {
        resolve_endpoint(
            cli_override,
            std::env::var(ENDPOINT_ENV_VAR).ok().as_deref(),
            &self.settings.endpoint,
        )
    }

    /// Record a document that was just analyzed, and remember its directory
    /// for the next file dialog.
    pub fn add_recent_file(&mut self, path: PathBuf) {
        if let Some(parent) = path.parent() {
            self.settings.last_directory = Some(parent.to_path_buf());
        }
        self.settings.push_recent_file(path);
        self.store_in_background();
    }

    // confy writes synchronously; keep it off the UI thread
    fn store_in_background(&self) {
        let settings = self.settings.clone();
        std::thread::spawn(move || {
            if let Err(e) = confy::store(APP_NAME, None, &settings) {
                tracing::error!("Failed to save settings: {}", e);
            }
        });
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Falling back to default settings: {}", e);
            Self {
                settings: Settings::default(),
            }
        })
    }
}

/// Pick the first non-blank endpoint in priority order.
pub fn resolve_endpoint(cli: Option<&str>, env: Option<&str>, stored: &str) -> String {
    [cli, env, Some(stored)]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|candidate| !candidate.is_empty())
        .unwrap_or(DEFAULT_ENDPOINT)
        .to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Full URL of the analysis endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Directory the file dialog opens in
    #[serde(default)]
    pub last_directory: Option<PathBuf>,

    /// Recently analyzed documents, newest first
    #[serde(default)]
    pub recent_files: Vec<PathBuf>,

    #[serde(default = "default_result_font_size")]
    pub result_font_size: f32,
}

impl Settings {
    pub fn push_recent_file(&mut self, path: PathBuf) {
        // Move the path to the front
        self.recent_files.retain(|p| p != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(MAX_RECENT_FILES);
    }

    pub fn dialog_directory(&self) -> Option<&Path> {
        self.last_directory.as_deref().filter(|dir| dir.is_dir())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            last_directory: None,
            recent_files: Vec::new(),
            result_font_size: default_result_font_size(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_result_font_size() -> f32 {
    DEFAULT_RESULT_FONT_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_endpoint_priority() {
        assert_eq!(
            resolve_endpoint(Some("http://cli/analyze"), Some("http://env/analyze"), "http://file"),
            "http://cli/analyze"
        );
        assert_eq!(
            resolve_endpoint(None, Some("http://env/analyze"), "http://file"),
            "http://env/analyze"
        );
        assert_eq!(resolve_endpoint(None, None, "http://file"), "http://file");
    }

    #[test]
    fn test_resolve_endpoint_skips_blank_values() {
        assert_eq!(resolve_endpoint(Some("  "), Some(""), ""), DEFAULT_ENDPOINT);
        assert_eq!(
            resolve_endpoint(Some(""), None, " http://file/analyze "),
            "http://file/analyze"
        );
    }

    #[test]
    fn test_recent_files_are_deduplicated_and_bounded() {
        let mut settings = Settings::default();
        for i in 0..(MAX_RECENT_FILES + 3) {
            settings.push_recent_file(PathBuf::from(format!("/tmp/{}.pdf", i)));
        }
        settings.push_recent_file(PathBuf::from("/tmp/5.pdf"));

        assert_eq!(settings.recent_files.len(), MAX_RECENT_FILES);
        assert_eq!(settings.recent_files[0], PathBuf::from("/tmp/5.pdf"));
        assert_eq!(
            settings
                .recent_files
                .iter()
                .filter(|p| **p == PathBuf::from("/tmp/5.pdf"))
                .count(),
            1
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.result_font_size, DEFAULT_RESULT_FONT_SIZE);
        assert!(settings.recent_files.is_empty());
        assert!(settings.last_directory.is_none());
    }
}
