//! User configuration, read from a RON file.
//!
//! Every field has a default, so a missing file (or a file that only sets a
//! few fields) is fine. Example:
//!
//! ```ron
//! (
//!     storage_path: Some("/home/me/debts.json"),
//!     currency: "USD",
//!     advice: (model: "gemini-2.5-pro", timeout_secs: Some(30)),
//! )
//! ```
//!
//! The advisor API key is never read from this file; it comes from the
//! command line or `GEMINI_API_KEY`.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use directories::ProjectDirs;
use fractic_server_error::ServerError;
use iso_currency::Currency;
use serde_derive::Deserialize;
use tracing::debug;

use crate::errors::{InvalidConfig, InvalidCurrencyCode, ReadError};

pub const STORAGE_FILE_NAME: &str = "wb_debts.json";
pub const CONFIG_FILE_NAME: &str = "config.ron";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the record collection lives. Defaults to the platform data dir.
    pub storage_path: Option<PathBuf>,
    /// ISO 4217 code used to format amounts and to describe them to the
    /// advisor.
    pub currency: String,
    pub advice: AdviceConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdviceConfig {
    pub endpoint: String,
    pub model: String,
    /// `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: None,
            currency: "LYD".to_string(),
            advice: AdviceConfig::default(),
        }
    }
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-2.5-flash".to_string(),
            timeout_secs: Some(60),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("ly", "Web Libya", "debt-tracker")
}

pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().join(CONFIG_FILE_NAME))
}

impl Config {
    /// Loads `path`, or the default config location when `path` is `None`.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ServerError> {
        let path = match path.map(Path::to_path_buf).or_else(default_config_path) {
            Some(p) if p.exists() => p,
            other => {
                debug!(path = ?other, "no config file, using defaults");
                return Ok(Self::default());
            }
        };
        let raw = fs::read_to_string(&path).map_err(|e| ReadError::with_debug(&e))?;
        Self::from_ron(&raw, &path.display().to_string())
    }

    pub fn from_ron(s: &str, origin: &str) -> Result<Self, ServerError> {
        let config: Config = ron::from_str(s).map_err(|e| InvalidConfig::with_debug(origin, &e))?;
        config.currency()?;
        Ok(config)
    }

    pub fn storage_path(&self) -> PathBuf {
        self.storage_path.clone().unwrap_or_else(|| {
            project_dirs()
                .map(|d| d.data_dir().join(STORAGE_FILE_NAME))
                .unwrap_or_else(|| PathBuf::from(STORAGE_FILE_NAME))
        })
    }

    pub fn currency(&self) -> Result<Currency, ServerError> {
        Currency::from_code(self.currency.trim())
            .ok_or_else(|| InvalidCurrencyCode::new(&self.currency))
    }
}

impl AdviceConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.currency().unwrap(), Currency::LYD);
        assert_eq!(config.advice.timeout(), Some(Duration::from_secs(60)));
        assert!(config.storage_path().ends_with(STORAGE_FILE_NAME));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::from_ron(
            r#"(currency: "USD", advice: (model: "gemini-2.5-pro"))"#,
            "test",
        )
        .unwrap();
        assert_eq!(config.currency().unwrap(), Currency::USD);
        assert_eq!(config.advice.model, "gemini-2.5-pro");
        assert_eq!(config.advice.timeout_secs, Some(60));
        assert!(config.storage_path.is_none());
    }

    #[test]
    fn explicit_storage_path() {
        let config = Config::from_ron(r#"(storage_path: Some("/tmp/d.json"))"#, "test").unwrap();
        assert_eq!(config.storage_path(), PathBuf::from("/tmp/d.json"));
    }

    #[test]
    fn rejects_unknown_currency_and_bad_ron() {
        assert!(Config::from_ron(r#"(currency: "XXQ")"#, "test").is_err());
        assert!(Config::from_ron("(currency: ", "test").is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(dir.path().join("absent.ron").as_path())).unwrap();
        assert_eq!(config.currency, "LYD");
    }
}
