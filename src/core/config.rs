// src/core/config.rs
use crate::core::constants::{
    DEFAULT_CONTAINER_CLASS, DEFAULT_DISMISS_MS, DEFAULT_MESSAGE_KIND, DEFAULT_TOGGLE_ID,
    MAX_DISMISS_MS, MIN_DISMISS_MS,
};
use crate::core::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

// TOML Configuration Structure
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    general: GeneralConfig,
    #[serde(default)]
    page: PageConfig,
    #[serde(default)]
    messages: MessagesConfig,
    #[serde(default)]
    catalog: CatalogConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeneralConfig {
    #[serde(default = "default_log_level")]
    log_level: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct PageConfig {
    #[serde(default = "default_toggle_id")]
    toggle_id: String,
    #[serde(default = "default_container_class")]
    container_class: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct MessagesConfig {
    #[serde(default = "default_dismiss_ms")]
    dismiss_after_ms: u64,
    #[serde(default = "default_kind")]
    default_kind: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogConfig {
    #[serde(default)]
    dir: String,
}

// Default Functions
fn default_log_level() -> String {
    "info".into()
}
fn default_toggle_id() -> String {
    DEFAULT_TOGGLE_ID.into()
}
fn default_container_class() -> String {
    DEFAULT_CONTAINER_CLASS.into()
}
fn default_dismiss_ms() -> u64 {
    DEFAULT_DISMISS_MS
}
fn default_kind() -> String {
    DEFAULT_MESSAGE_KIND.into()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            toggle_id: default_toggle_id(),
            container_class: default_container_class(),
        }
    }
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            dismiss_after_ms: default_dismiss_ms(),
            default_kind: default_kind(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    config_path: Option<PathBuf>,
    pub log_level: String,
    pub toggle_id: String,
    pub container_class: String,
    pub dismiss_after: Duration,
    pub default_kind: String,
    /// Directory holding `zh.json`/`en.json`; `None` uses the embedded catalog.
    pub catalog_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_file_contents(ConfigFile::default(), None)
    }
}

impl Config {
    /// First config found on the search path, or the bundled defaults.
    pub async fn load() -> Result<Self> {
        for path in crate::setup::setup_toml::get_config_paths() {
            if path.exists() {
                match Self::from_file(&path).await {
                    Ok(config) => return Ok(config),
                    Err(e) => log::warn!("Skipping config {}: {}", path.display(), e),
                }
            }
        }

        log::debug!("No config file found, using defaults");
        Self::from_toml(crate::setup::setup_toml::DEFAULT_CONFIG)
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(AppError::Io)?;
        let file = Self::parse(&content)?;
        let config = Self::from_file_contents(file, Some(path.as_ref().to_path_buf()));
        log::debug!("Config loaded from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(Self::from_file_contents(Self::parse(content)?, None))
    }

    fn parse(content: &str) -> Result<ConfigFile> {
        toml::from_str(content).map_err(|e| AppError::Validation(format!("TOML: {}", e)))
    }

    fn from_file_contents(file: ConfigFile, config_path: Option<PathBuf>) -> Self {
        let dismiss_ms = Self::clamp(
            "messages.dismiss_after_ms",
            file.messages.dismiss_after_ms,
            MIN_DISMISS_MS,
            MAX_DISMISS_MS,
        );
        let catalog_dir = match file.catalog.dir.trim() {
            "" => None,
            dir => Some(PathBuf::from(dir)),
        };

        Self {
            config_path,
            log_level: file.general.log_level,
            toggle_id: file.page.toggle_id,
            container_class: file.page.container_class,
            dismiss_after: Duration::from_millis(dismiss_ms),
            default_kind: file.messages.default_kind,
            catalog_dir,
        }
    }

    fn clamp(name: &str, value: u64, min: u64, max: u64) -> u64 {
        let clamped = value.clamp(min, max);
        if clamped != value {
            log::warn!("{} = {} outside {}..={}, using {}", name, value, min, max, clamped);
        }
        clamped
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_bundled_toml() {
        let bundled = Config::from_toml(crate::setup::setup_toml::DEFAULT_CONFIG).unwrap();
        let default = Config::default();

        assert_eq!(bundled.toggle_id, default.toggle_id);
        assert_eq!(bundled.container_class, "container");
        assert_eq!(bundled.dismiss_after, Duration::from_millis(3000));
        assert_eq!(bundled.default_kind, "success");
        assert!(bundled.catalog_dir.is_none());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = Config::from_toml("[page]\ntoggle_id = \"langBtn\"\n").unwrap();
        assert_eq!(config.toggle_id, "langBtn");
        assert_eq!(config.container_class, "container");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn out_of_range_delay_is_clamped() {
        let config = Config::from_toml("[messages]\ndismiss_after_ms = 5\n").unwrap();
        assert_eq!(config.dismiss_after, Duration::from_millis(MIN_DISMISS_MS));

        let config = Config::from_toml("[messages]\ndismiss_after_ms = 600000\n").unwrap();
        assert_eq!(config.dismiss_after, Duration::from_millis(MAX_DISMISS_MS));

        let config = Config::from_toml("[messages]\ndismiss_after_ms = 1500\n").unwrap();
        assert_eq!(config.dismiss_after, Duration::from_millis(1500));
    }

    #[test]
    fn catalog_dir_is_optional() {
        let config = Config::from_toml("[catalog]\ndir = \"i18n\"\n").unwrap();
        assert_eq!(config.catalog_dir, Some(PathBuf::from("i18n")));
    }

    #[test]
    fn invalid_toml_is_validation_error() {
        assert!(matches!(
            Config::from_toml("[page"),
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn from_file_records_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bilingual.toml");
        std::fs::write(&path, "[messages]\ndefault_kind = \"info\"\n").unwrap();

        let config = Config::from_file(&path).await.unwrap();
        assert_eq!(config.default_kind, "info");
        assert_eq!(config.config_path(), Some(path.as_path()));
    }
}
