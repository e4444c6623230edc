//! Application configuration

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub listing: ListingConfig,
    pub compression: CompressionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Directory the session starts in (home directory when unset)
    pub start_dir: Option<PathBuf>,
    /// Print the welcome line on startup
    pub greeting: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            start_dir: None,
            greeting: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    pub show_hidden: bool,
    pub sort_by: SortBy,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            show_hidden: true,
            sort_by: SortBy::Kind,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressionConfig {
    /// Brotli quality, 0..=11
    pub quality: u32,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            quality: app_fs::DEFAULT_QUALITY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortBy {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "kind")]
    Kind,
}

impl AppConfig {
    /// Load configuration from `path`, or from the default location when `None`
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Self = toml::from_str(&content)?;
            tracing::info!("Configuration loaded from {:?}", config_path);
            Ok(config)
        } else {
            tracing::info!("Using default configuration");
            Ok(Self::default())
        }
    }

    /// Like [`AppConfig::load`], but an unreadable or malformed file only
    /// costs a warning and the defaults are used instead
    pub fn load_or_default(path: Option<&Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable configuration: {}", e);
            Self::default()
        })
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("com", "FileManager", "FileManager")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("./config.toml"))
    }

    /// Directory the session starts in.
    ///
    /// Falls back from the configured directory to the home directory, then
    /// to the process working directory, skipping anything that is not an
    /// existing directory.
    pub fn start_directory(&self) -> Option<PathBuf> {
        self.general
            .start_dir
            .clone()
            .into_iter()
            .chain(dirs_next::home_dir())
            .chain(std::env::current_dir().ok())
            .filter_map(|dir| app_fs::absolute(dir).ok())
            .find(|dir| dir.is_dir())
    }

    pub fn list_options(&self) -> app_fs::ListOptions {
        app_fs::ListOptions {
            show_hidden: self.listing.show_hidden,
            sort_by: match self.listing.sort_by {
                SortBy::None => app_fs::SortBy::None,
                SortBy::Name => app_fs::SortBy::Name,
                SortBy::Kind => app_fs::SortBy::Kind,
            },
        }
    }

    pub fn compression_quality(&self) -> u32 {
        self.compression.quality.min(app_fs::MAX_QUALITY)
    }
}
