use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

// =============================================================================
// Storefront constants
// =============================================================================

/// Default storefront lookup host
pub const DEFAULT_LOOKUP_BASE_URL: &str = "https://itunes.apple.com";

/// Version assumed when the host cannot report one and nothing was skipped yet
pub const DEFAULT_VERSION: &str = "1.0";

/// Preference key holding the last version the user chose to skip
pub const SKIPPED_VERSION_KEY: &str = "skippedVersion";

const APP_DIR_NAME: &str = "store-update-check";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Bundle identifier was not provided")]
    MissingBundleIdentifier,

    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Update check configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckConfig {
    /// Base URL of the storefront lookup API
    pub lookup_base_url: String,
    /// Storefront country code appended to the lookup
    pub country: Option<String>,
    /// Detail page opened on "Update"; falls back to the listing's own URL
    pub store_url: Option<String>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            lookup_base_url: DEFAULT_LOOKUP_BASE_URL.to_string(),
            country: None,
            store_url: None,
        }
    }
}

impl CheckConfig {
    /// Loads a JSON config file; missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Values supplied by the host application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEnvironment {
    pub bundle_identifier: String,
    pub installed_version: String,
}

impl HostEnvironment {
    /// A missing bundle identifier is a startup fault; a missing installed
    /// version falls back to [`DEFAULT_VERSION`].
    pub fn new(
        bundle_identifier: Option<String>,
        installed_version: Option<String>,
    ) -> Result<Self, ConfigError> {
        let bundle_identifier = bundle_identifier
            .filter(|id| !id.trim().is_empty())
            .ok_or(ConfigError::MissingBundleIdentifier)?;

        Ok(Self {
            bundle_identifier,
            installed_version: installed_version.unwrap_or_else(|| DEFAULT_VERSION.to_string()),
        })
    }
}

/// Returns the path to the data directory.
/// Uses $XDG_DATA_HOME/store-update-check if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/store-update-check,
/// or ./store-update-check if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the preference database.
pub fn db_path() -> PathBuf {
    data_dir().join("preferences.db")
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("store-update-check.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join(APP_DIR_NAME)
}
