use crate::geo::Coordinate;
use crate::location::PermissionState;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "config/config.toml";
pub const DEFAULT_BASE_URL: &str = "https://sushiro.chinatsu1124.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_FALLBACK_REGION: &str = "杭州";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub app: AppSection,
    pub logging: LoggingSection,
    #[serde(default)]
    pub backend: Option<BackendSection>,
    #[serde(default)]
    pub location: Option<LocationSection>,
    #[serde(default)]
    pub persist: Option<PersistSection>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSection {
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSection {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendSection {
    pub base_url: Option<String>,
    /// Request timeout in seconds (default: 10)
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LocationSection {
    /// Permission snapshot: "granted", "denied" or "unasked" (default)
    pub permission: Option<String>,
    /// The answer a permission prompt would receive (default: false)
    pub prompt_response: Option<bool>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Region used when location resolution cannot produce a match
    pub fallback_region: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PersistSection {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

pub fn load_default() -> Result<Config, ConfigError> {
    load_from_path(DEFAULT_CONFIG_PATH)
}

pub fn load_from_path(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}

impl Config {
    pub fn base_url(&self) -> &str {
        self.backend
            .as_ref()
            .and_then(|b| b.base_url.as_deref())
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .backend
            .as_ref()
            .and_then(|b| b.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    pub fn fallback_region(&self) -> &str {
        self.location
            .as_ref()
            .and_then(|l| l.fallback_region.as_deref())
            .filter(|region| !region.is_empty())
            .unwrap_or(DEFAULT_FALLBACK_REGION)
    }

    /// Permission snapshot declared in config. Unknown values read as Unasked.
    pub fn permission_state(&self) -> PermissionState {
        match self
            .location
            .as_ref()
            .and_then(|l| l.permission.as_deref())
        {
            Some("granted") => PermissionState::Granted,
            Some("denied") => PermissionState::Denied,
            _ => PermissionState::Unasked,
        }
    }

    pub fn prompt_response(&self) -> bool {
        self.location
            .as_ref()
            .and_then(|l| l.prompt_response)
            .unwrap_or(false)
    }

    /// Configured coordinate standing in for the platform location service.
    pub fn coordinate(&self) -> Option<Coordinate> {
        let location = self.location.as_ref()?;
        match (location.latitude, location.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
            _ => None,
        }
    }

    pub fn selection_path(&self) -> PathBuf {
        self.persist
            .as_ref()
            .and_then(|p| p.path.clone())
            .filter(|path| !path.as_os_str().is_empty())
            .unwrap_or_else(|| PathBuf::from(crate::persist::DEFAULT_SELECTION_PATH))
    }
}
