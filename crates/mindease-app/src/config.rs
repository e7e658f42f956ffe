use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

/// Overrides [`AppConfig::store_path`] when set.
pub const STORE_PATH_ENV: &str = "MINDEASE_STORE";

const APP_DIR: &str = "com.mindease.app";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Schema version. Missing or 0 loads as the first shape.
    #[serde(default)]
    pub config_version: u32,
    /// File backing the local key-value store.
    pub store_path: PathBuf,
    /// Default tracing filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    pub created_at: jiff::Timestamp,
}

impl AppConfig {
    pub fn new(store_path: PathBuf) -> Self {
        Self {
            config_version: CURRENT_VERSION,
            store_path,
            log_filter: default_log_filter(),
            created_at: jiff::Timestamp::now(),
        }
    }

    /// Defaults for a first run: the store lives in the platform data dir.
    pub fn with_defaults() -> eyre::Result<Self> {
        let base = dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
        Ok(Self::new(base.join(APP_DIR).join("store.json")))
    }

    /// The store path after applying the [`STORE_PATH_ENV`] override.
    pub fn effective_store_path(&self) -> PathBuf {
        self.store_path_with_override(std::env::var_os(STORE_PATH_ENV))
    }

    /// `store_override` wins unless it is unset or empty.
    pub fn store_path_with_override(&self, store_override: Option<OsString>) -> PathBuf {
        store_override
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| self.store_path.clone())
    }
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join(APP_DIR))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the config from its platform location, creating and saving the
/// defaults on first run.
pub fn load_or_init() -> eyre::Result<AppConfig> {
    let path = config_path()?;
    if path.exists() {
        return load_config(&path);
    }
    let config = AppConfig::with_defaults()?;
    save_config(&path, &config)?;
    Ok(config)
}

pub fn load_config(path: &Path) -> eyre::Result<AppConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let mut config: AppConfig = serde_json::from_value(migrated)?;
    config.config_version = CURRENT_VERSION;
    Ok(config)
}

/// Bring a raw config up to [`CURRENT_VERSION`] before deserializing.
///
/// Version 1 is the first shape, so there is nothing to transform yet; a
/// config written by a newer build is refused. Future shape changes add a
/// step here keyed on `from_version`.
pub fn migrate(json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update MindEase."
        ));
    }
    if !json.is_object() {
        return Err(eyre::eyre!("config is not a JSON object"));
    }
    Ok(json)
}

pub fn save_config(path: &Path, config: &AppConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
