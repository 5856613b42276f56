use std::fs;
use std::path::{Path, PathBuf};

pub mod user;

pub use user::UserConfig;

use crate::error::{AboutError, AboutResult};

pub struct AppConfig;

impl AppConfig {
    pub fn get_config_dir() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        let xdg_dir = home.join(".config").join("token-about");

        // Ensure it exists
        if !xdg_dir.exists() {
            let _ = fs::create_dir_all(&xdg_dir);
        }

        xdg_dir
    }

    pub fn get_config_path() -> PathBuf {
        Self::get_config_dir().join("config.toml")
    }

    pub fn get_theme_path() -> PathBuf {
        Self::get_config_dir().join("theme.toml")
    }

    pub fn get_log_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("token-about")
            .join("logs")
    }

    /// Load the default config, writing it out on first run.
    pub fn load() -> AboutResult<UserConfig> {
        Self::load_or_create(&Self::get_config_path())
    }

    pub(crate) fn load_or_create(path: &Path) -> AboutResult<UserConfig> {
        if path.exists() {
            return Self::load_from(path);
        }

        let config = UserConfig::default();
        if let Err(e) = fs::write(path, Self::default_toml()) {
            tracing::warn!(path = %path.display(), error = %e, "could not write default config");
        }
        Ok(config)
    }

    /// Load an explicit config file. A missing file is an error.
    pub fn load_from(path: &Path) -> AboutResult<UserConfig> {
        let content = fs::read_to_string(path).map_err(|source| AboutError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: UserConfig = toml::from_str(&content).map_err(|source| AboutError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()
    }

    /// Default config as TOML, for `--generate-config`
    pub fn default_toml() -> String {
        toml::to_string_pretty(&UserConfig::default()).unwrap_or_default()
    }
}
