use crate::about::TRUNCATE_CHARACTER_COUNT;
use crate::error::{AboutError, AboutResult};
use serde::{Deserialize, Serialize};

/// User-editable configuration (ReadOnly by App after load)
/// stored in `config.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default = "default_truncate_limit")]
    pub truncate_limit: usize,
    /// Filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub keys: crate::app::keys::KeyConfig,
}

fn default_truncate_limit() -> usize {
    TRUNCATE_CHARACTER_COUNT
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            truncate_limit: default_truncate_limit(),
            log_level: default_log_level(),
            keys: crate::app::keys::KeyConfig::default(),
        }
    }
}

impl UserConfig {
    pub fn validate(self) -> AboutResult<Self> {
        if self.truncate_limit == 0 {
            return Err(AboutError::InvalidLimit(self.truncate_limit));
        }
        Ok(self)
    }
}
