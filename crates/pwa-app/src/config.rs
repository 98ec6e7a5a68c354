//! Application configuration.
//!
//! Every section falls back to its defaults, so a partial file is valid.
//!
//! ```toml
//! [search]
//! debounce_ms = 250
//! query_param = "s"
//!
//! [review]
//! max_length = 5000
//!
//! [product]
//! ttl_secs = 3600
//!
//! [logging]
//! level = "info"
//! format = "compact"
//! ```

use std::path::Path;

use pwa_product::VariantCacheConfig;
use pwa_review::ReviewConfig;
use pwa_search::SearchConfig;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::logging::LogSettings;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Search overlay settings.
    pub search: SearchConfig,

    /// Review form settings.
    pub review: ReviewConfig,

    /// Product variant cache settings.
    pub product: VariantCacheConfig,

    /// Logging settings.
    pub logging: LogSettings,
}

impl AppConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load a configuration file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            operation: "read",
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a configuration file, falling back to defaults.
    ///
    /// A missing file is not an error. A broken file is logged and ignored.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(config) => config,
            Err(error) => {
                tracing::warn!(%error, reason = %error.user_message(), "using default config");
                Self::default()
            }
        }
    }

    /// Save the configuration as TOML.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                operation: "create directory for",
                path: path.to_path_buf(),
                source,
            })?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|source| ConfigError::Serialize { source })?;

        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            operation: "write",
            path: path.to_path_buf(),
            source,
        })
    }
}
