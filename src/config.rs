//! Preview server settings, read from an optional TOML file.
//!
//! ```toml
//! address = "127.0.0.1:8080"
//! log-level = "info"
//! locale = "en"
//! count = 1000
//!
//! [vars]
//! items = 20
//! size = [1, 4, 4, 1]
//! overflow = "last_page"
//!
//! [[vars.steps]]
//! width = 0
//! size = [1, 2, 2, 1]
//! ```

use std::{fs, path::Path};

use serde::Deserialize;

use crate::pagy::Vars;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    pub address: String,
    /// Default filter when `RUST_LOG` is unset.
    pub log_level: String,
    pub locale: String,
    /// Size of the synthetic collection the preview paginates.
    pub count: u64,
    pub vars: Vars,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            address: "0.0.0.0:8080".to_string(),
            log_level: "info".to_string(),
            locale: "en".to_string(),
            count: 1000,
            vars: Vars::default(),
        }
    }
}

impl Settings {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&text)
    }
}
