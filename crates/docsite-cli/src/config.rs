//! `docsite.toml` loading.
//!
//! ```toml
//! base_url = "https://docs.example.com"
//! include_drafts = false
//! log_filter = "docsite_kernel=debug"
//! ```
//!
//! Every key is optional. Command-line flags win over file values.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "docsite.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read file: {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid toml at {path}: {source}")]
    ParseToml {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocsiteConfig {
    pub base_url: Option<String>,
    pub include_drafts: bool,
    pub log_filter: Option<String>,
}

impl DocsiteConfig {
    pub fn parse(text: &str, path: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::ParseToml {
            path: path.to_string(),
            source,
        })
    }

    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_string(),
            source,
        })?;
        Self::parse(&text, path)
    }
}

/// Load the explicit config, or the default file when it exists.
///
/// An explicit path that cannot be read is an error; a missing default
/// file means defaults.
pub fn load(explicit: Option<&str>) -> Result<DocsiteConfig, ConfigError> {
    match explicit {
        Some(path) => DocsiteConfig::load(path),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => DocsiteConfig::load(DEFAULT_CONFIG_PATH),
        None => Ok(DocsiteConfig::default()),
    }
}

pub fn load_or_exit(explicit: Option<&str>) -> DocsiteConfig {
    load(explicit).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(2);
    })
}
