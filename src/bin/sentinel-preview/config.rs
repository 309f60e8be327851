//! Preview server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PREVIEW_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PREVIEW_PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewConfig {
    pub port: u16,
    /// Static directory served at `/assets`, if any.
    pub assets_dir: Option<PathBuf>,
}

impl PreviewConfig {
    /// Build typed preview config from environment variables.
    ///
    /// Optional:
    /// - `PREVIEW_PORT`: default 3000
    /// - `PREVIEW_ASSETS_DIR`: no static files when absent
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PREVIEW_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PREVIEW_PORT,
        };
        let assets_dir = lookup("PREVIEW_ASSETS_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { port, assets_dir })
    }
}
