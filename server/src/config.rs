//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
    #[error("SITE_ROOT must not be empty")]
    EmptySiteRoot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Overrides the Leptos `site-root` when set.
    pub site_root: Option<String>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `SITE_ROOT`: directory holding the built `pkg/` assets
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `PORT` is not a valid port number or
    /// `SITE_ROOT` is set but blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value: raw.clone(), source })?,
            Err(_) => DEFAULT_PORT,
        };

        let site_root = match std::env::var("SITE_ROOT") {
            Ok(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptySiteRoot),
            Ok(raw) => Some(raw.trim().to_owned()),
            Err(_) => None,
        };

        Ok(Self { port, site_root })
    }
}
