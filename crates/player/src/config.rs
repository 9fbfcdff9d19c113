//! Client configuration loaded from the environment
//!
//! Desktop builds read variables at runtime (after `.env` is loaded by
//! `main`). Browser builds have no process environment, so the API URL is
//! baked in at compile time instead.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::infrastructure::http_client::DEFAULT_API_URL;

pub const API_URL_VAR: &str = "LIFESIM_API_URL";
pub const SHELL_VAR: &str = "LIFESIM_SHELL";
pub const STORAGE_PATH_VAR: &str = "LIFESIM_STORAGE_PATH";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {reason}")]
    InvalidUrl { var: &'static str, reason: String },

    #[error("{var} must use http or https, got {scheme}")]
    UnsupportedScheme { var: &'static str, scheme: String },

    #[error("unknown shell kind: {0}")]
    UnknownShell(String),
}

/// Layout shell around the screens
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShellKind {
    #[default]
    Desktop,
    Mobile,
}

impl FromStr for ShellKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(Self::Desktop),
            "mobile" => Ok(Self::Mobile),
            other => Err(ConfigError::UnknownShell(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL without trailing slash
    pub api_url: String,
    pub shell: ShellKind,
    /// Desktop token file override
    pub storage_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            shell: ShellKind::default(),
            storage_path: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from compile-time variables
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match key {
            API_URL_VAR => option_env!("LIFESIM_API_URL").map(str::to_string),
            SHELL_VAR => option_env!("LIFESIM_SHELL").map(str::to_string),
            _ => None,
        })
    }

    /// Build from an arbitrary variable source; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_url = match get(API_URL_VAR) {
            Some(raw) => validate_api_url(&raw)?,
            None => DEFAULT_API_URL.to_string(),
        };

        let shell = match get(SHELL_VAR) {
            Some(raw) => raw.parse()?,
            None => ShellKind::default(),
        };

        Ok(Self {
            api_url,
            shell,
            storage_path: get(STORAGE_PATH_VAR).map(PathBuf::from),
        })
    }
}

fn validate_api_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidUrl {
        var: API_URL_VAR,
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        scheme => Err(ConfigError::UnsupportedScheme {
            var: API_URL_VAR,
            scheme: scheme.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = ClientConfig::from_lookup(lookup(&[])).expect("config");
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api_url, "http://localhost:8000");
    }

    #[test]
    fn api_url_trailing_slash_trimmed() {
        let config = ClientConfig::from_lookup(lookup(&[(API_URL_VAR, "https://game.test/")]))
            .expect("config");
        assert_eq!(config.api_url, "https://game.test");
    }

    #[test]
    fn invalid_api_url_is_rejected() {
        let err = ClientConfig::from_lookup(lookup(&[(API_URL_VAR, "not a url")]))
            .expect_err("invalid");
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));

        let err = ClientConfig::from_lookup(lookup(&[(API_URL_VAR, "ftp://game.test")]))
            .expect_err("scheme");
        assert_eq!(
            err,
            ConfigError::UnsupportedScheme {
                var: API_URL_VAR,
                scheme: "ftp".to_string()
            }
        );
    }

    #[test]
    fn shell_and_storage_path_are_read() {
        let config = ClientConfig::from_lookup(lookup(&[
            (SHELL_VAR, " Mobile "),
            (STORAGE_PATH_VAR, "/tmp/lifesim.json"),
        ]))
        .expect("config");
        assert_eq!(config.shell, ShellKind::Mobile);
        assert_eq!(config.storage_path, Some(PathBuf::from("/tmp/lifesim.json")));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = ClientConfig::from_lookup(lookup(&[(API_URL_VAR, "  "), (SHELL_VAR, "")]))
            .expect("config");
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn unknown_shell_is_an_error() {
        let err = ClientConfig::from_lookup(lookup(&[(SHELL_VAR, "tablet")])).expect_err("shell");
        assert_eq!(err, ConfigError::UnknownShell("tablet".to_string()));
    }
}
