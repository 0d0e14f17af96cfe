mod settings;

pub use settings::{ApiSettings, ReportSettings, Settings};

use crate::error::{ReportError, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub const API_KEY_VAR: &str = "API_KEY";
pub const API_URL_VAR: &str = "API_URL";

/// Credentials and endpoint for the billing API
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_key: String,
    pub api_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Read `API_KEY` and `API_URL` from the process environment
    pub fn from_env(timeout: Duration) -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok(), timeout)
    }

    /// Build the config from an arbitrary variable lookup.
    /// Unset and empty values are both treated as missing.
    pub fn from_lookup<F>(lookup: F, timeout: Duration) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ReportError::MissingEnv(name))
        };

        let api_key = require(API_KEY_VAR)?;
        let api_url = require(API_URL_VAR)?;

        Ok(Self {
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }
}

/// Platform config directory (e.g. ~/.config/btw-report)
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "btw-report").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Default settings file location, if the platform has a config directory
pub fn default_settings_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Load settings from an explicit path, or from the default location when
/// it exists. Falls back to built-in defaults otherwise.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ReportError::ConfigFileNotFound(p.to_path_buf()));
            }
            p.to_path_buf()
        }
        None => match default_settings_file() {
            Some(p) if p.exists() => p,
            _ => {
                debug!("no settings file found, using defaults");
                return Ok(Settings::default());
            }
        },
    };

    debug!(path = %path.display(), "loading settings");
    let content = fs::read_to_string(&path)?;
    toml::from_str(&content).map_err(|e| ReportError::ConfigParse { path, source: e })
}
