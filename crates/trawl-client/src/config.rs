//! Client configuration.
//!
//! Configuration is read from a TOML file located, in order of precedence,
//! at an explicit path, at `$TRAWL_CONFIG`, or at
//! `<config dir>/trawl/config.toml`. Missing fields take their defaults and a
//! missing default file yields the default configuration. `$TRAWL_URL`
//! overrides the service URL after loading.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "TRAWL_CONFIG";

/// Environment variable overriding [`ClientConfig::url`].
pub const URL_ENV: &str = "TRAWL_URL";

/// Connection settings for a search service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the service.
    #[serde(default = "default_url")]
    pub url: String,

    /// TCP connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,

    /// Whole-request timeout in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Bearer token sent with every request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

fn default_url() -> String {
    "http://localhost:9200".to_string()
}

fn default_connect_timeout_ms() -> u64 {
    5_000
}

fn default_request_timeout_ms() -> u64 {
    30_000
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            connect_timeout_ms: default_connect_timeout_ms(),
            request_timeout_ms: default_request_timeout_ms(),
            auth_token: None,
        }
    }
}

impl ClientConfig {
    /// Creates a default configuration pointing at `url`.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Loads the configuration and applies environment overrides.
    ///
    /// An explicit `path` must exist. A path found through `$TRAWL_CONFIG` or
    /// the platform default is used only if the file exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::resolve_config_path(None) {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => {
                    log::debug!("no config file found, using defaults");
                    Self::default()
                }
            },
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Parses a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Returns the config file that [`load`](Self::load) would read.
    ///
    /// `None` when no explicit path is given, `$TRAWL_CONFIG` is unset, and
    /// the platform has no config directory.
    pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        Self::default_config_path()
    }

    /// `<config dir>/trawl/config.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("trawl").join("config.toml"))
    }

    /// Applies environment overrides looked up through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> &mut Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(URL_ENV).filter(|url| !url.is_empty()) {
            log::debug!("url overridden by {URL_ENV}");
            self.url = url;
        }
        self
    }

    /// Checks that the URL is an absolute `http` or `https` URL.
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.url)
            .map_err(|e| Error::config(format!("invalid url '{}': {e}", self.url)))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(Error::config(format!(
                "unsupported url scheme '{other}' in '{}'",
                self.url
            ))),
        }
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Writes the configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
        }
        std::fs::write(path, self.to_toml_string()?).map_err(|e| Error::io_with_path(e, path))
    }
}
