use anyhow::{Context, Result};
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_FILE_NAME, INVOKE_TIMEOUT_SECS, LIST_TIMEOUT_SECS,
};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP client configuration
    #[serde(default)]
    pub http: HttpConfig,

    /// Stored credentials, one entry per gateway
    #[serde(default)]
    pub auths: Vec<AuthEntry>,
}

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Timeout for function invocations in seconds (0 disables it)
    pub invoke_timeout_secs: u64,
    /// Timeout for listing functions in seconds (0 disables it)
    pub list_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            invoke_timeout_secs: INVOKE_TIMEOUT_SECS,
            list_timeout_secs: LIST_TIMEOUT_SECS,
        }
    }
}

/// Credentials for a single gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthEntry {
    /// Gateway URL the credentials belong to
    pub gateway: String,
    /// Kind of credentials stored in `token`
    pub auth: AuthKind,
    /// Base64 `user:password` for basic auth, bearer token for oauth2
    pub token: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthKind {
    Basic,
    Oauth2,
}

/// Load configuration from multiple sources
///
/// Later sources win: defaults, the global config file, an explicit
/// `--config` file, then `FAASCTL_` environment variables.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    if let Some(global_config) = global_config_path() {
        if global_config.exists() {
            figment = figment.merge(Toml::file(&global_config));
        }
    }

    if let Some(path) = explicit {
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        figment = figment.merge(Toml::file(path));
    }

    // e.g. FAASCTL_HTTP__INVOKE_TIMEOUT_SECS=30
    figment = figment.merge(Env::prefixed(CONFIG_ENV_PREFIX).split("__"));

    figment
        .extract()
        .context("Failed to load configuration")
}

/// Path of the per-user configuration file, if a config directory exists
pub fn global_config_path() -> Option<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "faasctl") {
        return Some(proj_dirs.config_dir().join(CONFIG_FILE_NAME));
    }

    // Fallback to home directory
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .ok()
        .map(|home| {
            PathBuf::from(home)
                .join(".config")
                .join("faasctl")
                .join(CONFIG_FILE_NAME)
        })
}
