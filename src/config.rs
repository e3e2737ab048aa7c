//! User configuration
//!
//! Read from a TOML file with an `[auth]` table:
//!
//! ```toml
//! [auth]
//! api_token = "..."
//! user_email = "me@example.com"
//! lando_url = "https://lando.moz.tools"  # optional
//! ```
//!
//! The file is `$LANDO_CONFIG_PATH` if set, else `<config dir>/lando/lando.toml`.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "LANDO_CONFIG_PATH";

/// Lando instance used when the config does not name one
pub const DEFAULT_LANDO_URL: &str = "https://lando.moz.tools";

/// Settings needed to talk to Lando
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// API token sent as a bearer token
    pub api_token: String,
    /// Email of the submitting user
    pub user_email: String,
    /// Base URL of the Lando instance, without trailing slash
    pub lando_url: String,
}

#[derive(Deserialize)]
struct RawConfig {
    auth: Option<RawAuth>,
}

#[derive(Deserialize)]
struct RawAuth {
    api_token: Option<String>,
    user_email: Option<String>,
    lando_url: Option<String>,
}

impl Config {
    /// Load from the default location
    pub fn load() -> Result<Self> {
        let path = config_path(env::var_os(CONFIG_PATH_ENV))?;
        Self::load_from(&path)
    }

    /// Load from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.display());
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::parse(&contents)
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(contents)?;
        let auth = raw
            .auth
            .ok_or_else(|| Error::Config("missing [auth] table".to_string()))?;

        let api_token = require(auth.api_token, "auth.api_token")?;
        let user_email = require(auth.user_email, "auth.user_email")?;
        let lando_url = auth
            .lando_url
            .unwrap_or_else(|| DEFAULT_LANDO_URL.to_string());

        url::Url::parse(&lando_url)
            .map_err(|e| Error::Config(format!("invalid lando_url {lando_url:?}: {e}")))?;

        Ok(Self {
            api_token,
            user_email,
            lando_url: lando_url.trim_end_matches('/').to_string(),
        })
    }
}

fn require(value: Option<String>, key: &str) -> Result<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| Error::Config(format!("missing required setting `{key}`")))
}

/// Resolve the config file location from the environment override
fn config_path(env_override: Option<OsString>) -> Result<PathBuf> {
    if let Some(path) = env_override.filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    let dir = dirs::config_dir()
        .ok_or_else(|| Error::Config("config directory not found".to_string()))?;
    Ok(dir.join("lando").join("lando.toml"))
}
