//! Profile configuration for `wnc-api` consumers.
//!
//! TOML profiles, credential resolution (env + keyring + plaintext +
//! username/password), and translation to [`wnc_api::ClientConfig`]. The
//! API crate never touches files or the process environment; this crate is
//! where that happens.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use wnc_api::{ClientConfig, DEFAULT_USER_AGENT, basic_token};

/// Keyring service name; entries are `{profile}/token`.
pub const KEYRING_SERVICE: &str = "wnc";

/// Prefix for environment overrides (`WNC_DEFAULT_PROFILE`,
/// `WNC_DEFAULTS__TIMEOUT`, ...).
pub const ENV_PREFIX: &str = "WNC_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A profile value that can never produce a working client.
    #[error("profile field `{field}` rejected: {reason}")]
    Validation { field: String, reason: String },

    #[error("profile '{profile}' has no token, token_env, keyring entry or username/password")]
    NoCredentials { profile: String },

    #[error("profile '{profile}' is not defined")]
    UnknownProfile { profile: String },

    #[error("cannot encode config as TOML: {0}")]
    Serialization(#[from] toml::ser::Error),

    /// Malformed TOML or an environment override of the wrong type.
    #[error("cannot read config: {0}")]
    Figment(Box<figment::Error>),

    #[error("config file I/O: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Profile used when none is named explicitly.
    pub default_profile: Option<String>,

    #[serde(default)]
    pub defaults: Defaults,

    /// Named controller profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

impl Config {
    /// Look up a profile by name, or the default profile when `name` is `None`.
    pub fn profile<'a>(&'a self, name: Option<&'a str>) -> Result<(&'a str, &'a Profile), ConfigError> {
        let name = name
            .or(self.default_profile.as_deref())
            .unwrap_or("default");
        self.profiles
            .get_key_value(name)
            .map(|(k, v)| (k.as_str(), v))
            .ok_or_else(|| ConfigError::UnknownProfile {
                profile: name.into(),
            })
    }
}

/// Values applied to every profile that does not override them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default)]
    pub insecure: bool,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    pub user_agent: Option<String>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            insecure: false,
            timeout: default_timeout(),
            user_agent: None,
        }
    }
}

fn default_timeout() -> u64 {
    wnc_api::transport::DEFAULT_TIMEOUT.as_secs()
}

/// A named controller profile.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Profile {
    /// Controller address: `host[:port]` or a full `https://` base.
    pub controller: String,

    /// Pre-encoded Basic token (plaintext; prefer keyring or env var).
    pub token: Option<String>,

    /// Environment variable name containing the token.
    pub token_env: Option<String>,

    /// Username, encoded together with `password` when no token is set.
    pub username: Option<String>,

    /// Password (plaintext; prefer keyring).
    pub password: Option<String>,

    /// Override insecure TLS setting.
    pub insecure: Option<bool>,

    /// Override timeout (seconds).
    pub timeout: Option<u64>,

    pub user_agent: Option<String>,
}

// ── Config file path ────────────────────────────────────────────────

/// `config.toml` in the platform config directory (`~/.config/wnc` on
/// Linux). Falls back to `$HOME/.config/wnc` when no home directory can
/// be determined by `directories`, and to `./.config/wnc` without `$HOME`.
pub fn config_path() -> PathBuf {
    let dir = ProjectDirs::from("net", "wnc", "wnc").map_or_else(
        || {
            std::env::var_os("HOME")
                .map_or_else(|| PathBuf::from("."), PathBuf::from)
                .join(".config")
                .join("wnc")
        },
        |dirs| dirs.config_dir().to_path_buf(),
    );
    dir.join("config.toml")
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(config_path())
}

/// Load from an explicit file. A missing file yields the defaults.
pub fn load_config_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading config");

    let config: Config = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Write `cfg` to [`config_path`].
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, config_path())
}

/// Write `cfg` as pretty TOML to `path`, creating missing directories.
///
/// Written to a sibling `.partial` file first, then renamed over `path`.
pub fn save_config_to(cfg: &Config, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let rendered = toml::to_string_pretty(cfg)?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    let staging = path.with_extension("toml.partial");
    std::fs::write(&staging, rendered)?;
    std::fs::rename(&staging, path)?;

    debug!(path = %path.display(), profiles = cfg.profiles.len(), "saved config");
    Ok(())
}

// ── Credential resolution ───────────────────────────────────────────

/// Resolve the Basic token for a profile.
///
/// Order: `token_env` variable, system keyring, plaintext `token`, then
/// `username` + `password` encoded on the spot.
pub fn resolve_token(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    let from_env = profile
        .token_env
        .as_deref()
        .and_then(|var| std::env::var(var).ok());

    let (source, token) = if let Some(token) = from_env {
        ("env", SecretString::from(token))
    } else if let Some(token) = keyring_token(profile_name) {
        ("keyring", SecretString::from(token))
    } else if let Some(token) = &profile.token {
        ("config", SecretString::from(token.as_str()))
    } else if let (Some(user), Some(pw)) = (&profile.username, &profile.password) {
        ("password", basic_token(user, &SecretString::from(pw.as_str())))
    } else {
        return Err(ConfigError::NoCredentials {
            profile: profile_name.into(),
        });
    };

    debug!(profile = profile_name, source, "resolved token");
    Ok(token)
}

/// The `{profile}/token` entry under [`KEYRING_SERVICE`], if readable.
fn keyring_token(profile_name: &str) -> Option<String> {
    keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/token"))
        .and_then(|entry| entry.get_password())
        .ok()
}

/// Build a validated `ClientConfig` from a profile and the global defaults.
pub fn profile_to_client_config(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
) -> Result<ClientConfig, ConfigError> {
    if profile.controller.trim().is_empty() {
        return Err(ConfigError::Validation {
            field: "controller".into(),
            reason: format!("profile '{profile_name}' has no controller address"),
        });
    }

    let token = resolve_token(profile, profile_name)?;

    let mut config = ClientConfig::new(profile.controller.trim(), token);
    config.insecure_skip_verify = profile.insecure.unwrap_or(defaults.insecure);
    config.timeout = Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout));
    config.user_agent = profile
        .user_agent
        .clone()
        .or_else(|| defaults.user_agent.clone())
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());

    config
        .validate()
        .map_err(|e| match e {
            wnc_api::Error::InvalidConfiguration { field, reason } => ConfigError::Validation {
                field: field.into(),
                reason,
            },
            other => ConfigError::Validation {
                field: "profile".into(),
                reason: other.to_string(),
            },
        })?;
    Ok(config)
}
