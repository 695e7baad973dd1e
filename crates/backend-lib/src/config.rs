// ============================
// crates/backend-lib/src/config.rs
// ============================
//! Configuration management.
use anyhow::{bail, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

/// Environment variable prefix, e.g. `MERGINGTON_BIND_ADDR`
pub const ENV_PREFIX: &str = "MERGINGTON_";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Server bind address
    pub bind_addr: SocketAddr,
    /// Log level
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// JSON file with the startup activities; built-in set when absent
    pub seed_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 8000)),
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            static_dir: PathBuf::from("static"),
            seed_file: None,
        }
    }
}

impl Settings {
    /// Start building settings from the defaults
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }

    /// Check that the settings are usable
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            bail!(
                "invalid log level '{}', expected one of {:?}",
                self.log_level,
                LOG_LEVELS
            );
        }
        if self.static_dir.as_os_str().is_empty() {
            bail!("static_dir must not be empty");
        }
        Ok(())
    }
}

/// Fluent constructor for [`Settings`]
#[derive(Debug, Default)]
pub struct SettingsBuilder {
    settings: Settings,
}

impl SettingsBuilder {
    pub fn bind_addr(mut self, addr: SocketAddr) -> Self {
        self.settings.bind_addr = addr;
        self
    }

    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.settings.log_level = level.into();
        self
    }

    pub fn log_format(mut self, format: LogFormat) -> Self {
        self.settings.log_format = format;
        self
    }

    pub fn static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.settings.static_dir = dir.into();
        self
    }

    pub fn seed_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings.seed_file = Some(path.into());
        self
    }

    pub fn build(self) -> Result<Settings> {
        self.settings.validate()?;
        Ok(self.settings)
    }
}

/// Load settings from `config.toml` and the environment
pub fn load_settings() -> Result<Settings> {
    load_settings_from("config.toml")
}

/// Load settings: defaults, then the given TOML file (if present), then `MERGINGTON_*` variables
pub fn load_settings_from(path: impl AsRef<Path>) -> Result<Settings> {
    let settings: Settings = Figment::from(Serialized::defaults(Settings::default()))
        .merge(Toml::file(path.as_ref()))
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()?;

    settings.validate()?;
    Ok(settings)
}
