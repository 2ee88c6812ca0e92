//! Configuration loading
//!
//! Bootstrap settings come from a TOML file. Command-line flags and environment
//! variables are layered on top by the binary (see `ConfigOverrides`).
//!
//! # Settings Sources Priority
//!
//! 1. Command-line arguments
//! 2. Environment variables (ECOSCAN_*)
//! 3. TOML configuration file
//! 4. Built-in defaults (code constants)

use crate::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File name looked up inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Bootstrap configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// SQLite file for the scan history table
    ///
    /// Persistence is disabled when absent.
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub external: ExternalLookupConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// External product data source settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExternalLookupConfig {
    /// Query the external food database before generating products
    #[serde(default = "default_external_enabled")]
    pub enabled: bool,

    /// Base URL of the Open Food Facts instance
    #[serde(default = "default_external_base_url")]
    pub base_url: String,

    /// Upper bound on a single lookup, in milliseconds
    #[serde(default = "default_external_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum number of external products kept per lookup
    #[serde(default = "default_external_max_results")]
    pub max_results: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_external_enabled() -> bool {
    true
}

fn default_external_base_url() -> String {
    "https://world.openfoodfacts.org".to_string()
}

fn default_external_timeout_ms() -> u64 {
    5000
}

fn default_external_max_results() -> usize {
    3
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_path: None,
            logging: LoggingConfig::default(),
            external: ExternalLookupConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for ExternalLookupConfig {
    fn default() -> Self {
        Self {
            enabled: default_external_enabled(),
            base_url: default_external_base_url(),
            timeout_ms: default_external_timeout_ms(),
            max_results: default_external_max_results(),
        }
    }
}

impl ExternalLookupConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults => write!(f, "built-in defaults"),
        }
    }
}

/// Command-line / environment overrides applied after the TOML file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database_path: Option<PathBuf>,
    pub log_level: Option<String>,
    /// Force external lookups off
    pub offline: bool,
}

impl TomlConfig {
    /// Load configuration
    ///
    /// An explicitly named file must exist and parse. Without one, the platform
    /// default location is tried; if nothing is there the built-in defaults are
    /// used.
    pub fn load(explicit_path: Option<&Path>) -> Result<(Self, ConfigSource)> {
        if let Some(path) = explicit_path {
            let config = Self::from_file(path)?;
            return Ok((config, ConfigSource::File(path.to_path_buf())));
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                let config = Self::from_file(&path)?;
                Ok((config, ConfigSource::File(path)))
            }
            _ => Ok((Self::default(), ConfigSource::Defaults)),
        }
    }

    /// Read and validate a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides, returning the merged configuration
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self> {
        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(path) = overrides.database_path {
            self.database_path = Some(path);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.offline {
            self.external.enabled = false;
        }
        self.validate()?;
        Ok(self)
    }

    /// `host:port` string suitable for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(Error::Config("host must not be empty".to_string()));
        }
        if self.port == 0 {
            return Err(Error::Config("port must be non-zero".to_string()));
        }
        if self.external.timeout_ms == 0 {
            return Err(Error::Config("external.timeout_ms must be non-zero".to_string()));
        }
        if self.external.max_results == 0 {
            return Err(Error::Config("external.max_results must be non-zero".to_string()));
        }
        Ok(())
    }
}

/// Platform config file location (`<config dir>/ecoscan/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("ecoscan").join(CONFIG_FILE_NAME))
}
