//! Layered application configuration.
//!
//! Precedence, lowest to highest: built-in defaults, YAML file (when given),
//! environment (`CALC__` prefix, `__` separator), CLI overrides.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// CLI arguments that flow into the config merge logic.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub port: Option<u16>,
    pub verbose: u8,
    pub print_config: bool,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:8000".to_owned()
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LoggingConfig {
    /// Filter directive for the console layer (`error`..`trace`, or any
    /// `EnvFilter` expression).
    pub level: String,
    /// Optional log file. When set, a daily-rotated file layer is added.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_owned()
}

/// REST API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ApiConfig {
    /// Serve the OpenAPI document at `/api-docs/openapi.json`.
    pub enable_docs: bool,
    /// Attach a permissive CORS layer.
    pub cors_enabled: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            enable_docs: true,
            cors_enabled: false,
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub api: ApiConfig,
}

impl AppConfig {
    /// Load configuration from defaults, an optional YAML file, and the
    /// environment.
    ///
    /// # Errors
    /// Returns an error when the file or environment contain unknown keys or
    /// values that do not deserialize.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        let config = figment
            .merge(Env::prefixed("CALC__").split("__"))
            .extract()
            .context("failed to load configuration")?;
        Ok(config)
    }

    /// Apply CLI overrides on top of the loaded configuration.
    ///
    /// # Errors
    /// Returns an error when a port override is requested but the configured
    /// bind address cannot be parsed.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) -> anyhow::Result<()> {
        if let Some(port) = args.port {
            let mut addr = self.bind_addr()?;
            addr.set_port(port);
            self.server.bind_addr = addr.to_string();
        }
        if args.verbose > 0 {
            self.logging.level = match args.verbose {
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
            .to_owned();
        }
        Ok(())
    }

    /// Parse the configured bind address.
    ///
    /// # Errors
    /// Returns an error when `server.bind_addr` is not a valid socket address.
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        self.server
            .bind_addr
            .parse()
            .with_context(|| format!("invalid bind address '{}'", self.server.bind_addr))
    }

    /// Render the effective configuration as YAML.
    ///
    /// # Errors
    /// Returns an error when serialization fails.
    pub fn to_yaml(&self) -> anyhow::Result<String> {
        serde_yaml::to_string(self).context("failed to serialize configuration")
    }
}
