//! Configuration management for the chat client
//!
//! Resolves the remote endpoint from built-in defaults, an optional
//! `client.toml`, `CHAT_CLIENT_*` environment variables and positional
//! command-line overrides, in that order of precedence.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 12345;
pub const DEFAULT_SHUTDOWN_GRACE_MS: u64 = 2000;

/// Client configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    /// Server host name or IP address
    /// Environment: CHAT_CLIENT_HOST
    pub host: String,

    /// Server port
    /// Environment: CHAT_CLIENT_PORT
    pub port: u16,

    /// How long to wait for the inbound relay after a local `bye`
    pub shutdown_grace_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            shutdown_grace_ms: DEFAULT_SHUTDOWN_GRACE_MS,
        }
    }
}

impl ClientConfig {
    /// Load configuration, letting `args` (`[host] [port]`) override everything else.
    pub fn load<I>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let host = args.next();
        let port = args.next();

        let settings = Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("shutdown_grace_ms", DEFAULT_SHUTDOWN_GRACE_MS as i64)?
            .add_source(File::with_name("client").required(false))
            .add_source(Environment::with_prefix("CHAT_CLIENT"))
            .set_override_option("host", host)?
            .set_override_option("port", port)?
            .build()?;

        let config: ClientConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.host.trim().is_empty() {
            return Err(config::ConfigError::Message("host cannot be empty".into()));
        }

        if self.port == 0 {
            return Err(config::ConfigError::Message("port cannot be 0".into()));
        }

        Ok(())
    }

    /// `host:port` as shown to the operator
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_millis(self.shutdown_grace_ms)
    }
}
