use std::{net::SocketAddr, path::Path, time::Duration};

use anyhow::Context;
use config::{Config, Environment, File};
use serde::Deserialize;

pub const DEFAULT_SETTINGS_FILE: &str = "server.toml";

/// Layered as defaults, then the optional settings file, then `APP__*`
/// environment variables (`APP__BIND_ADDR`, `APP__CONTACT_DELAY_MS`,
/// `APP__LOG_FILTER`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub bind_addr: String,
    pub contact_delay_ms: u64,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".into(),
            contact_delay_ms: 1500,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    pub fn contact_delay(&self) -> Duration {
        Duration::from_millis(self.contact_delay_ms)
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        self.bind_addr
            .trim()
            .parse()
            .with_context(|| format!("invalid bind address '{}'", self.bind_addr))
    }
}

pub fn load_settings() -> anyhow::Result<Settings> {
    load_settings_from(Path::new(DEFAULT_SETTINGS_FILE))
}

pub fn load_settings_from(path: &Path) -> anyhow::Result<Settings> {
    Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .with_context(|| format!("failed to read settings from '{}'", path.display()))?
        .try_deserialize()
        .context("server settings are malformed")
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
