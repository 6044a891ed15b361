//! Runtime configuration from the environment. Every value has a default so a
//! bare `teamcomp serve` works from the repository root.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::data::{DEFAULT_CATALOG_PATH, DEFAULT_MUTATOR};
use crate::simulation::DEFAULT_TIMEOUT;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_SIMULATOR_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: String,
    pub catalog_path: PathBuf,
    pub mutator: String,
    pub simulator_url: String,
    pub simulator_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            mutator: DEFAULT_MUTATOR.to_string(),
            simulator_url: DEFAULT_SIMULATOR_URL.to_string(),
            simulator_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; empty values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            bind_addr: get("TEAMCOMP_BIND").unwrap_or(defaults.bind_addr),
            catalog_path: get("TEAMCOMP_CATALOG")
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_path),
            mutator: get("TEAMCOMP_MUTATOR").unwrap_or(defaults.mutator),
            simulator_url: get("TEAMCOMP_SIMULATOR_URL").unwrap_or(defaults.simulator_url),
            simulator_timeout: get("TEAMCOMP_SIMULATOR_TIMEOUT_SECS")
                .and_then(|value| parse_seconds(&value))
                .unwrap_or(defaults.simulator_timeout),
        }
    }
}

fn parse_seconds(value: &str) -> Option<Duration> {
    match value.trim().parse::<u64>() {
        Ok(seconds) if seconds > 0 => Some(Duration::from_secs(seconds)),
        _ => {
            tracing::warn!(value, "ignoring invalid simulator timeout");
            None
        }
    }
}

/// Install the stderr tracing subscriber. `RUST_LOG` overrides the default
/// `info` filter. Safe to call more than once.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
