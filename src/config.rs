//! Load-time configuration for the bootstrap table.
//!
//! Defaults to the compiled-in CM list. A JSON file named by
//! `CM_BOOTSTRAP_CONFIG` replaces it, and `CM_BOOTSTRAP_SEEDING` overrides the
//! seeding mode.

use std::env::VarError;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::error::ConfigError;
use crate::selector::Selector;
use crate::strategies::clock_seeded::ClockSeededStrategy;
use crate::strategies::random::RandomStrategy;
use crate::strategies::strategy::SelectionStrategy;
use crate::table::{EndpointTable, CM_SERVERS};

pub const CONFIG_PATH_ENV: &str = "CM_BOOTSTRAP_CONFIG";
pub const SEEDING_ENV: &str = "CM_BOOTSTRAP_SEEDING";

/// How the selector gets its randomness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seeding {
    /// Fresh generator per pick, seeded from the wall clock.
    #[default]
    Clock,
    /// Per-thread generator seeded once from OS entropy.
    ThreadRng,
}

impl Seeding {
    pub fn strategy(self) -> Arc<dyn SelectionStrategy> {
        match self {
            Seeding::Clock => Arc::new(ClockSeededStrategy::new()),
            Seeding::ThreadRng => Arc::new(RandomStrategy::new()),
        }
    }
}

impl FromStr for Seeding {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "clock" => Ok(Seeding::Clock),
            "thread_rng" => Ok(Seeding::ThreadRng),
            other => Err(ConfigError::UnknownSeeding(other.to_string())),
        }
    }
}

// Unset is fine; set but not UTF-8 is an error rather than a silent default.
fn env_var(name: &'static str) -> Result<Option<String>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(name)),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BootstrapConfig {
    #[serde(default = "default_servers")]
    pub servers: Vec<String>,

    #[serde(default)]
    pub seeding: Seeding,

    /// Parse every entry up front instead of waiting for a bad one to be picked.
    #[serde(default = "default_validate_on_load")]
    pub validate_on_load: bool,
}

fn default_servers() -> Vec<String> {
    CM_SERVERS.iter().map(|s| s.to_string()).collect()
}

fn default_validate_on_load() -> bool {
    true
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            servers: default_servers(),
            seeding: Seeding::default(),
            validate_on_load: default_validate_on_load(),
        }
    }
}

impl BootstrapConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Reads the config file and seeding override from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match env_var(CONFIG_PATH_ENV)? {
            Some(path) => {
                info!(path = %path, "loading bootstrap config");
                Self::from_file(path)?
            }
            None => Self::default(),
        };
        if let Some(seeding) = env_var(SEEDING_ENV)? {
            config.seeding = seeding.parse()?;
        }
        Ok(config)
    }

    pub fn table(&self) -> EndpointTable {
        EndpointTable::new(self.servers.iter().cloned())
    }

    /// Builds a selector, validating the table first when configured to.
    pub fn into_selector(self) -> Result<Selector, ConfigError> {
        let table = self.table();
        if self.validate_on_load {
            table.validate()?;
        }
        info!(
            servers = table.len(),
            seeding = ?self.seeding,
            validated = self.validate_on_load,
            "bootstrap table ready"
        );
        Ok(Selector::new(table, self.seeding.strategy()))
    }
}
