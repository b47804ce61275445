use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const SEED_ENV: &str = "BATTLE_SEED";
pub const PLAYER_ENV: &str = "BATTLE_PLAYER";
pub const RIVAL_ENV: &str = "BATTLE_RIVAL";
const DEFAULT_TRACE_FILTER: &str = "warn";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct BattleConfig {
    #[serde(default)]
    pub battle: BattleSettings,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl BattleConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Layers `BATTLE_*` environment variables over the file values.
    pub fn with_env(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Same as [`BattleConfig::with_env`] but reads from `lookup`. Values that
    /// are blank or fail to parse leave the existing setting alone.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let present = |key: &str| lookup(key).filter(|val| !val.trim().is_empty());
        if let Some(seed) = present(SEED_ENV).and_then(|val| val.trim().parse().ok()) {
            self.battle.seed = Some(seed);
        }
        if let Some(player) = present(PLAYER_ENV) {
            self.battle.player = Some(player.trim().to_owned());
        }
        if let Some(rival) = present(RIVAL_ENV) {
            self.battle.rival = Some(rival.trim().to_owned());
        }
        self
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct BattleSettings {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub player: Option<String>,
    #[serde(default)]
    pub rival: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct TelemetryConfig {
    #[serde(default)]
    pub trace_filter: Option<String>,
}

impl TelemetryConfig {
    pub fn trace_filter(&self) -> &str {
        self.trace_filter.as_deref().unwrap_or(DEFAULT_TRACE_FILTER)
    }
}
