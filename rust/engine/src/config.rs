use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MAX_TURNS: u32 = 163;

pub const ENV_SEED: &str = "LANDLORD_SEED";
pub const ENV_MAX_TURNS: &str = "LANDLORD_MAX_TURNS";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    /// Shuffle seed; `None` picks a fixed default
    pub seed: Option<u64>,
    /// Turn cap for one deal before the loop gives up
    pub max_turns: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    max_turns: Option<u32>,
}

impl EngineConfig {
    /// Defaults overlaid with the keys present in a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let f: FileConfig = toml::from_str(s)?;
        let mut cfg = Self::default();
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
        }
        if let Some(v) = f.max_turns {
            cfg.max_turns = v;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    /// Applies `LANDLORD_SEED` / `LANDLORD_MAX_TURNS` from the process
    /// environment.
    pub fn with_env(self) -> Result<Self, ConfigError> {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Applies environment overrides read through `lookup`; empty values are
    /// ignored.
    pub fn with_env_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup(ENV_SEED).filter(|s| !s.is_empty()) {
            self.seed = Some(
                seed.parse()
                    .map_err(|_| ConfigError::Invalid(format!("invalid seed: {seed}")))?,
            );
        }
        if let Some(turns) = lookup(ENV_MAX_TURNS).filter(|s| !s.is_empty()) {
            self.max_turns = turns
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("invalid max_turns: {turns}")))?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_turns == 0 {
            return Err(ConfigError::Invalid("max_turns must be >=1".into()));
        }
        Ok(())
    }
}
