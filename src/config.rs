/*
 * Configuration Module
 *
 * Fixed configuration that does not change while the simulation runs:
 * the domain size, population placement limits, the RNG seed, and the
 * initial values of the live-tunable parameters. Loaded from JSON.
 */

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::params::SimulationParams;

pub const DEFAULT_WIDTH: f32 = 1920.0;
pub const DEFAULT_HEIGHT: f32 = 1080.0;
pub const DEFAULT_MIN_SEPARATION: f32 = 5.0;
pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: usize = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
    #[error("{name} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub width: f32,
    pub height: f32,
    // Minimum distance between agents placed in the same batch
    pub min_separation: f32,
    // Candidates tried per agent before the separation is relaxed
    pub max_placement_attempts: usize,
    // None seeds from entropy
    pub seed: Option<u64>,
    pub params: SimulationParams,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            min_separation: DEFAULT_MIN_SEPARATION,
            max_placement_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
            seed: None,
            params: SimulationParams::default(),
        }
    }
}

impl SimulationConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        info!(path = %path.display(), "Loaded simulation config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(ConfigError::Invalid("width must be positive"));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(ConfigError::Invalid("height must be positive"));
        }
        if !(self.min_separation.is_finite() && self.min_separation >= 0.0) {
            return Err(ConfigError::Invalid("min_separation must be non-negative"));
        }
        if self.max_placement_attempts == 0 {
            return Err(ConfigError::Invalid("max_placement_attempts must be positive"));
        }
        self.params.validate()
    }
}

static ACTIVE_CONFIG: OnceLock<SimulationConfig> = OnceLock::new();

// Hand the startup config to the nannou model constructor, which cannot take arguments.
// Returns false if a config was already installed.
pub fn install(config: SimulationConfig) -> bool {
    ACTIVE_CONFIG.set(config).is_ok()
}

pub fn active() -> SimulationConfig {
    ACTIVE_CONFIG.get().cloned().unwrap_or_default()
}
