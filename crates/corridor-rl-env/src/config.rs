//! Corridor configuration
//!
//! The corridor is configured once, at construction, with an immutable
//! [`CorridorConfig`]. Harnesses that only carry a loosely typed
//! [`EnvironmentConfig`] can derive one through
//! [`CorridorConfig::from_env_config`], which performs the same validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use corridor_rl_core::{EnvironmentConfig, RLError, Result};

/// Parameter key a harness uses to pass the corridor length
pub const CORRIDOR_LENGTH_KEY: &str = "corridor_length";

/// Length used when nothing else is configured
pub const DEFAULT_CORRIDOR_LENGTH: u64 = 5;

/// Longest corridor whose positions all have distinct `f32` observations
pub const MAX_CORRIDOR_LENGTH: u64 = 1 << 24;

/// Validated corridor configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCorridorConfig")]
pub struct CorridorConfig {
    /// Number of rightward moves from the start to the goal
    length: u64,
}

#[derive(Deserialize)]
struct RawCorridorConfig {
    length: u64,
}

impl TryFrom<RawCorridorConfig> for CorridorConfig {
    type Error = RLError;

    fn try_from(raw: RawCorridorConfig) -> Result<Self> {
        Self::new(raw.length)
    }
}

impl CorridorConfig {
    /// Create a configuration
    ///
    /// The length must lie in `1..=MAX_CORRIDOR_LENGTH`.
    pub fn new(length: u64) -> Result<Self> {
        if length < 1 {
            return Err(RLError::Configuration(format!(
                "corridor length must be at least 1, got {length}"
            )));
        }
        if length > MAX_CORRIDOR_LENGTH {
            return Err(RLError::Configuration(format!(
                "corridor length must be at most {MAX_CORRIDOR_LENGTH}, got {length}"
            )));
        }
        Ok(Self { length })
    }

    /// Corridor length
    #[must_use]
    pub fn length(&self) -> u64 {
        self.length
    }

    /// Read the length from a harness parameter map
    ///
    /// Accepts an integer or a string holding an integer under
    /// [`CORRIDOR_LENGTH_KEY`].
    pub fn from_env_config(config: &EnvironmentConfig) -> Result<Self> {
        let value = config.param(CORRIDOR_LENGTH_KEY).ok_or_else(|| {
            RLError::Configuration(format!("missing parameter `{CORRIDOR_LENGTH_KEY}`"))
        })?;
        Self::new(parse_length(value)?)
    }
}

impl Default for CorridorConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_CORRIDOR_LENGTH,
        }
    }
}

fn parse_length(value: &Value) -> Result<u64> {
    let invalid = || {
        RLError::Configuration(format!(
            "`{CORRIDOR_LENGTH_KEY}` must be a positive integer, got {value}"
        ))
    };

    match value {
        Value::Number(n) => n.as_u64().ok_or_else(invalid),
        Value::String(s) => s.trim().parse::<u64>().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}
