//! Shape descriptors exported to host harnesses
//!
//! The corridor has a single [`CanonicalSpec`]. Harnesses consume it through
//! one of two conventions: [`Convention::Rich`] yields typed array
//! descriptors carrying dtype, shape and bounds, and [`Convention::Minimal`]
//! yields bare discrete counts. Both are pure projections of the canonical
//! spec, so exporting twice always yields equal descriptor sets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use corridor_rl_core::{RLError, Result};

/// Number of actions (left, right)
pub const NUM_ACTIONS: usize = 2;

/// Bounds of a scalar quantity; `None` means unbounded on that side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalarBounds {
    /// Lower bound
    pub low: Option<f64>,
    /// Upper bound
    pub high: Option<f64>,
}

impl ScalarBounds {
    /// Closed interval `[low, high]`
    #[must_use]
    pub fn closed(low: f64, high: f64) -> Self {
        Self {
            low: Some(low),
            high: Some(high),
        }
    }

    /// Any real number
    #[must_use]
    pub fn unbounded() -> Self {
        Self { low: None, high: None }
    }
}

/// Harness-neutral description of what the corridor produces and accepts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanonicalSpec {
    /// Scalar position, bounded by `[0, length]`
    pub observation: ScalarBounds,
    /// Number of discrete actions
    pub num_actions: usize,
    /// Scalar reward
    pub reward: ScalarBounds,
    /// Scalar discount, bounded by `[0, 1]`
    pub discount: ScalarBounds,
    /// Number of distinct positions (`length + 1`)
    pub num_positions: u64,
}

impl CanonicalSpec {
    /// Canonical spec for a corridor of the given length
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn for_length(length: u64) -> Self {
        Self {
            observation: ScalarBounds::closed(0.0, length as f64),
            num_actions: NUM_ACTIONS,
            reward: ScalarBounds::unbounded(),
            discount: ScalarBounds::closed(0.0, 1.0),
            num_positions: length + 1,
        }
    }
}

/// Element type of an array descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DType {
    /// 32-bit float
    Float32,
    /// 32-bit signed integer
    Int32,
}

/// Unbounded typed array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArraySpec {
    /// Descriptor name
    pub name: String,
    /// Array shape; empty for a scalar
    pub shape: Vec<usize>,
    /// Element type
    pub dtype: DType,
}

/// Typed array with inclusive bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundedArraySpec {
    /// Descriptor name
    pub name: String,
    /// Array shape; empty for a scalar
    pub shape: Vec<usize>,
    /// Element type
    pub dtype: DType,
    /// Inclusive minimum
    pub minimum: f64,
    /// Inclusive maximum
    pub maximum: f64,
}

/// Integer array taking values in `0..num_values`
///
/// Bounds are always `[0, num_values - 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscreteArraySpec {
    /// Descriptor name
    pub name: String,
    /// Array shape; empty for a scalar
    pub shape: Vec<usize>,
    /// Element type
    pub dtype: DType,
    /// Number of values
    pub num_values: usize,
    /// Inclusive minimum, always `0`
    pub minimum: i64,
    /// Inclusive maximum, `num_values - 1`
    pub maximum: i64,
}

impl DiscreteArraySpec {
    /// Scalar int32 descriptor with `num_values` values
    #[must_use]
    pub fn scalar(name: impl Into<String>, num_values: usize) -> Self {
        let maximum = i64::try_from(num_values).map_or(i64::MAX, |n| n - 1);
        Self {
            name: name.into(),
            shape: Vec::new(),
            dtype: DType::Int32,
            num_values,
            minimum: 0,
            maximum,
        }
    }
}

/// Descriptor set of the rich convention
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentSpec {
    /// Observation descriptor
    pub observations: BoundedArraySpec,
    /// Action descriptor
    pub actions: DiscreteArraySpec,
    /// Reward descriptor
    pub rewards: ArraySpec,
    /// Discount descriptor
    pub discounts: BoundedArraySpec,
}

/// Bare discrete count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscreteSpec {
    /// Number of values
    pub n: u64,
}

/// Descriptor set of the minimal convention; it has no discount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimalSpec {
    /// Distinct positions
    pub observation_space: DiscreteSpec,
    /// Distinct actions
    pub action_space: DiscreteSpec,
}

/// Descriptor convention requested by a harness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// Typed array descriptors with dtype, shape and bounds
    Rich,
    /// Discrete counts only
    Minimal,
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rich => f.write_str("rich"),
            Self::Minimal => f.write_str("minimal"),
        }
    }
}

impl FromStr for Convention {
    type Err = RLError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rich" | "dm_env" => Ok(Self::Rich),
            "minimal" | "discrete" => Ok(Self::Minimal),
            other => Err(RLError::Configuration(format!(
                "unknown descriptor convention `{other}`"
            ))),
        }
    }
}

/// Descriptors returned by [`export`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "convention", rename_all = "lowercase")]
pub enum DescriptorSet {
    /// Rich convention
    Rich(EnvironmentSpec),
    /// Minimal convention
    Minimal(MinimalSpec),
}

impl DescriptorSet {
    /// Convention this set was exported for
    #[must_use]
    pub fn convention(&self) -> Convention {
        match self {
            Self::Rich(_) => Convention::Rich,
            Self::Minimal(_) => Convention::Minimal,
        }
    }
}

/// Project the canonical spec onto the rich convention
#[must_use]
pub fn export_rich(spec: &CanonicalSpec) -> EnvironmentSpec {
    EnvironmentSpec {
        observations: BoundedArraySpec {
            name: "observations".to_string(),
            shape: vec![1],
            dtype: DType::Float32,
            minimum: spec.observation.low.unwrap_or(f64::NEG_INFINITY),
            maximum: spec.observation.high.unwrap_or(f64::INFINITY),
        },
        actions: DiscreteArraySpec::scalar("actions", spec.num_actions),
        rewards: ArraySpec {
            name: "reward".to_string(),
            shape: Vec::new(),
            dtype: DType::Float32,
        },
        discounts: BoundedArraySpec {
            name: "discount".to_string(),
            shape: Vec::new(),
            dtype: DType::Float32,
            minimum: spec.discount.low.unwrap_or(0.0),
            maximum: spec.discount.high.unwrap_or(1.0),
        },
    }
}

/// Project the canonical spec onto the minimal convention
#[must_use]
pub fn export_minimal(spec: &CanonicalSpec) -> MinimalSpec {
    MinimalSpec {
        observation_space: DiscreteSpec { n: spec.num_positions },
        action_space: DiscreteSpec {
            n: spec.num_actions as u64,
        },
    }
}

/// Project the canonical spec onto the requested convention
#[must_use]
pub fn export(spec: &CanonicalSpec, convention: Convention) -> DescriptorSet {
    match convention {
        Convention::Rich => DescriptorSet::Rich(export_rich(spec)),
        Convention::Minimal => DescriptorSet::Minimal(export_minimal(spec)),
    }
}
