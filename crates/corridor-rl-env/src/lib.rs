//! One-dimensional corridor environment for reinforcement learning harnesses
//!
//! The corridor is a deterministic test fixture: a line of positions
//! `0..=length`, two moves and a constant step penalty. It gives a training
//! harness an environment whose optimal behaviour is obvious, so control
//! loops, action selection and episode termination can be checked against it.
//!
//! Shape descriptors are exported in two conventions, see [`specs`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod corridor;
pub mod specs;
pub mod wrappers;

pub use config::{
    CorridorConfig, CORRIDOR_LENGTH_KEY, DEFAULT_CORRIDOR_LENGTH, MAX_CORRIDOR_LENGTH,
};
pub use corridor::{
    CorridorEnv, CorridorState, CorridorStateSpace, Move, PositionObservation, PositionSpace,
    STEP_REWARD,
};
pub use specs::{CanonicalSpec, Convention, DescriptorSet, EnvironmentSpec, MinimalSpec};
pub use wrappers::TimeLimit;

// Re-export core types
pub use corridor_rl_core::{
    Action, ActionSpace, DiscreteAction, Environment, EnvironmentConfig, Observation,
    ObservationSpace, RLError, Result, Reward, State, StateSpace, Step, StepInfo,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Convention, CorridorConfig, CorridorEnv, Move, TimeLimit};
    pub use corridor_rl_core::prelude::*;
}
