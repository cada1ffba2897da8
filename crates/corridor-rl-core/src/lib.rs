//! Core reinforcement learning traits and types for the corridor fixture
//!
//! This crate provides the harness-neutral vocabulary an environment is
//! written against: spaces, steps, rewards, errors and the `Environment`
//! trait itself.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod action;
pub mod environment;
pub mod error;
pub mod observation;
pub mod reward;
pub mod state;

// Re-export core traits and types
pub use action::{Action, ActionSpace, DiscreteAction, DiscreteSpace};
pub use environment::{Environment, EnvironmentConfig, Step, StepInfo};
pub use error::{RLError, Result};
pub use observation::{Observation, ObservationSpace};
pub use reward::Reward;
pub use state::{State, StateSpace};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Action, ActionSpace, DiscreteAction, Environment, Observation, ObservationSpace,
        Result, Reward, State, StateSpace, Step,
    };
}
