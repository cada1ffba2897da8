//! One-dimensional corridor environment
//!
//! The agent starts at position `0` and must reach position `length` by
//! moving right. Every step costs `-1`. Moving left at the wall and moving
//! right at the goal leave the position unchanged.
//!
//! Termination is derived from the position, not stored: `done` holds
//! exactly while `position == length`. Stepping after the goal is reached is
//! allowed; `Right` stays pinned at the goal while `Left` moves back into the
//! corridor and clears `done`.

use async_trait::async_trait;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

use corridor_rl_core::{
    ActionSpace, DiscreteAction, DiscreteSpace, Environment, EnvironmentConfig, Observation,
    ObservationSpace, RLError, Result, Reward, State, StateSpace, Step, StepInfo,
};

use crate::config::CorridorConfig;
use crate::specs::{self, CanonicalSpec, Convention, DescriptorSet, NUM_ACTIONS};

/// Reward paid on every step
pub const STEP_REWARD: f64 = -1.0;

/// A move along the corridor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Towards the wall at position `0`
    Left = 0,
    /// Towards the goal at position `length`
    Right = 1,
}

impl TryFrom<DiscreteAction> for Move {
    type Error = RLError;

    fn try_from(action: DiscreteAction) -> Result<Self> {
        match action.0 {
            0 => Ok(Self::Left),
            1 => Ok(Self::Right),
            other => Err(RLError::InvalidAction(format!(
                "{other} is not a corridor move (expected 0 or 1)"
            ))),
        }
    }
}

impl From<Move> for DiscreteAction {
    fn from(mv: Move) -> Self {
        DiscreteAction(mv as usize)
    }
}

/// Position observation, exposed as a single `f32`
///
/// Exact for every position because corridor lengths are capped at
/// [`MAX_CORRIDOR_LENGTH`](crate::config::MAX_CORRIDOR_LENGTH).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionObservation(pub f32);

impl PositionObservation {
    /// One-element array form
    #[must_use]
    pub fn to_array(&self) -> Array1<f32> {
        Array1::from_elem(1, self.0)
    }
}

impl Observation for PositionObservation {
    fn to_vec(&self) -> Vec<f64> {
        vec![f64::from(self.0)]
    }

    fn shape(&self) -> Vec<usize> {
        vec![1]
    }
}

#[allow(clippy::cast_precision_loss)]
fn observe(position: u64) -> PositionObservation {
    PositionObservation(position as f32)
}

/// Observation space of the positions `0..=length`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionSpace {
    /// Corridor length
    pub length: u64,
}

impl ObservationSpace for PositionSpace {
    type Observation = PositionObservation;

    fn sample(&self) -> Self::Observation {
        use rand::Rng;
        observe(rand::thread_rng().gen_range(0..=self.length))
    }

    #[allow(clippy::cast_precision_loss)]
    fn contains(&self, obs: &Self::Observation) -> bool {
        obs.0 >= 0.0 && obs.0 <= self.length as f32 && obs.0.fract() == 0.0
    }

    fn shape(&self) -> Vec<usize> {
        vec![1]
    }
}

/// Full corridor state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorridorState {
    /// Current position
    pub position: u64,
    /// Corridor length
    pub length: u64,
}

impl State for CorridorState {
    #[allow(clippy::cast_precision_loss)]
    fn features(&self) -> Vec<f64> {
        vec![self.position as f64]
    }

    fn is_terminal(&self) -> bool {
        self.position >= self.length
    }
}

/// State space of all `CorridorState`s with a fixed length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorridorStateSpace {
    /// Corridor length
    pub length: u64,
}

impl StateSpace for CorridorStateSpace {
    type State = CorridorState;

    fn sample(&self) -> Self::State {
        use rand::Rng;
        CorridorState {
            position: rand::thread_rng().gen_range(0..=self.length),
            length: self.length,
        }
    }

    fn contains(&self, state: &Self::State) -> bool {
        state.length == self.length && state.position <= self.length
    }

    fn dim(&self) -> Option<usize> {
        Some(1)
    }
}

/// Corridor environment
#[derive(Debug, Clone)]
pub struct CorridorEnv {
    /// Configuration, fixed for the lifetime of the environment
    config: CorridorConfig,
    /// Current position, always within `0..=length`
    position: u64,
}

impl CorridorEnv {
    /// Create a new corridor at position `0`
    #[must_use]
    pub fn new(config: CorridorConfig) -> Self {
        Self { config, position: 0 }
    }

    /// Create a corridor of the given length
    pub fn with_length(length: u64) -> Result<Self> {
        Ok(Self::new(CorridorConfig::new(length)?))
    }

    /// Create a corridor from a harness parameter map
    pub fn from_env_config(config: &EnvironmentConfig) -> Result<Self> {
        Ok(Self::new(CorridorConfig::from_env_config(config)?))
    }

    /// Corridor length
    #[must_use]
    pub fn length(&self) -> u64 {
        self.config.length()
    }

    /// Current position
    #[must_use]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Whether the agent is at the goal
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.position >= self.length()
    }

    /// Actions accepted by [`CorridorEnv::step`], in index order
    #[must_use]
    pub fn valid_actions(&self) -> Vec<DiscreteAction> {
        DiscreteSpace::new(NUM_ACTIONS).actions().collect()
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> CorridorState {
        CorridorState {
            position: self.position,
            length: self.length(),
        }
    }

    /// Move back to the start, discarding any episode in progress
    pub fn reset(&mut self) -> PositionObservation {
        self.position = 0;
        tracing::debug!(length = self.length(), "corridor reset");
        observe(self.position)
    }

    /// Apply an action given by index
    pub fn step(&mut self, action: DiscreteAction) -> Result<Step<PositionObservation, CorridorState>> {
        let mv = Move::try_from(action).inspect_err(|err| {
            tracing::warn!(action = action.0, error = %err, "rejected corridor action");
        })?;
        Ok(self.step_move(mv))
    }

    /// Apply a move
    pub fn step_move(&mut self, mv: Move) -> Step<PositionObservation, CorridorState> {
        self.position = match mv {
            Move::Left => self.position.saturating_sub(1),
            Move::Right => (self.position + 1).min(self.length()),
        };
        let done = self.is_done();

        tracing::debug!(
            action = ?mv,
            position = self.position,
            length = self.length(),
            done,
            "corridor step"
        );

        Step {
            observation: observe(self.position),
            reward: Reward(STEP_REWARD),
            done,
            truncated: false,
            info: StepInfo::default(),
            state: Some(self.state()),
        }
    }

    /// Canonical shape description of this corridor
    #[must_use]
    pub fn canonical_spec(&self) -> CanonicalSpec {
        CanonicalSpec::for_length(self.length())
    }

    /// Shape descriptors in the requested convention
    #[must_use]
    pub fn export(&self, convention: Convention) -> DescriptorSet {
        specs::export(&self.canonical_spec(), convention)
    }
}

impl Default for CorridorEnv {
    fn default() -> Self {
        Self::new(CorridorConfig::default())
    }
}

#[async_trait]
impl Environment for CorridorEnv {
    type Observation = PositionObservation;
    type Action = DiscreteAction;
    type State = CorridorState;

    fn observation_space(&self) -> Box<dyn ObservationSpace<Observation = Self::Observation>> {
        Box::new(PositionSpace {
            length: self.length(),
        })
    }

    fn action_space(&self) -> Box<dyn ActionSpace<Action = Self::Action>> {
        Box::new(DiscreteSpace::new(NUM_ACTIONS)) // 0: left, 1: right
    }

    fn state_space(&self) -> Option<Box<dyn StateSpace<State = Self::State>>> {
        Some(Box::new(CorridorStateSpace {
            length: self.length(),
        }))
    }

    async fn reset(&mut self) -> Result<(Self::Observation, StepInfo)> {
        Ok((CorridorEnv::reset(self), StepInfo::default()))
    }

    async fn step(&mut self, action: Self::Action) -> Result<Step<Self::Observation, Self::State>> {
        CorridorEnv::step(self, action)
    }
}
