//! Environment wrappers

use async_trait::async_trait;

use corridor_rl_core::{ActionSpace, Environment, ObservationSpace, StateSpace, Step, StepInfo};

/// Time limit wrapper
///
/// Ends an episode after `max_steps` steps by marking the step both
/// `truncated` and `done`. Steps that already reached a terminal state are
/// passed through untouched.
pub struct TimeLimit<E> {
    /// Inner environment
    pub env: E,
    /// Maximum steps
    pub max_steps: usize,
    /// Current step count
    pub steps: usize,
}

impl<E> TimeLimit<E> {
    /// Create a new time limit wrapper
    pub fn new(env: E, max_steps: usize) -> Self {
        Self {
            env,
            max_steps,
            steps: 0,
        }
    }

    /// Unwrap the inner environment
    pub fn into_inner(self) -> E {
        self.env
    }
}

#[async_trait]
impl<E> Environment for TimeLimit<E>
where
    E: Environment,
{
    type Observation = E::Observation;
    type Action = E::Action;
    type State = E::State;

    fn observation_space(&self) -> Box<dyn ObservationSpace<Observation = Self::Observation>> {
        self.env.observation_space()
    }

    fn action_space(&self) -> Box<dyn ActionSpace<Action = Self::Action>> {
        self.env.action_space()
    }

    fn state_space(&self) -> Option<Box<dyn StateSpace<State = Self::State>>> {
        self.env.state_space()
    }

    async fn reset(&mut self) -> corridor_rl_core::Result<(Self::Observation, StepInfo)> {
        self.steps = 0;
        self.env.reset().await
    }

    async fn step(&mut self, action: Self::Action) -> corridor_rl_core::Result<Step<Self::Observation, Self::State>> {
        let mut step = self.env.step(action).await?;
        self.steps += 1;

        if self.steps >= self.max_steps && !step.done {
            tracing::debug!(max_steps = self.max_steps, "episode truncated by time limit");
            step.truncated = true;
            step.done = true;
        }

        Ok(step)
    }

    async fn render(&self) -> corridor_rl_core::Result<()> {
        self.env.render().await
    }

    async fn close(&mut self) -> corridor_rl_core::Result<()> {
        self.env.close().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CorridorEnv, Move};
    use corridor_rl_core::DiscreteAction;

    #[tokio::test]
    async fn test_time_limit_truncates() {
        let mut env = TimeLimit::new(CorridorEnv::with_length(10).unwrap(), 3);
        env.reset().await.unwrap();

        for _ in 0..2 {
            let step = env.step(Move::Left.into()).await.unwrap();
            assert!(!step.done);
            assert!(!step.truncated);
        }
        let step = env.step(DiscreteAction(0)).await.unwrap();
        assert!(step.done);
        assert!(step.truncated);

        env.reset().await.unwrap();
        assert_eq!(env.steps, 0);
    }

    #[tokio::test]
    async fn test_goal_is_not_truncation() {
        let mut env = TimeLimit::new(CorridorEnv::with_length(2).unwrap(), 2);
        env.reset().await.unwrap();
        env.step(DiscreteAction(1)).await.unwrap();
        let step = env.step(DiscreteAction(1)).await.unwrap();
        assert!(step.done);
        assert!(!step.truncated);
        assert_eq!(env.into_inner().position(), 2);
    }

    #[tokio::test]
    async fn test_invalid_action_does_not_count() {
        let mut env = TimeLimit::new(CorridorEnv::with_length(2).unwrap(), 2);
        env.reset().await.unwrap();
        assert!(env.step(DiscreteAction(5)).await.is_err());
        assert_eq!(env.steps, 0);
    }
}
