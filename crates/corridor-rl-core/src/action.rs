//! Action representations and action spaces

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for actions in an RL environment
pub trait Action: Clone + Debug + Send + Sync {
    /// Convert action to a vector representation
    fn to_vec(&self) -> Vec<f64>;
}

/// Trait for defining action spaces
pub trait ActionSpace: Send + Sync {
    /// The type of actions in this space
    type Action: Action;

    /// Sample a random action from the space
    fn sample(&self) -> Self::Action;

    /// Check if an action is valid within this space
    fn contains(&self, action: &Self::Action) -> bool;

    /// Get the dimensionality of the action space
    fn dim(&self) -> Option<usize>;
}

/// Discrete action, identified by its index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiscreteAction(pub usize);

impl Action for DiscreteAction {
    #[allow(clippy::cast_precision_loss)]
    fn to_vec(&self) -> Vec<f64> {
        vec![self.0 as f64]
    }
}

/// Discrete action space `{0, .., n - 1}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscreteSpace {
    /// Number of discrete actions
    pub n: usize,
}

impl DiscreteSpace {
    /// Create a new discrete action space
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    /// Every action in the space, in index order
    pub fn actions(&self) -> impl Iterator<Item = DiscreteAction> {
        (0..self.n).map(DiscreteAction)
    }
}

impl ActionSpace for DiscreteSpace {
    type Action = DiscreteAction;

    fn sample(&self) -> Self::Action {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        DiscreteAction(rng.gen_range(0..self.n))
    }

    fn contains(&self, action: &Self::Action) -> bool {
        action.0 < self.n
    }

    fn dim(&self) -> Option<usize> {
        Some(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discrete_space_contains() {
        let space = DiscreteSpace::new(2);
        assert!(space.contains(&DiscreteAction(0)));
        assert!(space.contains(&DiscreteAction(1)));
        assert!(!space.contains(&DiscreteAction(2)));
        assert_eq!(space.dim(), Some(1));
    }

    #[test]
    fn test_discrete_space_sample_in_range() {
        let space = DiscreteSpace::new(2);
        for _ in 0..100 {
            assert!(space.contains(&space.sample()));
        }
    }

    #[test]
    fn test_actions_enumerates_in_order() {
        let actions: Vec<_> = DiscreteSpace::new(3).actions().collect();
        assert_eq!(actions, vec![DiscreteAction(0), DiscreteAction(1), DiscreteAction(2)]);
    }
}
