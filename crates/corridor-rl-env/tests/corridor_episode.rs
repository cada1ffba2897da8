//! End-to-end episode checks for the corridor

use corridor_rl_env::{
    Convention, CorridorEnv, DescriptorSet, DiscreteAction, Environment, Move,
    PositionObservation, RLError, Reward, TimeLimit,
};
use proptest::prelude::*;

#[test]
fn walk_to_the_end_of_a_five_cell_corridor() {
    let mut env = CorridorEnv::with_length(5).unwrap();
    assert_eq!(env.reset(), PositionObservation(0.0));

    let expected = [
        (0, 0.0, false),
        (1, 1.0, false),
        (0, 0.0, false),
        (1, 1.0, false),
        (1, 2.0, false),
        (1, 3.0, false),
        (1, 4.0, false),
        (1, 5.0, true),
    ];

    for (action, position, done) in expected {
        let step = env.step(DiscreteAction(action)).unwrap();
        assert_eq!(step.observation, PositionObservation(position));
        assert_eq!(step.reward, Reward(-1.0));
        assert_eq!(step.done, done);
        assert!(step.info.is_empty());
    }
}

#[tokio::test]
async fn shortest_episode_costs_one_per_cell() {
    let mut env = TimeLimit::new(CorridorEnv::with_length(4).unwrap(), 100);
    env.reset().await.unwrap();

    let mut rewards = Vec::new();
    let last = loop {
        let step = env.step(Move::Right.into()).await.unwrap();
        rewards.push(step.reward);
        if step.done {
            break step;
        }
    };

    assert_eq!(rewards.len(), 4);
    assert_eq!(rewards.into_iter().sum::<Reward>(), Reward(-4.0));
    assert!(!last.truncated);
}

#[tokio::test]
async fn time_limit_ends_an_episode_stuck_at_the_wall() {
    let mut env = TimeLimit::new(CorridorEnv::with_length(4).unwrap(), 5);
    env.reset().await.unwrap();

    let mut steps = 0;
    let last = loop {
        let step = env.step(Move::Left.into()).await.unwrap();
        steps += 1;
        if step.done {
            break step;
        }
    };

    assert_eq!(steps, 5);
    assert!(last.truncated);
    assert_eq!(last.observation, PositionObservation(0.0));
}

#[tokio::test]
async fn random_actions_eventually_reach_the_goal() {
    let mut env = CorridorEnv::with_length(3).unwrap();
    let action_space = Environment::action_space(&env);
    Environment::reset(&mut env).await.unwrap();

    let mut done = false;
    for _ in 0..10_000 {
        let step = Environment::step(&mut env, action_space.sample()).await.unwrap();
        if step.done {
            done = true;
            break;
        }
    }
    assert!(done);
    assert_eq!(env.position(), 3);
}

fn actions() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..2, 0..64)
}

proptest! {
    #[test]
    fn position_stays_in_bounds(length in 1u64..20, actions in actions()) {
        let mut env = CorridorEnv::with_length(length).unwrap();
        env.reset();
        for action in actions {
            let step = env.step(DiscreteAction(action)).unwrap();
            prop_assert!(env.position() <= length);
            prop_assert!(step.observation.0 >= 0.0);
        }
    }

    #[test]
    fn reward_is_constant(length in 1u64..20, actions in actions()) {
        let mut env = CorridorEnv::with_length(length).unwrap();
        for action in actions {
            let step = env.step(DiscreteAction(action)).unwrap();
            prop_assert_eq!(step.reward, Reward(-1.0));
        }
    }

    #[test]
    fn done_iff_at_goal(length in 1u64..20, actions in actions()) {
        let mut env = CorridorEnv::with_length(length).unwrap();
        for action in actions {
            let step = env.step(DiscreteAction(action)).unwrap();
            prop_assert_eq!(step.done, env.position() == length);
            prop_assert_eq!(step.done, env.is_done());
        }
    }

    #[test]
    fn right_from_last_cell_finishes(length in 1u64..20) {
        let mut env = CorridorEnv::with_length(length).unwrap();
        for _ in 1..length {
            env.step_move(Move::Right);
        }
        prop_assert_eq!(env.position(), length - 1);
        let step = env.step_move(Move::Right);
        prop_assert!(step.done);
        let step = env.step_move(Move::Right);
        prop_assert!(step.done);
        prop_assert_eq!(env.position(), length);
    }

    #[test]
    fn out_of_range_actions_are_rejected(length in 1u64..20, action in 2usize..1000) {
        let mut env = CorridorEnv::with_length(length).unwrap();
        prop_assert!(matches!(env.step(DiscreteAction(action)), Err(RLError::InvalidAction(_))));
        prop_assert_eq!(env.position(), 0);
    }

    #[test]
    fn export_is_pure(length in 1u64..50, actions in actions()) {
        let mut env = CorridorEnv::with_length(length).unwrap();
        let rich = env.export(Convention::Rich);
        let minimal = env.export(Convention::Minimal);
        for action in actions {
            env.step(DiscreteAction(action)).unwrap();
        }
        prop_assert_eq!(env.export(Convention::Rich), rich);
        prop_assert_eq!(env.export(Convention::Minimal), minimal.clone());
        match minimal {
            DescriptorSet::Minimal(spec) => prop_assert_eq!(spec.observation_space.n, length + 1),
            DescriptorSet::Rich(_) => prop_assert!(false, "minimal export returned rich descriptors"),
        }
    }
}
