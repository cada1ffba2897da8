//! Example: Random agent walking the corridor

use corridor_rl_env::prelude::*;
use corridor_rl_env::EnvironmentConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Harnesses usually hand over a loose parameter map
    let config = EnvironmentConfig::default().with_param("corridor_length", 5);
    let env = CorridorEnv::from_env_config(&config)?;

    println!("{}", serde_json::to_string_pretty(&env.export(Convention::Rich))?);
    println!("{}", serde_json::to_string_pretty(&env.export(Convention::Minimal))?);

    let mut env = TimeLimit::new(env, 200);
    let action_space = env.action_space();

    let num_episodes = 10;
    let mut episode_rewards = Vec::new();

    for episode in 0..num_episodes {
        env.reset().await?;
        let mut total_reward = 0.0;
        let mut steps = 0;

        let truncated = loop {
            let step = env.step(action_space.sample()).await?;
            total_reward += step.reward.value();
            steps += 1;

            if step.done {
                break step.truncated;
            }
        };

        episode_rewards.push(total_reward);
        println!(
            "Episode {}: Total Reward = {:.2}, Steps = {}, Reached Goal = {}",
            episode + 1,
            total_reward,
            steps,
            !truncated
        );
    }

    let avg_reward: f64 = episode_rewards.iter().sum::<f64>() / f64::from(num_episodes);
    println!("\nAverage Reward over {num_episodes} episodes: {avg_reward:.2}");

    Ok(())
}
