//! Apple Basket entry point
//!
//! Plays random-policy episodes against the environment (printing each
//! episode's score), then evaluates the tracking baseline.
//!
//! Usage: `apple-basket [config.json]`
//! Set `APPLE_BASKET_RENDER_EVERY=N` to print a frame every N steps.

use anyhow::{Context, Result};

use apple_basket::policy::{RandomPolicy, TrackingPolicy, evaluate_policy, run_episode};
use apple_basket::{AppleBasket, EnvConfig};

const CHECK_EPISODES: u32 = 50;
const EVAL_EPISODES: usize = 10;
const EVAL_MAX_STEPS: u64 = 10_000;

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Apple Basket starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => EnvConfig::load(&path).with_context(|| format!("loading config {path}"))?,
        None => EnvConfig::default(),
    };
    let render_every = match std::env::var("APPLE_BASKET_RENDER_EVERY") {
        Ok(value) => value
            .parse()
            .with_context(|| format!("APPLE_BASKET_RENDER_EVERY={value}"))?,
        Err(_) => 0,
    };

    let seed = config.seed;
    let mut env = AppleBasket::new(config)?;

    let mut policy = RandomPolicy::new(seed);
    for episode in 1..=CHECK_EPISODES {
        let result = run_episode(&mut env, &mut policy, render_every, 0);
        println!("Episode:{} Score:{}", episode, result.score);
    }

    let mut tracking = TrackingPolicy::new(env.config().basket_speed);
    let report = evaluate_policy(
        &mut env,
        &mut tracking,
        EVAL_EPISODES,
        EVAL_MAX_STEPS,
    );
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
