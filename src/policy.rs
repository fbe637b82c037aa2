//! Baseline policies and evaluation
//!
//! A policy maps observations to basket actions. `RandomPolicy` samples the
//! action space; `TrackingPolicy` chases the head apple.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::env::{Action, AppleBasket, BasketAction, Environment, Observation};
use crate::spaces::Discrete;

pub trait Policy {
    fn act(&mut self, observation: &Observation) -> BasketAction;
}

/// Uniform sampling of the action space
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: Pcg32,
    space: Discrete,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            space: Discrete::new(BasketAction::ACTION_SPACE),
        }
    }
}

impl Policy for RandomPolicy {
    fn act(&mut self, _observation: &Observation) -> BasketAction {
        self.space
            .sample(&mut self.rng)
            .and_then(|value| BasketAction::try_from_numeric(value).ok())
            .unwrap_or_default()
    }
}

/// Moves toward the head apple's column, holding once within the dead zone
#[derive(Debug, Clone, Copy)]
pub struct TrackingPolicy {
    pub dead_zone: i32,
}

impl TrackingPolicy {
    pub fn new(dead_zone: i32) -> Self {
        Self { dead_zone }
    }
}

impl Policy for TrackingPolicy {
    fn act(&mut self, observation: &Observation) -> BasketAction {
        let offset = observation.apple_x - observation.basket_x;
        if offset > self.dead_zone {
            BasketAction::MoveRight
        } else if offset < -self.dead_zone {
            BasketAction::MoveLeft
        } else {
            BasketAction::Hold
        }
    }
}

/// Summary of one played episode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeResult {
    pub episode: u32,
    pub score: i64,
    pub length: u64,
    /// Stopped by the step cap rather than termination
    pub truncated: bool,
}

/// Reset and play one episode.
///
/// `render_every` prints a frame every N steps (0 disables rendering);
/// `max_steps` caps the episode length (0 means no cap).
pub fn run_episode(
    env: &mut AppleBasket,
    policy: &mut dyn Policy,
    render_every: u64,
    max_steps: u64,
) -> EpisodeResult {
    let mut observation = env.reset();
    let mut score = 0;
    let mut length = 0;

    loop {
        let step = env.step(policy.act(&observation));
        observation = step.observation;
        score += i64::from(step.reward);
        length += 1;

        if render_every > 0 && length % render_every == 0 {
            println!("{}", env.render());
        }

        if step.done {
            break;
        }
        if max_steps > 0 && length >= max_steps {
            return EpisodeResult {
                episode: env.episode(),
                score,
                length,
                truncated: true,
            };
        }
    }

    EpisodeResult {
        episode: env.episode(),
        score,
        length,
        truncated: false,
    }
}

/// Aggregate of several evaluation episodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub episodes: usize,
    pub mean_reward: f64,
    pub std_reward: f64,
    pub mean_length: f64,
    pub best_score: i64,
}

impl EvaluationReport {
    pub fn from_results(results: &[EpisodeResult]) -> Self {
        if results.is_empty() {
            return Self {
                episodes: 0,
                mean_reward: 0.0,
                std_reward: 0.0,
                mean_length: 0.0,
                best_score: 0,
            };
        }

        let n = results.len() as f64;
        let mean_reward = results.iter().map(|r| r.score as f64).sum::<f64>() / n;
        let variance = results
            .iter()
            .map(|r| (r.score as f64 - mean_reward).powi(2))
            .sum::<f64>()
            / n;

        Self {
            episodes: results.len(),
            mean_reward,
            std_reward: variance.sqrt(),
            mean_length: results.iter().map(|r| r.length as f64).sum::<f64>() / n,
            best_score: results.iter().map(|r| r.score).max().unwrap_or(0),
        }
    }
}

/// Play `episodes` episodes and summarize their rewards
pub fn evaluate_policy(
    env: &mut AppleBasket,
    policy: &mut dyn Policy,
    episodes: usize,
    max_steps: u64,
) -> EvaluationReport {
    let results: Vec<EpisodeResult> = (0..episodes)
        .map(|_| {
            let result = run_episode(env, policy, 0, max_steps);
            log::debug!(
                "Evaluation episode {}: score {} in {} steps",
                result.episode,
                result.score,
                result.length
            );
            result
        })
        .collect();

    let report = EvaluationReport::from_results(&results);
    log::info!(
        "Evaluated {} episodes: mean reward {:.2} +/- {:.2}",
        report.episodes,
        report.mean_reward,
        report.std_reward
    );
    report
}
