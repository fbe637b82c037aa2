//! Discrete simulation tick
//!
//! Advances the episode by one frame in response to one basket action.

use std::fmt::{Display, Formatter};

use super::collision::apple_caught;
use super::state::{EpisodePhase, EpisodeState};

/// Reward for a caught apple
pub const CATCH_REWARD: i32 = 1;
/// Reward forced on the terminating tick
pub const TERMINATION_REWARD: i32 = -1;

/// Basket movement for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BasketAction {
    MoveLeft,
    #[default]
    Hold,
    MoveRight,
}

impl BasketAction {
    pub const ALL: [BasketAction; 3] = [
        BasketAction::MoveLeft,
        BasketAction::Hold,
        BasketAction::MoveRight,
    ];

    /// Horizontal displacement for the given speed
    pub fn displacement(self, speed: i32) -> i32 {
        match self {
            BasketAction::MoveLeft => -speed,
            BasketAction::Hold => 0,
            BasketAction::MoveRight => speed,
        }
    }
}

impl Display for BasketAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    pub reward: i32,
    pub done: bool,
    /// Head apple landed in the basket
    pub caught: bool,
    /// Apples lost through the bottom this tick
    pub missed: u32,
    /// A scheduled spawn happened
    pub spawned: bool,
}

/// Advance the episode by one tick.
///
/// A terminated episode is not advanced; the outcome reports `done` with
/// zero reward.
pub fn tick(state: &mut EpisodeState, action: BasketAction) -> TickOutcome {
    if state.phase == EpisodePhase::Terminated {
        log::warn!("Tick on terminated episode {} ignored", state.episode);
        return TickOutcome {
            done: true,
            ..Default::default()
        };
    }

    let mut outcome = TickOutcome::default();

    state.frame += 1;

    state
        .basket
        .shift(action.displacement(state.config.basket_speed));

    if state.frame % state.config.spawn_interval() == 0 {
        state.spawn_apple();
        outcome.spawned = true;
    }

    // Fall and expire in one compacting pass
    let gravity = state.config.gravity;
    let floor = state.config.field_height;
    state.apples.retain_mut(|apple| {
        apple.fall(gravity);
        if apple.pos.y >= floor {
            outcome.missed += 1;
            false
        } else {
            true
        }
    });
    state.missed += outcome.missed;

    outcome.caught = state
        .head()
        .is_some_and(|apple| apple_caught(apple, &state.basket));
    if outcome.caught {
        state.apples.remove(0);
        outcome.reward = CATCH_REWARD;
    }

    // Termination penalty overrides a same-tick catch
    if state.missed >= state.config.miss_limit
        || !state.basket.in_bounds(state.config.field_width)
    {
        outcome.reward = TERMINATION_REWARD;
        outcome.done = true;
        state.phase = EpisodePhase::Terminated;
        log::debug!(
            "Episode {} terminated at frame {} (missed {}, basket x {})",
            state.episode,
            state.frame,
            state.missed,
            state.basket.pos.x
        );
    }

    state.score += i64::from(outcome.reward);

    // Observation must always have a head apple
    if state.apples.is_empty() {
        state.spawn_apple();
    }

    outcome
}
