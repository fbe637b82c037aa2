//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete tick per action
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{BasketBox, apple_caught};
pub use state::{Apple, Basket, EpisodePhase, EpisodeState};
pub use tick::{BasketAction, CATCH_REWARD, TERMINATION_REWARD, TickOutcome, tick};
