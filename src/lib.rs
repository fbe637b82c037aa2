//! Apple Basket - a catch-the-falling-apples game as an RL environment
//!
//! Core modules:
//! - `sim`: Deterministic simulation (apples, basket, collisions, tick)
//! - `env`: Reinforcement learning contract (reset/step/render)
//! - `spaces`: Action and observation spaces
//! - `settings`: Data-driven world configuration
//! - `render`: Text frame rendering of the world
//! - `policy`: Baseline policies and evaluation

pub mod env;
pub mod error;
pub mod policy;
pub mod render;
pub mod settings;
pub mod sim;
pub mod spaces;

pub use env::{AppleBasket, BasketAction, Environment, Observation, Step};
pub use error::EnvError;
pub use settings::EnvConfig;

/// World configuration defaults
pub mod consts {
    /// Field dimensions
    pub const FIELD_WIDTH: i32 = 400;
    pub const FIELD_HEIGHT: i32 = 600;

    /// Basket size (also the collision half-extent)
    pub const BASKET_WIDTH: i32 = 30;
    pub const BASKET_HEIGHT: i32 = 20;
    /// Horizontal displacement per move action
    pub const BASKET_SPEED: i32 = 10;

    /// Apple radius
    pub const APPLE_SIZE: i32 = 10;
    /// Vertical fall per tick
    pub const GRAVITY: i32 = 4;

    /// Simulation frames per second
    pub const FPS: u32 = 120;
    /// Apples spawned per second
    pub const APPLES_PER_SECOND: u32 = 4;

    /// Uncaught apples that end an episode
    pub const MISS_LIMIT: u32 = 10;
}
