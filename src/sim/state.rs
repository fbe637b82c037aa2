//! Episode state and core simulation types
//!
//! Everything a tick reads or writes lives here. The state is owned by a
//! single environment; nothing is shared between instances.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::settings::EnvConfig;

/// Episode lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EpisodePhase {
    /// Ticks advance the world
    #[default]
    Active,
    /// Episode ended, absorbing until reset
    Terminated,
}

/// A falling apple
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Apple {
    /// Spawn-ordered id
    pub id: u32,
    /// Center position (y grows downward, 0 = top of the field)
    pub pos: IVec2,
    /// Radius
    pub size: i32,
}

impl Apple {
    pub fn new(id: u32, x: i32, size: i32) -> Self {
        Self {
            id,
            pos: IVec2::new(x, 0),
            size,
        }
    }

    /// Advance by one tick of gravity
    pub fn fall(&mut self, gravity: i32) {
        self.pos.y = self.pos.y.saturating_add(gravity);
    }
}

/// The player's basket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Basket {
    /// Anchor: x moves with actions, y is fixed at `field_height - basket_height`
    pub pos: IVec2,
    /// Width/height, also used as the collision half-extent
    pub size: IVec2,
}

impl Basket {
    /// Basket centered horizontally, resting on the bottom of the field
    pub fn centered(config: &EnvConfig) -> Self {
        Self {
            pos: IVec2::new(config.basket_start_x(), config.basket_y()),
            size: IVec2::new(config.basket_width, config.basket_height),
        }
    }

    /// Instantaneous horizontal jump, no clamping
    pub fn shift(&mut self, dx: i32) {
        self.pos.x = self.pos.x.saturating_add(dx);
    }

    /// Whether the anchor lies within `[0, field_width]`
    pub fn in_bounds(&self, field_width: i32) -> bool {
        (0..=field_width).contains(&self.pos.x)
    }
}

/// Complete episode state (deterministic for a given seed and action sequence)
#[derive(Debug, Clone)]
pub struct EpisodeState {
    pub config: EnvConfig,
    /// Spawn position RNG
    pub rng: Pcg32,
    /// Active apples in spawn order; the head is the collision/observation target
    pub apples: Vec<Apple>,
    pub basket: Basket,
    /// Running reward sum, may go negative
    pub score: i64,
    /// Apples lost through the bottom this episode
    pub missed: u32,
    /// Ticks since construction (survives reset)
    pub frame: u64,
    /// Episode index, incremented on every reset
    pub episode: u32,
    pub phase: EpisodePhase,
    /// Next apple id
    next_id: u32,
}

impl EpisodeState {
    /// Fresh state seeded with exactly one apple
    pub fn new(config: EnvConfig) -> Self {
        let mut state = Self {
            rng: Pcg32::seed_from_u64(config.seed),
            apples: Vec::new(),
            basket: Basket::centered(&config),
            score: 0,
            missed: 0,
            frame: 0,
            episode: 0,
            phase: EpisodePhase::Active,
            next_id: 1,
            config,
        };

        state.spawn_apple();

        state
    }

    /// Start the next episode: recenter, reseed the apple sequence, zero counters.
    ///
    /// The frame counter is left untouched, so spawn cadence keeps its
    /// alignment across episodes.
    pub fn reset(&mut self) {
        self.basket = Basket::centered(&self.config);
        self.apples.clear();
        self.spawn_apple();
        self.score = 0;
        self.missed = 0;
        self.episode += 1;
        self.phase = EpisodePhase::Active;
    }

    /// Allocate a new apple id
    fn next_apple_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn an apple at a random column in `[0, field_width]`
    pub fn spawn_apple(&mut self) {
        let x = self.rng.random_range(0..=self.config.field_width);
        self.spawn_apple_at(x);
    }

    /// Spawn an apple at a given column
    pub fn spawn_apple_at(&mut self, x: i32) {
        let id = self.next_apple_id();
        self.apples.push(Apple::new(id, x, self.config.apple_size));
    }

    /// Earliest-spawned active apple
    pub fn head(&self) -> Option<&Apple> {
        self.apples.first()
    }

    pub fn is_terminated(&self) -> bool {
        self.phase == EpisodePhase::Terminated
    }
}
