//! Reinforcement learning environment contract
//!
//! `AppleBasket` wraps the simulation behind the usual reset/step/render
//! interface. Observations report the basket and the head (oldest) apple,
//! which is not necessarily the closest one.

use std::collections::BTreeMap;
use std::fmt::Display;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::error::{EnvError, Result};
use crate::render::TextRenderer;
use crate::settings::EnvConfig;
use crate::sim::{Apple, Basket, EpisodePhase, EpisodeState, tick};
use crate::spaces::{BoxSpace, Discrete};

pub use crate::sim::BasketAction;

pub type ModelActionType = u8;

/// Discrete action usable by a policy
pub trait Action: Display + Sized + Clone + Copy {
    /// ACTION_SPACE = number of possible actions
    const ACTION_SPACE: ModelActionType;
    /// identifying the Action as a unique value in range (0..Self::ACTION_SPACE)
    fn numeric(&self) -> ModelActionType;
    fn try_from_numeric(value: ModelActionType) -> Result<Self>;
}

impl Action for BasketAction {
    const ACTION_SPACE: ModelActionType = 3;

    fn numeric(&self) -> ModelActionType {
        match self {
            BasketAction::MoveLeft => 0,
            BasketAction::Hold => 1,
            BasketAction::MoveRight => 2,
        }
    }

    fn try_from_numeric(value: ModelActionType) -> Result<Self> {
        match value {
            0 => Ok(BasketAction::MoveLeft),
            1 => Ok(BasketAction::Hold),
            2 => Ok(BasketAction::MoveRight),
            _ => Err(EnvError::InvalidAction(value)),
        }
    }
}

/// Auxiliary step information (always empty for this environment)
pub type Info = BTreeMap<String, String>;

/// `(basket x, head apple x, head apple y)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Observation {
    pub basket_x: i32,
    pub apple_x: i32,
    pub apple_y: i32,
}

impl Observation {
    pub fn of(state: &EpisodeState) -> Self {
        debug_assert!(!state.apples.is_empty(), "observation without a head apple");
        let apple = state.head().map(|a| a.pos).unwrap_or(IVec2::ZERO);
        Self {
            basket_x: state.basket.pos.x,
            apple_x: apple.x,
            apple_y: apple.y,
        }
    }

    pub fn to_array(self) -> [i32; 3] {
        [self.basket_x, self.apple_x, self.apple_y]
    }
}

/// Result of a single step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<O> {
    pub observation: O,
    pub reward: i32,
    pub done: bool,
    pub info: Info,
}

pub trait Environment {
    type Observation;
    type Action: Action;

    /// Starts a new episode and returns its first observation
    fn reset(&mut self) -> Self::Observation;

    /// Performs one time/action-step
    ///
    /// Applies the given `action` to the environment and returns:
    ///   - next observation
    ///   - immediate reward earned during performing that step
    ///   - done flag (episode ended)
    ///   - auxiliary info
    fn step(&mut self, action: Self::Action) -> Step<Self::Observation>;

    /// Text frame of the current state; never changes it
    fn render(&self) -> String;

    /// Step with a raw action index, rejecting values outside the action space
    fn step_numeric(&mut self, action: ModelActionType) -> Result<Step<Self::Observation>> {
        Ok(self.step(<Self::Action as Action>::try_from_numeric(action)?))
    }
}

/// The apple basket environment
#[derive(Debug)]
pub struct AppleBasket {
    state: EpisodeState,
    observation: Observation,
    renderer: TextRenderer,
}

impl AppleBasket {
    /// Build an environment from a validated config
    pub fn new(config: EnvConfig) -> Result<Self> {
        config.validate()?;
        let state = EpisodeState::new(config);
        log::info!("Apple basket environment created (seed {})", state.config.seed);
        Ok(Self {
            observation: Observation::of(&state),
            state,
            renderer: TextRenderer::default(),
        })
    }

    pub fn with_renderer(mut self, renderer: TextRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn action_space(&self) -> Discrete {
        Discrete::new(BasketAction::ACTION_SPACE)
    }

    pub fn observation_space(&self) -> BoxSpace {
        let c = &self.state.config;
        BoxSpace::new([0, 0, 0], [c.field_width, c.field_width, c.field_height])
    }

    /// Last observation returned by reset/step
    pub fn observation(&self) -> Observation {
        self.observation
    }

    pub fn state(&self) -> &EpisodeState {
        &self.state
    }

    pub fn config(&self) -> &EnvConfig {
        &self.state.config
    }

    pub fn basket(&self) -> &Basket {
        &self.state.basket
    }

    pub fn apples(&self) -> &[Apple] {
        &self.state.apples
    }

    pub fn score(&self) -> i64 {
        self.state.score
    }

    pub fn missed(&self) -> u32 {
        self.state.missed
    }

    pub fn frame(&self) -> u64 {
        self.state.frame
    }

    pub fn episode(&self) -> u32 {
        self.state.episode
    }

    pub fn phase(&self) -> EpisodePhase {
        self.state.phase
    }
}

impl Default for AppleBasket {
    fn default() -> Self {
        let state = EpisodeState::new(EnvConfig::default());
        Self {
            observation: Observation::of(&state),
            state,
            renderer: TextRenderer::default(),
        }
    }
}

impl Environment for AppleBasket {
    type Observation = Observation;
    type Action = BasketAction;

    fn reset(&mut self) -> Observation {
        self.state.reset();
        self.observation = Observation::of(&self.state);
        log::debug!("Episode {} started", self.state.episode);
        self.observation
    }

    fn step(&mut self, action: BasketAction) -> Step<Observation> {
        let outcome = tick(&mut self.state, action);
        self.observation = Observation::of(&self.state);
        Step {
            observation: self.observation,
            reward: outcome.reward,
            done: outcome.done,
            info: Info::new(),
        }
    }

    fn render(&self) -> String {
        self.renderer.render(&self.state)
    }
}
