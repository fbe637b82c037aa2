//! World configuration
//!
//! Every world constant is adjustable and can be persisted as JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{EnvError, Result};

/// Largest accepted length, speed or gravity, leaving headroom for
/// anchor plus extent sums in the simulation
pub const MAX_EXTENT: i32 = i32::MAX / 4;

/// Environment configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    // === Field ===
    pub field_width: i32,
    pub field_height: i32,

    // === Basket ===
    /// Basket width (collision box extends this far either side of the anchor)
    pub basket_width: i32,
    /// Basket height (anchor offset from the bottom, collision half-extent)
    pub basket_height: i32,
    /// Displacement per move action
    pub basket_speed: i32,

    // === Apples ===
    pub apple_size: i32,
    /// Fall per tick
    pub gravity: i32,
    pub fps: u32,
    pub apples_per_second: u32,

    // === Episode ===
    /// Missed apples that terminate the episode
    pub miss_limit: u32,
    /// Seed for apple spawn positions
    pub seed: u64,

    // === Render ===
    /// Draw the info panel above the field
    pub show_panel: bool,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            basket_width: BASKET_WIDTH,
            basket_height: BASKET_HEIGHT,
            basket_speed: BASKET_SPEED,

            apple_size: APPLE_SIZE,
            gravity: GRAVITY,
            fps: FPS,
            apples_per_second: APPLES_PER_SECOND,

            miss_limit: MISS_LIMIT,
            seed: 0,

            show_panel: true,
        }
    }
}

impl EnvConfig {
    /// Default config with a different RNG seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Ticks between apple spawns (at least one)
    pub fn spawn_interval(&self) -> u64 {
        u64::from(self.fps.checked_div(self.apples_per_second).unwrap_or(1).max(1))
    }

    /// Vertical anchor of the basket (fixed for the whole episode)
    pub fn basket_y(&self) -> i32 {
        self.field_height - self.basket_height
    }

    /// Horizontal midpoint where the basket starts
    pub fn basket_start_x(&self) -> i32 {
        self.field_width / 2
    }

    /// Reject configs the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("basket_width", self.basket_width),
            ("basket_height", self.basket_height),
            ("gravity", self.gravity),
        ];
        for (name, value) in positive {
            if value <= 0 {
                return Err(EnvError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.basket_speed < 0 || self.apple_size < 0 {
            return Err(EnvError::InvalidConfig(
                "basket_speed and apple_size must not be negative".to_string(),
            ));
        }
        let bounded = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("basket_width", self.basket_width),
            ("basket_height", self.basket_height),
            ("basket_speed", self.basket_speed),
            ("apple_size", self.apple_size),
            ("gravity", self.gravity),
        ];
        for (name, value) in bounded {
            if value > MAX_EXTENT {
                return Err(EnvError::InvalidConfig(format!(
                    "{name} must be at most {MAX_EXTENT}, got {value}"
                )));
            }
        }
        if self.basket_height > self.field_height {
            return Err(EnvError::InvalidConfig(format!(
                "basket_height {} exceeds field_height {}",
                self.basket_height, self.field_height
            )));
        }
        if self.fps == 0 || self.apples_per_second == 0 {
            return Err(EnvError::InvalidConfig(
                "fps and apples_per_second must be positive".to_string(),
            ));
        }
        if self.apples_per_second > self.fps {
            return Err(EnvError::InvalidConfig(format!(
                "apples_per_second {} exceeds fps {}",
                self.apples_per_second, self.fps
            )));
        }
        if self.miss_limit == 0 {
            return Err(EnvError::InvalidConfig(
                "miss_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = Self::from_json(&fs::read_to_string(path)?)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        log::info!("Config saved to {}", path.display());
        Ok(())
    }
}
