//! Action and observation spaces

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Finite set of actions `0..n`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discrete {
    pub n: u8,
}

impl Discrete {
    pub fn new(n: u8) -> Self {
        Self { n }
    }

    pub fn contains(&self, value: u8) -> bool {
        value < self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Uniformly sample an action index; `None` for the empty space
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Option<u8> {
        if self.is_empty() {
            return None;
        }
        Some(rng.random_range(0..self.n))
    }
}

/// Integer box with inclusive bounds per dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxSpace {
    pub low: [i32; 3],
    pub high: [i32; 3],
}

impl BoxSpace {
    pub fn new(low: [i32; 3], high: [i32; 3]) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, value: &[i32; 3]) -> bool {
        value
            .iter()
            .zip(self.low.iter().zip(self.high.iter()))
            .all(|(v, (lo, hi))| lo <= v && v <= hi)
    }
}
