//! AI configuration: difficulty tiers and the search settings they imply.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::constants::{DEPTH_EASY, DEPTH_HARD, DEPTH_MEDIUM, RANDOM_OVERRIDE_PROB};
use crate::eval::EvalWeights;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Difficulty {
    /// Shallow search, sometimes plays a random move
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Search depth for this tier.
    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => DEPTH_EASY,
            Difficulty::Medium => DEPTH_MEDIUM,
            Difficulty::Hard => DEPTH_HARD,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "easy" => Ok(Difficulty::Easy),
            "2" | "medium" => Ok(Difficulty::Medium),
            "3" | "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// Settings for one AI player. Built once and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    /// Maximum search depth in plies (at least 1)
    pub depth: u8,
    /// Chance of a random move; only honoured on the Easy tier
    pub random_override: f64,
    pub weights: EvalWeights,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::new(Difficulty::Medium)
    }
}

impl AiConfig {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            depth: difficulty.depth(),
            random_override: RANDOM_OVERRIDE_PROB,
            weights: EvalWeights::default(),
        }
    }

    /// Override the search depth. Depth 0 is raised to 1.
    pub fn with_depth(self, depth: u8) -> Self {
        Self {
            depth: depth.max(1),
            ..self
        }
    }

    /// Override the random move probability, clamped to `[0, 1]`.
    pub fn with_random_override(self, p: f64) -> Self {
        Self {
            random_override: p.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn with_weights(self, weights: EvalWeights) -> Self {
        Self { weights, ..self }
    }

    /// Probability of the random override actually applying for this config.
    pub fn effective_override(&self) -> f64 {
        if self.difficulty == Difficulty::Easy {
            self.random_override
        } else {
            0.0
        }
    }
}
