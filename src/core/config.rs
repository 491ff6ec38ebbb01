//! Engine configuration.
//!
//! Callers configure the engine at startup with `EngineConfig`:
//! - playback speed for step-by-step sessions
//! - scramble length
//! - optional RNG seed for reproducible scrambles
//!
//! Speed can also be changed while a session runs, through
//! `SessionControl::set_speed`.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::CubeError;

/// Default playback speed in moves per second.
pub const DEFAULT_MOVES_PER_SECOND: f64 = 10.0;

/// Default scramble length.
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 25;

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Playback speed in moves per second (default: 10).
    /// `f64::INFINITY` plays moves with no delay.
    pub moves_per_second: f64,

    /// Number of moves in a generated scramble (default: 25).
    pub scramble_length: usize,

    /// Seed for the scramble RNG.
    /// `None` draws a fresh seed when the engine is built.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            moves_per_second: DEFAULT_MOVES_PER_SECOND,
            scramble_length: DEFAULT_SCRAMBLE_LENGTH,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Config that plays moves without delay.
    #[must_use]
    pub fn instant() -> Self {
        Self::default().with_speed(f64::INFINITY)
    }

    /// Set playback speed.
    pub fn with_speed(mut self, moves_per_second: f64) -> Self {
        self.moves_per_second = moves_per_second;
        self
    }

    /// Set scramble length.
    pub fn with_scramble_length(mut self, length: usize) -> Self {
        self.scramble_length = length;
        self
    }

    /// Set the scramble seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the configured values are usable.
    pub fn validate(&self) -> Result<(), CubeError> {
        move_delay(self.moves_per_second).map(|_| ())
    }

    /// Per-move delay implied by the configured speed.
    pub fn move_delay(&self) -> Result<Duration, CubeError> {
        move_delay(self.moves_per_second)
    }
}

/// Convert a speed in moves per second into a per-move delay.
///
/// Speed must be positive and not NaN; infinity maps to zero delay. A
/// speed so slow that its delay overflows `Duration` is rejected too.
pub fn move_delay(moves_per_second: f64) -> Result<Duration, CubeError> {
    if moves_per_second.is_nan() || moves_per_second <= 0.0 {
        return Err(CubeError::InvalidSpeed(moves_per_second));
    }
    if moves_per_second.is_infinite() {
        return Ok(Duration::ZERO);
    }
    Duration::try_from_secs_f64(1.0 / moves_per_second)
        .map_err(|_| CubeError::InvalidSpeed(moves_per_second))
}
