//! Scramble generator.
//!
//! Each step draws an outer layer and a direction. The pair is kept only
//! when its layer differs from the previously kept layer, so no two
//! adjacent moves turn the same face. Opposite faces may follow each other
//! (`R L R` is allowed).

use log::debug;

use crate::core::{CubeRng, CubeRngState, EngineConfig, DEFAULT_SCRAMBLE_LENGTH};
use crate::moves::{Algorithm, Direction, Layer, Move};

/// Produces scramble sequences from a deterministic RNG.
#[derive(Clone, Debug)]
pub struct ScrambleGenerator {
    rng: CubeRng,
    length: usize,
}

impl ScrambleGenerator {
    /// Generator with the given seed and the default length.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(CubeRng::new(seed))
    }

    /// Generator over an existing RNG.
    #[must_use]
    pub fn from_rng(rng: CubeRng) -> Self {
        Self {
            rng,
            length: DEFAULT_SCRAMBLE_LENGTH,
        }
    }

    /// Generator configured from an engine config. Without a configured
    /// seed a fresh one is drawn.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => CubeRng::new(seed),
            None => CubeRng::from_entropy(),
        };
        Self::from_rng(rng).with_length(config.scramble_length)
    }

    /// Set the number of moves per scramble.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Moves per scramble.
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Seed of the underlying RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// RNG position, for resuming the scramble stream later.
    #[must_use]
    pub fn rng_state(&self) -> CubeRngState {
        self.rng.state()
    }

    /// Draw the next scramble.
    pub fn generate(&mut self) -> Algorithm {
        let mut scramble = Algorithm::new();
        let mut previous: Option<Layer> = None;

        while scramble.len() < self.length {
            let layer = Layer::OUTER[self.rng.gen_range_usize(0..Layer::OUTER.len())];
            let direction = Direction::ALL[self.rng.gen_range_usize(0..Direction::ALL.len())];
            if previous == Some(layer) {
                continue;
            }
            scramble.push(Move::new(layer, direction));
            previous = Some(layer);
        }

        debug!("scramble (seed {}): {scramble}", self.rng.seed());
        scramble
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_length() {
        let scramble = ScrambleGenerator::new(1).generate();
        assert_eq!(scramble.len(), 25);
    }

    #[test]
    fn test_same_seed_same_scramble() {
        let a = ScrambleGenerator::new(99).generate();
        let b = ScrambleGenerator::new(99).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_successive_scrambles_differ() {
        let mut generator = ScrambleGenerator::new(5);
        let first = generator.generate();
        let second = generator.generate();
        assert_ne!(first, second);
    }

    #[test]
    fn test_no_repeated_layer() {
        let mut generator = ScrambleGenerator::new(7).with_length(200);
        let scramble = generator.generate();
        for pair in scramble.as_slice().windows(2) {
            assert_ne!(pair[0].layer, pair[1].layer);
        }
    }

    #[test]
    fn test_only_outer_layers() {
        let scramble = ScrambleGenerator::new(11).with_length(100).generate();
        assert!(scramble.iter().all(|mv| !mv.layer.is_slice()));
    }

    #[test]
    fn test_zero_length() {
        let scramble = ScrambleGenerator::new(3).with_length(0).generate();
        assert!(scramble.is_empty());
    }

    #[test]
    fn test_resume_from_rng_state() {
        let mut generator = ScrambleGenerator::new(42);
        generator.generate();
        let state = generator.rng_state();
        let expected = generator.generate();

        let mut resumed = ScrambleGenerator::from_rng(CubeRng::from_state(&state));
        assert_eq!(resumed.generate(), expected);
    }

    #[test]
    fn test_from_config() {
        let config = EngineConfig::default().with_seed(8).with_scramble_length(12);
        let mut generator = ScrambleGenerator::from_config(&config);

        assert_eq!(generator.seed(), 8);
        assert_eq!(generator.length(), 12);
        assert_eq!(generator.generate(), ScrambleGenerator::new(8).with_length(12).generate());
    }
}
