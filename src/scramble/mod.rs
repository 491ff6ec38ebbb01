//! Random scramble generation.
//!
//! Scrambles are drawn from a seeded [`CubeRng`](crate::core::CubeRng), so
//! the same seed always yields the same sequence.

pub mod generator;

pub use generator::ScrambleGenerator;
