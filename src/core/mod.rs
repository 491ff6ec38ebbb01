//! Core cube types: colors, faces, facelet state, piece slots, solver
//! phases, RNG, configuration and errors.
//!
//! Everything above this module (moves, solver, sessions) reads and
//! writes the cube only through `CubeState`. Nothing here imports from
//! those modules; the move engine adds `CubeState::apply` from its side.

pub mod color;
pub mod config;
pub mod cubie;
pub mod error;
pub mod phase;
pub mod piece;
pub mod rng;
pub mod state;

pub use color::{Color, Face};
pub use config::{move_delay, EngineConfig, DEFAULT_MOVES_PER_SECOND, DEFAULT_SCRAMBLE_LENGTH};
pub use cubie::{cubie_faces, facelet_at, CubieFaces};
pub use error::CubeError;
pub use phase::Phase;
pub use piece::{CornerSlot, EdgeSlot};
pub use rng::{CubeRng, CubeRngState};
pub use state::{CubeState, FACELET_COUNT};
