//! # rust-cube
//!
//! A Rubik's cube state engine with a layer-by-layer (beginner CFOP) solver.
//!
//! ## Design Principles
//!
//! 1. **Facelets Are the Model**: The cube is 54 colors in a fixed layout.
//!    Every move is a permutation of those colors; nothing else changes them.
//!
//! 2. **Tables Over Trees**: Each solver phase is an ordered list of
//!    (pattern, algorithm) cases. The first match wins, so source order is
//!    priority order.
//!
//! 3. **Cooperative Sessions**: Long runs are driven one move at a time and
//!    can be paused, slowed down or cancelled between moves.
//!
//! ## Modules
//!
//! - `core`: Colors, faces, cube state, piece slots, RNG, configuration, errors
//! - `moves`: Move notation, sequences and the permutation engine
//! - `scramble`: Seeded random scrambles
//! - `solver`: Five-phase decision-table solver
//! - `session`: Step executor, session control and the caller-facing engine

pub mod core;
pub mod moves;
pub mod scramble;
pub mod session;
pub mod solver;

// Re-export commonly used types
pub use crate::core::{
    Color, CornerSlot, CubeError, CubeRng, CubeRngState, CubeState, EdgeSlot, EngineConfig, Face,
};

pub use crate::moves::{Algorithm, Direction, Layer, Move};

pub use crate::scramble::ScrambleGenerator;

pub use crate::solver::{solve, Phase, PhaseSolution, Solution};

pub use crate::session::{
    ChannelObserver, CubeEngine, MoveRecord, SessionControl, SessionError, SessionEvent,
    SessionKind, SessionOutcome, SessionReport, StepEvent, StepExecutor, StepObserver,
};
