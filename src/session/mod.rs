//! Step-by-step sessions: scramble, solve and playback with pause,
//! cancellation and adjustable speed.
//!
//! ## Architecture
//!
//! - **`CubeEngine`**: owns the cube; each session borrows it mutably
//! - **`StepExecutor`**: runs one session's moves through the per-move
//!   protocol (pause, delay, cancel check, apply, report)
//! - **`SessionControl`**: cloneable handle other tasks use to steer the
//!   active session
//! - **`StepObserver`**: receives a `StepEvent` after every move
//!
//! Suspension points exist only between moves. A cancelled session is not
//! an error: it ends with `SessionOutcome::Cancelled` and keeps every move
//! already applied.

pub mod control;
pub mod engine;
pub mod event;
pub mod executor;
pub mod observer;

pub use control::SessionControl;
pub use engine::CubeEngine;
pub use event::{
    MoveRecord, SessionError, SessionEvent, SessionKind, SessionOutcome, SessionReport, StepEvent,
};
pub use executor::{SolveSession, StepExecutor};
pub use observer::{ChannelObserver, StepObserver};
