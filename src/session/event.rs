//! Session events, records and outcomes.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::core::{CubeError, CubeState, Phase};
use crate::moves::Move;

/// What a session is doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionKind {
    Scramble,
    Solve,
    /// Playback of a caller-supplied sequence.
    Algorithm,
}

impl std::fmt::Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SessionKind::Scramble => "scramble",
            SessionKind::Solve => "solve",
            SessionKind::Algorithm => "algorithm",
        })
    }
}

/// One applied move in a session's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based position within the session.
    pub index: usize,
    pub mv: Move,
    /// Solve phase that emitted the move, if any.
    pub phase: Option<Phase>,
}

/// Reported after every applied move.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepEvent {
    pub kind: SessionKind,
    pub phase: Option<Phase>,
    pub mv: Move,
    /// 1-based, increases by one per event.
    pub move_index: usize,
    /// Percentage in `0.0..=100.0`.
    pub progress: f64,
    /// Cube after the move.
    pub state: CubeState,
}

/// Summary of a session that ran to completion or was cancelled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReport {
    pub kind: SessionKind,
    pub moves: Vector<MoveRecord>,
    pub move_count: usize,
    pub elapsed: Duration,
}

/// How a session ended, when it did not fail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionOutcome {
    Finished(SessionReport),
    Cancelled(SessionReport),
}

impl SessionOutcome {
    /// The report, either way.
    #[must_use]
    pub fn report(&self) -> &SessionReport {
        match self {
            SessionOutcome::Finished(report) | SessionOutcome::Cancelled(report) => report,
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SessionOutcome::Cancelled(_))
    }
}

/// A session failure other than cancellation, with where it happened.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{kind} session failed after {move_index} moves{}: {source}", phase_suffix(.phase))]
pub struct SessionError {
    pub kind: SessionKind,
    pub phase: Option<Phase>,
    /// Moves applied before the failure.
    pub move_index: usize,
    pub source: CubeError,
}

fn phase_suffix(phase: &Option<Phase>) -> String {
    phase.map(|p| format!(" in {p}")).unwrap_or_default()
}

/// Everything a session reports, as sent over a channel.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    Step(StepEvent),
    Ended(SessionOutcome),
    Failed(SessionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_names_phase() {
        let err = SessionError {
            kind: SessionKind::Solve,
            phase: Some(Phase::LastLayerPermutation),
            move_index: 120,
            source: CubeError::UnreachableCase {
                phase: Phase::LastLayerPermutation,
                detail: "edge permutation",
            },
        };
        assert_eq!(
            err.to_string(),
            "solve session failed after 120 moves in PLL: PLL: no case matched (edge permutation)"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_error_message_without_phase() {
        let err = SessionError {
            kind: SessionKind::Algorithm,
            phase: None,
            move_index: 0,
            source: CubeError::InvalidSpeed(0.0),
        };
        assert_eq!(
            err.to_string(),
            "algorithm session failed after 0 moves: invalid speed: 0 moves per second"
        );
    }

    #[test]
    fn test_outcome_report() {
        let report = SessionReport {
            kind: SessionKind::Scramble,
            moves: Vector::new(),
            move_count: 0,
            elapsed: Duration::ZERO,
        };
        let outcome = SessionOutcome::Cancelled(report.clone());
        assert!(outcome.is_cancelled());
        assert_eq!(outcome.report(), &report);
        assert!(!SessionOutcome::Finished(report).is_cancelled());
    }
}
