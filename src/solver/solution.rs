//! Solve results.

use serde::{Deserialize, Serialize};

use crate::core::Phase;
use crate::moves::Algorithm;

/// Moves emitted by one phase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseSolution {
    pub phase: Phase,
    pub moves: Algorithm,
}

/// Moves emitted by every phase, in solve order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub phases: Vec<PhaseSolution>,
}

impl Solution {
    /// Total number of moves across all phases.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.phases.iter().map(|p| p.moves.len()).sum()
    }

    /// Moves of one phase, if it ran.
    #[must_use]
    pub fn phase(&self, phase: Phase) -> Option<&Algorithm> {
        self.phases
            .iter()
            .find(|p| p.phase == phase)
            .map(|p| &p.moves)
    }

    /// All moves as one sequence.
    #[must_use]
    pub fn moves(&self) -> Algorithm {
        self.phases
            .iter()
            .flat_map(|p| p.moves.iter().copied())
            .collect()
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for p in &self.phases {
            writeln!(f, "{:<12} ({:>3}) {}", p.phase.name(), p.moves.len(), p.moves)?;
        }
        Ok(())
    }
}
