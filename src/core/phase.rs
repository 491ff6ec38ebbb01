//! Solver phases, shared with errors and session events.

use serde::{Deserialize, Serialize};

/// The five phases of the layer-by-layer method, in solve order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// White edges around the bottom center.
    Cross,
    /// White corners, completing the first layer.
    FirstLayer,
    /// The four middle-layer edges.
    SecondLayer,
    /// Orient the last layer: yellow cross, then yellow corners.
    LastLayerOrientation,
    /// Permute the last layer: corners, then edges.
    LastLayerPermutation,
}

impl Phase {
    /// All phases in solve order.
    pub const ALL: [Phase; 5] = [
        Phase::Cross,
        Phase::FirstLayer,
        Phase::SecondLayer,
        Phase::LastLayerOrientation,
        Phase::LastLayerPermutation,
    ];

    /// Number of phases.
    pub const COUNT: usize = Self::ALL.len();

    /// Position in solve order, starting at 0.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Phase::Cross => 0,
            Phase::FirstLayer => 1,
            Phase::SecondLayer => 2,
            Phase::LastLayerOrientation => 3,
            Phase::LastLayerPermutation => 4,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Cross => "White Cross",
            Phase::FirstLayer => "First Layer",
            Phase::SecondLayer => "Second Layer",
            Phase::LastLayerOrientation => "OLL",
            Phase::LastLayerPermutation => "PLL",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
