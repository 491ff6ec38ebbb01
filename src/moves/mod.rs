//! Move engine: notation, sequences and facelet permutation.
//!
//! ## Semantics
//!
//! A move permutes the colors of the facelets on one layer. Every move is
//! a bijection on facelets, so color counts never change, and:
//!
//! - `X` followed by `X'` is the identity
//! - `X2` equals `X X`
//! - `X` applied four times is the identity
//!
//! ```
//! use rust_cube::core::CubeState;
//! use rust_cube::moves::Algorithm;
//!
//! let mut cube = CubeState::solved();
//! let alg: Algorithm = "R U R' U'".parse().unwrap();
//! for _ in 0..6 {
//!     cube.apply_all(&alg);
//! }
//! assert!(cube.is_solved());
//! ```

pub mod algorithm;
pub mod notation;
pub mod table;

pub use algorithm::Algorithm;
pub use notation::{Direction, Layer, Move};
pub use table::{layer_facelets, LayerFacelets, PermutationTable, OUTER_CYCLE, SLICE_CYCLE};

use crate::core::{Color, CubeState};

/// Apply one move to a state in place.
pub fn apply(state: &mut CubeState, mv: Move) {
    match layer_facelets(mv.layer) {
        LayerFacelets::Outer(facelets) => {
            permute(state, facelets, OUTER_CYCLE.sources(mv.direction));
        }
        LayerFacelets::Slice(facelets) => {
            permute(state, facelets, SLICE_CYCLE.sources(mv.direction));
        }
    }
}

impl CubeState {
    /// Apply one move in place.
    pub fn apply(&mut self, mv: Move) {
        apply(self, mv);
    }

    /// Apply a sequence of moves in place.
    pub fn apply_all<'a>(&mut self, sequence: impl IntoIterator<Item = &'a Move>) {
        for &mv in sequence {
            apply(self, mv);
        }
    }
}

/// Gather, permute, scatter.
fn permute<const N: usize>(state: &mut CubeState, facelets: &[usize; N], sources: &[usize; N]) {
    let old: [Color; N] = facelets.map(|i| state[i]);
    for (&facelet, &source) in facelets.iter().zip(sources) {
        state.set(facelet, old[source]);
    }
}
