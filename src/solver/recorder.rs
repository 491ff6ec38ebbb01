//! Move recorder: a cube plus the moves applied to it so far.

use log::trace;

use crate::core::{Color, CubeError, CubeState};
use crate::moves::{Algorithm, Move};

/// Applies table algorithms to a cube and keeps the emitted moves.
///
/// Phase procedures read the cube only through the recorder, so every
/// decision sees the effect of every move emitted before it.
#[derive(Debug)]
pub struct MoveRecorder<'a> {
    state: &'a mut CubeState,
    moves: Algorithm,
}

impl<'a> MoveRecorder<'a> {
    /// Start recording on a cube.
    pub fn new(state: &'a mut CubeState) -> Self {
        Self {
            state,
            moves: Algorithm::new(),
        }
    }

    /// Current cube.
    #[must_use]
    pub fn state(&self) -> &CubeState {
        self.state
    }

    /// Color at a facelet.
    #[must_use]
    pub fn color(&self, facelet: usize) -> Color {
        self.state[facelet]
    }

    /// Whether every listed facelet is yellow.
    #[must_use]
    pub fn all_yellow(&self, facelets: &[usize]) -> bool {
        facelets.iter().all(|&i| self.state[i] == Color::Yellow)
    }

    /// Whether none of the listed facelets is yellow.
    #[must_use]
    pub fn none_yellow(&self, facelets: &[usize]) -> bool {
        facelets.iter().all(|&i| self.state[i] != Color::Yellow)
    }

    /// Apply one move and record it.
    pub fn push(&mut self, mv: Move) {
        trace!("{mv}");
        self.state.apply(mv);
        self.moves.push(mv);
    }

    /// Parse a table algorithm, then apply and record each move.
    pub fn run(&mut self, notation: &str) -> Result<(), CubeError> {
        let alg: Algorithm = notation.parse()?;
        for mv in alg {
            self.push(mv);
        }
        Ok(())
    }

    /// Moves recorded so far.
    #[must_use]
    pub fn moves(&self) -> &Algorithm {
        &self.moves
    }

    /// Stop recording and return the moves.
    #[must_use]
    pub fn finish(self) -> Algorithm {
        self.moves
    }
}
