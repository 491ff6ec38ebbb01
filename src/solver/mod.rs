//! Layer-by-layer solver.
//!
//! ## Phases
//!
//! 1. **White Cross**: white edges around the bottom
//! 2. **First Layer**: white corners
//! 3. **Second Layer**: middle edges
//! 4. **OLL**: yellow cross, then yellow corners
//! 5. **PLL**: last-layer corners, then edges
//!
//! Every phase is a fixed decision procedure over ordered case tables: it
//! reads a few facelets, picks the first matching case and emits that
//! case's algorithm. The cube is mutated as moves are emitted, so later
//! decisions see earlier moves.
//!
//! A table with no matching case reports `CubeError::UnreachableCase`.
//! That only happens for cube states no sequence of moves can reach.
//!
//! ```
//! use rust_cube::core::CubeState;
//! use rust_cube::moves::Algorithm;
//! use rust_cube::solver;
//!
//! let mut cube = CubeState::solved();
//! cube.apply_all(&"R U F' L2 D B".parse::<Algorithm>().unwrap());
//! let solution = solver::solve(&mut cube).unwrap();
//! assert!(cube.is_solved());
//! assert!(solution.move_count() > 0);
//! ```

pub mod corners;
pub mod cross;
pub mod oll;
pub mod pll;
pub mod recorder;
pub mod second_layer;
pub mod solution;

pub use crate::core::Phase;
pub use recorder::MoveRecorder;
pub use solution::{PhaseSolution, Solution};

use log::debug;

use crate::core::{CubeError, CubeState};
use crate::moves::Algorithm;

/// Run one phase on a cube, returning the moves it applied.
pub fn solve_phase(phase: Phase, state: &mut CubeState) -> Result<Algorithm, CubeError> {
    let mut recorder = MoveRecorder::new(state);
    match phase {
        Phase::Cross => cross::solve(&mut recorder)?,
        Phase::FirstLayer => corners::solve(&mut recorder)?,
        Phase::SecondLayer => second_layer::solve(&mut recorder)?,
        Phase::LastLayerOrientation => oll::solve(&mut recorder)?,
        Phase::LastLayerPermutation => pll::solve(&mut recorder)?,
    }
    let moves = recorder.finish();
    debug!("{phase}: {} moves", moves.len());
    Ok(moves)
}

/// Solve a cube in place, phase by phase.
///
/// On error the cube is left where the failing phase stopped.
pub fn solve(state: &mut CubeState) -> Result<Solution, CubeError> {
    let mut solution = Solution::default();
    for phase in Phase::ALL {
        let moves = solve_phase(phase, state)?;
        solution.phases.push(PhaseSolution { phase, moves });
    }
    Ok(solution)
}
