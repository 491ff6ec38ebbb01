//! First-layer corners.
//!
//! Each white corner is brought to DFR with white facing down, then `D`
//! turns the next slot into place.

use log::debug;

use super::recorder::MoveRecorder;
use crate::core::{Color, CornerSlot, CubeError, Phase};

/// Side-color pairs of the white corners, in placement order.
pub const TARGETS: [(Color, Color); 4] = [
    (Color::Red, Color::Green),
    (Color::Red, Color::Blue),
    (Color::Orange, Color::Blue),
    (Color::Orange, Color::Green),
];

/// A white corner's slot, the facelet position (0-2) showing white, and the
/// algorithm that inserts it.
#[derive(Clone, Copy, Debug)]
pub struct CornerCase {
    pub slot: CornerSlot,
    pub white: usize,
    pub algorithm: &'static str,
}

const fn case(slot: CornerSlot, white: usize, algorithm: &'static str) -> CornerCase {
    CornerCase {
        slot,
        white,
        algorithm,
    }
}

pub static CASES: [CornerCase; 24] = [
    case(CornerSlot::UFL, 0, "U' R U' R' F' U2 F"),
    case(CornerSlot::UFL, 1, "U F' U2 F"),
    case(CornerSlot::UFL, 2, "R U' R'"),
    case(CornerSlot::UFR, 0, "R U' R' F' U2 F"),
    case(CornerSlot::UFR, 1, "U R U' R'"),
    case(CornerSlot::UFR, 2, "U' F' U F"),
    case(CornerSlot::UBL, 0, "U2 R U' R' F' U2 F"),
    case(CornerSlot::UBL, 1, "R U2 R'"),
    case(CornerSlot::UBL, 2, "F' U2 F"),
    case(CornerSlot::UBR, 0, "U R U' R' F' U2 F"),
    case(CornerSlot::UBR, 1, "F' U F"),
    case(CornerSlot::UBR, 2, "U' R U2 R'"),
    case(CornerSlot::DFL, 0, "F U F' R U2 R'"),
    case(CornerSlot::DFL, 1, "F U F2 U2 F"),
    case(CornerSlot::DFL, 2, "F U' F' R U' R'"),
    case(CornerSlot::DFR, 0, ""),
    case(CornerSlot::DFR, 1, "F' U2 F R U2 R'"),
    case(CornerSlot::DFR, 2, "F' U F U' F' U F"),
    case(CornerSlot::DBL, 0, "B' U B R U2 R'"),
    case(CornerSlot::DBL, 1, "B' U' B R U' R'"),
    case(CornerSlot::DBL, 2, "B' U B F' U2 F"),
    case(CornerSlot::DBR, 0, "B U B' U R U' R'"),
    case(CornerSlot::DBR, 1, "R' U R F' U F"),
    case(CornerSlot::DBR, 2, "R' U' R2 U2 R'"),
];

impl CornerCase {
    fn matches(&self, recorder: &MoveRecorder<'_>, (a, b): (Color, Color)) -> bool {
        let colors = recorder.state().corner(self.slot);
        if colors[self.white] != Color::White {
            return false;
        }
        let (x, y) = match self.white {
            0 => (colors[1], colors[2]),
            1 => (colors[0], colors[2]),
            _ => (colors[0], colors[1]),
        };
        (x, y) == (a, b) || (x, y) == (b, a)
    }
}

/// Complete the first layer.
pub fn solve(recorder: &mut MoveRecorder<'_>) -> Result<(), CubeError> {
    for target in TARGETS {
        let case = CASES
            .iter()
            .find(|case| case.matches(recorder, target))
            .ok_or(CubeError::UnreachableCase {
                phase: Phase::FirstLayer,
                detail: "white corner not found",
            })?;
        debug!(
            "first layer {}/{}: {:?} white at {} -> {:?}",
            target.0, target.1, case.slot, case.white, case.algorithm
        );
        recorder.run(case.algorithm)?;
        recorder.run("D")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CubeState;
    use crate::moves::Algorithm;
    use crate::solver::cross;

    fn first_layer_done(state: &CubeState) -> bool {
        let down = &state.facelets()[45..54];
        let rings = [15..18, 24..27, 33..36, 42..45];
        down.iter().all(|&c| c == Color::White)
            && rings.into_iter().all(|range| {
                let row = &state.facelets()[range.clone()];
                row.iter().all(|&c| c == state[range.start - 2])
            })
    }

    #[test]
    fn test_all_algorithms_parse() {
        for case in CASES.iter() {
            assert!(case.algorithm.parse::<Algorithm>().is_ok(), "{case:?}");
        }
    }

    #[test]
    fn test_every_corner_twist_is_covered() {
        for slot in CornerSlot::ALL {
            for white in 0..3 {
                let count = CASES
                    .iter()
                    .filter(|c| c.slot == slot && c.white == white)
                    .count();
                assert_eq!(count, 1, "{slot:?} white at {white}");
            }
        }
    }

    #[test]
    fn test_solved_cube_emits_only_d_turns() {
        let mut state = CubeState::solved();
        let mut recorder = MoveRecorder::new(&mut state);
        solve(&mut recorder).unwrap();

        assert_eq!(recorder.finish().to_string(), "D D D D");
        assert!(state.is_solved());
    }

    #[test]
    fn test_first_layer_after_cross() {
        let mut state = CubeState::solved();
        state.apply_all(&"R2 D' B L U2 F R' D2 L' B2 U".parse::<Algorithm>().unwrap());

        let mut recorder = MoveRecorder::new(&mut state);
        cross::solve(&mut recorder).unwrap();
        solve(&mut recorder).unwrap();

        assert!(first_layer_done(&state));
    }
}
