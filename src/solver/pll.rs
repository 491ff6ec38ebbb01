//! Two-look permutation of the last layer.
//!
//! The top layer is first aligned so the red edge faces front. Corners are
//! then bucketed by their side colors and swapped home one at a time, and
//! finally the edges are cycled with an H, Z or U permutation.

use log::debug;

use super::recorder::MoveRecorder;
use crate::core::{Color, CornerSlot, CubeError, Phase};

/// Side-color pair of the corner that belongs in each top slot, in
/// `CornerSlot::TOP` order.
pub const CORNER_HOMES: [(Color, Color); 4] = [
    (Color::Red, Color::Blue),
    (Color::Red, Color::Green),
    (Color::Orange, Color::Blue),
    (Color::Orange, Color::Green),
];

/// Order in which corner positions are resolved.
const RESOLVE_ORDER: [usize; 4] = [0, 1, 3, 2];

/// For each position, the candidate source positions in the order the
/// swap algorithms below address them.
const SOURCES: [[usize; 3]; 4] = [[1, 2, 3], [3, 0, 2], [0, 3, 1], [2, 1, 0]];

/// Swap algorithms, one per candidate source.
pub const CORNER_SWAPS: [&str; 3] = [
    "R U R' U' R' F R2 U' R' U' R U R' F'",
    "U' R U R' U' R' F R2 U' R' U' R U R' F' U",
    "F R U' R' U' R U R' F' R U R' U' R' F R F'",
];

/// Facelets of the four top edges read for edge permutation, and the
/// color each must show when solved.
const EDGE_FACELETS: [usize; 4] = [10, 19, 28, 37];
const EDGE_COLORS: [Color; 4] = [Color::Blue, Color::Red, Color::Green, Color::Orange];

/// No edge in place: keyed by the color showing at facelet 10.
pub const H_PERM: &str = "M2 U M2 U2 M2 U M2";
pub const Z_PERM: &str = "U' M' U M2 U M2 U M' U2 M2 U";
pub const Z_PERM_MIRROR: &str = "M' U M2 U M2 U M' U2 M2";

/// Three-edge cycles.
pub const U_PERM_A: &str = "R U' R U R U R U' R' U' R2";
pub const U_PERM_B: &str = "R2 U R U R' U' R' U' R' U R'";

/// One edge in place: the anchor position, the setup that brings it to the
/// back, the witness (position, color) choosing between the two U perms, and
/// the undo of the setup.
#[derive(Clone, Copy, Debug)]
pub struct EdgeCycle {
    pub anchor: usize,
    pub setup: &'static str,
    pub witness: (usize, Color),
    pub undo: &'static str,
}

pub static EDGE_CYCLES: [EdgeCycle; 4] = [
    EdgeCycle {
        anchor: 0,
        setup: "U",
        witness: (2, Color::Orange),
        undo: "U'",
    },
    EdgeCycle {
        anchor: 1,
        setup: "U2",
        witness: (3, Color::Blue),
        undo: "U2",
    },
    EdgeCycle {
        anchor: 2,
        setup: "U'",
        witness: (0, Color::Red),
        undo: "U",
    },
    EdgeCycle {
        anchor: 3,
        setup: "",
        witness: (1, Color::Green),
        undo: "",
    },
];

fn unreachable(detail: &'static str) -> CubeError {
    CubeError::UnreachableCase {
        phase: Phase::LastLayerPermutation,
        detail,
    }
}

/// Permute the last layer.
pub fn solve(recorder: &mut MoveRecorder<'_>) -> Result<(), CubeError> {
    align(recorder, [10, 28, 37])?;
    solve_corners(recorder)?;
    align(recorder, [9, 27, 36])?;
    solve_edges(recorder)?;
    align(recorder, [9, 27, 36])
}

/// Turn U so the red sticker read at one of three facelets comes to the
/// front. Nothing happens when none of them is red.
fn align(recorder: &mut MoveRecorder<'_>, [left, right, back]: [usize; 3]) -> Result<(), CubeError> {
    if recorder.color(left) == Color::Red {
        recorder.run("U'")
    } else if recorder.color(right) == Color::Red {
        recorder.run("U")
    } else if recorder.color(back) == Color::Red {
        recorder.run("U2")
    } else {
        Ok(())
    }
}

/// Which home each top corner belongs to.
fn corner_buckets(recorder: &MoveRecorder<'_>) -> Result<[usize; 4], CubeError> {
    let mut buckets = [0; 4];
    for (bucket, slot) in buckets.iter_mut().zip(CornerSlot::TOP) {
        let [_, a, b] = recorder.state().corner(slot);
        *bucket = CORNER_HOMES
            .iter()
            .position(|&(x, y)| (a, b) == (x, y) || (a, b) == (y, x))
            .ok_or_else(|| unreachable("corner colors"))?;
    }
    Ok(buckets)
}

fn solve_corners(recorder: &mut MoveRecorder<'_>) -> Result<(), CubeError> {
    let mut buckets = corner_buckets(recorder)?;
    debug!("PLL corner buckets {buckets:?}");

    recorder.run("U'")?;
    for position in RESOLVE_ORDER {
        if buckets[position] != position {
            let (k, source) = SOURCES[position]
                .iter()
                .enumerate()
                .find(|&(_, &source)| buckets[source] == position)
                .map(|(k, &source)| (k, source))
                .ok_or_else(|| unreachable("corner cycle"))?;
            debug!("PLL corner {position} from {source}");
            recorder.run(CORNER_SWAPS[k])?;
            buckets[source] = buckets[position];
            buckets[position] = position;
        }
        recorder.run("U")?;
    }
    Ok(())
}

fn solve_edges(recorder: &mut MoveRecorder<'_>) -> Result<(), CubeError> {
    let seen = EDGE_FACELETS.map(|i| recorder.color(i));
    let correct = seen
        .iter()
        .zip(EDGE_COLORS)
        .filter(|&(&c, expected)| c == expected)
        .count();
    debug!("PLL edges {seen:?}, {correct} in place");

    match correct {
        0 => {
            let algorithm = match seen[0] {
                Color::Green => H_PERM,
                Color::Orange => Z_PERM,
                _ => Z_PERM_MIRROR,
            };
            recorder.run(algorithm)
        }
        1 => {
            let cycle = EDGE_CYCLES
                .iter()
                .find(|cycle| seen[cycle.anchor] == EDGE_COLORS[cycle.anchor])
                .ok_or_else(|| unreachable("edge cycle"))?;
            let (position, color) = cycle.witness;
            let algorithm = if seen[position] == color {
                U_PERM_A
            } else {
                U_PERM_B
            };
            recorder.run(cycle.setup)?;
            recorder.run(algorithm)?;
            recorder.run(cycle.undo)
        }
        4 => Ok(()),
        _ => Err(unreachable("edge permutation")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CubeState;
    use crate::moves::Algorithm;

    fn solve_from(setup: &str) -> CubeState {
        let mut state = CubeState::solved();
        state.apply_all(&setup.parse::<Algorithm>().unwrap());
        let mut recorder = MoveRecorder::new(&mut state);
        solve(&mut recorder).unwrap();
        state
    }

    #[test]
    fn test_all_algorithms_parse() {
        let mut all: Vec<&str> = CORNER_SWAPS.to_vec();
        all.extend([H_PERM, Z_PERM, Z_PERM_MIRROR, U_PERM_A, U_PERM_B]);
        for cycle in EDGE_CYCLES.iter() {
            all.extend([cycle.setup, cycle.undo]);
        }
        for alg in all {
            assert!(alg.parse::<Algorithm>().is_ok(), "{alg}");
        }
    }

    #[test]
    fn test_solved_cube_emits_only_u_turns() {
        let mut state = CubeState::solved();
        let mut recorder = MoveRecorder::new(&mut state);
        solve(&mut recorder).unwrap();

        assert_eq!(recorder.finish().to_string(), "U' U U U U U");
        assert!(state.is_solved());
    }

    #[test]
    fn test_top_layer_turns() {
        for setup in ["U", "U2", "U'"] {
            assert!(solve_from(setup).is_solved(), "{setup}");
        }
    }

    #[test]
    fn test_edge_permutations() {
        for setup in [H_PERM, Z_PERM, Z_PERM_MIRROR, U_PERM_A, U_PERM_B] {
            assert!(solve_from(setup).is_solved(), "{setup}");
        }
    }

    /// One state per reachable (anchor, witness) row. Rows 0 and 3 never
    /// see the witness miss once corners are home.
    #[test]
    fn test_single_edge_cycles() {
        let cases = [
            // anchor 0, witness hit
            ("U R U' R U R U R U' R' U' R2", format!("U {U_PERM_A} U'")),
            // anchor 1, witness hit
            ("R2 U R U R' U' R' U' R' U R'", format!("U2 {U_PERM_A} U2")),
            // anchor 1, witness miss
            ("U2 R U' R U R U R U' R' U' R2", format!("U2 {U_PERM_B} U2")),
            // anchor 2, witness hit
            (
                "U2 R U R' U' R' F R2 U' R' U' R U R' F' U' R2 U R U R' U' R' U' R' U R'",
                format!("U' {U_PERM_A} U"),
            ),
            // anchor 2, witness miss
            (
                "R U' R U R U R U' R' U' R2 U' R U' R U R U R U' R' U' R2",
                format!("U' {U_PERM_B} U"),
            ),
            // anchor 3, witness hit
            (
                "R U' R U R U R U' R' U' R2 R U R' U' R' F R2 U' R' U' R U R' F'",
                U_PERM_A.to_string(),
            ),
        ];

        for (setup, tail) in cases {
            let mut state = CubeState::solved();
            state.apply_all(&setup.parse::<Algorithm>().unwrap());
            let mut recorder = MoveRecorder::new(&mut state);
            solve(&mut recorder).unwrap();
            let moves = recorder.finish().to_string();

            assert!(state.is_solved(), "{setup}");
            assert!(moves.ends_with(&tail), "{setup}: {moves}");
        }
    }

    #[test]
    fn test_corner_swaps() {
        for (i, setup) in CORNER_SWAPS.iter().enumerate() {
            assert!(solve_from(setup).is_solved(), "swap {i}");
        }
    }

    #[test]
    fn test_corner_homes_match_solved_cube() {
        let state = CubeState::solved();
        for (slot, (a, b)) in CornerSlot::TOP.iter().zip(CORNER_HOMES) {
            let [_, x, y] = state.corner(*slot);
            assert!((x, y) == (a, b) || (x, y) == (b, a), "{slot:?}");
        }
    }
}
