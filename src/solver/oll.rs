//! Two-look orientation of the last layer.
//!
//! First the yellow cross, keyed by which top edges already show yellow.
//! Then the yellow corners, keyed by how many top corners show yellow and
//! by where the remaining yellow stickers sit on the sides. Corner cases
//! other than H are tried under up to four `U` setup turns.

use log::debug;

use super::recorder::MoveRecorder;
use crate::core::{CubeError, Phase};

/// Top-face edge facelets checked for the cross.
const EDGE_FACELETS: [usize; 4] = [1, 3, 5, 7];

/// Top-face corner facelets.
const CORNER_FACELETS: [usize; 4] = [0, 2, 6, 8];

/// Cross algorithms keyed by which of facelets 1, 3, 5, 7 are yellow.
pub static CROSS_CASES: [([bool; 4], &str); 8] = [
    ([false, false, false, false], "F R U R' U' F' F S R U R' U' F' S'"),
    ([true, false, false, true], "U F R U R' U' F'"),
    ([false, true, true, false], "F R U R' U' F'"),
    ([true, true, false, false], "U2 F S R U R' U' F' S'"),
    ([true, false, true, false], "U F S R U R' U' F' S'"),
    ([false, true, false, true], "U' F S R U R' U' F' S'"),
    ([false, false, true, true], "F S R U R' U' F' S'"),
    ([true, true, true, true], ""),
];

/// A corner case: facelets that must be yellow, facelets that must not be,
/// and the algorithm.
#[derive(Clone, Copy, Debug)]
pub struct OllCase {
    pub name: &'static str,
    pub yellow: &'static [usize],
    pub not_yellow: &'static [usize],
    pub algorithm: &'static str,
}

impl OllCase {
    fn matches(&self, recorder: &MoveRecorder<'_>) -> bool {
        recorder.all_yellow(self.yellow) && recorder.none_yellow(self.not_yellow)
    }
}

/// No top corner oriented, headlights on two opposite sides. Tried without
/// setup turns.
pub static H_CASES: [OllCase; 2] = [
    OllCase {
        name: "H",
        yellow: &[9, 11, 27, 29],
        not_yellow: &[18, 20, 36, 38],
        algorithm: "R U R' U R U' R' U R U2 R'",
    },
    OllCase {
        name: "H (turned)",
        yellow: &[18, 20, 36, 38],
        not_yellow: &[9, 11, 27, 29],
        algorithm: "U R U R' U R U' R' U R U2 R'",
    },
];

/// No top corner oriented, not an H.
pub static PI_CASES: [OllCase; 1] = [OllCase {
    name: "Pi",
    yellow: &[9, 11, 20, 36],
    not_yellow: &[18, 27, 29, 38],
    algorithm: "R U2 R2 U' R2 U' R2 U2 R",
}];

/// One top corner oriented.
pub static ONE_CORNER_CASES: [OllCase; 2] = [
    OllCase {
        name: "Sune",
        yellow: &[6, 20],
        not_yellow: &[],
        algorithm: "R U R' U R U2 R'",
    },
    OllCase {
        name: "Anti-Sune",
        yellow: &[2, 18],
        not_yellow: &[],
        algorithm: "R U2 R' U' R U' R'",
    },
];

/// Two top corners oriented.
pub static TWO_CORNER_CASES: [OllCase; 4] = [
    OllCase {
        name: "L",
        yellow: &[0, 8, 18, 29],
        not_yellow: &[],
        algorithm: "F R' F' R M U R U' R' M'",
    },
    OllCase {
        name: "L (turned)",
        yellow: &[0, 8, 11, 36],
        not_yellow: &[],
        algorithm: "U2 F R' F' R M U R U' R' M'",
    },
    OllCase {
        name: "T",
        yellow: &[2, 8, 18, 38],
        not_yellow: &[],
        algorithm: "R M U R' U' R' M' F R F'",
    },
    OllCase {
        name: "U",
        yellow: &[0, 2, 18, 20],
        not_yellow: &[],
        algorithm: "R2 D R' U2 R D' R' U2 R'",
    },
];

/// Orient the last layer.
pub fn solve(recorder: &mut MoveRecorder<'_>) -> Result<(), CubeError> {
    solve_cross(recorder)?;
    solve_corners(recorder)
}

fn unreachable(detail: &'static str) -> CubeError {
    CubeError::UnreachableCase {
        phase: Phase::LastLayerOrientation,
        detail,
    }
}

fn solve_cross(recorder: &mut MoveRecorder<'_>) -> Result<(), CubeError> {
    let key = EDGE_FACELETS.map(|i| recorder.all_yellow(&[i]));
    let (_, algorithm) = CROSS_CASES
        .iter()
        .find(|(pattern, _)| *pattern == key)
        .ok_or_else(|| unreachable("edge orientation"))?;
    debug!("OLL cross {key:?} -> {algorithm:?}");
    recorder.run(algorithm)
}

fn solve_corners(recorder: &mut MoveRecorder<'_>) -> Result<(), CubeError> {
    let oriented = CORNER_FACELETS
        .iter()
        .filter(|&&i| recorder.all_yellow(&[i]))
        .count();
    debug!("OLL corners: {oriented} oriented");

    match oriented {
        0 => {
            if let Some(case) = H_CASES.iter().find(|case| case.matches(recorder)) {
                debug!("OLL case {}", case.name);
                return recorder.run(case.algorithm);
            }
            with_setups(recorder, &PI_CASES)
        }
        1 => with_setups(recorder, &ONE_CORNER_CASES),
        2 => with_setups(recorder, &TWO_CORNER_CASES),
        4 => Ok(()),
        _ => Err(unreachable("corner orientation")),
    }
}

/// Try the cases under 0 to 3 `U` setup turns. The budget is spent when
/// four turns bring the layer back without a match.
fn with_setups(recorder: &mut MoveRecorder<'_>, cases: &[OllCase]) -> Result<(), CubeError> {
    for _ in 0..4 {
        if let Some(case) = cases.iter().find(|case| case.matches(recorder)) {
            debug!("OLL case {}", case.name);
            return recorder.run(case.algorithm);
        }
        recorder.run("U")?;
    }
    Err(unreachable("corner orientation"))
}
