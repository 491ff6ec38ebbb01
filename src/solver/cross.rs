//! White cross.
//!
//! Each white edge is located and brought to the DB slot, white side down,
//! then `D` turns the next target under B. After four targets every cross
//! edge sits over its own center.

use log::debug;

use super::recorder::MoveRecorder;
use crate::core::{Color, CubeError, EdgeSlot, Phase};

/// Side colors in the order they are placed.
pub const TARGETS: [Color; 4] = [Color::Orange, Color::Green, Color::Red, Color::Blue];

/// Where a white edge sits and which algorithm brings it to DB.
#[derive(Clone, Copy, Debug)]
pub struct CrossCase {
    pub slot: EdgeSlot,
    /// `false` when the slot's first facelet shows the side color and the
    /// second shows white.
    pub flipped: bool,
    pub algorithm: &'static str,
}

const fn case(slot: EdgeSlot, flipped: bool, algorithm: &'static str) -> CrossCase {
    CrossCase {
        slot,
        flipped,
        algorithm,
    }
}

/// Every placement of a white edge. Exactly one matches per target.
pub static CASES: [CrossCase; 24] = [
    case(EdgeSlot::DB, false, "B R' U' R B2"),
    case(EdgeSlot::DB, true, ""),
    case(EdgeSlot::UF, false, "U2 B' R' U' R B2"),
    case(EdgeSlot::UF, true, "U2 B2"),
    case(EdgeSlot::UL, false, "U B' R' U' R B2"),
    case(EdgeSlot::UL, true, "U B2"),
    case(EdgeSlot::UR, false, "U' B' R' U' R B2"),
    case(EdgeSlot::UR, true, "U' B2"),
    case(EdgeSlot::UB, false, "B' R' U' R B2"),
    case(EdgeSlot::UB, true, "B2"),
    case(EdgeSlot::FL, false, "L2 B L2"),
    case(EdgeSlot::FL, true, "D L D'"),
    case(EdgeSlot::FR, false, "R2 B' R2"),
    case(EdgeSlot::FR, true, "D' R' D"),
    case(EdgeSlot::BL, false, "B"),
    case(EdgeSlot::BL, true, "L U L' B2"),
    case(EdgeSlot::BR, false, "B'"),
    case(EdgeSlot::BR, true, "R' U' R B2"),
    case(EdgeSlot::DF, false, "F2 U2 B' R' U' R B2"),
    case(EdgeSlot::DF, true, "F2 U2 B2"),
    case(EdgeSlot::DL, false, "L B"),
    case(EdgeSlot::DL, true, "L2 U B2"),
    case(EdgeSlot::DR, false, "R' B'"),
    case(EdgeSlot::DR, true, "R2 U' B2"),
];

impl CrossCase {
    fn matches(&self, recorder: &MoveRecorder<'_>, target: Color) -> bool {
        let [first, second] = recorder.state().edge(self.slot);
        if self.flipped {
            first == Color::White && second == target
        } else {
            first == target && second == Color::White
        }
    }
}

/// Build the cross.
pub fn solve(recorder: &mut MoveRecorder<'_>) -> Result<(), CubeError> {
    for target in TARGETS {
        let case = CASES
            .iter()
            .find(|case| case.matches(recorder, target))
            .ok_or(CubeError::UnreachableCase {
                phase: Phase::Cross,
                detail: "white edge not found",
            })?;
        debug!(
            "cross {target}: {:?} flipped={} -> {:?}",
            case.slot, case.flipped, case.algorithm
        );
        recorder.run(case.algorithm)?;
        recorder.run("D")?;
    }
    Ok(())
}
