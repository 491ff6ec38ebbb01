//! Second-layer edges.
//!
//! Each middle edge is found in the top layer or a middle slot and
//! inserted at FR, then `E D` turns the cube so the next slot is at FR.

use log::debug;

use super::recorder::MoveRecorder;
use crate::core::{Color, CubeError, EdgeSlot, Phase};

/// Middle edges as (color at FR's front facelet, color at FR's right facelet),
/// in insertion order.
pub const TARGETS: [(Color, Color); 4] = [
    (Color::Red, Color::Green),
    (Color::Blue, Color::Red),
    (Color::Orange, Color::Blue),
    (Color::Green, Color::Orange),
];

/// Algorithms for one slot: first when the slot reads the target pair in
/// order, second when it reads it swapped.
#[derive(Clone, Copy, Debug)]
pub struct EdgeCase {
    pub slot: EdgeSlot,
    pub in_order: &'static str,
    pub swapped: &'static str,
}

const fn case(slot: EdgeSlot, in_order: &'static str, swapped: &'static str) -> EdgeCase {
    EdgeCase {
        slot,
        in_order,
        swapped,
    }
}

pub static CASES: [EdgeCase; 8] = [
    case(EdgeSlot::UF, "U2 F' U F U R U' R'", "U R U' R' U' F' U F"),
    case(EdgeSlot::UL, "U F' U F U R U' R'", "R U' R' U' F' U F"),
    case(EdgeSlot::UR, "U' F' U F U R U' R'", "U2 R U' R' U' F' U F"),
    case(EdgeSlot::UB, "F' U F U R U' R'", "U' R U' R' U' F' U F"),
    case(
        EdgeSlot::FL,
        "F U' F' U' L' U L U2 R U' R' U' F' U F",
        "F U' F' U' L' U L U' F' U F U R U' R'",
    ),
    case(
        EdgeSlot::FR,
        "",
        "R U' R' U' F' U F U' R U' R' U' F' U F",
    ),
    case(
        EdgeSlot::BL,
        "L U' L' U' B' U B U2 F' U F U R U' R'",
        "L U' L' U' B' U B U R U' R' U' F' U F",
    ),
    case(
        EdgeSlot::BR,
        "R' U R U B U' B' U2 F' U F U R U' R'",
        "R' U R U B U' B' U R U' R' U' F' U F",
    ),
];

impl EdgeCase {
    /// The algorithm for this slot if it holds the target edge.
    fn select(&self, recorder: &MoveRecorder<'_>, (k, j): (Color, Color)) -> Option<&'static str> {
        let edge = recorder.state().edge(self.slot);
        if edge == [k, j] {
            Some(self.in_order)
        } else if edge == [j, k] {
            Some(self.swapped)
        } else {
            None
        }
    }
}

/// Insert the four middle edges.
pub fn solve(recorder: &mut MoveRecorder<'_>) -> Result<(), CubeError> {
    for target in TARGETS {
        let (slot, algorithm) = CASES
            .iter()
            .find_map(|case| case.select(recorder, target).map(|alg| (case.slot, alg)))
            .ok_or(CubeError::UnreachableCase {
                phase: Phase::SecondLayer,
                detail: "middle edge not found",
            })?;
        debug!(
            "second layer {}/{}: {slot:?} -> {algorithm:?}",
            target.0, target.1
        );
        recorder.run(algorithm)?;
        recorder.run("E D")?;
    }
    Ok(())
}
