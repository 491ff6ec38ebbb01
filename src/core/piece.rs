//! Named edge and corner slots.
//!
//! A slot is a fixed position on the cube: the facelets that are glued on
//! whichever piece currently sits there. Slots never change; pieces move
//! between them. Pattern matching in the solver reads pieces through slots.

use serde::{Deserialize, Serialize};

/// One of the 12 edge positions.
///
/// The first facelet is the one on the U or D face where the slot has one,
/// otherwise the one on F or B.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeSlot {
    UF,
    UL,
    UR,
    UB,
    FL,
    FR,
    BL,
    BR,
    DF,
    DL,
    DR,
    DB,
}

impl EdgeSlot {
    /// All edge slots.
    pub const ALL: [EdgeSlot; 12] = [
        EdgeSlot::UF,
        EdgeSlot::UL,
        EdgeSlot::UR,
        EdgeSlot::UB,
        EdgeSlot::FL,
        EdgeSlot::FR,
        EdgeSlot::BL,
        EdgeSlot::BR,
        EdgeSlot::DF,
        EdgeSlot::DL,
        EdgeSlot::DR,
        EdgeSlot::DB,
    ];

    /// Facelet indices of this slot.
    #[must_use]
    pub const fn facelets(self) -> [usize; 2] {
        match self {
            EdgeSlot::UF => [7, 19],
            EdgeSlot::UL => [3, 10],
            EdgeSlot::UR => [5, 28],
            EdgeSlot::UB => [1, 37],
            EdgeSlot::FL => [21, 14],
            EdgeSlot::FR => [23, 30],
            EdgeSlot::BL => [41, 12],
            EdgeSlot::BR => [39, 32],
            EdgeSlot::DF => [46, 25],
            EdgeSlot::DL => [48, 16],
            EdgeSlot::DR => [50, 34],
            EdgeSlot::DB => [52, 43],
        }
    }
}

/// One of the 8 corner positions.
///
/// The first facelet is always the one on the U or D face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CornerSlot {
    UFL,
    UFR,
    UBL,
    UBR,
    DFL,
    DFR,
    DBL,
    DBR,
}

impl CornerSlot {
    /// All corner slots.
    pub const ALL: [CornerSlot; 8] = [
        CornerSlot::UFL,
        CornerSlot::UFR,
        CornerSlot::UBL,
        CornerSlot::UBR,
        CornerSlot::DFL,
        CornerSlot::DFR,
        CornerSlot::DBL,
        CornerSlot::DBR,
    ];

    /// The four top-layer corners, in the order used for last-layer buckets.
    pub const TOP: [CornerSlot; 4] = [
        CornerSlot::UFL,
        CornerSlot::UFR,
        CornerSlot::UBL,
        CornerSlot::UBR,
    ];

    /// Facelet indices of this slot.
    #[must_use]
    pub const fn facelets(self) -> [usize; 3] {
        match self {
            CornerSlot::UFL => [6, 18, 11],
            CornerSlot::UFR => [8, 20, 27],
            CornerSlot::UBL => [0, 38, 9],
            CornerSlot::UBR => [2, 36, 29],
            CornerSlot::DFL => [45, 24, 17],
            CornerSlot::DFR => [47, 26, 33],
            CornerSlot::DBL => [51, 44, 15],
            CornerSlot::DBR => [53, 42, 35],
        }
    }
}
