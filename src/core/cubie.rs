//! Cubie view of a cube state for 3D renderers.
//!
//! A renderer draws 27 boxes on a grid `{-1, 0, 1}^3` (x to the right,
//! y up, z toward the viewer) and needs the color of each box face. Box
//! faces are reported in the usual material order +x, -x, +y, -y, +z, -z;
//! faces inside the cube are `Color::Neutral`.
//!
//! The grid mapping agrees with the edge and corner slot tables: the three
//! stickers a renderer puts on one corner box are exactly the facelets of
//! the matching `CornerSlot`.

use super::color::{Color, Face};
use super::state::CubeState;

/// Colors of one cubie's six box faces in +x, -x, +y, -y, +z, -z order.
pub type CubieFaces = [Color; 6];

/// Facelet index shown on a given box face of the cubie at `(x, y, z)`,
/// or `None` if that box face is inside the cube.
///
/// `side` uses the same order as [`CubieFaces`].
#[must_use]
pub fn facelet_at(x: i8, y: i8, z: i8, side: usize) -> Option<usize> {
    let in_range = |v: i8| (-1..=1).contains(&v);
    if !(in_range(x) && in_range(y) && in_range(z)) {
        return None;
    }

    let xi = (x + 1) as usize;
    let zi = (z + 1) as usize;
    let row = (1 - y) as usize;

    match side {
        0 if x == 1 => Some(Face::Right.offset() + (2 - zi) + row * 3),
        1 if x == -1 => Some(Face::Left.offset() + zi + row * 3),
        2 if y == 1 => Some(Face::Up.offset() + xi + zi * 3),
        3 if y == -1 => Some(Face::Down.offset() + xi + (2 - zi) * 3),
        4 if z == 1 => Some(Face::Front.offset() + xi + row * 3),
        5 if z == -1 => Some(Face::Back.offset() + (2 - xi) + row * 3),
        _ => None,
    }
}

/// Colors of the cubie at grid position `(x, y, z)`, each in `-1..=1`.
///
/// Returns `None` for coordinates outside the grid.
#[must_use]
pub fn cubie_faces(state: &CubeState, x: i8, y: i8, z: i8) -> Option<CubieFaces> {
    if ![x, y, z].iter().all(|v| (-1..=1).contains(v)) {
        return None;
    }

    let mut faces = [Color::Neutral; 6];
    for (side, color) in faces.iter_mut().enumerate() {
        if let Some(facelet) = facelet_at(x, y, z, side) {
            *color = state[facelet];
        }
    }
    Some(faces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CornerSlot, EdgeSlot};
    use crate::moves::Algorithm;

    fn corner_position(slot: CornerSlot) -> (i8, i8, i8) {
        match slot {
            CornerSlot::UFL => (-1, 1, 1),
            CornerSlot::UFR => (1, 1, 1),
            CornerSlot::UBL => (-1, 1, -1),
            CornerSlot::UBR => (1, 1, -1),
            CornerSlot::DFL => (-1, -1, 1),
            CornerSlot::DFR => (1, -1, 1),
            CornerSlot::DBL => (-1, -1, -1),
            CornerSlot::DBR => (1, -1, -1),
        }
    }

    fn edge_position(slot: EdgeSlot) -> (i8, i8, i8) {
        match slot {
            EdgeSlot::UF => (0, 1, 1),
            EdgeSlot::UL => (-1, 1, 0),
            EdgeSlot::UR => (1, 1, 0),
            EdgeSlot::UB => (0, 1, -1),
            EdgeSlot::FL => (-1, 0, 1),
            EdgeSlot::FR => (1, 0, 1),
            EdgeSlot::BL => (-1, 0, -1),
            EdgeSlot::BR => (1, 0, -1),
            EdgeSlot::DF => (0, -1, 1),
            EdgeSlot::DL => (-1, -1, 0),
            EdgeSlot::DR => (1, -1, 0),
            EdgeSlot::DB => (0, -1, -1),
        }
    }

    fn shown_facelets(x: i8, y: i8, z: i8) -> Vec<usize> {
        let mut facelets: Vec<_> = (0..6).filter_map(|side| facelet_at(x, y, z, side)).collect();
        facelets.sort_unstable();
        facelets
    }

    #[test]
    fn test_corner_cubie_on_solved_cube() {
        let state = CubeState::solved();
        let faces = cubie_faces(&state, 1, 1, 1).unwrap();

        assert_eq!(
            faces,
            [
                Color::Green,
                Color::Neutral,
                Color::Yellow,
                Color::Neutral,
                Color::Red,
                Color::Neutral,
            ]
        );
    }

    #[test]
    fn test_core_cubie_has_no_stickers() {
        let state = CubeState::solved();
        assert_eq!(cubie_faces(&state, 0, 0, 0), Some([Color::Neutral; 6]));
    }

    #[test]
    fn test_out_of_range() {
        let state = CubeState::solved();
        assert_eq!(cubie_faces(&state, 2, 0, 0), None);
        assert_eq!(facelet_at(0, -2, 0, 3), None);
    }

    #[test]
    fn test_grid_agrees_with_slot_tables() {
        for slot in CornerSlot::ALL {
            let (x, y, z) = corner_position(slot);
            let mut expected = slot.facelets().to_vec();
            expected.sort_unstable();
            assert_eq!(shown_facelets(x, y, z), expected, "{slot:?}");
        }
        for slot in EdgeSlot::ALL {
            let (x, y, z) = edge_position(slot);
            let mut expected = slot.facelets().to_vec();
            expected.sort_unstable();
            assert_eq!(shown_facelets(x, y, z), expected, "{slot:?}");
        }
    }

    #[test]
    fn test_every_facelet_is_shown_once() {
        let mut state = CubeState::solved();
        state.apply_all(&"R U F' L2 D B".parse::<Algorithm>().unwrap());

        let mut seen = [0u8; 54];
        let mut stickers = 0;
        for x in -1..=1 {
            for y in -1..=1 {
                for z in -1..=1 {
                    for side in 0..6 {
                        if let Some(facelet) = facelet_at(x, y, z, side) {
                            seen[facelet] += 1;
                        }
                    }
                    let faces = cubie_faces(&state, x, y, z).unwrap();
                    stickers += faces.iter().filter(|&&c| c != Color::Neutral).count();
                }
            }
        }
        assert!(seen.iter().all(|&n| n == 1));
        assert_eq!(stickers, 54);
    }
}
