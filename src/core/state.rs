//! Cube state: the 54-facelet color array.
//!
//! ## Layout
//!
//! Six faces of nine facelets in the order Up, Left, Front, Right, Back,
//! Down (indices 0-8, 9-17, 18-26, 27-35, 36-44, 45-53). The layout never
//! changes; only the colors move.
//!
//! ## Invariant
//!
//! Every face color appears exactly nine times and `Color::Neutral` never
//! appears. Moves are permutations, so they preserve this; parsing checks it.
//!
//! ## Text form
//!
//! A state prints as 54 color letters (`YYYYYYYYYBBB...`) and parses back
//! from the same string. Serde uses this form.

use serde::{Deserialize, Serialize};
use std::ops::Index;
use std::str::FromStr;

use super::color::{Color, Face};
use super::error::CubeError;
use super::piece::{CornerSlot, EdgeSlot};

/// Number of facelets on the cube.
pub const FACELET_COUNT: usize = 54;

/// The colors of all 54 facelets.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CubeState {
    facelets: [Color; FACELET_COUNT],
}

impl CubeState {
    /// The solved cube: each face uniformly its solved color.
    #[must_use]
    pub fn solved() -> Self {
        let mut facelets = [Color::Neutral; FACELET_COUNT];
        for face in Face::ALL {
            facelets[face.offset()..face.offset() + 9].fill(face.solved_color());
        }
        Self { facelets }
    }

    /// Build a state from raw colors, checking the color-count invariant.
    pub fn from_colors(facelets: [Color; FACELET_COUNT]) -> Result<Self, CubeError> {
        let state = Self { facelets };
        let counts = state.color_counts();
        if counts[Color::Neutral.code() as usize] != 0 {
            return Err(CubeError::InvalidFacelets(
                "neutral color on a facelet".to_string(),
            ));
        }
        for color in Color::FACE_COLORS {
            let count = counts[color.code() as usize];
            if count != 9 {
                return Err(CubeError::InvalidFacelets(format!(
                    "{count} facelets of {color}, expected 9"
                )));
            }
        }
        Ok(state)
    }

    /// All facelets in layout order.
    #[must_use]
    pub fn facelets(&self) -> &[Color; FACELET_COUNT] {
        &self.facelets
    }

    /// The nine facelets of one face.
    #[must_use]
    pub fn face(&self, face: Face) -> &[Color] {
        &self.facelets[face.offset()..face.offset() + 9]
    }

    /// Colors of the piece in an edge slot.
    #[must_use]
    pub fn edge(&self, slot: EdgeSlot) -> [Color; 2] {
        slot.facelets().map(|i| self.facelets[i])
    }

    /// Colors of the piece in a corner slot.
    #[must_use]
    pub fn corner(&self, slot: CornerSlot) -> [Color; 3] {
        slot.facelets().map(|i| self.facelets[i])
    }

    /// Count of each color, indexed by color code.
    #[must_use]
    pub fn color_counts(&self) -> [usize; 7] {
        let mut counts = [0; 7];
        for color in self.facelets {
            counts[color.code() as usize] += 1;
        }
        counts
    }

    /// Whether every face shows a single color.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        Face::ALL.iter().all(|&face| {
            let stickers = self.face(face);
            stickers.iter().all(|&c| c == stickers[0])
        })
    }

    /// Overwrite one facelet. Only the move engine writes through this.
    pub(crate) fn set(&mut self, facelet: usize, color: Color) {
        self.facelets[facelet] = color;
    }

    /// Render an unfolded net, one face row per line, faces as stored.
    ///
    /// ```text
    ///     YYY
    ///     YYY
    ///     YYY
    /// BBB RRR GGG OOO
    /// BBB RRR GGG OOO
    /// BBB RRR GGG OOO
    ///     WWW
    ///     WWW
    ///     WWW
    /// ```
    #[must_use]
    pub fn net(&self) -> String {
        let row = |face: Face, r: usize| -> String {
            self.face(face)[r * 3..r * 3 + 3]
                .iter()
                .map(|c| c.letter())
                .collect()
        };

        let mut out = String::new();
        for r in 0..3 {
            out.push_str(&format!("    {}\n", row(Face::Up, r)));
        }
        for r in 0..3 {
            out.push_str(&format!(
                "{} {} {} {}\n",
                row(Face::Left, r),
                row(Face::Front, r),
                row(Face::Right, r),
                row(Face::Back, r)
            ));
        }
        for r in 0..3 {
            out.push_str(&format!("    {}\n", row(Face::Down, r)));
        }
        out
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}

impl Index<usize> for CubeState {
    type Output = Color;

    fn index(&self, facelet: usize) -> &Color {
        &self.facelets[facelet]
    }
}

impl std::fmt::Display for CubeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for color in self.facelets {
            write!(f, "{}", color.letter())?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for CubeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CubeState({self})")
    }
}

impl FromStr for CubeState {
    type Err = CubeError;

    /// Parse 54 color letters. ASCII whitespace is ignored so a net can be
    /// pasted in.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters: Vec<char> = s.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        if letters.len() != FACELET_COUNT {
            return Err(CubeError::InvalidFacelets(format!(
                "expected {FACELET_COUNT} letters, got {}",
                letters.len()
            )));
        }

        let mut facelets = [Color::Neutral; FACELET_COUNT];
        for (slot, letter) in facelets.iter_mut().zip(letters) {
            *slot = Color::from_letter(letter).ok_or_else(|| {
                CubeError::InvalidFacelets(format!("unknown color letter {letter:?}"))
            })?;
        }
        Self::from_colors(facelets)
    }
}

impl TryFrom<String> for CubeState {
    type Error = CubeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CubeState> for String {
    fn from(state: CubeState) -> Self {
        state.to_string()
    }
}
