//! Move sequences.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::notation::Move;
use crate::core::CubeError;

/// A sequence of moves, written as space-separated notation.
///
/// ```
/// use rust_cube::moves::Algorithm;
///
/// let sexy: Algorithm = "R U R' U'".parse().unwrap();
/// assert_eq!(sexy.len(), 4);
/// assert_eq!(sexy.inverse().to_string(), "U R U' R'");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Algorithm {
    /// All but one solver table algorithm fit inline.
    moves: SmallVec<[Move; 16]>,
}

impl Algorithm {
    /// The empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether the sequence has no moves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Iterate over the moves in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// The moves as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Append one move.
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// The sequence that undoes this one: reversed, each move inverted.
    #[must_use]
    pub fn inverse(&self) -> Self {
        self.moves.iter().rev().map(|mv| mv.inverse()).collect()
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}

impl FromStr for Algorithm {
    type Err = CubeError;

    /// Parse whitespace-separated moves. The empty string is the empty sequence.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse).collect()
    }
}

impl TryFrom<String> for Algorithm {
    type Error = CubeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Algorithm> for String {
    fn from(alg: Algorithm) -> Self {
        alg.to_string()
    }
}

impl FromIterator<Move> for Algorithm {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

impl Extend<Move> for Algorithm {
    fn extend<I: IntoIterator<Item = Move>>(&mut self, iter: I) {
        self.moves.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Algorithm {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for Algorithm {
    type Item = Move;
    type IntoIter = smallvec::IntoIter<[Move; 16]>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}
