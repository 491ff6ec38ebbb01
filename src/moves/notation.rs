//! Move notation: layer letter plus optional direction modifier.
//!
//! `U` is a clockwise quarter turn, `U'` counter-clockwise, `U2` a half
//! turn. Parsing is strict and printing reproduces the parsed text, so
//! move logs round-trip exactly.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::CubeError;

/// One of the nine turnable layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layer {
    U,
    D,
    F,
    B,
    R,
    L,
    /// Middle slice between L and R.
    M,
    /// Equatorial slice between U and D.
    E,
    /// Standing slice between F and B.
    S,
}

impl Layer {
    /// All layers.
    pub const ALL: [Layer; 9] = [
        Layer::U,
        Layer::D,
        Layer::F,
        Layer::B,
        Layer::R,
        Layer::L,
        Layer::M,
        Layer::E,
        Layer::S,
    ];

    /// The six outer faces, in scramble sampling order.
    pub const OUTER: [Layer; 6] = [Layer::U, Layer::D, Layer::R, Layer::L, Layer::F, Layer::B];

    /// Notation letter.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Layer::U => 'U',
            Layer::D => 'D',
            Layer::F => 'F',
            Layer::B => 'B',
            Layer::R => 'R',
            Layer::L => 'L',
            Layer::M => 'M',
            Layer::E => 'E',
            Layer::S => 'S',
        }
    }

    /// Parse a notation letter.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'U' => Some(Layer::U),
            'D' => Some(Layer::D),
            'F' => Some(Layer::F),
            'B' => Some(Layer::B),
            'R' => Some(Layer::R),
            'L' => Some(Layer::L),
            'M' => Some(Layer::M),
            'E' => Some(Layer::E),
            'S' => Some(Layer::S),
            _ => None,
        }
    }

    /// Whether this is a middle slice rather than an outer face.
    #[must_use]
    pub const fn is_slice(self) -> bool {
        matches!(self, Layer::M | Layer::E | Layer::S)
    }
}

/// Turn direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
    Double,
}

impl Direction {
    /// All directions, in scramble sampling order.
    pub const ALL: [Direction; 3] = [
        Direction::Clockwise,
        Direction::CounterClockwise,
        Direction::Double,
    ];

    /// Notation suffix: `""`, `"'"` or `"2"`.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Direction::Clockwise => "",
            Direction::CounterClockwise => "'",
            Direction::Double => "2",
        }
    }

    /// The direction that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
            Direction::Double => Direction::Double,
        }
    }
}

/// A single turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Move {
    pub layer: Layer,
    pub direction: Direction,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(layer: Layer, direction: Direction) -> Self {
        Self { layer, direction }
    }

    /// Clockwise quarter turn of a layer.
    #[must_use]
    pub const fn cw(layer: Layer) -> Self {
        Self::new(layer, Direction::Clockwise)
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::new(self.layer, self.direction.inverse())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.layer.letter(), self.direction.suffix())
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CubeError::InvalidMoveNotation(s.to_string());

        let mut chars = s.chars();
        let layer = chars.next().and_then(Layer::from_letter).ok_or_else(invalid)?;
        let direction = match (chars.next(), chars.next()) {
            (None, _) => Direction::Clockwise,
            (Some('\''), None) => Direction::CounterClockwise,
            (Some('2'), None) => Direction::Double,
            _ => return Err(invalid()),
        };
        Ok(Self::new(layer, direction))
    }
}

impl TryFrom<String> for Move {
    type Error = CubeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Move> for String {
    fn from(mv: Move) -> Self {
        mv.to_string()
    }
}
