//! Sticker colors and cube faces.
//!
//! ## Color
//!
//! Seven values: a neutral "no color" used only for cubie interiors, plus
//! the six face colors. Numeric codes are stable and match the facelet
//! encoding used by the renderer side.
//!
//! ## Face
//!
//! The six faces in facelet order: Up, Left, Front, Right, Back, Down.

use serde::{Deserialize, Serialize};

/// Sticker color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    /// No color. Never held by a real facelet.
    Neutral = 0,
    Red = 1,
    Orange = 2,
    Blue = 3,
    Green = 4,
    White = 5,
    Yellow = 6,
}

impl Color {
    /// The six colors a facelet may hold, in code order.
    pub const FACE_COLORS: [Color; 6] = [
        Color::Red,
        Color::Orange,
        Color::Blue,
        Color::Green,
        Color::White,
        Color::Yellow,
    ];

    /// Numeric code (0 = neutral, 1..=6 face colors).
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a color by numeric code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Color::Neutral),
            1 => Some(Color::Red),
            2 => Some(Color::Orange),
            3 => Some(Color::Blue),
            4 => Some(Color::Green),
            5 => Some(Color::White),
            6 => Some(Color::Yellow),
            _ => None,
        }
    }

    /// One-letter code used by facelet strings.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Color::Neutral => 'N',
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::White => 'W',
            Color::Yellow => 'Y',
        }
    }

    /// Parse a one-letter code.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'N' => Some(Color::Neutral),
            'R' => Some(Color::Red),
            'O' => Some(Color::Orange),
            'B' => Some(Color::Blue),
            'G' => Some(Color::Green),
            'W' => Some(Color::White),
            'Y' => Some(Color::Yellow),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A face of the cube.
///
/// Faces are stored in this order, 9 facelets each, row-major as seen from
/// outside in the usual unfolded net (Up above Front with its back edge on
/// top, Down below Front with its front edge on top).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Up,
    Left,
    Front,
    Right,
    Back,
    Down,
}

impl Face {
    /// All faces in storage order.
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Left,
        Face::Front,
        Face::Right,
        Face::Back,
        Face::Down,
    ];

    /// Position in storage order (0-5).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Index of this face's first facelet.
    #[must_use]
    pub const fn offset(self) -> usize {
        self.index() * 9
    }

    /// Index of this face's center facelet.
    #[must_use]
    pub const fn center(self) -> usize {
        self.offset() + 4
    }

    /// Color of this face on a solved cube.
    #[must_use]
    pub const fn solved_color(self) -> Color {
        match self {
            Face::Up => Color::Yellow,
            Face::Left => Color::Blue,
            Face::Front => Color::Red,
            Face::Right => Color::Green,
            Face::Back => Color::Orange,
            Face::Down => Color::White,
        }
    }

    /// The face a facelet index belongs to.
    #[must_use]
    pub const fn of_facelet(facelet: usize) -> Option<Self> {
        match facelet / 9 {
            0 => Some(Face::Up),
            1 => Some(Face::Left),
            2 => Some(Face::Front),
            3 => Some(Face::Right),
            4 => Some(Face::Back),
            5 => Some(Face::Down),
            _ => None,
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Face::Up => "Up",
            Face::Left => "Left",
            Face::Front => "Front",
            Face::Right => "Right",
            Face::Back => "Back",
            Face::Down => "Down",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_codes_round_trip() {
        for code in 0..=6u8 {
            let color = Color::from_code(code).unwrap();
            assert_eq!(color.code(), code);
        }
        assert_eq!(Color::from_code(7), None);
    }

    #[test]
    fn test_color_letters_round_trip() {
        for color in Color::FACE_COLORS {
            assert_eq!(Color::from_letter(color.letter()), Some(color));
        }
        assert_eq!(Color::from_letter('N'), Some(Color::Neutral));
        assert_eq!(Color::from_letter('x'), None);
    }

    #[test]
    fn test_face_layout() {
        assert_eq!(Face::Up.offset(), 0);
        assert_eq!(Face::Back.offset(), 36);
        assert_eq!(Face::Down.center(), 49);
        assert_eq!(Face::of_facelet(26), Some(Face::Front));
        assert_eq!(Face::of_facelet(54), None);
    }

    #[test]
    fn test_solved_colors_are_distinct() {
        let mut colors: Vec<_> = Face::ALL.iter().map(|f| f.solved_color()).collect();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), 6);
        assert!(!colors.contains(&Color::Neutral));
    }
}
