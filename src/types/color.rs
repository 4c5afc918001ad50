//! Sticker colors

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use crate::types::{CubeError, Face};

/// The six recognized sticker colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Yellow,
    Red,
    Orange,
    Blue,
    Green,
}

impl Color {
    /// All colors, indexed by `Color::index`
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Red,
        Color::Orange,
        Color::Blue,
        Color::Green,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name, as used in recognition payloads
    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Blue => "blue",
            Color::Green => "green",
        }
    }

    /// Single-letter abbreviation for plain-text output
    pub fn initial(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Blue => 'B',
            Color::Green => 'G',
        }
    }

    /// Display hex value
    pub fn hex(self) -> &'static str {
        match self {
            Color::White => "#FFFFFF",
            Color::Yellow => "#FFD500",
            Color::Red => "#C41E3A",
            Color::Orange => "#FF5800",
            Color::Blue => "#0051BA",
            Color::Green => "#009E60",
        }
    }

    /// RGB triple of `hex()`, for truecolor terminals
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::White => (0xFF, 0xFF, 0xFF),
            Color::Yellow => (0xFF, 0xD5, 0x00),
            Color::Red => (0xC4, 0x1E, 0x3A),
            Color::Orange => (0xFF, 0x58, 0x00),
            Color::Blue => (0x00, 0x51, 0xBA),
            Color::Green => (0x00, 0x9E, 0x60),
        }
    }

    /// The face whose center carries this color in the solved state
    pub fn home_face(self) -> Face {
        match self {
            Color::White => Face::Up,
            Color::Red => Face::Right,
            Color::Green => Face::Front,
            Color::Yellow => Face::Down,
            Color::Orange => Face::Left,
            Color::Blue => Face::Back,
        }
    }
}

impl FromStr for Color {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Color::ALL
            .into_iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| CubeError::malformed(format!("unrecognized color {:?}", s)))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
