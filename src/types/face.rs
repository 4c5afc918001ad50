//! Face identifiers

use serde::{Deserialize, Serialize};
use crate::types::Color;

/// One of the six faces, in solver-string order (U, R, F, D, L, B)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    #[serde(rename = "U")]
    Up,
    #[serde(rename = "R")]
    Right,
    #[serde(rename = "F")]
    Front,
    #[serde(rename = "D")]
    Down,
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "B")]
    Back,
}

impl Face {
    /// All faces, indexed by `Face::index`
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Right,
        Face::Front,
        Face::Down,
        Face::Left,
        Face::Back,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Notation letter
    pub fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Down => 'D',
            Face::Left => 'L',
            Face::Back => 'B',
        }
    }

    pub fn from_letter(letter: char) -> Option<Face> {
        Face::ALL.into_iter().find(|f| f.letter() == letter)
    }

    pub fn name(self) -> &'static str {
        match self {
            Face::Up => "Up",
            Face::Right => "Right",
            Face::Front => "Front",
            Face::Down => "Down",
            Face::Left => "Left",
            Face::Back => "Back",
        }
    }

    /// Center color, i.e. the face's permanent identity color
    pub fn home_color(self) -> Color {
        match self {
            Face::Up => Color::White,
            Face::Right => Color::Red,
            Face::Front => Color::Green,
            Face::Down => Color::Yellow,
            Face::Left => Color::Orange,
            Face::Back => Color::Blue,
        }
    }

    /// Outward unit vector (x = right, y = up, z = front)
    pub fn normal(self) -> [i8; 3] {
        match self {
            Face::Up => [0, 1, 0],
            Face::Down => [0, -1, 0],
            Face::Right => [1, 0, 0],
            Face::Left => [-1, 0, 0],
            Face::Front => [0, 0, 1],
            Face::Back => [0, 0, -1],
        }
    }

    /// Up/Down, the primary axis for corner twist
    pub fn is_up_down(self) -> bool {
        matches!(self, Face::Up | Face::Down)
    }

    /// Front/Back, the fallback primary axis for equator edges
    pub fn is_front_back(self) -> bool {
        matches!(self, Face::Front | Face::Back)
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
