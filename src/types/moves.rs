//! Move tokens: a face plus a turn amount

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use crate::types::{CubeError, Face};

/// Turn amount, counted in clockwise quarter turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Turn {
    /// No modifier: quarter turn clockwise seen from outside the face
    Clockwise,
    /// `2`: half turn
    Half,
    /// `'`: quarter turn counter-clockwise (three clockwise)
    CounterClockwise,
}

impl Turn {
    /// Clockwise quarter turns this amounts to
    pub fn quarter_turns(self) -> usize {
        match self {
            Turn::Clockwise => 1,
            Turn::Half => 2,
            Turn::CounterClockwise => 3,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::Half => "2",
            Turn::CounterClockwise => "'",
        }
    }

    pub fn from_suffix(suffix: &str) -> Option<Turn> {
        match suffix {
            "" => Some(Turn::Clockwise),
            "2" => Some(Turn::Half),
            "'" => Some(Turn::CounterClockwise),
            _ => None,
        }
    }

    pub fn inverse(self) -> Turn {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::Half => Turn::Half,
            Turn::CounterClockwise => Turn::Clockwise,
        }
    }
}

/// A single move token such as `R`, `U'` or `F2`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Move {
    pub face: Face,
    pub turn: Turn,
}

impl Move {
    pub fn new(face: Face, turn: Turn) -> Self {
        Self { face, turn }
    }

    /// The move that exactly undoes this one
    pub fn inverse(self) -> Move {
        Move::new(self.face, self.turn.inverse())
    }

    /// Human-readable step, e.g. "Right face clockwise 90°"
    pub fn describe(self) -> String {
        match self.turn {
            Turn::Clockwise => format!("{} face clockwise 90°", self.face.name()),
            Turn::CounterClockwise => format!("{} face counter-clockwise 90°", self.face.name()),
            Turn::Half => format!("{} face 180°", self.face.name()),
        }
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::core::parse_move(s)
    }
}

impl TryFrom<String> for Move {
    type Error = CubeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Move> for String {
    fn from(value: Move) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.face.letter(), self.turn.suffix())
    }
}
