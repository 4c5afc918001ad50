//! Output structures for terminal and JSON display

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use colored::Colorize;
use crate::types::{CubieState, Face, FaceletState, Legality, Move};

/// Result record for one evaluation (moves applied, state inspected)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CubeOutput {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Moves applied to reach `state`
    pub moves: Vec<Move>,
    /// Resulting facelet state
    pub state: FaceletState,
    /// 54-letter solver string of `state`
    pub facelets: String,
    /// SHA-256 of `facelets`, hex
    pub fingerprint: String,
    pub solved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cubies: Option<CubieState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legality: Option<Legality>,
}

impl CubeOutput {
    /// Create new output
    pub fn new(state: FaceletState, moves: Vec<Move>) -> Self {
        let facelets = crate::core::to_facelet_string(&state);
        let fingerprint = crate::core::fingerprint(&state);
        Self {
            timestamp: Utc::now(),
            moves,
            solved: state.is_solved(),
            state,
            facelets,
            fingerprint,
            cubies: None,
            legality: None,
        }
    }

    /// Attach the resolved cubie view
    pub fn with_cubies(mut self, cubies: CubieState) -> Self {
        self.legality = Some(cubies.legality());
        self.cubies = Some(cubies);
        self
    }

    /// Unfolded net with colored stickers
    pub fn to_terminal_string(&self) -> String {
        let mut out = render_net(&self.state, true);
        out.push_str(&self.summary_line());
        out
    }

    /// Unfolded net with color initials (no ANSI codes)
    pub fn to_plain_string(&self) -> String {
        let mut out = render_net(&self.state, false);
        out.push_str(&self.summary_line());
        out
    }

    /// Format for parseable output (single line, no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "moves={} | solved={} | facelets={} | fingerprint={}",
            format_moves(&self.moves),
            self.solved,
            self.facelets,
            &self.fingerprint[..16]
        )
    }

    fn summary_line(&self) -> String {
        let status = if self.solved { "SOLVED" } else { "SCRAMBLED" };
        let mut line = format!(
            "moves: {} ({}) | {}",
            format_moves(&self.moves),
            self.moves.len(),
            status
        );
        if let Some(legality) = &self.legality {
            let verdict = if legality.is_solvable() { "solvable" } else { "NOT solvable" };
            line.push_str(&format!(" | {}", verdict));
        }
        line.push('\n');
        line
    }
}

fn format_moves(moves: &[Move]) -> String {
    if moves.is_empty() {
        return "-".to_string();
    }
    moves.iter().map(Move::to_string).collect::<Vec<_>>().join(" ")
}

/// Render the cross-shaped net:
///
/// ```text
///     U
///   L F R B
///     D
/// ```
pub fn render_net(state: &FaceletState, color: bool) -> String {
    let cell = |face: Face, i: usize| -> String {
        let c = state.sticker(face, i);
        if color {
            let (r, g, b) = c.rgb();
            "  ".on_truecolor(r, g, b).to_string()
        } else {
            format!("{} ", c.initial())
        }
    };
    let row = |face: Face, r: usize| -> String { (0..3).map(|c| cell(face, r * 3 + c)).collect() };
    let pad = "      ";

    let mut out = String::new();
    for r in 0..3 {
        out.push_str(&format!("{}{}\n", pad, row(Face::Up, r)));
    }
    for r in 0..3 {
        for face in [Face::Left, Face::Front, Face::Right, Face::Back] {
            out.push_str(&row(face, r));
        }
        out.push('\n');
    }
    for r in 0..3 {
        out.push_str(&format!("{}{}\n", pad, row(Face::Down, r)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_net_of_solved_cube() {
        let net = render_net(&FaceletState::solved(), false);
        let lines: Vec<&str> = net.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0].trim(), "W W W");
        assert_eq!(lines[3].trim(), "O O O G G G R R R B B B");
        assert_eq!(lines[8].trim(), "Y Y Y");
    }

    #[test]
    fn test_parseable_string() {
        let output = CubeOutput::new(FaceletState::solved(), vec![]);
        let line = output.to_parseable_string();
        assert!(line.contains("moves=-"));
        assert!(line.contains("solved=true"));
        assert!(line.contains("facelets=UUUUUUUUU"));
    }
}
