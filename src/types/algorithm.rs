//! Named algorithm records (static catalog data)

use serde::Serialize;

/// PLL case grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmCategory {
    /// Edges only
    Edges,
    /// Corners only
    Corners,
    /// Adjacent corner swap
    Adjacent,
    /// Diagonal corner swap
    Diagonal,
}

impl AlgorithmCategory {
    pub fn name(self) -> &'static str {
        match self {
            AlgorithmCategory::Edges => "edges",
            AlgorithmCategory::Corners => "corners",
            AlgorithmCategory::Adjacent => "adjacent",
            AlgorithmCategory::Diagonal => "diagonal",
        }
    }
}

/// A named move sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Algorithm {
    pub id: &'static str,
    pub name: &'static str,
    pub category: AlgorithmCategory,
    /// 1 (easy) to 3 (hard)
    pub difficulty: u8,
    /// How speedcubers write it; may contain slice moves or rotations
    pub notation: &'static str,
    /// Face-turn-only equivalent, when `notation` is not already one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo: Option<&'static str>,
    pub recognition: &'static str,
}
