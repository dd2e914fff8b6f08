//! Core domain types shared across the graph and search layers.

use serde::{Deserialize, Serialize};

/// Opaque vertex identifier, unique within a graph.
pub type NodeId = u64;

// ---------------------------------------------------------------------------
// Colour
// ---------------------------------------------------------------------------

/// Exploration marker for a vertex.
///
/// Colours only ever move forward: White (undiscovered) to Grey (discovered,
/// waiting in the frontier) to Black (all neighbours processed).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colour {
    #[default]
    White,
    Grey,
    Black,
}

impl Colour {
    /// The next colour in the White → Grey → Black sequence. Black is a ceiling.
    pub fn next(self) -> Self {
        match self {
            Self::White => Self::Grey,
            Self::Grey | Self::Black => Self::Black,
        }
    }

    pub fn is_white(self) -> bool {
        self == Self::White
    }

    /// Canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Grey => "grey",
            Self::Black => "black",
        }
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
