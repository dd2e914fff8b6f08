//! Configuration data structures for graphwalk.
//!
//! Defines the YAML/JSON config format: graph build options and traversal
//! settings. Every field has a default, so an empty document is valid.

use serde::{Deserialize, Serialize};

use crate::search::frontier::{FifoQueue, Frontier, LifoStack, LowestIdFirst};

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Root configuration.
///
/// Loaded from a YAML or JSON file, then adjusted by `GRAPHWALK_*`
/// environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphwalkConfig {
    /// Config format version (currently "1.0").
    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub search: SearchConfig,
}

impl Default for GraphwalkConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            build: BuildConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// BuildConfig
// ---------------------------------------------------------------------------

/// Options applied while turning an edge list into a graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Record every edge line in both directions.
    #[serde(default)]
    pub undirected: bool,
}

// ---------------------------------------------------------------------------
// SearchConfig
// ---------------------------------------------------------------------------

/// Traversal settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub strategy: Strategy,

    /// Nodes at this distance are reached but not expanded. Every strategy
    /// reaches the same nodes under a limit. `None` means unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<u32>,
}

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

/// Frontier ordering used by a traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// FIFO frontier; distances are shortest hop counts.
    #[default]
    BreadthFirst,
    /// LIFO frontier.
    DepthFirst,
    /// Min-heap frontier keyed on node id.
    LowestIdFirst,
}

impl Strategy {
    /// Parse from a loose string (case-insensitive, underscores and short
    /// names accepted).
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "breadth-first" | "breadthfirst" | "bfs" => Some(Self::BreadthFirst),
            "depth-first" | "depthfirst" | "dfs" => Some(Self::DepthFirst),
            "lowest-id-first" | "lowestidfirst" | "lowest-id" => Some(Self::LowestIdFirst),
            _ => None,
        }
    }

    /// Canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "breadth-first",
            Self::DepthFirst => "depth-first",
            Self::LowestIdFirst => "lowest-id-first",
        }
    }

    /// A fresh, empty frontier implementing this ordering.
    pub fn frontier(&self) -> Box<dyn Frontier> {
        match self {
            Self::BreadthFirst => Box::new(FifoQueue::new()),
            Self::DepthFirst => Box::new(LifoStack::new()),
            Self::LowestIdFirst => Box::new(LowestIdFirst::new()),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

fn default_version() -> String {
    "1.0".to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
