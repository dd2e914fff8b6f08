//! graphwalk — in-memory adjacency graphs and frontier-driven traversal.
//!
//! Graphs are built from a line-oriented edge list and searched through the
//! [`graph::GraphSource`] capability trait. The frontier ordering picks the
//! strategy: FIFO for breadth-first, LIFO for depth-first, a min-heap for
//! lowest-id-first.

pub mod config;
pub mod error;
pub mod graph;
pub mod observability;
pub mod search;
pub mod types;

pub use error::{GraphError, Result};
pub use graph::{Graph, GraphSource, Node};
pub use search::{bfs, search, SearchResult, Traversal};
pub use types::{Colour, NodeId};
