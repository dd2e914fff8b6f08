//! Graph layer — nodes, edge-list parsing, the in-memory store, and the
//! capability trait traversals read through.

pub mod node;
pub mod parse;
pub mod source;
pub mod store;

pub use node::Node;
pub use source::GraphSource;
pub use store::{Graph, GraphStats};
