//! Search layer — frontier orderings and the traversal driver.

pub mod frontier;
pub mod result;
pub mod traversal;

pub use frontier::{FifoQueue, Frontier, LifoStack, LowestIdFirst};
pub use result::{Reached, SearchResult};
pub use traversal::{bfs, dfs, identity, search, Run, SearchState, Traversal};
