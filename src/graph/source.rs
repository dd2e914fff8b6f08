//! The read-only capability set a traversal needs from a graph.

use crate::error::Result;
use crate::graph::node::Node;
use crate::graph::store::Graph;
use crate::types::NodeId;

/// Anything that can answer node lookups, adjacency queries and size.
///
/// The traversal driver is generic over this trait, so alternative sources
/// (streamed, remote, filtered views) can be searched without going through
/// a concrete [`Graph`].
pub trait GraphSource {
    /// Look up a node; `None` if absent.
    fn node(&self, id: NodeId) -> Option<&Node>;

    /// Adjacent ids of `id`, or [`GraphError::NotFound`](crate::error::GraphError::NotFound).
    fn visit(&self, id: NodeId) -> Result<Vec<NodeId>>;

    /// Number of vertices.
    fn size(&self) -> usize;
}

impl GraphSource for Graph {
    fn node(&self, id: NodeId) -> Option<&Node> {
        Graph::node(self, id)
    }

    fn visit(&self, id: NodeId) -> Result<Vec<NodeId>> {
        Graph::visit(self, id)
    }

    fn size(&self) -> usize {
        Graph::size(self)
    }
}

impl<G: GraphSource + ?Sized> GraphSource for &G {
    fn node(&self, id: NodeId) -> Option<&Node> {
        (**self).node(id)
    }

    fn visit(&self, id: NodeId) -> Result<Vec<NodeId>> {
        (**self).visit(id)
    }

    fn size(&self) -> usize {
        (**self).size()
    }
}
