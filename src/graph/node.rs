//! A single vertex: identity, colour, and ordered adjacency.

use crate::types::{Colour, NodeId};

/// A graph vertex.
///
/// The adjacency list keeps insertion order and does not deduplicate, so
/// parallel edges and self-edges are preserved exactly as they were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    colour: Colour,
    edges: Vec<NodeId>,
}

impl Node {
    /// A White node with no edges.
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            colour: Colour::White,
            edges: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    /// Move the colour one step towards Black. Does nothing once Black.
    pub fn advance_colour(&mut self) {
        self.colour = self.colour.next();
    }

    /// Adjacent ids in the order the edges were added.
    pub fn edges(&self) -> &[NodeId] {
        &self.edges
    }

    /// Append an adjacency entry. The id is not checked against any graph.
    pub fn add_edge(&mut self, id: NodeId) {
        self.edges.push(id);
    }

    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}
