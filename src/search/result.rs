//! Reachability output of a traversal.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::graph::store::Graph;
use crate::observability::SearchMetrics;
use crate::types::{Colour, NodeId};

/// How a node was first reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reached {
    /// Hops from the start node along the discovery tree.
    pub distance: u32,
    /// The node whose expansion discovered this one; `None` for the start.
    pub predecessor: Option<NodeId>,
}

/// Every node reached by one traversal, with its discovery distance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub start: NodeId,
    /// Ids in discovery order, start first.
    pub order: Vec<NodeId>,
    pub reached: BTreeMap<NodeId, Reached>,
    pub metrics: SearchMetrics,
}

impl SearchResult {
    /// Number of reached nodes, including the start.
    pub fn len(&self) -> usize {
        self.reached.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reached.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.reached.contains_key(&id)
    }

    pub fn distance(&self, id: NodeId) -> Option<u32> {
        self.reached.get(&id).map(|r| r.distance)
    }

    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        self.reached.get(&id).and_then(|r| r.predecessor)
    }

    /// Reached ids at exactly `distance` hops, ascending.
    pub fn at_distance(&self, distance: u32) -> Vec<NodeId> {
        self.reached
            .iter()
            .filter(|(_, r)| r.distance == distance)
            .map(|(id, _)| *id)
            .collect()
    }

    /// The discovery path from the start to `target`, both included.
    ///
    /// Under breadth-first ordering this is a shortest hop path. Returns
    /// `None` if `target` was not reached.
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        let mut path = vec![target];
        let mut current = self.reached.get(&target)?;
        while let Some(prev) = current.predecessor {
            // Predecessor chains are acyclic; the bound guards malformed input.
            if path.len() > self.reached.len() {
                return None;
            }
            path.push(prev);
            current = self.reached.get(&prev)?;
        }
        path.reverse();
        Some(path)
    }

    /// The discovery tree as a graph: each reached node, with one adjacency
    /// entry from its predecessor. Every node is Black, as a completed
    /// traversal leaves it.
    pub fn tree(&self) -> Graph {
        let mut tree = Graph::new();
        for &id in &self.order {
            match self.predecessor(id) {
                Some(prev) => tree.add_edge(prev, id),
                None => {
                    tree.insert_node(id);
                }
            }
        }
        for &id in &self.order {
            if let Some(node) = tree.node_mut(id) {
                while node.colour() != Colour::Black {
                    node.advance_colour();
                }
            }
        }
        tree
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
