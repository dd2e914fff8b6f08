//! In-memory graph store.
//!
//! `Graph` owns every `Node` keyed by id. Structure is append-only: nodes
//! and adjacency entries can be added but never removed, and every id that
//! appears in an adjacency list is also a key of the store.

use std::collections::HashMap;
use std::io::BufRead;
use std::str::FromStr;

use crate::config::BuildConfig;
use crate::error::{GraphError, Result};
use crate::graph::node::Node;
use crate::graph::parse::{parse_edge_list, parse_line, EdgeLine};
use crate::types::NodeId;

// ---------------------------------------------------------------------------
// GraphStats
// ---------------------------------------------------------------------------

/// Aggregate statistics about a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// An owning collection of nodes, built from an edge list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    nodes: HashMap<NodeId, Node>,
}

impl Graph {
    /// An empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from edge-list text, one-directional adjacency per line.
    ///
    /// ```
    /// use graphwalk::graph::Graph;
    ///
    /// let g = Graph::build("1 2\n2 3\n").unwrap();
    /// assert_eq!(g.size(), 3);
    /// assert_eq!(g.visit(1).unwrap(), vec![2]);
    /// assert!(g.visit(3).unwrap().is_empty());
    /// ```
    pub fn build(input: &str) -> Result<Self> {
        Self::build_with(input, &BuildConfig::default())
    }

    /// Build a graph from edge-list text with explicit build options.
    ///
    /// With `undirected` set, every edge line also records the reverse
    /// adjacency entry.
    pub fn build_with(input: &str, options: &BuildConfig) -> Result<Self> {
        let lines = parse_edge_list(input)?;
        let mut graph = Self::new();
        for line in &lines {
            graph.apply_line(line, options);
        }
        graph.log_built(lines.len());
        Ok(graph)
    }

    /// Build a graph by streaming lines from a reader.
    ///
    /// Parsing stops at the first malformed line or I/O error; nothing is
    /// returned in that case.
    pub fn from_reader<R: BufRead>(reader: R, options: &BuildConfig) -> Result<Self> {
        let mut graph = Self::new();
        let mut count = 0;
        for (idx, text) in reader.lines().enumerate() {
            let text = text?;
            if let Some(line) = parse_line(idx + 1, &text)? {
                graph.apply_line(&line, options);
                count += 1;
            }
        }
        graph.log_built(count);
        Ok(graph)
    }

    fn apply_line(&mut self, line: &EdgeLine, options: &BuildConfig) {
        match line.target {
            Some(target) if options.undirected => self.add_undirected_edge(line.source, target),
            Some(target) => self.add_edge(line.source, target),
            None => {
                self.insert_node(line.source);
            }
        }
    }

    fn log_built(&self, lines: usize) {
        tracing::debug!(
            lines,
            nodes = self.size(),
            edges = self.edge_count(),
            "built graph from edge list"
        );
    }

    // -------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------

    /// Get the node for `id`, creating a White placeholder if absent.
    pub fn insert_node(&mut self, id: NodeId) -> &mut Node {
        self.nodes.entry(id).or_insert_with(|| Node::new(id))
    }

    /// Add an adjacency entry `from -> to`, creating either endpoint as needed.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        self.insert_node(to);
        self.insert_node(from).add_edge(to);
    }

    /// Add adjacency entries in both directions.
    ///
    /// A self-edge is recorded twice, matching two separate `add_edge` calls.
    pub fn add_undirected_edge(&mut self, a: NodeId, b: NodeId) {
        self.add_edge(a, b);
        self.add_edge(b, a);
    }

    // -------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------

    /// Look up a node. Never fails; absent ids yield `None`.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    /// The adjacency list of `id`, in insertion order.
    ///
    /// Returns a copy; later mutations of the graph are not reflected.
    pub fn visit(&self, id: NodeId) -> Result<Vec<NodeId>> {
        self.nodes
            .get(&id)
            .map(|n| n.edges().to_vec())
            .ok_or(GraphError::NotFound(id))
    }

    /// Number of distinct vertices.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Total number of adjacency entries across all nodes.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Node::degree).sum()
    }

    /// All vertex ids in ascending order.
    pub fn ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.nodes.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Iterate over nodes in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            nodes: self.size(),
            edges: self.edge_count(),
        }
    }
}

impl FromStr for Graph {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        Self::build(s)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
