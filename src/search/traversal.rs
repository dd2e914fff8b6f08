//! Frontier-driven traversal over any [`GraphSource`].
//!
//! Traversal state (colour, distance, predecessor) lives in a side table
//! owned by the run, never in the source graph. The source is only borrowed
//! immutably, so one graph can back any number of traversals, and a failed
//! traversal leaves it untouched.

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

use crate::config::{SearchConfig, Strategy};
use crate::error::{GraphError, Result};
use crate::graph::source::GraphSource;
use crate::observability::SearchMetrics;
use crate::search::frontier::{FifoQueue, Frontier, LifoStack};
use crate::search::result::{Reached, SearchResult};
use crate::types::{Colour, NodeId};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Lifecycle of a single traversal run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// Only the start id is in the frontier.
    Ready,
    /// At least one node has been popped and the frontier may still hold more.
    Exploring,
    /// The frontier ran dry, or a visit failed.
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct VisitRecord {
    colour: Colour,
    distance: u32,
    predecessor: Option<NodeId>,
}

/// Selection function that passes neighbours through unchanged.
pub fn identity(ids: Vec<NodeId>) -> Vec<NodeId> {
    ids
}

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

/// One traversal in progress, advanced with [`Run::step`] or driven to
/// completion with [`Run::finish`].
pub struct Run<'g, G: ?Sized, F, S> {
    source: &'g G,
    frontier: F,
    select: S,
    max_depth: Option<u32>,
    state: SearchState,
    start: NodeId,
    visits: HashMap<NodeId, VisitRecord>,
    order: Vec<NodeId>,
    metrics: SearchMetrics,
}

impl<'g, G, F, S> Run<'g, G, F, S>
where
    G: GraphSource + ?Sized,
    F: Frontier,
    S: FnMut(Vec<NodeId>) -> Vec<NodeId>,
{
    /// Seed a run: `start` is Grey at distance 0 and is the only frontier entry.
    ///
    /// The start id is not checked here; a missing start surfaces as a
    /// wrapped `NotFound` from the first [`step`](Run::step).
    pub fn new(source: &'g G, start: NodeId, mut frontier: F, select: S) -> Self {
        frontier.push(start);
        let mut visits = HashMap::new();
        visits.insert(
            start,
            VisitRecord {
                colour: Colour::Grey,
                distance: 0,
                predecessor: None,
            },
        );
        let mut metrics = SearchMetrics::new();
        metrics.observe_frontier(frontier.len());
        Self {
            source,
            frontier,
            select,
            max_depth: None,
            state: SearchState::Ready,
            start,
            visits,
            order: vec![start],
            metrics,
        }
    }

    /// Stop expanding nodes once they are `max_depth` hops from the start.
    ///
    /// Holds for every frontier order: a node found again by a shorter route
    /// has its distance lowered and is expanded again, so the run reaches
    /// exactly the nodes within `max_depth` hops.
    pub fn with_max_depth(mut self, max_depth: Option<u32>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Colour of `id` in this run. Nodes not yet discovered are White.
    pub fn colour(&self, id: NodeId) -> Colour {
        self.visits.get(&id).map_or(Colour::White, |r| r.colour)
    }

    pub fn distance(&self, id: NodeId) -> Option<u32> {
        self.visits.get(&id).map(|r| r.distance)
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn metrics(&self) -> &SearchMetrics {
        &self.metrics
    }

    /// Expand the next frontier entry.
    ///
    /// Returns the expanded id, or `Ok(None)` once the frontier is empty.
    /// A visit failure ends the run and is returned wrapped in
    /// [`GraphError::Visit`].
    pub fn step(&mut self) -> Result<Option<NodeId>> {
        if self.state == SearchState::Done {
            return Ok(None);
        }

        let current = match self.frontier.pop() {
            Ok(id) => id,
            Err(GraphError::Empty) => {
                self.state = SearchState::Done;
                return Ok(None);
            }
            Err(e) => {
                self.state = SearchState::Done;
                return Err(e);
            }
        };
        self.state = SearchState::Exploring;
        self.metrics.pops += 1;

        let neighbours = match self.source.visit(current) {
            Ok(ids) => ids,
            Err(e) => {
                self.state = SearchState::Done;
                return Err(e.visiting(current));
            }
        };

        let depth = self.distance(current).unwrap_or(0);
        let expand = self.max_depth.map_or(true, |max| depth < max);
        tracing::trace!(node = current, depth, neighbours = neighbours.len(), expand, "visit");

        if expand {
            for id in (self.select)(neighbours) {
                let next = depth.saturating_add(1);
                match self.visits.entry(id) {
                    // Under a depth limit, a node first reached by a longer
                    // route would be cut too early. Shorten it and expand it
                    // again. Its colour and discovery position stay put.
                    Entry::Occupied(mut slot)
                        if self.max_depth.is_some() && next < slot.get().distance =>
                    {
                        let record = slot.get_mut();
                        record.distance = next;
                        record.predecessor = Some(current);
                        self.frontier.push(id);
                        self.metrics.reopened += 1;
                    }
                    Entry::Occupied(_) => self.metrics.skipped += 1,
                    Entry::Vacant(slot) => {
                        slot.insert(VisitRecord {
                            colour: Colour::Grey,
                            distance: next,
                            predecessor: Some(current),
                        });
                        self.order.push(id);
                        self.frontier.push(id);
                        self.metrics.discovered += 1;
                    }
                }
            }
            self.metrics.observe_frontier(self.frontier.len());
        }

        if let Some(record) = self.visits.get_mut(&current) {
            record.colour = record.colour.next();
        }
        Ok(Some(current))
    }

    /// Run to completion and collect the reached nodes.
    pub fn finish(mut self) -> Result<SearchResult> {
        let span = tracing::debug_span!("search", start = self.start);
        let _enter = span.enter();

        while self.step()?.is_some() {}

        tracing::debug!(
            reached = self.order.len(),
            pops = self.metrics.pops,
            skipped = self.metrics.skipped,
            reopened = self.metrics.reopened,
            discovery_rate = self.metrics.discovery_rate(),
            "search complete"
        );
        Ok(self.into_result())
    }

    fn into_result(self) -> SearchResult {
        let reached: BTreeMap<NodeId, Reached> = self
            .visits
            .into_iter()
            .map(|(id, r)| {
                (
                    id,
                    Reached {
                        distance: r.distance,
                        predecessor: r.predecessor,
                    },
                )
            })
            .collect();
        SearchResult {
            start: self.start,
            order: self.order,
            reached,
            metrics: self.metrics,
        }
    }
}

// ---------------------------------------------------------------------------
// Traversal
// ---------------------------------------------------------------------------

/// Traversal entry points bound to one graph source.
///
/// ```
/// use graphwalk::graph::Graph;
/// use graphwalk::search::Traversal;
///
/// let g = Graph::build("1 2\n2 3\n").unwrap();
/// let result = Traversal::new(&g).bfs(1).unwrap();
/// assert_eq!(result.distance(3), Some(2));
/// ```
pub struct Traversal<'a, G: ?Sized> {
    source: &'a G,
    strategy: Strategy,
    max_depth: Option<u32>,
}

impl<'a, G: GraphSource + ?Sized> Traversal<'a, G> {
    /// Breadth-first, unbounded.
    pub fn new(source: &'a G) -> Self {
        Self {
            source,
            strategy: Strategy::BreadthFirst,
            max_depth: None,
        }
    }

    pub fn with_config(source: &'a G, config: &SearchConfig) -> Self {
        Self {
            source,
            strategy: config.strategy,
            max_depth: config.max_depth,
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<u32>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// A stepwise run with an explicit frontier and selection function.
    pub fn start<F, S>(&self, start: NodeId, frontier: F, select: S) -> Run<'a, G, F, S>
    where
        F: Frontier,
        S: FnMut(Vec<NodeId>) -> Vec<NodeId>,
    {
        Run::new(self.source, start, frontier, select).with_max_depth(self.max_depth)
    }

    /// Traverse with an explicit frontier and selection function.
    pub fn search<F, S>(&self, start: NodeId, frontier: F, select: S) -> Result<SearchResult>
    where
        F: Frontier,
        S: FnMut(Vec<NodeId>) -> Vec<NodeId>,
    {
        self.start(start, frontier, select).finish()
    }

    /// Traverse with the configured strategy and the given selection function.
    pub fn run_with<S>(&self, start: NodeId, select: S) -> Result<SearchResult>
    where
        S: FnMut(Vec<NodeId>) -> Vec<NodeId>,
    {
        tracing::debug!(start, strategy = %self.strategy, max_depth = ?self.max_depth, "starting search");
        self.search(start, self.strategy.frontier(), select)
    }

    /// Traverse with the configured strategy, expanding every neighbour.
    pub fn run(&self, start: NodeId) -> Result<SearchResult> {
        self.run_with(start, identity)
    }

    /// Breadth-first search regardless of the configured strategy.
    pub fn bfs(&self, start: NodeId) -> Result<SearchResult> {
        self.search(start, FifoQueue::new(), identity)
    }

    /// Depth-first search regardless of the configured strategy.
    pub fn dfs(&self, start: NodeId) -> Result<SearchResult> {
        self.search(start, LifoStack::new(), identity)
    }
}

/// Explore `source` from `start`, filtering each node's neighbours through
/// `select` before they are enqueued. Breadth-first.
pub fn search<G, S>(source: &G, select: S, start: NodeId) -> Result<SearchResult>
where
    G: GraphSource + ?Sized,
    S: FnMut(Vec<NodeId>) -> Vec<NodeId>,
{
    Traversal::new(source).search(start, FifoQueue::new(), select)
}

/// Breadth-first search from `start`, expanding every neighbour.
pub fn bfs<G: GraphSource + ?Sized>(source: &G, start: NodeId) -> Result<SearchResult> {
    Traversal::new(source).bfs(start)
}

/// Depth-first search from `start`, expanding every neighbour.
pub fn dfs<G: GraphSource + ?Sized>(source: &G, start: NodeId) -> Result<SearchResult> {
    Traversal::new(source).dfs(start)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
