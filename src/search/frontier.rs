//! Frontier containers that sequence a traversal.
//!
//! The ordering policy of the frontier is the traversal strategy: the driver
//! pushes discovered ids and pops the next one to expand, and nothing else
//! changes between breadth-first, depth-first and lowest-id-first searches.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::error::{GraphError, Result};
use crate::types::NodeId;

/// An ordered container of ids awaiting expansion.
pub trait Frontier {
    fn push(&mut self, id: NodeId);

    /// Remove the next id, or fail with [`GraphError::Empty`].
    fn pop(&mut self) -> Result<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<F: Frontier + ?Sized> Frontier for Box<F> {
    fn push(&mut self, id: NodeId) {
        (**self).push(id);
    }

    fn pop(&mut self) -> Result<NodeId> {
        (**self).pop()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

// ---------------------------------------------------------------------------
// FifoQueue
// ---------------------------------------------------------------------------

/// Strict first-in first-out order; yields a breadth-first search.
#[derive(Debug, Clone, Default)]
pub struct FifoQueue {
    items: VecDeque<NodeId>,
}

impl FifoQueue {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoQueue {
    fn push(&mut self, id: NodeId) {
        self.items.push_back(id);
    }

    fn pop(&mut self) -> Result<NodeId> {
        self.items.pop_front().ok_or(GraphError::Empty)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

// ---------------------------------------------------------------------------
// LifoStack
// ---------------------------------------------------------------------------

/// Last-in first-out order; yields a depth-first search.
#[derive(Debug, Clone, Default)]
pub struct LifoStack {
    items: Vec<NodeId>,
}

impl LifoStack {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoStack {
    fn push(&mut self, id: NodeId) {
        self.items.push(id);
    }

    fn pop(&mut self) -> Result<NodeId> {
        self.items.pop().ok_or(GraphError::Empty)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

// ---------------------------------------------------------------------------
// LowestIdFirst
// ---------------------------------------------------------------------------

/// Min-heap on id: always expands the smallest pending id next.
#[derive(Debug, Clone, Default)]
pub struct LowestIdFirst {
    heap: BinaryHeap<Reverse<NodeId>>,
}

impl LowestIdFirst {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LowestIdFirst {
    fn push(&mut self, id: NodeId) {
        self.heap.push(Reverse(id));
    }

    fn pop(&mut self) -> Result<NodeId> {
        self.heap
            .pop()
            .map(|Reverse(id)| id)
            .ok_or(GraphError::Empty)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
