//! Frontier disciplines: LIFO stack, FIFO queue, and cost-ordered queue.
//!
//! Frontiers hold [`NodeId`]s only; the nodes themselves live in the
//! [`NodeArena`](crate::node::NodeArena). None of them deduplicate. Visited
//! bookkeeping belongs to the expansion loop.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::node::NodeId;

/// Ordered container of pending nodes.
pub trait Frontier {
    /// Add a node. `priority` is the node's cumulative path cost; only
    /// cost-ordered frontiers look at it.
    fn push(&mut self, node: NodeId, priority: i64);

    /// Remove the next node per this frontier's discipline.
    fn pop(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest size this frontier ever reached.
    fn high_water(&self) -> u64;
}

/// Depth-first discipline.
#[derive(Debug, Default)]
pub struct StackFrontier {
    items: Vec<NodeId>,
    high_water: u64,
}

impl StackFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    fn push(&mut self, node: NodeId, _priority: i64) {
        self.items.push(node);
        self.high_water = self.high_water.max(self.items.len() as u64);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.items.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }
}

/// Breadth-first discipline.
#[derive(Debug, Default)]
pub struct QueueFrontier {
    items: VecDeque<NodeId>,
    high_water: u64,
}

impl QueueFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for QueueFrontier {
    fn push(&mut self, node: NodeId, _priority: i64) {
        self.items.push_back(node);
        self.high_water = self.high_water.max(self.items.len() as u64);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }
}

/// The priority frontier ordering key: `(priority, sequence)`.
///
/// Lower priority first, then earlier insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub priority: i64,
    pub sequence: u64,
}

/// `BinaryHeap` is a max-heap, so entries carry `Reverse<FrontierKey>` to pop
/// the lowest key first.
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Uniform-cost discipline: min-priority queue, FIFO among equal priorities.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<FrontierEntry>,
    next_sequence: u64,
    high_water: u64,
}

impl PriorityFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Key of the node that would be popped next.
    #[must_use]
    pub fn peek_key(&self) -> Option<FrontierKey> {
        self.heap.peek().map(|e| e.key.0)
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, node: NodeId, priority: i64) {
        let key = FrontierKey {
            priority,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node,
        });
        self.high_water = self.high_water.max(self.heap.len() as u64);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|e| e.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }
}
