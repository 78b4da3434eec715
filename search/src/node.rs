//! Search nodes and the arena that owns them.
//!
//! Nodes form a tree rooted at the start state. A node refers to its parent
//! by [`NodeId`] only; the arena owns every node, so there is no cyclic
//! ownership and path reconstruction is a walk over indices.

use std::ops::Index;

/// Handle of a node inside a [`NodeArena`]. Assigned in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    #[allow(clippy::cast_possible_truncation)]
    const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An immutable search node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode<S, A> {
    pub node_id: NodeId,
    /// `None` for the root.
    pub parent_id: Option<NodeId>,
    pub state: S,
    /// The action that produced this node from its parent (`None` for the root).
    pub action: Option<A>,
    /// Cumulative path cost from the root.
    pub path_cost: i64,
    /// Tree depth (root = 0).
    pub depth: u32,
}

/// Append-only store of search nodes.
#[derive(Debug, Clone)]
pub struct NodeArena<S, A> {
    nodes: Vec<SearchNode<S, A>>,
}

impl<S, A> NodeArena<S, A> {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create the root node for `state`.
    pub fn push_root(&mut self, state: S) -> NodeId {
        let node_id = self.next_id();
        self.nodes.push(SearchNode {
            node_id,
            parent_id: None,
            state,
            action: None,
            path_cost: 0,
            depth: 0,
        });
        node_id
    }

    /// Create a child of `parent` reached via `action` at `step_cost`.
    pub fn push_child(&mut self, parent: NodeId, state: S, action: A, step_cost: i64) -> NodeId {
        let node_id = self.next_id();
        let (path_cost, depth) = {
            let p = &self[parent];
            (p.path_cost.saturating_add(step_cost), p.depth + 1)
        };
        self.nodes.push(SearchNode {
            node_id,
            parent_id: Some(parent),
            state,
            action: Some(action),
            path_cost,
            depth,
        });
        node_id
    }

    #[must_use]
    pub fn get(&self, node_id: NodeId) -> Option<&SearchNode<S, A>> {
        self.nodes.get(node_id.index())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchNode<S, A>> {
        self.nodes.iter()
    }

    /// Actions along the path from the root to `node_id`, root first.
    #[must_use]
    pub fn actions_to(&self, node_id: NodeId) -> Vec<A>
    where
        A: Clone,
    {
        reconstruct_path(self, node_id)
            .into_iter()
            .filter_map(|id| self[id].action.clone())
            .collect()
    }

    fn next_id(&self) -> NodeId {
        NodeId(self.nodes.len() as u64)
    }
}

impl<S, A> Default for NodeArena<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> Index<NodeId> for NodeArena<S, A> {
    type Output = SearchNode<S, A>;

    fn index(&self, node_id: NodeId) -> &Self::Output {
        &self.nodes[node_id.index()]
    }
}

/// Node ids from the root to `goal`, root first.
///
/// An id not present in `arena` yields an empty path.
#[must_use]
pub fn reconstruct_path<S, A>(arena: &NodeArena<S, A>, goal: NodeId) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current = arena.get(goal).map(|n| n.node_id);

    while let Some(id) = current {
        path.push(id);
        current = arena.get(id).and_then(|n| n.parent_id);
    }

    path.reverse();
    path
}
