//! Node arena: exclusive owner of every node created during one search.
//!
//! Parents are stored as [`NodeId`] indices, so a child refers back to its
//! predecessor without owning it and path reconstruction is an index walk.

use crate::node::{NodeId, SearchNode};

/// Append-only store of search nodes.
#[derive(Debug, Clone)]
pub struct NodeArena<S> {
    nodes: Vec<SearchNode<S>>,
}

impl<S> NodeArena<S> {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create a node and return its handle.
    ///
    /// `depth` is derived from the parent. An unknown parent handle is
    /// treated as a root.
    pub fn insert(
        &mut self,
        state: S,
        heuristic: u64,
        parent: Option<NodeId>,
        path_cost: u64,
    ) -> NodeId {
        let depth = parent
            .and_then(|p| self.get(p))
            .map_or(0, |p| p.depth.saturating_add(1));
        let node_id = NodeId::new(self.nodes.len());
        self.nodes.push(SearchNode {
            node_id,
            parent,
            state,
            heuristic,
            path_cost,
            depth,
        });
        node_id
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&SearchNode<S>> {
        self.nodes.get(id.index())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchNode<S>> {
        self.nodes.iter()
    }

    /// Handles from the root to `id`, inclusive. Empty if `id` is unknown.
    #[must_use]
    pub fn lineage(&self, id: NodeId) -> Vec<NodeId> {
        let mut ids = Vec::new();
        let mut cursor = self.get(id);
        while let Some(node) = cursor {
            ids.push(node.node_id);
            cursor = node.parent.and_then(|p| self.get(p));
        }
        ids.reverse();
        ids
    }
}

impl<S: Clone> NodeArena<S> {
    /// States from the root to `id`, inclusive.
    #[must_use]
    pub fn path_to(&self, id: NodeId) -> Vec<S> {
        self.lineage(id)
            .into_iter()
            .filter_map(|n| self.get(n).map(|node| node.state.clone()))
            .collect()
    }
}

impl<S> Default for NodeArena<S> {
    fn default() -> Self {
        Self::new()
    }
}
