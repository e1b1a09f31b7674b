//! Search node and frontier ordering key.

use std::cmp::Ordering;

use crate::policy::TieBreak;

/// Stable handle of a node inside a [`crate::arena::NodeArena`].
///
/// Handles are assigned in creation order, so the index doubles as the
/// creation counter used for tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position in the arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }

    /// Creation order as a `u64` (for keys and serialization).
    #[must_use]
    pub fn creation_order(self) -> u64 {
        self.0 as u64
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// One discovery of a state during search.
///
/// Two nodes may wrap the same state; they then differ only in `path_cost`,
/// `parent` and `depth`. The heuristic is computed once when the node is
/// created and never changes.
#[derive(Debug, Clone)]
pub struct SearchNode<S> {
    /// Arena handle (also the creation order).
    pub node_id: NodeId,
    /// Predecessor on the path from the start state (`None` for the root).
    pub parent: Option<NodeId>,
    /// The wrapped problem state.
    pub state: S,
    /// Heuristic estimate `h` for `state`.
    pub heuristic: u64,
    /// Exact accumulated cost `g` from the start state.
    pub path_cost: u64,
    /// Number of edges from the root.
    pub depth: u32,
}

impl<S> SearchNode<S> {
    /// `f = g + h`, the A* evaluation function. Lower dequeues first.
    #[must_use]
    pub fn priority(&self) -> u64 {
        self.path_cost.saturating_add(self.heuristic)
    }

    /// Compare by priority alone. Equal priorities compare `Equal` regardless
    /// of state.
    ///
    /// Informational only: `SearchNode` is not `Ord`, and the frontier never
    /// calls this. Queue order is [`FrontierKey`], which adds the tie-break.
    #[must_use]
    pub fn cmp_priority(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

/// The frontier ordering key: `(priority, tie)`.
///
/// Lower `priority` first; on equal priority, lower `tie` first. The tie
/// value is derived from creation order by the policy's [`TieBreak`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub priority: u64,
    pub tie: u64,
}

impl FrontierKey {
    /// Build the key for `node` under `tie_break`.
    #[must_use]
    pub fn for_node<S>(node: &SearchNode<S>, tie_break: TieBreak) -> Self {
        Self {
            priority: node.priority(),
            tie: tie_break.tie_value(node.node_id.creation_order()),
        }
    }
}
