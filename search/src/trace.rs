//! `SearchTrace`: expansion audit log for one search call.
//!
//! One event per frontier pop, in pop order. Recorded only when
//! [`crate::policy::SearchPolicy::record_trace`] is set. The trace carries no
//! state values (states are opaque), only node handles and costs, so it can be
//! canonicalized and hashed for any problem.

use serde_json::{json, Value};

use wayfind_kernel::proof::canon::{canonical_json_bytes, CanonError};
use wayfind_kernel::proof::hash::{canonical_hash, ContentHash};
use wayfind_kernel::proof::hash_domain::HashDomain;

use crate::node::{NodeId, SearchNode};

/// What happened to a popped node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpandOutcome {
    /// Goal test failed; successors were relaxed.
    Expanded {
        /// Successor nodes pushed onto the frontier.
        pushed: Vec<NodeId>,
        /// Successors whose tentative cost lost to the recorded best.
        rejected: u64,
    },
    /// Discarded as stale without goal test.
    SkippedStale,
    /// The node's state satisfied the goal predicate.
    Goal,
}

/// A single frontier pop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandEvent {
    /// Zero-based pop index (counts skipped pops too).
    pub pop_order: u64,
    pub node_id: NodeId,
    pub parent_id: Option<NodeId>,
    pub depth: u32,
    pub path_cost: u64,
    pub heuristic: u64,
    pub outcome: ExpandOutcome,
}

impl ExpandEvent {
    pub(crate) fn for_node<S>(pop_order: u64, node: &SearchNode<S>, outcome: ExpandOutcome) -> Self {
        Self {
            pop_order,
            node_id: node.node_id,
            parent_id: node.parent,
            depth: node.depth,
            path_cost: node.path_cost,
            heuristic: node.heuristic,
            outcome,
        }
    }
}

/// The ordered pop log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTrace {
    pub events: Vec<ExpandEvent>,
}

impl SearchTrace {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, event: ExpandEvent) {
        self.events.push(event);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Node handles in the order they were popped.
    #[must_use]
    pub fn pop_sequence(&self) -> Vec<NodeId> {
        self.events.iter().map(|e| e.node_id).collect()
    }

    /// JSON form of the trace.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        Value::Array(self.events.iter().map(event_to_json).collect())
    }

    /// Canonical JSON bytes of [`SearchTrace::to_json_value`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails (all fields are integers
    /// or strings, so this does not happen in practice).
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content hash of the canonical bytes under [`HashDomain::SearchTrace`].
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`] from canonicalization.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchTrace, &bytes))
    }
}

fn event_to_json(event: &ExpandEvent) -> Value {
    let outcome = match &event.outcome {
        ExpandOutcome::Expanded { pushed, rejected } => json!({
            "type": "expanded",
            "pushed": pushed.iter().map(|n| n.creation_order()).collect::<Vec<_>>(),
            "rejected": rejected,
        }),
        ExpandOutcome::SkippedStale => json!({ "type": "skipped_stale" }),
        ExpandOutcome::Goal => json!({ "type": "goal" }),
    };
    json!({
        "pop_order": event.pop_order,
        "node_id": event.node_id.creation_order(),
        "parent_id": event.parent_id.map(NodeId::creation_order),
        "depth": event.depth,
        "path_cost": event.path_cost,
        "heuristic": event.heuristic,
        "outcome": outcome,
    })
}
