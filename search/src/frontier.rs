//! Min-priority frontier over arena handles.
//!
//! No decrease-key and no removal: a state rediscovered at a better cost is
//! pushed again and the older entry goes stale in place. What happens to a
//! stale entry when it surfaces is the search loop's business (see
//! [`crate::policy::StalePolicy`]).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::node::{FrontierKey, NodeId, SearchNode};
use crate::policy::TieBreak;

/// A frontier entry: ordering key plus the handle of the node it orders.
///
/// `BinaryHeap` is a max-heap, so the key is wrapped in `Reverse` to pop the
/// lowest key first.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node: NodeId,
}

/// Best-first frontier.
#[derive(Debug)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    tie_break: TieBreak,
    high_water: usize,
}

impl Frontier {
    #[must_use]
    pub fn new(tie_break: TieBreak) -> Self {
        Self {
            heap: BinaryHeap::new(),
            tie_break,
            high_water: 0,
        }
    }

    /// Push `node`. O(log n).
    pub fn push<S>(&mut self, node: &SearchNode<S>) {
        self.heap.push(FrontierEntry {
            key: Reverse(FrontierKey::for_node(node, self.tie_break)),
            node: node.node_id,
        });
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Pop the handle with the lowest key. O(log n).
    #[must_use]
    pub fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|e| e.node)
    }

    /// The node the next [`Frontier::pop`] would return.
    #[must_use]
    pub fn peek(&self) -> Option<NodeId> {
        self.heap.peek().map(|e| e.node)
    }

    /// The key that the next [`Frontier::pop`] would return.
    #[must_use]
    pub fn peek_key(&self) -> Option<FrontierKey> {
        self.heap.peek().map(|e| e.key.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier has reached.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
