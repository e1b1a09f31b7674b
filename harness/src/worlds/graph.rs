//! `WeightedGraph`: explicit directed graph with weighted edges.
//!
//! Nodes are string labels. Successors are enumerated in edge insertion
//! order, which makes the FIFO tie-break observable in tests.

use std::collections::{BTreeSet, VecDeque};

use wayfind_search::SearchProblem;

/// A directed weighted graph with one start node and a set of goal nodes.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    id: String,
    start: String,
    goals: BTreeSet<String>,
    edges: Vec<(String, String, u64)>,
}

impl WeightedGraph {
    #[must_use]
    pub fn new(id: impl Into<String>, start: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            start: start.into(),
            goals: BTreeSet::new(),
            edges: Vec::new(),
        }
    }

    /// Add the edge `from → to` with weight `weight`.
    #[must_use]
    pub fn edge(mut self, from: impl Into<String>, to: impl Into<String>, weight: u64) -> Self {
        self.edges.push((from.into(), to.into(), weight));
        self
    }

    /// Mark `label` as a goal.
    #[must_use]
    pub fn goal(mut self, label: impl Into<String>) -> Self {
        self.goals.insert(label.into());
        self
    }

    #[must_use]
    pub fn edges(&self) -> &[(String, String, u64)] {
        &self.edges
    }

    /// Every label reachable from the start node, start included.
    #[must_use]
    pub fn reachable_from_start(&self) -> BTreeSet<String> {
        let mut seen = BTreeSet::new();
        let mut queue = VecDeque::from([self.start.clone()]);
        while let Some(label) = queue.pop_front() {
            if !seen.insert(label.clone()) {
                continue;
            }
            queue.extend(self.successors(&label));
        }
        seen
    }

    /// Total weight of `path`, or `None` if some consecutive pair is not an edge.
    #[must_use]
    pub fn path_weight(&self, path: &[String]) -> Option<u64> {
        path.windows(2).try_fold(0u64, |acc, pair| {
            self.weight(&pair[0], &pair[1])
                .map(|w| acc.saturating_add(w))
        })
    }

    fn weight(&self, from: &str, to: &str) -> Option<u64> {
        self.edges
            .iter()
            .filter(|(f, t, _)| f == from && t == to)
            .map(|&(_, _, w)| w)
            .min()
    }
}

impl SearchProblem for WeightedGraph {
    type State = String;

    fn problem_id(&self) -> &str {
        &self.id
    }

    fn start_state(&self) -> String {
        self.start.clone()
    }

    fn is_goal(&self, state: &String) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &String) -> Vec<String> {
        self.edges
            .iter()
            .filter(|(from, _, _)| from == state)
            .map(|(_, to, _)| to.clone())
            .collect()
    }

    /// Cheapest parallel edge; unit cost if the pair is not an edge.
    fn step_cost(&self, from: &String, to: &String) -> u64 {
        self.weight(from, to).unwrap_or(1)
    }
}
