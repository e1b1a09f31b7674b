//! Table-driven heuristics.

use std::collections::HashMap;
use std::hash::Hash;

use wayfind_search::Heuristic;

/// Per-state estimates from an explicit table.
///
/// States missing from the table get `default`. A table built from true
/// remaining costs (or lower bounds of them) with `default = 0` is
/// admissible.
#[derive(Debug, Clone)]
pub struct TableHeuristic<S> {
    name: String,
    table: HashMap<S, u64>,
    default: u64,
}

impl<S: Eq + Hash> TableHeuristic<S> {
    #[must_use]
    pub fn new(name: impl Into<String>, default: u64) -> Self {
        Self {
            name: name.into(),
            table: HashMap::new(),
            default,
        }
    }

    /// Add or replace the estimate for `state`.
    #[must_use]
    pub fn with(mut self, state: S, estimate: u64) -> Self {
        self.table.insert(state, estimate);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl<S: Eq + Hash> FromIterator<(S, u64)> for TableHeuristic<S> {
    /// Unnamed table (`"table"`) with default 0.
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self {
            name: "table".to_string(),
            table: iter.into_iter().collect(),
            default: 0,
        }
    }
}

impl<S: Eq + Hash> Heuristic<S> for TableHeuristic<S> {
    fn name(&self) -> &str {
        &self.name
    }

    fn estimate(&self, state: &S) -> u64 {
        self.table.get(state).copied().unwrap_or(self.default)
    }
}
