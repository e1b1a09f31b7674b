//! Search policy types.

use crate::error::SearchError;

/// Knobs for one search call.
///
/// The default is the hardened configuration: stale entries are skipped,
/// ties go to the older node, no budget, no trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Stop with [`crate::result::Termination::ExpansionBudgetExceeded`] after
    /// this many visited nodes. `None` searches until goal or exhaustion.
    pub max_expansions: Option<u64>,
    /// What to do with a popped node that is no longer the best for its state.
    pub stale_policy: StalePolicy,
    /// Secondary ordering for equal-priority frontier entries.
    pub tie_break: TieBreak,
    /// Record a [`crate::trace::SearchTrace`] in the result.
    pub record_trace: bool,
}

impl SearchPolicy {
    /// The unhardened loop: every popped node is goal tested and expanded.
    #[must_use]
    pub fn baseline() -> Self {
        Self {
            stale_policy: StalePolicy::Reexpand,
            ..Self::default()
        }
    }

    /// Validate before any search step runs.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero
    /// (the start state could never be goal tested).
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_expansions: None,
            stale_policy: StalePolicy::SkipStale,
            tie_break: TieBreak::Fifo,
            record_trace: false,
        }
    }
}

/// Handling of stale frontier entries when they are popped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StalePolicy {
    /// Goal test and expand every popped node, stale or not. Every pop counts
    /// toward `nodes_visited`; a state may be expanded more than once.
    ///
    /// A zero-cost cycle keeps re-pushing equal-cost entries, so this policy
    /// needs either positive cycle costs or `max_expansions` to terminate.
    Reexpand,
    /// Discard a popped node if its `path_cost` exceeds the best recorded cost
    /// for its state, or if its state was already expanded at a cost no
    /// greater than its own. Discarded pops are counted in
    /// `stats.stale_skipped`, not in `nodes_visited`.
    SkipStale,
}

impl StalePolicy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reexpand => "reexpand",
            Self::SkipStale => "skip_stale",
        }
    }
}

/// Secondary ordering key for equal-priority frontier entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Older nodes first (insertion order).
    Fifo,
    /// Newer nodes first.
    Lifo,
}

impl TieBreak {
    /// Map a creation counter to the `tie` component of a frontier key.
    #[must_use]
    pub fn tie_value(self, creation_order: u64) -> u64 {
        match self {
            Self::Fifo => creation_order,
            Self::Lifo => u64::MAX - creation_order,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fifo => "fifo",
            Self::Lifo => "lifo",
        }
    }
}
