//! Search result and statistics.

use std::fmt::Debug;

use crate::node::NodeId;
use crate::trace::SearchTrace;

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A goal node was popped.
    GoalReached { node_id: NodeId },
    /// The frontier emptied without reaching a goal: no solution exists.
    FrontierExhausted,
    /// `max_expansions` nodes were visited without reaching a goal.
    ExpansionBudgetExceeded,
    /// The caller stopped stepping a [`crate::search::SearchRun`] early.
    Stopped,
}

impl Termination {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
            Self::Stopped => "stopped",
        }
    }
}

/// Counters beyond `nodes_visited`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes created (root included). Equals total frontier pushes.
    pub nodes_created: u64,
    /// Successors whose tentative cost was `<=` the recorded best.
    pub relaxations: u64,
    /// Successors whose tentative cost lost to the recorded best.
    pub rejected: u64,
    /// Popped nodes discarded as stale (`SkipStale` only).
    pub stale_skipped: u64,
    /// Largest frontier size reached.
    pub frontier_high_water: u64,
}

/// Outcome of one search call.
///
/// An empty `path` means no solution was found; check
/// [`SearchResult::is_solved`] rather than expecting an error.
#[derive(Debug, Clone)]
pub struct SearchResult<S> {
    /// Identifier of the searched problem.
    pub problem_id: String,
    /// Name of the heuristic used.
    pub heuristic_name: String,
    /// Nodes popped from the frontier and goal tested.
    pub nodes_visited: u64,
    /// States from start to goal, inclusive. Empty if unsolved.
    pub path: Vec<S>,
    /// Cost of `path` (`None` if unsolved).
    pub path_cost: Option<u64>,
    pub termination: Termination,
    pub stats: SearchStats,
    /// Present when the policy asked for it.
    pub trace: Option<SearchTrace>,
}

impl<S> SearchResult<S> {
    /// `"A* on <problem> with heuristic <name>"`.
    #[must_use]
    pub fn description(&self) -> String {
        format!(
            "A* on {} with heuristic {}",
            self.problem_id, self.heuristic_name
        )
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self.termination, Termination::GoalReached { .. })
    }

    /// Number of transitions in the solution.
    #[must_use]
    pub fn solution_length(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl<S: Debug> std::fmt::Display for SearchResult<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "----")?;
        writeln!(f, "{}", self.description())?;
        writeln!(f, "nodes visited: {}", self.nodes_visited)?;
        match self.path_cost {
            Some(cost) => {
                writeln!(f, "solution length: {}", self.solution_length())?;
                writeln!(f, "cost: {cost}")?;
                write!(f, "path: {:?}", self.path)
            }
            None => write!(f, "no solution found ({})", self.termination.as_str()),
        }
    }
}
