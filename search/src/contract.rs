//! Search problem contract trait.

use std::fmt::Debug;
use std::hash::Hash;

/// A problem the engine can search.
///
/// # Contract
///
/// - `is_goal` and `successors` must be total over every state reachable
///   from `start_state`.
/// - `successors` must return a finite list. Duplicates are allowed, both
///   within one call and across calls.
/// - `step_cost` must return the cost of the edge `from → to` for every `to`
///   that `successors(from)` produced.
///
/// The engine does not validate any of this. A panicking implementation
/// propagates to the caller of the search.
pub trait SearchProblem {
    /// Opaque problem state. Equality and hashing are by value.
    type State: Clone + Eq + Hash + Debug;

    /// Identifier recorded in the search result description.
    fn problem_id(&self) -> &str;

    /// The state the search starts from.
    fn start_state(&self) -> Self::State;

    /// Whether `state` satisfies the goal predicate.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// States reachable from `state` in one transition.
    fn successors(&self, state: &Self::State) -> Vec<Self::State>;

    /// Cost of the transition `from → to`. Unit cost unless overridden.
    fn step_cost(&self, _from: &Self::State, _to: &Self::State) -> u64 {
        1
    }
}
