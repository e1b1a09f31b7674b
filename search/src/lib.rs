//! Wayfind Search: generic A* over implicitly defined state graphs.
//!
//! The engine knows nothing about the domain it searches. A problem supplies
//! its start state, goal test and successor enumeration through
//! [`contract::SearchProblem`]; a [`heuristic::Heuristic`] supplies the
//! remaining-cost estimate. One call runs one search to completion and
//! returns a [`result::SearchResult`].
//!
//! # Crate dependency graph
//!
//! ```text
//! wayfind_kernel  ←  wayfind_search  ←  wayfind_harness
//! (canon, hash)      (A* engine)         (worlds, runner)
//! ```
//!
//! # Key types
//!
//! - [`node::SearchNode`]: one discovery of a state, with `f = g + h`
//! - [`arena::NodeArena`]: owns every node; parents are indices
//! - [`frontier::Frontier`]: min-heap over `(priority, tie)` keys
//! - [`policy::SearchPolicy`]: stale-entry policy, tie-break, budget
//! - [`search::SearchRun`]: resumable search state machine
//! - [`trace::SearchTrace`]: optional expansion audit log

#![forbid(unsafe_code)]

pub mod arena;
pub mod contract;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod policy;
pub mod result;
pub mod search;
pub mod trace;

pub use contract::SearchProblem;
pub use heuristic::{heuristic_fn, FnHeuristic, Heuristic, ZeroHeuristic};
pub use policy::{SearchPolicy, StalePolicy, TieBreak};
pub use result::{SearchResult, Termination};
pub use search::{astar_search, search, SearchRun};
