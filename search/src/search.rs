//! Search entry points and the A* expansion loop.
//!
//! The loop is a state machine ([`RunStatus`]) driven one pop at a time by
//! [`SearchRun::step`]. [`search`] and [`astar_search`] step it to completion;
//! callers that need their own stopping rule step it themselves.

use std::collections::HashMap;

use crate::arena::NodeArena;
use crate::contract::SearchProblem;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::heuristic::Heuristic;
use crate::node::{NodeId, SearchNode};
use crate::policy::{SearchPolicy, StalePolicy};
use crate::result::{SearchResult, SearchStats, Termination};
use crate::trace::{ExpandEvent, ExpandOutcome, SearchTrace};

/// Lifecycle of a [`SearchRun`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Running,
    GoalFound(NodeId),
    Exhausted,
    BudgetExceeded,
}

/// What a single [`SearchRun::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The popped node was not a goal; `pushed` successors entered the frontier.
    Expanded { node_id: NodeId, pushed: usize },
    /// The popped node was stale and discarded.
    SkippedStale { node_id: NodeId },
    /// The popped node is a goal. Terminal.
    GoalFound { node_id: NodeId },
    /// Nothing left to pop. Terminal.
    Exhausted,
    /// The expansion budget is spent while live entries remain. Terminal.
    BudgetExceeded,
}

/// One A* search in progress.
///
/// Owns every piece of per-call state: the node arena, the frontier, the
/// best-known cost per state and the counters. Nothing outlives the run.
pub struct SearchRun<'a, P, H>
where
    P: SearchProblem,
    H: Heuristic<P::State> + ?Sized,
{
    problem: &'a P,
    heuristic: &'a H,
    policy: SearchPolicy,
    arena: NodeArena<P::State>,
    frontier: Frontier,
    best_cost: HashMap<P::State, u64>,
    expanded_at: HashMap<P::State, u64>,
    nodes_visited: u64,
    pops: u64,
    stats: SearchStats,
    trace: Option<SearchTrace>,
    status: RunStatus,
}

impl<'a, P, H> SearchRun<'a, P, H>
where
    P: SearchProblem,
    H: Heuristic<P::State> + ?Sized,
{
    /// Validate `policy` and seed the frontier with the start node.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if the policy fails validation.
    /// No search step has run in that case.
    pub fn new(
        problem: &'a P,
        heuristic: &'a H,
        policy: &SearchPolicy,
    ) -> Result<Self, SearchError> {
        policy.validate()?;
        Ok(Self::start(problem, heuristic, policy.clone()))
    }

    fn start(problem: &'a P, heuristic: &'a H, policy: SearchPolicy) -> Self {
        let start = problem.start_state();
        let h = heuristic.estimate(&start);

        let mut arena = NodeArena::new();
        let mut frontier = Frontier::new(policy.tie_break);
        let mut best_cost = HashMap::new();

        best_cost.insert(start.clone(), 0);
        let root = arena.insert(start, h, None, 0);
        if let Some(node) = arena.get(root) {
            frontier.push(node);
        }

        tracing::debug!(
            problem = problem.problem_id(),
            heuristic = heuristic.name(),
            root_heuristic = h,
            stale_policy = policy.stale_policy.as_str(),
            tie_break = policy.tie_break.as_str(),
            "search started"
        );

        let trace = policy.record_trace.then(SearchTrace::new);
        Self {
            problem,
            heuristic,
            policy,
            arena,
            frontier,
            best_cost,
            expanded_at: HashMap::new(),
            nodes_visited: 0,
            pops: 0,
            stats: SearchStats {
                nodes_created: 1,
                ..SearchStats::default()
            },
            trace,
            status: RunStatus::Running,
        }
    }

    #[must_use]
    pub fn status(&self) -> RunStatus {
        self.status
    }

    /// Nodes popped and goal tested so far.
    #[must_use]
    pub fn nodes_visited(&self) -> u64 {
        self.nodes_visited
    }

    /// Best path cost recorded for `state`, if it has been discovered.
    #[must_use]
    pub fn best_cost(&self, state: &P::State) -> Option<u64> {
        self.best_cost.get(state).copied()
    }

    #[must_use]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    #[must_use]
    pub fn arena(&self) -> &NodeArena<P::State> {
        &self.arena
    }

    /// Pop one node and process it.
    ///
    /// Once the run has left [`RunStatus::Running`], further calls return the
    /// terminal outcome again without touching any state.
    pub fn step(&mut self) -> StepOutcome {
        match self.status {
            RunStatus::Running => {}
            RunStatus::GoalFound(node_id) => return StepOutcome::GoalFound { node_id },
            RunStatus::Exhausted => return StepOutcome::Exhausted,
            RunStatus::BudgetExceeded => return StepOutcome::BudgetExceeded,
        }

        // Stale pops cost no budget, so they are drained before the budget
        // can hide an exhausted frontier.
        if self
            .policy
            .max_expansions
            .is_some_and(|max| self.nodes_visited >= max)
            && !self.next_is_stale()
        {
            if self.frontier.is_empty() {
                self.finish_with(RunStatus::Exhausted);
                return StepOutcome::Exhausted;
            }
            self.finish_with(RunStatus::BudgetExceeded);
            return StepOutcome::BudgetExceeded;
        }

        let Some(current) = self
            .frontier
            .pop()
            .and_then(|id| self.arena.get(id))
            .cloned()
        else {
            self.finish_with(RunStatus::Exhausted);
            return StepOutcome::Exhausted;
        };
        let pop_order = self.pops;
        self.pops += 1;

        if self.policy.stale_policy == StalePolicy::SkipStale
            && self.is_stale(&current.state, current.path_cost)
        {
            self.stats.stale_skipped += 1;
            tracing::trace!(
                node = %current.node_id,
                path_cost = current.path_cost,
                "skipped stale frontier entry"
            );
            self.record(pop_order, &current, ExpandOutcome::SkippedStale);
            return StepOutcome::SkippedStale {
                node_id: current.node_id,
            };
        }

        self.nodes_visited += 1;

        if self.problem.is_goal(&current.state) {
            self.record(pop_order, &current, ExpandOutcome::Goal);
            self.finish_with(RunStatus::GoalFound(current.node_id));
            return StepOutcome::GoalFound {
                node_id: current.node_id,
            };
        }

        self.expanded_at
            .entry(current.state.clone())
            .and_modify(|c| *c = (*c).min(current.path_cost))
            .or_insert(current.path_cost);

        let mut pushed_ids = self.trace.as_ref().map(|_| Vec::new());
        let mut pushed = 0usize;
        let mut rejected = 0u64;
        for successor in self.problem.successors(&current.state) {
            let edge = self.problem.step_cost(&current.state, &successor);
            let tentative = current.path_cost.saturating_add(edge);

            let improves = match self.best_cost.get(&successor) {
                Some(&best) => tentative <= best,
                None => true,
            };
            if !improves {
                rejected += 1;
                continue;
            }

            self.best_cost.insert(successor.clone(), tentative);
            let h = self.heuristic.estimate(&successor);
            let child = self
                .arena
                .insert(successor, h, Some(current.node_id), tentative);
            if let Some(node) = self.arena.get(child) {
                self.frontier.push(node);
            }
            pushed += 1;
            if let Some(ids) = pushed_ids.as_mut() {
                ids.push(child);
            }
        }

        self.stats.relaxations += pushed as u64;
        self.stats.rejected += rejected;
        self.stats.nodes_created += pushed as u64;

        tracing::trace!(
            node = %current.node_id,
            path_cost = current.path_cost,
            heuristic = current.heuristic,
            pushed,
            rejected,
            frontier = self.frontier.len(),
            "expanded"
        );

        if let Some(ids) = pushed_ids {
            self.record(
                pop_order,
                &current,
                ExpandOutcome::Expanded {
                    pushed: ids,
                    rejected,
                },
            );
        }
        StepOutcome::Expanded {
            node_id: current.node_id,
            pushed,
        }
    }

    /// Step until the run leaves [`RunStatus::Running`], then build the result.
    #[must_use]
    pub fn run(mut self) -> SearchResult<P::State> {
        while self.status == RunStatus::Running {
            self.step();
        }
        self.into_result()
    }

    /// Build the result from the current state of the run.
    ///
    /// A run still in [`RunStatus::Running`] reports [`Termination::Stopped`]
    /// with an empty path.
    #[must_use]
    pub fn into_result(self) -> SearchResult<P::State> {
        let termination = match self.status {
            RunStatus::Running => Termination::Stopped,
            RunStatus::GoalFound(node_id) => Termination::GoalReached { node_id },
            RunStatus::Exhausted => Termination::FrontierExhausted,
            RunStatus::BudgetExceeded => Termination::ExpansionBudgetExceeded,
        };
        let (path, path_cost) = match termination {
            Termination::GoalReached { node_id } => (
                self.arena.path_to(node_id),
                self.arena.get(node_id).map(|n| n.path_cost),
            ),
            _ => (Vec::new(), None),
        };

        let mut stats = self.stats;
        stats.frontier_high_water = self.frontier.high_water() as u64;

        SearchResult {
            problem_id: self.problem.problem_id().to_string(),
            heuristic_name: self.heuristic.name().to_string(),
            nodes_visited: self.nodes_visited,
            path,
            path_cost,
            termination,
            stats,
            trace: self.trace,
        }
    }

    /// Whether the next pop would be skipped as stale.
    fn next_is_stale(&self) -> bool {
        self.policy.stale_policy == StalePolicy::SkipStale
            && self
                .frontier
                .peek()
                .and_then(|id| self.arena.get(id))
                .is_some_and(|node| self.is_stale(&node.state, node.path_cost))
    }

    fn is_stale(&self, state: &P::State, path_cost: u64) -> bool {
        let superseded = self
            .best_cost
            .get(state)
            .is_some_and(|&best| path_cost > best);
        let already_expanded = self
            .expanded_at
            .get(state)
            .is_some_and(|&cost| cost <= path_cost);
        superseded || already_expanded
    }

    fn record(&mut self, pop_order: u64, node: &SearchNode<P::State>, outcome: ExpandOutcome) {
        if let Some(trace) = self.trace.as_mut() {
            trace.record(ExpandEvent::for_node(pop_order, node, outcome));
        }
    }

    fn finish_with(&mut self, status: RunStatus) {
        self.status = status;
        tracing::debug!(
            problem = self.problem.problem_id(),
            heuristic = self.heuristic.name(),
            status = ?status,
            nodes_visited = self.nodes_visited,
            nodes_created = self.stats.nodes_created,
            stale_skipped = self.stats.stale_skipped,
            "search finished"
        );
    }
}

/// Run A* on `problem` with `heuristic` under `policy`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] only for pre-flight policy
/// validation failures. An unreachable goal is not an error: the result has
/// an empty path and [`Termination::FrontierExhausted`].
pub fn search<P, H>(
    problem: &P,
    heuristic: &H,
    policy: &SearchPolicy,
) -> Result<SearchResult<P::State>, SearchError>
where
    P: SearchProblem,
    H: Heuristic<P::State> + ?Sized,
{
    Ok(SearchRun::new(problem, heuristic, policy)?.run())
}

/// Run A* under the default policy.
#[must_use]
pub fn astar_search<P, H>(problem: &P, heuristic: &H) -> SearchResult<P::State>
where
    P: SearchProblem,
    H: Heuristic<P::State> + ?Sized,
{
    SearchRun::start(problem, heuristic, SearchPolicy::default()).run()
}
