//! Randomized property tests for the A* engine against a Dijkstra
//! reference on small weighted digraphs.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap, HashMap};

use proptest::prelude::*;
use wayfind_search::search::RunStatus;
use wayfind_search::{
    heuristic_fn, search, Heuristic, SearchPolicy, SearchProblem, SearchRun, StalePolicy,
    Termination, TieBreak, ZeroHeuristic,
};

/// Digraph over `0..n` with start 0 and positive edge weights.
#[derive(Debug, Clone)]
struct RandomGraph {
    n: usize,
    edges: Vec<(usize, usize, u64)>,
    goal: usize,
}

impl RandomGraph {
    fn weight(&self, from: usize, to: usize) -> Option<u64> {
        self.edges
            .iter()
            .filter(|&&(f, t, _)| f == from && t == to)
            .map(|&(_, _, w)| w)
            .min()
    }

    /// Single-source shortest distances, forward from `source` or backward
    /// to it.
    fn dijkstra(&self, source: usize, backward: bool) -> HashMap<usize, u64> {
        let mut dist = HashMap::from([(source, 0u64)]);
        let mut heap = BinaryHeap::from([Reverse((0u64, source))]);
        while let Some(Reverse((d, u))) = heap.pop() {
            if dist.get(&u).is_some_and(|&best| d > best) {
                continue;
            }
            for &(f, t, w) in &self.edges {
                let (from, to) = if backward { (t, f) } else { (f, t) };
                if from != u {
                    continue;
                }
                let nd = d + w;
                if !dist.get(&to).is_some_and(|&best| nd >= best) {
                    dist.insert(to, nd);
                    heap.push(Reverse((nd, to)));
                }
            }
        }
        dist
    }
}

impl SearchProblem for RandomGraph {
    type State = usize;

    #[allow(clippy::unnecessary_literal_bound)]
    fn problem_id(&self) -> &str {
        "random_graph"
    }

    fn start_state(&self) -> usize {
        0
    }

    fn is_goal(&self, state: &usize) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &usize) -> Vec<usize> {
        self.edges
            .iter()
            .filter(|&&(f, _, _)| f == *state)
            .map(|&(_, t, _)| t)
            .collect()
    }

    fn step_cost(&self, from: &usize, to: &usize) -> u64 {
        self.weight(*from, *to).unwrap_or(1)
    }
}

fn graph_strategy() -> impl Strategy<Value = RandomGraph> {
    (2usize..9).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n, 1u64..20), 0..30),
            0..n,
        )
            .prop_map(|(n, edges, goal)| RandomGraph { n, edges, goal })
    })
}

fn policies() -> Vec<SearchPolicy> {
    let mut out = Vec::new();
    for stale_policy in [StalePolicy::Reexpand, StalePolicy::SkipStale] {
        for tie_break in [TieBreak::Fifo, TieBreak::Lifo] {
            out.push(SearchPolicy {
                stale_policy,
                tie_break,
                ..SearchPolicy::default()
            });
        }
    }
    out
}

fn assert_valid_path(g: &RandomGraph, path: &[usize], cost: u64) -> Result<(), TestCaseError> {
    prop_assert_eq!(path.first().copied(), Some(0));
    prop_assert!(g.is_goal(path.last().unwrap_or(&usize::MAX)));
    let mut total = 0u64;
    for pair in path.windows(2) {
        let w = g.weight(pair[0], pair[1]);
        prop_assert!(w.is_some(), "{} -> {} is not an edge", pair[0], pair[1]);
        total += w.unwrap_or(0);
    }
    prop_assert_eq!(total, cost);
    Ok(())
}

proptest! {
    #[test]
    fn optimal_cost_matches_dijkstra(g in graph_strategy()) {
        let reference = g.dijkstra(0, false).get(&g.goal).copied();
        let to_goal = g.dijkstra(g.goal, true);
        let exact = heuristic_fn("exact", |s: &usize| to_goal.get(s).copied().unwrap_or(0));
        let halved = heuristic_fn("halved", |s: &usize| to_goal.get(s).map_or(0, |d| d / 2));
        let heuristics: [&dyn Heuristic<usize>; 3] = [&ZeroHeuristic, &exact, &halved];

        for policy in policies() {
            for h in heuristics {
                let result = search(&g, h, &policy).unwrap();
                prop_assert_eq!(result.path_cost, reference);
                match reference {
                    Some(cost) => {
                        prop_assert!(result.is_solved());
                        assert_valid_path(&g, &result.path, cost)?;
                    }
                    None => {
                        prop_assert!(result.path.is_empty());
                        prop_assert_eq!(result.termination, Termination::FrontierExhausted);
                    }
                }
            }
        }
    }

    #[test]
    fn best_costs_never_increase(g in graph_strategy()) {
        for policy in policies() {
            let mut run = SearchRun::new(&g, &ZeroHeuristic, &policy).unwrap();
            let mut previous: HashMap<usize, u64> = HashMap::new();
            while run.status() == RunStatus::Running {
                run.step();
                for state in 0..g.n {
                    let now = run.best_cost(&state);
                    if let Some(&before) = previous.get(&state) {
                        prop_assert!(now.is_some_and(|c| c <= before));
                    }
                    if let Some(c) = now {
                        previous.insert(state, c);
                    }
                }
            }
        }
    }

    #[test]
    fn unreachable_goal_visits_each_reachable_state_once(g in graph_strategy()) {
        let unreachable = RandomGraph { goal: g.n, ..g };
        let reachable: BTreeSet<usize> = unreachable.dijkstra(0, false).into_keys().collect();

        let result = search(&unreachable, &ZeroHeuristic, &SearchPolicy::default()).unwrap();
        prop_assert!(result.path.is_empty());
        prop_assert_eq!(result.termination, Termination::FrontierExhausted);
        prop_assert_eq!(result.nodes_visited, reachable.len() as u64);

        let again = search(&unreachable, &ZeroHeuristic, &SearchPolicy::default()).unwrap();
        prop_assert_eq!(again.nodes_visited, result.nodes_visited);
        prop_assert_eq!(again.stats, result.stats);
    }

    #[test]
    fn start_goal_is_trivial(g in graph_strategy()) {
        let trivial = RandomGraph { goal: 0, ..g };
        for policy in policies() {
            let result = search(&trivial, &ZeroHeuristic, &policy).unwrap();
            prop_assert_eq!(&result.path, &vec![0]);
            prop_assert_eq!(result.path_cost, Some(0));
            prop_assert_eq!(result.nodes_visited, 1);
        }
    }

    #[test]
    fn traced_runs_are_reproducible(g in graph_strategy()) {
        let policy = SearchPolicy { record_trace: true, ..SearchPolicy::default() };
        let a = search(&g, &ZeroHeuristic, &policy).unwrap();
        let b = search(&g, &ZeroHeuristic, &policy).unwrap();
        prop_assert_eq!(a.trace, b.trace);
        prop_assert_eq!(a.path, b.path);
    }
}
