//! Shared workloads for wayfind benchmark suites.
//!
//! Each [`Workload`] is a fixed, deterministic search problem plus the
//! heuristic it is benchmarked with. The same set drives the criterion
//! suites and the auditable report, so their numbers are comparable.

use std::fmt::Write as _;

use wayfind_harness::runner::{run_search, SearchReport};
use wayfind_harness::worlds::graph::WeightedGraph;
use wayfind_harness::worlds::maze::{Maze, MazeWorld, Position};
use wayfind_harness::worlds::sliding_puzzle::{Board, SlidingPuzzle};
use wayfind_kernel::proof::hash::{canonical_hash, ContentHash};
use wayfind_kernel::proof::hash_domain::HashDomain;
use wayfind_search::{search, SearchPolicy, SearchResult, ZeroHeuristic};

/// 8-puzzle instance at the maximum optimal distance (31 moves).
pub const HARD_PUZZLE_TILES: [u8; 9] = [8, 6, 7, 2, 5, 4, 3, 0, 1];

/// Counters that identify what a workload did, independent of timing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSummary {
    pub nodes_visited: u64,
    pub nodes_created: u64,
    pub stale_skipped: u64,
    pub frontier_high_water: u64,
    pub path_cost: Option<u64>,
    pub termination: &'static str,
}

impl SearchSummary {
    fn of<S>(result: &SearchResult<S>) -> Self {
        Self {
            nodes_visited: result.nodes_visited,
            nodes_created: result.stats.nodes_created,
            stale_skipped: result.stats.stale_skipped,
            frontier_high_water: result.stats.frontier_high_water,
            path_cost: result.path_cost,
            termination: result.termination.as_str(),
        }
    }
}

/// A benchmarked problem with its heuristic.
#[derive(Debug, Clone)]
pub enum Workload {
    /// Serpentine maze, Manhattan heuristic.
    Maze(MazeWorld),
    /// 8-puzzle, Manhattan heuristic.
    Puzzle(SlidingPuzzle),
    /// Unit grid DAG with many equal-cost routes, zero heuristic.
    Lattice(WeightedGraph),
    /// Serpentine maze whose goal is walled off, Manhattan heuristic.
    DeadEnd(MazeWorld),
}

impl Workload {
    /// Run the search engine only.
    ///
    /// # Panics
    ///
    /// Panics if `policy` fails validation. Benchmark policies are fixed.
    #[must_use]
    pub fn run(&self, policy: &SearchPolicy) -> SearchSummary {
        let summary = match self {
            Self::Maze(world) | Self::DeadEnd(world) => {
                search(world, &world.manhattan(), policy).map(|r| SearchSummary::of(&r))
            }
            Self::Puzzle(puzzle) => {
                search(puzzle, &puzzle.manhattan(), policy).map(|r| SearchSummary::of(&r))
            }
            Self::Lattice(graph) => {
                search(graph, &ZeroHeuristic, policy).map(|r| SearchSummary::of(&r))
            }
        };
        summary.expect("benchmark policy is valid")
    }

    /// Run the search and build its canonical report.
    ///
    /// # Panics
    ///
    /// Panics if the harness runner fails.
    #[must_use]
    pub fn report(&self, policy: &SearchPolicy) -> SearchReport {
        let report = match self {
            Self::Maze(world) | Self::DeadEnd(world) => {
                run_search(world, &world.manhattan(), policy).map(|(_, r)| r)
            }
            Self::Puzzle(puzzle) => run_search(puzzle, &puzzle.manhattan(), policy).map(|(_, r)| r),
            Self::Lattice(graph) => run_search(graph, &ZeroHeuristic, policy).map(|(_, r)| r),
        };
        report.expect("benchmark run succeeds")
    }
}

/// Serpentine maze: every odd column is a wall with one gap, alternating
/// between the top and bottom rows. With `sealed`, the last wall has no gap,
/// so the rightmost column is unreachable from the left.
///
/// Corridors are one cell wide, so every cell has a single shortest route.
///
/// # Panics
///
/// Panics if `width` is even or either side is below 3.
#[must_use]
pub fn serpentine_maze(width: usize, height: usize, sealed: bool) -> Maze {
    assert!(width % 2 == 1 && width >= 3 && height >= 3, "bad maze shape");
    let mut text = String::new();
    for y in 0..height {
        for x in 0..width {
            let gap_row = if (x / 2) % 2 == 0 { 0 } else { height - 1 };
            let closed = sealed && x == width - 2;
            let wall = x % 2 == 1 && (y != gap_row || closed);
            text.push(if wall { '#' } else { '.' });
        }
        text.push('\n');
    }
    Maze::parse(&text).expect("generated maze is rectangular")
}

/// `n × n` grid DAG; edges go right and down with unit weight.
#[must_use]
pub fn lattice_graph(n: usize) -> WeightedGraph {
    let label = |r: usize, c: usize| format!("r{r}c{c}");
    let mut graph = WeightedGraph::new(format!("lattice_{n}"), label(0, 0)).goal(label(n - 1, n - 1));
    for r in 0..n {
        for c in 0..n {
            if c + 1 < n {
                graph = graph.edge(label(r, c), label(r, c + 1), 1);
            }
            if r + 1 < n {
                graph = graph.edge(label(r, c), label(r + 1, c), 1);
            }
        }
    }
    graph
}

/// The fixed benchmark set, by name.
///
/// # Panics
///
/// Panics if a built-in fixture is malformed.
#[must_use]
pub fn workloads() -> Vec<(&'static str, Workload)> {
    let goal = Position::new(40, 20);
    let corridor = MazeWorld::new(
        "serpentine",
        serpentine_maze(41, 21, false),
        Position::new(0, 0),
        goal,
    )
    .expect("serpentine endpoints are floor");
    let dead_end = MazeWorld::new(
        "sealed_serpentine",
        serpentine_maze(41, 21, true),
        Position::new(0, 0),
        goal,
    )
    .expect("sealed endpoints are floor");

    let hard = Board::new(3, HARD_PUZZLE_TILES.to_vec()).expect("valid board");
    let puzzle = SlidingPuzzle::new("hard_8", hard, Board::solved(3).expect("valid size"))
        .expect("same size");

    vec![
        ("maze_serpentine", Workload::Maze(corridor)),
        ("puzzle_hard", Workload::Puzzle(puzzle)),
        ("lattice_duplicates", Workload::Lattice(lattice_graph(8))),
        ("exhaustive_dead_end", Workload::DeadEnd(dead_end)),
    ]
}

/// Digest binding every workload's summary under `policy`.
///
/// Stable across runs; a change means a benchmark now measures different
/// work and its timings are not comparable with older reports.
#[must_use]
pub fn guard_digest(policy: &SearchPolicy) -> ContentHash {
    let mut text = String::new();
    for (name, workload) in workloads() {
        let s = workload.run(policy);
        let _ = writeln!(
            text,
            "{name} visited={} created={} cost={:?} termination={}",
            s.nodes_visited, s.nodes_created, s.path_cost, s.termination
        );
    }
    canonical_hash(HashDomain::BenchGuard, text.as_bytes())
}
