//! Single source of truth for the canonical test problems.
//!
//! Used by both the `search_fixture` binary and the integration tests. Any
//! change here changes both, preventing silent drift between what the
//! cross-proc harness produces and what the in-process tests expect.

use wayfind_harness::worlds::graph::WeightedGraph;
use wayfind_harness::worlds::maze::{Maze, MazeWorld, Position};
use wayfind_harness::worlds::sliding_puzzle::{Board, SlidingPuzzle};
use wayfind_search::SearchPolicy;

/// 11 × 5 maze, 36 floor cells, all connected.
pub const FIXTURE_MAZE: &str = "\
.......#...
.#####.#.#.
.#...#...#.
.#.#.#####.
...#.......
";

/// Shortest path length from `(0, 0)` to `(10, 4)` in [`FIXTURE_MAZE`].
pub const FIXTURE_MAZE_COST: u64 = 18;

/// 8-puzzle start board, 8 moves from solved.
pub const FIXTURE_PUZZLE_TILES: [u8; 9] = [1, 3, 6, 5, 0, 2, 4, 7, 8];

/// Optimal move count for [`FIXTURE_PUZZLE_TILES`].
pub const FIXTURE_PUZZLE_COST: u64 = 8;

/// The four-node diamond: `A→B(1)`, `A→C(4)`, `B→D(4)`, `C→D(1)`.
///
/// Both routes cost 5, so the tie-break alone decides the path.
#[must_use]
pub fn diamond() -> WeightedGraph {
    WeightedGraph::new("diamond", "A")
        .edge("A", "B", 1)
        .edge("A", "C", 4)
        .edge("B", "D", 4)
        .edge("C", "D", 1)
        .goal("D")
}

/// [`diamond`] with unit edges and an extra `B→C` edge, so `C` is
/// rediscovered at equal cost and leaves a duplicate frontier entry.
#[must_use]
pub fn unit_diamond() -> WeightedGraph {
    WeightedGraph::new("unit_diamond", "A")
        .edge("A", "B", 1)
        .edge("A", "C", 2)
        .edge("B", "C", 1)
        .edge("B", "D", 3)
        .edge("C", "D", 1)
        .goal("D")
}

/// Maze world over [`FIXTURE_MAZE`], top-left to bottom-right.
///
/// # Panics
///
/// Panics if the fixture grid or its endpoints are malformed (a fixture
/// bug, not a usage error).
#[must_use]
pub fn fixture_maze() -> MazeWorld {
    let maze = Maze::parse(FIXTURE_MAZE).expect("fixture maze parses");
    MazeWorld::new("fixture_maze", maze, Position::new(0, 0), Position::new(10, 4))
        .expect("fixture endpoints are floor cells")
}

/// 8-puzzle from [`FIXTURE_PUZZLE_TILES`] to the solved board.
///
/// # Panics
///
/// Panics if the fixture board is malformed.
#[must_use]
pub fn fixture_puzzle() -> SlidingPuzzle {
    let start = Board::new(3, FIXTURE_PUZZLE_TILES.to_vec()).expect("fixture board is valid");
    let goal = Board::solved(3).expect("3x3 is a valid size");
    SlidingPuzzle::new("fixture_puzzle", start, goal).expect("boards share a size")
}

/// Default policy with the expansion trace recorded.
#[must_use]
pub fn traced_policy() -> SearchPolicy {
    SearchPolicy {
        record_trace: true,
        ..SearchPolicy::default()
    }
}
