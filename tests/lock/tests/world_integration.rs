//! End-to-end searches over the harness worlds.

use std::io::Write;

use lock_tests::fixtures::{
    fixture_maze, fixture_puzzle, FIXTURE_MAZE, FIXTURE_MAZE_COST, FIXTURE_PUZZLE_COST,
};
use wayfind_harness::heuristics::TableHeuristic;
use wayfind_harness::worlds::maze::{Maze, MazeError, MazeWorld, Position};
use wayfind_harness::worlds::sliding_puzzle::{Board, SlidingPuzzle};
use wayfind_search::{astar_search, search, SearchPolicy, SearchProblem, ZeroHeuristic};

// ---------------------------------------------------------------------------
// Maze
// ---------------------------------------------------------------------------

#[test]
fn maze_manhattan_matches_uniform_cost() {
    let world = fixture_maze();
    let informed = astar_search(&world, &world.manhattan());
    let blind = astar_search(&world, &ZeroHeuristic);

    assert_eq!(informed.path_cost, Some(FIXTURE_MAZE_COST));
    assert_eq!(blind.path_cost, Some(FIXTURE_MAZE_COST));
    assert!(informed.nodes_visited <= blind.nodes_visited);
    assert_eq!(informed.description(), "A* on fixture_maze with heuristic manhattan");
}

#[test]
fn maze_path_is_a_walk_over_floor_cells() {
    let world = fixture_maze();
    let result = astar_search(&world, &world.manhattan());
    assert_eq!(result.path.first(), Some(&Position::new(0, 0)));
    assert_eq!(result.path.last(), Some(&world.goal()));
    for pair in result.path.windows(2) {
        assert!(world.successors(&pair[0]).contains(&pair[1]));
        assert!(world.maze().is_floor(pair[1].x, pair[1].y));
    }
    assert_eq!(result.solution_length() as u64, FIXTURE_MAZE_COST);
}

#[test]
fn walled_off_goal_exhausts_the_reachable_region() {
    let maze = Maze::parse(
        "\
        ..#..\n\
        ..#..\n",
    )
    .unwrap();
    let world = MazeWorld::new("split", maze, Position::new(0, 0), Position::new(4, 1)).unwrap();
    let result = astar_search(&world, &world.manhattan());
    assert!(result.path.is_empty());
    assert_eq!(result.nodes_visited, 4);
}

#[test]
fn maze_file_round_trip_searches_the_same() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FIXTURE_MAZE.as_bytes()).unwrap();
    let maze = Maze::from_file(file.path()).unwrap();
    assert_eq!(maze.content_hash(), fixture_maze().maze().content_hash());

    let world = MazeWorld::new("from_file", maze, Position::new(0, 0), Position::new(10, 4)).unwrap();
    let result = astar_search(&world, &world.manhattan());
    assert_eq!(result.path_cost, Some(FIXTURE_MAZE_COST));
}

#[test]
fn malformed_maze_files_are_typed_errors() {
    let mut ragged = tempfile::NamedTempFile::new().unwrap();
    ragged.write_all(b"...\n..\n").unwrap();
    assert!(matches!(
        Maze::from_file(ragged.path()),
        Err(MazeError::Ragged { .. })
    ));

    let empty = tempfile::NamedTempFile::new().unwrap();
    assert!(matches!(Maze::from_file(empty.path()), Err(MazeError::Empty)));
}

// ---------------------------------------------------------------------------
// Sliding puzzle
// ---------------------------------------------------------------------------

#[test]
fn puzzle_heuristics_agree_on_optimal_cost() {
    let puzzle = fixture_puzzle();
    assert!(puzzle.is_solvable());

    let blind = astar_search(&puzzle, &ZeroHeuristic);
    let misplaced = astar_search(&puzzle, &puzzle.misplaced_tiles());
    let manhattan = astar_search(&puzzle, &puzzle.manhattan());

    for result in [&blind, &misplaced, &manhattan] {
        assert_eq!(result.path_cost, Some(FIXTURE_PUZZLE_COST));
        assert_eq!(result.path.last(), Some(puzzle.goal()));
    }
    assert!(manhattan.nodes_visited <= misplaced.nodes_visited);
    assert!(misplaced.nodes_visited <= blind.nodes_visited);
}

#[test]
fn puzzle_path_moves_one_tile_at_a_time() {
    let puzzle = fixture_puzzle();
    let result = astar_search(&puzzle, &puzzle.manhattan());
    for pair in result.path.windows(2) {
        assert!(pair[0].moves().contains(&pair[1]));
    }
}

#[test]
fn unsolvable_puzzle_is_detected_and_exhausts() {
    let start = Board::new(2, vec![2, 1, 3, 0]).unwrap();
    let puzzle = SlidingPuzzle::new("swapped", start, Board::solved(2).unwrap()).unwrap();
    assert!(!puzzle.is_solvable());

    let result = search(&puzzle, &puzzle.manhattan(), &SearchPolicy::default()).unwrap();
    assert!(!result.is_solved());
    assert_eq!(result.nodes_visited, 12);
}

// ---------------------------------------------------------------------------
// Table heuristic
// ---------------------------------------------------------------------------

#[test]
fn table_heuristic_over_maze_cells() {
    let world = fixture_maze();
    let table: TableHeuristic<Position> = [(Position::new(0, 0), FIXTURE_MAZE_COST)]
        .into_iter()
        .collect();
    let result = astar_search(&world, &table);
    assert_eq!(result.path_cost, Some(FIXTURE_MAZE_COST));
    assert_eq!(result.heuristic_name, "table");
}
