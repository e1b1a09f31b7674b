//! Binary that runs the canonical fixture problems through the harness
//! runner and prints deterministic output lines for cross-process
//! verification.
//!
//! Usage: `search_fixture`
//!
//! Output: `<problem>.<key>=<value>` lines (see source for format).

use lock_tests::fixtures::{diamond, fixture_maze, fixture_puzzle, traced_policy};
use wayfind_harness::runner::{run_search, SearchReport};
use wayfind_search::ZeroHeuristic;

fn print_report(name: &str, report: &SearchReport) {
    let v = &report.value;
    println!("{name}.report_digest={}", report.digest.as_str());
    println!(
        "{name}.trace_digest={}",
        v["trace_digest"].as_str().expect("trace recorded")
    );
    println!(
        "{name}.path_digest={}",
        v["path_digest"].as_str().expect("missing path_digest")
    );
    println!(
        "{name}.termination={}",
        v["termination"]["type"].as_str().expect("missing termination")
    );
    println!("{name}.nodes_visited={}", v["nodes_visited"]);
    println!("{name}.path_cost={}", v["path_cost"]);
}

fn main() {
    let policy = traced_policy();

    let (_, report) = run_search(&diamond(), &ZeroHeuristic, &policy).expect("diamond run failed");
    print_report("diamond", &report);

    let maze = fixture_maze();
    let (_, report) = run_search(&maze, &maze.manhattan(), &policy).expect("maze run failed");
    print_report("maze", &report);
    println!("maze.fixture_digest={}", maze.maze().content_hash().as_str());

    let puzzle = fixture_puzzle();
    let (_, report) =
        run_search(&puzzle, &puzzle.manhattan(), &policy).expect("puzzle run failed");
    print_report("puzzle", &report);
}
