//! Binary that runs every maze and graph fixture under every algorithm and
//! prints deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: `key=value` lines, keyed `<world>.<fixture>.<algorithm>.<field>`.

use lock_tests::fixtures::{graphs, mazes};
use waypoint_harness::runner::{run_search, SearchRun, SEARCH_REPORT};
use waypoint_harness::worlds::grid_maze::GridMaze;
use waypoint_search::policy::SearchPolicy;
use waypoint_search::Algorithm;

fn print_run<S, A: Clone>(prefix: &str, run: &SearchRun<S, A>) {
    if let Some(hash) = run.artifacts.hash(SEARCH_REPORT) {
        println!("{prefix}.report_hash={hash}");
    }
    println!("{prefix}.termination={}", run.result.termination.as_str());
    println!("{prefix}.expansions={}", run.result.stats.expansions);
    match (run.plan(), run.result.path_cost()) {
        (Some(plan), Some(cost)) => {
            println!("{prefix}.plan_len={}", plan.len());
            println!("{prefix}.path_cost={cost}");
        }
        _ => println!("{prefix}.plan_len=none"),
    }
}

fn main() {
    let policy = SearchPolicy::default();

    for (name, layout) in mazes() {
        let maze = GridMaze::parse(layout).expect("fixture maze parses");
        for algorithm in Algorithm::ALL {
            let run = run_search(&maze, algorithm, &policy).expect("maze run failed");
            print_run(&format!("maze.{name}.{algorithm}"), &run);
        }
    }

    for (name, graph) in graphs() {
        for algorithm in Algorithm::ALL {
            let run = run_search(&graph, algorithm, &policy).expect("graph run failed");
            print_run(&format!("graph.{name}.{algorithm}"), &run);
        }
    }
}
