//! Search engine lock tests: scenario results, optimality relationships
//! between the three disciplines, dedup-policy equivalence, determinism,
//! and plan/cost agreement on every fixture.

use lock_tests::fixtures::{graphs, mazes, LOOPS_MAZE, SEALED_MAZE, TINY_MAZE};
use waypoint_harness::artifacts::verify_artifact_set;
use waypoint_harness::runner::run_search;
use waypoint_harness::worlds::grid_maze::{CostModel, Direction, GridMaze};
use waypoint_harness::worlds::weighted_graph::WeightedGraph;
use waypoint_search::policy::{DedupPolicy, SearchPolicy};
use waypoint_search::{
    breadth_first_search, depth_first_search, search, uniform_cost_search, Algorithm,
    SearchProblem, TerminationReason,
};

fn maze(layout: &str) -> GridMaze {
    GridMaze::parse(layout).unwrap()
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn two_node_graph_every_algorithm_returns_move_to_b() {
    let graph = WeightedGraph::two_node();
    for algorithm in Algorithm::ALL {
        let result = search(&graph, algorithm, &SearchPolicy::default()).unwrap();
        assert_eq!(result.plan(), Some(vec!["moveToB".to_string()]), "{algorithm}");
        assert_eq!(result.path_cost(), Some(5), "{algorithm}");
    }
}

#[test]
fn start_on_goal_gives_empty_plan() {
    let graph = WeightedGraph::new("A").with_goal("A").with_edge("A", "loop", "A", 1);
    assert_eq!(depth_first_search(&graph), Some(Vec::new()));
    assert_eq!(breadth_first_search(&graph), Some(Vec::new()));
    assert_eq!(uniform_cost_search(&graph), Some(Vec::new()));
}

#[test]
fn sealed_goal_is_no_solution_for_all() {
    let sealed = maze(SEALED_MAZE);
    assert_eq!(depth_first_search(&sealed), None);
    assert_eq!(breadth_first_search(&sealed), None);
    assert_eq!(uniform_cost_search(&sealed), None);

    let result = search(&sealed, Algorithm::BreadthFirst, &SearchPolicy::default()).unwrap();
    assert_eq!(result.termination, TerminationReason::FrontierExhausted);
    // Three open cells, each expanded once.
    assert_eq!(result.stats.expansions, 3);
}

// ---------------------------------------------------------------------------
// Optimality
// ---------------------------------------------------------------------------

#[test]
fn bfs_finds_fewest_steps_and_dfs_never_beats_it() {
    for (name, layout) in mazes() {
        let m = maze(layout);
        let (Some(bfs), Some(dfs)) = (breadth_first_search(&m), depth_first_search(&m)) else {
            continue;
        };
        assert!(dfs.len() >= bfs.len(), "{name}: dfs {} < bfs {}", dfs.len(), bfs.len());
    }
    assert_eq!(breadth_first_search(&maze(TINY_MAZE)).map(|p| p.len()), Some(8));
    assert_eq!(breadth_first_search(&maze(LOOPS_MAZE)).map(|p| p.len()), Some(27));
}

#[test]
fn unit_costs_make_ucs_match_bfs_cost() {
    for (name, layout) in mazes() {
        let m = maze(layout);
        let bfs = breadth_first_search(&m).and_then(|p| m.cost_of_actions(&p));
        let ucs = uniform_cost_search(&m).and_then(|p| m.cost_of_actions(&p));
        assert_eq!(bfs, ucs, "{name}");
    }
}

#[test]
fn ucs_is_never_costlier_than_bfs_or_dfs() {
    let weighted = [CostModel::Unit, CostModel::PreferEast, CostModel::PreferWest];
    for (name, layout) in mazes() {
        for model in weighted {
            let m = maze(layout).with_cost_model(model);
            let Some(ucs) = uniform_cost_search(&m).and_then(|p| m.cost_of_actions(&p)) else {
                continue;
            };
            for other in [breadth_first_search(&m), depth_first_search(&m)] {
                let cost = other.and_then(|p| m.cost_of_actions(&p)).unwrap();
                assert!(ucs <= cost, "{name} {model:?}: ucs {ucs} > {cost}");
            }
        }
    }

    for (name, graph) in graphs() {
        let ucs = uniform_cost_search(&graph).and_then(|p| graph.cost_of_actions(&p));
        let bfs = breadth_first_search(&graph).and_then(|p| graph.cost_of_actions(&p));
        let dfs = depth_first_search(&graph).and_then(|p| graph.cost_of_actions(&p));
        assert!(ucs <= bfs && ucs <= dfs, "{name}: {ucs:?} {bfs:?} {dfs:?}");
    }
}

#[test]
fn negative_step_cost_still_yields_a_verified_ucs_plan() {
    let graph = WeightedGraph::new("A")
        .with_goal("C")
        .with_edge("A", "toB", "B", -1)
        .with_edge("B", "toC", "C", 1);
    assert_eq!(uniform_cost_search(&graph), breadth_first_search(&graph));

    let run = run_search(&graph, Algorithm::UniformCost, &SearchPolicy::default()).unwrap();
    assert_eq!(run.plan(), Some(vec!["toB".to_string(), "toC".to_string()]));
    assert_eq!(run.verification.recomputed_cost, Some(0));
    assert_eq!(run.result.stats.negative_step_costs, 1);
}

#[test]
fn cycle_graph_ucs_takes_the_cheaper_long_way() {
    let (_, cycle) = graphs().into_iter().find(|(n, _)| *n == "cycle").unwrap();
    let plan = uniform_cost_search(&cycle).unwrap();
    assert_eq!(plan, vec!["ab", "bc", "cd"]);
    assert_eq!(cycle.cost_of_actions(&plan), Some(11));
    assert_eq!(breadth_first_search(&cycle).unwrap(), vec!["ad"]);
}

#[test]
fn cost_model_picks_between_the_two_tiny_routes() {
    // Eight steps down the east side or ten along the west side.
    let east = maze(TINY_MAZE).with_cost_model(CostModel::PreferEast);
    let plan = uniform_cost_search(&east).unwrap();
    assert_eq!(plan.first(), Some(&Direction::South));
    assert_eq!(east.cost_of_actions(&plan), Some(84));

    let west = maze(TINY_MAZE).with_cost_model(CostModel::PreferWest);
    let plan = uniform_cost_search(&west).unwrap();
    assert_eq!(plan.first(), Some(&Direction::West));
    assert_eq!(plan.len(), 10);
    assert_eq!(west.cost_of_actions(&plan), Some(48));

    // BFS ignores costs and keeps the short route.
    let bfs = breadth_first_search(&west).unwrap();
    assert_eq!(bfs.first(), Some(&Direction::South));
    assert_eq!(west.cost_of_actions(&bfs), Some(114));
}

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

#[test]
fn skip_on_push_gives_same_plans() {
    let skip = SearchPolicy {
        dedup: DedupPolicy::SkipExpandedOnPush,
        ..SearchPolicy::default()
    };
    for (name, layout) in mazes() {
        let m = maze(layout);
        for algorithm in Algorithm::ALL {
            let a = search(&m, algorithm, &SearchPolicy::default()).unwrap();
            let b = search(&m, algorithm, &skip).unwrap();
            assert_eq!(a.plan(), b.plan(), "{name} {algorithm}");
            assert_eq!(a.path_cost(), b.path_cost(), "{name} {algorithm}");
            assert!(b.stats.nodes_created <= a.stats.nodes_created);
        }
    }
}

#[test]
fn expansion_budget_stops_search() {
    let m = maze(LOOPS_MAZE);
    let policy = SearchPolicy::with_max_expansions(5);
    let result = search(&m, Algorithm::BreadthFirst, &policy).unwrap();
    assert_eq!(result.termination, TerminationReason::ExpansionBudgetExceeded);
    assert_eq!(result.stats.expansions, 5);
    assert_eq!(result.plan(), None);
}

// ---------------------------------------------------------------------------
// Determinism and verification
// ---------------------------------------------------------------------------

#[test_log::test]
fn repeated_searches_are_identical() {
    let m = maze(LOOPS_MAZE);
    for algorithm in Algorithm::ALL {
        let first = search(&m, algorithm, &SearchPolicy::default()).unwrap();
        let first_bytes = first.to_canonical_json_bytes().unwrap();
        for _ in 1..10 {
            let again = search(&m, algorithm, &SearchPolicy::default()).unwrap();
            assert_eq!(again.to_canonical_json_bytes().unwrap(), first_bytes);
        }
    }
}

#[test]
fn every_fixture_plan_replays_to_its_tracked_cost() {
    for (_, layout) in mazes() {
        let m = maze(layout);
        for algorithm in Algorithm::ALL {
            let run = run_search(&m, algorithm, &SearchPolicy::default()).unwrap();
            assert_eq!(run.verification.recomputed_cost, run.result.path_cost());
            verify_artifact_set(&run.artifacts).unwrap();
        }
    }
    for (_, graph) in graphs() {
        for algorithm in Algorithm::ALL {
            let run = run_search(&graph, algorithm, &SearchPolicy::default()).unwrap();
            assert_eq!(run.verification.recomputed_cost, run.result.path_cost());
            verify_artifact_set(&run.artifacts).unwrap();
        }
    }
}
