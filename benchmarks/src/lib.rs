//! Shared regimes for waypoint benchmark suites.
//!
//! A regime is a named, fully deterministic input. Each one can describe
//! itself as canonical JSON, and [`input_digest`] binds a benchmark result
//! to exactly the input it measured.

use waypoint_harness::worlds::grid_maze::{CostModel, GridMaze};
use waypoint_harness::worlds::tree_game::TreeGame;
use waypoint_harness::worlds::weighted_graph::WeightedGraph;
use waypoint_kernel::proof::canon::canonical_json_bytes;
use waypoint_kernel::proof::hash::{canonical_hash, ContentHash};
use waypoint_kernel::proof::hash_domain::HashDomain;

/// World a search regime runs on.
pub enum SearchWorld {
    Maze(GridMaze),
    Graph(WeightedGraph),
}

/// A named search input.
pub struct SearchRegime {
    pub name: &'static str,
    pub world: SearchWorld,
    /// Canonical description of how `world` was built.
    pub description: serde_json::Value,
}

/// A named game input searched at a fixed depth.
pub struct GameRegime {
    pub name: &'static str,
    pub game: TreeGame,
    pub depth: u32,
    pub description: serde_json::Value,
}

fn open_room(name: &'static str, side: usize, cost_model: CostModel) -> SearchRegime {
    let maze = GridMaze::parse(&GridMaze::open_room(side))
        .expect("open room layout is well formed")
        .with_cost_model(cost_model);
    SearchRegime {
        name,
        world: SearchWorld::Maze(maze),
        description: serde_json::json!({
            "cost_model": format!("{cost_model:?}"),
            "kind": "open_room",
            "side": side as u64,
        }),
    }
}

fn lattice(name: &'static str, side: usize) -> SearchRegime {
    SearchRegime {
        name,
        world: SearchWorld::Graph(WeightedGraph::lattice(side)),
        description: serde_json::json!({ "kind": "lattice", "side": side as u64 }),
    }
}

/// Search regimes, smallest first.
///
/// # Panics
///
/// Panics if a built-in layout fails to parse. Benchmark setup failures are
/// fatal.
#[must_use]
pub fn search_regimes() -> Vec<SearchRegime> {
    vec![
        open_room("room_10_unit", 10, CostModel::Unit),
        open_room("room_30_unit", 30, CostModel::Unit),
        open_room("room_30_prefer_west", 30, CostModel::PreferWest),
        lattice("lattice_20", 20),
    ]
}

fn tree(name: &'static str, branching: usize, depth: u32, seed: u64, agents: usize) -> GameRegime {
    let height = depth * u32::try_from(agents).unwrap_or(u32::MAX);
    GameRegime {
        name,
        game: TreeGame::generated(branching, height, seed, agents),
        depth,
        description: serde_json::json!({
            "agents": agents as u64,
            "branching": branching as u64,
            "depth": depth,
            "kind": "generated_tree",
            "seed": seed,
        }),
    }
}

/// Game regimes, smallest first.
#[must_use]
pub fn game_regimes() -> Vec<GameRegime> {
    vec![
        tree("tree_b4_d2_a2", 4, 2, 7, 2),
        tree("tree_b3_d2_a3", 3, 2, 7, 3),
        tree("tree_b5_d3_a2", 5, 3, 7, 2),
    ]
}

/// Digest binding a benchmark result to its input description.
///
/// # Panics
///
/// Panics if `description` cannot be canonicalized (it contains a float).
#[must_use]
pub fn input_digest(description: &serde_json::Value) -> ContentHash {
    let bytes = canonical_json_bytes(description).expect("regime description is canonical");
    canonical_hash(HashDomain::BenchInput, &bytes)
}
