//! Cross-process determinism for search and game runs.
//!
//! Spawns each fixture binary under four environment variants and asserts
//! all produce identical output.

use std::path::Path;
use std::process::Command;

use lock_tests::fixtures::parse_kv_lines;

fn binary_path(name: &str) -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push(name);
    path.to_string_lossy().to_string()
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(name: &str, work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path(name);

    let mut command = Command::new(&bin);
    command.current_dir(work_dir);
    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });

    assert!(
        output.status.success(),
        "{name} exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

fn assert_stable_across_variants(name: &str) -> String {
    let root = workspace_root();
    let baseline = run_variant(name, &root, &[]);

    let alt_cwd = if cfg!(target_os = "windows") {
        "C:\\"
    } else {
        "/tmp"
    };
    assert_eq!(
        baseline,
        run_variant(name, alt_cwd, &[]),
        "{name} output differs when cwd changes from {root} to {alt_cwd}"
    );

    assert_eq!(
        baseline,
        run_variant(name, &root, &[("LC_ALL", "C"), ("LANG", "C")]),
        "{name} output differs when LC_ALL=C LANG=C"
    );

    assert_eq!(
        baseline,
        run_variant(
            name,
            &root,
            &[
                ("WAYPOINT_NOISE", "should_not_matter"),
                ("TZ", "America/New_York"),
                ("HOME", "/nonexistent"),
                ("RUST_LOG", "trace"),
            ],
        ),
        "{name} output differs with spurious env vars"
    );

    baseline
}

#[test]
fn search_fixture_is_deterministic_across_processes() {
    let baseline = assert_stable_across_variants("search_fixture");
    let kv = parse_kv_lines(&baseline);

    assert_eq!(kv["maze.tiny.bfs.plan_len"], "8");
    assert_eq!(kv["maze.loops.ucs.path_cost"], "27");
    assert_eq!(kv["maze.sealed.dfs.termination"], "frontier_exhausted");
    assert_eq!(kv["graph.two_node.dfs.path_cost"], "5");
    assert_eq!(kv["graph.detour.ucs.path_cost"], "3");
    assert!(kv["graph.cycle.ucs.report_hash"].starts_with("sha256:"));
}

#[test]
fn game_fixture_is_deterministic_across_processes() {
    let baseline = assert_stable_across_variants("game_fixture");
    let kv = parse_kv_lines(&baseline);

    for depth in 1..=3 {
        for tree in ["s1a2", "s2a3"] {
            let plain = format!("tree.{tree}d{depth}.minimax");
            let pruned = format!("tree.{tree}d{depth}.alphabeta");
            assert_eq!(kv[&format!("{plain}.action")], kv[&format!("{pruned}.action")]);
            assert_eq!(kv[&format!("{plain}.value")], kv[&format!("{pruned}.value")]);
        }
    }
    assert_eq!(kv["takeaway.d2.alphabeta.action"], "take3");
}
