//! Game search lock tests: pruning never changes the decision, pruning
//! never costs evaluations, and repeated decisions are byte-identical.

use waypoint_adversarial::minimax::{alpha_beta_value, minimax_value, SearchStats};
use waypoint_adversarial::{choose_action, GamePolicy, GameState};
use waypoint_harness::runner::{run_game_move, DECISION_REPORT};
use waypoint_harness::worlds::take_away::{Take, TakeAway, LOSE_SCORE};
use waypoint_harness::worlds::tree_game::{GameTree, TreeGame};

const SEEDS: [u64; 6] = [1, 2, 3, 17, 99, 2024];

#[test]
fn best_reply_three_or_seven_picks_seven() {
    use GameTree::Leaf;
    let game = TreeGame::new(
        &GameTree::node(vec![
            GameTree::node(vec![Leaf(3), Leaf(9)]),
            GameTree::node(vec![Leaf(7), Leaf(8)]),
        ]),
        2,
    );
    for policy in [GamePolicy::minimax(1), GamePolicy::alpha_beta(1)] {
        let decision = choose_action(&game, &policy, &TreeGame::score).unwrap();
        assert_eq!(decision.action, Some(1));
        assert_eq!(decision.value, Some(7));
    }
}

#[test]
fn alpha_beta_matches_minimax_on_generated_trees() {
    for seed in SEEDS {
        for agents in 2..=4usize {
            for depth in 1..=3u32 {
                let height = depth * u32::try_from(agents).unwrap();
                let game = TreeGame::generated(2, height, seed, agents);
                let plain = choose_action(&game, &GamePolicy::minimax(depth), &TreeGame::score)
                    .unwrap();
                let pruned =
                    choose_action(&game, &GamePolicy::alpha_beta(depth), &TreeGame::score)
                        .unwrap();
                let label = format!("seed {seed}, {agents} agents, depth {depth}");
                assert_eq!(plain.action, pruned.action, "{label}");
                assert_eq!(plain.value, pruned.value, "{label}");
                assert!(
                    pruned.stats.evaluations <= plain.stats.evaluations,
                    "{label}: {} > {}",
                    pruned.stats.evaluations,
                    plain.stats.evaluations
                );
            }
        }
    }
}

#[test]
fn full_window_value_equals_minimax_from_any_agent() {
    let game = TreeGame::generated(3, 4, 5, 2);
    for agent in 0..2 {
        let mut a = SearchStats::default();
        let mut b = SearchStats::default();
        let plain = minimax_value(&game, agent, 2, &TreeGame::score, &mut a);
        let pruned =
            alpha_beta_value(&game, agent, 2, i64::MIN, i64::MAX, &TreeGame::score, &mut b);
        assert_eq!(plain, pruned, "agent {agent}");
    }
}

#[test]
fn pruning_saves_work_on_textbook_tree() {
    let game = TreeGame::textbook();
    let plain = choose_action(&game, &GamePolicy::minimax(1), &TreeGame::score).unwrap();
    let pruned = choose_action(&game, &GamePolicy::alpha_beta(1), &TreeGame::score).unwrap();
    assert_eq!(plain.stats.evaluations, 9);
    assert!(pruned.stats.evaluations < plain.stats.evaluations);
    assert!(pruned.stats.cutoffs > 0);
    assert_eq!(plain.stats.cutoffs, 0);
}

#[test]
fn deeper_search_sees_the_forced_loss() {
    // From a pile of 8 (max take 3) every move loses against perfect play.
    let pile = TakeAway::new(8, 3, 2);
    let shallow = choose_action(&pile, &GamePolicy::alpha_beta(1), &TakeAway::evaluate).unwrap();
    assert!(shallow.value.unwrap() > LOSE_SCORE);
    let deep = choose_action(&pile, &GamePolicy::alpha_beta(4), &TakeAway::evaluate).unwrap();
    assert_eq!(deep.value, Some(LOSE_SCORE));
}

#[test]
fn finished_game_has_no_move() {
    let done = TakeAway::new(3, 3, 2).generate_successor(0, &Take(3));
    assert!(done.is_win());
    let decision = choose_action(&done, &GamePolicy::minimax(2), &TakeAway::evaluate).unwrap();
    assert!(decision.is_stuck());
    assert_eq!(decision.action, None);
    assert_eq!(decision.value, None);
}

#[test_log::test]
fn verified_moves_are_byte_stable() {
    let game = TreeGame::generated(3, 6, 11, 3);
    let first = run_game_move(&game, &GamePolicy::alpha_beta(2), &TreeGame::score).unwrap();
    assert!(first.reference.is_some());
    for _ in 0..5 {
        let again = run_game_move(&game, &GamePolicy::alpha_beta(2), &TreeGame::score).unwrap();
        assert_eq!(again.artifacts, first.artifacts);
    }
    let plain = run_game_move(&game, &GamePolicy::minimax(2), &TreeGame::score).unwrap();
    assert!(plain.reference.is_none());
    assert_ne!(
        plain.artifacts.hash(DECISION_REPORT),
        first.artifacts.hash(DECISION_REPORT)
    );
}
