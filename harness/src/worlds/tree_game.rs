//! `TreeGame`: an explicit game tree played by N agents.
//!
//! Every node carries a score. At a leaf it is the final outcome; at an
//! inner node it is the heuristic used when the search is cut off there.
//! Any agent may move at any node, and an action is a child index.

use std::rc::Rc;

use waypoint_adversarial::GameState;

/// Nested description of a tree, used to build a [`TreeGame`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTree {
    Leaf(i64),
    /// `(heuristic, children)`.
    Node(i64, Vec<GameTree>),
}

impl GameTree {
    /// Inner node with a zero heuristic.
    #[must_use]
    pub fn node(children: Vec<GameTree>) -> Self {
        Self::Node(0, children)
    }
}

#[derive(Debug)]
struct Flat {
    score: i64,
    children: Vec<usize>,
}

/// Position in a shared, flattened game tree.
///
/// Cloning and generating successors are O(1): all positions of one game
/// share the same node table.
#[derive(Debug, Clone)]
pub struct TreeGame {
    nodes: Rc<Vec<Flat>>,
    at: usize,
    agents: usize,
}

impl TreeGame {
    #[must_use]
    pub fn new(tree: &GameTree, agents: usize) -> Self {
        let mut nodes = Vec::new();
        flatten(tree, &mut nodes);
        Self {
            nodes: Rc::new(nodes),
            at: 0,
            agents,
        }
    }

    /// Complete tree with `branching` children per inner node and `height`
    /// levels below the root, scored from `seed`.
    ///
    /// Leaf and heuristic scores lie in `-100..=100` and depend only on the
    /// arguments.
    #[must_use]
    pub fn generated(branching: usize, height: u32, seed: u64, agents: usize) -> Self {
        let mut rng = SplitMix64(seed);
        let tree = generate(branching, height, &mut rng);
        Self::new(&tree, agents)
    }

    /// Score of the current node. Use as the evaluator.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.nodes[self.at].score
    }

    /// Total nodes in the tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The textbook two-agent tree whose minimax value is 3.
    #[must_use]
    pub fn textbook() -> Self {
        use GameTree::Leaf;
        Self::new(
            &GameTree::node(vec![
                GameTree::node(vec![Leaf(3), Leaf(12), Leaf(8)]),
                GameTree::node(vec![Leaf(2), Leaf(4), Leaf(6)]),
                GameTree::node(vec![Leaf(14), Leaf(5), Leaf(2)]),
            ]),
            2,
        )
    }
}

impl GameState for TreeGame {
    type Action = usize;

    fn legal_actions(&self, _agent: usize) -> Vec<usize> {
        (0..self.nodes[self.at].children.len()).collect()
    }

    fn generate_successor(&self, _agent: usize, action: &usize) -> Self {
        Self {
            nodes: Rc::clone(&self.nodes),
            at: self.nodes[self.at].children[*action],
            agents: self.agents,
        }
    }

    fn num_agents(&self) -> usize {
        self.agents
    }

    fn is_win(&self) -> bool {
        false
    }

    fn is_lose(&self) -> bool {
        false
    }
}

/// Pre-order flatten; returns the index of `tree`'s node.
fn flatten(tree: &GameTree, nodes: &mut Vec<Flat>) -> usize {
    let index = nodes.len();
    match tree {
        GameTree::Leaf(score) => nodes.push(Flat {
            score: *score,
            children: Vec::new(),
        }),
        GameTree::Node(score, children) => {
            nodes.push(Flat {
                score: *score,
                children: Vec::with_capacity(children.len()),
            });
            for child in children {
                let child_index = flatten(child, nodes);
                nodes[index].children.push(child_index);
            }
        }
    }
    index
}

fn generate(branching: usize, height: u32, rng: &mut SplitMix64) -> GameTree {
    let score = rng.score();
    if height == 0 || branching == 0 {
        return GameTree::Leaf(score);
    }
    let children = (0..branching)
        .map(|_| generate(branching, height - 1, rng))
        .collect();
    GameTree::Node(score, children)
}

/// SplitMix64: small deterministic generator for fixture trees.
struct SplitMix64(u64);

impl SplitMix64 {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    #[allow(clippy::cast_possible_wrap)]
    fn score(&mut self) -> i64 {
        (self.next() % 201) as i64 - 100
    }
}
