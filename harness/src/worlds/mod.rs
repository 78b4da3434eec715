//! Fixture worlds for exercising the engines.

pub mod grid_maze;
pub mod take_away;
pub mod tree_game;
pub mod weighted_graph;

/// Typed failure building a world from a description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// A maze layout has no `P`.
    MissingStart,
    /// A maze layout has more than one `P`.
    MultipleStarts,
    /// A maze layout contains a character with no meaning.
    UnknownTile { ch: char, row: usize, col: usize },
}

impl std::fmt::Display for WorldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingStart => write!(f, "maze layout has no start cell"),
            Self::MultipleStarts => write!(f, "maze layout has more than one start cell"),
            Self::UnknownTile { ch, row, col } => {
                write!(f, "unknown maze tile {ch:?} at row {row}, column {col}")
            }
        }
    }
}

impl std::error::Error for WorldError {}
