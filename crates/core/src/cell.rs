//! Cell states for the forest fire automaton

use serde::{Deserialize, Serialize};

/// State of a single grid cell
///
/// A cell moves through `Tree -> Fire -> Ash` at most once: a burning cell
/// always turns to ash on the following step, and ash never recovers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Unburned fuel, may ignite from a burning orthogonal neighbor
    #[default]
    Tree,
    /// Currently burning, becomes ash on the next step
    Fire,
    /// Burned out, terminal
    Ash,
}

impl CellState {
    /// Check if this cell is currently burning
    #[must_use]
    pub fn is_burning(self) -> bool {
        self == CellState::Fire
    }
}
