use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// A single decision: the slot chosen while standing on `cell`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub cell: Cell,
    pub slot: Slot,
}

/// Chronological moves of one seat during one episode.
pub type History = Vec<Move>;

impl From<(Cell, Slot)> for Move {
    fn from((cell, slot): (Cell, Slot)) -> Self {
        Self { cell, slot }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.cell, self.slot)
    }
}
