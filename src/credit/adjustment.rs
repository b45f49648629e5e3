use crate::*;
use serde::Serialize;

/// Descriptors one seat's policy actually changed after an episode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Adjustment {
    pub seat: Seat,
    pub direction: Direction,
    pub moves: Vec<Move>,
}

impl std::fmt::Display for Adjustment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let moves = self
            .moves
            .iter()
            .map(Move::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{} {}s {} descriptors: {}", self.seat, self.direction, self.moves.len(), moves)
    }
}
