use crate::*;
use serde::Serialize;

/// Lifecycle of an episode.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// No episode running.
    Idle,
    /// Waiting for `Seat` to move.
    Awaiting(Seat),
    /// `Seat` reached the goal.
    Finished(Seat),
}

impl Phase {
    /// Seat whose turn it is, if any.
    pub fn turn(&self) -> Option<Seat> {
        match self {
            Self::Awaiting(seat) => Some(*seat),
            _ => None,
        }
    }
    pub fn winner(&self) -> Option<Seat> {
        match self {
            Self::Finished(seat) => Some(*seat),
            _ => None,
        }
    }
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Awaiting(_))
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Awaiting(seat) => write!(f, "{} to move", seat),
            Self::Finished(seat) => write!(f, "{} won", seat),
        }
    }
}
