use serde::Deserialize;
use serde::Serialize;

/// Which way a bump pushes a descriptor.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Make the action more likely to win the sampling contest.
    Reinforce,
    /// Make the action less likely to win the sampling contest.
    Weaken,
}

impl Direction {
    /// Reinforce winners, weaken losers.
    pub fn from_outcome(won: bool) -> Self {
        if won { Self::Reinforce } else { Self::Weaken }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reinforce => write!(f, "reinforce"),
            Self::Weaken => write!(f, "weaken"),
        }
    }
}

/// Result of a single bump.
///
/// Hitting a bound is not an error; it is reported so callers can log it
/// or, in sparse credit assignment, detect convergence.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bump {
    /// The descriptor changed.
    Moved,
    /// The mean was clamped at its floor; the spread still widened.
    Floored,
    /// Already at the extreme tier in this direction. Nothing changed.
    Saturated,
    /// The cell is disabled or out of range. Nothing changed.
    Disabled,
}

impl Bump {
    /// True if the descriptor was modified.
    pub fn is_change(&self) -> bool {
        matches!(self, Self::Moved | Self::Floored)
    }
}
