use serde::Deserialize;
use serde::Serialize;

/// One of the two participants in a race.
///
/// Turns alternate between seats; each seat owns its own policy and history.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Seat {
    P1,
    P2,
}

impl Seat {
    pub fn all() -> [Self; 2] {
        [Self::P1, Self::P2]
    }
    /// The seat that moves after this one.
    pub fn other(&self) -> Self {
        match self {
            Self::P1 => Self::P2,
            Self::P2 => Self::P1,
        }
    }
    /// Array index of this seat.
    pub fn index(&self) -> usize {
        match self {
            Self::P1 => 0,
            Self::P2 => 1,
        }
    }
}

impl From<usize> for Seat {
    fn from(player: usize) -> Self {
        match player {
            0 => Self::P1,
            1 => Self::P2,
            _ => panic!("a race only has 2 seats"),
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::P1 => write!(f, "P1"),
            Self::P2 => write!(f, "P2"),
        }
    }
}
