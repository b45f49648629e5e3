//! Post-episode credit assignment.
//!
//! Learning is one-step, episodic, and outcome-only: when an episode ends,
//! the descriptors along a seat's recorded path are pushed towards (winner)
//! or away from (loser) the moves it made. Two rules are available:
//!
//! - [`bulk`] — every recorded move is bumped, every episode
//! - [`sparse`] — at most two moves are bumped, until nothing can move
//!
//! [`Trainer`] selects between them and carries the session's converged flag.

mod adjustment;
mod bulk;
mod sparse;
mod trainer;

pub use adjustment::*;
pub use bulk::*;
pub use sparse::*;
pub use trainer::*;

use serde::Deserialize;
use serde::Serialize;

/// Credit assignment rule, fixed when a session is built.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Credit {
    /// Bump every move of every learner, every episode.
    #[default]
    Bulk,
    /// Bump the most recent bump-able move of the single learner.
    Sparse,
}

impl std::fmt::Display for Credit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bulk => write!(f, "bulk"),
            Self::Sparse => write!(f, "sparse"),
        }
    }
}

impl std::str::FromStr for Credit {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bulk" => Ok(Self::Bulk),
            "sparse" => Ok(Self::Sparse),
            _ => Err(anyhow::anyhow!("unknown credit rule: {}", s)),
        }
    }
}
