use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Who decides a seat's moves.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mover {
    /// Moves arrive from outside through `submit_action`. Never learns.
    Human,
    /// Picks any enabled step uniformly at random. Never learns.
    Random,
    /// Samples its policy and learns from every outcome.
    #[default]
    Agent,
}

impl Mover {
    pub fn learns(&self) -> bool {
        matches!(self, Self::Agent)
    }
}

impl std::fmt::Display for Mover {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Random => write!(f, "random"),
            Self::Agent => write!(f, "agent"),
        }
    }
}

impl std::str::FromStr for Mover {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "random" => Ok(Self::Random),
            "agent" => Ok(Self::Agent),
            _ => Err(anyhow::anyhow!("unknown mover: {}", s)),
        }
    }
}

/// Everything fixed when a session is built, apart from the representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub track: Track,
    pub credit: Credit,
    pub movers: [Mover; 2],
    /// Episodes kept in the rolling win-rate window.
    pub capacity: usize,
    /// Seed for the session's random source; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            track: Track::default(),
            credit: Credit::default(),
            movers: [Mover::Agent, Mover::Agent],
            capacity: RECENT_CAPACITY,
            seed: None,
        }
    }
}

impl Config {
    pub fn mover(&self, seat: Seat) -> Mover {
        self.movers[seat.index()]
    }
    pub fn learners(&self) -> [bool; 2] {
        self.movers.map(|m| m.learns())
    }
    pub fn validate(&self) -> anyhow::Result<()> {
        Track::new(self.track.length(), self.track.slots())?;
        if self.capacity == 0 {
            return Err(anyhow::anyhow!("recent-outcome window needs room for at least one episode"));
        }
        let learners = self.movers.iter().filter(|m| m.learns()).count();
        if self.credit == Credit::Sparse && learners != 1 {
            return Err(anyhow::anyhow!(
                "sparse credit needs exactly one agent, got {}",
                learners
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_two_agents_in_bulk() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.learners(), [true, true]);
    }

    #[test]
    fn sparse_needs_a_single_learner() {
        let mut config = Config {
            credit: Credit::Sparse,
            ..Config::default()
        };
        assert!(config.validate().is_err());
        config.movers = [Mover::Human, Mover::Random];
        assert!(config.validate().is_err());
        config.movers = [Mover::Random, Mover::Agent];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_win_rate_window_is_rejected() {
        let mut config = Config {
            capacity: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
        config.capacity = 1;
        assert!(config.validate().is_ok());
        let config = serde_json::from_str::<Config>(r#"{ "capacity": 0 }"#).unwrap();
        assert!(Session::new(config, Scale::default()).is_err());
    }

    #[test]
    fn movers_parse_case_insensitively() {
        assert_eq!("Human".parse::<Mover>().unwrap(), Mover::Human);
        assert_eq!("random".parse::<Mover>().unwrap(), Mover::Random);
        assert!("robot".parse::<Mover>().is_err());
    }

    #[test]
    fn parses_partial_json() {
        let config = serde_json::from_str::<Config>(
            r#"{ "credit": "sparse", "movers": ["agent", "human"], "seed": 3 }"#,
        )
        .unwrap();
        assert_eq!(config.credit, Credit::Sparse);
        assert_eq!(config.mover(Seat::P2), Mover::Human);
        assert_eq!(config.track, Track::default());
        assert_eq!(config.capacity, RECENT_CAPACITY);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn rejects_degenerate_tracks_from_json() {
        let config = serde_json::from_str::<Config>(r#"{ "track": { "length": 1, "slots": 3 } }"#)
            .unwrap();
        assert!(config.validate().is_err());
    }
}
