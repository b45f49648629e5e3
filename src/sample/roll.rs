use crate::*;
use rand::Rng;
use serde::Serialize;

/// Outcome of one sampling contest at a cell.
///
/// `samples[a]` is the raw draw for slot `a`, `None` for disabled slots so
/// they never enter the contest. Keeping the raw draws lets callers log or
/// replay the exact contest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Roll {
    pub slot: Slot,
    pub samples: Vec<Option<Score>>,
}

impl Roll {
    /// Winning slot of `samples`: the maximum, ties going to the lowest index.
    ///
    /// Infinite draws compete like any other value. A NaN draw stays
    /// eligible but loses to every number, so a non-empty contest always
    /// has a winner.
    pub fn argmax(samples: &[Score]) -> Option<Slot> {
        Self::winner(samples.iter().copied().enumerate())
    }
    fn winner<I>(draws: I) -> Option<Slot>
    where
        I: Iterator<Item = (Slot, Score)>,
    {
        draws
            .fold(None, |best: Option<(Slot, Score)>, (slot, sample)| match best {
                Some((_, top)) if sample.is_nan() || sample <= top => best,
                _ => Some((slot, sample)),
            })
            .map(|(slot, _)| slot)
    }
}

impl<R> Policy<R>
where
    R: Representation,
{
    /// Draws one sample per enabled slot at `cell` and picks the largest.
    ///
    /// # Panics
    ///
    /// If no slot is enabled at `cell`. The turn engine ends an episode on
    /// the goal cell before it can ever ask for a move there.
    pub fn roll<G: Rng>(&self, cell: Cell, rng: &mut G) -> Roll {
        let samples = (0..self.track().slots())
            .map(|slot| {
                self.get(cell, slot)
                    .map(|descriptor| self.representation().draw(descriptor, rng))
            })
            .collect::<Vec<_>>();
        let slot = Roll::winner(
            samples
                .iter()
                .enumerate()
                .filter_map(|(slot, sample)| sample.map(|s| (slot, s))),
        )
        .expect("at least one enabled slot below the goal");
        Roll { slot, samples }
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let draws = self
            .samples
            .iter()
            .enumerate()
            .filter_map(|(slot, sample)| sample.map(|s| (slot, s)))
            .map(|(slot, s)| {
                if slot == self.slot {
                    format!("[{}→{:.2}]", slot + 1, s)
                } else {
                    format!("{}→{:.2}", slot + 1, s)
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{}", draws)
    }
}
