use crate::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::VecDeque;

/// Session-wide record of who won.
///
/// Totals only ever grow; the rolling window keeps the last `capacity`
/// winners and feeds [`Tally::win_rate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally {
    wins: [usize; 2],
    recent: VecDeque<Seat>,
    capacity: usize,
}

impl Default for Tally {
    fn default() -> Self {
        Self::new(RECENT_CAPACITY)
    }
}

impl Tally {
    pub fn new(capacity: usize) -> Self {
        Self {
            wins: [0; 2],
            recent: VecDeque::with_capacity(capacity),
            capacity,
        }
    }
    pub fn record(&mut self, winner: Seat) {
        self.wins[winner.index()] += 1;
        if self.capacity == 0 {
            return;
        }
        if self.recent.len() == self.capacity {
            self.recent.pop_front();
        }
        self.recent.push_back(winner);
    }
    pub fn wins(&self, seat: Seat) -> usize {
        self.wins[seat.index()]
    }
    pub fn total(&self) -> usize {
        self.wins.iter().sum()
    }
    pub fn counts(&self) -> BTreeMap<Seat, usize> {
        Seat::all().into_iter().map(|s| (s, self.wins(s))).collect()
    }
    /// Recent winners, oldest first.
    pub fn recent(&self) -> impl Iterator<Item = Seat> + '_ {
        self.recent.iter().copied()
    }
    /// Share of the rolling window won by `seat`; even split when empty.
    pub fn win_rate(&self, seat: Seat) -> Probability {
        match self.recent.len() {
            0 => NO_DATA_RATE,
            n => self.recent.iter().filter(|s| **s == seat).count() as Probability / n as Probability,
        }
    }
    pub fn reset(&mut self) {
        self.wins = [0; 2];
        self.recent.clear();
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "P1 {:>5} ({:>5.1}%)   P2 {:>5} ({:>5.1}%)",
            self.wins(Seat::P1),
            self.win_rate(Seat::P1) * 100.,
            self.wins(Seat::P2),
            self.win_rate(Seat::P2) * 100.,
        )
    }
}
