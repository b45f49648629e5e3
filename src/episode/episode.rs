use super::*;
use crate::*;

/// State of one race: shared position, whose turn, and both move histories.
#[derive(Debug, Clone, PartialEq)]
pub struct Episode {
    track: Track,
    position: Cell,
    phase: Phase,
    histories: [History; 2],
}

impl Episode {
    pub fn new(track: Track) -> Self {
        Self {
            track,
            position: track.start(),
            phase: Phase::Idle,
            histories: [History::new(), History::new()],
        }
    }
    pub fn track(&self) -> &Track {
        &self.track
    }
    pub fn position(&self) -> Cell {
        self.position
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn turn(&self) -> Option<Seat> {
        self.phase.turn()
    }
    pub fn history(&self, seat: Seat) -> &[Move] {
        &self.histories[seat.index()]
    }
    pub fn histories(&self) -> &[History; 2] {
        &self.histories
    }

    /// Resets to the start cell with empty histories, `first` to move.
    pub fn start(&mut self, first: Seat) {
        self.position = self.track.start();
        self.phase = Phase::Awaiting(first);
        self.histories.iter_mut().for_each(History::clear);
    }
    /// Drops any in-progress state and returns to `Idle`.
    pub fn abandon(&mut self) {
        self.position = self.track.start();
        self.phase = Phase::Idle;
        self.histories.iter_mut().for_each(History::clear);
    }

    /// Slot that `seat` would play by stepping `step` cells, if legal now.
    pub fn check(&self, seat: Seat, step: usize) -> Result<Slot, Rejection> {
        let expected = match self.phase {
            Phase::Idle => return Err(Rejection::Idle),
            Phase::Finished(_) => return Err(Rejection::Finished),
            Phase::Awaiting(expected) => expected,
        };
        if expected != seat {
            return Err(Rejection::OutOfTurn { expected });
        }
        let slot = self
            .track
            .slot(step)
            .ok_or(Rejection::OutOfRange { step })?;
        if !self.track.is_enabled(self.position, slot) {
            return Err(Rejection::Disabled {
                cell: self.position,
                step,
            });
        }
        Ok(slot)
    }

    /// Applies `seat` stepping `step` cells.
    ///
    /// Records the move, advances the shared position, and either finishes
    /// the episode (goal reached) or hands the turn to the other seat.
    pub fn play(&mut self, seat: Seat, step: usize) -> Result<Phase, Rejection> {
        let slot = self.check(seat, step)?;
        self.histories[seat.index()].push(Move {
            cell: self.position,
            slot,
        });
        self.position = self.track.advance(self.position, step);
        self.phase = if self.track.is_goal(self.position) {
            Phase::Finished(seat)
        } else {
            Phase::Awaiting(seat.other())
        };
        Ok(self.phase)
    }
}
