use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Linear race track of `length` cells with `slots` selectable step sizes.
///
/// Cell `0` is the start and cell `length - 1` is the goal. Slot `a` moves a
/// piece `a + 1` cells forward. A slot is enabled at a cell only when its step
/// lands on or before the goal, so the mask is a triangle that narrows as the
/// goal approaches and is fixed for the lifetime of any policy built on it.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    length: usize,
    slots: usize,
}

impl Default for Track {
    fn default() -> Self {
        Self {
            length: TRACK_LENGTH,
            slots: SLOT_COUNT,
        }
    }
}

impl Track {
    pub fn new(length: usize, slots: usize) -> anyhow::Result<Self> {
        if length < 2 {
            return Err(anyhow::anyhow!("track needs a start and a goal, got {} cells", length));
        }
        if slots == 0 {
            return Err(anyhow::anyhow!("track needs at least one step size"));
        }
        Ok(Self { length, slots })
    }
    pub fn length(&self) -> usize {
        self.length
    }
    pub fn slots(&self) -> usize {
        self.slots
    }
    pub fn start(&self) -> Cell {
        0
    }
    pub fn goal(&self) -> Cell {
        self.length - 1
    }
    pub fn is_goal(&self, cell: Cell) -> bool {
        cell >= self.goal()
    }
    /// Number of cells slot `slot` advances.
    pub fn step(&self, slot: Slot) -> usize {
        slot + 1
    }
    /// Slot that advances exactly `step` cells, if any.
    pub fn slot(&self, step: usize) -> Option<Slot> {
        match step {
            0 => None,
            s if s > self.slots => None,
            s => Some(s - 1),
        }
    }
    /// Enablement mask: `cell + step(slot) <= goal`.
    pub fn is_enabled(&self, cell: Cell, slot: Slot) -> bool {
        slot < self.slots && cell + self.step(slot) <= self.goal()
    }
    /// Enabled slots at `cell`, in increasing order.
    pub fn enabled(&self, cell: Cell) -> impl Iterator<Item = Slot> + '_ {
        (0..self.slots).filter(move |slot| self.is_enabled(cell, *slot))
    }
    /// Position after moving `step` cells from `cell`, clamped to the goal.
    pub fn advance(&self, cell: Cell, step: usize) -> Cell {
        (cell + step).min(self.goal())
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} cells, steps 1..={}", self.length, self.slots)
    }
}
