use crate::*;
use serde::Serialize;

/// Why a move was refused. Refusals never change state.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize)]
pub enum Rejection {
    /// No episode has been started.
    Idle,
    /// The episode already has a winner.
    Finished,
    /// It is the other seat's turn.
    OutOfTurn { expected: Seat },
    /// No slot advances by this many cells.
    OutOfRange { step: usize },
    /// The step would overshoot the goal from the current cell.
    Disabled { cell: Cell, step: usize },
    /// Auto-play was asked to move for a human.
    Human { seat: Seat },
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "no episode running"),
            Self::Finished => write!(f, "episode already finished"),
            Self::OutOfTurn { expected } => write!(f, "not your turn, {} to move", expected),
            Self::OutOfRange { step } => write!(f, "no such step size {}", step),
            Self::Disabled { cell, step } => write!(f, "step {} overshoots the goal from cell {}", step, cell),
            Self::Human { seat } => write!(f, "{} is human and must submit its own move", seat),
        }
    }
}

/// What happened in response to one submitted or auto-played move.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    /// `Some` when the move was refused.
    pub rejection: Option<Rejection>,
    /// Shared race position after the call.
    pub position: Cell,
    /// Set once the move reached the goal.
    pub winner: Option<Seat>,
    /// Sampling contest behind an agent's move.
    pub roll: Option<Roll>,
}

impl Receipt {
    pub fn rejected(rejection: Rejection, position: Cell) -> Self {
        Self {
            rejection: Some(rejection),
            position,
            winner: None,
            roll: None,
        }
    }
    pub fn accepted(&self) -> bool {
        self.rejection.is_none()
    }
    pub fn finished(&self) -> bool {
        self.winner.is_some()
    }
}
