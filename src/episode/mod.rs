//! Turn-by-turn race state machine.
//!
//! An [`Episode`] moves through `Idle → Awaiting(seat) → … → Finished(winner)`.
//! It validates and applies moves, records each seat's [`History`], and
//! detects goal arrival. It knows nothing about policies or learning; the
//! session wires its result into credit assignment.

mod episode;
mod phase;
mod receipt;

pub use episode::*;
pub use phase::*;
pub use receipt::*;
