//! Track geometry, seats, and move histories.
//!
//! - [`Track`] — Cell count, step sizes, and the enablement mask
//! - [`Seat`] — The two participants of a race
//! - [`Move`] — One `(cell, slot)` decision recorded in a [`History`]

mod history;
mod seat;
mod track;

pub use history::*;
pub use seat::*;
pub use track::*;
