//! Interactive movers for the command-line race.

mod human;

pub use human::*;
