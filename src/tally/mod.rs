//! Win counts and rolling win rate.

mod tally;

pub use tally::*;
