//! Long-lived learning session.
//!
//! A [`Session`] owns everything that outlives a single race: both seats'
//! policies, the credit rule and its converged flag, the tally, and the
//! random source. It is the only surface presentation code talks to.

mod config;
mod session;


pub use config::*;
pub use session::*;
