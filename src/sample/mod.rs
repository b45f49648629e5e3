//! Stochastic action selection.
//!
//! - [`Roll`] — One sampling contest at a cell: raw samples and the winner
//! - [`Policy::roll`] — Learning agents: one draw per enabled slot, argmax wins
//! - [`uniform`] — Scripted random mover: any enabled slot, equally likely

mod roll;
mod uniform;

pub use roll::*;
pub use uniform::*;
