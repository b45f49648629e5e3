//! Per-cell, per-slot descriptors that drive action selection.
//!
//! A [`Policy`] is an `N x K` grid of descriptors laid over a [`Track`]'s
//! enablement mask. What a descriptor *is* depends on the [`Representation`]:
//!
//! - [`Scale`] — Ordinal: each descriptor is a die ([`Tier`]) on a fixed scale
//! - [`Gaussian`] — Parametric: each descriptor is a Gaussian law ([`Normal`])

mod bump;
mod gaussian;
mod policy;
mod scale;

pub use bump::*;
pub use gaussian::*;
pub use policy::*;
pub use scale::*;

use crate::*;
use rand::Rng;

/// Pluggable descriptor representation.
///
/// Implementors own the numeric constants of their representation, so a
/// descriptor on its own is plain data and every mutation goes through here.
pub trait Representation: Clone + std::fmt::Debug + PartialEq {
    type Descriptor: Clone + std::fmt::Debug + PartialEq;
    /// Descriptor every enabled cell starts with.
    fn initial(&self) -> Self::Descriptor;
    /// Moves the descriptor one notch in `direction`.
    fn bump(&self, descriptor: &mut Self::Descriptor, direction: Direction) -> Bump;
    /// True if a bump in `direction` would leave the descriptor unchanged.
    fn saturated(&self, descriptor: &Self::Descriptor, direction: Direction) -> bool;
    /// Draws one raw sample from the descriptor's law.
    fn draw<G: Rng>(&self, descriptor: &Self::Descriptor, rng: &mut G) -> Score;
    /// Short human-readable label.
    fn describe(&self, descriptor: &Self::Descriptor) -> String;
}
