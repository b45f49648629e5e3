use crate::*;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Uniformly random enabled slot at `cell`, as the scripted random mover plays.
/// `None` on the goal cell.
pub fn uniform<G: Rng>(track: &Track, cell: Cell, rng: &mut G) -> Option<Slot> {
    track.enabled(cell).collect::<Vec<_>>().choose(rng).copied()
}
