use crate::*;

/// Bumps the descriptor of every move in `history` in `direction`.
///
/// A `(cell, slot)` pair appearing twice is bumped twice. Returns the moves
/// whose descriptor actually changed, in history order.
pub fn bulk<R>(policy: &mut Policy<R>, history: &[Move], direction: Direction) -> Vec<Move>
where
    R: Representation,
{
    history
        .iter()
        .filter(|m| policy.bump(m.cell, m.slot, direction).is_change())
        .copied()
        .collect()
}
