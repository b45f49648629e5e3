use crate::*;

/// Result of one sparse update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nudge {
    /// The history was empty; nothing to learn from.
    Empty,
    /// One or two descriptors changed.
    Changed(Vec<Move>),
    /// Every move in the history is already at its bound.
    Exhausted,
}

/// Bumps at most two descriptors along `history`, most recent first.
///
/// Walks the history backwards to the first move that is not yet saturated
/// in `direction` and bumps it. Unless that move was the very last one
/// played, the move examined right after it in the backwards walk is
/// bumped as well, provided it is not saturated either.
pub fn sparse<R>(policy: &mut Policy<R>, history: &[Move], direction: Direction) -> Nudge
where
    R: Representation,
{
    if history.is_empty() {
        return Nudge::Empty;
    }
    let reversed = history.iter().rev().copied().collect::<Vec<_>>();
    let Some(i) = reversed
        .iter()
        .position(|m| !policy.saturated(m.cell, m.slot, direction))
    else {
        return Nudge::Exhausted;
    };
    let mut changed = Vec::with_capacity(2);
    let first = reversed[i];
    if policy.bump(first.cell, first.slot, direction).is_change() {
        changed.push(first);
    }
    if i > 0 {
        if let Some(next) = reversed.get(i + 1).copied() {
            if !policy.saturated(next.cell, next.slot, direction)
                && policy.bump(next.cell, next.slot, direction).is_change()
            {
                changed.push(next);
            }
        }
    }
    Nudge::Changed(changed)
}
