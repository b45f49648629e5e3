use super::*;
use crate::*;
use serde::Serialize;

/// Per-cell, per-slot descriptor grid for one seat.
///
/// Cell `(p, a)` holds `Some(descriptor)` iff slot `a` is enabled at cell `p`
/// on the underlying [`Track`]; disabled cells hold `None` forever. Policies
/// live for the whole session and are only mutated through [`Policy::bump`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = "R: Serialize, R::Descriptor: Serialize"))]
pub struct Policy<R>
where
    R: Representation,
{
    track: Track,
    representation: R,
    cells: Vec<Vec<Option<R::Descriptor>>>,
}

impl<R> Policy<R>
where
    R: Representation,
{
    /// Fresh policy: every enabled cell gets the representation's initial descriptor.
    pub fn create(track: Track, representation: R) -> Self {
        let initial = representation.initial();
        Self::from_fn(track, representation, |_, _| initial.clone())
    }
    /// Policy whose enabled cells are filled by `f(cell, slot)`.
    /// Disabled cells are left empty regardless of what `f` would return.
    pub fn from_fn<F>(track: Track, representation: R, mut f: F) -> Self
    where
        F: FnMut(Cell, Slot) -> R::Descriptor,
    {
        let cells = (0..track.length())
            .map(|cell| {
                (0..track.slots())
                    .map(|slot| track.is_enabled(cell, slot).then(|| f(cell, slot)))
                    .collect()
            })
            .collect();
        Self {
            track,
            representation,
            cells,
        }
    }
    pub fn track(&self) -> &Track {
        &self.track
    }
    pub fn representation(&self) -> &R {
        &self.representation
    }
    /// Descriptor at `(cell, slot)`; `None` if disabled or out of range.
    pub fn get(&self, cell: Cell, slot: Slot) -> Option<&R::Descriptor> {
        self.cells
            .get(cell)
            .and_then(|row| row.get(slot))
            .and_then(Option::as_ref)
    }
    /// All slots at `cell`, disabled ones as `None`.
    pub fn row(&self, cell: Cell) -> &[Option<R::Descriptor>] {
        self.cells.get(cell).map(Vec::as_slice).unwrap_or(&[])
    }
    pub fn is_enabled(&self, cell: Cell, slot: Slot) -> bool {
        self.get(cell, slot).is_some()
    }
    /// True if bumping `(cell, slot)` in `direction` cannot change anything.
    pub fn saturated(&self, cell: Cell, slot: Slot, direction: Direction) -> bool {
        self.get(cell, slot)
            .map(|d| self.representation.saturated(d, direction))
            .unwrap_or(true)
    }
    /// Moves one descriptor a notch in `direction`.
    pub fn bump(&mut self, cell: Cell, slot: Slot, direction: Direction) -> Bump {
        let Some(descriptor) = self
            .cells
            .get_mut(cell)
            .and_then(|row| row.get_mut(slot))
            .and_then(Option::as_mut)
        else {
            return Bump::Disabled;
        };
        let before = self.representation.describe(descriptor);
        let bump = self.representation.bump(descriptor, direction);
        let after = self.representation.describe(descriptor);
        match bump {
            Bump::Saturated => log::debug!("({},{}) already at {}, cannot {}", cell, slot, before, direction),
            Bump::Floored => log::debug!("({},{}) {} -> {} (mean floored)", cell, slot, before, after),
            Bump::Moved => log::debug!("({},{}) {} -> {}", cell, slot, before, after),
            Bump::Disabled => unreachable!("enabled descriptors never report disabled"),
        }
        bump
    }
    /// Label of `(cell, slot)` for display; empty for disabled cells.
    pub fn describe(&self, cell: Cell, slot: Slot) -> String {
        self.get(cell, slot)
            .map(|d| self.representation.describe(d))
            .unwrap_or_default()
    }
}

impl Policy<Scale> {
    /// Hand-tuned ordinal policy: enabled cell `(p, a)` holds the top die
    /// when `(p + a) % 4 == 0` and the bottom die otherwise.
    pub fn trained(track: Track, scale: Scale) -> Self {
        let top = scale.top();
        let bottom = scale.bottom();
        Self::from_fn(track, scale, |cell, slot| match (cell + slot) % 4 {
            0 => top,
            _ => bottom,
        })
    }
}

impl<R> std::fmt::Display for Policy<R>
where
    R: Representation,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cells = self.track.length();
        let width = (0..cells)
            .flat_map(|c| (0..self.track.slots()).map(move |s| (c, s)))
            .map(|(c, s)| self.describe(c, s).chars().count())
            .max()
            .unwrap_or(0)
            .max(4);
        let rule = |l: &str, m: &str, r: &str| {
            let bars = std::iter::repeat("─".repeat(width + 2))
                .take(cells)
                .collect::<Vec<_>>()
                .join(m);
            format!("{}──────{}{}{}", l, m, bars, r)
        };
        writeln!(f, "{}", rule("┌", "┬", "┐"))?;
        write!(f, "│ step │")?;
        for cell in 0..cells {
            write!(f, " {:^width$} │", cell, width = width)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", rule("├", "┼", "┤"))?;
        for slot in 0..self.track.slots() {
            write!(f, "│ {:>4} │", self.track.step(slot))?;
            for cell in 0..cells {
                write!(f, " {:^width$} │", self.describe(cell, slot), width = width)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", rule("└", "┴", "┘"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_is_baked_in_at_creation() {
        let track = Track::default();
        let policy = Policy::create(track, Scale::default());
        for cell in 0..track.length() {
            for slot in 0..track.slots() {
                assert_eq!(policy.is_enabled(cell, slot), track.is_enabled(cell, slot));
            }
        }
        assert!(policy.get(0, 2).is_some());
        assert!(policy.get(8, 0).is_some());
        assert!(policy.get(8, 1).is_none());
        assert!(policy.get(9, 0).is_none());
        assert!(policy.get(42, 0).is_none());
        assert!(policy.get(0, 7).is_none());
    }

    #[test]
    fn enabled_cells_start_at_defaults() {
        let track = Track::default();
        let ordinal = Policy::create(track, Scale::default());
        assert_eq!(ordinal.describe(0, 0), "D6");
        let parametric = Policy::create(track, Gaussian::default());
        assert_eq!(
            parametric.get(3, 1),
            Some(&Normal {
                mean: INITIAL_MEAN,
                stddev: INITIAL_STDDEV
            })
        );
    }

    #[test]
    fn bump_touches_one_descriptor() {
        let track = Track::default();
        let mut policy = Policy::create(track, Scale::default());
        let before = policy.clone();
        assert_eq!(policy.bump(2, 1, Direction::Reinforce), Bump::Moved);
        assert_eq!(policy.describe(2, 1), "D8");
        for cell in 0..track.length() {
            for slot in 0..track.slots() {
                if (cell, slot) != (2, 1) {
                    assert_eq!(policy.get(cell, slot), before.get(cell, slot));
                }
            }
        }
    }

    #[test]
    fn disabled_cells_ignore_bumps() {
        let track = Track::default();
        let mut policy = Policy::create(track, Gaussian::default());
        let before = policy.clone();
        assert_eq!(policy.bump(8, 2, Direction::Reinforce), Bump::Disabled);
        assert_eq!(policy.bump(9, 0, Direction::Weaken), Bump::Disabled);
        assert_eq!(policy.bump(99, 0, Direction::Weaken), Bump::Disabled);
        assert_eq!(policy, before);
        assert!(policy.saturated(8, 2, Direction::Reinforce));
    }

    #[test]
    fn trained_preset_respects_mask() {
        let track = Track::default();
        let policy = Policy::trained(track, Scale::default());
        assert_eq!(policy.describe(0, 0), "D100");
        assert_eq!(policy.describe(0, 1), "D4");
        assert_eq!(policy.describe(1, 2), "D4");
        assert_eq!(policy.describe(2, 2), "D100");
        assert_eq!(policy.describe(7, 2), "");
        assert!(policy.get(7, 2).is_none());
    }

    #[test]
    fn renders_a_grid() {
        let policy = Policy::create(Track::default(), Scale::default());
        let grid = policy.to_string();
        assert_eq!(grid.lines().count(), 3 + 3 + 1);
        assert!(grid.contains("D6"));
    }
}
