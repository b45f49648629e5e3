use super::*;
use crate::*;

/// Applies the session's credit rule at the end of every finished episode.
///
/// Owns the converged flag for sparse learning: it flips to `true` the first
/// time a learner's whole path is saturated, and from then on sparse updates
/// are skipped until [`Trainer::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trainer {
    credit: Credit,
    converged: bool,
}

impl Trainer {
    pub fn new(credit: Credit) -> Self {
        Self {
            credit,
            converged: false,
        }
    }
    pub fn credit(&self) -> Credit {
        self.credit
    }
    pub fn converged(&self) -> bool {
        self.converged
    }
    pub fn reset(&mut self) {
        self.converged = false;
    }

    /// Reshapes the learners' policies after `winner` reached the goal.
    ///
    /// `learners[i]` says whether seat `i` learns at all; non-learners keep
    /// their policy untouched. Returns what changed, per seat.
    pub fn on_episode_end<R>(
        &mut self,
        winner: Seat,
        policies: &mut [Policy<R>; 2],
        histories: &[History; 2],
        learners: [bool; 2],
    ) -> Vec<Adjustment>
    where
        R: Representation,
    {
        match self.credit {
            Credit::Bulk => Self::bulk(winner, policies, histories, learners),
            Credit::Sparse => self.sparse(winner, policies, histories, learners),
        }
    }

    fn bulk<R>(
        winner: Seat,
        policies: &mut [Policy<R>; 2],
        histories: &[History; 2],
        learners: [bool; 2],
    ) -> Vec<Adjustment>
    where
        R: Representation,
    {
        Seat::all()
            .into_iter()
            .filter(|seat| learners[seat.index()])
            .filter(|seat| !histories[seat.index()].is_empty())
            .map(|seat| {
                let direction = Direction::from_outcome(seat == winner);
                let ref history = histories[seat.index()];
                let ref mut policy = policies[seat.index()];
                let moves = bulk(policy, history, direction);
                Adjustment {
                    seat,
                    direction,
                    moves,
                }
            })
            .inspect(|adjustment| log::info!("{}", adjustment))
            .collect()
    }

    fn sparse<R>(
        &mut self,
        winner: Seat,
        policies: &mut [Policy<R>; 2],
        histories: &[History; 2],
        learners: [bool; 2],
    ) -> Vec<Adjustment>
    where
        R: Representation,
    {
        let mut adjustments = Vec::new();
        for seat in Seat::all().into_iter().filter(|s| learners[s.index()]) {
            if self.converged {
                log::debug!("converged, skipping credit for {}", seat);
                break;
            }
            let direction = Direction::from_outcome(seat == winner);
            let ref history = histories[seat.index()];
            let ref mut policy = policies[seat.index()];
            match sparse(policy, history, direction) {
                Nudge::Empty => log::debug!("{} made no moves, nothing to credit", seat),
                Nudge::Exhausted => {
                    self.converged = true;
                    log::info!("training complete: no move of {} can {} any further", seat, direction);
                }
                Nudge::Changed(moves) => {
                    let adjustment = Adjustment {
                        seat,
                        direction,
                        moves,
                    };
                    log::info!("{}", adjustment);
                    adjustments.push(adjustment);
                }
            }
        }
        adjustments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves(pairs: &[(Cell, Slot)]) -> History {
        pairs.iter().copied().map(Move::from).collect()
    }

    fn policies() -> [Policy<Scale>; 2] {
        let track = Track::default();
        [
            Policy::create(track, Scale::default()),
            Policy::create(track, Scale::default()),
        ]
    }

    #[test]
    fn bulk_reinforces_winner_and_weakens_loser() {
        let mut trainer = Trainer::new(Credit::Bulk);
        let ref mut policies = policies();
        let histories = [moves(&[(0, 2), (4, 0)]), moves(&[(3, 0), (5, 2)])];
        let adjustments = trainer.on_episode_end(Seat::P1, policies, &histories, [true, true]);
        assert_eq!(adjustments.len(), 2);
        assert_eq!(policies[0].describe(0, 2), "D8");
        assert_eq!(policies[0].describe(4, 0), "D8");
        assert_eq!(policies[1].describe(3, 0), "D4");
        assert_eq!(policies[1].describe(5, 2), "D4");
        assert!(!trainer.converged());
    }

    #[test]
    fn bulk_spares_non_learners() {
        let mut trainer = Trainer::new(Credit::Bulk);
        let ref mut policies = policies();
        let untouched = policies[1].clone();
        let histories = [moves(&[(0, 2)]), moves(&[(3, 0)])];
        let adjustments = trainer.on_episode_end(Seat::P1, policies, &histories, [true, false]);
        assert_eq!(adjustments.len(), 1);
        assert_eq!(adjustments[0].seat, Seat::P1);
        assert_eq!(policies[1], untouched);
    }

    #[test]
    fn bulk_ignores_seats_that_never_moved() {
        let mut trainer = Trainer::new(Credit::Bulk);
        let ref mut policies = policies();
        let before = policies.clone();
        let histories = [History::new(), History::new()];
        assert!(trainer.on_episode_end(Seat::P2, policies, &histories, [true, true]).is_empty());
        assert_eq!(*policies, before);
    }

    #[test]
    fn bulk_repeated_pair_gets_two_bumps() {
        let mut trainer = Trainer::new(Credit::Bulk);
        let ref mut policies = policies();
        let histories = [moves(&[(1, 1), (1, 1)]), History::new()];
        trainer.on_episode_end(Seat::P1, policies, &histories, [true, true]);
        assert_eq!(policies[0].describe(1, 1), "D10");
    }

    #[test]
    fn sparse_weakens_a_losing_learner() {
        let mut trainer = Trainer::new(Credit::Sparse);
        let ref mut policies = policies();
        let histories = [moves(&[(0, 1), (4, 2)]), moves(&[(2, 2)])];
        let adjustments = trainer.on_episode_end(Seat::P2, policies, &histories, [true, false]);
        assert_eq!(adjustments.len(), 1);
        assert_eq!(adjustments[0].direction, Direction::Weaken);
        assert_eq!(policies[0].describe(4, 2), "D4");
        assert_eq!(policies[0].describe(0, 1), "D6");
    }

    #[test]
    fn sparse_converges_once_and_stays_converged() {
        let mut trainer = Trainer::new(Credit::Sparse);
        let ref mut policies = policies();
        let histories = [moves(&[(0, 2), (3, 2), (6, 2)]), moves(&[(2, 0)])];
        for _ in 0..64 {
            trainer.on_episode_end(Seat::P1, policies, &histories, [true, false]);
        }
        assert!(trainer.converged());
        for m in &histories[0] {
            assert_eq!(policies[0].describe(m.cell, m.slot), "D100");
        }
        let frozen = policies.clone();
        let other = [moves(&[(1, 0), (5, 1)]), History::new()];
        assert!(trainer.on_episode_end(Seat::P2, policies, &other, [true, false]).is_empty());
        assert_eq!(*policies, frozen);
    }

    #[test]
    fn sparse_empty_history_does_not_converge() {
        let mut trainer = Trainer::new(Credit::Sparse);
        let ref mut policies = policies();
        let histories = [History::new(), moves(&[(0, 2)])];
        assert!(trainer.on_episode_end(Seat::P2, policies, &histories, [true, false]).is_empty());
        assert!(!trainer.converged());
    }

    #[test]
    fn reset_clears_convergence() {
        let mut trainer = Trainer::new(Credit::Sparse);
        let scale = Scale::default();
        let top = scale.top();
        let ref mut policies = [
            Policy::from_fn(Track::default(), scale.clone(), |_, _| top),
            Policy::create(Track::default(), scale),
        ];
        let histories = [moves(&[(0, 0)]), History::new()];
        trainer.on_episode_end(Seat::P1, policies, &histories, [true, false]);
        assert!(trainer.converged());
        trainer.reset();
        assert!(!trainer.converged());
    }
}
