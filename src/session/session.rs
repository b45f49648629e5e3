use super::*;
use crate::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Serialize;
use std::collections::BTreeMap;

/// Identifies a started episode.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize)]
pub struct Handle {
    /// 1-based episode counter within the session.
    pub episode: usize,
    /// Seat that moves first.
    pub first: Seat,
}

/// A learning session: two seats racing episode after episode.
///
/// Policies persist across episodes and are only reshaped by credit
/// assignment when an episode finishes. All randomness (starting seat,
/// agent sampling, random movers) is drawn from one seeded source, so two
/// sessions built from the same [`Config`] replay identically.
pub struct Session<R>
where
    R: Representation,
{
    config: Config,
    representation: R,
    policies: [Policy<R>; 2],
    episode: Episode,
    trainer: Trainer,
    tally: Tally,
    rng: SmallRng,
    episodes: usize,
}

impl<R> Session<R>
where
    R: Representation,
{
    pub fn new(config: Config, representation: R) -> anyhow::Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        log::debug!(
            "new session: {} track, {} credit, {} vs {}",
            config.track,
            config.credit,
            config.mover(Seat::P1),
            config.mover(Seat::P2),
        );
        Ok(Self {
            policies: Self::fresh(&config, &representation),
            episode: Episode::new(config.track),
            trainer: Trainer::new(config.credit),
            tally: Tally::new(config.capacity),
            episodes: 0,
            representation,
            config,
            rng,
        })
    }
    fn fresh(config: &Config, representation: &R) -> [Policy<R>; 2] {
        [
            Policy::create(config.track, representation.clone()),
            Policy::create(config.track, representation.clone()),
        ]
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn track(&self) -> &Track {
        &self.config.track
    }
    pub fn phase(&self) -> Phase {
        self.episode.phase()
    }
    pub fn turn(&self) -> Option<Seat> {
        self.episode.turn()
    }
    pub fn position(&self) -> Cell {
        self.episode.position()
    }
    /// Episodes started since the session was built or last reset.
    pub fn episodes(&self) -> usize {
        self.episodes
    }
    pub fn converged(&self) -> bool {
        self.trainer.converged()
    }
    pub fn snapshot_policy(&self, seat: Seat) -> &Policy<R> {
        &self.policies[seat.index()]
    }
    pub fn move_history(&self, seat: Seat) -> &[Move] {
        self.episode.history(seat)
    }
    pub fn tally(&self) -> &Tally {
        &self.tally
    }
    pub fn outcome_counts(&self) -> BTreeMap<Seat, usize> {
        self.tally.counts()
    }
    pub fn recent_win_rate(&self, seat: Seat) -> Probability {
        self.tally.win_rate(seat)
    }

    /// Starts a new episode with a uniformly random first mover.
    /// Any episode in progress is dropped without learning from it.
    pub fn start_episode(&mut self) -> Handle {
        let first = Seat::from(self.rng.random_range(0..2));
        self.begin(first)
    }
    /// Starts a new episode with `first` to move.
    pub fn begin(&mut self, first: Seat) -> Handle {
        if self.episode.phase().is_running() {
            log::debug!("abandoning episode {} at cell {}", self.episodes, self.episode.position());
        }
        self.episode.start(first);
        self.episodes += 1;
        log::info!("episode {}: {} starts", self.episodes, first);
        Handle {
            episode: self.episodes,
            first,
        }
    }
    /// Drops the episode in progress; no credit is assigned.
    pub fn abandon(&mut self) {
        self.episode.abandon();
    }
    /// Restarts the whole session: fresh policies, empty tally, not converged.
    pub fn reset(&mut self) {
        self.policies = Self::fresh(&self.config, &self.representation);
        self.episode.abandon();
        self.trainer.reset();
        self.tally.reset();
        self.episodes = 0;
        log::info!("session reset");
    }
    /// Replaces one seat's policy, e.g. with a hand-tuned preset.
    pub fn install(&mut self, seat: Seat, policy: Policy<R>) -> anyhow::Result<()> {
        if policy.track() != self.track() {
            return Err(anyhow::anyhow!(
                "policy built for {} cannot race on {}",
                policy.track(),
                self.track()
            ));
        }
        self.policies[seat.index()] = policy;
        Ok(())
    }

    /// Plays `step` cells for `seat`, as submitted from outside.
    pub fn submit_action(&mut self, seat: Seat, step: usize) -> Receipt {
        self.advance(seat, step, None)
    }
    /// Plays one turn for the seat to move, choosing the step internally.
    /// Refused when that seat is human.
    pub fn auto_play_turn(&mut self) -> Receipt {
        let position = self.episode.position();
        let seat = match self.episode.phase() {
            Phase::Idle => return Receipt::rejected(Rejection::Idle, position),
            Phase::Finished(_) => return Receipt::rejected(Rejection::Finished, position),
            Phase::Awaiting(seat) => seat,
        };
        let track = self.config.track;
        match self.config.mover(seat) {
            Mover::Human => Receipt::rejected(Rejection::Human { seat }, position),
            Mover::Random => {
                let slot = uniform(&track, position, &mut self.rng)
                    .expect("running episodes are never on the goal");
                log::debug!("{} picks {} at cell {}", seat, track.step(slot), position);
                self.advance(seat, track.step(slot), None)
            }
            Mover::Agent => {
                let roll = self.policies[seat.index()].roll(position, &mut self.rng);
                log::debug!("{} rolls at cell {}: {}", seat, position, roll);
                self.advance(seat, track.step(roll.slot), Some(roll))
            }
        }
    }
    /// Starts an episode and auto-plays it to the end. Fails if a seat is human.
    pub fn play_episode(&mut self) -> anyhow::Result<Seat> {
        if let Some(seat) = Seat::all()
            .into_iter()
            .find(|s| self.config.mover(*s) == Mover::Human)
        {
            return Err(anyhow::anyhow!("{} is human, cannot auto-play an episode", seat));
        }
        self.start_episode();
        loop {
            let receipt = self.auto_play_turn();
            if let Some(rejection) = receipt.rejection {
                return Err(anyhow::anyhow!("auto-play stalled: {}", rejection));
            }
            if let Some(winner) = receipt.winner {
                return Ok(winner);
            }
        }
    }

    fn advance(&mut self, seat: Seat, step: usize, roll: Option<Roll>) -> Receipt {
        match self.episode.play(seat, step) {
            Err(rejection) => {
                log::debug!("{} move refused: {}", seat, rejection);
                Receipt::rejected(rejection, self.episode.position())
            }
            Ok(phase) => {
                if let Phase::Finished(winner) = phase {
                    self.settle(winner);
                }
                Receipt {
                    rejection: None,
                    position: self.episode.position(),
                    winner: phase.winner(),
                    roll,
                }
            }
        }
    }
    fn settle(&mut self, winner: Seat) {
        log::info!("episode {}: {} wins", self.episodes, winner);
        self.trainer.on_episode_end(
            winner,
            &mut self.policies,
            self.episode.histories(),
            self.config.learners(),
        );
        self.tally.record(winner);
    }
}
