use super::*;
use crate::*;
use rand::Rng;
use serde::Deserialize;
use serde::Serialize;

/// Parametric representation: each descriptor is a Gaussian law.
///
/// Reinforcing shifts the mean up by `increment` and shrinks the spread by
/// `factor`; weakening shifts the mean down (never below `floor`) and grows
/// the spread by `1 / factor`. Neither the mean nor the spread is bounded
/// above and the spread is never floored, so a parametric descriptor never
/// saturates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gaussian {
    increment: Score,
    factor: Score,
    mean: Score,
    stddev: Score,
    floor: Score,
}

/// Gaussian sampling law `N(mean, stddev²)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normal {
    pub mean: Score,
    pub stddev: Score,
}

impl Default for Gaussian {
    fn default() -> Self {
        Self {
            increment: MEAN_INCREMENT,
            factor: STDDEV_FACTOR,
            mean: INITIAL_MEAN,
            stddev: INITIAL_STDDEV,
            floor: MIN_MEAN,
        }
    }
}

impl Gaussian {
    pub fn new(
        increment: Score,
        factor: Score,
        mean: Score,
        stddev: Score,
        floor: Score,
    ) -> anyhow::Result<Self> {
        if !(increment > 0.) {
            return Err(anyhow::anyhow!("mean increment must be positive, got {}", increment));
        }
        if !(factor > 0. && factor < 1.) {
            return Err(anyhow::anyhow!("stddev factor must lie in (0, 1), got {}", factor));
        }
        if !(stddev > 0.) {
            return Err(anyhow::anyhow!("initial stddev must be positive, got {}", stddev));
        }
        if !(mean >= floor) {
            return Err(anyhow::anyhow!("initial mean {} is below the floor {}", mean, floor));
        }
        Ok(Self {
            increment,
            factor,
            mean,
            stddev,
            floor,
        })
    }
    pub fn floor(&self) -> Score {
        self.floor
    }
}

impl Representation for Gaussian {
    type Descriptor = Normal;
    fn initial(&self) -> Self::Descriptor {
        Normal {
            mean: self.mean,
            stddev: self.stddev,
        }
    }
    fn bump(&self, law: &mut Self::Descriptor, direction: Direction) -> Bump {
        match direction {
            Direction::Reinforce => {
                law.mean += self.increment;
                law.stddev *= self.factor;
                Bump::Moved
            }
            Direction::Weaken => {
                let shifted = law.mean - self.increment;
                law.mean = shifted.max(self.floor);
                law.stddev /= self.factor;
                if shifted < self.floor {
                    Bump::Floored
                } else {
                    Bump::Moved
                }
            }
        }
    }
    fn saturated(&self, _: &Self::Descriptor, _: Direction) -> bool {
        false
    }
    fn draw<G: Rng>(&self, law: &Self::Descriptor, rng: &mut G) -> Score {
        law.mean + box_muller(rng) * law.stddev
    }
    fn describe(&self, law: &Self::Descriptor) -> String {
        format!("μ{:.1} σ{:.1}", law.mean, law.stddev)
    }
}

/// Standard normal sample from two independent uniform draws.
///
/// `u1` is drawn from `(0, 1]` so the logarithm stays finite.
pub fn box_muller<G: Rng>(rng: &mut G) -> Score {
    let u1 = 1. - rng.random::<Score>();
    let u2 = rng.random::<Score>();
    (-2. * u1.ln()).sqrt() * (2. * std::f64::consts::PI * u2).cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn reinforce_shifts_and_tightens() {
        let gaussian = Gaussian::default();
        let ref mut law = gaussian.initial();
        assert_eq!(gaussian.bump(law, Direction::Reinforce), Bump::Moved);
        assert_eq!(law.mean, 6.0);
        assert_eq!(law.stddev, 9.5);
    }

    #[test]
    fn weaken_never_crosses_the_floor() {
        let gaussian = Gaussian::default();
        let ref mut law = gaussian.initial();
        let mut spread = law.stddev;
        for _ in 0..20 {
            assert!(gaussian.bump(law, Direction::Weaken).is_change());
            assert!(law.mean >= MIN_MEAN);
            assert!(law.stddev > spread);
            spread = law.stddev;
        }
        assert_eq!(law.mean, MIN_MEAN);
        assert_eq!(gaussian.bump(law, Direction::Weaken), Bump::Floored);
    }

    #[test]
    fn never_saturates() {
        let gaussian = Gaussian::default();
        let law = Normal {
            mean: MIN_MEAN,
            stddev: 1e-6,
        };
        assert!(!gaussian.saturated(&law, Direction::Weaken));
        assert!(!gaussian.saturated(&law, Direction::Reinforce));
    }

    #[test]
    fn box_muller_is_roughly_standard() {
        let ref mut rng = SmallRng::seed_from_u64(42);
        let n = 20_000;
        let samples = (0..n).map(|_| box_muller(rng)).collect::<Vec<_>>();
        let mean = samples.iter().sum::<Score>() / n as Score;
        let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<Score>() / n as Score;
        assert!(samples.iter().all(|x| x.is_finite()));
        assert!(mean.abs() < 0.05, "mean {:.4}", mean);
        assert!((var - 1.).abs() < 0.05, "variance {:.4}", var);
    }

    #[test]
    fn malformed_laws_are_rejected() {
        assert!(Gaussian::new(0., 0.95, 5., 10., 1.).is_err());
        assert!(Gaussian::new(1., 1.0, 5., 10., 1.).is_err());
        assert!(Gaussian::new(1., 0.95, 5., 0., 1.).is_err());
        assert!(Gaussian::new(1., 0.95, 0.5, 10., 1.).is_err());
        assert!(Gaussian::new(1., 0.95, 5., 10., 1.).is_ok());
    }
}
