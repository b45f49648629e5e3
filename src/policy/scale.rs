use super::*;
use crate::*;
use rand::Rng;
use serde::Deserialize;
use serde::Serialize;

/// Ordinal representation: an increasing scale of die sizes.
///
/// A descriptor is a position ([`Tier`]) on the scale. Sampling rolls the die
/// uniformly in `1..=size`, so a higher tier wins the per-cell contest more
/// often. Bumps move one tier up or down and saturate at either end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scale {
    tiers: Vec<u32>,
    initial: Tier,
}

/// Position of a descriptor on its [`Scale`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tier(usize);

impl Tier {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::new(DIE_SIZES.to_vec(), DIE_INITIAL).expect("default die scale is valid")
    }
}

impl Scale {
    pub fn new(tiers: Vec<u32>, initial: u32) -> anyhow::Result<Self> {
        if tiers.is_empty() {
            return Err(anyhow::anyhow!("scale needs at least one tier"));
        }
        if tiers.contains(&0) {
            return Err(anyhow::anyhow!("die sizes must be positive"));
        }
        if tiers.windows(2).any(|w| w[0] >= w[1]) {
            return Err(anyhow::anyhow!("die sizes must be strictly increasing: {:?}", tiers));
        }
        let initial = tiers
            .iter()
            .position(|t| *t == initial)
            .map(Tier)
            .ok_or_else(|| anyhow::anyhow!("initial die D{} is not on the scale", initial))?;
        Ok(Self { tiers, initial })
    }
    pub fn tiers(&self) -> &[u32] {
        &self.tiers
    }
    /// Tier holding die size `value`, if it is on the scale.
    pub fn tier(&self, value: u32) -> Option<Tier> {
        self.tiers.iter().position(|t| *t == value).map(Tier)
    }
    /// Die size of `tier`.
    pub fn value(&self, tier: Tier) -> u32 {
        self.tiers[tier.0]
    }
    pub fn bottom(&self) -> Tier {
        Tier(0)
    }
    pub fn top(&self) -> Tier {
        Tier(self.tiers.len() - 1)
    }
}

impl Representation for Scale {
    type Descriptor = Tier;
    fn initial(&self) -> Self::Descriptor {
        self.initial
    }
    fn bump(&self, tier: &mut Self::Descriptor, direction: Direction) -> Bump {
        if self.saturated(tier, direction) {
            return Bump::Saturated;
        }
        match direction {
            Direction::Reinforce => tier.0 += 1,
            Direction::Weaken => tier.0 -= 1,
        }
        Bump::Moved
    }
    fn saturated(&self, tier: &Self::Descriptor, direction: Direction) -> bool {
        match direction {
            Direction::Reinforce => *tier >= self.top(),
            Direction::Weaken => *tier <= self.bottom(),
        }
    }
    fn draw<G: Rng>(&self, tier: &Self::Descriptor, rng: &mut G) -> Score {
        rng.random_range(1..=self.value(*tier)) as Score
    }
    fn describe(&self, tier: &Self::Descriptor) -> String {
        format!("D{}", self.value(*tier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn starts_on_d6() {
        let scale = Scale::default();
        assert_eq!(scale.value(scale.initial()), 6);
    }

    #[test]
    fn reinforce_climbs_then_saturates() {
        let scale = Scale::default();
        let ref mut tier = scale.initial();
        for expected in [8, 10, 12, 20, 100] {
            assert_eq!(scale.bump(tier, Direction::Reinforce), Bump::Moved);
            assert_eq!(scale.value(*tier), expected);
        }
        assert_eq!(scale.bump(tier, Direction::Reinforce), Bump::Saturated);
        assert_eq!(scale.value(*tier), 100);
    }

    #[test]
    fn weaken_descends_then_saturates() {
        let scale = Scale::default();
        let ref mut tier = scale.initial();
        assert_eq!(scale.bump(tier, Direction::Weaken), Bump::Moved);
        assert_eq!(scale.value(*tier), 4);
        assert_eq!(scale.bump(tier, Direction::Weaken), Bump::Saturated);
        assert_eq!(scale.value(*tier), 4);
        assert!(scale.saturated(tier, Direction::Weaken));
        assert!(!scale.saturated(tier, Direction::Reinforce));
    }

    #[test]
    fn rolls_stay_on_the_die() {
        let scale = Scale::default();
        let ref mut rng = SmallRng::seed_from_u64(7);
        let tier = scale.tier(4).unwrap();
        for _ in 0..1000 {
            let roll = scale.draw(&tier, rng);
            assert!((1.0..=4.0).contains(&roll));
            assert_eq!(roll.fract(), 0.0);
        }
    }

    #[test]
    fn malformed_scales_are_rejected() {
        assert!(Scale::new(vec![], 6).is_err());
        assert!(Scale::new(vec![4, 6, 6], 6).is_err());
        assert!(Scale::new(vec![8, 6], 6).is_err());
        assert!(Scale::new(vec![0, 6], 6).is_err());
        assert!(Scale::new(vec![4, 6], 8).is_err());
        assert!(Scale::new(vec![1], 1).is_ok());
    }
}
