//! A single round: target, attempt count, and phase

use rand::Rng;
use serde::Deserialize;

use crate::consts::{DEFAULT_MAX, DEFAULT_MIN};

/// Inclusive range of valid guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GuessRange {
    pub min: u32,
    pub max: u32,
}

impl Default for GuessRange {
    fn default() -> Self {
        Self::new(DEFAULT_MIN, DEFAULT_MAX)
    }
}

impl GuessRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        value >= i64::from(self.min) && value <= i64::from(self.max)
    }

    /// Uniform draw from the range
    pub fn draw<R: Rng>(&self, rng: &mut R) -> u32 {
        rng.random_range(self.min..=self.max)
    }
}

/// Phase of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Guesses are accepted
    Active,
    /// Target was found; terminal until the round is replaced
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    target: u32,
    attempts: u32,
    phase: RoundPhase,
}

impl Round {
    /// Fresh round with a random target in `range`
    pub fn new<R: Rng>(range: GuessRange, rng: &mut R) -> Self {
        Self::with_target(range.draw(rng))
    }

    /// Fresh round with a fixed target
    pub fn with_target(target: u32) -> Self {
        Self {
            target,
            attempts: 0,
            phase: RoundPhase::Active,
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == RoundPhase::Finished
    }

    pub(crate) fn record_attempt(&mut self) -> u32 {
        self.attempts += 1;
        self.attempts
    }

    pub(crate) fn finish(&mut self) {
        self.phase = RoundPhase::Finished;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_new_round_is_active() {
        let mut rng = Pcg32::seed_from_u64(12345);
        let round = Round::new(GuessRange::default(), &mut rng);
        assert_eq!(round.phase(), RoundPhase::Active);
        assert_eq!(round.attempts(), 0);
        assert!((1..=100).contains(&round.target()));
    }

    #[test]
    fn test_same_seed_same_target() {
        let range = GuessRange::default();
        let a = Round::new(range, &mut Pcg32::seed_from_u64(99999));
        let b = Round::new(range, &mut Pcg32::seed_from_u64(99999));
        assert_eq!(a.target(), b.target());
    }

    #[test]
    fn test_single_value_range() {
        let mut rng = Pcg32::seed_from_u64(1);
        let round = Round::new(GuessRange::new(42, 42), &mut rng);
        assert_eq!(round.target(), 42);
    }

    #[test]
    fn test_contains_bounds() {
        let range = GuessRange::new(1, 100);
        assert!(range.contains(1));
        assert!(range.contains(100));
        assert!(!range.contains(0));
        assert!(!range.contains(101));
        assert!(!range.contains(-5));
    }

    proptest! {
        #[test]
        fn prop_target_within_range(seed in any::<u64>(), min in 0u32..1000, span in 0u32..1000) {
            let range = GuessRange::new(min, min + span);
            let round = Round::new(range, &mut Pcg32::seed_from_u64(seed));
            prop_assert!(range.contains(i64::from(round.target())));
        }
    }
}
