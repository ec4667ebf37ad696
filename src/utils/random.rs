//! Random draws for the values sent on each iteration

use crate::config::{PauseConfig, RangeConfig};
use rand::Rng;
use std::time::Duration;

/// Type of the user IDs sent to the leaderboard
pub type UserId = u32;
/// Type of the scores submitted to the leaderboard
pub type Score = u32;

/// Draws a user ID uniformly from the inclusive `range`
pub fn user_id<R: Rng + ?Sized>(rng: &mut R, range: &RangeConfig) -> UserId {
    rng.gen_range(range.min..=range.max)
}

/// Draws a score uniformly from the inclusive `range`
pub fn score<R: Rng + ?Sized>(rng: &mut R, range: &RangeConfig) -> Score {
    rng.gen_range(range.min..=range.max)
}

/// Draws a pause duration uniformly from the half-open `range`
pub fn pause<R: Rng + ?Sized>(rng: &mut R, range: &PauseConfig) -> Duration {
    let min = Duration::from_millis(range.min_ms);
    let max = Duration::from_millis(range.max_ms);
    rng.gen_range(min..max)
}

#[cfg(test)]
mod test {
    use super::{pause, score, user_id};
    use crate::config::{PauseConfig, RangeConfig};
    use rand::{rngs::StdRng, SeedableRng};
    use std::time::Duration;

    #[test]
    fn test_user_id_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10_000 {
            let value = user_id(&mut rng, &RangeConfig::USER_IDS);
            assert!((1..=1_000_000).contains(&value));
        }
    }

    #[test]
    fn test_score_range() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..10_000 {
            let value = score(&mut rng, &RangeConfig::SCORES);
            assert!((100..=10_000).contains(&value));
        }
    }

    /// Single value ranges must always produce that value
    #[test]
    fn test_single_value_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let range = RangeConfig { min: 42, max: 42 };
        assert_eq!(user_id(&mut rng, &range), 42);
        assert_eq!(score(&mut rng, &range), 42);
    }

    #[test]
    fn test_pause_range() {
        let mut rng = StdRng::seed_from_u64(4);
        let range = PauseConfig::default();
        for _ in 0..10_000 {
            let value = pause(&mut rng, &range);
            assert!(value >= Duration::from_millis(500));
            assert!(value < Duration::from_secs(2));
        }
    }

    /// Ranges at the top of the millisecond range must still be sampled
    #[test]
    fn test_pause_large_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let range = PauseConfig {
            min_ms: u64::MAX - 1,
            max_ms: u64::MAX,
        };
        assert!(range.is_valid());

        let value = pause(&mut rng, &range);
        assert!(value >= Duration::from_millis(u64::MAX - 1));
        assert!(value < Duration::from_millis(u64::MAX));
    }

    /// The same seed must produce the same sequence
    #[test]
    fn test_seeded_repeatable() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(
                user_id(&mut a, &RangeConfig::USER_IDS),
                user_id(&mut b, &RangeConfig::USER_IDS)
            );
        }
    }
}
