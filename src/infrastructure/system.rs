//! Production clock and random source.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::domain::traits::{Clock, RandomSource};

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Uses the thread-local RNG of whichever worker thread makes the call.
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn between(&self, low: u64, high: u64) -> u64 {
        if high <= low {
            return low;
        }
        rand::thread_rng().gen_range(low..=high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_random_stays_in_range() {
        for _ in 0..500 {
            let value = ThreadRandom.between(15, 20);
            assert!((15..=20).contains(&value));
        }
        assert_eq!(ThreadRandom.between(4, 4), 4);
        assert_eq!(ThreadRandom.between(9, 3), 9);
    }

    #[test]
    fn test_choose_covers_pool() {
        let pool = ["a", "b"];
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(ThreadRandom.choose(&pool).unwrap());
        }
        assert_eq!(seen.len(), 2);
        assert_eq!(ThreadRandom.choose(&[]), None);
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let first = SystemClock.now();
        let second = SystemClock.now();
        assert!(second >= first);
    }
}
