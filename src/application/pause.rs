//! # Pause State
//!
//! Process-wide "gone for a smoke" mode. While paused, the dispatcher drops every message.
//!
//! There is no timer: expiry is noticed by whichever reader first sees `now >= until`,
//! and that reader performs the transition back to idle. Both the read and the
//! transition happen under one lock, so exactly one caller observes each expiry.

use chrono::{DateTime, TimeDelta, Utc};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::config::PauseConfig;
use crate::domain::traits::{Clock, RandomSource};
use crate::strings::logs;

/// Result of reading the pause state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseObservation {
    Active(DateTime<Utc>),
    /// This read saw the pause run out and cleared it
    Expired,
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseTransition {
    Started,
    /// Already paused; expiry reset to a fresh window
    Rearmed,
}

pub struct PauseState {
    until: Mutex<Option<DateTime<Utc>>>,
    clock: Arc<dyn Clock>,
}

impl PauseState {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            until: Mutex::new(None),
            clock,
        }
    }

    /// Reads the state, clearing an expired pause.
    pub fn observe(&self) -> PauseObservation {
        let mut until = self.until.lock();
        let now = self.clock.now();
        match *until {
            Some(expires_at) if now < expires_at => PauseObservation::Active(expires_at),
            Some(_) => {
                *until = None;
                PauseObservation::Expired
            }
            None => PauseObservation::Idle,
        }
    }

    pub fn is_active(&self) -> bool {
        match self.observe() {
            PauseObservation::Active(_) => true,
            PauseObservation::Expired => {
                tracing::info!(event = "pause_expired", service = logs::SERVICE, "{}", logs::PAUSE_EXPIRED);
                false
            }
            PauseObservation::Idle => false,
        }
    }

    /// Pauses for `duration` from now. A pause that is still running is re-armed:
    /// its expiry is replaced, never extended by the remaining time.
    pub fn pause_for(&self, duration: Duration) -> (PauseTransition, DateTime<Utc>) {
        let mut until = self.until.lock();
        let now = self.clock.now();

        let transition = match *until {
            Some(expires_at) if now < expires_at => PauseTransition::Rearmed,
            _ => PauseTransition::Started,
        };
        let expires_at = add_duration(now, duration);
        *until = Some(expires_at);
        (transition, expires_at)
    }
}

/// Draws a whole number of minutes within the configured bounds.
pub fn draw_minutes(range: &PauseConfig, random: &dyn RandomSource) -> u64 {
    random.between(range.min_minutes, range.max_minutes)
}

fn add_duration(at: DateTime<Utc>, duration: Duration) -> DateTime<Utc> {
    TimeDelta::from_std(duration)
        .ok()
        .and_then(|delta| at.checked_add_signed(delta))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{FixedRandom, ManualClock, SeededRandom};

    const FIFTEEN_MINUTES: Duration = Duration::from_secs(15 * 60);

    fn paused_state() -> (PauseState, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        (PauseState::new(clock.clone()), clock)
    }

    #[test]
    fn test_idle_by_default() {
        let (state, _clock) = paused_state();
        assert_eq!(state.observe(), PauseObservation::Idle);
        assert!(!state.is_active());
    }

    #[test]
    fn test_active_until_expiry() {
        let (state, clock) = paused_state();
        let (transition, expires_at) = state.pause_for(FIFTEEN_MINUTES);
        assert_eq!(transition, PauseTransition::Started);
        assert_eq!(expires_at, clock.now() + TimeDelta::minutes(15));

        clock.advance(FIFTEEN_MINUTES - Duration::from_millis(1));
        assert_eq!(state.observe(), PauseObservation::Active(expires_at));
        assert!(state.is_active());
    }

    #[test]
    fn test_inactive_at_expiry_and_transition_observed_once() {
        let (state, clock) = paused_state();
        state.pause_for(FIFTEEN_MINUTES);
        clock.advance(FIFTEEN_MINUTES);

        assert_eq!(state.observe(), PauseObservation::Expired);
        assert_eq!(state.observe(), PauseObservation::Idle);
        assert!(!state.is_active());
    }

    #[test]
    fn test_concurrent_reads_at_boundary() {
        let (state, clock) = paused_state();
        state.pause_for(FIFTEEN_MINUTES);
        clock.advance(FIFTEEN_MINUTES);

        let observations: Vec<PauseObservation> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..32).map(|_| scope.spawn(|| state.observe())).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let expired = observations
            .iter()
            .filter(|o| **o == PauseObservation::Expired)
            .count();
        assert_eq!(expired, 1);
        assert!(
            observations
                .iter()
                .all(|o| !matches!(o, PauseObservation::Active(_)))
        );
    }

    #[test]
    fn test_retrigger_rearms_without_accumulating() {
        let (state, clock) = paused_state();
        state.pause_for(FIFTEEN_MINUTES);
        clock.advance(Duration::from_secs(60));

        let (transition, expires_at) = state.pause_for(FIFTEEN_MINUTES);
        assert_eq!(transition, PauseTransition::Rearmed);
        // Fresh window from the second trigger, not 15 + 15 minutes
        assert_eq!(expires_at, clock.now() + TimeDelta::minutes(15));
    }

    #[test]
    fn test_trigger_after_expiry_starts_new_pause() {
        let (state, clock) = paused_state();
        state.pause_for(FIFTEEN_MINUTES);
        clock.advance(FIFTEEN_MINUTES + Duration::from_secs(1));

        let (transition, _) = state.pause_for(FIFTEEN_MINUTES);
        assert_eq!(transition, PauseTransition::Started);
        assert!(state.is_active());
    }

    #[test]
    fn test_draw_minutes_respects_bounds() {
        let range = PauseConfig::default();
        assert_eq!(draw_minutes(&range, &FixedRandom::new(0)), 15);
        assert_eq!(draw_minutes(&range, &FixedRandom::new(99)), 20);

        let random = SeededRandom::new(7);
        for _ in 0..200 {
            let minutes = draw_minutes(&range, &random);
            assert!((15..=20).contains(&minutes), "drew {minutes}");
        }
    }

    #[test]
    fn test_oversized_duration_saturates() {
        let (state, _clock) = paused_state();
        let (_, expires_at) = state.pause_for(Duration::MAX);
        assert_eq!(expires_at, DateTime::<Utc>::MAX_UTC);
        assert!(state.is_active());
    }
}
