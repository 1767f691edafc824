//! # Cooldown Guard
//!
//! A "not more than once every N seconds" gate for a single feature.
//! Each rate-limited trigger owns its own instance; instances never share state.
//!
//! The check and the update of `last_fired` happen inside one critical section,
//! so concurrent callers cannot both pass the gate for the same window.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::traits::Clock;

pub struct Cooldown {
    /// Feature name, used in logs
    name: &'static str,
    window: Duration,
    last_fired: Mutex<Option<DateTime<Utc>>>,
    clock: Arc<dyn Clock>,
}

impl Cooldown {
    pub fn new(name: &'static str, window: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            name,
            window,
            last_fired: Mutex::new(None),
            clock,
        }
    }

    /// Returns `true` and records the current time if the window has elapsed
    /// since the last successful acquire. Returns `false` without touching state otherwise.
    pub fn try_acquire(&self) -> bool {
        let mut last_fired = self.last_fired.lock();
        let now = self.clock.now();

        let ready = match *last_fired {
            None => true,
            // A negative span (clock moved backwards) fails `to_std` and counts as not elapsed
            Some(previous) => (now - previous)
                .to_std()
                .map(|elapsed| elapsed >= self.window)
                .unwrap_or(false),
        };

        if ready {
            *last_fired = Some(now);
        }
        ready
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}
