//! Deterministic stand-ins for the dispatcher's collaborators.

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::domain::error::TransportError;
use crate::domain::traits::{ChatProvider, Clock, RandomSource, RemarkSource};

/// Clock that only moves when told to.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new() -> Self {
        let start = Utc
            .with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
            .single()
            .unwrap_or_default();
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock() += TimeDelta::from_std(by).unwrap();
    }

    pub fn rewind(&self, by: Duration) {
        *self.now.lock() -= TimeDelta::from_std(by).unwrap();
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

/// Always returns the same value, clamped into the requested range.
pub struct FixedRandom(u64);

impl FixedRandom {
    pub fn new(value: u64) -> Self {
        Self(value)
    }
}

impl RandomSource for FixedRandom {
    fn between(&self, low: u64, high: u64) -> u64 {
        if high < low { low } else { self.0.clamp(low, high) }
    }
}

/// Reproducible pseudo-random source.
pub struct SeededRandom(Mutex<StdRng>);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(Mutex::new(StdRng::seed_from_u64(seed)))
    }
}

impl RandomSource for SeededRandom {
    fn between(&self, low: u64, high: u64) -> u64 {
        if high <= low {
            return low;
        }
        self.0.lock().gen_range(low..=high)
    }
}

/// Chat provider that records every message instead of sending it.
#[derive(Default)]
pub struct RecordingChat {
    sent: Mutex<Vec<(String, String)>>,
    failing: bool,
}

impl RecordingChat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records messages but reports every send as failed.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent.lock().iter().map(|(_, text)| text.clone()).collect()
    }
}

#[async_trait]
impl ChatProvider for RecordingChat {
    async fn send_message(&self, channel_id: &str, content: &str) -> Result<String, String> {
        self.sent
            .lock()
            .push((channel_id.to_string(), content.to_string()));
        if self.failing {
            Err("room not found".to_string())
        } else {
            Ok(format!("$event{}", self.sent.lock().len()))
        }
    }
}

/// Remark source returning a canned joke, or timing out when given `None`.
pub struct StubRemarks {
    reply: Option<String>,
    calls: AtomicUsize,
}

impl StubRemarks {
    pub fn joke(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn timing_out() -> Self {
        Self {
            reply: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemarkSource for StubRemarks {
    async fn fetch(&self) -> Result<String, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone().ok_or(TransportError::Timeout)
    }
}
