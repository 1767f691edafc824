//! # Domain Traits
//!
//! Abstract interfaces for the collaborators of the dispatcher: the chat
//! platform, the remark service, the wall clock and the random source.
//! Infrastructure provides the real implementations; tests substitute their own.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::error::TransportError;

/// Abstract interface for a Chat Provider (e.g., Matrix)
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a plain text message to a channel, returning the platform's message id
    async fn send_message(&self, channel_id: &str, content: &str) -> Result<String, String>;
}

/// Source of short remarks (jokes) fetched from an external service.
#[async_trait]
pub trait RemarkSource: Send + Sync {
    async fn fetch(&self) -> Result<String, TransportError>;
}

/// Wall clock used by the pause and cooldown state.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Uniform random choices.
pub trait RandomSource: Send + Sync {
    /// Returns a value in `low..=high`. Implementations return `low` when `high < low`.
    fn between(&self, low: u64, high: u64) -> u64;

    /// Picks one element of `pool` uniformly, `None` if it is empty.
    fn choose<'a>(&self, pool: &[&'a str]) -> Option<&'a str> {
        let last = pool.len().checked_sub(1)?;
        let index = usize::try_from(self.between(0, last as u64)).ok()?;
        pool.get(index).copied()
    }
}
