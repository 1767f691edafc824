//! # Application Layer
//!
//! Contains the core business logic of the bot: the trigger table, the pause and
//! cooldown state, and the dispatcher that ties them together.

pub mod cooldown;
pub mod dispatcher;
pub mod logging;
pub mod pause;
pub mod state;
pub mod triggers;

#[cfg(test)]
pub mod test_support;
