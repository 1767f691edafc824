//! # Strings Module
//!
//! Centralizes user-facing replies and log messages.
//! Keeps the wording in one place so the trigger logic stays free of literals.

pub mod logs;
pub mod messages;
