//! # Infrastructure Layer
//!
//! Handles interactions with external systems and services.
//! Implements the traits defined in the Domain layer (ChatProvider, RemarkSource, Clock, RandomSource).

pub mod matrix;
pub mod remarks;
pub mod system;
