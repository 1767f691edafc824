//! # Bot State
//!
//! The mutable state shared by every dispatch: the pause flag and one cooldown per
//! rate-limited trigger. Lives in memory only and starts fresh on every launch.

use std::sync::Arc;

use crate::application::cooldown::Cooldown;
use crate::application::pause::PauseState;
use crate::domain::config::{PauseConfig, TriggersConfig};
use crate::domain::traits::Clock;

pub struct BotState {
    pub pause: PauseState,
    pub pause_range: PauseConfig,
    pub joke_cooldown: Cooldown,
    pub goodnight_cooldown: Cooldown,
}

impl BotState {
    pub fn new(config: &TriggersConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            pause: PauseState::new(clock.clone()),
            pause_range: config.pause.clone(),
            joke_cooldown: Cooldown::new("joke", config.cooldowns.joke(), clock.clone()),
            goodnight_cooldown: Cooldown::new("goodnight", config.cooldowns.goodnight(), clock),
        }
    }
}
