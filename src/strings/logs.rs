//! # Log Messages
//!
//! Human-readable text attached to structured log events.

pub const SERVICE: &str = "dadbot";

pub const STARTUP: &str = "Bot is now running. Press Ctrl + C to exit.";
pub const SHUTDOWN: &str = "Bot shutting down gracefully";

pub fn shutdown_fail(err: &str) -> String {
    format!("Unable to listen for shutdown signal: {err}")
}

pub fn logged_in(user: &str) -> String {
    format!("Logged in as {user}")
}

pub fn set_display_name_fail(err: &str) -> String {
    format!("Failed to set display name: {err}")
}

pub fn sync_loop_fail(err: &str) -> String {
    format!("Sync loop failed: {err}")
}

pub fn invite_received(room_id: &str) -> String {
    format!("Received invite for room {room_id}")
}

pub fn join_invite_fail(err: &str) -> String {
    format!("Failed to join room after invite: {err}")
}

pub fn send_fail(channel_id: &str, err: &str) -> String {
    format!("Failed to send message to {channel_id}: {err}")
}

pub const MESSAGE_SKIPPED_SELF: &str = "Message skipped - sent by the bot itself";
pub const MESSAGE_SKIPPED_PAUSED: &str = "Message skipped - bot is paused";
pub const MESSAGE_PROCESSED: &str = "Message processed";
pub const PAUSE_TRIGGERED: &str = "Bot paused by trigger word";
pub const PAUSE_REARMED: &str = "Pause re-armed by trigger word";
pub const PAUSE_EXPIRED: &str = "Pause expired, resuming";
pub const DAD_RESPONSE: &str = "Dad response sent";
pub const WIN_LOSE: &str = "Win/lose GIF sent";
pub const GOODNIGHT: &str = "Bot said goodnight by trigger phrase";
pub const GOODNIGHT_RATE_LIMITED: &str = "Goodnight request rate limited";
pub const THERMOSTAT: &str = "Thermostat complaint answered";
pub const BUDGET: &str = "Budget complaint answered";
pub const JOKE_SENT: &str = "Dad joke sent";
pub const JOKE_FAILED: &str = "Failed to fetch dad joke";
pub const JOKE_RATE_LIMITED: &str = "Joke request rate limited";
