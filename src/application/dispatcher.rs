//! # Dispatcher
//!
//! Decides what, if anything, to say in reply to one incoming message.
//!
//! Order per message: drop our own messages, drop everything while paused, then walk
//! the trigger table and stop at the first rule that actually produces a reply.
//! A cooldown miss counts as "not handled" and the walk continues.
//!
//! Shared state is only touched through short synchronous calls; the remark fetch
//! and the outbound send happen with no lock held.

use std::sync::Arc;

use crate::application::pause::{PauseTransition, draw_minutes};
use crate::application::state::BotState;
use crate::application::triggers::{self, MatchResult, TriggerKind, TriggerTable};
use crate::domain::traits::{ChatProvider, RandomSource, RemarkSource};
use crate::domain::types::{MessageEvent, Outcome, Response, ResponseKind};
use crate::strings::{logs, messages};

pub struct Dispatcher<C: ChatProvider> {
    bot_id: String,
    chat: Arc<C>,
    table: TriggerTable,
    state: Arc<BotState>,
    remarks: Arc<dyn RemarkSource>,
    random: Arc<dyn RandomSource>,
}

impl<C: ChatProvider> Dispatcher<C> {
    pub fn new(
        bot_id: impl Into<String>,
        chat: Arc<C>,
        table: TriggerTable,
        state: Arc<BotState>,
        remarks: Arc<dyn RemarkSource>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            bot_id: bot_id.into(),
            chat,
            table,
            state,
            remarks,
            random,
        }
    }

    /// Handles one message and sends at most one reply.
    pub async fn dispatch(&self, event: &MessageEvent) -> Outcome {
        if event.author_id == self.bot_id {
            tracing::debug!(event = "message_skipped_self", service = logs::SERVICE, "{}", logs::MESSAGE_SKIPPED_SELF);
            return Outcome::SelfAuthored;
        }

        if self.state.pause.is_active() {
            tracing::debug!(event = "message_skipped_paused", service = logs::SERVICE, "{}", logs::MESSAGE_SKIPPED_PAUSED);
            return Outcome::Paused;
        }

        for (kind, found) in self.table.matches(&event.content) {
            if let Some(response) = self.respond(kind, found).await {
                self.send(&event.channel_id, &response).await;
                return Outcome::Handled(response.kind);
            }
        }

        tracing::info!(event = "message_processed", service = logs::SERVICE, "{}", logs::MESSAGE_PROCESSED);
        Outcome::Unhandled
    }

    async fn respond(&self, kind: TriggerKind, found: MatchResult) -> Option<Response> {
        match kind {
            TriggerKind::Pause => Some(self.pause(&found.matched)),
            TriggerKind::Introduction => {
                let response = triggers::introduction_reply(found.capture.as_deref()?);
                tracing::info!(
                    event = "dad_response_sent",
                    service = logs::SERVICE,
                    response_type = %response.kind,
                    "{}",
                    logs::DAD_RESPONSE
                );
                Some(response)
            }
            TriggerKind::WinLose => {
                tracing::info!(event = "win_lose_response", service = logs::SERVICE, trigger = %found.matched, "{}", logs::WIN_LOSE);
                Some(Response::new(ResponseKind::WinLose, messages::WIN_LOSE_GIF))
            }
            TriggerKind::Goodnight => {
                if !self.state.goodnight_cooldown.try_acquire() {
                    tracing::debug!(
                        event = "goodnight_rate_limited",
                        service = logs::SERVICE,
                        cooldown = self.state.goodnight_cooldown.name(),
                        window_secs = self.state.goodnight_cooldown.window().as_secs(),
                        "{}",
                        logs::GOODNIGHT_RATE_LIMITED
                    );
                    return None;
                }
                let line = self.random.choose(&messages::GOODNIGHT_POOL)?;
                tracing::info!(event = "goodnight_triggered", service = logs::SERVICE, trigger = %found.matched, "{}", logs::GOODNIGHT);
                Some(Response::new(ResponseKind::Goodnight, line))
            }
            TriggerKind::Thermostat => {
                let line = self.random.choose(&messages::THERMOSTAT_POOL)?;
                tracing::info!(event = "thermostat_triggered", service = logs::SERVICE, trigger = %found.matched, "{}", logs::THERMOSTAT);
                Some(Response::new(ResponseKind::Thermostat, line))
            }
            TriggerKind::Budget => {
                tracing::info!(event = "meow_triggered", service = logs::SERVICE, trigger = %found.matched, "{}", logs::BUDGET);
                Some(Response::new(ResponseKind::Budget, messages::BUDGET_LINE))
            }
            TriggerKind::Joke => self.joke().await,
        }
    }

    fn pause(&self, word: &str) -> Response {
        let minutes = draw_minutes(&self.state.pause_range, self.random.as_ref());
        let duration = std::time::Duration::from_secs(minutes.saturating_mul(60));
        let (transition, until) = self.state.pause.pause_for(duration);

        let message = match transition {
            PauseTransition::Started => logs::PAUSE_TRIGGERED,
            PauseTransition::Rearmed => logs::PAUSE_REARMED,
        };
        tracing::info!(
            event = "pause_triggered",
            service = logs::SERVICE,
            pause_minutes = minutes,
            until = %until.to_rfc3339(),
            "{}",
            message
        );
        triggers::pause_reply(word)
    }

    async fn joke(&self) -> Option<Response> {
        if !self.state.joke_cooldown.try_acquire() {
            tracing::debug!(
                event = "joke_rate_limited",
                service = logs::SERVICE,
                cooldown = self.state.joke_cooldown.name(),
                window_secs = self.state.joke_cooldown.window().as_secs(),
                "{}",
                logs::JOKE_RATE_LIMITED
            );
            return None;
        }

        match self.remarks.fetch().await {
            Ok(joke) => {
                tracing::info!(event = "joke_request_fulfilled", service = logs::SERVICE, "{}", logs::JOKE_SENT);
                Some(Response::new(ResponseKind::JokeFulfilled, joke.trim()))
            }
            Err(e) => {
                tracing::error!(
                    event = "joke_request_failed",
                    service = logs::SERVICE,
                    error = %e,
                    "{}",
                    logs::JOKE_FAILED
                );
                Some(Response::new(ResponseKind::JokeFailed, messages::JOKE_FALLBACK))
            }
        }
    }

    /// Fire-and-forget: a failed send is logged, never retried.
    async fn send(&self, channel_id: &str, response: &Response) {
        if let Err(e) = self.chat.send_message(channel_id, &response.text).await {
            tracing::warn!(
                event = "send_failed",
                service = logs::SERVICE,
                response_type = %response.kind,
                "{}",
                logs::send_fail(channel_id, &e)
            );
        }
    }
}
