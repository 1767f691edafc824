//! # Matrix Service Adapter
//!
//! Implements the `ChatProvider` trait for the Matrix protocol using the `matrix_sdk`.
//! Also owns the session plumbing the dispatcher does not care about: login,
//! display name, turning room events into `MessageEvent`s, and accepting invites.

use anyhow::{Context, Result};
use async_trait::async_trait;
use matrix_sdk::room::Room;
use matrix_sdk::ruma::RoomId;
use matrix_sdk::ruma::events::room::member::{MembershipState, StrippedRoomMemberEvent};
use matrix_sdk::ruma::events::room::message::{
    MessageType, RoomMessageEventContent, SyncRoomMessageEvent,
};
use matrix_sdk::Client;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::application::dispatcher::Dispatcher;
use crate::domain::config::MatrixConfig;
use crate::domain::traits::ChatProvider;
use crate::domain::types::MessageEvent;
use crate::strings::logs;

#[derive(Clone)]
pub struct MatrixService {
    client: Client,
}

impl MatrixService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn room(&self, channel_id: &str) -> Result<Room, String> {
        let room_id = RoomId::parse(channel_id).map_err(|e| e.to_string())?;
        self.client
            .get_room(&room_id)
            .ok_or_else(|| format!("Not a member of room {channel_id}"))
    }
}

#[async_trait]
impl ChatProvider for MatrixService {
    async fn send_message(&self, channel_id: &str, content: &str) -> Result<String, String> {
        tracing::info!("Bot sending message to {}: {}", channel_id, content);
        let room = self.room(channel_id)?;
        room.send(RoomMessageEventContent::text_plain(content))
            .await
            .map(|resp| resp.event_id.to_string())
            .map_err(|e| e.to_string())
    }
}

/// Builds a client for the configured homeserver and logs in.
pub async fn connect(config: &MatrixConfig, password: &str) -> Result<Client> {
    let client = Client::builder()
        .homeserver_url(&config.homeserver)
        .build()
        .await
        .with_context(|| format!("Failed to build client for {}", config.homeserver))?;

    client
        .matrix_auth()
        .login_username(&config.username, password)
        .initial_device_display_name("dadbot")
        .send()
        .await
        .context("Matrix login failed")?;

    tracing::info!(event = "logged_in", service = logs::SERVICE, "{}", logs::logged_in(&config.username));

    if let Some(name) = &config.display_name {
        if let Err(e) = client.account().set_display_name(Some(name.as_str())).await {
            tracing::warn!("{}", logs::set_display_name_fail(&e.to_string()));
        }
    }

    Ok(client)
}

/// Wires room messages into the dispatcher and auto-accepts invites.
///
/// Each message is dispatched on its own task so a slow remark fetch in one
/// room never holds up another. Messages older than `started_at` (backlog
/// replayed by the first sync) are ignored.
pub fn register_handlers(
    client: &Client,
    dispatcher: Arc<Dispatcher<MatrixService>>,
    started_at: SystemTime,
) {
    client.add_event_handler(move |ev: SyncRoomMessageEvent, room: Room| {
        let dispatcher = dispatcher.clone();
        async move {
            let Some(original_msg) = ev.as_original() else {
                return;
            };

            let event_time =
                UNIX_EPOCH + Duration::from_millis(ev.origin_server_ts().get().into());
            if event_time < started_at {
                return;
            }

            let MessageType::Text(text_content) = &original_msg.content.msgtype else {
                return;
            };

            let event = MessageEvent::new(
                original_msg.sender.as_str(),
                room.room_id().as_str(),
                text_content.body.clone(),
            );
            tracing::debug!("Received message from {}: {}", event.author_id, event.content);

            tokio::spawn(async move {
                dispatcher.dispatch(&event).await;
            });
        }
    });

    client.add_event_handler(|ev: StrippedRoomMemberEvent, room: Room| async move {
        if ev.content.membership != MembershipState::Invite
            || ev.state_key.as_str() != room.own_user_id().as_str()
        {
            return;
        }
        tracing::info!("{}", logs::invite_received(room.room_id().as_str()));
        if let Err(e) = room.join().await {
            tracing::warn!("{}", logs::join_invite_fail(&e.to_string()));
        }
    });
}
