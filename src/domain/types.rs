//! # Domain Types
//!
//! Values that flow through the dispatch pipeline: the inbound message,
//! the kind of reply produced, and the terminal outcome of one dispatch.

/// A chat message as delivered by the platform adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEvent {
    pub author_id: String,
    pub channel_id: String,
    pub content: String,
}

impl MessageEvent {
    pub fn new(
        author_id: impl Into<String>,
        channel_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            author_id: author_id.into(),
            channel_id: channel_id.into(),
            content: content.into(),
        }
    }
}

/// Which reply a handled message produced. Doubles as the log tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    PauseTriggered,
    DadJoke,
    DadParadox,
    WinLose,
    Goodnight,
    Thermostat,
    Budget,
    JokeFulfilled,
    JokeFailed,
}

impl ResponseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseKind::PauseTriggered => "pause_triggered",
            ResponseKind::DadJoke => "dad_joke",
            ResponseKind::DadParadox => "dad_paradox",
            ResponseKind::WinLose => "win_lose_response",
            ResponseKind::Goodnight => "goodnight_triggered",
            ResponseKind::Thermostat => "thermostat_triggered",
            ResponseKind::Budget => "meow_triggered",
            ResponseKind::JokeFulfilled => "joke_request_fulfilled",
            ResponseKind::JokeFailed => "joke_request_failed",
        }
    }
}

impl std::fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reply ready to be sent, tagged with what produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub kind: ResponseKind,
    pub text: String,
}

impl Response {
    pub fn new(kind: ResponseKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Terminal state of a single dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    SelfAuthored,
    Paused,
    Handled(ResponseKind),
    Unhandled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_kind_tags() {
        assert_eq!(ResponseKind::DadJoke.as_str(), "dad_joke");
        assert_eq!(ResponseKind::DadParadox.as_str(), "dad_paradox");
        assert_eq!(ResponseKind::Budget.to_string(), "meow_triggered");
        assert_eq!(ResponseKind::JokeFailed.as_str(), "joke_request_failed");
    }
}
