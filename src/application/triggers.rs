//! # Trigger Table
//!
//! The fixed content rules, in the order they are evaluated, plus the pure
//! functions that turn a match into reply text. Nothing here holds state;
//! cooldowns, pausing and the remote joke call are the dispatcher's business.
//!
//! Priority (first handled wins):
//! 1. Pause words (`cigs`, `cigarette(s)`, `milk`) anywhere in the message
//! 2. Introductions (`I'm ...`, `I am ...`)
//! 3. Fixed phrases: frustration, good night, thermostat, budget
//! 4. `tell me a joke`

use regex::Regex;

use crate::domain::types::{Response, ResponseKind};
use crate::strings::messages;

/// What a matcher pulled out of the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// The matched text as it appeared in the message (phrases: normalized)
    pub matched: String,
    /// First capture group, if the matcher has one
    pub capture: Option<String>,
}

impl MatchResult {
    pub fn new(matched: impl Into<String>) -> Self {
        Self {
            matched: matched.into(),
            capture: None,
        }
    }
}

/// Declarative test of a message against one rule.
pub trait Matcher: Send + Sync {
    fn captures(&self, text: &str) -> Option<MatchResult>;
}

/// Matches a regular expression anywhere in the message.
pub struct RegexMatcher {
    regex: Regex,
}

impl RegexMatcher {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }
}

impl Matcher for RegexMatcher {
    fn captures(&self, text: &str) -> Option<MatchResult> {
        let caps = self.regex.captures(text)?;
        let whole = caps.get(0)?;
        Some(MatchResult {
            matched: whole.as_str().to_string(),
            capture: caps.get(1).map(|m| m.as_str().trim().to_string()),
        })
    }
}

/// Matches when the whole message (trimmed, case-insensitive) is one of the phrases.
pub struct PhraseMatcher {
    phrases: Vec<String>,
}

impl PhraseMatcher {
    pub fn new(phrases: &[&str]) -> Self {
        Self {
            phrases: phrases.iter().map(|p| p.to_lowercase()).collect(),
        }
    }
}

impl Matcher for PhraseMatcher {
    fn captures(&self, text: &str) -> Option<MatchResult> {
        let normalized = text.trim().to_lowercase();
        self.phrases
            .iter()
            .any(|p| *p == normalized)
            .then(|| MatchResult::new(normalized))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    Pause,
    Introduction,
    WinLose,
    Goodnight,
    Thermostat,
    Budget,
    Joke,
}

pub struct TriggerRule {
    pub kind: TriggerKind,
    pub matcher: Box<dyn Matcher>,
}

impl TriggerRule {
    pub fn new(kind: TriggerKind, matcher: impl Matcher + 'static) -> Self {
        Self {
            kind,
            matcher: Box::new(matcher),
        }
    }
}

const PAUSE_PATTERN: &str = r"(?i)\b(cigs|cigarettes?|milk)\b";
const INTRODUCTION_PATTERN: &str = r"(?i)\bI(?:['’]?m|\s+am)\s+(\S.*)";

const WIN_LOSE_PHRASES: &[&str] = &["can't win", "cant win", "keep losing"];
const GOODNIGHT_PHRASES: &[&str] = &["good night", "goodnight"];
const THERMOSTAT_PHRASES: &[&str] = &["too hot", "too cold"];
const BUDGET_PHRASES: &[&str] = &["budget", "money", "dollar", "dollars"];
const JOKE_PHRASES: &[&str] = &["tell me a joke"];

/// Ordered rule set.
pub struct TriggerTable {
    rules: Vec<TriggerRule>,
}

impl TriggerTable {
    pub fn new(rules: Vec<TriggerRule>) -> Self {
        Self { rules }
    }

    /// The reference rule set in evaluation order.
    pub fn standard() -> Result<Self, regex::Error> {
        Ok(Self::new(vec![
            TriggerRule::new(TriggerKind::Pause, RegexMatcher::new(PAUSE_PATTERN)?),
            TriggerRule::new(
                TriggerKind::Introduction,
                RegexMatcher::new(INTRODUCTION_PATTERN)?,
            ),
            TriggerRule::new(TriggerKind::WinLose, PhraseMatcher::new(WIN_LOSE_PHRASES)),
            TriggerRule::new(TriggerKind::Goodnight, PhraseMatcher::new(GOODNIGHT_PHRASES)),
            TriggerRule::new(
                TriggerKind::Thermostat,
                PhraseMatcher::new(THERMOSTAT_PHRASES),
            ),
            TriggerRule::new(TriggerKind::Budget, PhraseMatcher::new(BUDGET_PHRASES)),
            TriggerRule::new(TriggerKind::Joke, PhraseMatcher::new(JOKE_PHRASES)),
        ]))
    }

    /// Lazily yields matching rules in priority order. Later matchers only run
    /// if the caller keeps pulling.
    pub fn matches<'a>(
        &'a self,
        text: &'a str,
    ) -> impl Iterator<Item = (TriggerKind, MatchResult)> + Send + 'a {
        self.rules
            .iter()
            .filter_map(move |rule| rule.matcher.captures(text).map(|m| (rule.kind, m)))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

pub fn pause_reply(word: &str) -> Response {
    Response::new(ResponseKind::PauseTriggered, messages::pause_ack(word))
}

/// Reply to "I'm <name>". Claiming to be dad gets the paradox line.
pub fn introduction_reply(name: &str) -> Response {
    let name = name.trim();
    if name.eq_ignore_ascii_case("dad") {
        Response::new(ResponseKind::DadParadox, messages::SELF_PARADOX)
    } else {
        Response::new(ResponseKind::DadJoke, messages::dad_greeting(name))
    }
}
