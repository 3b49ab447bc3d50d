use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

//
// ─── TURNS ────────────────────────────────────────────────────────────────────
//

/// Who authored a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    /// A system prompt (the bot asking a question or announcing results).
    Bot,
    /// The respondent's reply, echoed verbatim.
    User,
}

/// A single turn in the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: Speaker,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    #[must_use]
    pub fn new(speaker: Speaker, content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            speaker,
            content: content.into(),
            timestamp,
        }
    }
}

//
// ─── TRANSCRIPT ───────────────────────────────────────────────────────────────
//

/// Ordered, append-only conversation log.
///
/// Turns are never mutated or reordered once appended; a session reset
/// replaces the whole transcript rather than clearing it in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_bot(&mut self, content: impl Into<String>, at: DateTime<Utc>) {
        self.turns.push(Turn::new(Speaker::Bot, content, at));
    }

    pub fn push_user(&mut self, content: impl Into<String>, at: DateTime<Utc>) {
        self.turns.push(Turn::new(Speaker::User, content, at));
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The most recent turn, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }
}
