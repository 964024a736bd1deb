//! Chat message records and the static data the widget is seeded with.

use std::fmt;

use chrono::{DateTime, Local};

/// Name the assistant introduces itself with.
pub const ASSISTANT_NAME: &str = "Manny";

/// First message shown in every new chat session.
pub const WELCOME_TEXT: &str = "Hi! I'm Manny, your SLCM assistant. How can I help you today?";

/// Session-unique message identifier, allocated from a per-widget sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(u64);

impl MessageId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Letter shown in the avatar circle next to the bubble.
    pub fn avatar_initial(self) -> &'static str {
        match self {
            Sender::User => "U",
            Sender::Bot => "M",
        }
    }
}

/// A single chat message. Never mutated after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
}

impl Message {
    pub fn new(id: MessageId, sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            sender,
            timestamp: Local::now(),
        }
    }

    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }

    /// Short `HH:MM` label used on hover.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// A past conversation listed in the fullscreen sidebar (decorative only).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChatHistoryEntry {
    pub id: u32,
    pub title: &'static str,
    pub last_message: &'static str,
}

/// Conversations shown in the fullscreen history sidebar.
pub const CHAT_HISTORY: [ChatHistoryEntry; 5] = [
    ChatHistoryEntry {
        id: 1,
        title: "Library Inquiry",
        last_message: "Book availability question",
    },
    ChatHistoryEntry {
        id: 2,
        title: "Exam Schedule",
        last_message: "When is my final exam?",
    },
    ChatHistoryEntry {
        id: 3,
        title: "Counselling",
        last_message: "Career guidance session",
    },
    ChatHistoryEntry {
        id: 4,
        title: "Fee Payment",
        last_message: "Payment deadline query",
    },
    ChatHistoryEntry {
        id: 5,
        title: "Course Registration",
        last_message: "How to add electives?",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_initials() {
        assert_eq!(Sender::Bot.avatar_initial(), "M");
        assert_eq!(Sender::User.avatar_initial(), "U");
    }

    #[test]
    fn test_message_new_sets_fields() {
        let msg = Message::new(MessageId::new(7), Sender::User, "hello");
        assert_eq!(msg.id.get(), 7);
        assert_eq!(msg.text, "hello");
        assert!(msg.is_from_user());
        assert_eq!(msg.time_label().len(), 5);
    }

    #[test]
    fn test_chat_history_ids_unique() {
        let mut ids: Vec<u32> = CHAT_HISTORY.iter().map(|entry| entry.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), CHAT_HISTORY.len());
        assert_eq!(CHAT_HISTORY[1].last_message, "When is my final exam?");
    }
}
