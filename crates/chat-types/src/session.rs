use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::message::ChatMessage;

/// Name of the reserved category holding archived chats.
pub const ARCHIVE_CATEGORY: &str = "archive";

/// A persisted chat without its message body, as listed by `/api/chats`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSummary {
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "file")]
    pub file_id: String,
}

/// Category name → chats in that category, in server order.
///
/// The wire form is a plain JSON object. Key order on the wire carries no
/// meaning; use [`ChatDirectory::categories`] for the rendered order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatDirectory {
    entries: HashMap<String, Vec<ChatSummary>>,
}

impl ChatDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: impl Into<String>, chats: Vec<ChatSummary>) {
        self.entries.insert(category.into(), chats);
    }

    /// Categories in rendered order: alphabetical, with the archive last.
    pub fn categories(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_by(|a, b| {
            (*a == ARCHIVE_CATEGORY)
                .cmp(&(*b == ARCHIVE_CATEGORY))
                .then_with(|| a.cmp(b))
        });
        names
    }

    pub fn chats(&self, category: &str) -> &[ChatSummary] {
        self.entries
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, category: &str) -> bool {
        self.entries.contains_key(category)
    }

    pub fn contains_file(&self, category: &str, file_id: &str) -> bool {
        self.chats(category).iter().any(|c| c.file_id == file_id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// A full chat as returned by `/api/chat`, `/api/load` and `/api/message`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSession {
    #[serde(rename = "file", default)]
    pub file_id: String,
    #[serde(rename = "name", default)]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

impl ChatSession {
    /// The active system prompt, if the first message carries one.
    pub fn system_prompt(&self) -> Option<&str> {
        self.messages
            .first()
            .filter(|m| m.is_system())
            .map(|m| m.content.as_str())
    }

    /// Messages shown in the message pane: everything but a leading system message.
    pub fn visible_messages(&self) -> &[ChatMessage] {
        match self.messages.first() {
            Some(first) if first.is_system() => &self.messages[1..],
            _ => &self.messages,
        }
    }

    /// The stored summary, treating an empty string as absent.
    pub fn summary_text(&self) -> Option<&str> {
        self.summary.as_deref().filter(|s| !s.is_empty())
    }
}
