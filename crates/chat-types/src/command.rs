//! Typed chat commands.
//!
//! Every command travels through `/api/message` as the `message` field; the
//! slash form below is the only place the in-band convention appears.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatCommand {
    /// Plain user message
    Message(String),
    /// Replace the system prompt of the active chat
    UpdateSystemPrompt(String),
    /// Start a fresh chat
    StartNewSession,
    Summarize,
    Search(String),
    ListModels,
    SetModel(String),
    ListPrompts,
    UsePrompt(String),
    SystemFromPrompt(String),
    SavePrompt { name: String, text: String },
    Save(String),
    Info,
    /// Export the active chat; the server picks a name when `None`
    Export(Option<String>),
}

impl ChatCommand {
    /// Encode as the `message` field of `/api/message`.
    pub fn to_wire(&self) -> String {
        match self {
            ChatCommand::Message(text) => text.clone(),
            ChatCommand::UpdateSystemPrompt(text) => format!("/system {}", text),
            ChatCommand::StartNewSession => "/new".to_string(),
            ChatCommand::Summarize => "/summary".to_string(),
            ChatCommand::Search(term) => format!("/search {}", term),
            ChatCommand::ListModels => "/model select".to_string(),
            ChatCommand::SetModel(name) => format!("/model {}", name),
            ChatCommand::ListPrompts => "/prompt list".to_string(),
            ChatCommand::UsePrompt(name) => format!("/prompt use {}", name),
            ChatCommand::SystemFromPrompt(name) => format!("/prompt sys {}", name),
            ChatCommand::SavePrompt { name, text } => format!("/prompt new {} {}", name, text),
            ChatCommand::Save(name) => format!("/save {}", name),
            ChatCommand::Info => "/info".to_string(),
            ChatCommand::Export(Some(name)) => format!("/export {}", name),
            ChatCommand::Export(None) => "/export".to_string(),
        }
    }

    /// Short label for logs and the status line
    pub fn label(&self) -> &'static str {
        match self {
            ChatCommand::Message(_) => "message",
            ChatCommand::UpdateSystemPrompt(_) => "system prompt",
            ChatCommand::StartNewSession => "new chat",
            ChatCommand::Summarize => "summary",
            ChatCommand::Search(_) => "search",
            ChatCommand::ListModels => "models",
            ChatCommand::SetModel(_) => "set model",
            ChatCommand::ListPrompts => "prompts",
            ChatCommand::UsePrompt(_) => "use prompt",
            ChatCommand::SystemFromPrompt(_) => "system from prompt",
            ChatCommand::SavePrompt { .. } => "save prompt",
            ChatCommand::Save(_) => "save",
            ChatCommand::Info => "info",
            ChatCommand::Export(_) => "export",
        }
    }
}
