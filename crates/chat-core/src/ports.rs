//! Port traits — the hexagonal architecture boundary.
//!
//! The backend port is defined here in `chat-core` (pure Rust).
//! The HTTP implementation lives in `chat-platform`.

use async_trait::async_trait;
use chat_types::{
    Result,
    command::ChatCommand,
    result::ActionResponse,
    session::{ChatDirectory, ChatSession},
};

// ─── Backend Port ────────────────────────────────────────────

#[async_trait(?Send)]
pub trait ChatBackend {
    /// `GET /api/chats`
    async fn list_chats(&self) -> Result<ChatDirectory>;

    /// `GET /api/chat` — the most recent chat
    async fn current_chat(&self) -> Result<ChatSession>;

    /// `POST /api/load`
    async fn load_chat(&self, file_id: &str) -> Result<ActionResponse>;

    /// `POST /api/message` with the command's wire form
    async fn send(&self, command: &ChatCommand) -> Result<ActionResponse>;

    /// `POST /api/archive`
    async fn archive(&self, file_id: &str) -> Result<()>;

    /// `POST /api/restore`
    async fn restore(&self, file_id: &str) -> Result<()>;

    /// `POST /api/delete`
    async fn delete(&self, file_id: &str) -> Result<()>;

    /// `POST /api/clear-archive`
    async fn clear_archive(&self) -> Result<()>;

    /// `POST /api/api-key`
    async fn set_api_key(&self, api_key: &str) -> Result<()>;

    /// `POST /api/update` — the server refreshes its code and restarts
    async fn trigger_update(&self) -> Result<()>;
}
