use serde::{Deserialize, Serialize};

/// Request categories. Responses of a superseding kind are applied only if
/// no newer request of the same kind was started in the meantime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestKind {
    /// `/api/chats`
    Directory,
    /// Anything that returns a chat to render
    Session,
    /// Archive, restore, delete, clear archive
    Mutation,
    /// API key and server update
    Settings,
}

impl RequestKind {
    pub fn supersedes(&self) -> bool {
        matches!(self, RequestKind::Directory | RequestKind::Session)
    }
}

/// Events emitted by the chat controller.
/// UI drains these for status updates and repaints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViewEvent {
    RequestStarted { kind: RequestKind, label: String },

    RequestFinished { kind: RequestKind, label: String },

    /// A newer request of the same kind made this response obsolete
    Superseded { kind: RequestKind, label: String },

    RequestFailed { kind: RequestKind, label: String, message: String },

    DirectoryLoaded { categories: usize },

    /// A chat was rendered into the message pane
    SessionRendered { file_id: String, system_prompt: String },

    /// The server stored a new API key
    ApiKeySaved,

    /// The page should reload after the given delay
    ReloadScheduled { delay_ms: u32 },
}

impl ViewEvent {
    /// Whether this event ends a request started with `RequestStarted`
    pub fn ends_request(&self) -> bool {
        matches!(
            self,
            ViewEvent::RequestFinished { .. }
                | ViewEvent::Superseded { .. }
                | ViewEvent::RequestFailed { .. }
        )
    }
}
