//! Chat view model — the state behind every rendered view.
//!
//! Holds the chat directory, the selected category, the active chat and the
//! message pane built from it. All transitions are synchronous; network
//! round-trips are driven by [`crate::controller::ChatController`], which
//! hands responses back in together with the [`Ticket`] they were issued
//! under. Responses whose ticket is no longer current are rejected.

use chat_types::{
    config::ClientConfig,
    error::ChatError,
    event::RequestKind,
    message::{ChatMessage, Role},
    result::{ActionResult, ResultBlock},
    session::{ChatDirectory, ChatSession, ChatSummary, ARCHIVE_CATEGORY},
};

use crate::markdown;
use crate::requests::{RequestTracker, Ticket};

/// Visual style of a block in the message pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStyle {
    User,
    Assistant,
    System,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockBody {
    /// Output of [`markdown::to_html`]
    Html(String),
    /// Literal text, never interpreted as markup
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneBlock {
    pub style: BlockStyle,
    pub body: BlockBody,
    /// Shown before the server confirmed it; dropped by the next render
    pub optimistic: bool,
}

impl PaneBlock {
    fn html(style: BlockStyle, markdown_source: &str) -> Self {
        Self {
            style,
            body: BlockBody::Html(markdown::to_html(markdown_source)),
            optimistic: false,
        }
    }

    fn text(style: BlockStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            body: BlockBody::Text(text.into()),
            optimistic: false,
        }
    }

    fn from_message(message: &ChatMessage) -> Self {
        let style = match message.role {
            Role::User => BlockStyle::User,
            Role::Assistant => BlockStyle::Assistant,
            Role::System => BlockStyle::System,
        };
        Self::html(style, &message.content)
    }
}

/// Controls offered for a file entry in the file list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Archive,
    Restore,
    DeleteForever,
}

impl FileAction {
    pub fn label(&self) -> &'static str {
        match self {
            FileAction::Archive => "Archive",
            FileAction::Restore => "Restore",
            FileAction::DeleteForever => "Delete",
        }
    }
}

/// A destructive action waiting for the user to confirm it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    DeleteForever { file_id: String },
    ClearArchive,
}

impl Confirmation {
    pub fn prompt(&self) -> String {
        match self {
            Confirmation::DeleteForever { file_id } => {
                format!("Permanently delete {}? This cannot be undone.", file_id)
            }
            Confirmation::ClearArchive => {
                "Permanently delete every archived chat? This cannot be undone.".to_string()
            }
        }
    }
}

/// A failed request, shown until a request of the same kind succeeds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestError {
    pub kind: RequestKind,
    pub label: String,
    pub message: String,
}

pub struct ChatViewModel {
    config: ClientConfig,
    directory: ChatDirectory,
    categories: Vec<String>,
    current_tab: Option<String>,
    session: Option<ChatSession>,
    pane: Vec<PaneBlock>,
    system_prompt: String,
    summary: Option<String>,
    nav_open: bool,
    pending_confirmation: Option<Confirmation>,
    last_error: Option<RequestError>,
    requests: RequestTracker,
}

impl ChatViewModel {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            directory: ChatDirectory::new(),
            categories: Vec::new(),
            current_tab: None,
            session: None,
            pane: Vec::new(),
            system_prompt: String::new(),
            summary: None,
            nav_open: true,
            pending_confirmation: None,
            last_error: None,
            requests: RequestTracker::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // ─── Requests ────────────────────────────────────────────

    pub fn begin_request(&mut self, kind: RequestKind) -> Ticket {
        self.requests.begin(kind)
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.requests.is_current(ticket)
    }

    /// Record a failed request. Returns false when the failure belongs to a
    /// superseded request and was ignored.
    pub fn record_failure(&mut self, ticket: Ticket, label: &str, error: &ChatError) -> bool {
        if !self.requests.is_current(&ticket) {
            return false;
        }
        if ticket.kind == RequestKind::Session {
            self.pane.push(PaneBlock::text(
                BlockStyle::Error,
                format!("Request failed ({}): {}", label, error),
            ));
        }
        self.last_error = Some(RequestError {
            kind: ticket.kind,
            label: label.to_string(),
            message: error.to_string(),
        });
        true
    }

    fn clear_error_of(&mut self, kind: RequestKind) {
        if self.last_error.as_ref().is_some_and(|e| e.kind == kind) {
            self.last_error = None;
        }
    }

    pub fn last_error(&self) -> Option<&RequestError> {
        self.last_error.as_ref()
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    // ─── Directory ───────────────────────────────────────────

    /// Replace the directory. Keeps the selected category when it still
    /// exists, otherwise selects the first one in rendered order.
    pub fn apply_directory(&mut self, ticket: Ticket, directory: ChatDirectory) -> bool {
        if !self.requests.is_current(&ticket) {
            return false;
        }
        self.categories = directory
            .categories()
            .into_iter()
            .map(str::to_string)
            .collect();
        let keep = self
            .current_tab
            .as_deref()
            .is_some_and(|tab| directory.contains(tab));
        if !keep {
            self.current_tab = self.categories.first().cloned();
        }
        self.directory = directory;
        self.clear_error_of(RequestKind::Directory);
        true
    }

    /// Categories in rendered order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn current_tab(&self) -> Option<&str> {
        self.current_tab.as_deref()
    }

    /// Select a category. Unknown names are ignored.
    pub fn select_category(&mut self, name: &str) -> bool {
        if !self.directory.contains(name) {
            log::warn!("Ignoring selection of unknown category {:?}", name);
            return false;
        }
        self.current_tab = Some(name.to_string());
        true
    }

    /// Chats listed under the selected category
    pub fn files(&self) -> &[ChatSummary] {
        match &self.current_tab {
            Some(tab) => self.directory.chats(tab),
            None => &[],
        }
    }

    pub fn is_archive_selected(&self) -> bool {
        self.current_tab.as_deref() == Some(ARCHIVE_CATEGORY)
    }

    /// Per-file controls for the selected category. Restore and delete are
    /// only offered inside the archive.
    pub fn file_actions(&self) -> &'static [FileAction] {
        if self.is_archive_selected() {
            &[FileAction::Restore, FileAction::DeleteForever]
        } else if self.current_tab.is_some() {
            &[FileAction::Archive]
        } else {
            &[]
        }
    }

    pub fn can_clear_archive(&self) -> bool {
        self.is_archive_selected()
    }

    pub fn is_archived(&self, file_id: &str) -> bool {
        self.directory.contains_file(ARCHIVE_CATEGORY, file_id)
    }

    // ─── Session ─────────────────────────────────────────────

    /// Rebuild the message pane, prompt editor and summary from a chat and
    /// the optional result that came with it.
    pub fn render(
        &mut self,
        ticket: Ticket,
        session: ChatSession,
        result: Option<&ActionResult>,
    ) -> bool {
        if !self.requests.is_current(&ticket) {
            return false;
        }

        let mut pane: Vec<PaneBlock> = session
            .visible_messages()
            .iter()
            .map(PaneBlock::from_message)
            .collect();

        let mut summary = session.summary_text().map(str::to_string);
        if let Some(result) = result {
            for block in result.blocks() {
                match block {
                    ResultBlock::System(text) => {
                        pane.push(PaneBlock::html(BlockStyle::System, &text));
                    }
                    ResultBlock::Error(text) => {
                        pane.push(PaneBlock::text(BlockStyle::Error, text));
                    }
                    ResultBlock::Prompts(prompts) => {
                        pane.push(PaneBlock::text(
                            BlockStyle::System,
                            format!("Prompts: {}", prompts.join(", ")),
                        ));
                    }
                    ResultBlock::Results(lines) => {
                        pane.push(PaneBlock::html(BlockStyle::System, &lines.join("\n")));
                    }
                    ResultBlock::Models(models) => {
                        pane.push(PaneBlock::text(
                            BlockStyle::System,
                            format!("Models: {}", models.join(", ")),
                        ));
                    }
                    ResultBlock::FileInfo(descriptor) => {
                        pane.push(PaneBlock::text(BlockStyle::System, descriptor.to_string()));
                    }
                    ResultBlock::Summary(text) => summary = Some(text),
                }
            }
        }

        self.pane = pane;
        self.system_prompt = session.system_prompt().unwrap_or_default().to_string();
        self.summary = summary;
        self.session = Some(session);
        self.clear_error_of(RequestKind::Session);
        true
    }

    /// Show a user bubble before the server has answered.
    pub fn push_optimistic(&mut self, text: &str) {
        self.pane.push(PaneBlock {
            style: BlockStyle::User,
            body: BlockBody::Html(markdown::to_html(text)),
            optimistic: true,
        });
    }

    pub fn session(&self) -> Option<&ChatSession> {
        self.session.as_ref()
    }

    pub fn pane(&self) -> &[PaneBlock] {
        &self.pane
    }

    /// Text of the active chat's system prompt, as mirrored into the editor
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    // ─── Navigation ──────────────────────────────────────────

    pub fn nav_open(&self) -> bool {
        self.nav_open
    }

    pub fn toggle_nav(&mut self) {
        self.nav_open = !self.nav_open;
    }

    /// Collapse the navigation panel on mobile-sized viewports.
    pub fn collapse_nav_if_mobile(&mut self, viewport_width: f32) {
        if self.config.is_mobile(viewport_width) {
            self.nav_open = false;
        }
    }

    // ─── Confirmation ────────────────────────────────────────

    pub fn request_confirmation(&mut self, confirmation: Confirmation) {
        self.pending_confirmation = Some(confirmation);
    }

    pub fn pending_confirmation(&self) -> Option<&Confirmation> {
        self.pending_confirmation.as_ref()
    }

    pub fn take_confirmation(&mut self) -> Option<Confirmation> {
        self.pending_confirmation.take()
    }

    pub fn cancel_confirmation(&mut self) {
        self.pending_confirmation = None;
    }
}
