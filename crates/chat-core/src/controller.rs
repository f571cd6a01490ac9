//! Chat controller — drives the view model through backend round-trips.
//!
//! Every operation follows the same shape:
//! 1. Take a ticket from the view model (short borrow)
//! 2. Await the backend call (no borrow held)
//! 3. Apply the response if the ticket is still current (short borrow)
//! 4. Re-fetch the directory when the operation changed server state
//!
//! The controller is clone-cheap; clones share the view model, backend and
//! event bus, so each UI action can be spawned as its own task.

use std::cell::RefCell;
use std::rc::Rc;

use chat_types::{
    Result, ChatError,
    command::ChatCommand,
    event::{RequestKind, ViewEvent},
    result::ActionResponse,
};

use crate::event_bus::EventBus;
use crate::ports::ChatBackend;
use crate::requests::Ticket;
use crate::view_model::{ChatViewModel, Confirmation};

#[derive(Clone)]
pub struct ChatController {
    view_model: Rc<RefCell<ChatViewModel>>,
    backend: Rc<dyn ChatBackend>,
    event_bus: EventBus,
}

impl ChatController {
    pub fn new(
        view_model: Rc<RefCell<ChatViewModel>>,
        backend: Rc<dyn ChatBackend>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            view_model,
            backend,
            event_bus,
        }
    }

    pub fn view_model(&self) -> &Rc<RefCell<ChatViewModel>> {
        &self.view_model
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    // ─── Directory ───────────────────────────────────────────

    /// Re-fetch the full chat directory and replace the listing.
    pub async fn refresh_directory(&self) -> Result<()> {
        let ticket = self.begin(RequestKind::Directory, "directory");
        match self.backend.list_chats().await {
            Ok(directory) => {
                let count = directory.len();
                let applied = self
                    .view_model
                    .borrow_mut()
                    .apply_directory(ticket, directory);
                if applied {
                    log::info!("Directory loaded: {} categories", count);
                    self.event_bus.emit(ViewEvent::DirectoryLoaded { categories: count });
                }
                self.finish(ticket, "directory", applied);
                Ok(())
            }
            Err(e) => Err(self.fail(ticket, "directory", e)),
        }
    }

    /// Switch the visible category. No network call.
    pub fn select_category(&self, name: &str) -> bool {
        self.view_model.borrow_mut().select_category(name)
    }

    // ─── Session ─────────────────────────────────────────────

    /// Initial load: render the most recent chat, then list the directory.
    pub async fn load_current(&self) -> Result<()> {
        let ticket = self.begin(RequestKind::Session, "current chat");
        let outcome = match self.backend.current_chat().await {
            Ok(session) => {
                let response = ActionResponse {
                    chat: session,
                    result: None,
                };
                Ok(self.apply_session(ticket, "current chat", response))
            }
            Err(e) => Err(self.fail(ticket, "current chat", e)),
        };
        self.sync_after_render(outcome).await
    }

    /// Load a saved chat by file id. Collapses the navigation panel on
    /// mobile-sized viewports once the chat is shown.
    pub async fn open_session(&self, file_id: &str, viewport_width: f32) -> Result<()> {
        let ticket = self.begin(RequestKind::Session, "open chat");
        let outcome = match self.backend.load_chat(file_id).await {
            Ok(response) => {
                let applied = self.apply_session(ticket, "open chat", response);
                if applied {
                    log::info!("Opened chat {}", file_id);
                    self.view_model
                        .borrow_mut()
                        .collapse_nav_if_mobile(viewport_width);
                }
                Ok(applied)
            }
            Err(e) => Err(self.fail(ticket, "open chat", e)),
        };
        self.sync_after_render(outcome).await
    }

    /// Send a user message. Blank input is ignored without a request.
    pub async fn send_message(&self, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }
        self.view_model.borrow_mut().push_optimistic(text);
        self.run_command(ChatCommand::Message(text.to_string())).await
    }

    pub async fn update_system_prompt(&self, text: &str) -> Result<()> {
        self.run_command(ChatCommand::UpdateSystemPrompt(text.to_string()))
            .await
    }

    pub async fn start_new_session(&self) -> Result<()> {
        self.run_command(ChatCommand::StartNewSession).await
    }

    /// Send any typed command and render the chat it returns.
    pub async fn run_command(&self, command: ChatCommand) -> Result<()> {
        let label = command.label();
        let ticket = self.begin(RequestKind::Session, label);
        let outcome = match self.backend.send(&command).await {
            Ok(response) => Ok(self.apply_session(ticket, label, response)),
            Err(e) => Err(self.fail(ticket, label, e)),
        };
        self.sync_after_render(outcome).await
    }

    /// Every answered request ends with a directory refresh, including a
    /// superseded one: the server already applied it, and the request that
    /// replaced it may still fail.
    async fn sync_after_render(&self, outcome: Result<bool>) -> Result<()> {
        match outcome {
            Ok(_) => self.refresh_directory().await,
            Err(e) => Err(e),
        }
    }

    fn apply_session(&self, ticket: Ticket, label: &str, response: ActionResponse) -> bool {
        let file_id = response.chat.file_id.clone();
        let applied = self.view_model.borrow_mut().render(
            ticket,
            response.chat,
            response.result.as_ref(),
        );
        if applied {
            let system_prompt = self.view_model.borrow().system_prompt().to_string();
            self.event_bus.emit(ViewEvent::SessionRendered {
                file_id,
                system_prompt,
            });
        }
        self.finish(ticket, label, applied);
        applied
    }

    // ─── Archive ─────────────────────────────────────────────

    pub async fn archive(&self, file_id: &str) -> Result<()> {
        let ticket = self.begin(RequestKind::Mutation, "archive");
        let outcome = self.backend.archive(file_id).await;
        self.settle_mutation(ticket, "archive", outcome).await
    }

    pub async fn restore(&self, file_id: &str) -> Result<()> {
        let ticket = self.begin(RequestKind::Mutation, "restore");
        let outcome = self.backend.restore(file_id).await;
        self.settle_mutation(ticket, "restore", outcome).await
    }

    /// Ask for confirmation before permanently deleting an archived chat.
    /// Files outside the archive are refused.
    pub fn request_delete(&self, file_id: &str) -> Result<()> {
        let mut vm = self.view_model.borrow_mut();
        if !vm.is_archived(file_id) {
            log::warn!("Refusing to delete {}: not in the archive", file_id);
            return Err(ChatError::Refused(format!("{} is not archived", file_id)));
        }
        vm.request_confirmation(Confirmation::DeleteForever {
            file_id: file_id.to_string(),
        });
        Ok(())
    }

    /// Ask for confirmation before emptying the archive.
    pub fn request_clear_archive(&self) {
        self.view_model
            .borrow_mut()
            .request_confirmation(Confirmation::ClearArchive);
    }

    pub fn cancel_confirmation(&self) {
        self.view_model.borrow_mut().cancel_confirmation();
    }

    /// Carry out the pending destructive action. Without a pending
    /// confirmation this does nothing.
    pub async fn confirm(&self) -> Result<()> {
        let pending = self.view_model.borrow_mut().take_confirmation();
        match pending {
            Some(Confirmation::DeleteForever { file_id }) => {
                let ticket = self.begin(RequestKind::Mutation, "delete");
                let outcome = self.backend.delete(&file_id).await;
                self.settle_mutation(ticket, "delete", outcome).await
            }
            Some(Confirmation::ClearArchive) => {
                let ticket = self.begin(RequestKind::Mutation, "clear archive");
                let outcome = self.backend.clear_archive().await;
                self.settle_mutation(ticket, "clear archive", outcome).await
            }
            None => Ok(()),
        }
    }

    /// Record the outcome of an archive-style request, then re-fetch the
    /// directory exactly once whether or not the request succeeded.
    async fn settle_mutation(&self, ticket: Ticket, label: &str, outcome: Result<()>) -> Result<()> {
        let outcome = match outcome {
            Ok(()) => {
                self.finish(ticket, label, true);
                Ok(())
            }
            Err(e) => Err(self.fail(ticket, label, e)),
        };
        let refreshed = self.refresh_directory().await;
        outcome.and(refreshed)
    }

    // ─── Settings ────────────────────────────────────────────

    /// Store a new API key on the server. A blank key is ignored.
    pub async fn set_api_key(&self, api_key: &str) -> Result<()> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Ok(());
        }
        let ticket = self.begin(RequestKind::Settings, "api key");
        match self.backend.set_api_key(api_key).await {
            Ok(()) => {
                self.finish(ticket, "api key", true);
                log::info!("API key saved");
                self.event_bus.emit(ViewEvent::ApiKeySaved);
                Ok(())
            }
            Err(e) => Err(self.fail(ticket, "api key", e)),
        }
    }

    /// Ask the server to update itself; the page reloads after the
    /// configured delay.
    pub async fn trigger_update(&self) -> Result<()> {
        let ticket = self.begin(RequestKind::Settings, "update");
        match self.backend.trigger_update().await {
            Ok(()) => {
                self.finish(ticket, "update", true);
                let delay_ms = self.view_model.borrow().config().update_reload_delay_ms;
                log::info!("Server update started, reloading in {}ms", delay_ms);
                self.event_bus.emit(ViewEvent::ReloadScheduled { delay_ms });
                Ok(())
            }
            Err(e) => Err(self.fail(ticket, "update", e)),
        }
    }

    // ─── Bookkeeping ─────────────────────────────────────────

    fn begin(&self, kind: RequestKind, label: &str) -> Ticket {
        let ticket = self.view_model.borrow_mut().begin_request(kind);
        log::debug!("{} request #{} started", label, ticket.generation);
        self.event_bus.emit(ViewEvent::RequestStarted {
            kind,
            label: label.to_string(),
        });
        ticket
    }

    fn finish(&self, ticket: Ticket, label: &str, applied: bool) {
        let label = label.to_string();
        if applied {
            self.event_bus.emit(ViewEvent::RequestFinished {
                kind: ticket.kind,
                label,
            });
        } else {
            log::debug!("{} response #{} superseded", label, ticket.generation);
            self.event_bus.emit(ViewEvent::Superseded {
                kind: ticket.kind,
                label,
            });
        }
    }

    fn fail(&self, ticket: Ticket, label: &str, error: ChatError) -> ChatError {
        let current = self
            .view_model
            .borrow_mut()
            .record_failure(ticket, label, &error);
        if current {
            log::error!("{} failed: {}", label, error);
            self.event_bus.emit(ViewEvent::RequestFailed {
                kind: ticket.kind,
                label: label.to_string(),
                message: error.to_string(),
            });
        } else {
            log::debug!("{} failure #{} superseded: {}", label, ticket.generation, error);
            self.event_bus.emit(ViewEvent::Superseded {
                kind: ticket.kind,
                label: label.to_string(),
            });
        }
        error
    }
}
