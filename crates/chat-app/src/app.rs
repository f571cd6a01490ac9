//! Main egui application — composes all panels and dispatches user actions
//! to the chat controller.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};

use chat_core::controller::ChatController;
use chat_core::event_bus::EventBus;
use chat_core::ports::ChatBackend;
use chat_core::view_model::ChatViewModel;
use chat_platform::page;
use chat_platform::HttpBackend;
use chat_types::config::ClientConfig;
use chat_ui::panels::{chat, confirm, prompt, settings, sidebar};
use chat_ui::state::UiState;
use chat_ui::theme;
use chat_ui::UiAction;

/// The main application state
pub struct ChatApp {
    ui_state: UiState,
    controller: ChatController,
    first_frame: bool,
}

impl ChatApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: ClientConfig) -> Self {
        let backend: Rc<dyn ChatBackend> = Rc::new(HttpBackend::new(config.clone()));
        let view_model = Rc::new(RefCell::new(ChatViewModel::new(config)));
        let controller = ChatController::new(view_model, backend, EventBus::new());

        Self {
            ui_state: UiState::new(),
            controller,
            first_frame: true,
        }
    }

    /// Run a controller operation in the background and repaint when done.
    /// Failures are already logged and recorded by the controller.
    fn spawn<F, Fut>(&self, ctx: &egui::Context, task: F)
    where
        F: FnOnce(ChatController) -> Fut,
        Fut: Future<Output = chat_types::Result<()>> + 'static,
    {
        let future = task(self.controller.clone());
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = future.await {
                log::debug!("Background request ended with error: {}", e);
            }
            ctx.request_repaint();
        });
    }

    fn dispatch(&mut self, action: UiAction, ctx: &egui::Context) {
        log::debug!("UI action: {:?}", action);
        let viewport_width = ctx.screen_rect().width();
        match action {
            UiAction::SelectCategory(name) => {
                self.controller.select_category(&name);
            }
            UiAction::RequestDelete(file_id) => {
                if let Err(e) = self.controller.request_delete(&file_id) {
                    self.ui_state.status_text = e.to_string();
                }
            }
            UiAction::RequestClearArchive => self.controller.request_clear_archive(),
            UiAction::CancelConfirmation => self.controller.cancel_confirmation(),
            UiAction::ToggleNav => self.controller.view_model().borrow_mut().toggle_nav(),
            UiAction::DismissError => self.controller.view_model().borrow_mut().dismiss_error(),
            UiAction::Confirm => self.spawn(ctx, |c| async move { c.confirm().await }),
            UiAction::OpenChat(file_id) => self.spawn(ctx, move |c| async move {
                c.open_session(&file_id, viewport_width).await
            }),
            UiAction::Archive(file_id) => {
                self.spawn(ctx, move |c| async move { c.archive(&file_id).await })
            }
            UiAction::Restore(file_id) => {
                self.spawn(ctx, move |c| async move { c.restore(&file_id).await })
            }
            UiAction::SendMessage(text) => {
                self.spawn(ctx, move |c| async move { c.send_message(&text).await })
            }
            UiAction::UpdateSystemPrompt(text) => self.spawn(ctx, move |c| async move {
                c.update_system_prompt(&text).await
            }),
            UiAction::NewChat => self.spawn(ctx, |c| async move { c.start_new_session().await }),
            UiAction::Command(command) => {
                self.spawn(ctx, move |c| async move { c.run_command(command).await })
            }
            UiAction::SaveApiKey(key) => {
                self.spawn(ctx, move |c| async move { c.set_api_key(&key).await })
            }
            UiAction::TriggerUpdate => self.spawn(ctx, |c| async move { c.trigger_update().await }),
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.spawn(ctx, |c| async move { c.load_current().await });
            self.first_frame = false;
        }

        // Drain events from the controller
        let events = self.controller.event_bus().drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }
        if let Some(delay_ms) = self.ui_state.reload_in_ms.take() {
            page::schedule_reload(delay_ms);
        }

        let mut actions = Vec::new();
        {
            let vm = self.controller.view_model().borrow();

            // ── Top bar ──────────────────────────────────────
            TopBottomPanel::top("top_bar").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("Chat")
                            .strong()
                            .color(theme::ACCENT)
                            .size(16.0),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .selectable_label(self.ui_state.show_settings, "Settings")
                            .clicked()
                        {
                            self.ui_state.show_settings = !self.ui_state.show_settings;
                        }
                    });
                });
            });

            // ── Navigation ───────────────────────────────────
            if vm.nav_open() {
                SidePanel::left("nav_panel")
                    .default_width(theme::NAV_WIDTH)
                    .show(ctx, |ui| {
                        sidebar::sidebar_panel(ui, &vm, &mut actions);
                    });
            }

            // ── Prompt and settings ──────────────────────────
            SidePanel::right("prompt_panel")
                .min_width(240.0)
                .max_width(350.0)
                .show(ctx, |ui| {
                    prompt::prompt_panel(ui, &vm, &mut self.ui_state, &mut actions);
                    if self.ui_state.show_settings {
                        ui.add_space(8.0);
                        settings::settings_panel(ui, &mut self.ui_state, &mut actions);
                    }
                });

            // ── Main content ─────────────────────────────────
            CentralPanel::default().show(ctx, |ui| {
                chat::chat_panel(ui, &vm, &mut self.ui_state, &mut actions);
            });

            confirm::confirm_dialog(ctx, &vm, &mut actions);
        }

        for action in actions {
            self.dispatch(action, ctx);
        }

        if self.ui_state.is_busy() {
            ctx.request_repaint();
        }
    }
}
