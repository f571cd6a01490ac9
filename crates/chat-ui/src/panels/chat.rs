//! Chat panel: header, message pane, input field and command toolbar.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};

use chat_core::view_model::{ChatViewModel, PaneBlock};
use chat_types::command::ChatCommand;

use crate::action::UiAction;
use crate::rich_text;
use crate::state::UiState;
use crate::theme::*;

/// Toolbar buttons. Commands that need an argument read it from the
/// argument field next to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarCommand {
    Summarize,
    Info,
    ListModels,
    ListPrompts,
    Export,
    Search,
    SetModel,
    UsePrompt,
    SystemFromPrompt,
    Save,
}

impl ToolbarCommand {
    pub const ALL: [ToolbarCommand; 10] = [
        ToolbarCommand::Summarize,
        ToolbarCommand::Info,
        ToolbarCommand::ListModels,
        ToolbarCommand::ListPrompts,
        ToolbarCommand::Export,
        ToolbarCommand::Search,
        ToolbarCommand::SetModel,
        ToolbarCommand::UsePrompt,
        ToolbarCommand::SystemFromPrompt,
        ToolbarCommand::Save,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ToolbarCommand::Summarize => "Summarize",
            ToolbarCommand::Info => "Info",
            ToolbarCommand::ListModels => "Models",
            ToolbarCommand::ListPrompts => "Prompts",
            ToolbarCommand::Export => "Export",
            ToolbarCommand::Search => "Search",
            ToolbarCommand::SetModel => "Set model",
            ToolbarCommand::UsePrompt => "Use prompt",
            ToolbarCommand::SystemFromPrompt => "Prompt as system",
            ToolbarCommand::Save => "Save as",
        }
    }

    pub fn needs_arg(&self) -> bool {
        matches!(
            self,
            ToolbarCommand::Search
                | ToolbarCommand::SetModel
                | ToolbarCommand::UsePrompt
                | ToolbarCommand::SystemFromPrompt
                | ToolbarCommand::Save
        )
    }

    /// Build the command. `None` when a required argument is missing.
    pub fn command(&self, arg: Option<String>) -> Option<ChatCommand> {
        let command = match (self, arg) {
            (ToolbarCommand::Summarize, _) => ChatCommand::Summarize,
            (ToolbarCommand::Info, _) => ChatCommand::Info,
            (ToolbarCommand::ListModels, _) => ChatCommand::ListModels,
            (ToolbarCommand::ListPrompts, _) => ChatCommand::ListPrompts,
            (ToolbarCommand::Export, arg) => ChatCommand::Export(arg),
            (ToolbarCommand::Search, Some(arg)) => ChatCommand::Search(arg),
            (ToolbarCommand::SetModel, Some(arg)) => ChatCommand::SetModel(arg),
            (ToolbarCommand::UsePrompt, Some(arg)) => ChatCommand::UsePrompt(arg),
            (ToolbarCommand::SystemFromPrompt, Some(arg)) => ChatCommand::SystemFromPrompt(arg),
            (ToolbarCommand::Save, Some(arg)) => ChatCommand::Save(arg),
            (_, None) => return None,
        };
        Some(command)
    }
}

/// Render the chat panel
pub fn chat_panel(
    ui: &mut egui::Ui,
    vm: &ChatViewModel,
    state: &mut UiState,
    actions: &mut Vec<UiAction>,
) {
    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                header(ui, vm, state, actions);
                ui.separator();

                if let Some(error) = vm.last_error() {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!("{} failed: {}", error.label, error.message))
                                .color(ERROR),
                        );
                        if ui.small_button("Dismiss").clicked() {
                            actions.push(UiAction::DismissError);
                        }
                    });
                }

                // Messages area
                let available_height = ui.available_height() - 96.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for block in vm.pane() {
                            render_block(ui, block);
                            ui.add_space(4.0);
                        }
                    });

                ui.add_space(8.0);
                input_row(ui, state, actions);
                toolbar(ui, state, actions);
            });
        });
}

fn header(ui: &mut egui::Ui, vm: &ChatViewModel, state: &UiState, actions: &mut Vec<UiAction>) {
    ui.horizontal(|ui| {
        if ui.button("☰").on_hover_text("Toggle chat list").clicked() {
            actions.push(UiAction::ToggleNav);
        }
        match vm.session() {
            Some(session) => {
                ui.heading(RichText::new(&session.display_name).color(TEXT_PRIMARY).strong());
                ui.label(RichText::new(&session.file_id).color(TEXT_SECONDARY).small());
                if let Some(model) = &session.model {
                    ui.label(RichText::new(model).color(ACCENT).small());
                }
            }
            None => {
                ui.heading(RichText::new("Chat").color(TEXT_PRIMARY).strong());
            }
        }
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let status_color = if state.is_busy() { WARNING } else { SUCCESS };
            ui.label(RichText::new(&state.status_text).color(status_color).small());
        });
    });
}

fn input_row(ui: &mut egui::Ui, state: &mut UiState, actions: &mut Vec<UiAction>) {
    ui.horizontal(|ui| {
        let input = egui::TextEdit::singleline(&mut state.input_text)
            .hint_text("Type a message...")
            .desired_width(ui.available_width() - 140.0)
            .font(egui::FontId::proportional(rich_text::BODY_SIZE));
        let response = ui.add(input);

        let send_enabled = !state.input_text.trim().is_empty();
        let send_btn = ui.add_enabled(
            send_enabled,
            egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                .corner_radius(PANEL_ROUNDING)
                .min_size(Vec2::new(60.0, 0.0)),
        );

        // Submit on Enter or button click
        let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if entered || send_btn.clicked() {
            if let Some(text) = state.take_input() {
                actions.push(UiAction::SendMessage(text));
            }
            response.request_focus();
        }

        if ui.button("New").on_hover_text("Start a new chat").clicked() {
            actions.push(UiAction::NewChat);
        }
    });
}

fn toolbar(ui: &mut egui::Ui, state: &mut UiState, actions: &mut Vec<UiAction>) {
    ui.horizontal_wrapped(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut state.command_arg)
                .hint_text("argument")
                .desired_width(140.0),
        );
        let has_arg = state.command_arg().is_some();
        for tool in ToolbarCommand::ALL {
            let enabled = has_arg || !tool.needs_arg();
            if ui.add_enabled(enabled, egui::Button::new(tool.label()).small()).clicked() {
                if let Some(command) = tool.command(state.command_arg()) {
                    actions.push(UiAction::Command(command));
                }
            }
        }
    });
}

fn render_block(ui: &mut egui::Ui, block: &PaneBlock) {
    let (label, label_color, bg) = bubble(block.style);
    let frame = egui::Frame::default()
        .fill(bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0);
    frame.show(ui, |ui| {
        let mut caption = RichText::new(label).color(label_color).strong().small();
        if block.optimistic {
            caption = caption.italics();
        }
        ui.label(caption);
        let job = rich_text::layout_job(&block.body, TEXT_PRIMARY, ui.available_width());
        ui.label(job);
    });
}
