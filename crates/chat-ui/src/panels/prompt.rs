//! System prompt editor and chat summary.

use egui::{self, RichText, Vec2};

use chat_core::view_model::ChatViewModel;
use chat_types::command::ChatCommand;

use crate::action::UiAction;
use crate::state::UiState;
use crate::theme::*;

pub fn prompt_panel(
    ui: &mut egui::Ui,
    vm: &ChatViewModel,
    state: &mut UiState,
    actions: &mut Vec<UiAction>,
) {
    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.label(RichText::new("System prompt").color(ACCENT).strong());
            ui.add(
                egui::TextEdit::multiline(&mut state.prompt_text)
                    .desired_rows(4)
                    .desired_width(f32::INFINITY)
                    .hint_text("No system prompt"),
            );

            ui.horizontal(|ui| {
                let update = egui::Button::new(RichText::new("Update").color(TEXT_PRIMARY))
                    .fill(ACCENT)
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(80.0, 0.0));
                if ui.add_enabled(vm.session().is_some(), update).clicked() {
                    actions.push(UiAction::UpdateSystemPrompt(state.prompt_text.clone()));
                }

                let name = state.command_arg();
                let save = ui
                    .add_enabled(name.is_some(), egui::Button::new("Save as prompt"))
                    .on_hover_text("Uses the argument field as the prompt name");
                if let (true, Some(name)) = (save.clicked(), name) {
                    actions.push(UiAction::Command(ChatCommand::SavePrompt {
                        name,
                        text: state.prompt_text.clone(),
                    }));
                }
            });

            ui.add_space(6.0);
            ui.label(RichText::new("Summary").color(ACCENT).strong());
            match vm.summary() {
                Some(summary) => {
                    ui.label(RichText::new(summary).color(TEXT_PRIMARY));
                }
                None => {
                    ui.label(RichText::new("No summary yet").color(TEXT_SECONDARY).italics());
                }
            }
        });
}
