//! Settings panel — API key and server update.

use egui::{self, RichText, Vec2};

use crate::action::UiAction;
use crate::state::UiState;
use crate::theme::*;

pub fn settings_panel(ui: &mut egui::Ui, state: &mut UiState, actions: &mut Vec<UiAction>) {
    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Settings").color(TEXT_PRIMARY));
            ui.separator();

            // ── API Key ──────────────────────────────────────
            ui.label(RichText::new("API Key").color(TEXT_SECONDARY).small());
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut state.api_key_input)
                        .password(true)
                        .hint_text("gsk_..."),
                );
                let save = egui::Button::new(RichText::new("Save").color(TEXT_PRIMARY).strong())
                    .fill(ACCENT)
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(60.0, 0.0));
                if ui.add(save).clicked() {
                    let key = state.api_key_input.trim().to_string();
                    // The field is cleared once the server confirms the key
                    if !key.is_empty() {
                        actions.push(UiAction::SaveApiKey(key));
                    }
                }
            });

            // ── Server ───────────────────────────────────────
            ui.add_space(12.0);
            ui.separator();
            ui.label(RichText::new("Server").color(ACCENT).strong());
            let update = egui::Button::new(RichText::new("Update server").color(TEXT_PRIMARY))
                .corner_radius(PANEL_ROUNDING);
            if ui
                .add_enabled(state.reload_in_ms.is_none(), update)
                .on_hover_text("Pulls the latest server code; the page reloads afterwards")
                .clicked()
            {
                actions.push(UiAction::TriggerUpdate);
            }

            if let Some(notice) = &state.notice {
                ui.add_space(4.0);
                ui.label(RichText::new(notice).color(SUCCESS).small());
            }
        });
}
