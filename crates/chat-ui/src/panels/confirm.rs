//! Modal confirmation for destructive actions.

use egui::{self, Align2, RichText};

use chat_core::view_model::ChatViewModel;

use crate::action::UiAction;
use crate::theme::*;

/// Show the pending confirmation, if any.
pub fn confirm_dialog(ctx: &egui::Context, vm: &ChatViewModel, actions: &mut Vec<UiAction>) {
    let Some(pending) = vm.pending_confirmation() else {
        return;
    };

    egui::Window::new("Confirm")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(RichText::new(pending.prompt()).color(TEXT_PRIMARY));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let delete = egui::Button::new(RichText::new("Delete").color(TEXT_PRIMARY))
                    .fill(ERROR)
                    .corner_radius(PANEL_ROUNDING);
                if ui.add(delete).clicked() {
                    actions.push(UiAction::Confirm);
                }
                if ui.button("Cancel").clicked() {
                    actions.push(UiAction::CancelConfirmation);
                }
            });
        });
}
