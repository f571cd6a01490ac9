//! Navigation panel: category tabs and the file list of the selected one.

use egui::{self, RichText, ScrollArea};

use chat_core::view_model::{ChatViewModel, FileAction};

use crate::action::UiAction;
use crate::theme::*;

pub fn sidebar_panel(ui: &mut egui::Ui, vm: &ChatViewModel, actions: &mut Vec<UiAction>) {
    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Chats").color(TEXT_PRIMARY).strong());
            ui.separator();

            // Category tabs
            ui.horizontal_wrapped(|ui| {
                for category in vm.categories() {
                    let selected = vm.current_tab() == Some(category.as_str());
                    if ui.selectable_label(selected, category).clicked() && !selected {
                        actions.push(UiAction::SelectCategory(category.clone()));
                    }
                }
            });

            if vm.can_clear_archive() {
                ui.add_space(4.0);
                let clear = egui::Button::new(RichText::new("Clear archive").color(ERROR))
                    .corner_radius(PANEL_ROUNDING);
                if ui.add(clear).clicked() {
                    actions.push(UiAction::RequestClearArchive);
                }
            }

            ui.separator();

            if vm.categories().is_empty() {
                ui.label(RichText::new("No saved chats").color(TEXT_SECONDARY).italics());
                return;
            }

            let open_file = vm.session().map(|s| s.file_id.as_str());
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for chat in vm.files() {
                        ui.horizontal(|ui| {
                            let selected = open_file == Some(chat.file_id.as_str());
                            let name = ui
                                .selectable_label(selected, &chat.display_name)
                                .on_hover_text(&chat.file_id);
                            if name.clicked() {
                                actions.push(UiAction::OpenChat(chat.file_id.clone()));
                            }
                            for action in vm.file_actions() {
                                if ui.small_button(action.label()).clicked() {
                                    actions.push(file_action(*action, &chat.file_id));
                                }
                            }
                        });
                    }
                });
        });
}

pub(crate) fn file_action(action: FileAction, file_id: &str) -> UiAction {
    let file_id = file_id.to_string();
    match action {
        FileAction::Archive => UiAction::Archive(file_id),
        FileAction::Restore => UiAction::Restore(file_id),
        FileAction::DeleteForever => UiAction::RequestDelete(file_id),
    }
}

