//! egui front end for the chat client.
//!
//! Panels read the [`chat_core::view_model::ChatViewModel`] and report what
//! the user did as [`UiAction`]s; the app layer turns those into controller
//! calls. Panels never talk to the backend themselves.

pub mod action;
pub mod panels;
pub mod rich_text;
pub mod state;
pub mod theme;

pub use action::UiAction;

#[cfg(test)]
mod tests;
