pub mod chat;
pub mod confirm;
pub mod prompt;
pub mod settings;
pub mod sidebar;
