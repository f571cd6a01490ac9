use chat_types::command::ChatCommand;

/// Something the user did that the app layer has to carry out
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    SelectCategory(String),
    OpenChat(String),
    Archive(String),
    Restore(String),
    /// Asks for confirmation first
    RequestDelete(String),
    /// Asks for confirmation first
    RequestClearArchive,
    Confirm,
    CancelConfirmation,
    SendMessage(String),
    UpdateSystemPrompt(String),
    NewChat,
    Command(ChatCommand),
    SaveApiKey(String),
    TriggerUpdate,
    ToggleNav,
    DismissError,
}
