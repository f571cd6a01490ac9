//! UI-level state that drives rendering.
//! Holds what the view model does not: text being typed, toggles, and a
//! status line updated each frame by draining the EventBus.

use chat_types::event::ViewEvent;

/// State visible to UI panels
pub struct UiState {
    /// Message input field
    pub input_text: String,
    /// System prompt editor, overwritten whenever a chat is rendered
    pub prompt_text: String,
    /// Argument for toolbar commands (search term, model, prompt name)
    pub command_arg: String,
    /// API key field in settings
    pub api_key_input: String,
    /// Whether settings panel is open
    pub show_settings: bool,
    /// Status line text
    pub status_text: String,
    /// Last notice from the controller, shown in settings
    pub notice: Option<String>,
    /// Reload requested by a server update, taken by the app layer
    pub reload_in_ms: Option<u32>,
    in_flight: usize,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            input_text: String::new(),
            prompt_text: String::new(),
            command_arg: String::new(),
            api_key_input: String::new(),
            show_settings: false,
            status_text: "Ready".to_string(),
            notice: None,
            reload_in_ms: None,
            in_flight: 0,
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<ViewEvent>) {
        for event in events {
            if event.ends_request() {
                self.in_flight = self.in_flight.saturating_sub(1);
            }
            match event {
                ViewEvent::RequestStarted { label, .. } => {
                    self.in_flight += 1;
                    self.status_text = format!("Loading {}...", label);
                }
                ViewEvent::RequestFinished { .. } | ViewEvent::Superseded { .. } => {
                    if self.in_flight == 0 {
                        self.status_text = "Ready".to_string();
                    }
                }
                ViewEvent::RequestFailed { label, message, .. } => {
                    self.status_text = format!("Error ({}): {}", label, message);
                }
                ViewEvent::DirectoryLoaded { .. } => {}
                ViewEvent::SessionRendered { system_prompt, .. } => {
                    self.prompt_text = system_prompt;
                }
                ViewEvent::ApiKeySaved => {
                    self.api_key_input.clear();
                    self.notice = Some("API key saved".to_string());
                }
                ViewEvent::ReloadScheduled { delay_ms } => {
                    self.status_text = format!("Server updating, reloading in {}s", delay_ms / 1000);
                    self.reload_in_ms = Some(delay_ms);
                }
            }
        }
    }

    /// Take the input field for sending. Blank input yields nothing and
    /// leaves the field as it was.
    pub fn take_input(&mut self) -> Option<String> {
        let text = self.input_text.trim();
        if text.is_empty() {
            return None;
        }
        let text = text.to_string();
        self.input_text.clear();
        Some(text)
    }

    /// Trimmed toolbar argument, if any
    pub fn command_arg(&self) -> Option<String> {
        let arg = self.command_arg.trim();
        (!arg.is_empty()).then(|| arg.to_string())
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
