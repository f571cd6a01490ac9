#[cfg(test)]
mod tests {
    use crate::action::UiAction;
    use crate::panels::chat::ToolbarCommand;
    use crate::panels::sidebar::file_action;
    use crate::rich_text;
    use crate::state::*;
    use crate::theme;
    use chat_core::markdown;
    use chat_core::view_model::{BlockBody, BlockStyle, FileAction};
    use chat_types::command::ChatCommand;
    use chat_types::event::{RequestKind, ViewEvent};

    fn started(label: &str) -> ViewEvent {
        ViewEvent::RequestStarted {
            kind: RequestKind::Session,
            label: label.to_string(),
        }
    }

    fn finished(label: &str) -> ViewEvent {
        ViewEvent::RequestFinished {
            kind: RequestKind::Session,
            label: label.to_string(),
        }
    }

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new();
        assert!(state.input_text.is_empty());
        assert!(state.prompt_text.is_empty());
        assert!(!state.show_settings);
        assert_eq!(state.status_text, "Ready");
        assert!(state.reload_in_ms.is_none());
        assert!(!state.is_busy());
    }

    #[test]
    fn test_ui_state_request_lifecycle() {
        let mut state = UiState::new();
        state.process_events(vec![started("message")]);
        assert!(state.is_busy());
        assert_eq!(state.status_text, "Loading message...");

        state.process_events(vec![finished("message")]);
        assert!(!state.is_busy());
        assert_eq!(state.status_text, "Ready");
    }

    #[test]
    fn test_ui_state_overlapping_requests() {
        let mut state = UiState::new();
        state.process_events(vec![started("open chat"), started("open chat")]);
        state.process_events(vec![ViewEvent::Superseded {
            kind: RequestKind::Session,
            label: "open chat".to_string(),
        }]);
        assert!(state.is_busy());
        state.process_events(vec![finished("open chat")]);
        assert!(!state.is_busy());
        assert_eq!(state.status_text, "Ready");
    }

    #[test]
    fn test_ui_state_failure_shown() {
        let mut state = UiState::new();
        state.process_events(vec![
            started("directory"),
            ViewEvent::RequestFailed {
                kind: RequestKind::Directory,
                label: "directory".to_string(),
                message: "HTTP 500: boom".to_string(),
            },
        ]);
        assert!(!state.is_busy());
        assert!(state.status_text.contains("HTTP 500"));
    }

    #[test]
    fn test_ui_state_unbalanced_end_does_not_underflow() {
        let mut state = UiState::new();
        state.process_events(vec![finished("x"), finished("y")]);
        assert!(!state.is_busy());
    }

    #[test]
    fn test_ui_state_session_rendered_mirrors_prompt() {
        let mut state = UiState::new();
        state.prompt_text = "edited but not sent".to_string();
        state.process_events(vec![ViewEvent::SessionRendered {
            file_id: "a.chat".to_string(),
            system_prompt: "Be helpful".to_string(),
        }]);
        assert_eq!(state.prompt_text, "Be helpful");

        state.process_events(vec![ViewEvent::SessionRendered {
            file_id: "b.chat".to_string(),
            system_prompt: String::new(),
        }]);
        assert!(state.prompt_text.is_empty());
    }

    #[test]
    fn test_ui_state_notice_and_reload() {
        let mut state = UiState::new();
        state.api_key_input = "gsk_new".to_string();
        state.process_events(vec![
            ViewEvent::ApiKeySaved,
            ViewEvent::ReloadScheduled { delay_ms: 5000 },
        ]);
        assert!(state.api_key_input.is_empty());
        assert_eq!(state.notice.as_deref(), Some("API key saved"));
        assert_eq!(state.reload_in_ms.take(), Some(5000));
        assert!(state.status_text.contains("5s"));
    }

    #[test]
    fn test_ui_state_failed_api_key_keeps_input() {
        let mut state = UiState::new();
        state.api_key_input = "gsk_typo".to_string();
        state.process_events(vec![
            ViewEvent::RequestStarted {
                kind: RequestKind::Settings,
                label: "api key".to_string(),
            },
            ViewEvent::RequestFailed {
                kind: RequestKind::Settings,
                label: "api key".to_string(),
                message: "Rejected by server: /api/api-key was not carried out".to_string(),
            },
        ]);
        assert_eq!(state.api_key_input, "gsk_typo");
        assert!(state.notice.is_none());
        assert!(state.status_text.contains("Rejected"));
    }

    #[test]
    fn test_take_input() {
        let mut state = UiState::new();
        state.input_text = "   ".to_string();
        assert!(state.take_input().is_none());
        assert_eq!(state.input_text, "   ");

        state.input_text = "  hi there ".to_string();
        assert_eq!(state.take_input().as_deref(), Some("hi there"));
        assert!(state.input_text.is_empty());
    }

    #[test]
    fn test_ui_state_default() {
        let state = UiState::default();
        assert!(!state.is_busy());
        assert!(state.command_arg().is_none());
    }

    // ─── Actions ─────────────────────────────────────────────

    #[test]
    fn test_file_actions_map_to_ui_actions() {
        assert_eq!(
            file_action(FileAction::Archive, "userchat/a.chat"),
            UiAction::Archive("userchat/a.chat".to_string())
        );
        assert_eq!(
            file_action(FileAction::Restore, "archive/a.chat"),
            UiAction::Restore("archive/a.chat".to_string())
        );
        // Deleting goes through confirmation
        assert_eq!(
            file_action(FileAction::DeleteForever, "archive/a.chat"),
            UiAction::RequestDelete("archive/a.chat".to_string())
        );
    }

    #[test]
    fn test_toolbar_commands() {
        assert_eq!(ToolbarCommand::Summarize.command(None), Some(ChatCommand::Summarize));
        assert_eq!(ToolbarCommand::Export.command(None), Some(ChatCommand::Export(None)));
        assert_eq!(
            ToolbarCommand::Export.command(Some("notes".to_string())),
            Some(ChatCommand::Export(Some("notes".to_string())))
        );
        assert_eq!(
            ToolbarCommand::Search.command(Some("rust".to_string())),
            Some(ChatCommand::Search("rust".to_string()))
        );
        assert_eq!(ToolbarCommand::Search.command(None), None);
    }

    #[test]
    fn test_toolbar_args_required() {
        for tool in ToolbarCommand::ALL {
            assert_eq!(tool.command(None).is_none(), tool.needs_arg(), "{:?}", tool);
        }
    }

    // ─── Rendering ───────────────────────────────────────────

    #[test]
    fn test_layout_job_html_sections() {
        let body = BlockBody::Html(markdown::to_html("a **b** `c`"));
        let job = rich_text::layout_job(&body, theme::TEXT_PRIMARY, 300.0);
        assert_eq!(job.text, "a b c");
        assert_eq!(job.sections.len(), 4);
        assert_eq!(job.sections[1].format.color, theme::TEXT_STRONG);
        assert_eq!(job.sections[3].format.background, theme::CODE_BG);
    }

    #[test]
    fn test_layout_job_text_is_literal() {
        let body = BlockBody::Text("<b>not bold</b>".to_string());
        let job = rich_text::layout_job(&body, theme::ERROR, 300.0);
        assert_eq!(job.text, "<b>not bold</b>");
        assert_eq!(job.sections.len(), 1);
        assert_eq!(job.sections[0].format.color, theme::ERROR);
    }

    #[test]
    fn test_bubble_styles_distinct() {
        let user = theme::bubble(BlockStyle::User);
        let error = theme::bubble(BlockStyle::Error);
        assert_eq!(user.0, "You");
        assert_eq!(error.0, "Error");
        assert_ne!(user.2, error.2);
    }
}
