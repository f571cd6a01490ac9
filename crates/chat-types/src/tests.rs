#[cfg(test)]
mod tests {
    use crate::command::*;
    use crate::config::*;
    use crate::error::*;
    use crate::event::*;
    use crate::message::*;
    use crate::result::*;
    use crate::session::*;

    fn summary(name: &str, file: &str) -> ChatSummary {
        ChatSummary {
            display_name: name.to_string(),
            file_id: file.to_string(),
        }
    }

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_constructors() {
        assert_eq!(ChatMessage::system("s").role, Role::System);
        assert_eq!(ChatMessage::user("u").role, Role::User);
        assert_eq!(ChatMessage::assistant("a").role, Role::Assistant);
        assert!(ChatMessage::system("s").is_system());
        assert!(!ChatMessage::user("u").is_system());
    }

    #[test]
    fn test_role_wire_names() {
        assert_eq!(serde_json::to_string(&Role::System).unwrap(), r#""system""#);
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        let role: Role = serde_json::from_str(r#""assistant""#).unwrap();
        assert_eq!(role, Role::Assistant);
    }

    // ─── Directory Tests ─────────────────────────────────────

    #[test]
    fn test_directory_from_wire() {
        let json = r#"{
            "userchat": [{"file": "userchat/a.chat", "name": "Alpha"}],
            "autosave": [
                {"file": "autosave/b.chat", "name": "Beta"},
                {"file": "autosave/c.chat", "name": "Gamma"}
            ]
        }"#;
        let dir: ChatDirectory = serde_json::from_str(json).unwrap();
        assert_eq!(dir.len(), 2);
        assert_eq!(dir.chats("userchat")[0].display_name, "Alpha");
        assert_eq!(dir.chats("userchat")[0].file_id, "userchat/a.chat");
        assert!(dir.chats("missing").is_empty());
    }

    #[test]
    fn test_directory_preserves_entry_order() {
        let json = r#"{"autosave": [
            {"file": "z.chat", "name": "Z"},
            {"file": "a.chat", "name": "A"},
            {"file": "m.chat", "name": "M"}
        ]}"#;
        let dir: ChatDirectory = serde_json::from_str(json).unwrap();
        let files: Vec<&str> = dir.chats("autosave").iter().map(|c| c.file_id.as_str()).collect();
        assert_eq!(files, vec!["z.chat", "a.chat", "m.chat"]);
    }

    #[test]
    fn test_directory_archive_sorts_last() {
        let json = r#"{"archive": [], "zeta": [], "autosave": [], "userchat": []}"#;
        let dir: ChatDirectory = serde_json::from_str(json).unwrap();
        assert_eq!(dir.categories(), vec!["autosave", "userchat", "zeta", "archive"]);
    }

    #[test]
    fn test_directory_order_independent_of_insertion() {
        let orders = [
            ["archive", "b", "a"],
            ["a", "archive", "b"],
            ["b", "a", "archive"],
        ];
        for order in orders {
            let mut dir = ChatDirectory::new();
            for name in order {
                dir.insert(name, Vec::new());
            }
            assert_eq!(dir.categories(), vec!["a", "b", "archive"]);
        }
    }

    #[test]
    fn test_directory_without_archive() {
        let mut dir = ChatDirectory::new();
        dir.insert("userchat", vec![summary("x", "userchat/x.chat")]);
        dir.insert("autosave", Vec::new());
        assert_eq!(dir.categories(), vec!["autosave", "userchat"]);
        assert!(dir.contains_file("userchat", "userchat/x.chat"));
        assert!(!dir.contains_file("autosave", "userchat/x.chat"));
    }

    // ─── Session Tests ───────────────────────────────────────

    #[test]
    fn test_session_from_wire() {
        let json = r#"{
            "name": "Chat 20240101-120000",
            "version": "1.0",
            "model": "llama3-70b-8192",
            "summary": "",
            "file": "autosave/autosave-20240101-120000.chat",
            "messages": [
                {"role": "system", "content": "Be brief."},
                {"role": "user", "content": "hi"},
                {"role": "assistant", "content": "hello"}
            ]
        }"#;
        let session: ChatSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.display_name, "Chat 20240101-120000");
        assert_eq!(session.file_id, "autosave/autosave-20240101-120000.chat");
        assert_eq!(session.model.as_deref(), Some("llama3-70b-8192"));
        assert_eq!(session.system_prompt(), Some("Be brief."));
        assert_eq!(session.visible_messages().len(), 2);
        assert!(session.summary_text().is_none());
    }

    #[test]
    fn test_session_without_system_message() {
        let session = ChatSession {
            messages: vec![ChatMessage::user("hi"), ChatMessage::assistant("yo")],
            ..Default::default()
        };
        assert!(session.system_prompt().is_none());
        assert_eq!(session.visible_messages().len(), 2);
    }

    #[test]
    fn test_session_missing_fields_default() {
        let session: ChatSession = serde_json::from_str(r#"{"messages": []}"#).unwrap();
        assert!(session.file_id.is_empty());
        assert!(session.display_name.is_empty());
        assert!(session.summary.is_none());
        assert!(session.visible_messages().is_empty());
    }

    // ─── ActionResult Tests ──────────────────────────────────

    #[test]
    fn test_result_block_order_is_fixed() {
        let json = r#"{"prompts": ["x"], "error": "B", "system": "A"}"#;
        let result: ActionResult = serde_json::from_str(json).unwrap();
        assert_eq!(
            result.blocks(),
            vec![
                ResultBlock::System("A".to_string()),
                ResultBlock::Error("B".to_string()),
                ResultBlock::Prompts(vec!["x".to_string()]),
            ]
        );
    }

    #[test]
    fn test_result_all_fields() {
        let json = r#"{
            "summary": "S",
            "file": "userchat/a.chat",
            "model": "m1",
            "messages": 4,
            "models": ["m1", "m2"],
            "results": ["1: user - hi"],
            "prompts": [],
            "error": "E",
            "system": "Y"
        }"#;
        let result: ActionResult = serde_json::from_str(json).unwrap();
        let kinds: Vec<&str> = result
            .blocks()
            .iter()
            .map(|b| match b {
                ResultBlock::System(_) => "system",
                ResultBlock::Error(_) => "error",
                ResultBlock::Prompts(_) => "prompts",
                ResultBlock::Results(_) => "results",
                ResultBlock::Models(_) => "models",
                ResultBlock::FileInfo(_) => "file",
                ResultBlock::Summary(_) => "summary",
            })
            .collect();
        assert_eq!(
            kinds,
            vec!["system", "error", "prompts", "results", "models", "file", "summary"]
        );
    }

    #[test]
    fn test_result_empty_strings_are_absent() {
        let result: ActionResult = serde_json::from_str(r#"{"system": "", "error": ""}"#).unwrap();
        assert!(result.blocks().is_empty());
    }

    #[test]
    fn test_result_assistant_not_a_block() {
        let result: ActionResult = serde_json::from_str(r#"{"assistant": "hello"}"#).unwrap();
        assert_eq!(result.assistant.as_deref(), Some("hello"));
        assert!(result.blocks().is_empty());
    }

    #[test]
    fn test_file_descriptor_display() {
        let descriptor = FileDescriptor {
            file: "userchat/a.chat".to_string(),
            model: Some("m1".to_string()),
            message_count: Some(3),
            modified_secs: None,
        };
        assert_eq!(descriptor.to_string(), "File: userchat/a.chat | Model: m1 | Messages: 3");
    }

    #[test]
    fn test_file_descriptor_with_mtime() {
        let result: ActionResult = serde_json::from_str(
            r#"{"file": "a.chat", "model": "m", "messages": 0, "mtime": 0.5}"#,
        )
        .unwrap();
        let blocks = result.blocks();
        let ResultBlock::FileInfo(descriptor) = &blocks[0] else {
            panic!("expected file descriptor, got {:?}", blocks);
        };
        assert_eq!(
            descriptor.to_string(),
            "File: a.chat | Model: m | Messages: 0 | Modified: 1970-01-01 00:00:00 UTC"
        );
    }

    #[test]
    fn test_file_descriptor_unknown_mtime() {
        let result: ActionResult =
            serde_json::from_str(r#"{"file": "a.chat", "mtime": "unknown"}"#).unwrap();
        let blocks = result.blocks();
        let ResultBlock::FileInfo(descriptor) = &blocks[0] else {
            panic!("expected file descriptor");
        };
        assert!(descriptor.modified_secs.is_none());
        assert_eq!(descriptor.to_string(), "File: a.chat | Model: - | Messages: -");
    }

    #[test]
    fn test_action_response_without_result() {
        let response: ActionResponse =
            serde_json::from_str(r#"{"chat": {"name": "n", "file": "f", "messages": []}}"#).unwrap();
        assert!(response.result.is_none());
        assert_eq!(response.chat.display_name, "n");
    }

    #[test]
    fn test_acknowledgement_success_flag() {
        let ok: Acknowledgement =
            serde_json::from_str(r#"{"success": true, "chats": {}}"#).unwrap();
        assert_eq!(ok.into_result("archive"), Ok(()));

        let rejected: Acknowledgement = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(matches!(
            rejected.into_result("archive"),
            Err(ChatError::Rejected(msg)) if msg.contains("archive")
        ));
    }

    #[test]
    fn test_acknowledgement_without_flag_is_accepted() {
        let ack: Acknowledgement = serde_json::from_str(r#"{"status": "updating"}"#).unwrap();
        assert!(ack.success);
    }

    // ─── Command Tests ───────────────────────────────────────

    #[test]
    fn test_command_wire_encoding() {
        assert_eq!(ChatCommand::Message("hello".into()).to_wire(), "hello");
        assert_eq!(
            ChatCommand::UpdateSystemPrompt("Be terse".into()).to_wire(),
            "/system Be terse"
        );
        assert_eq!(ChatCommand::StartNewSession.to_wire(), "/new");
        assert_eq!(ChatCommand::ListModels.to_wire(), "/model select");
        assert_eq!(ChatCommand::Search("rust".into()).to_wire(), "/search rust");
        assert_eq!(
            ChatCommand::SavePrompt { name: "p".into(), text: "do x".into() }.to_wire(),
            "/prompt new p do x"
        );
        assert_eq!(ChatCommand::Export(None).to_wire(), "/export");
        assert_eq!(ChatCommand::Export(Some("a.md".into())).to_wire(), "/export a.md");
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.api_base.is_empty());
        assert_eq!(config.update_reload_delay_ms, 5000);
        assert!(config.is_mobile(400.0));
        assert!(!config.is_mobile(1024.0));
    }

    #[test]
    fn test_config_partial_override() {
        let config = ClientConfig::from_json(r#"{"api_base": "http://localhost:8000/"}"#).unwrap();
        assert_eq!(config.endpoint("/api/chats"), "http://localhost:8000/api/chats");
        assert_eq!(config.mobile_breakpoint, 768.0);
    }

    #[test]
    fn test_config_invalid_json() {
        let err = ClientConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ChatError::Decode(_)));
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        assert_eq!(
            ChatError::Network("offline".to_string()).to_string(),
            "Network error: offline"
        );
        assert_eq!(
            ChatError::Http { status: 500, body: "boom".to_string() }.to_string(),
            "HTTP 500: boom"
        );
        assert_eq!(ChatError::Refused("no".to_string()).to_string(), "Refused: no");
        assert_eq!(
            ChatError::Rejected("archive".to_string()).to_string(),
            "Rejected by server: archive"
        );
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{{invalid}}").unwrap_err();
        let err: ChatError = serde_err.into();
        assert!(matches!(err, ChatError::Decode(_)));
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_request_kind_supersedes() {
        assert!(RequestKind::Directory.supersedes());
        assert!(RequestKind::Session.supersedes());
        assert!(!RequestKind::Mutation.supersedes());
        assert!(!RequestKind::Settings.supersedes());
    }

    #[test]
    fn test_view_event_ends_request() {
        let kind = RequestKind::Session;
        let label = "message".to_string();
        assert!(!ViewEvent::RequestStarted { kind, label: label.clone() }.ends_request());
        assert!(ViewEvent::RequestFinished { kind, label: label.clone() }.ends_request());
        assert!(ViewEvent::Superseded { kind, label: label.clone() }.ends_request());
        assert!(ViewEvent::RequestFailed { kind, label, message: "x".to_string() }.ends_request());
        assert!(!ViewEvent::ApiKeySaved.ends_request());
    }
}
