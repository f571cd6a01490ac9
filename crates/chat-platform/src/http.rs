//! REST adapter for the chat backend.
//!
//! Every call is a single `fetch()` through gloo-net against the paths under
//! `/api`. Non-2xx responses become [`ChatError::Http`]; bodies that do not
//! decode become [`ChatError::Decode`]; a `{"success": false}` reply becomes
//! [`ChatError::Rejected`]. Nothing is retried.
//!
//! Status and body handling live in plain functions over `(status, text)` so
//! they can be checked without a server.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use chat_core::ports::ChatBackend;
use chat_types::{
    Result, ChatError,
    command::ChatCommand,
    config::ClientConfig,
    result::{Acknowledgement, ActionResponse},
    session::{ChatDirectory, ChatSession},
};

pub struct HttpBackend {
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.config.endpoint(path);
        log::debug!("GET {}", url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;
        decode_body(&read(response).await?)
    }

    /// POST returning the body of a 2xx response
    async fn post(&self, path: &str, body: Option<Value>) -> Result<String> {
        let url = self.config.endpoint(path);
        log::debug!("POST {}", url);
        let builder = Request::post(&url);
        let response = match body {
            Some(body) => builder
                .json(&body)
                .map_err(|e| ChatError::Network(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ChatError::Network(e.to_string()))?;
        read(response).await
    }

    /// POST answered with a `{success}` acknowledgement
    async fn post_action(&self, path: &str, body: Option<Value>) -> Result<()> {
        let text = self.post(path, body).await?;
        acknowledge(path, &text)
    }
}

async fn read(response: Response) -> Result<String> {
    let status = response.status();
    let ok = response.ok();
    match response.text().await {
        Ok(text) => check_status(status, text),
        Err(e) if ok => Err(ChatError::Network(e.to_string())),
        Err(_) => check_status(status, "unknown error".to_string()),
    }
}

/// Pass a 2xx body through; anything else is an HTTP error carrying the body.
pub fn check_status(status: u16, body: String) -> Result<String> {
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(ChatError::Http { status, body })
    }
}

pub fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T> {
    Ok(serde_json::from_str(text)?)
}

/// Turn an acknowledgement body into a result; `success: false` is a rejection.
pub fn acknowledge(path: &str, text: &str) -> Result<()> {
    decode_body::<Acknowledgement>(text)?.into_result(path)
}

/// `{filename}` body used by load, archive, restore and delete
pub fn filename_body(file_id: &str) -> Value {
    json!({ "filename": file_id })
}

/// `{message}` body carrying a command's wire form
pub fn message_body(command: &ChatCommand) -> Value {
    json!({ "message": command.to_wire() })
}

pub fn api_key_body(api_key: &str) -> Value {
    json!({ "api_key": api_key })
}

#[async_trait(?Send)]
impl ChatBackend for HttpBackend {
    async fn list_chats(&self) -> Result<ChatDirectory> {
        self.get("/api/chats").await
    }

    async fn current_chat(&self) -> Result<ChatSession> {
        self.get("/api/chat").await
    }

    async fn load_chat(&self, file_id: &str) -> Result<ActionResponse> {
        let text = self.post("/api/load", Some(filename_body(file_id))).await?;
        decode_body(&text)
    }

    async fn send(&self, command: &ChatCommand) -> Result<ActionResponse> {
        let text = self.post("/api/message", Some(message_body(command))).await?;
        decode_body(&text)
    }

    async fn archive(&self, file_id: &str) -> Result<()> {
        self.post_action("/api/archive", Some(filename_body(file_id))).await
    }

    async fn restore(&self, file_id: &str) -> Result<()> {
        self.post_action("/api/restore", Some(filename_body(file_id))).await
    }

    async fn delete(&self, file_id: &str) -> Result<()> {
        self.post_action("/api/delete", Some(filename_body(file_id))).await
    }

    async fn clear_archive(&self) -> Result<()> {
        self.post_action("/api/clear-archive", None).await
    }

    async fn set_api_key(&self, api_key: &str) -> Result<()> {
        self.post_action("/api/api-key", Some(api_key_body(api_key))).await
    }

    async fn trigger_update(&self) -> Result<()> {
        self.post_action("/api/update", None).await
    }
}
