//! Server response envelope for state-changing requests.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ChatError;
use crate::session::ChatSession;

/// Body of `/api/load` and `/api/message`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub chat: ChatSession,
    #[serde(default)]
    pub result: Option<ActionResult>,
}

/// `{success}` reply of the archive-style and API-key endpoints. A reply
/// without the flag (`/api/update`) counts as accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    #[serde(default = "accepted")]
    pub success: bool,
}

fn accepted() -> bool {
    true
}

impl Acknowledgement {
    /// `Err(ChatError::Rejected)` when the server reported failure
    pub fn into_result(self, action: &str) -> crate::Result<()> {
        if self.success {
            Ok(())
        } else {
            Err(ChatError::Rejected(format!("{} was not carried out", action)))
        }
    }
}

/// Side information accompanying a state-changing request.
/// Any subset of fields may be present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Assistant reply. It is already part of the returned chat, so it is
    /// never rendered from here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assistant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompts: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Message count of the described session
    #[serde(rename = "messages", default, skip_serializing_if = "Option::is_none")]
    pub message_count: Option<u64>,
    /// Seconds since the epoch, or a placeholder string when unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtime: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// One rendered unit of an [`ActionResult`].
#[derive(Debug, Clone, PartialEq)]
pub enum ResultBlock {
    /// Markdown source
    System(String),
    Error(String),
    Prompts(Vec<String>),
    /// Markdown source lines
    Results(Vec<String>),
    Models(Vec<String>),
    FileInfo(FileDescriptor),
    Summary(String),
}

/// Session reload descriptor (`file` / `model` / `messages` fields)
#[derive(Debug, Clone, PartialEq)]
pub struct FileDescriptor {
    pub file: String,
    pub model: Option<String>,
    pub message_count: Option<u64>,
    pub modified_secs: Option<f64>,
}

impl ActionResult {
    /// Present fields as blocks, always in the order
    /// system, error, prompts, results, models, file descriptor, summary.
    pub fn blocks(&self) -> Vec<ResultBlock> {
        let mut blocks = Vec::new();
        if let Some(text) = non_empty(&self.system) {
            blocks.push(ResultBlock::System(text.to_string()));
        }
        if let Some(text) = non_empty(&self.error) {
            blocks.push(ResultBlock::Error(text.to_string()));
        }
        if let Some(prompts) = &self.prompts {
            blocks.push(ResultBlock::Prompts(prompts.clone()));
        }
        if let Some(results) = &self.results {
            blocks.push(ResultBlock::Results(results.clone()));
        }
        if let Some(models) = &self.models {
            blocks.push(ResultBlock::Models(models.clone()));
        }
        if let Some(file) = non_empty(&self.file) {
            blocks.push(ResultBlock::FileInfo(FileDescriptor {
                file: file.to_string(),
                model: self.model.clone(),
                message_count: self.message_count,
                modified_secs: self.mtime.as_ref().and_then(Value::as_f64),
            }));
        }
        if let Some(text) = non_empty(&self.summary) {
            blocks.push(ResultBlock::Summary(text.to_string()));
        }
        blocks
    }

    pub fn summary_text(&self) -> Option<&str> {
        non_empty(&self.summary)
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

impl fmt::Display for FileDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "File: {} | Model: {} | Messages: {}",
            self.file,
            self.model.as_deref().unwrap_or("-"),
            self.message_count
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string()),
        )?;
        if let Some(modified) = self.modified_secs.and_then(format_timestamp) {
            write!(f, " | Modified: {}", modified)?;
        }
        Ok(())
    }
}

fn format_timestamp(secs: f64) -> Option<String> {
    if !secs.is_finite() {
        return None;
    }
    chrono::DateTime::from_timestamp(secs.trunc() as i64, 0)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}
