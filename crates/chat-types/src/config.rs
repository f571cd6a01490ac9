use serde::{Deserialize, Serialize};

/// Client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix for every `/api/...` path. Empty means same origin.
    pub api_base: String,
    /// Viewports narrower than this (logical px) count as mobile.
    pub mobile_breakpoint: f32,
    /// Delay before the page reloads after a server update was triggered
    pub update_reload_delay_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            mobile_breakpoint: 768.0,
            update_reload_delay_ms: 5000,
        }
    }
}

impl ClientConfig {
    /// Parse a JSON override. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }

    pub fn is_mobile(&self, viewport_width: f32) -> bool {
        viewport_width < self.mobile_breakpoint
    }
}
