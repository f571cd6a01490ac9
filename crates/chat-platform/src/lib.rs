//! Browser adapters for the chat client.
//!
//! [`http::HttpBackend`] implements [`chat_core::ports::ChatBackend`] with
//! `fetch()`; [`page`] covers the few things that touch the hosting page.

pub mod http;
pub mod page;

pub use http::HttpBackend;
