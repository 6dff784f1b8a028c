//! Infrastructure layer for council
//!
//! Adapters implementing the application ports against the outside world:
//! an HTTP gateway for OpenAI-compatible chat-completions APIs, and TOML
//! configuration loading for backends, tier panels and classifier keywords.

pub mod config;
pub mod providers;

pub use config::{ConfigLoader, FileConfig};
pub use providers::chat_completions::ChatCompletionsGateway;
