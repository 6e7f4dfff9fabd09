//! Chat passthrough to a hosted language model.
//!
//! The assistant itself does no reasoning: messages are forwarded to an
//! OpenAI-compatible chat completions endpoint (Together.ai by default) and
//! the first choice is returned.
//!
//! # Module Structure
//!
//! - `client`: blocking HTTP client for the chat completions API
//! - `prompts`: system prompt and message builders
//!
//! # Example
//!
//! ```no_run
//! use aiva::ai::{ChatClient, Message};
//!
//! let client = ChatClient::new("https://api.together.xyz", "api-key", "deepseek-ai/DeepSeek-V3");
//! let reply = client.chat(&[Message::user("Hello")])?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod client;
pub mod prompts;

// Re-export commonly used types
pub use client::{ChatClient, Message};
pub use prompts::{chat_prompt, SYSTEM_PROMPT};
