//! System prompt and message builders for the wellness chat.

use super::client::Message;

/// System prompt establishing the assistant's persona.
pub const SYSTEM_PROMPT: &str = "You are a supportive AI wellness therapist named AIVA.";

/// Builds the message list for the next chat turn.
///
/// The conversation so far is sent in full, followed by the new user message.
/// A history that does not start with a system message gets the default
/// system prompt in front.
pub fn chat_prompt(history: &[Message], user_message: &str) -> Vec<Message> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    if history.first().map(|m| m.role.as_str()) != Some("system") {
        messages.push(Message::system(SYSTEM_PROMPT));
    }
    messages.extend_from_slice(history);
    messages.push(Message::user(user_message));
    messages
}
