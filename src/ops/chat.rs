//! Chat turn handling for a logged-in user.

use crate::ai::{chat_prompt, ChatClient};
use crate::errors::AppResult;
use crate::session::Session;
use tracing::{info, info_span, warn};

/// Sends one user message with the session's conversation so far.
///
/// On success the user message and the reply are appended to the session's
/// history. On failure the session is left unchanged, so the failed turn is
/// not replayed to the model later.
///
/// # Errors
///
/// Returns `AppError::Chat` if the provider is unreachable, answers with a
/// non-success status, or returns an unusable body.
pub fn send_message(client: &ChatClient, session: &mut Session, text: &str) -> AppResult<String> {
    let span = info_span!("chat_turn", session_id = %session.id(), model = %client.model());
    let _guard = span.enter();

    let messages = chat_prompt(session.chat_history(), text);
    match client.chat(&messages) {
        Ok(reply) => {
            session.push_exchange(text, reply.as_str());
            info!("Chat turn completed");
            Ok(reply)
        }
        Err(e) => {
            warn!("Chat turn failed: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{AppError, ChatError};
    use crate::session::UserId;
    use mockito::Matcher;
    use serde_json::json;

    fn reply_body(content: &str) -> String {
        json!({"choices": [{"message": {"role": "assistant", "content": content}}]}).to_string()
    }

    #[test]
    fn test_successful_turn_extends_history() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(reply_body("That sounds hard."))
            .create();

        let client = ChatClient::new(server.url(), "key", "model");
        let mut session = Session::login(UserId::new("a@example.com").unwrap());

        let reply = send_message(&client, &mut session, "I had a rough day").unwrap();
        assert_eq!(reply, "That sounds hard.");

        let history = session.chat_history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[1].content, "I had a rough day");
        assert_eq!(history[2].content, "That sounds hard.");
    }

    #[test]
    fn test_second_turn_sends_previous_exchange() {
        let mut first_server = mockito::Server::new();
        first_server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(reply_body("one"))
            .create();

        let mut session = Session::login(UserId::new("a@example.com").unwrap());
        let client = ChatClient::new(first_server.url(), "key", "model");
        assert_eq!(send_message(&client, &mut session, "first").unwrap(), "one");

        let mut second_server = mockito::Server::new();
        let mock = second_server
            .mock("POST", "/v1/chat/completions")
            .match_body(Matcher::Regex(
                r#"\{"role":"user","content":"first"\},\{"role":"assistant","content":"one"\},\{"role":"user","content":"second"\}\]"#
                    .to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(reply_body("two"))
            .create();

        let client = ChatClient::new(second_server.url(), "key", "model");
        assert_eq!(send_message(&client, &mut session, "second").unwrap(), "two");
        mock.assert();
    }

    #[test]
    fn test_failed_turn_leaves_history_untouched() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/v1/chat/completions")
            .with_status(500)
            .create();

        let client = ChatClient::new(server.url(), "key", "model");
        let mut session = Session::login(UserId::new("a@example.com").unwrap());

        let err = send_message(&client, &mut session, "hello").unwrap_err();
        assert!(matches!(
            err,
            AppError::Chat(ChatError::Unavailable { status: 500 })
        ));
        assert_eq!(session.chat_history().len(), 1);
    }
}
