//! Constants used throughout the application.
//!
//! This module contains all constants used in the AIVA application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "aiva";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "AIVA - a mental wellness assistant with mood check-ins";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Chat command that ends the interactive session.
pub const CHAT_LOGOUT_COMMAND: &str = "/logout";

// Configuration Keys & Environment Variables
/// Environment variable for the AIVA data directory.
pub const ENV_VAR_AIVA_DIR: &str = "AIVA_DIR";
/// Environment variable carrying the identity supplied by the login provider.
pub const ENV_VAR_AIVA_USER: &str = "AIVA_USER";
/// Environment variable for the chat completions API key.
pub const ENV_VAR_AIVA_API_KEY: &str = "AIVA_API_KEY";
/// Fallback environment variable for the chat completions API key.
pub const ENV_VAR_TOGETHER_API_KEY: &str = "TOGETHER_API_KEY";
/// Environment variable for the chat completions base URL.
pub const ENV_VAR_AIVA_API_URL: &str = "AIVA_API_URL";
/// Environment variable for the chat model name.
pub const ENV_VAR_AIVA_MODEL: &str = "AIVA_MODEL";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for AIVA data within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".aiva";
/// File name of the mood log database inside the data directory.
pub const DATABASE_FILE_NAME: &str = "mood_logs.db";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// File System Parameters
/// Default POSIX permissions for newly created directories (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;

// Database
/// Maximum number of pooled SQLite connections.
pub const DB_POOL_MAX_SIZE: u32 = 5;
/// How long a writer waits for a competing write transaction, in milliseconds.
pub const DB_BUSY_TIMEOUT_MS: u64 = 5_000;
/// How long opening the store or checking out a connection may take, in milliseconds.
pub const DB_CONNECTION_TIMEOUT_MS: u64 = 2_000;

// Chat Completions
/// Default base URL of the chat completions provider.
pub const DEFAULT_API_URL: &str = "https://api.together.xyz";
/// Path of the OpenAI-compatible chat completions endpoint.
pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";
/// Default chat model.
pub const DEFAULT_CHAT_MODEL: &str = "deepseek-ai/DeepSeek-V3";
/// Upper bound on generated tokens per reply.
pub const CHAT_MAX_TOKENS: u32 = 200;
/// Sampling temperature for replies.
pub const CHAT_TEMPERATURE: f32 = 0.7;
/// Message shown when the assistant cannot be reached.
pub const ASSISTANT_UNAVAILABLE_MESSAGE: &str =
    "⚠️ Sorry, the assistant is currently unavailable.";

// Date/Time Display
/// Format used when listing past mood entries, e.g. "5 March 2024, 9:07 PM".
pub const ENTRY_TIMESTAMP_FORMAT: &str = "%-d %B %Y, %-I:%M %p";

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "aiva";
