//! High-level operations for a logged-in user.
//!
//! This module provides the user-facing operations that the presentation
//! layer calls: mood check-ins, history and trend views, and chat turns.
//! Each takes the [`Session`](crate::session::Session) explicitly.

pub mod chat;
pub mod checkin;

// Re-export commonly used functions
pub use chat::send_message;
pub use checkin::{check_in, mood_history, mood_trend};
