/*!
# AIVA

AIVA is a small mental wellness assistant. Its core is a mood check-in log:
users record how they feel, review their past entries, and see how often each
mood came up. Around it sit a chat passthrough to a hosted language model, a
PHQ-9 questionnaire scored by fixed thresholds, and a list of support contacts.

## Core Features

- Record a mood check-in (happy, calm, neutral, worried, sad, angry) with an optional note
- List past entries, most recent first
- Show the frequency of each mood
- Chat with the assistant during a logged-in session
- Score a PHQ-9 questionnaire

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `mood`: Mood values and mood log entries
- `db`: Append-only SQLite mood log behind the `MoodStore` trait
- `trend`: Aggregation of entries into per-mood counts
- `session`: Explicit per-login context
- `ops`: Session-scoped operations called by the presentation layer
- `ai`: Chat completions client
- `assessment` / `referrals`: Questionnaire scoring and static contacts
- `cli` / `render`: Command-line presentation
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure

## Usage Example

```rust,no_run
use aiva::db::Database;
use aiva::session::{Session, UserId};
use aiva::{ops, Config};

fn main() -> aiva::AppResult<()> {
    let config = Config::load()?;
    config.ensure_data_dir()?;

    let db = Database::open(&config.db_path())?;
    db.initialize_schema()?;

    let session = Session::login(UserId::new("ana@example.com")?);
    ops::check_in(&db, &session, "calm", Some("long walk"))?;
    let trend = ops::mood_trend(&db, &session)?;
    println!("{} check-ins so far", trend.total());
    session.logout();
    Ok(())
}
```
*/

/// Chat completions client and prompts
pub mod ai;
/// PHQ-9 questionnaire scoring
pub mod assessment;
/// Command-line interface handling using clap
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Mood log storage
pub mod db;
/// Error types and utilities for error handling
pub mod errors;
/// Mood values and entries
pub mod mood;
/// Session-scoped user operations
pub mod ops;
/// Support contacts
pub mod referrals;
/// Terminal rendering
pub mod render;
/// Per-login session context
pub mod session;
/// Mood frequency aggregation
pub mod trend;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use db::{Database, MoodStore};
pub use errors::{AppError, AppResult};
pub use mood::{EntryId, Mood, MoodEntry};
pub use session::{Session, UserId};
pub use trend::{aggregate, MoodTrend};
