/*!
# AIVA - Mental Wellness Assistant

Command-line front end for the mood check-in log, the PHQ-9 questionnaire,
support referrals and the chat assistant.

## Usage

```text
aiva [OPTIONS] <COMMAND>

Commands:
  checkin    Record how you are feeling (happy, calm, neutral, worried, sad, angry)
  history    List your past mood entries, most recent first
  trend      Show how often you reported each mood
  assess     Score a PHQ-9 questionnaire (nine answers, each 0-3)
  referrals  List mental health support contacts
  chat       Chat with AIVA, one message per line; /logout or end of input quits

Options:
  -u, --user <USER>              Identity of the logged-in user [env: AIVA_USER]
      --log-format <LOG_FORMAT>  Log output format [default: text] [possible values: text, json]
  -v, --verbose                  Print verbose output
```

## Configuration

- `AIVA_DIR`: Data directory holding `mood_logs.db` (defaults to `~/.aiva`)
- `AIVA_API_KEY` / `TOGETHER_API_KEY`: Chat API key
- `AIVA_API_URL`, `AIVA_MODEL`: Chat provider and model
- `RUST_LOG`: Log filter (defaults to `info`); logs go to stderr
*/

use aiva::ai::ChatClient;
use aiva::assessment;
use aiva::cli::{CliArgs, Command};
use aiva::config::Config;
use aiva::constants::{
    ASSISTANT_UNAVAILABLE_MESSAGE, CHAT_LOGOUT_COMMAND, DEFAULT_LOG_LEVEL, LOG_FORMAT_JSON,
    TRACING_SERVICE_NAME,
};
use aiva::db::Database;
use aiva::errors::{AppError, AppResult, SessionError};
use aiva::referrals::REFERRALS;
use aiva::session::{Session, UserId};
use aiva::{ops, render};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::{debug, error, info, info_span, warn};
use tracing_subscriber::EnvFilter;

/// Initializes tracing to stderr so stdout carries only command output.
fn init_tracing(log_format: &str, verbose: bool) {
    let default_level = if verbose { "debug" } else { DEFAULT_LOG_LEVEL };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if log_format == LOG_FORMAT_JSON {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn login(args: &CliArgs) -> AppResult<Session> {
    let raw = args.user.as_deref().ok_or(SessionError::NotLoggedIn)?;
    Ok(Session::login(UserId::new(raw)?))
}

fn open_store(config: &Config) -> AppResult<Database> {
    config.ensure_data_dir()?;
    let db = Database::open(&config.db_path())?;
    db.initialize_schema()?;
    Ok(db)
}

/// Reads one message per line and answers each until `/logout` or end of input.
fn run_chat(client: &ChatClient, session: &mut Session) -> AppResult<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "Chat with AIVA. Type {} to end the session.", CHAT_LOGOUT_COMMAND)?;
    for line in stdin.lock().lines() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text == CHAT_LOGOUT_COMMAND {
            break;
        }

        match ops::send_message(client, session, text) {
            Ok(reply) => writeln!(stdout, "AIVA: {}", reply)?,
            Err(AppError::Chat(e)) => {
                warn!("Assistant unavailable: {}", e);
                writeln!(stdout, "AIVA: {}", ASSISTANT_UNAVAILABLE_MESSAGE)?;
            }
            Err(e) => return Err(e),
        }
        stdout.flush()?;
    }
    Ok(())
}

fn run(args: CliArgs) -> AppResult<()> {
    match args.command {
        Command::Referrals => {
            println!("Support & Referrals");
            for referral in REFERRALS {
                println!("- {}", referral);
            }
            Ok(())
        }
        Command::Assess { ref answers } => {
            let result = assessment::score(answers)?;
            info!(total = result.total, severity = %result.severity, "Assessment scored");
            println!("{}", render::render_assessment(&result));
            if result.needs_urgent_attention() {
                for referral in REFERRALS {
                    println!("- {}", referral);
                }
            }
            Ok(())
        }
        Command::Checkin { ref mood, ref note } => {
            let config = Config::load()?;
            config.validate()?;
            let session = login(&args)?;
            let db = open_store(&config)?;

            let id = ops::check_in(&db, &session, mood, note.as_deref())?;
            println!("Mood saved (entry {})", id);
            session.logout();
            Ok(())
        }
        Command::History { json } => {
            let config = Config::load()?;
            config.validate()?;
            let session = login(&args)?;
            let db = open_store(&config)?;

            let entries = ops::mood_history(&db, &session)?;
            if json {
                let out = serde_json::to_string_pretty(&entries).map_err(io::Error::from)?;
                println!("{}", out);
            } else {
                println!("{}", render::render_history(&entries));
            }
            session.logout();
            Ok(())
        }
        Command::Trend { json } => {
            let config = Config::load()?;
            config.validate()?;
            let session = login(&args)?;
            let db = open_store(&config)?;

            let trend = ops::mood_trend(&db, &session)?;
            if json {
                let out = serde_json::to_string_pretty(&trend).map_err(io::Error::from)?;
                println!("{}", out);
            } else {
                println!("{}", render::render_trend(&trend));
            }
            session.logout();
            Ok(())
        }
        Command::Chat => {
            let config = Config::load()?;
            config.validate()?;
            let mut session = login(&args)?;
            let client = ChatClient::new(
                config.api_url.as_str(),
                config.require_api_key()?,
                config.model.as_str(),
            );

            run_chat(&client, &mut session)?;
            session.logout();
            Ok(())
        }
    }
}

/// The main entry point for the aiva application.
///
/// Initializes logging, parses arguments, runs the selected command inside a
/// root span carrying a correlation id, and reports any error once on stderr.
fn main() -> ExitCode {
    let args = CliArgs::parse_args();
    init_tracing(&args.log_format, args.verbose);

    let correlation_id = uuid::Uuid::new_v4();
    let root_span = info_span!(
        "app_invocation",
        service_name = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = root_span.enter();

    debug!("CLI arguments: {:?}", args);
    info!("Starting aiva");

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
