//! Command-line interface, the presentation layer for the mood log.

use crate::constants::{APP_DESCRIPTION, APP_NAME, ENV_VAR_AIVA_USER, LOG_FORMAT_JSON, LOG_FORMAT_TEXT};
use clap::{Parser, Subcommand};

/// AIVA - a mental wellness assistant with mood check-ins
#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = APP_DESCRIPTION)]
#[command(author, version, long_about = None)]
pub struct CliArgs {
    /// Identity of the logged-in user, as supplied by the login provider
    #[arg(short = 'u', long, global = true, env = ENV_VAR_AIVA_USER)]
    pub user: Option<String>,

    /// Log output format
    #[arg(long, global = true, default_value = LOG_FORMAT_TEXT, value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON])]
    pub log_format: String,

    /// Print verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Record how you are feeling (happy, calm, neutral, worried, sad, angry)
    Checkin {
        /// Current mood
        mood: String,

        /// Optional note to go with it
        #[arg(short = 'n', long)]
        note: Option<String>,
    },

    /// List your past mood entries, most recent first
    History {
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how often you reported each mood
    Trend {
        /// Print counts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score a PHQ-9 questionnaire (nine answers, each 0-3)
    Assess {
        /// Answers to questions 1-9, in order
        #[arg(required = true, num_args = 1..)]
        answers: Vec<u8>,
    },

    /// List mental health support contacts
    Referrals,

    /// Chat with AIVA, one message per line; /logout or end of input quits
    Chat,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_checkin_with_note() {
        let args =
            CliArgs::try_parse_from(["aiva", "--user", "a@example.com", "checkin", "calm", "--note", "tea"])
                .unwrap();
        assert_eq!(args.user.as_deref(), Some("a@example.com"));
        assert_eq!(
            args.command,
            Command::Checkin {
                mood: "calm".to_string(),
                note: Some("tea".to_string())
            }
        );
    }

    #[test]
    fn test_checkin_accepts_any_text_for_mood() {
        // Validation happens in the store so the error is reported consistently.
        let args = CliArgs::try_parse_from(["aiva", "checkin", "ecstatic"]).unwrap();
        assert!(matches!(args.command, Command::Checkin { ref mood, .. } if mood == "ecstatic"));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args =
            CliArgs::try_parse_from(["aiva", "history", "--json", "-u", "b@example.com", "-v"]).unwrap();
        assert_eq!(args.command, Command::History { json: true });
        assert_eq!(args.user.as_deref(), Some("b@example.com"));
        assert!(args.verbose);
    }

    #[test]
    fn test_assess_answers() {
        let args =
            CliArgs::try_parse_from(["aiva", "assess", "0", "1", "2", "3", "0", "1", "2", "3", "0"]).unwrap();
        assert_eq!(
            args.command,
            Command::Assess {
                answers: vec![0, 1, 2, 3, 0, 1, 2, 3, 0]
            }
        );
    }

    #[test]
    fn test_assess_rejects_non_numeric_answers() {
        assert!(CliArgs::try_parse_from(["aiva", "assess", "often"]).is_err());
    }

    #[test]
    fn test_log_format_values() {
        let args = CliArgs::try_parse_from(["aiva", "--log-format", "json", "referrals"]).unwrap();
        assert_eq!(args.log_format, "json");
        assert!(CliArgs::try_parse_from(["aiva", "--log-format", "xml", "referrals"]).is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(CliArgs::try_parse_from(["aiva"]).is_err());
    }
}
