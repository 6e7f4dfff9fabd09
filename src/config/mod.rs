//! Configuration management for the aiva application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults.
//!
//! # Environment Variables
//!
//! - `AIVA_DIR`: Data directory holding the mood log (defaults to ~/.aiva)
//! - `AIVA_API_KEY`: API key for the chat completions provider
//! - `TOGETHER_API_KEY`: Fallback API key if AIVA_API_KEY is not set
//! - `AIVA_API_URL`: Base URL of the chat completions provider (defaults to https://api.together.xyz)
//! - `AIVA_MODEL`: Chat model name (defaults to deepseek-ai/DeepSeek-V3)
//! - `HOME`: Used for expanding the default data directory path

use crate::constants::{
    DATABASE_FILE_NAME, DEFAULT_API_URL, DEFAULT_CHAT_MODEL, DEFAULT_DATA_SUBDIR,
    ENV_VAR_AIVA_API_KEY, ENV_VAR_AIVA_API_URL, ENV_VAR_AIVA_DIR, ENV_VAR_AIVA_MODEL,
    ENV_VAR_HOME, ENV_VAR_TOGETHER_API_KEY, REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult, ChatError};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration for the aiva application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use aiva::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/path/to/aiva"),
///     ..Config::default()
/// };
/// assert!(config.db_path().ends_with("mood_logs.db"));
/// ```
#[derive(Clone)]
pub struct Config {
    /// Directory holding the mood log database.
    pub data_dir: PathBuf,

    /// API key for the chat completions provider.
    ///
    /// Loaded from AIVA_API_KEY, then TOGETHER_API_KEY. Chat is unavailable
    /// without it; mood features work regardless.
    pub api_key: Option<String>,

    /// Base URL of the chat completions provider.
    pub api_url: String,

    /// Chat model name passed through to the provider.
    pub model: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &self.data_dir)
            .field(
                "api_key",
                &self.api_key.as_ref().map(|_| REDACTED_PLACEHOLDER),
            )
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .finish()
    }
}

impl Default for Config {
    /// Creates a new Config with default values and no data directory.
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from(""),
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_CHAT_MODEL.to_string(),
        }
    }
}

/// Reads an environment variable, treating an empty value as unset.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The data directory path is expanded with `shellexpand` to handle `~`
    /// and environment variable references.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the data directory path expansion fails
    /// or the resulting path is empty.
    pub fn load() -> AppResult<Self> {
        let data_dir_str = non_empty_var(ENV_VAR_AIVA_DIR).unwrap_or_else(|| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
        });

        // Expand the path (handles ~ and environment variables)
        let expanded_path = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;

        let data_dir = PathBuf::from(expanded_path.into_owned());
        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        let api_key =
            non_empty_var(ENV_VAR_AIVA_API_KEY).or_else(|| non_empty_var(ENV_VAR_TOGETHER_API_KEY));
        let api_url = non_empty_var(ENV_VAR_AIVA_API_URL).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let model = non_empty_var(ENV_VAR_AIVA_MODEL).unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string());

        let config = Config {
            data_dir,
            api_key,
            api_url,
            model,
        };
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` with one of the following messages:
    /// - "Data directory path is empty"
    /// - "Data directory must be an absolute path"
    /// - "API URL must start with http:// or https://"
    /// - "Model name is empty"
    ///
    /// # Examples
    ///
    /// ```
    /// use aiva::Config;
    /// use std::path::PathBuf;
    ///
    /// let valid = Config {
    ///     data_dir: PathBuf::from("/absolute/path"),
    ///     ..Config::default()
    /// };
    /// assert!(valid.validate().is_ok());
    ///
    /// let relative = Config {
    ///     data_dir: PathBuf::from("relative/path"),
    ///     ..Config::default()
    /// };
    /// assert!(relative.validate().is_err());
    /// ```
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(AppError::Config(
                "API URL must start with http:// or https://".to_string(),
            ));
        }

        if self.model.trim().is_empty() {
            return Err(AppError::Config("Model name is empty".to_string()));
        }

        Ok(())
    }

    /// Location of the mood log database.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE_NAME)
    }

    /// The API key, or `ChatError::MissingApiKey` if none is configured.
    pub fn require_api_key(&self) -> AppResult<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| ChatError::MissingApiKey.into())
    }

    /// Creates the data directory if needed, owner-only on unix.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` if the directory cannot be created.
    pub fn ensure_data_dir(&self) -> AppResult<()> {
        ensure_dir_exists(&self.data_dir)
    }
}

fn ensure_dir_exists(path: &Path) -> AppResult<()> {
    if path.is_dir() {
        return Ok(());
    }

    debug!("Creating data directory: {:?}", path);
    fs::create_dir_all(path)?;

    #[cfg(unix)]
    {
        use crate::constants::DEFAULT_DIR_PERMISSIONS;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(DEFAULT_DIR_PERMISSIONS))?;
    }

    Ok(())
}
