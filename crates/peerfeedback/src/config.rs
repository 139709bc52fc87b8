//! Configuration management for peerfeedback.
//!
//! Configuration only shapes the terminal session and how summaries are
//! rendered. The roster and feedback seeds are literal data in
//! [`crate::seed`] and are never read from here.

use std::fmt;
use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory name under the platform config dir.
const CONFIG_DIR_NAME: &str = "peerfeedback";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "PEERFEEDBACK_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `PEERFEEDBACK_`, sections split on `__`)
/// 2. TOML config file at `~/.config/peerfeedback/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Interactive session configuration.
    pub session: SessionConfig,
    /// Summary rendering configuration.
    pub summary: SummaryConfig,
}

/// Interactive session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Prompt prefix; the active panel is appended in brackets.
    pub prompt: String,
    /// Panel the session opens on.
    pub start_panel: Panel,
    /// Echo each input line after the prompt. Useful when input is piped.
    pub echo_commands: bool,
}

/// Summary rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Attribution shown on each feedback card, followed by `#n`.
    pub anonymous_label: String,
    /// Output format for rendered summaries.
    pub format: SummaryFormat,
}

/// The two views of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    /// Giving feedback.
    #[default]
    Submit,
    /// Viewing aggregated feedback for one peer.
    Summary,
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Submit => write!(f, "submit"),
            Self::Summary => write!(f, "summary"),
        }
    }
}

/// How summaries are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    /// Human-readable cards.
    #[default]
    Plain,
    /// One pretty-printed JSON document per summary.
    Json,
}

impl fmt::Display for SummaryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: "peerfb".to_string(),
            start_panel: Panel::Submit,
            echo_commands: false,
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            anonymous_label: "Anonymous Peer".to_string(),
            format: SummaryFormat::Plain,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing file is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigValidation`] if the prompt or the anonymous label
    /// is blank.
    pub fn validate(&self) -> Result<()> {
        if self.session.prompt.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "session.prompt must not be blank".to_string(),
            });
        }

        if self.summary.anonymous_label.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "summary.anonymous_label must not be blank".to_string(),
            });
        }

        Ok(())
    }
}
