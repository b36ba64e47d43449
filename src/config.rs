//! Runtime configuration
//!
//! Read from the process environment after an optional `.env` file:
//! - `QRGUARD_LOCALE` - `en` (default) or `es`
//! - `QRGUARD_OUTPUT` - `json` (default) or `text`

use crate::error::ConfigError;
use crate::models::Locale;
use crate::utils::env;

pub const LOCALE_VAR: &str = "QRGUARD_LOCALE";
pub const OUTPUT_VAR: &str = "QRGUARD_OUTPUT";

/// How hosts print scan results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "text",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "text" => Some(OutputFormat::Text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub locale: Locale,
    pub output: OutputFormat,
}

impl Config {
    /// Load `.env` (if any) and read configuration from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        env::load_env();
        Self::from_lookup(env::var)
    }

    /// Build configuration from an arbitrary key lookup; unset keys keep defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup(LOCALE_VAR) {
            config.locale = Locale::from_str(&value).ok_or(ConfigError::InvalidValue {
                key: LOCALE_VAR,
                value,
            })?;
        }

        if let Some(value) = lookup(OUTPUT_VAR) {
            config.output = OutputFormat::from_str(&value).ok_or(ConfigError::InvalidValue {
                key: OUTPUT_VAR,
                value,
            })?;
        }

        Ok(config)
    }
}
