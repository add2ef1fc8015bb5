//! Configuration management for the `gezgin` library
//!
//! Handles loading configuration from files and environment variables,
//! resolving the Gemini API credential, and validating all settings.

use crate::error::GezginError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable checked when the configured key is absent
const FALLBACK_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Root configuration structure for the `gezgin` library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GezginConfig {
    /// Gemini API configuration
    pub gemini: GeminiConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Gemini API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key; when unset, the `GEMINI_API_KEY` environment variable is
    /// tried at resolution time
    pub api_key: Option<String>,
    /// Base URL for the generative language API
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,
    /// Model identifier
    #[serde(default = "default_gemini_model")]
    pub model: String,
    /// Request timeout in seconds
    #[serde(default = "default_gemini_timeout")]
    pub timeout_seconds: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or compact)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_gemini_model() -> String {
    "gemini-pro".to_string()
}

fn default_gemini_timeout() -> u32 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for GezginConfig {
    fn default() -> Self {
        Self {
            gemini: GeminiConfig::default(),
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_gemini_base_url(),
            model: default_gemini_model(),
            timeout_seconds: default_gemini_timeout(),
        }
    }
}

impl GeminiConfig {
    /// Resolve the API credential, checking the two sources in fixed
    /// preference order: the configured value (file or `GEZGIN_GEMINI__API_KEY`
    /// environment override) first, then the bare `GEMINI_API_KEY`
    /// environment variable. Absence is reported at first use, not here.
    #[must_use]
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(key) = &self.api_key
            && !key.is_empty()
        {
            return Some(key.clone());
        }
        std::env::var(FALLBACK_API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
    }
}

impl GezginConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with GEZGIN_ prefix, e.g.
        // GEZGIN_GEMINI__API_KEY
        builder = builder.add_source(
            Environment::with_prefix("GEZGIN")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: GezginConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gezgin").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.gemini.base_url.is_empty() {
            self.gemini.base_url = default_gemini_base_url();
        }
        if self.gemini.model.is_empty() {
            self.gemini.model = default_gemini_model();
        }
        if self.gemini.timeout_seconds == 0 {
            self.gemini.timeout_seconds = default_gemini_timeout();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_key()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate the API key when one is present
    pub fn validate_api_key(&self) -> Result<()> {
        if let Some(api_key) = &self.gemini.api_key {
            if api_key.is_empty() {
                return Err(GezginError::config(
                    "Gemini API key cannot be empty if provided. Either remove it or provide a valid key.",
                )
                .into());
            }

            if api_key.len() < 8 {
                return Err(GezginError::config(
                    "Gemini API key appears to be invalid (too short). Please check your API key.",
                )
                .into());
            }

            if api_key.len() > 200 {
                return Err(GezginError::config(
                    "Gemini API key appears to be invalid (too long). Please check your API key.",
                )
                .into());
            }
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.gemini.timeout_seconds > 300 {
            return Err(
                GezginError::config("Gemini request timeout cannot exceed 300 seconds").into(),
            );
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(GezginError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "compact"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(GezginError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.gemini.base_url.starts_with("http://")
            && !self.gemini.base_url.starts_with("https://")
        {
            return Err(
                GezginError::config("Gemini base URL must be a valid HTTP or HTTPS URL").into(),
            );
        }

        Ok(())
    }
}
