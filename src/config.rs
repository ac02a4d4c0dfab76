// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client configuration loaded from environment variables.
//!
//! Built once at startup and passed explicitly to every API client, so all
//! resources share the same base URL.

use std::env;

/// Base URL of the hosted fitness API.
pub const DEFAULT_API_URL: &str = "https://fitnessapp-4g6c.onrender.com/api";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact human-readable lines
    Text,
    /// Structured JSON, one object per event
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL shared by all resource endpoints (no trailing slash)
    pub api_base_url: String,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8080/api".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("FITNESS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let log_format = env::var("FITNESS_LOG_FORMAT")
            .map(|v| LogFormat::parse(&v))
            .unwrap_or(LogFormat::Text);

        Ok(Self {
            api_base_url: normalize_base_url(&api_base_url)?,
            log_format,
        })
    }

    /// Replace the base URL (e.g. from a command line flag).
    pub fn with_api_base_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.api_base_url = normalize_base_url(url)?;
        Ok(self)
    }
}

fn normalize_base_url(url: &str) -> Result<String, ConfigError> {
    let url = url.trim().trim_end_matches('/');
    if url.is_empty() {
        return Err(ConfigError::Invalid("FITNESS_API_URL", "must not be empty".to_string()));
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::Invalid(
            "FITNESS_API_URL",
            format!("expected an http(s) URL, got {}", url),
        ));
    }
    Ok(url.to_string())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
