use std::time::Duration;

use anyhow::{Context, Result};

use crate::enhancement::enhancer::EnhancerMode;
use crate::llm_client::DEFAULT_BASE_URL;

/// Values shipped in `.env` templates; treated as "no key".
const PLACEHOLDER_API_KEYS: &[&str] = &["your_openai_api_key_here", "your-openai-api-key-here"];

/// Application configuration loaded from environment variables.
/// Nothing is required: without an API key the service runs in demo mode.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// The API key, unless it is missing, blank or a placeholder.
    pub fn live_api_key(&self) -> Option<&str> {
        self.openai_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !is_placeholder_key(key))
    }

    pub fn mode(&self) -> EnhancerMode {
        if self.live_api_key().is_some() {
            EnhancerMode::Live
        } else {
            EnhancerMode::Demo
        }
    }

    #[cfg(test)]
    pub fn for_tests(api_key: Option<&str>) -> Self {
        Config {
            openai_api_key: api_key.map(str::to_string),
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            port: 5000,
            rust_log: "info".to_string(),
        }
    }
}

pub fn is_placeholder_key(key: &str) -> bool {
    key.is_empty() || PLACEHOLDER_API_KEYS.contains(&key)
}

/// Targets probed by the `check-servers` binary.
#[derive(Debug, Clone)]
pub struct StatusCheckConfig {
    pub backend_status_url: String,
    pub frontend_host: String,
    pub frontend_port: u16,
    pub timeout: Duration,
}

impl StatusCheckConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(StatusCheckConfig {
            backend_status_url: std::env::var("BACKEND_STATUS_URL")
                .unwrap_or_else(|_| "http://localhost:5000/status".to_string()),
            frontend_host: std::env::var("FRONTEND_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            frontend_port: std::env::var("FRONTEND_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .context("FRONTEND_PORT must be a valid port number")?,
            timeout: Duration::from_secs(
                std::env::var("CHECK_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "2".to_string())
                    .parse::<u64>()
                    .context("CHECK_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
        })
    }

    /// Host and port of the backend, taken from the status URL.
    pub fn backend_address(&self) -> Result<(String, u16)> {
        let url = reqwest::Url::parse(&self.backend_status_url)
            .with_context(|| format!("Invalid BACKEND_STATUS_URL '{}'", self.backend_status_url))?;
        let host = url
            .host_str()
            .with_context(|| format!("BACKEND_STATUS_URL '{}' has no host", url))?
            .to_string();
        let port = url
            .port_or_known_default()
            .with_context(|| format!("BACKEND_STATUS_URL '{}' has no port", url))?;
        Ok((host, port))
    }
}
