use std::env;

use crate::errors::{Result, ServiceError};

pub const DEFAULT_MINI_APP_URL: &str = "https://marathonsbot.bodylineapp.com";

#[derive(Clone)]
pub struct BotConfig {
    pub telegram_bot_token: String,
    pub mini_app_url: String,
    pub metrics_port: Option<u16>,
}

impl BotConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let telegram_bot_token = lookup("TELEGRAM_BOT_TOKEN")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ServiceError::Config("TELEGRAM_BOT_TOKEN not set".to_string()))?;

        let mini_app_url = lookup("MINI_APP_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_MINI_APP_URL.to_string());

        // The cache buster is appended as `?t=`, so the base must not carry its own query.
        if mini_app_url.contains(['?', '#']) {
            return Err(ServiceError::Config(format!(
                "MINI_APP_URL must not contain a query or fragment: {}",
                mini_app_url
            )));
        }

        let metrics_port = match lookup("METRICS_PORT") {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u16>()
                    .map_err(|e| ServiceError::Config(format!("Invalid METRICS_PORT: {}", e)))?,
            ),
            None => None,
        };

        Ok(Self {
            telegram_bot_token,
            mini_app_url,
            metrics_port,
        })
    }
}

// The token never shows up in logs.
impl std::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotConfig")
            .field("telegram_bot_token", &"<redacted>")
            .field("mini_app_url", &self.mini_app_url)
            .field("metrics_port", &self.metrics_port)
            .finish()
    }
}
