//! Setup config loaded from env: TELEGRAM_API_URL (or TELOXIDE_API_URL), LOG_FILE.

use std::env;

use crate::api::{TelegramApi, DEFAULT_API_URL};
use crate::error::{Result, SetupError};

#[derive(Debug, Clone)]
pub struct SetupConfig {
    /// TELEGRAM_API_URL or TELOXIDE_API_URL; default api.telegram.org
    pub telegram_api_url: String,
    /// LOG_FILE; logs go to stderr only when unset
    pub log_file: Option<String>,
}

impl SetupConfig {
    /// Load from environment variables. Load `.env` before calling.
    pub fn from_env() -> Self {
        let telegram_api_url = non_empty_var("TELEGRAM_API_URL")
            .or_else(|| non_empty_var("TELOXIDE_API_URL"))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let log_file = non_empty_var("LOG_FILE");

        Self {
            telegram_api_url,
            log_file,
        }
    }

    /// Validate config: telegram_api_url must be an http(s) URL.
    pub fn validate(&self) -> Result<()> {
        match reqwest::Url::parse(&self.telegram_api_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
            _ => Err(SetupError::Config(format!(
                "TELEGRAM_API_URL (or TELOXIDE_API_URL) is not a valid http(s) URL: {}",
                self.telegram_api_url
            ))),
        }
    }

    pub fn api(&self) -> TelegramApi {
        TelegramApi::new(self.telegram_api_url.clone())
    }
}

/// Env var value; unset and empty (`KEY=` in `.env`) both read as `None`.
fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.trim().is_empty())
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            telegram_api_url: DEFAULT_API_URL.to_string(),
            log_file: None,
        }
    }
}
