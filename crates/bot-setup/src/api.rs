//! Bot API endpoint URLs: `<base>/bot<token>/<method>`.

/// Default Bot API server.
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

pub const SET_WEBHOOK: &str = "setWebhook";
pub const SET_MY_COMMANDS: &str = "setMyCommands";
pub const SEND_MESSAGE: &str = "sendMessage";

/// Builds method URLs against a Bot API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelegramApi {
    base_url: String,
}

impl TelegramApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL for `method`; the token is inserted verbatim.
    pub fn method_url(&self, bot_token: &str, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, bot_token, method)
    }
}

impl Default for TelegramApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
