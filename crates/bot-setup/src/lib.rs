//! # Bot API setup
//!
//! Configures a Telegram bot through the Bot API: registers the webhook (`setWebhook`),
//! the slash command menu (`setMyCommands`), and sends test or forwarded SMS messages
//! (`sendMessage`).
//! The HTTP client and the JSON formatter are traits so [`Configurator`] can run against fakes.
//!
//! # Example
//!
//! ```rust,ignore
//! use bot_setup::{Configurator, PrettyJson, ReqwestHttpClient, TelegramApi};
//!
//! let configurator = Configurator::new(ReqwestHttpClient::default(), PrettyJson, TelegramApi::default());
//! let reply = configurator.set_webhook("123:ABC", "hunter2").await?;
//! println!("{}", reply.body);
//! ```

pub mod api;
pub mod config;
pub mod configurator;
pub mod error;
pub mod format;
pub mod forward;
pub mod http;
pub mod logger;
pub mod payload;

pub use api::TelegramApi;
pub use config::SetupConfig;
pub use configurator::{ApiReply, Configurator};
pub use error::{Result, SetupError};
pub use format::{JsonFormatter, PrettyJson};
pub use forward::{authorize, extract_code, format_forward, MessageFilterQuery};
pub use http::{HttpClient, HttpResponse, ReqwestHttpClient};
pub use logger::init_tracing;
pub use payload::{BotCommand, CommandMenu, SendMessage, WebhookConfig, WEBHOOK_URL};

/// Masks a bot token for safe logging: first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the token.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_char_boundary(7) || !token.is_char_boundary(len - 4) {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..7], &token[len - 4..])
    }
}
