//! Request bodies for the Bot API methods this crate calls.
//!
//! Field order is the wire order: `serde_json` serializes struct fields as declared.

use serde::Serialize;

/// Webhook target registered by `set-webhook`.
pub const WEBHOOK_URL: &str = "https://sms.nk0.uk/";

/// Body of `setWebhook`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookConfig {
    pub url: String,
    pub allowed_updates: Vec<String>,
    pub drop_pending_updates: bool,
    pub secret_token: String,
}

impl WebhookConfig {
    /// Fixed webhook config carrying the given secret token.
    pub fn new(secret_token: impl Into<String>) -> Self {
        Self {
            url: WEBHOOK_URL.to_string(),
            allowed_updates: vec!["message".to_string()],
            drop_pending_updates: true,
            secret_token: secret_token.into(),
        }
    }
}

/// One entry of the slash command menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BotCommand {
    pub command: String,
    pub description: String,
}

impl BotCommand {
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            description: description.into(),
        }
    }
}

/// Body of `setMyCommands`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandMenu {
    pub commands: Vec<BotCommand>,
}

impl Default for CommandMenu {
    fn default() -> Self {
        Self {
            commands: vec![
                BotCommand::new("info", "Command device to report current status"),
                BotCommand::new("version", "Query bot version"),
            ],
        }
    }
}

/// Body of `sendMessage` in HTML parse mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendMessage {
    pub chat_id: String,
    pub text: String,
    pub parse_mode: String,
}

impl SendMessage {
    /// HTML message; `text` is escaped so it renders literally.
    pub fn html(chat_id: impl Into<String>, text: &str) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: escape_html(text),
            parse_mode: "HTML".to_string(),
        }
    }

    /// HTML message whose `text` is already markup, see [`crate::forward::format_forward`].
    pub fn markup(chat_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            parse_mode: "HTML".to_string(),
        }
    }
}

/// Escapes the characters Telegram's HTML parse mode treats as markup.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
