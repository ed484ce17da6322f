//! One-shot Bot API setup calls: serialize payload, POST, pretty-print the reply.

use serde::Serialize;
use tracing::{info, warn};

use crate::api::{TelegramApi, SEND_MESSAGE, SET_MY_COMMANDS, SET_WEBHOOK};
use crate::error::{Result, SetupError};
use crate::format::JsonFormatter;
use crate::forward::format_forward;
use crate::http::HttpClient;
use crate::mask_token;
use crate::payload::{CommandMenu, SendMessage, WebhookConfig};

/// Successful (2xx) reply with its pretty-printed body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply {
    pub status: u16,
    pub body: String,
}

/// Issues setup requests through the injected HTTP client and formatter. Holds no per-call state.
pub struct Configurator<H, F> {
    http: H,
    formatter: F,
    api: TelegramApi,
}

impl<H: HttpClient, F: JsonFormatter> Configurator<H, F> {
    pub fn new(http: H, formatter: F, api: TelegramApi) -> Self {
        Self {
            http,
            formatter,
            api,
        }
    }

    pub fn api(&self) -> &TelegramApi {
        &self.api
    }

    /// `setWebhook` with the fixed webhook config and the given secret token.
    pub async fn set_webhook(&self, bot_token: &str, secret_token: &str) -> Result<ApiReply> {
        let payload = WebhookConfig::new(secret_token);
        self.submit(bot_token, SET_WEBHOOK, &payload).await
    }

    /// `setMyCommands` with the fixed command menu.
    pub async fn set_my_commands(&self, bot_token: &str) -> Result<ApiReply> {
        self.submit(bot_token, SET_MY_COMMANDS, &CommandMenu::default()).await
    }

    /// `sendMessage` of an HTML-escaped text to `chat_id`.
    pub async fn send_message(
        &self,
        bot_token: &str,
        chat_id: &str,
        text: &str,
    ) -> Result<ApiReply> {
        let payload = SendMessage::html(chat_id, text);
        self.submit(bot_token, SEND_MESSAGE, &payload).await
    }

    /// `sendMessage` of a forwarded body from `device`, rendered by [`format_forward`].
    pub async fn forward_message(
        &self,
        bot_token: &str,
        chat_id: &str,
        device: &str,
        body: &[u8],
    ) -> Result<ApiReply> {
        let payload = SendMessage::markup(chat_id, format_forward(device, body));
        self.submit(bot_token, SEND_MESSAGE, &payload).await
    }

    async fn submit<T: Serialize>(
        &self,
        bot_token: &str,
        method: &str,
        payload: &T,
    ) -> Result<ApiReply> {
        let url = self.api.method_url(bot_token, method);
        let body = serde_json::to_string(payload)?;

        info!(
            method = method,
            base_url = self.api.base_url(),
            bot_token = %mask_token(bot_token),
            "Calling Bot API"
        );

        let resp = self.http.post_json(&url, body).await?;

        let pretty = match self.formatter.pretty(&resp.body) {
            Ok(pretty) => pretty,
            Err(e) => {
                warn!(method = method, status = resp.status, error = %e, "Response is not JSON");
                return Err(SetupError::MalformedResponse {
                    status: resp.status,
                    body: resp.body,
                });
            }
        };

        if !resp.is_success() {
            warn!(method = method, status = resp.status, "Bot API rejected request");
            return Err(SetupError::Api {
                status: resp.status,
                body: pretty,
            });
        }

        info!(method = method, status = resp.status, "Bot API request done");
        Ok(ApiReply {
            status: resp.status,
            body: pretty,
        })
    }
}
