//! SMS forwarding: parse an Apple message-filter query, pull out a verification code,
//! and render the HTML text the bot posts to its chat.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::payload::escape_html;

/// Keywords that mark an SMS as carrying a verification code.
static SMS_HAS_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"验证码|校验码|交易码|[Cc](?:ODE|ode)|[Vv](?:ERIFY|erify|ERIFICATION|erification)")
        .expect("valid code keyword regex")
});

/// 4 to 8 digits, optionally prefixed by `X-`, not embedded in a longer digit run.
static CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|[[:^digit:]])((?:[[:alnum:]]-)?[[:digit:]]{4,8})(?:$|[[:^digit:]])")
        .expect("valid code regex")
});

/// Body posted by the iOS message filter extension.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageFilterQuery {
    #[serde(rename = "query")]
    inner: QueryInner,
}

#[derive(Debug, Clone, Deserialize)]
struct QueryInner {
    sender: String,
    message: QueryMessage,
}

#[derive(Debug, Clone, Deserialize)]
struct QueryMessage {
    text: String,
}

impl MessageFilterQuery {
    pub fn parse(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }

    pub fn sender(&self) -> &str {
        &self.inner.sender
    }

    pub fn text(&self) -> &str {
        &self.inner.message.text
    }

    pub fn code(&self) -> Option<&str> {
        extract_code(self.text())
    }
}

/// Verification code in `text`, only when the text mentions a code at all.
pub fn extract_code(text: &str) -> Option<&str> {
    if !SMS_HAS_CODE.is_match(text) {
        return None;
    }
    CODE.captures(text)?.get(1).map(|m| m.as_str())
}

/// HTML message for a forwarded body from `device`.
///
/// A query renders as `device <code>sender</code>`, plus `<b>[<code>code</code>]</b>` when a
/// code is found, then a blank line and the SMS text. Anything else is shown in `<pre>`.
pub fn format_forward(device: &str, body: &[u8]) -> String {
    match MessageFilterQuery::parse(body) {
        Ok(query) => match query.code() {
            Some(code) => format!(
                "{} <code>{}</code> <b>[<code>{}</code>]</b>\n\n{}",
                device,
                escape_html(query.sender()),
                code,
                escape_html(query.text())
            ),
            None => format!(
                "{} <code>{}</code>\n\n{}",
                device,
                escape_html(query.sender()),
                escape_html(query.text())
            ),
        },
        Err(_) => format!(
            "{}\n\n<pre>{}</pre>",
            device,
            escape_html(&String::from_utf8_lossy(body))
        ),
    }
}

/// Splits an `Authorization: Bearer <device>/<token>` value into device and token.
pub fn parse_authorization(header: &str) -> Option<(&str, &str)> {
    let credentials = header.trim().trim_start_matches("Bearer ");
    credentials.split_once('/')
}

/// Device name when `header` carries the token `secret_for(device)` returns.
pub fn authorize<F>(header: &str, secret_for: F) -> Option<String>
where
    F: FnOnce(&str) -> Option<String>,
{
    let (device, token) = parse_authorization(header)?;
    let secret = secret_for(device)?;
    (token == secret).then(|| device.to_string())
}
