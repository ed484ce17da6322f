//! CLI parser, command dispatch and response reporting.

use std::io::Write;

use anyhow::{Context, Result};
use bot_setup::{ApiReply, Configurator, HttpClient, JsonFormatter};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "botsetup")]
#[command(about = "Telegram Bot setup CLI: webhook, command menu, test and forwarded messages")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Register the webhook (fixed URL, message updates only, drop pending) with a secret token.
    SetWebhook {
        bot_token: String,
        #[arg(allow_hyphen_values = true)]
        secret_token: String,
    },
    /// Register the slash command menu (info, version).
    SetCommands {
        bot_token: String,
    },
    /// Send one HTML-escaped test message to a chat.
    SendMessage {
        bot_token: String,
        #[arg(allow_hyphen_values = true)]
        chat_id: String,
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Forward a message-filter query (JSON) from a device, formatted with its verification code.
    Forward {
        bot_token: String,
        #[arg(allow_hyphen_values = true)]
        chat_id: String,
        device: String,
        #[arg(allow_hyphen_values = true)]
        body: String,
    },
}

/// Runs one command and writes the response body to `out`.
pub async fn run<H, F, W>(
    configurator: &Configurator<H, F>,
    command: Commands,
    out: &mut W,
) -> Result<()>
where
    H: HttpClient,
    F: JsonFormatter,
    W: Write,
{
    let result = match command {
        Commands::SetWebhook {
            bot_token,
            secret_token,
        } => configurator.set_webhook(&bot_token, &secret_token).await,
        Commands::SetCommands { bot_token } => configurator.set_my_commands(&bot_token).await,
        Commands::SendMessage {
            bot_token,
            chat_id,
            text,
        } => configurator.send_message(&bot_token, &chat_id, &text).await,
        Commands::Forward {
            bot_token,
            chat_id,
            device,
            body,
        } => {
            configurator
                .forward_message(&bot_token, &chat_id, &device, body.as_bytes())
                .await
        }
    };
    report(result, out)
}

/// Prints the response body, if any, then maps failures to an error so the process exits non-zero.
pub fn report<W: Write>(result: bot_setup::Result<ApiReply>, out: &mut W) -> Result<()> {
    match result {
        Ok(reply) => {
            writeln!(out, "{}", reply.body).context("Write response to stdout")?;
            Ok(())
        }
        Err(e) => {
            if let Some(body) = e.response_body() {
                writeln!(out, "{}", body).context("Write response to stdout")?;
            }
            Err(anyhow::Error::new(e))
        }
    }
}
