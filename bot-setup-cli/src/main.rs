//! botsetup: configure a Telegram bot's webhook and command menu. API base URL and log file from env.

use anyhow::{Context, Result};
use bot_setup::{init_tracing, Configurator, PrettyJson, ReqwestHttpClient, SetupConfig};
use bot_setup_cli::{run, Cli};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = SetupConfig::from_env();
    config.validate()?;
    init_tracing(config.log_file.as_deref()).context("Init logging (check LOG_FILE)")?;

    let configurator = Configurator::new(ReqwestHttpClient::default(), PrettyJson, config.api());
    let mut stdout = std::io::stdout().lock();
    run(&configurator, cli.command, &mut stdout).await
}
