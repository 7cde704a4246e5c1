use std::sync::Arc;
use std::time::Duration;

use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::{prelude::*, utils::command::BotCommands};

mod analytics;
mod bot_state;
mod config;
mod error;
mod handlers;
#[cfg(test)]
mod http_stub;
mod models;

use crate::analytics::VybeClient;
use crate::bot_state::BotState;
use crate::config::Config;
use crate::handlers::{callback_handler, command_handler, message_handler};

const TELEGRAM_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "show the main menu")]
    Start,
    #[command(description = "set your whale alert threshold in USD")]
    Threshold,
    #[command(description = "check for whale transactions now")]
    Check,
    #[command(description = "show price and trend for a token")]
    Token,
    #[command(description = "show recent activity of a wallet")]
    Wallet,
    #[command(description = "show help")]
    Help,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting whale alert bot...");

    let config = Config::from_env()?;

    let analytics = VybeClient::new(config.api_url.clone(), config.api_key.clone())?;
    let state = BotState::new(Arc::new(analytics), &config.details_url);
    log::info!("✅ Analytics client ready for {}", config.api_url);

    let client = teloxide::net::default_reqwest_settings()
        .connect_timeout(TELEGRAM_CONNECT_TIMEOUT)
        .build()?;
    let bot = Bot::with_client(config.telegram_token, client);

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        log::warn!("⚠️ Could not register bot commands: {}", e);
    }

    tokio::spawn(handlers::whale_watch_task(bot.clone(), state.clone()));

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(command_handler),
        )
        .branch(Update::filter_callback_query().endpoint(callback_handler))
        .branch(Update::filter_message().endpoint(message_handler));

    log::info!("🚀 Starting dispatcher...");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
