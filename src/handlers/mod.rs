pub mod alerts;
pub mod callbacks;
pub mod commands;
pub mod lookups;
pub mod messages;
pub mod utils;

pub use callbacks::callback_handler;
pub use commands::command_handler;
pub use messages::message_handler;

use std::error::Error;

use chrono::{DateTime, Duration as ChronoDuration, FixedOffset, Utc};
use teloxide::prelude::*;
use teloxide::types::ChatId;
use teloxide::RequestError;
use tokio::time::{self, Duration, MissedTickBehavior};

use crate::bot_state::BotState;
use crate::handlers::utils::{single_button, GENERIC_FAILURE};
use crate::models::{Action, Reply};

pub type HandlerResult = Result<(), Box<dyn Error + Send + Sync>>;

const POLL_INTERVAL: Duration = Duration::from_secs(120);
/// Scheduler clock is UTC+1; only affects log output.
const SCHEDULER_UTC_OFFSET_SECS: i32 = 3600;

pub async fn send_replies(bot: &Bot, replies: &[Reply]) -> Result<(), RequestError> {
    for reply in replies {
        let mut request = bot.send_message(reply.chat_id, reply.text.clone());
        if let Some(keyboard) = &reply.keyboard {
            request = request.reply_markup(keyboard.clone());
        }
        request.await?;
    }
    Ok(())
}

fn is_timeout(error: &RequestError) -> bool {
    matches!(error, RequestError::Network(e) if e.is_timeout())
}

/// Sends replies for an interactive update.
///
/// Timeouts are dropped silently so a network blip never produces a second
/// message; any other failure is reported to the chat with a help button.
pub async fn send_guarded(bot: &Bot, chat_id: ChatId, replies: &[Reply]) -> HandlerResult {
    match send_replies(bot, replies).await {
        Ok(()) => Ok(()),
        Err(e) if is_timeout(&e) => {
            log::warn!(
                "⚠️ Telegram request timed out for chat {}, skipping reply: {}",
                chat_id,
                e
            );
            Ok(())
        }
        Err(e) => {
            log::error!("❌ Failed to reply to chat {}: {}", chat_id, e);
            bot.send_message(chat_id, GENERIC_FAILURE)
                .reply_markup(single_button("Get Help ℹ️", Action::RequestHelp))
                .await?;
            Ok(())
        }
    }
}

/// Sends each alert on its own; one failed chat does not stop the rest.
async fn deliver_alerts(bot: &Bot, alerts: &[Reply]) -> usize {
    let mut delivered = 0;
    for alert in alerts {
        match send_replies(bot, std::slice::from_ref(alert)).await {
            Ok(()) => delivered += 1,
            Err(e) => log::error!("Error sending whale alert to {}: {}", alert.chat_id, e),
        }
    }
    delivered
}

fn next_run_label(now: DateTime<Utc>) -> String {
    let next = now + ChronoDuration::seconds(POLL_INTERVAL.as_secs() as i64);
    match FixedOffset::east_opt(SCHEDULER_UTC_OFFSET_SECS) {
        Some(offset) => next.with_timezone(&offset).format("%Y-%m-%d %H:%M:%S %:z").to_string(),
        None => next.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    }
}

/// Periodic broadcast of whale alerts to every user with a threshold.
///
/// The check runs inline in the loop, so a slow cycle delays the next one
/// instead of overlapping it; missed ticks are skipped.
pub async fn whale_watch_task(bot: Bot, state: BotState) {
    let mut interval = time::interval(POLL_INTERVAL);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        interval.tick().await;

        let alerts = alerts::check_whales(&state, None).await;
        let delivered = deliver_alerts(&bot, &alerts).await;

        log::info!(
            "🐳 Whale check finished: {}/{} alerts delivered, next run at {}",
            delivered,
            alerts.len(),
            next_run_label(Utc::now())
        );
    }
}
