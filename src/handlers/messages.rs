use teloxide::prelude::*;
use teloxide::types::{Me, UserId};
use teloxide::utils::command::BotCommands;

use crate::bot_state::BotState;
use crate::error::InputError;
use crate::handlers::commands::command_handler;
use crate::handlers::lookups::{lookup_token, lookup_wallet};
use crate::handlers::utils::{
    input_error_text, single_button, threshold_saved_text, threshold_skipped_text,
    NO_PENDING_PROMPT,
};
use crate::handlers::{send_guarded, HandlerResult};
use crate::models::{Action, ConversationState, Reply};
use crate::Command;

pub async fn message_handler(bot: Bot, msg: Message, me: Me, state: BotState) -> HandlerResult {
    let (Some(user), Some(text)) = (msg.from.as_ref(), msg.text()) else {
        return Ok(());
    };

    if text.starts_with('/') {
        return match command_ignoring_arguments(text, me.username()) {
            Some(cmd) => {
                log::info!("Ignoring arguments of {:?} from user {}", cmd, user.id);
                command_handler(bot, msg, cmd, state).await
            }
            None => {
                log::info!("Ignoring unknown command from user {}: {}", user.id, text);
                Ok(())
            }
        };
    }

    let replies = text_replies(&state, user.id, text).await;
    send_guarded(&bot, msg.chat.id, &replies).await
}

/// Known commands that failed to parse only because of trailing arguments,
/// such as the `/start ref123` deep link.
pub fn command_ignoring_arguments(text: &str, bot_username: &str) -> Option<Command> {
    let head = text.split_whitespace().next()?;
    Command::parse(head, bot_username).ok()
}

/// Routes free text by the prompt the user is currently answering.
pub async fn text_replies(state: &BotState, user: UserId, text: &str) -> Vec<Reply> {
    let Some(pending) = state.conversation(user).await else {
        return vec![Reply::new(user, NO_PENDING_PROMPT)];
    };

    let reply = match pending {
        ConversationState::AwaitingThreshold => submit_threshold(state, user, text).await,
        ConversationState::AwaitingToken => {
            state.clear_conversation(user).await;
            lookup_token(state, user, &text.to_uppercase()).await
        }
        ConversationState::AwaitingWallet => {
            state.clear_conversation(user).await;
            lookup_wallet(state, user, text).await
        }
    };

    vec![reply]
}

pub fn parse_threshold(text: &str) -> Result<f64, InputError> {
    let value = text
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(InputError::InvalidFormat)?;

    if value <= 0.0 {
        return Err(InputError::NonPositive);
    }
    Ok(value)
}

/// Invalid input keeps the prompt open; everything else closes it.
async fn submit_threshold(state: &BotState, user: UserId, text: &str) -> Reply {
    if text.trim().eq_ignore_ascii_case("skip") {
        state.clear_conversation(user).await;
        return Reply::new(user, threshold_skipped_text())
            .with_keyboard(single_button("Set Threshold Later 🐋", Action::RequestThreshold));
    }

    match parse_threshold(text) {
        Ok(threshold) => {
            state.set_threshold(user, threshold).await;
            state.clear_conversation(user).await;
            Reply::new(user, threshold_saved_text(threshold))
                .with_keyboard(single_button("Check Whale Alerts 📊", Action::RequestWhaleCheck))
        }
        Err(e) => {
            log::info!("Rejected threshold from user {}: {}", user, e);
            Reply::new(user, input_error_text(&e))
        }
    }
}
