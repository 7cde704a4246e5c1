use std::str::FromStr;

use teloxide::prelude::*;
use teloxide::types::{ChatId, UserId};

use crate::bot_state::BotState;
use crate::handlers::alerts::check_whales;
use crate::handlers::commands::{help, prompt};
use crate::handlers::{send_guarded, HandlerResult};
use crate::models::{Action, ConversationState, Reply};

pub async fn callback_handler(bot: Bot, q: CallbackQuery, state: BotState) -> HandlerResult {
    // Acknowledge first so the client stops showing the loading spinner
    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
        log::warn!("⚠️ Could not answer callback query {}: {}", q.id, e);
    }

    let Some(data) = q.data.as_deref() else {
        return Ok(());
    };

    let action = match Action::from_str(data) {
        Ok(action) => action,
        Err(_) => {
            log::warn!("Unknown callback data {:?} from user {}", data, q.from.id);
            return Ok(());
        }
    };

    let user = q.from.id;
    log::info!("Button {} pressed by user {}", data, user);
    let replies = action_replies(&state, user, action).await;
    send_guarded(&bot, ChatId::from(user), &replies).await
}

pub async fn action_replies(state: &BotState, user: UserId, action: Action) -> Vec<Reply> {
    match action {
        Action::RequestThreshold => {
            vec![prompt(state, user, ConversationState::AwaitingThreshold).await]
        }
        Action::RequestWhaleCheck => check_whales(state, Some(user)).await,
        Action::RequestTokenStats => {
            vec![prompt(state, user, ConversationState::AwaitingToken).await]
        }
        Action::RequestWalletLookup => {
            vec![prompt(state, user, ConversationState::AwaitingWallet).await]
        }
        Action::RequestHelp => vec![help(user)],
    }
}
