use teloxide::prelude::*;
use teloxide::types::UserId;

use crate::bot_state::BotState;
use crate::handlers::alerts::check_whales;
use crate::handlers::utils::{
    help_keyboard, help_text, main_menu_keyboard, welcome_text, INITIAL_THRESHOLD_PROMPT,
    THRESHOLD_PROMPT, TOKEN_PROMPT, WALLET_PROMPT,
};
use crate::handlers::{send_guarded, HandlerResult};
use crate::models::{ConversationState, Reply};
use crate::Command;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: BotState,
) -> HandlerResult {
    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };

    log::info!("/{:?} from user {}", cmd, user.id);
    let replies = command_replies(&state, user.id, &user.first_name, cmd).await;
    send_guarded(&bot, msg.chat.id, &replies).await
}

pub async fn command_replies(
    state: &BotState,
    user: UserId,
    first_name: &str,
    cmd: Command,
) -> Vec<Reply> {
    match cmd {
        Command::Start => start(state, user, first_name).await,
        Command::Threshold => vec![prompt(state, user, ConversationState::AwaitingThreshold).await],
        Command::Check => check_whales(state, Some(user)).await,
        Command::Token => vec![prompt(state, user, ConversationState::AwaitingToken).await],
        Command::Wallet => vec![prompt(state, user, ConversationState::AwaitingWallet).await],
        Command::Help => vec![help(user)],
    }
}

/// Welcome screen; first-time users are asked for a threshold right away.
async fn start(state: &BotState, user: UserId, first_name: &str) -> Vec<Reply> {
    let mut replies =
        vec![Reply::new(user, welcome_text(first_name)).with_keyboard(main_menu_keyboard())];

    if state.threshold(user).await.is_none() {
        replies.push(Reply::new(user, INITIAL_THRESHOLD_PROMPT));
        state.set_conversation(user, ConversationState::AwaitingThreshold).await;
    }

    replies
}

/// Asks for the next piece of input and remembers what we asked for.
pub async fn prompt(state: &BotState, user: UserId, next: ConversationState) -> Reply {
    let text = match next {
        ConversationState::AwaitingThreshold => THRESHOLD_PROMPT,
        ConversationState::AwaitingToken => TOKEN_PROMPT,
        ConversationState::AwaitingWallet => WALLET_PROMPT,
    };
    state.set_conversation(user, next).await;
    Reply::new(user, text)
}

pub fn help(user: UserId) -> Reply {
    Reply::new(user, help_text()).with_keyboard(help_keyboard())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::mock::{Call, MockAnalytics};
    use std::sync::Arc;

    const USER: UserId = UserId(99);

    fn state_with(mock: MockAnalytics) -> (BotState, Arc<MockAnalytics>) {
        let mock = Arc::new(mock);
        (BotState::new(mock.clone(), "https://vybe.fyi/"), mock)
    }

    #[tokio::test]
    async fn start_asks_newcomers_for_a_threshold() {
        let (state, _mock) = state_with(MockAnalytics::new());

        let replies = command_replies(&state, USER, "Ishmael", Command::Start).await;

        assert_eq!(replies.len(), 2);
        assert!(replies[0].text.contains("Welcome to VybeWhaleAlertBot, Ishmael!"));
        assert_eq!(replies[0].actions().len(), 5);
        assert_eq!(replies[1].text, INITIAL_THRESHOLD_PROMPT);
        assert_eq!(state.conversation(USER).await, Some(ConversationState::AwaitingThreshold));
    }

    #[tokio::test]
    async fn start_leaves_configured_users_alone() {
        let (state, _mock) = state_with(MockAnalytics::new());
        state.set_threshold(USER, 20_000.0).await;

        let replies = command_replies(&state, USER, "Ahab", Command::Start).await;

        assert_eq!(replies.len(), 1);
        assert_eq!(state.conversation(USER).await, None);
    }

    #[tokio::test]
    async fn prompt_commands_set_matching_state() {
        let (state, mock) = state_with(MockAnalytics::new());
        let cases = [
            (Command::Threshold, ConversationState::AwaitingThreshold, THRESHOLD_PROMPT),
            (Command::Token, ConversationState::AwaitingToken, TOKEN_PROMPT),
            (Command::Wallet, ConversationState::AwaitingWallet, WALLET_PROMPT),
        ];

        for (cmd, expected, text) in cases {
            let replies = command_replies(&state, USER, "Ahab", cmd).await;
            assert_eq!(replies.len(), 1);
            assert_eq!(replies[0].text, text);
            assert_eq!(state.conversation(USER).await, Some(expected));
        }
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn check_without_threshold_prompts_for_one() {
        let (state, mock) = state_with(
            MockAnalytics::new().with_transfers(vec![crate::analytics::mock::transfer(1e6, "SOL")]),
        );

        let replies = command_replies(&state, USER, "Ahab", Command::Check).await;

        assert_eq!(mock.calls(), vec![Call::RecentTransfers]);
        assert_eq!(replies.len(), 1);
        assert!(replies[0].text.contains("Please set a threshold first"));
        assert!(!replies[0].text.contains("Whale Alert"));
    }

    #[tokio::test]
    async fn help_does_not_touch_state() {
        let (state, _mock) = state_with(MockAnalytics::new());

        let replies = command_replies(&state, USER, "Ahab", Command::Help).await;

        assert!(replies[0].text.contains("WhaleAlertBot Help"));
        assert_eq!(replies[0].actions().len(), 4);
        assert_eq!(state.conversation(USER).await, None);
    }
}
