use once_cell::sync::Lazy;
use regex::Regex;
use teloxide::types::UserId;

use crate::bot_state::BotState;
use crate::error::InputError;
use crate::handlers::utils::{
    input_error_text, single_button, token_fetch_failed_text, token_stats_text,
    wallet_activity_text, wallet_fetch_failed_text, wallet_idle_text,
};
use crate::models::{Action, Reply};

/// Symbols the bot can resolve, with their Solana mint addresses.
const TOKEN_ADDRESSES: &[(&str, &str)] = &[
    ("SOL", "So11111111111111111111111111111111111111112"),
    ("USDC", "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v"),
    ("USDT", "Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB"),
];

pub const SUPPORTED_SYMBOLS: &[&str] = &["SOL", "USDC", "USDT"];

/// Wallet lookups show at most this many transfers.
const WALLET_DISPLAY_LIMIT: usize = 3;

static SYMBOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]+$").expect("valid symbol regex"));
static WALLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9A-HJ-NP-Za-km-z]{32,44}$").expect("valid wallet regex"));

/// Validates a symbol and maps it to its mint address.
pub fn resolve_token(text: &str) -> Result<(String, &'static str), InputError> {
    let text = text.trim();
    if !SYMBOL_RE.is_match(text) {
        return Err(InputError::InvalidSymbol);
    }

    let symbol = text.to_uppercase();
    TOKEN_ADDRESSES
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, address)| (symbol.clone(), *address))
        .ok_or(InputError::UnsupportedToken(symbol))
}

pub fn validate_wallet(text: &str) -> Result<&str, InputError> {
    let address = text.trim();
    if address.is_empty() {
        return Err(InputError::EmptyInput);
    }
    if !WALLET_RE.is_match(address) {
        return Err(InputError::InvalidAddress);
    }
    Ok(address)
}

pub async fn lookup_token(state: &BotState, user: UserId, text: &str) -> Reply {
    let retry = || single_button("Try Another Token 📈", Action::RequestTokenStats);

    let (symbol, address) = match resolve_token(text) {
        Ok(resolved) => resolved,
        Err(e) => {
            log::info!("Rejected token input from user {}: {}", user, e);
            return Reply::new(user, input_error_text(&e)).with_keyboard(retry());
        }
    };

    match state.analytics().token_info(address).await {
        Ok(info) => Reply::new(user, token_stats_text(&symbol, &info, state.details_url()))
            .with_keyboard(single_button("Check Another Token 📈", Action::RequestTokenStats)),
        Err(e) => {
            log::error!("Error fetching token data for {}: {}", symbol, e);
            Reply::new(user, token_fetch_failed_text())
                .with_keyboard(single_button("Try Again 📈", Action::RequestTokenStats))
        }
    }
}

pub async fn lookup_wallet(state: &BotState, user: UserId, text: &str) -> Reply {
    let address = match validate_wallet(text) {
        Ok(address) => address,
        Err(e) => {
            log::info!("Rejected wallet input from user {}: {}", user, e);
            let label = match e {
                InputError::EmptyInput => "Try Again 🔍",
                _ => "Try Another Wallet 🔍",
            };
            return Reply::new(user, input_error_text(&e))
                .with_keyboard(single_button(label, Action::RequestWalletLookup));
        }
    };

    let another = || single_button("Track Another Wallet 🔍", Action::RequestWalletLookup);

    match state.analytics().wallet_transfers(address).await {
        Ok(transfers) if transfers.is_empty() => {
            Reply::new(user, wallet_idle_text(address)).with_keyboard(another())
        }
        Ok(transfers) => {
            let shown = &transfers[..transfers.len().min(WALLET_DISPLAY_LIMIT)];
            Reply::new(user, wallet_activity_text(address, shown, state.details_url()))
                .with_keyboard(another())
        }
        Err(e) => {
            log::error!("Error fetching wallet data for {}: {}", address, e);
            Reply::new(user, wallet_fetch_failed_text())
                .with_keyboard(single_button("Try Again 🔍", Action::RequestWalletLookup))
        }
    }
}
