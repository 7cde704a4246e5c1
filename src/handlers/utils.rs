use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::error::InputError;
use crate::handlers::lookups::SUPPORTED_SYMBOLS;
use crate::models::{Action, TokenInfo, TransferRecord, Trend};

pub const THRESHOLD_PROMPT: &str = "📊 Enter your threshold amount for whale alerts (e.g., 10000):";
pub const INITIAL_THRESHOLD_PROMPT: &str = "📊 Let’s set a default threshold for whale alerts (e.g., 10000). \
     Or type 'skip' to set it later with /threshold:";
pub const TOKEN_PROMPT: &str = "📈 Enter a token symbol to check its stats (e.g., SOL or USDC):";
pub const WALLET_PROMPT: &str = "🔍 Enter a Solana wallet address to track its activity (e.g., 5oNDL...):";
pub const NO_PENDING_PROMPT: &str = "🚀 Type / to see all commands or use the buttons to get started!";
pub const GENERIC_FAILURE: &str =
    "❌ An error occurred. Please try again or get help.\nClick below for assistance:";

const NEXT_STEP: &str = "What would you like to do next? 👇";
const UNKNOWN_TOKEN: &str = "Unknown Token";

fn button(label: &str, action: Action) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(label, action.as_ref())
}

/// Keyboard with a single retry-style button
pub fn single_button(label: &str, action: Action) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![button(label, action)]])
}

fn feature_rows() -> Vec<Vec<InlineKeyboardButton>> {
    vec![
        vec![
            button("Set Threshold 🐋", Action::RequestThreshold),
            button("Check Whale Alerts 📊", Action::RequestWhaleCheck),
        ],
        vec![
            button("Token Stats 📈", Action::RequestTokenStats),
            button("Wallet Tracker 🔍", Action::RequestWalletLookup),
        ],
    ]
}

/// Start menu: every feature plus help
pub fn main_menu_keyboard() -> InlineKeyboardMarkup {
    let mut rows = feature_rows();
    rows.push(vec![button("Help ℹ️", Action::RequestHelp)]);
    InlineKeyboardMarkup::new(rows)
}

pub fn help_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(feature_rows())
}

/// Buttons under every whale-check outcome
pub fn whale_followup_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        button("Check Again 🔄", Action::RequestWhaleCheck),
        button("Set New Threshold 🐋", Action::RequestThreshold),
    ]])
}

pub fn welcome_text(first_name: &str) -> String {
    format!(
        "🚀 Welcome to VybeWhaleAlertBot, {}! 🐳\n\
         Catch massive on-chain moves with Vybe-powered analytics! 📈\n\n\
         I track whale transactions, token stats, and wallet activity. \
         Each alert links to AlphaVybe for deeper insights. 💰\n\n\
         Choose an action below to get started! 👇",
        first_name
    )
}

pub fn help_text() -> &'static str {
    "🐳 WhaleAlertBot Help 📈\n\n\
     I’m your go-to for on-chain crypto insights! Here’s what I can do:\n\n\
     - Track whale moves with a custom threshold 🐋\n\
     - Check token prices and stats 📊\n\
     - Monitor wallet activity 🔍\n\
     - Get real-time alerts with AlphaVybe links 💰\n\n\
     Choose an action below to get started! 👇"
}

/// USD amount with thousands separators, e.g. `$1,250,000.50`
pub fn format_usd(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (whole, cents) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

fn format_optional_usd(amount: Option<f64>) -> String {
    amount.map(format_usd).unwrap_or_else(|| "N/A".to_string())
}

pub fn trend_label(trend: Trend) -> &'static str {
    match trend {
        Trend::Upward => "📈 (Upward Trend)",
        Trend::Downward => "📉 (Downward Trend)",
        Trend::Stable => "➡️ (Stable)",
        Trend::Unavailable => "❓ (Trend Unavailable)",
    }
}

/// Like [`format_usd`], but keeps full precision below one cent.
fn format_threshold(threshold: f64) -> String {
    if threshold.abs() < 0.01 {
        format!("${}", threshold)
    } else {
        format_usd(threshold)
    }
}

pub fn threshold_saved_text(threshold: f64) -> String {
    format!(
        "✅ Threshold set to {}! I’ll alert you for whale moves above this amount. 🐋\n\
         Click below to check for whale alerts now:",
        format_threshold(threshold)
    )
}

pub fn threshold_skipped_text() -> &'static str {
    "⏭️ Skipped setting a threshold. You can set it later with /threshold.\n\
     Click below if you’d like to set it now:"
}

/// Corrective reply for rejected input
pub fn input_error_text(error: &InputError) -> String {
    match error {
        InputError::InvalidFormat => {
            "❌ Invalid amount! Please enter a number (e.g., 10000) or type 'skip' to set it later:".to_string()
        }
        InputError::NonPositive => {
            "❌ Threshold must be a positive number! Try again or type 'skip' to set it later:".to_string()
        }
        InputError::InvalidSymbol => {
            "❌ Invalid token symbol! Please use letters only (e.g., SOL).\n\
             Click below to try another token:"
                .to_string()
        }
        InputError::UnsupportedToken(symbol) => format!(
            "❌ Token {} not supported! Try {}.\nClick below to try another token:",
            symbol,
            supported_symbols_list()
        ),
        InputError::EmptyInput => {
            "❌ Wallet address cannot be empty! Please enter a valid Solana address (e.g., 5oNDL...).\n\
             Click below to try again:"
                .to_string()
        }
        InputError::InvalidAddress => {
            "❌ Invalid Solana wallet address! It should be 32-44 characters long and use base58 (e.g., 5oNDL...).\n\
             Click below to try another wallet:"
                .to_string()
        }
    }
}

/// "SOL, USDC, or USDT"
fn supported_symbols_list() -> String {
    match SUPPORTED_SYMBOLS.split_last() {
        Some((last, [])) => last.to_string(),
        Some((last, rest)) => format!("{}, or {}", rest.join(", "), last),
        None => String::new(),
    }
}

pub fn whale_alert_text(transfer: &TransferRecord, details_url: &str) -> String {
    format!(
        "🚨 Whale Alert! 🐋\n\
         Transaction: {} ({})\n\
         Details on AlphaVybe: {}\n\n{}",
        format_optional_usd(transfer.amount_usd),
        transfer.token_symbol.as_deref().unwrap_or(UNKNOWN_TOKEN),
        details_url,
        NEXT_STEP
    )
}

pub fn no_whales_text() -> String {
    format!("🕒 No whale transactions found at the moment.\n{}", NEXT_STEP)
}

pub fn nothing_above_threshold_text() -> String {
    format!("🕒 No whale transactions above your threshold right now.\n{}", NEXT_STEP)
}

pub fn threshold_required_text() -> &'static str {
    "📊 Please set a threshold first using /threshold!\nOr click below to set it now:"
}

pub fn whale_fetch_failed_text() -> &'static str {
    "❌ Couldn’t fetch transaction data right now. Try again later!\nOr click below to retry:"
}

pub fn token_stats_text(symbol: &str, info: &TokenInfo, details_url: &str) -> String {
    let change = info
        .change_24h
        .map(|c| format!("{:.2}%", c))
        .unwrap_or_else(|| "N/A".to_string());

    format!(
        "📊 {} Stats:\n\
         Price: {}\n\
         24h Change: {} {}\n\
         Details on AlphaVybe: {}\n\n{}",
        symbol,
        format_optional_usd(info.price),
        change,
        trend_label(Trend::from_change(info.change_24h)),
        details_url,
        NEXT_STEP
    )
}

pub fn token_fetch_failed_text() -> &'static str {
    "❌ Couldn’t fetch token data right now. Try again later!\nClick below to retry:"
}

pub fn wallet_activity_text(
    address: &str,
    transfers: &[TransferRecord],
    details_url: &str,
) -> String {
    let mut text = format!("🔍 Wallet Activity for {}:\n\n", address);
    for transfer in transfers {
        text.push_str(&format!("💸 Transaction: {}\n", format_optional_usd(transfer.amount_usd)));
    }
    text.push_str(&format!("\nDetails on AlphaVybe: {}\n\n{}", details_url, NEXT_STEP));
    text
}

pub fn wallet_idle_text(address: &str) -> String {
    format!(
        "🔍 No recent activity for wallet {}.\nClick below to track another wallet:",
        address
    )
}

pub fn wallet_fetch_failed_text() -> &'static str {
    "❌ Couldn’t fetch wallet data right now. Try again later!\nClick below to retry:"
}
