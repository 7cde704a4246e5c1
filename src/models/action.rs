use strum::{AsRefStr, EnumIter, EnumString};

/// Callback payload carried by every inline button the bot sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    RequestThreshold,
    RequestWhaleCheck,
    RequestTokenStats,
    RequestWalletLookup,
    RequestHelp,
}
