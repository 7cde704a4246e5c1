/// Which free-text answer the bot is waiting for from a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationState {
    AwaitingThreshold,
    AwaitingToken,
    AwaitingWallet,
}
