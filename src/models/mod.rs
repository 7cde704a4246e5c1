pub mod action;
pub mod reply;
pub mod transfer;
pub mod user_state;

pub use action::Action;
pub use reply::Reply;
pub use transfer::{TokenInfo, TransferRecord, TransfersPage, Trend};
pub use user_state::ConversationState;
