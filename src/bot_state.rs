use std::collections::HashMap;
use std::sync::Arc;
use teloxide::types::UserId;
use tokio::sync::RwLock;

use crate::analytics::AnalyticsApi;
use crate::models::ConversationState;

type Thresholds = Arc<RwLock<HashMap<UserId, f64>>>;
type Conversations = Arc<RwLock<HashMap<UserId, ConversationState>>>;

/// Process-lifetime store shared by the dispatcher and the polling task.
///
/// Thresholds and pending prompts live in separate maps; clearing one never
/// touches the other. Locks are released before any network call.
#[derive(Clone)]
pub struct BotState {
    thresholds: Thresholds,
    conversations: Conversations,
    analytics: Arc<dyn AnalyticsApi>,
    details_url: Arc<str>,
}

impl BotState {
    pub fn new(analytics: Arc<dyn AnalyticsApi>, details_url: &str) -> Self {
        Self {
            thresholds: Arc::new(RwLock::new(HashMap::new())),
            conversations: Arc::new(RwLock::new(HashMap::new())),
            analytics,
            details_url: Arc::from(details_url),
        }
    }

    pub fn analytics(&self) -> &dyn AnalyticsApi {
        self.analytics.as_ref()
    }

    pub fn details_url(&self) -> &str {
        &self.details_url
    }

    pub async fn threshold(&self, user: UserId) -> Option<f64> {
        self.thresholds.read().await.get(&user).copied()
    }

    pub async fn set_threshold(&self, user: UserId, threshold: f64) {
        self.thresholds.write().await.insert(user, threshold);
        log::info!("🐋 Threshold for user {} set to {}", user, threshold);
    }

    /// Copy of every configured threshold, taken under a single read lock.
    pub async fn thresholds(&self) -> Vec<(UserId, f64)> {
        let thresholds = self.thresholds.read().await;
        thresholds.iter().map(|(user, t)| (*user, *t)).collect()
    }

    pub async fn conversation(&self, user: UserId) -> Option<ConversationState> {
        self.conversations.read().await.get(&user).copied()
    }

    pub async fn set_conversation(&self, user: UserId, state: ConversationState) {
        self.conversations.write().await.insert(user, state);
        log::debug!("User {} is now {:?}", user, state);
    }

    pub async fn clear_conversation(&self, user: UserId) {
        self.conversations.write().await.remove(&user);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::mock::MockAnalytics;

    fn state() -> BotState {
        BotState::new(Arc::new(MockAnalytics::new()), "https://vybe.fyi/")
    }

    #[tokio::test]
    async fn threshold_is_overwritten_on_resubmission() {
        let state = state();
        let user = UserId(7);
        assert_eq!(state.threshold(user).await, None);

        state.set_threshold(user, 10_000.0).await;
        state.set_threshold(user, 25_000.0).await;

        assert_eq!(state.threshold(user).await, Some(25_000.0));
        assert_eq!(state.thresholds().await, vec![(user, 25_000.0)]);
    }

    #[tokio::test]
    async fn maps_are_independent() {
        let state = state();
        let user = UserId(7);
        state.set_threshold(user, 500.0).await;
        state.set_conversation(user, ConversationState::AwaitingWallet).await;

        state.clear_conversation(user).await;

        assert_eq!(state.conversation(user).await, None);
        assert_eq!(state.threshold(user).await, Some(500.0));
    }

    #[tokio::test]
    async fn one_pending_prompt_per_user() {
        let state = state();
        let user = UserId(7);
        state.set_conversation(user, ConversationState::AwaitingToken).await;
        state.set_conversation(user, ConversationState::AwaitingThreshold).await;

        assert_eq!(state.conversation(user).await, Some(ConversationState::AwaitingThreshold));
        assert_eq!(state.conversation(UserId(8)).await, None);
    }
}
