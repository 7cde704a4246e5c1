use std::sync::Mutex;

use async_trait::async_trait;

use super::AnalyticsApi;
use crate::error::FetchError;
use crate::models::{TokenInfo, TransferRecord};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    RecentTransfers,
    TokenInfo(String),
    WalletTransfers(String),
}

/// Canned analytics responses; `None` answers with a 503.
pub struct MockAnalytics {
    transfers: Option<Vec<TransferRecord>>,
    token: Option<TokenInfo>,
    wallet: Option<Vec<TransferRecord>>,
    calls: Mutex<Vec<Call>>,
}

impl Default for MockAnalytics {
    fn default() -> Self {
        Self {
            transfers: Some(Vec::new()),
            token: Some(TokenInfo::default()),
            wallet: Some(Vec::new()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl MockAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transfers(mut self, transfers: Vec<TransferRecord>) -> Self {
        self.transfers = Some(transfers);
        self
    }

    pub fn failing_transfers(mut self) -> Self {
        self.transfers = None;
        self
    }

    pub fn with_token(mut self, info: TokenInfo) -> Self {
        self.token = Some(info);
        self
    }

    pub fn failing_token(mut self) -> Self {
        self.token = None;
        self
    }

    pub fn with_wallet(mut self, transfers: Vec<TransferRecord>) -> Self {
        self.wallet = Some(transfers);
        self
    }

    pub fn failing_wallet(mut self) -> Self {
        self.wallet = None;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

pub fn transfer(amount_usd: f64, symbol: &str) -> TransferRecord {
    TransferRecord {
        amount_usd: Some(amount_usd),
        token_symbol: Some(symbol.to_string()),
    }
}

#[async_trait]
impl AnalyticsApi for MockAnalytics {
    async fn recent_transfers(&self) -> Result<Vec<TransferRecord>, FetchError> {
        self.record(Call::RecentTransfers);
        self.transfers.clone().ok_or(FetchError::Status(503))
    }

    async fn token_info(&self, address: &str) -> Result<TokenInfo, FetchError> {
        self.record(Call::TokenInfo(address.to_string()));
        self.token.clone().ok_or(FetchError::Status(503))
    }

    async fn wallet_transfers(&self, address: &str) -> Result<Vec<TransferRecord>, FetchError> {
        self.record(Call::WalletTransfers(address.to_string()));
        self.wallet.clone().ok_or(FetchError::Status(503))
    }
}

mod tests {
    use super::*;

    #[tokio::test]
    async fn default_answers_every_call_with_empty_data() {
        let mock = MockAnalytics::default();

        assert!(mock.recent_transfers().await.unwrap().is_empty());
        assert_eq!(mock.token_info("mint").await.unwrap(), TokenInfo::default());
        assert!(mock.wallet_transfers("wallet").await.unwrap().is_empty());
        assert_eq!(
            mock.calls(),
            vec![
                Call::RecentTransfers,
                Call::TokenInfo("mint".to_string()),
                Call::WalletTransfers("wallet".to_string()),
            ]
        );
    }
}
