#[cfg(test)]
pub mod mock;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::FetchError;
use crate::models::{TokenInfo, TransferRecord, TransfersPage};

const API_KEY_HEADER: &str = "X-API-Key";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const TRANSFERS_PATH: &str = "/token/transfers";
const WHALE_MIN_AMOUNT_USD: &str = "5000";
const WHALE_PAGE_LIMIT: &str = "10";
const WALLET_PAGE_LIMIT: &str = "5";

/// Read-only view of the on-chain analytics service.
#[async_trait]
pub trait AnalyticsApi: Send + Sync {
    /// Latest large transfers across all tokens.
    async fn recent_transfers(&self) -> Result<Vec<TransferRecord>, FetchError>;

    /// Price metadata for a token mint address.
    async fn token_info(&self, address: &str) -> Result<TokenInfo, FetchError>;

    /// Latest transfers touching a wallet address.
    async fn wallet_transfers(&self, address: &str) -> Result<Vec<TransferRecord>, FetchError>;
}

pub struct VybeClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl VybeClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Result<Self, FetchError> {
        let http = Client::builder()
            .connect_timeout(REQUEST_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key,
        })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let mut request = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .header(ACCEPT, "application/json")
            .query(query);

        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        log::info!("📡 GET {} -> {}", path, status);
        log::debug!("Analytics response body: {}", text);

        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(serde_json::from_str::<T>(&text)?)
    }
}

#[async_trait]
impl AnalyticsApi for VybeClient {
    async fn recent_transfers(&self) -> Result<Vec<TransferRecord>, FetchError> {
        let page: TransfersPage = self
            .get(
                TRANSFERS_PATH,
                &[("min_amount_usd", WHALE_MIN_AMOUNT_USD), ("limit", WHALE_PAGE_LIMIT)],
            )
            .await?;
        Ok(page.into_records())
    }

    async fn token_info(&self, address: &str) -> Result<TokenInfo, FetchError> {
        self.get(&format!("/token/{}", address), &[]).await
    }

    async fn wallet_transfers(&self, address: &str) -> Result<Vec<TransferRecord>, FetchError> {
        let page: TransfersPage = self
            .get(TRANSFERS_PATH, &[("address", address), ("limit", WALLET_PAGE_LIMIT)])
            .await?;
        Ok(page.into_records())
    }
}
