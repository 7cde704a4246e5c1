use std::env;

use crate::error::ConfigError;

const DEFAULT_API_URL: &str = "https://api.vybenetwork.xyz";
const DEFAULT_DETAILS_URL: &str = "https://vybe.fyi/";

#[derive(Clone, Debug)]
pub struct Config {
    pub telegram_token: String,
    pub api_key: Option<String>,
    pub api_url: String,
    pub details_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as missing
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let telegram_token = get("TELEGRAM_TOKEN").ok_or(ConfigError::Missing("TELEGRAM_TOKEN"))?;

        let api_key = get("VYBE_API_KEY");
        if api_key.is_none() {
            log::warn!("⚠️ VYBE_API_KEY is not set, analytics requests will be unauthenticated");
        }

        let api_url = get("VYBE_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let details_url =
            get("VYBE_DETAILS_URL").unwrap_or_else(|| DEFAULT_DETAILS_URL.to_string());

        Ok(Config {
            telegram_token,
            api_key,
            api_url,
            details_url,
        })
    }
}
