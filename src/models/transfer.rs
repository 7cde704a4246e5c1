use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A single token transfer as reported by the analytics API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TransferRecord {
    #[serde(default, alias = "amountUsd", deserialize_with = "lenient_f64")]
    pub amount_usd: Option<f64>,
    #[serde(default, alias = "tokenSymbol", deserialize_with = "lenient_string")]
    pub token_symbol: Option<String>,
}

/// Body of the transfer endpoints. Older deployments name the list `transactions`.
#[derive(Debug, Default, Deserialize)]
pub struct TransfersPage {
    #[serde(default)]
    pub transfers: Option<Vec<TransferRecord>>,
    #[serde(default)]
    pub transactions: Option<Vec<TransferRecord>>,
}

impl TransfersPage {
    pub fn into_records(self) -> Vec<TransferRecord> {
        self.transfers.or(self.transactions).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TokenInfo {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    #[serde(default, alias = "change24h", deserialize_with = "lenient_f64")]
    pub change_24h: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Upward,
    Downward,
    Stable,
    Unavailable,
}

impl Trend {
    pub fn from_change(change: Option<f64>) -> Self {
        match change {
            Some(c) if c > 0.0 => Trend::Upward,
            Some(c) if c < 0.0 => Trend::Downward,
            Some(_) => Trend::Stable,
            None => Trend::Unavailable,
        }
    }
}

/// Accepts a JSON number or a numeric string; anything else becomes `None`.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let number = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(number.filter(|n| n.is_finite()))
}

/// Accepts a JSON string or number; anything else becomes `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
