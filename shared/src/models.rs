use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Broad instrument categories shown in the watchlist drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetClass {
    Equity,
    Crypto,
    #[serde(rename = "FX")]
    Fx,
    Futures,
    #[serde(rename = "ETF")]
    Etf,
}

impl AssetClass {
    pub fn label(&self) -> &'static str {
        match self {
            AssetClass::Equity => "Equity",
            AssetClass::Crypto => "Crypto",
            AssetClass::Fx => "FX",
            AssetClass::Futures => "Futures",
            AssetClass::Etf => "ETF",
        }
    }
}

/// A single row in the instrument watchlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistItem {
    pub symbol: String,
    pub name: String,
    pub asset_class: AssetClass,
    pub last_price: f64,
    pub change_percent: f64,
}

/// Snapshot quote for one symbol, as served by the markets feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketQuote {
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub updated_at: DateTime<Utc>,
}
