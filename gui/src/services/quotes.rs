// Quote source for the board. This build ships without a backend, so quotes
// derive from the mock watchlist with a fresh timestamp; the `Result`
// surface stays so a real HTTP transport can replace the body.

use anyhow::Result;
use chrono::Utc;
use shared::models::MarketQuote;

use crate::state::terminal::mock_watchlist;

pub async fn fetch_market_quotes(symbols: &[String]) -> Result<Vec<MarketQuote>> {
    let universe = mock_watchlist();
    let updated_at = Utc::now();
    let quotes = symbols
        .iter()
        .filter_map(|symbol| {
            let item = universe.iter().find(|i| &i.symbol == symbol)?;
            // change_percent is in percent points of the previous close.
            let previous_close = item.last_price / (1.0 + item.change_percent / 100.0);
            Some(MarketQuote {
                symbol: item.symbol.clone(),
                price: item.last_price,
                change: item.last_price - previous_close,
                change_percent: item.change_percent,
                updated_at,
            })
        })
        .collect();
    Ok(quotes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_symbols_get_quotes() {
        let symbols = vec!["AAPL".to_string(), "BTC-USD".to_string()];
        let quotes = fetch_market_quotes(&symbols).await.unwrap();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].symbol, "AAPL");
        assert_eq!(quotes[0].change_percent, 0.82);
        assert!(quotes[0].change > 0.0);
    }

    #[tokio::test]
    async fn unknown_symbols_are_skipped() {
        let symbols = vec!["AAPL".to_string(), "NOPE".to_string()];
        let quotes = fetch_market_quotes(&symbols).await.unwrap();
        assert_eq!(quotes.len(), 1);
    }
}
