// Market quote store: fills the shared quotes signal from the quote
// service. Fetch failures are logged and leave an empty board rather than
// surfacing an error to the UI.

use dioxus::prelude::*;
use shared::models::MarketQuote;

use crate::services::quotes::fetch_market_quotes;

pub async fn load_market_quotes(mut quotes: Signal<Vec<MarketQuote>>, symbols: Vec<String>) {
    match fetch_market_quotes(&symbols).await {
        Ok(data) => quotes.set(data),
        Err(e) => {
            tracing::error!("Failed to load market quotes: {e}");
            quotes.set(Vec::new());
        }
    }
}
