// Terminal shell state: the watchlist universe, the selected symbol and the
// drawer visibility. The watchlist is hard-coded mock data; there is no
// backend in this build.

use shared::models::{AssetClass, WatchlistItem};

fn item(
    symbol: &str,
    name: &str,
    asset_class: AssetClass,
    last_price: f64,
    change_percent: f64,
) -> WatchlistItem {
    WatchlistItem {
        symbol: symbol.to_string(),
        name: name.to_string(),
        asset_class,
        last_price,
        change_percent,
    }
}

/// The mock instrument universe shown in the drawer.
pub fn mock_watchlist() -> Vec<WatchlistItem> {
    vec![
        item("AAPL", "Apple Inc.", AssetClass::Equity, 192.34, 0.82),
        item("NVDA", "NVIDIA Corp.", AssetClass::Equity, 865.12, 1.35),
        item("TSLA", "Tesla Inc.", AssetClass::Equity, 247.81, -0.64),
        item("BTC-USD", "Bitcoin", AssetClass::Crypto, 42580.5, 2.14),
        item("ETH-USD", "Ethereum", AssetClass::Crypto, 2280.15, -1.02),
        item("EURUSD", "Euro / US Dollar", AssetClass::Fx, 1.0862, 0.18),
        item("CL=F", "Crude Oil", AssetClass::Futures, 78.42, 0.42),
        item("SPY", "SPDR S&P 500 ETF", AssetClass::Etf, 491.27, 0.27),
    ]
}

#[derive(Debug, Clone)]
pub struct TerminalState {
    pub watchlist: Vec<WatchlistItem>,
    pub selected_symbol: String,
    pub drawer_open: bool,
}

impl Default for TerminalState {
    fn default() -> Self {
        let watchlist = mock_watchlist();
        let selected_symbol = watchlist
            .first()
            .map(|i| i.symbol.clone())
            .unwrap_or_default();
        Self {
            watchlist,
            selected_symbol,
            drawer_open: true,
        }
    }
}

impl TerminalState {
    pub fn select_symbol(&mut self, symbol: &str) {
        self.selected_symbol = symbol.to_string();
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }
}
