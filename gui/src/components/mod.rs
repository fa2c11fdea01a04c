// Presentational components of the terminal shell.
pub mod quote_board;
pub mod theme_switcher;
pub mod toolbar;
pub mod watchlist;

pub use quote_board::QuoteBoard;
pub use theme_switcher::ThemeSwitcher;
pub use toolbar::Toolbar;
pub use watchlist::Watchlist;
