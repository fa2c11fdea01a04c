// Host adapters: the quote source and the webview-backed implementations of
// the theme crate's projection and color-scheme ports.
pub mod quotes;
pub mod scheme;
pub mod surface;
