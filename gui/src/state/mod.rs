// UI state containers provided to the component tree as signals.
pub mod markets;
pub mod terminal;
