// Data models and formatting helpers shared between the terminal crates.
pub mod models;
pub mod utils;
