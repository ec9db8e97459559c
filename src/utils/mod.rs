//! Utility functions shared by the session controller and the CLI

pub mod input;
pub mod logging;

// Re-export commonly used functions for convenience
pub use input::parse_int_prefix;
