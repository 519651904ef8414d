//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `forecast` - Load a dated expense history and project 7 days ahead
//! - `score` - Reduce aggregate totals to a financial-health score

pub mod forecast;
pub mod score;

// Re-export command functions for main.rs
pub use forecast::*;
pub use score::*;
