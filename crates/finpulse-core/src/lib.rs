//! Finpulse Core Library
//!
//! Deterministic, stateless numeric engines for the Finpulse personal
//! finance tool:
//! - Forecasting: projects the next 7 values of a time-ordered expense
//!   series by blending a linear trend with a recency-weighted baseline
//! - Scoring: reduces income/expense/debt aggregates to a 0-100
//!   financial-health score with a status and advice text
//!
//! Both engines are pure functions of their inputs: no shared state, no
//! I/O, safe to call concurrently from any number of callers.

pub mod error;
pub mod forecast;
pub mod score;
pub mod stats;

pub use error::{Error, Result};
pub use forecast::{Forecast, ForecastEngine, FIT_WINDOW, HORIZON, MIN_HISTORY, RECENT_WINDOW};
pub use score::{HealthStatus, ScoreEngine, ScoreInputs, ScoreResult};
pub use stats::LinearFit;
