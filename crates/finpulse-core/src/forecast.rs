//! Expense forecasting engine
//!
//! Projects the next 7 values of a chronologically ordered expense series
//! by blending:
//! - a linear trend fit over the trailing window (up to 30 points)
//! - a recency-weighted moving average of the last 7 points
//!
//! The blend weight adapts to volatility: stable series lean on the trend,
//! noisy series lean on the weighted baseline.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::stats::{self, LinearFit};

/// Minimum series length accepted by the forecaster.
pub const MIN_HISTORY: usize = 7;

/// Maximum trailing window used for the trend fit.
pub const FIT_WINDOW: usize = 30;

/// Trailing sub-window used for the weighted baseline and volatility.
pub const RECENT_WINDOW: usize = 7;

/// Number of steps projected ahead.
pub const HORIZON: usize = 7;

/// A 7-step-ahead forecast. Values are non-negative and rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub next_7_days: [f64; HORIZON],
}

/// Stateless forecaster; every call is independent and side-effect-free.
pub struct ForecastEngine;

impl ForecastEngine {
    pub fn new() -> Self {
        Self
    }

    /// Forecast the next 7 values of `series` (ordered oldest → newest).
    ///
    /// Fails with [`Error::InsufficientData`] when the series has fewer
    /// than [`MIN_HISTORY`] points; every other code path produces a
    /// well-formed forecast.
    pub fn forecast(&self, series: &[f64]) -> Result<Forecast> {
        if series.len() < MIN_HISTORY {
            return Err(Error::InsufficientData {
                got: series.len(),
                need: MIN_HISTORY,
            });
        }

        let window = &series[series.len().saturating_sub(FIT_WINDOW)..];
        let recent = &window[window.len().saturating_sub(RECENT_WINDOW)..];

        let fit = estimate_trend(window);
        let baseline = weighted_average(recent);
        let alpha = blend_factor(recent);

        debug!(
            "Forecast over {} points: slope={:.4} baseline={:.2} alpha={}",
            window.len(),
            fit.slope,
            baseline,
            alpha
        );

        let last_index = (window.len() - 1) as f64;
        let mut next_7_days = [0.0; HORIZON];
        for (i, pred) in next_7_days.iter_mut().enumerate() {
            let trend = fit.at(last_index + (i + 1) as f64);
            let blended = alpha * trend + (1.0 - alpha) * baseline;
            *pred = stats::round2(blended.max(0.0));
        }

        Ok(Forecast { next_7_days })
    }
}

impl Default for ForecastEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Fit a line over the window's index positions.
///
/// Always returns a finite fit: degenerate inputs fall back to a flat
/// trend at the last observed value.
fn estimate_trend(window: &[f64]) -> LinearFit {
    let fit = stats::linear_fit(window);
    if fit.slope.is_finite() && fit.intercept.is_finite() {
        fit
    } else {
        LinearFit::flat(window.last().copied().unwrap_or(0.0))
    }
}

/// Recency-weighted mean: weights rise linearly from 1 at the oldest
/// point to `k` at the newest. The weight sum is always >= 1 for a
/// non-empty slice, so the division is well-defined.
fn weighted_average(recent: &[f64]) -> f64 {
    if recent.is_empty() {
        return 0.0;
    }
    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;
    for (i, &value) in recent.iter().enumerate() {
        let weight = (i + 1) as f64;
        weighted_sum += value * weight;
        weight_total += weight;
    }
    weighted_sum / weight_total
}

/// Map the recent sub-window's coefficient of variation to a blend
/// factor. Low volatility trusts the fitted trend; high volatility
/// trusts the stable weighted baseline.
fn blend_factor(recent: &[f64]) -> f64 {
    let mean = stats::mean(recent);
    let std = stats::std_dev(recent);
    // Substitute 1 when the mean is zero to keep cv finite
    let cv = std / if mean == 0.0 { 1.0 } else { mean };

    if cv < 0.05 {
        0.75
    } else if cv < 0.2 {
        0.6
    } else if cv < 0.5 {
        0.5
    } else {
        0.4
    }
}
