//! Shared numeric primitives
//!
//! Small, pure helpers used by both engines:
//! - arithmetic mean
//! - population variance / standard deviation
//! - closed-form single-variable least-squares fit over index positions

/// Result of a least-squares line fit: `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// A flat line at the given level (slope zero).
    pub fn flat(level: f64) -> Self {
        Self {
            slope: 0.0,
            intercept: level,
        }
    }

    /// Project the fitted line at position `x`.
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Arithmetic mean. Returns 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (divides by n, not n-1). Returns 0.0 for an empty slice.
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64
}

/// Population standard deviation.
pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Ordinary least-squares fit of `values` against their index positions
/// `0..n-1`.
///
/// Degenerate cases never fail:
/// - empty input → flat fit at 0
/// - a single point → flat fit at that point
/// - zero denominator `n·Σx² − (Σx)²` → flat fit at the last value
pub fn linear_fit(values: &[f64]) -> LinearFit {
    let n = values.len();
    match n {
        0 => return LinearFit::flat(0.0),
        1 => return LinearFit::flat(values[0]),
        _ => {}
    }

    let nf = n as f64;
    let mut sx = 0.0;
    let mut sy = 0.0;
    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (i, &y) in values.iter().enumerate() {
        let x = i as f64;
        sx += x;
        sy += y;
        sxx += x * x;
        sxy += x * y;
    }

    let denom = nf * sxx - sx * sx;
    if denom == 0.0 {
        // Index positions carry no spread; fall back to the last observation
        return LinearFit::flat(values[n - 1]);
    }

    let slope = (nf * sxy - sx * sy) / denom;
    let intercept = (sy - slope * sx) / nf;
    LinearFit { slope, intercept }
}

/// Round to 2 decimal places (money precision).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
