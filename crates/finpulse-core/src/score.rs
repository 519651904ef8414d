//! Financial-health scoring engine
//!
//! Reduces aggregated income/expense/debt figures to a normalized 0-100
//! score with a categorical status and one-sentence advice. The public
//! [`ScoreEngine::score`] never fails: malformed inputs degrade into a
//! `ScoreResult` with [`HealthStatus::Error`] so callers always get a
//! complete, serializable result. Callers that want to tell a degraded
//! result from a computed one use [`ScoreEngine::try_score`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::error::{Error, Result};
use crate::stats::round2;

/// Weight of the savings rate in the raw score.
const SAVINGS_WEIGHT: f64 = 0.7;

/// Penalty weight of the debt ratio.
const DEBT_WEIGHT: f64 = 0.3;

/// Aggregated totals supplied by the caller. `savings` and `debt`
/// default to 0 when absent from serialized input.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreInputs {
    pub income: f64,
    pub expenses: f64,
    /// Accepted for callers that report it; not weighted by the current formula
    #[serde(default)]
    pub savings: f64,
    #[serde(default)]
    pub debt: f64,
}

/// Categorical financial-health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    /// Score >= 80
    Excellent,
    /// 60 <= score < 80
    Good,
    /// 40 <= score < 60
    Average,
    /// Score < 40
    Poor,
    /// Inputs could not be interpreted; score is forced to 0
    Error,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Excellent => "Excellent",
            HealthStatus::Good => "Good",
            HealthStatus::Average => "Average",
            HealthStatus::Poor => "Poor",
            HealthStatus::Error => "Error",
        }
    }

    /// Classify a score into its status band. Bands are fixed and
    /// non-overlapping; `Error` is never produced from a numeric score.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            HealthStatus::Excellent
        } else if score >= 60.0 {
            HealthStatus::Good
        } else if score >= 40.0 {
            HealthStatus::Average
        } else {
            HealthStatus::Poor
        }
    }

    /// Fixed advice sentence for this status, independent of the
    /// numeric magnitude.
    pub fn advice(&self) -> &'static str {
        match self {
            HealthStatus::Excellent => {
                "Keep up your saving habits and consider low-risk investments."
            }
            HealthStatus::Good => "You're doing well! Reduce minor unnecessary expenses.",
            HealthStatus::Average => {
                "Try tracking your spending more closely and set a savings goal."
            }
            HealthStatus::Poor => "Reassess your budget. Consider cutting non-essential expenses.",
            HealthStatus::Error => "Could not compute a score from the provided figures.",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HealthStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Excellent" => Ok(HealthStatus::Excellent),
            "Good" => Ok(HealthStatus::Good),
            "Average" => Ok(HealthStatus::Average),
            "Poor" => Ok(HealthStatus::Poor),
            "Error" => Ok(HealthStatus::Error),
            _ => Err(format!("Unknown health status: {}", s)),
        }
    }
}

/// Complete scoring result: always well-formed, always serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Normalized score, clamped to [0, 100], rounded to 2 decimals
    pub financial_score: f64,
    pub status: HealthStatus,
    pub advice: String,
}

/// Stateless scorer; every call is independent and side-effect-free.
pub struct ScoreEngine;

impl ScoreEngine {
    pub fn new() -> Self {
        Self
    }

    /// Score the given aggregates. Never fails: invalid inputs degrade
    /// into `HealthStatus::Error` with a zero score, and the degradation
    /// is logged.
    pub fn score(&self, inputs: ScoreInputs) -> ScoreResult {
        match self.try_score(inputs) {
            Ok(result) => result,
            Err(e) => {
                warn!("Score computation degraded: {}", e);
                ScoreResult {
                    financial_score: 0.0,
                    status: HealthStatus::Error,
                    advice: e.to_string(),
                }
            }
        }
    }

    /// Fallible variant: rejects non-finite or negative inputs with
    /// [`Error::InvalidScoreInput`] instead of degrading.
    pub fn try_score(&self, inputs: ScoreInputs) -> Result<ScoreResult> {
        validate(&inputs)?;
        let ScoreInputs {
            income,
            expenses,
            debt,
            ..
        } = inputs;

        let savings_rate = if income > 0.0 {
            ((income - expenses) / income).max(0.0)
        } else {
            0.0
        };

        let debt_ratio = if debt > 0.0 {
            if income > 0.0 {
                (debt / income).min(1.0)
            } else {
                // Any debt with no income is treated as fully leveraged
                1.0
            }
        } else {
            0.0
        };

        let raw = (savings_rate * SAVINGS_WEIGHT - debt_ratio * DEBT_WEIGHT).clamp(0.0, 1.0);
        let financial_score = round2(raw * 100.0);
        let status = HealthStatus::from_score(financial_score);

        Ok(ScoreResult {
            financial_score,
            status,
            advice: status.advice().to_string(),
        })
    }
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn validate(inputs: &ScoreInputs) -> Result<()> {
    for (name, value) in [
        ("income", inputs.income),
        ("expenses", inputs.expenses),
        ("savings", inputs.savings),
        ("debt", inputs.debt),
    ] {
        if !value.is_finite() {
            return Err(Error::InvalidScoreInput(format!(
                "{} is not a finite number",
                name
            )));
        }
        if value < 0.0 {
            return Err(Error::InvalidScoreInput(format!(
                "{} must be non-negative, got {}",
                name, value
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(income: f64, expenses: f64, savings: f64, debt: f64) -> ScoreResult {
        ScoreEngine::new().score(ScoreInputs {
            income,
            expenses,
            savings,
            debt,
        })
    }

    #[test]
    fn test_half_spent_no_debt() {
        let r = score(1000.0, 500.0, 0.0, 0.0);
        // savings_rate 0.5, debt_ratio 0, raw 0.35
        assert_eq!(r.financial_score, 35.0);
        assert_eq!(r.status, HealthStatus::Poor);
    }

    #[test]
    fn test_strong_saver_no_debt() {
        let r = score(1000.0, 200.0, 0.0, 0.0);
        // savings_rate 0.8, raw 0.56
        assert_eq!(r.financial_score, 56.0);
        assert_eq!(r.status, HealthStatus::Average);
    }

    #[test]
    fn test_all_zero_inputs() {
        let r = score(0.0, 0.0, 0.0, 0.0);
        assert_eq!(r.financial_score, 0.0);
        assert_eq!(r.status, HealthStatus::Poor);
    }

    #[test]
    fn test_debt_drags_score_down() {
        let no_debt = score(1000.0, 500.0, 0.0, 0.0);
        let half_debt = score(1000.0, 500.0, 0.0, 500.0);
        // debt_ratio 0.5 costs 15 points
        assert_eq!(half_debt.financial_score, 20.0);
        assert!(half_debt.financial_score < no_debt.financial_score);
    }

    #[test]
    fn test_debt_with_no_income_is_fully_leveraged() {
        let r = score(0.0, 0.0, 0.0, 100.0);
        // debt_ratio forced to 1, raw clamps at 0
        assert_eq!(r.financial_score, 0.0);
        assert_eq!(r.status, HealthStatus::Poor);
    }

    #[test]
    fn test_debt_ratio_caps_at_one() {
        let moderate = score(1000.0, 0.0, 0.0, 1000.0);
        let extreme = score(1000.0, 0.0, 0.0, 1_000_000.0);
        assert_eq!(moderate.financial_score, extreme.financial_score);
    }

    #[test]
    fn test_monotonic_in_income() {
        let mut last = -1.0;
        for income in [500.0, 1000.0, 2000.0, 4000.0, 8000.0] {
            let r = score(income, 500.0, 0.0, 0.0);
            assert!(r.financial_score >= last);
            last = r.financial_score;
        }
    }

    #[test]
    fn test_monotonic_in_debt() {
        let mut last = 101.0;
        for debt in [0.0, 100.0, 500.0, 1000.0, 5000.0] {
            let r = score(1000.0, 200.0, 0.0, debt);
            assert!(r.financial_score <= last);
            last = r.financial_score;
        }
    }

    #[test]
    fn test_score_bounded_under_extremes() {
        for (income, expenses, debt) in [
            (f64::MAX / 2.0, 0.0, 0.0),
            (1e-300, 1e300, 0.0),
            (0.0, 1e300, 1e300),
            (1e300, 1e300, 1e300),
        ] {
            let r = score(income, expenses, 0.0, debt);
            assert!(r.financial_score >= 0.0);
            assert!(r.financial_score <= 100.0);
        }
    }

    #[test]
    fn test_nan_input_degrades_to_error_status() {
        let r = score(f64::NAN, 100.0, 0.0, 0.0);
        assert_eq!(r.financial_score, 0.0);
        assert_eq!(r.status, HealthStatus::Error);
        assert!(r.advice.contains("income"));
    }

    #[test]
    fn test_try_score_surfaces_invalid_input() {
        let engine = ScoreEngine::new();
        let result = engine.try_score(ScoreInputs {
            income: 1000.0,
            expenses: -5.0,
            savings: 0.0,
            debt: 0.0,
        });
        assert!(matches!(result, Err(Error::InvalidScoreInput(_))));
    }

    #[test]
    fn test_status_bands() {
        assert_eq!(HealthStatus::from_score(100.0), HealthStatus::Excellent);
        assert_eq!(HealthStatus::from_score(80.0), HealthStatus::Excellent);
        assert_eq!(HealthStatus::from_score(79.99), HealthStatus::Good);
        assert_eq!(HealthStatus::from_score(60.0), HealthStatus::Good);
        assert_eq!(HealthStatus::from_score(59.99), HealthStatus::Average);
        assert_eq!(HealthStatus::from_score(40.0), HealthStatus::Average);
        assert_eq!(HealthStatus::from_score(39.99), HealthStatus::Poor);
        assert_eq!(HealthStatus::from_score(0.0), HealthStatus::Poor);
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            HealthStatus::Excellent,
            HealthStatus::Good,
            HealthStatus::Average,
            HealthStatus::Poor,
            HealthStatus::Error,
        ] {
            assert_eq!(status.as_str().parse::<HealthStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_result_wire_shape() {
        let r = score(1000.0, 200.0, 0.0, 0.0);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["financial_score"], 56.0);
        assert_eq!(json["status"], "Average");
        assert!(json["advice"].is_string());
    }

    #[test]
    fn test_inputs_default_savings_and_debt() {
        let inputs: ScoreInputs =
            serde_json::from_str(r#"{"income": 1000.0, "expenses": 400.0}"#).unwrap();
        assert_eq!(inputs.savings, 0.0);
        assert_eq!(inputs.debt, 0.0);
    }
}
