//! Score command: reduce aggregate totals to a financial-health score

use anyhow::Result;

use finpulse_core::{HealthStatus, ScoreEngine, ScoreInputs};

pub fn cmd_score(income: f64, expenses: f64, savings: f64, debt: f64, json: bool) -> Result<()> {
    let inputs = ScoreInputs {
        income,
        expenses,
        savings,
        debt,
    };

    // Always yields a complete result; degraded inputs surface as
    // status Error and are logged by the engine
    let result = ScoreEngine::new().score(inputs);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let badge = match result.status {
        HealthStatus::Excellent => "🏆",
        HealthStatus::Good => "✅",
        HealthStatus::Average => "📊",
        HealthStatus::Poor => "⚠️",
        HealthStatus::Error => "❌",
    };

    println!(
        "{} Financial health: {:.2} ({})",
        badge, result.financial_score, result.status
    );
    println!("   {}", result.advice);

    Ok(())
}
