//! Investment score calculation
//!
//! Five component scores start from a neutral baseline of 50, are revised by
//! whatever signals are available, and combine into one weighted composite.
//! Absent market metrics never fail a call; they leave the market-driven
//! components at their neutral values.

use super::input::InvestmentScoreInput;
use super::result::{InvestmentScoreResult, RiskLevel, ScoreWeights};
use crate::error::{require_positive, Result};
use crate::market::MarketMetrics;

/// Neutral baseline for every component score
const BASELINE: f64 = 50.0;

fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Appreciation potential from predicted-price upside and forecast
///
/// When both signals are present the upside-derived score and the
/// forecast-derived score (same x5 sensitivity) are averaged, and only the
/// average is clamped. The blend also applies against the 50 baseline when
/// only the forecast is present.
fn appreciation_potential(input: &InvestmentScoreInput) -> f64 {
    let mut score = BASELINE;

    if let Some(predicted) = input.predicted_price {
        let upside_pct = (predicted - input.list_price) / input.list_price * 100.0;
        score = clamp_score(BASELINE + upside_pct * 5.0);
    }

    if let Some(forecast) = input.appreciation_forecast {
        score = clamp_score((score + forecast * 5.0) / 2.0);
    }

    score
}

fn cash_flow_score(input: &InvestmentScoreInput) -> f64 {
    match input.rental_yield {
        Some(yield_pct) => clamp_score(yield_pct * 10.0),
        None => BASELINE,
    }
}

fn market_momentum(market: Option<&MarketMetrics>) -> f64 {
    match market {
        Some(m) => clamp_score(BASELINE + m.appreciation_1y * 3.0),
        None => BASELINE,
    }
}

/// Liquidity from days on market
///
/// The listing's own days-on-market takes precedence over the market
/// average when both exist.
fn liquidity_score(input: &InvestmentScoreInput, market: Option<&MarketMetrics>) -> f64 {
    if let Some(dom) = input.days_on_market {
        return clamp_score(100.0 - dom * 0.5);
    }
    match market {
        Some(m) => clamp_score(100.0 - m.days_on_market_avg),
        None => BASELINE,
    }
}

fn risk_score(market: Option<&MarketMetrics>) -> f64 {
    match market {
        Some(m) => m.market_temperature.risk_score(),
        None => BASELINE,
    }
}

/// Ordered recommendation rules, first match wins
fn recommendation(overall: u32, appreciation: f64, cash_flow: f64, risk: f64) -> &'static str {
    if overall >= 80 {
        "Strong Buy - Excellent investment opportunity."
    } else if overall >= 65 {
        "Buy - Good investment potential."
    } else if overall >= 50 {
        if appreciation > 70.0 {
            "Consider - Strong appreciation potential for growth investors."
        } else if cash_flow > 70.0 {
            "Consider - Strong cash flow for income investors."
        } else {
            "Hold - Average investment opportunity."
        }
    } else if risk > 70.0 {
        "Avoid - High risk with below-average returns."
    } else {
        "Pass - Look for better alternatives."
    }
}

/// Notable strengths and weaknesses among the component scores
fn key_factors(appreciation: f64, cash_flow: f64, momentum: f64, liquidity: f64) -> Vec<String> {
    let mut factors = Vec::new();

    if appreciation >= 70.0 {
        factors.push("Strong appreciation potential".to_string());
    } else if appreciation <= 30.0 {
        factors.push("Limited appreciation upside".to_string());
    }

    if cash_flow >= 70.0 {
        factors.push("Excellent cash flow opportunity".to_string());
    } else if cash_flow <= 30.0 {
        factors.push("Weak rental yield".to_string());
    }

    if momentum >= 70.0 {
        factors.push("Strong market momentum".to_string());
    } else if momentum <= 30.0 {
        factors.push("Declining market trend".to_string());
    }

    if liquidity >= 70.0 {
        factors.push("High market liquidity".to_string());
    } else if liquidity <= 30.0 {
        factors.push("Low market liquidity - longer hold times expected".to_string());
    }

    if factors.is_empty() {
        factors.push("Average market conditions".to_string());
    }
    factors
}

/// Score a property against its local market
///
/// Pure and stateless; `market` is a read-only snapshot the caller already
/// fetched for `input.zip_code`. Fails only if `list_price <= 0`.
pub fn score(
    input: &InvestmentScoreInput,
    market: Option<&MarketMetrics>,
) -> Result<InvestmentScoreResult> {
    require_positive("list_price", input.list_price)?;

    let appreciation = appreciation_potential(input);
    let cash_flow = cash_flow_score(input);
    let momentum = market_momentum(market);
    let liquidity = liquidity_score(input, market);
    let risk = risk_score(market);

    // Risk discount on the mean of the two return-side components
    let risk_adjusted = (appreciation + cash_flow) / 2.0 * (1.0 - risk / 200.0);

    let weights = ScoreWeights::DEFAULT;
    let overall = (appreciation * weights.appreciation
        + cash_flow * weights.cash_flow
        + risk_adjusted * weights.risk_adjusted
        + momentum * weights.market_momentum
        + liquidity * weights.liquidity)
        .round() as u32;

    Ok(InvestmentScoreResult {
        appreciation_potential: appreciation,
        cash_flow_score: cash_flow,
        risk_adjusted_return: risk_adjusted,
        market_momentum: momentum,
        liquidity_score: liquidity,
        risk_score: risk,
        overall_score: overall,
        risk_level: RiskLevel::from_risk_score(risk),
        recommendation: recommendation(overall, appreciation, cash_flow, risk).to_string(),
        key_factors: key_factors(appreciation, cash_flow, momentum, liquidity),
        weights,
    })
}
