//! Investment score output structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed component weights, sum to 1.0 exactly
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub appreciation: f64,
    pub cash_flow: f64,
    pub risk_adjusted: f64,
    pub market_momentum: f64,
    pub liquidity: f64,
}

impl ScoreWeights {
    pub const DEFAULT: ScoreWeights = ScoreWeights {
        appreciation: 0.30,
        cash_flow: 0.25,
        risk_adjusted: 0.20,
        market_momentum: 0.15,
        liquidity: 0.10,
    };

    pub fn sum(&self) -> f64 {
        self.appreciation + self.cash_flow + self.risk_adjusted + self.market_momentum + self.liquidity
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Qualitative risk classification derived from the internal risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    #[serde(rename = "Medium-Low")]
    MediumLow,
    Medium,
    #[serde(rename = "Medium-High")]
    MediumHigh,
    High,
}

impl RiskLevel {
    /// Map a 0-100 risk score onto the five levels
    pub fn from_risk_score(risk_score: f64) -> Self {
        if risk_score <= 30.0 {
            RiskLevel::Low
        } else if risk_score <= 50.0 {
            RiskLevel::MediumLow
        } else if risk_score <= 70.0 {
            RiskLevel::Medium
        } else if risk_score <= 85.0 {
            RiskLevel::MediumHigh
        } else {
            RiskLevel::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::MediumLow => "Medium-Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::MediumHigh => "Medium-High",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete scoring result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentScoreResult {
    /// Component scores, each clamped to [0, 100]
    pub appreciation_potential: f64,
    pub cash_flow_score: f64,
    pub risk_adjusted_return: f64,
    pub market_momentum: f64,
    pub liquidity_score: f64,

    /// Internal risk score feeding the risk-adjusted return and risk level
    pub risk_score: f64,

    /// Weighted composite, rounded to an integer in [0, 100]
    pub overall_score: u32,

    pub risk_level: RiskLevel,
    pub recommendation: String,

    /// Notable strengths and weaknesses among the components
    pub key_factors: Vec<String>,

    /// Weights used for the composite
    pub weights: ScoreWeights,
}
