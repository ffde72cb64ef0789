//! Pricing and signal inputs for the investment scorer

use serde::{Deserialize, Serialize};

/// Inputs to the investment scorer
///
/// Optional signals that are absent leave their dependent component at the
/// neutral baseline; only `list_price` is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentScoreInput {
    /// Asking price (required, > 0)
    pub list_price: f64,

    /// Model-predicted fair value, if available
    #[serde(default)]
    pub predicted_price: Option<f64>,

    /// Forecast 12-month appreciation, percent
    #[serde(default)]
    pub appreciation_forecast: Option<f64>,

    /// Gross rental yield, percent
    #[serde(default)]
    pub rental_yield: Option<f64>,

    /// Days this listing has been on the market
    #[serde(default)]
    pub days_on_market: Option<f64>,

    /// Zip code keying the market metrics lookup
    pub zip_code: String,
}

impl InvestmentScoreInput {
    /// Create an input with only the required fields
    pub fn new(list_price: f64, zip_code: impl Into<String>) -> Self {
        Self {
            list_price,
            predicted_price: None,
            appreciation_forecast: None,
            rental_yield: None,
            days_on_market: None,
            zip_code: zip_code.into(),
        }
    }
}
