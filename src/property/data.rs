//! Property listing records matching the listings CSV format

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::cashflow::CashFlowInput;
use crate::scoring::InvestmentScoreInput;

/// A single property listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyListing {
    /// Unique listing identifier
    pub property_id: u32,

    /// Zip code keying the market metrics lookup
    pub zip_code: String,

    /// Asking price
    pub list_price: f64,

    /// Expected gross monthly rent
    pub monthly_rent: f64,

    /// Annual property tax
    pub annual_tax: f64,

    /// Annual insurance premium
    pub annual_insurance: f64,

    /// Annual maintenance budget
    pub annual_maintenance: f64,

    /// Monthly HOA dues
    pub monthly_hoa: f64,

    /// Model-predicted fair value, if available
    #[serde(default)]
    pub predicted_price: Option<f64>,

    /// Forecast 12-month appreciation, percent
    #[serde(default)]
    pub appreciation_forecast: Option<f64>,

    /// Explicit days on market, overrides the listed_date derivation
    #[serde(default)]
    pub days_on_market: Option<f64>,

    /// Date the property was listed
    #[serde(default)]
    pub listed_date: Option<NaiveDate>,
}

impl PropertyListing {
    /// Days on market as of a valuation date
    ///
    /// Prefers the explicit field; otherwise derives from `listed_date`.
    /// Listings dated after `as_of` count as zero days.
    pub fn days_on_market_as_of(&self, as_of: NaiveDate) -> Option<f64> {
        if self.days_on_market.is_some() {
            return self.days_on_market;
        }
        self.listed_date
            .map(|listed| (as_of - listed).num_days().max(0) as f64)
    }

    /// Build the cash-flow projector input under the given financing terms
    pub fn cash_flow_input(&self, financing: &FinancingAssumptions) -> CashFlowInput {
        CashFlowInput {
            purchase_price: self.list_price,
            down_payment_percent: financing.down_payment_percent,
            interest_rate: financing.interest_rate,
            loan_term_years: financing.loan_term_years,
            monthly_rent: self.monthly_rent,
            other_income: 0.0,
            vacancy_rate: financing.vacancy_rate,
            property_tax: self.annual_tax,
            insurance: self.annual_insurance,
            maintenance: self.annual_maintenance,
            hoa: self.monthly_hoa,
            property_management_percent: financing.property_management_percent,
            utilities: 0.0,
        }
    }

    /// Build the scorer input as of a valuation date
    pub fn score_input(&self, as_of: NaiveDate) -> InvestmentScoreInput {
        InvestmentScoreInput {
            list_price: self.list_price,
            predicted_price: self.predicted_price,
            appreciation_forecast: self.appreciation_forecast,
            rental_yield: None,
            days_on_market: self.days_on_market_as_of(as_of),
            zip_code: self.zip_code.clone(),
        }
    }
}

/// Financing terms applied uniformly across a batch of listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancingAssumptions {
    pub down_payment_percent: f64,
    pub interest_rate: f64,
    pub loan_term_years: f64,
    pub vacancy_rate: f64,
    pub property_management_percent: f64,
}

impl Default for FinancingAssumptions {
    fn default() -> Self {
        Self {
            down_payment_percent: 20.0,
            interest_rate: 7.0,
            loan_term_years: 30.0,
            vacancy_rate: 5.0,
            property_management_percent: 0.0,
        }
    }
}
