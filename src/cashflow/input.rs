//! Acquisition and operating assumptions for a cash-flow projection

use serde::{Deserialize, Serialize};

use crate::error::{require_in_range, require_positive, Result};

fn default_down_payment_percent() -> f64 {
    20.0
}

fn default_interest_rate() -> f64 {
    7.0
}

fn default_loan_term_years() -> f64 {
    30.0
}

fn default_vacancy_rate() -> f64 {
    5.0
}

/// Inputs to the cash-flow projector
///
/// Monetary amounts are in whole currency units (dollars). Annual expense
/// categories (tax, insurance, maintenance) are annual amounts; hoa and
/// utilities are monthly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowInput {
    /// Purchase price of the property (required, > 0)
    pub purchase_price: f64,

    /// Down payment as a percent of purchase price [0, 100]
    #[serde(default = "default_down_payment_percent")]
    pub down_payment_percent: f64,

    /// Annual mortgage interest rate in percent [0, 20]
    #[serde(default = "default_interest_rate")]
    pub interest_rate: f64,

    /// Loan term in years [10, 30]
    #[serde(default = "default_loan_term_years")]
    pub loan_term_years: f64,

    /// Gross monthly rent (required, > 0)
    pub monthly_rent: f64,

    /// Other monthly income (parking, laundry, storage)
    #[serde(default)]
    pub other_income: f64,

    /// Vacancy allowance as a percent of rent [0, 100]
    #[serde(default = "default_vacancy_rate")]
    pub vacancy_rate: f64,

    /// Annual property tax
    #[serde(default)]
    pub property_tax: f64,

    /// Annual insurance premium
    #[serde(default)]
    pub insurance: f64,

    /// Annual maintenance budget
    #[serde(default)]
    pub maintenance: f64,

    /// Monthly HOA dues
    #[serde(default)]
    pub hoa: f64,

    /// Property management fee as a percent of collected income [0, 100]
    #[serde(default)]
    pub property_management_percent: f64,

    /// Monthly owner-paid utilities
    #[serde(default)]
    pub utilities: f64,
}

impl CashFlowInput {
    /// Create an input with required fields and all defaults
    pub fn new(purchase_price: f64, monthly_rent: f64) -> Self {
        Self {
            purchase_price,
            down_payment_percent: default_down_payment_percent(),
            interest_rate: default_interest_rate(),
            loan_term_years: default_loan_term_years(),
            monthly_rent,
            other_income: 0.0,
            vacancy_rate: default_vacancy_rate(),
            property_tax: 0.0,
            insurance: 0.0,
            maintenance: 0.0,
            hoa: 0.0,
            property_management_percent: 0.0,
            utilities: 0.0,
        }
    }

    /// Validate field bounds, identifying the offending field on failure
    pub fn validate(&self) -> Result<()> {
        require_positive("purchase_price", self.purchase_price)?;
        require_positive("monthly_rent", self.monthly_rent)?;
        require_in_range("down_payment_percent", self.down_payment_percent, 0.0, 100.0)?;
        require_in_range("interest_rate", self.interest_rate, 0.0, 20.0)?;
        require_in_range("loan_term_years", self.loan_term_years, 10.0, 30.0)?;
        require_in_range("vacancy_rate", self.vacancy_rate, 0.0, 100.0)?;
        require_in_range(
            "property_management_percent",
            self.property_management_percent,
            0.0,
            100.0,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_json() {
        let input: CashFlowInput = serde_json::from_str(
            r#"{"purchase_price": 400000, "monthly_rent": 2800}"#,
        )
        .unwrap();

        assert_eq!(input.down_payment_percent, 20.0);
        assert_eq!(input.interest_rate, 7.0);
        assert_eq!(input.loan_term_years, 30.0);
        assert_eq!(input.vacancy_rate, 5.0);
        assert_eq!(input.property_management_percent, 0.0);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_fields() {
        let mut input = CashFlowInput::new(0.0, 2800.0);
        assert_eq!(input.validate().unwrap_err().field(), "purchase_price");

        input.purchase_price = 400_000.0;
        input.monthly_rent = -10.0;
        assert_eq!(input.validate().unwrap_err().field(), "monthly_rent");

        input.monthly_rent = 2_800.0;
        input.interest_rate = 21.0;
        assert_eq!(input.validate().unwrap_err().field(), "interest_rate");

        input.interest_rate = 7.0;
        input.loan_term_years = 5.0;
        assert_eq!(input.validate().unwrap_err().field(), "loan_term_years");
    }
}
