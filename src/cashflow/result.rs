//! Output structures for cash-flow projections

use serde::{Deserialize, Serialize};

/// Financing summary derived from the acquisition assumptions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanSummary {
    pub down_payment: f64,
    pub loan_amount: f64,
    /// Level monthly principal + interest payment
    pub monthly_mortgage: f64,
}

/// Monthly income after vacancy allowance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeBreakdown {
    /// Rent net of the vacancy allowance
    pub effective_rent: f64,
    pub total_monthly_income: f64,
    pub total_annual_income: f64,
}

/// Monthly operating expenses by category
///
/// Annual inputs (tax, insurance, maintenance) appear here divided by 12.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseBreakdown {
    pub mortgage: f64,
    pub property_tax: f64,
    pub insurance: f64,
    pub maintenance: f64,
    pub hoa: f64,
    pub property_management: f64,
    pub utilities: f64,
    pub total_monthly: f64,
    pub total_annual: f64,
}

/// Net cash flow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowSummary {
    pub monthly: f64,
    pub annual: f64,
}

/// Standard real-estate return ratios
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnMetrics {
    /// NOI / purchase price, percent
    pub cap_rate: f64,
    /// Annual cash flow / down payment, percent
    pub cash_on_cash: f64,
    /// (Annual cash flow + first-year principal paydown) / down payment, percent
    pub total_roi: f64,
    /// Net operating income, excludes debt service
    pub noi: f64,
    /// NOI / annual debt service
    pub dscr: f64,
}

/// Qualitative read on the projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    /// Months of cash flow needed to recover the down payment, None if
    /// cash flow is not positive
    pub break_even_months: Option<u32>,
    pub is_positive_cash_flow: bool,
    pub recommendation: String,
}

/// Complete projection result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowResult {
    pub loan: LoanSummary,
    pub income: IncomeBreakdown,
    pub expenses: ExpenseBreakdown,
    pub cash_flow: CashFlowSummary,
    pub returns: ReturnMetrics,
    pub analysis: Analysis,
}
