//! Cash-flow projection arithmetic
//!
//! Pure function over the acquisition assumptions: amortized mortgage
//! payment, monthly/annual cash flow, and the standard return ratios
//! (cap rate, cash-on-cash, total ROI, DSCR, break-even horizon).

use super::input::CashFlowInput;
use super::result::{
    Analysis, CashFlowResult, CashFlowSummary, ExpenseBreakdown, IncomeBreakdown, LoanSummary,
    ReturnMetrics,
};
use crate::error::Result;

/// Level monthly payment for a fully amortized loan
///
/// The annuity formula is undefined at a 0% rate, so that case falls back
/// to straight-line principal repayment.
fn level_payment(loan_amount: f64, monthly_rate: f64, num_payments: f64) -> f64 {
    if loan_amount <= 0.0 {
        return 0.0;
    }
    if monthly_rate == 0.0 {
        return loan_amount / num_payments;
    }
    let growth = (1.0 + monthly_rate).powf(num_payments);
    loan_amount * monthly_rate * growth / (growth - 1.0)
}

/// Principal repaid during the first year of the loan
///
/// Sinking-fund factor times 12; its rate-0 limit is straight-line, matching
/// the payment fallback.
fn first_year_principal(loan_amount: f64, monthly_rate: f64, num_payments: f64) -> f64 {
    if loan_amount <= 0.0 {
        return 0.0;
    }
    if monthly_rate == 0.0 {
        return loan_amount / num_payments * 12.0;
    }
    let growth = (1.0 + monthly_rate).powf(num_payments);
    loan_amount * monthly_rate / (growth - 1.0) * 12.0
}

/// Ordered recommendation rules, first match wins
struct Rule {
    applies: fn(cap_rate: f64, cash_on_cash: f64, dscr: f64) -> bool,
    text: &'static str,
}

const RECOMMENDATION_RULES: &[Rule] = &[
    Rule {
        applies: |cap, coc, dscr| cap >= 8.0 && coc >= 10.0 && dscr >= 1.25,
        text: "Excellent opportunity: strong returns across all metrics",
    },
    Rule {
        applies: |cap, coc, dscr| cap >= 6.0 && coc >= 7.0 && dscr >= 1.10,
        text: "Good investment with solid fundamentals",
    },
    Rule {
        applies: |cap, coc, dscr| cap >= 4.0 && coc >= 4.0 && dscr >= 1.00,
        text: "Moderate opportunity, best suited to appreciation-focused buyers",
    },
    Rule {
        applies: |_, _, dscr| dscr < 1.00,
        text: "Negative cash flow; only viable if significant appreciation is expected",
    },
];

const RECOMMENDATION_FALLBACK: &str = "Below-average returns; consider renegotiating the price";

fn recommendation(cap_rate: f64, cash_on_cash: f64, dscr: f64) -> &'static str {
    RECOMMENDATION_RULES
        .iter()
        .find(|rule| (rule.applies)(cap_rate, cash_on_cash, dscr))
        .map(|rule| rule.text)
        .unwrap_or(RECOMMENDATION_FALLBACK)
}

/// Project the full return profile for a rental acquisition
///
/// Pure and stateless: identical inputs always produce identical outputs.
/// Fails only on out-of-bounds inputs, identifying the offending field.
pub fn project(input: &CashFlowInput) -> Result<CashFlowResult> {
    input.validate()?;

    // Financing
    let down_payment = input.purchase_price * input.down_payment_percent / 100.0;
    let loan_amount = input.purchase_price - down_payment;
    let monthly_rate = input.interest_rate / 100.0 / 12.0;
    let num_payments = input.loan_term_years * 12.0;
    let monthly_mortgage = level_payment(loan_amount, monthly_rate, num_payments);

    // Income
    let effective_rent = input.monthly_rent * (1.0 - input.vacancy_rate / 100.0);
    let total_monthly_income = effective_rent + input.other_income;
    let total_annual_income = total_monthly_income * 12.0;

    // Expenses; annual categories are carried monthly as amount / 12
    let monthly_tax = input.property_tax / 12.0;
    let monthly_insurance = input.insurance / 12.0;
    let monthly_maintenance = input.maintenance / 12.0;
    let management_fee = total_monthly_income * input.property_management_percent / 100.0;
    let total_monthly_expenses = monthly_mortgage
        + monthly_tax
        + monthly_insurance
        + monthly_maintenance
        + input.hoa
        + management_fee
        + input.utilities;

    // Cash flow
    let monthly_cash_flow = total_monthly_income - total_monthly_expenses;
    let annual_cash_flow = monthly_cash_flow * 12.0;

    // NOI excludes debt service by construction
    let annual_debt_service = monthly_mortgage * 12.0;
    let noi = total_annual_income - (total_monthly_expenses * 12.0 - annual_debt_service);

    let cap_rate = noi / input.purchase_price * 100.0;

    // With no cash invested the cash-based ratios are undefined; report 0
    let (cash_on_cash, total_roi) = if down_payment > 0.0 {
        let principal_paydown = first_year_principal(loan_amount, monthly_rate, num_payments);
        (
            annual_cash_flow / down_payment * 100.0,
            (annual_cash_flow + principal_paydown) / down_payment * 100.0,
        )
    } else {
        (0.0, 0.0)
    };

    let dscr = if annual_debt_service > 0.0 {
        noi / annual_debt_service
    } else {
        f64::INFINITY
    };

    let break_even_months = if monthly_cash_flow > 0.0 {
        Some((down_payment / monthly_cash_flow).ceil() as u32)
    } else {
        None
    };

    Ok(CashFlowResult {
        loan: LoanSummary {
            down_payment,
            loan_amount,
            monthly_mortgage,
        },
        income: IncomeBreakdown {
            effective_rent,
            total_monthly_income,
            total_annual_income,
        },
        expenses: ExpenseBreakdown {
            mortgage: monthly_mortgage,
            property_tax: monthly_tax,
            insurance: monthly_insurance,
            maintenance: monthly_maintenance,
            hoa: input.hoa,
            property_management: management_fee,
            utilities: input.utilities,
            total_monthly: total_monthly_expenses,
            total_annual: total_monthly_expenses * 12.0,
        },
        cash_flow: CashFlowSummary {
            monthly: monthly_cash_flow,
            annual: annual_cash_flow,
        },
        returns: ReturnMetrics {
            cap_rate,
            cash_on_cash,
            total_roi,
            noi,
            dscr,
        },
        analysis: Analysis {
            break_even_months,
            is_positive_cash_flow: monthly_cash_flow > 0.0,
            recommendation: recommendation(cap_rate, cash_on_cash, dscr).to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_input() -> CashFlowInput {
        CashFlowInput {
            purchase_price: 500_000.0,
            down_payment_percent: 20.0,
            interest_rate: 6.0,
            loan_term_years: 30.0,
            monthly_rent: 3_500.0,
            other_income: 0.0,
            vacancy_rate: 5.0,
            property_tax: 6_000.0,
            insurance: 1_800.0,
            maintenance: 2_400.0,
            hoa: 0.0,
            property_management_percent: 8.0,
            utilities: 0.0,
        }
    }

    #[test]
    fn test_amortization_matches_annuity() {
        let result = project(&reference_input()).unwrap();

        assert_relative_eq!(result.loan.down_payment, 100_000.0);
        assert_relative_eq!(result.loan.loan_amount, 400_000.0);

        // Closed-form annuity at monthly rate 0.005 over 360 payments
        let growth = 1.005_f64.powi(360);
        let expected = 400_000.0 * 0.005 * growth / (growth - 1.0);
        assert_relative_eq!(result.loan.monthly_mortgage, expected, max_relative = 1e-6);
    }

    #[test]
    fn test_zero_interest_straight_line() {
        let mut input = reference_input();
        input.interest_rate = 0.0;
        let result = project(&input).unwrap();

        assert_relative_eq!(result.loan.monthly_mortgage, 400_000.0 / 360.0);
        assert!(result.loan.monthly_mortgage.is_finite());
    }

    #[test]
    fn test_zero_interest_principal_paydown() {
        // At 0% every payment is principal, so first-year paydown is 12 payments
        let paydown = first_year_principal(400_000.0, 0.0, 360.0);
        assert_relative_eq!(paydown, 400_000.0 / 360.0 * 12.0);
    }

    #[test]
    fn test_expense_identity() {
        let input = reference_input();
        let result = project(&input).unwrap();

        let expected = result.expenses.mortgage
            + input.property_tax / 12.0
            + input.insurance / 12.0
            + input.maintenance / 12.0
            + input.hoa
            + result.expenses.property_management
            + input.utilities;
        assert_relative_eq!(result.expenses.total_monthly, expected, max_relative = 1e-12);

        assert_relative_eq!(
            result.cash_flow.monthly,
            result.income.total_monthly_income - result.expenses.total_monthly,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_noi_excludes_debt_service() {
        let input = reference_input();
        let result = project(&input).unwrap();

        // Operating expenses only: tax + insurance + maintenance + management
        let annual_opex = input.property_tax
            + input.insurance
            + input.maintenance
            + result.expenses.property_management * 12.0;
        assert_relative_eq!(
            result.returns.noi,
            result.income.total_annual_income - annual_opex,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_break_even_when_positive() {
        let mut input = reference_input();
        input.monthly_rent = 5_000.0;
        let result = project(&input).unwrap();

        assert!(result.analysis.is_positive_cash_flow);
        let expected = (result.loan.down_payment / result.cash_flow.monthly).ceil() as u32;
        assert_eq!(result.analysis.break_even_months, Some(expected));
    }

    #[test]
    fn test_no_break_even_when_negative() {
        let mut input = reference_input();
        input.monthly_rent = 1_200.0;
        let result = project(&input).unwrap();

        assert!(!result.analysis.is_positive_cash_flow);
        assert_eq!(result.analysis.break_even_months, None);
        assert!(result.cash_flow.monthly < 0.0);
    }

    #[test]
    fn test_recommendation_boundaries_inclusive() {
        // Rule 1 boundaries are inclusive
        assert_eq!(
            recommendation(8.0, 10.0, 1.25),
            "Excellent opportunity: strong returns across all metrics"
        );

        // Dropping DSCR just below 1.25 falls through to the next tier
        assert_eq!(
            recommendation(8.0, 10.0, 1.24),
            "Good investment with solid fundamentals"
        );

        assert_eq!(
            recommendation(4.0, 4.0, 1.0),
            "Moderate opportunity, best suited to appreciation-focused buyers"
        );

        // DSCR below 1.0 signals negative leverage regardless of cap rate
        assert_eq!(
            recommendation(9.0, 2.0, 0.95),
            "Negative cash flow; only viable if significant appreciation is expected"
        );

        assert_eq!(recommendation(3.0, 2.0, 1.05), RECOMMENDATION_FALLBACK);
    }

    #[test]
    fn test_all_cash_purchase_has_infinite_dscr() {
        let mut input = reference_input();
        input.down_payment_percent = 100.0;
        let result = project(&input).unwrap();

        assert_eq!(result.loan.loan_amount, 0.0);
        assert_eq!(result.loan.monthly_mortgage, 0.0);
        assert!(result.returns.dscr.is_infinite());
    }

    #[test]
    fn test_rejects_invalid_input() {
        let mut input = reference_input();
        input.vacancy_rate = 120.0;
        assert_eq!(project(&input).unwrap_err().field(), "vacancy_rate");
    }
}
