//! Property Analytics demo CLI
//!
//! Runs the full analysis pipeline on a sample duplex and prints the
//! projection, score components, and recommendations to the console.

use chrono::NaiveDate;
use property_analytics::{
    CashFlowInput, InvestmentScoreInput, MarketDataStore, MarketMetrics, MarketTemperature,
    PropertyAnalyzer,
};

fn main() {
    env_logger::init();

    println!("Property Analytics v0.1.0");
    println!("=========================\n");

    // Sample duplex in a warm market
    let cash_flow_input = CashFlowInput {
        purchase_price: 485_000.0,
        down_payment_percent: 25.0,
        interest_rate: 6.5,
        loan_term_years: 30.0,
        monthly_rent: 3_650.0,
        other_income: 150.0,
        vacancy_rate: 5.0,
        property_tax: 8_700.0,
        insurance: 2_100.0,
        maintenance: 3_600.0,
        hoa: 0.0,
        property_management_percent: 8.0,
        utilities: 0.0,
    };

    let mut score_input = InvestmentScoreInput::new(485_000.0, "78745");
    score_input.predicted_price = Some(512_000.0);
    score_input.appreciation_forecast = Some(4.8);
    score_input.days_on_market = Some(18.0);

    let mut store = MarketDataStore::new();
    store.insert(MarketMetrics {
        zip_code: "78745".to_string(),
        appreciation_1y: 5.1,
        days_on_market_avg: 31.0,
        market_temperature: MarketTemperature::Warm,
        as_of: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
    });
    let analyzer = PropertyAnalyzer::with_store(store);

    let analysis = match analyzer.analyze(&cash_flow_input, &score_input) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("analysis failed: {}", e);
            std::process::exit(1);
        }
    };

    let cf = &analysis.cash_flow;
    println!("Acquisition");
    println!("  Purchase Price:     ${:>12.2}", cash_flow_input.purchase_price);
    println!("  Down Payment:       ${:>12.2}", cf.loan.down_payment);
    println!("  Loan Amount:        ${:>12.2}", cf.loan.loan_amount);
    println!("  Monthly Mortgage:   ${:>12.2}", cf.loan.monthly_mortgage);
    println!();

    println!("Monthly Operating");
    println!("  Effective Rent:     ${:>12.2}", cf.income.effective_rent);
    println!("  Total Income:       ${:>12.2}", cf.income.total_monthly_income);
    println!("  Total Expenses:     ${:>12.2}", cf.expenses.total_monthly);
    println!("  Cash Flow:          ${:>12.2}", cf.cash_flow.monthly);
    println!();

    println!("Returns");
    println!("  NOI:                ${:>12.2}", cf.returns.noi);
    println!("  Cap Rate:            {:>11.2}%", cf.returns.cap_rate);
    println!("  Cash-on-Cash:        {:>11.2}%", cf.returns.cash_on_cash);
    println!("  Total ROI:           {:>11.2}%", cf.returns.total_roi);
    println!("  DSCR:                {:>12.3}", cf.returns.dscr);
    match cf.analysis.break_even_months {
        Some(months) => println!("  Break-even:          {:>8} months", months),
        None => println!("  Break-even:               n/a"),
    }
    println!("  {}", cf.analysis.recommendation);
    println!();

    let score = &analysis.score;
    println!("Investment Score (risk {})", score.risk_level);
    println!("  Appreciation:        {:>11.1}", score.appreciation_potential);
    println!("  Cash Flow:           {:>11.1}", score.cash_flow_score);
    println!("  Risk-Adjusted:       {:>11.1}", score.risk_adjusted_return);
    println!("  Market Momentum:     {:>11.1}", score.market_momentum);
    println!("  Liquidity:           {:>11.1}", score.liquidity_score);
    println!("  Overall:             {:>11}", score.overall_score);
    println!("  {}", score.recommendation);
    println!();

    println!("Key Factors:");
    for factor in &score.key_factors {
        println!("  - {}", factor);
    }
}
