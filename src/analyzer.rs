//! Combined analysis runner
//!
//! Pre-loads the market metrics store once, then runs any number of
//! cash-flow projections and scorings without re-reading CSV files. The
//! calculators themselves stay pure; this is the only place that wires the
//! market lookup and the derived-signal handoff between them.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::cashflow::{self, CashFlowInput, CashFlowResult};
use crate::error::Result;
use crate::market::MarketDataStore;
use crate::property::{FinancingAssumptions, PropertyListing};
use crate::scoring::{self, InvestmentScoreInput, InvestmentScoreResult};

/// Combined output of both calculators for one property
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyAnalysis {
    pub cash_flow: CashFlowResult,
    pub score: InvestmentScoreResult,
}

/// Analysis runner holding a pre-loaded market metrics store
#[derive(Debug, Clone, Default)]
pub struct PropertyAnalyzer {
    market: MarketDataStore,
}

impl PropertyAnalyzer {
    /// Create an analyzer with no market data (neutral scoring fallbacks)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer around an existing store
    pub fn with_store(market: MarketDataStore) -> Self {
        Self { market }
    }

    /// Create an analyzer by loading market metrics from CSV
    pub fn from_csv_path(path: &Path) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            market: MarketDataStore::from_csv_path(path)?,
        })
    }

    /// Get reference to the market store for inspection
    pub fn market(&self) -> &MarketDataStore {
        &self.market
    }

    /// Run the cash-flow projector alone
    pub fn cash_flow(&self, input: &CashFlowInput) -> Result<CashFlowResult> {
        cashflow::project(input)
    }

    /// Run the scorer alone, resolving market metrics by zip code
    pub fn score(&self, input: &InvestmentScoreInput) -> Result<InvestmentScoreResult> {
        let metrics = self.market.get(&input.zip_code);
        if metrics.is_none() {
            log::debug!("no market metrics for zip {}, scoring with neutral defaults", input.zip_code);
        }
        scoring::score(input, metrics)
    }

    /// Run both calculators, feeding projected income into the scorer
    ///
    /// When the caller leaves `rental_yield` unset it is derived from the
    /// projected gross income: annual income / list price, in percent.
    pub fn analyze(
        &self,
        cash_flow_input: &CashFlowInput,
        score_input: &InvestmentScoreInput,
    ) -> Result<PropertyAnalysis> {
        let cash_flow = cashflow::project(cash_flow_input)?;

        let mut score_input = score_input.clone();
        if score_input.rental_yield.is_none() {
            score_input.rental_yield =
                Some(cash_flow.income.total_annual_income / score_input.list_price * 100.0);
        }

        let score = self.score(&score_input)?;

        Ok(PropertyAnalysis { cash_flow, score })
    }

    /// Analyze a listing under uniform financing terms
    pub fn analyze_listing(
        &self,
        listing: &PropertyListing,
        financing: &FinancingAssumptions,
        as_of: NaiveDate,
    ) -> Result<PropertyAnalysis> {
        let cash_flow_input = listing.cash_flow_input(financing);
        let score_input = listing.score_input(as_of);
        self.analyze(&cash_flow_input, &score_input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::{MarketMetrics, MarketTemperature};

    fn analyzer_with_austin() -> PropertyAnalyzer {
        let mut store = MarketDataStore::new();
        store.insert(MarketMetrics {
            zip_code: "78701".to_string(),
            appreciation_1y: 6.0,
            days_on_market_avg: 25.0,
            market_temperature: MarketTemperature::Hot,
            as_of: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        });
        PropertyAnalyzer::with_store(store)
    }

    fn sample_listing() -> PropertyListing {
        PropertyListing {
            property_id: 1,
            zip_code: "78701".to_string(),
            list_price: 400_000.0,
            monthly_rent: 3_000.0,
            annual_tax: 7_200.0,
            annual_insurance: 1_600.0,
            annual_maintenance: 2_400.0,
            monthly_hoa: 0.0,
            predicted_price: Some(420_000.0),
            appreciation_forecast: None,
            days_on_market: Some(12.0),
            listed_date: None,
        }
    }

    #[test]
    fn test_score_resolves_market_by_zip() {
        let analyzer = analyzer_with_austin();

        let known = analyzer
            .score(&InvestmentScoreInput::new(400_000.0, "78701"))
            .unwrap();
        assert_eq!(known.risk_score, 30.0); // HOT

        let unknown = analyzer
            .score(&InvestmentScoreInput::new(400_000.0, "99999"))
            .unwrap();
        assert_eq!(unknown.risk_score, 50.0);
        assert_eq!(unknown.market_momentum, 50.0);
    }

    #[test]
    fn test_analyze_derives_rental_yield() {
        let analyzer = analyzer_with_austin();
        let cf_input = CashFlowInput::new(400_000.0, 3_000.0);
        let score_input = InvestmentScoreInput::new(400_000.0, "78701");

        let analysis = analyzer.analyze(&cf_input, &score_input).unwrap();

        // Gross yield: 3000 * 0.95 * 12 / 400000 * 100 = 8.55 -> score 85.5
        let expected_yield = analysis.cash_flow.income.total_annual_income / 400_000.0 * 100.0;
        assert!((analysis.score.cash_flow_score - expected_yield * 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_explicit_rental_yield_not_overridden() {
        let analyzer = analyzer_with_austin();
        let cf_input = CashFlowInput::new(400_000.0, 3_000.0);
        let mut score_input = InvestmentScoreInput::new(400_000.0, "78701");
        score_input.rental_yield = Some(4.0);

        let analysis = analyzer.analyze(&cf_input, &score_input).unwrap();
        assert!((analysis.score.cash_flow_score - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_analyze_listing_end_to_end() {
        let analyzer = analyzer_with_austin();
        let as_of = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();

        let analysis = analyzer
            .analyze_listing(&sample_listing(), &FinancingAssumptions::default(), as_of)
            .unwrap();

        // Listing-level days on market drives liquidity: 100 - 12*0.5 = 94
        assert!((analysis.score.liquidity_score - 94.0).abs() < 1e-9);
        assert!(analysis.cash_flow.loan.loan_amount > 0.0);
        assert!(analysis.score.overall_score <= 100);
    }
}
