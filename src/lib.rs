//! Property Analytics - Investment analysis engine for residential real estate
//!
//! This library provides:
//! - Cash-flow projection (amortized mortgage, income/expense breakdown,
//!   cap rate, cash-on-cash, total ROI, DSCR, break-even horizon)
//! - Multi-factor investment scoring with market-aware risk adjustment
//! - CSV-backed market metrics and listings loaders
//! - A combined analyzer for batch property evaluation

pub mod analyzer;
pub mod api;
pub mod cashflow;
pub mod error;
pub mod market;
pub mod property;
pub mod scoring;

// Re-export commonly used types
pub use analyzer::{PropertyAnalysis, PropertyAnalyzer};
pub use cashflow::{CashFlowInput, CashFlowResult};
pub use error::{AnalysisError, Result};
pub use market::{MarketDataStore, MarketMetrics, MarketTemperature};
pub use property::{FinancingAssumptions, PropertyListing};
pub use scoring::{InvestmentScoreInput, InvestmentScoreResult, RiskLevel, ScoreWeights};
