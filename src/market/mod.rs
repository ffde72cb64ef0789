//! Local market metrics consumed by the investment scorer
//!
//! Metrics are a read-only snapshot keyed by zip code. A missing record is
//! a normal condition: the scorer falls back to neutral defaults.

pub mod loader;

pub use loader::{MarketDataStore, DEFAULT_MARKET_DATA_PATH};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Qualitative market temperature classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarketTemperature {
    Hot,
    Warm,
    Neutral,
    Cool,
    Cold,
}

impl MarketTemperature {
    /// Risk score for the scorer (higher = more risky)
    ///
    /// Hot markets carry the least downside risk for a seller-favoring
    /// exit, cold markets the most.
    pub fn risk_score(&self) -> f64 {
        match self {
            MarketTemperature::Hot => 30.0,
            MarketTemperature::Warm => 40.0,
            MarketTemperature::Neutral => 50.0,
            MarketTemperature::Cool => 60.0,
            MarketTemperature::Cold => 70.0,
        }
    }

    /// Parse the wire representation ("HOT", "WARM", ...)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HOT" => Some(MarketTemperature::Hot),
            "WARM" => Some(MarketTemperature::Warm),
            "NEUTRAL" => Some(MarketTemperature::Neutral),
            "COOL" => Some(MarketTemperature::Cool),
            "COLD" => Some(MarketTemperature::Cold),
            _ => None,
        }
    }
}

/// Market metrics snapshot for one zip code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketMetrics {
    pub zip_code: String,

    /// Trailing 12-month price appreciation, percent
    pub appreciation_1y: f64,

    /// Average days on market across recent sales
    pub days_on_market_avg: f64,

    pub market_temperature: MarketTemperature,

    /// Date the snapshot was taken
    pub as_of: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_risk_scores() {
        assert_eq!(MarketTemperature::Hot.risk_score(), 30.0);
        assert_eq!(MarketTemperature::Warm.risk_score(), 40.0);
        assert_eq!(MarketTemperature::Neutral.risk_score(), 50.0);
        assert_eq!(MarketTemperature::Cool.risk_score(), 60.0);
        assert_eq!(MarketTemperature::Cold.risk_score(), 70.0);
    }

    #[test]
    fn test_temperature_wire_format() {
        let json = serde_json::to_string(&MarketTemperature::Hot).unwrap();
        assert_eq!(json, "\"HOT\"");

        let parsed: MarketTemperature = serde_json::from_str("\"COOL\"").unwrap();
        assert_eq!(parsed, MarketTemperature::Cool);
    }

    #[test]
    fn test_temperature_parse() {
        assert_eq!(MarketTemperature::parse("hot"), Some(MarketTemperature::Hot));
        assert_eq!(MarketTemperature::parse(" COLD "), Some(MarketTemperature::Cold));
        assert_eq!(MarketTemperature::parse("tepid"), None);
    }
}
