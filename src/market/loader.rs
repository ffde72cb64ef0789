//! CSV-based market metrics loader
//!
//! Loads per-zip market snapshots from data/market_metrics.csv with columns:
//! zip_code, appreciation_1y, days_on_market_avg, market_temperature, as_of

use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;

use super::{MarketMetrics, MarketTemperature};

/// Default path to the market metrics file
pub const DEFAULT_MARKET_DATA_PATH: &str = "data/market_metrics.csv";

/// In-memory market metrics store keyed by zip code
#[derive(Debug, Clone, Default)]
pub struct MarketDataStore {
    by_zip: HashMap<String, MarketMetrics>,
}

impl MarketDataStore {
    /// Create an empty store (every lookup falls back to neutral scoring)
    pub fn new() -> Self {
        Self::default()
    }

    /// Load metrics from the default location
    pub fn from_csv() -> Result<Self, Box<dyn Error>> {
        Self::from_csv_path(Path::new(DEFAULT_MARKET_DATA_PATH))
    }

    /// Load metrics from a specific CSV file
    pub fn from_csv_path(path: &Path) -> Result<Self, Box<dyn Error>> {
        let file = File::open(path)?;
        let mut reader = csv::Reader::from_reader(file);

        let mut by_zip = HashMap::new();
        for result in reader.records() {
            let record = result?;

            let zip_code = record[0].trim().to_string();
            let appreciation_1y: f64 = record[1].parse()?;
            let days_on_market_avg: f64 = record[2].parse()?;
            let market_temperature = MarketTemperature::parse(&record[3])
                .ok_or_else(|| format!("unknown market temperature: {}", &record[3]))?;
            let as_of = NaiveDate::parse_from_str(record[4].trim(), "%Y-%m-%d")?;

            by_zip.insert(
                zip_code.clone(),
                MarketMetrics {
                    zip_code,
                    appreciation_1y,
                    days_on_market_avg,
                    market_temperature,
                    as_of,
                },
            );
        }

        log::info!("loaded market metrics for {} zip codes from {}", by_zip.len(), path.display());

        Ok(Self { by_zip })
    }

    /// Look up metrics for a zip code
    pub fn get(&self, zip_code: &str) -> Option<&MarketMetrics> {
        self.by_zip.get(zip_code)
    }

    /// Insert or replace a snapshot
    pub fn insert(&mut self, metrics: MarketMetrics) {
        self.by_zip.insert(metrics.zip_code.clone(), metrics);
    }

    pub fn len(&self) -> usize {
        self.by_zip.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_zip.is_empty()
    }
}
