//! CSV-based listings loader
//!
//! Loads property listings from data/listings.csv with columns:
//! property_id, zip_code, list_price, monthly_rent, annual_tax,
//! annual_insurance, annual_maintenance, monthly_hoa, predicted_price,
//! appreciation_forecast, days_on_market, listed_date
//!
//! The last four columns may be left empty.

use std::error::Error;
use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;

use super::data::PropertyListing;

/// Default path to the listings file
pub const DEFAULT_LISTINGS_PATH: &str = "data/listings.csv";

fn parse_opt_f64(field: &str) -> Result<Option<f64>, Box<dyn Error>> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.parse()?))
    }
}

fn parse_opt_date(field: &str) -> Result<Option<NaiveDate>, Box<dyn Error>> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")?))
    }
}

/// Load listings from the default location
pub fn load_default_listings() -> Result<Vec<PropertyListing>, Box<dyn Error>> {
    load_listings(Path::new(DEFAULT_LISTINGS_PATH))
}

/// Load listings from a specific CSV file
pub fn load_listings(path: &Path) -> Result<Vec<PropertyListing>, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut listings = Vec::new();
    for result in reader.records() {
        let record = result?;

        listings.push(PropertyListing {
            property_id: record[0].trim().parse()?,
            zip_code: record[1].trim().to_string(),
            list_price: record[2].trim().parse()?,
            monthly_rent: record[3].trim().parse()?,
            annual_tax: record[4].trim().parse()?,
            annual_insurance: record[5].trim().parse()?,
            annual_maintenance: record[6].trim().parse()?,
            monthly_hoa: record[7].trim().parse()?,
            predicted_price: parse_opt_f64(&record[8])?,
            appreciation_forecast: parse_opt_f64(&record[9])?,
            days_on_market: parse_opt_f64(&record[10])?,
            listed_date: parse_opt_date(&record[11])?,
        });
    }

    log::info!("loaded {} listings from {}", listings.len(), path.display());

    Ok(listings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_listings_with_optional_fields() {
        let dir = std::env::temp_dir().join("property_analytics_listings_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("listings.csv");

        let mut file = File::create(&path).unwrap();
        writeln!(
            file,
            "property_id,zip_code,list_price,monthly_rent,annual_tax,annual_insurance,annual_maintenance,monthly_hoa,predicted_price,appreciation_forecast,days_on_market,listed_date"
        )
        .unwrap();
        writeln!(file, "101,78701,450000,3100,8100,1900,2700,0,472000,5.5,,2026-07-01").unwrap();
        writeln!(file, "102,44105,95000,1150,2100,900,1800,0,,,45,").unwrap();
        drop(file);

        let listings = load_listings(&path).unwrap();
        assert_eq!(listings.len(), 2);

        assert_eq!(listings[0].predicted_price, Some(472_000.0));
        assert_eq!(listings[0].appreciation_forecast, Some(5.5));
        assert_eq!(listings[0].days_on_market, None);
        assert!(listings[0].listed_date.is_some());

        assert_eq!(listings[1].predicted_price, None);
        assert_eq!(listings[1].days_on_market, Some(45.0));
        assert_eq!(listings[1].listed_date, None);
    }
}
