//! Batch-score a listings file against local market metrics
//!
//! Loads listings and market metrics from CSV, analyzes every listing in
//! parallel under uniform financing terms, and prints a per-listing table
//! plus a portfolio summary. `--json` switches to the response envelope.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use serde::Serialize;

use rayon::prelude::*;

use property_analytics::api::ApiResponse;
use property_analytics::property::{load_listings, DEFAULT_LISTINGS_PATH};
use property_analytics::market::DEFAULT_MARKET_DATA_PATH;
use property_analytics::{FinancingAssumptions, PropertyAnalyzer};

#[derive(Debug, Parser)]
#[command(name = "score_batch", about = "Score a batch of property listings")]
struct Args {
    /// Listings CSV
    #[arg(long, default_value = DEFAULT_LISTINGS_PATH)]
    listings: PathBuf,

    /// Market metrics CSV
    #[arg(long, default_value = DEFAULT_MARKET_DATA_PATH)]
    market: PathBuf,

    /// Valuation date for days-on-market derivation (default: today)
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Down payment percent applied to every listing
    #[arg(long, default_value_t = 20.0)]
    down_payment_percent: f64,

    /// Annual interest rate percent applied to every listing
    #[arg(long, default_value_t = 7.0)]
    interest_rate: f64,

    /// Emit the JSON response envelope instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct ListingRow {
    property_id: u32,
    zip_code: String,
    list_price: f64,
    monthly_cash_flow: f64,
    cap_rate: f64,
    cash_on_cash: f64,
    dscr: f64,
    overall_score: u32,
    risk_level: String,
    recommendation: String,
}

#[derive(Debug, Serialize)]
struct BatchSummary {
    listing_count: usize,
    skipped_count: usize,
    average_score: f64,
    total_monthly_cash_flow: f64,
    positive_cash_flow_count: usize,
    buy_or_better_count: usize,
}

#[derive(Debug, Serialize)]
struct BatchResponse {
    as_of: NaiveDate,
    summary: BatchSummary,
    listings: Vec<ListingRow>,
    execution_time_ms: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();
    let as_of = args.as_of.unwrap_or_else(|| chrono::Local::now().date_naive());

    let listings = load_listings(&args.listings)
        .map_err(|e| anyhow::anyhow!("loading listings from {}: {}", args.listings.display(), e))?;
    let analyzer = PropertyAnalyzer::from_csv_path(&args.market)
        .map_err(|e| anyhow::anyhow!("loading market data from {}: {}", args.market.display(), e))?;

    let financing = FinancingAssumptions {
        down_payment_percent: args.down_payment_percent,
        interest_rate: args.interest_rate,
        ..FinancingAssumptions::default()
    };

    // Every analysis is independent; score the batch in parallel
    let outcomes: Vec<_> = listings
        .par_iter()
        .map(|listing| (listing, analyzer.analyze_listing(listing, &financing, as_of)))
        .collect();

    let mut rows = Vec::with_capacity(outcomes.len());
    let mut skipped = 0usize;
    for (listing, outcome) in outcomes {
        match outcome {
            Ok(analysis) => rows.push(ListingRow {
                property_id: listing.property_id,
                zip_code: listing.zip_code.clone(),
                list_price: listing.list_price,
                monthly_cash_flow: analysis.cash_flow.cash_flow.monthly,
                cap_rate: analysis.cash_flow.returns.cap_rate,
                cash_on_cash: analysis.cash_flow.returns.cash_on_cash,
                dscr: analysis.cash_flow.returns.dscr,
                overall_score: analysis.score.overall_score,
                risk_level: analysis.score.risk_level.to_string(),
                recommendation: analysis.score.recommendation.clone(),
            }),
            Err(e) => {
                log::warn!("skipping listing {}: {}", listing.property_id, e);
                skipped += 1;
            }
        }
    }

    let listing_count = rows.len();
    let average_score = if listing_count > 0 {
        rows.iter().map(|r| r.overall_score as f64).sum::<f64>() / listing_count as f64
    } else {
        0.0
    };
    let total_monthly_cash_flow: f64 = rows.iter().map(|r| r.monthly_cash_flow).sum();
    let positive_cash_flow_count = rows.iter().filter(|r| r.monthly_cash_flow > 0.0).count();
    let buy_or_better_count = rows
        .iter()
        .filter(|r| r.recommendation.starts_with("Buy") || r.recommendation.starts_with("Strong Buy"))
        .count();

    let response = BatchResponse {
        as_of,
        summary: BatchSummary {
            listing_count,
            skipped_count: skipped,
            average_score,
            total_monthly_cash_flow,
            positive_cash_flow_count,
            buy_or_better_count,
        },
        listings: rows,
        execution_time_ms: start.elapsed().as_millis() as u64,
    };

    if args.json {
        println!("{}", serde_json::to_string(&ApiResponse::ok(&response)).context("serializing response")?);
        return Ok(());
    }

    println!("Batch Analysis as of {} ({} listings, {} skipped)", response.as_of, listing_count, skipped);
    println!(
        "{:>6} {:>6} {:>12} {:>10} {:>8} {:>8} {:>7} {:>6} {:>12}  {}",
        "ID", "Zip", "Price", "CF/mo", "Cap%", "CoC%", "DSCR", "Score", "Risk", "Recommendation"
    );
    println!("{}", "-".repeat(110));

    for row in &response.listings {
        println!(
            "{:>6} {:>6} {:>12.0} {:>10.2} {:>8.2} {:>8.2} {:>7.2} {:>6} {:>12}  {}",
            row.property_id,
            row.zip_code,
            row.list_price,
            row.monthly_cash_flow,
            row.cap_rate,
            row.cash_on_cash,
            row.dscr,
            row.overall_score,
            row.risk_level,
            row.recommendation,
        );
    }

    let s = &response.summary;
    println!("\nSummary:");
    println!("  Average Score:          {:.1}", s.average_score);
    println!("  Total Monthly CF:       ${:.2}", s.total_monthly_cash_flow);
    println!("  Positive Cash Flow:     {}/{}", s.positive_cash_flow_count, s.listing_count);
    println!("  Buy or Better:          {}/{}", s.buy_or_better_count, s.listing_count);
    println!("  Execution Time:         {} ms", response.execution_time_ms);

    Ok(())
}
