//! Analyze a single property from a JSON request
//!
//! Reads an `AnalyzeRequest` body from a file (or stdin), optionally loads
//! market metrics from CSV, and prints the `{success, data, error}` envelope
//! to stdout. Invalid engine input produces a `success:false` envelope and
//! exit code 1; infrastructure failures (missing files, bad JSON) fail the
//! process directly.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use property_analytics::api::{AnalyzeRequest, ApiResponse};
use property_analytics::{
    AnalysisError, CashFlowResult, InvestmentScoreResult, PropertyAnalyzer,
};

#[derive(Debug, Parser)]
#[command(name = "analyze_property", about = "Run cash-flow projection and investment scoring for one property")]
struct Args {
    /// Path to the JSON request body; reads stdin when omitted
    #[arg(long)]
    input: Option<PathBuf>,

    /// Path to a market metrics CSV; scored with neutral defaults when omitted
    #[arg(long)]
    market_data: Option<PathBuf>,

    /// Pretty-print the response
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Serialize)]
struct AnalyzeResponse {
    cash_flow: CashFlowResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<InvestmentScoreResult>,
}

fn run(args: &Args) -> anyhow::Result<Result<AnalyzeResponse, AnalysisError>> {
    let body = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading request from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading request from stdin")?;
            buf
        }
    };

    let request: AnalyzeRequest = serde_json::from_str(&body).context("parsing request JSON")?;

    let analyzer = match &args.market_data {
        Some(path) => PropertyAnalyzer::from_csv_path(path)
            .map_err(|e| anyhow::anyhow!("loading market data from {}: {}", path.display(), e))?,
        None => PropertyAnalyzer::new(),
    };

    let outcome = match &request.score {
        Some(score_input) => analyzer
            .analyze(&request.cash_flow, score_input)
            .map(|analysis| AnalyzeResponse {
                cash_flow: analysis.cash_flow,
                score: Some(analysis.score),
            }),
        None => analyzer.cash_flow(&request.cash_flow).map(|cash_flow| AnalyzeResponse {
            cash_flow,
            score: None,
        }),
    };

    Ok(outcome)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let (response, failed) = match run(&args)? {
        Ok(data) => (ApiResponse::ok(data), false),
        Err(e) => (ApiResponse::error(e.to_string()), true),
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", json);

    if failed {
        std::process::exit(1);
    }
    Ok(())
}
