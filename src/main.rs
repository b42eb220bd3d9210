// src/main.rs
mod chart;
mod decode;
mod extract;
mod qa;
mod storage;
mod utils;

use std::path::PathBuf;

use clap::Parser;

use storage::StorageManager;
use utils::error::ChartError;
use utils::AppError;

/// Command Line Interface for the Financial Document Analyzer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the financial document (PDF or plain text)
    input: PathBuf,

    /// Free-text analysis query sent to the LLM (e.g. "What are the revenue trends?")
    #[arg(short, long)]
    query: Option<String>,

    /// Output directory for extracted data and the rendered chart
    #[arg(short, long, default_value = "./output")]
    output_dir: String,

    /// Path for the revenue comparison chart (default: <output_dir>/revenue_comparison.svg)
    #[arg(long)]
    chart: Option<PathBuf>,

    /// Debug mode - persist the decoded document text for inspection
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    let stem = args
        .input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document")
        .to_string();

    // 3. Initialize storage
    let storage = StorageManager::new(&args.output_dir)?;

    // 4. Decode the document into flat text
    let document_text = decode::decode_document(&args.input)?;
    tracing::info!("Decoded document ({} bytes of text)", document_text.len());

    // 5. Persist a copy of the upload; analysis proceeds even if this fails
    match storage.save_document_copy(&args.input) {
        Ok(path) => tracing::info!("Saved document copy to: {}", path.display()),
        Err(e) => tracing::error!("Failed to save document copy: {}", e),
    }

    if args.debug {
        match storage.save_decoded_text(&stem, &document_text) {
            Ok(path) => tracing::info!("Saved decoded text to: {}", path.display()),
            Err(e) => tracing::error!("Failed to save decoded text: {}", e),
        }
    }

    // 6. Extract the revenue time-series
    let financial_data = extract::extract_financial_data(&document_text);
    tracing::info!(
        "Extracted {} revenue/period pairs",
        financial_data.revenue.len()
    );

    match storage.save_financial_data(&stem, &financial_data) {
        Ok(path) => tracing::info!("Saved financial data to: {}", path.display()),
        Err(e) => tracing::error!("Failed to save financial data: {}", e),
    }

    // 7. Optional LLM-backed analysis of the user query
    if let Some(query) = &args.query {
        tracing::info!("Running analysis query: {}", query);
        let answer = qa::client::analyze_document(&document_text, query).await?;
        println!("## Financial Analysis Result\n{}", answer);
    }

    // 8. Render the revenue comparison chart
    let chart_path = args
        .chart
        .unwrap_or_else(|| PathBuf::from(&args.output_dir).join("revenue_comparison.svg"));

    match chart::render_revenue_chart(&financial_data, &chart_path) {
        Ok(()) => println!("Revenue comparison chart saved to {}", chart_path.display()),
        Err(ChartError::InsufficientData) => {
            // Expected when no keyword or period lines were found, not a failure.
            println!("Insufficient data for generating the revenue comparison graph.");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
