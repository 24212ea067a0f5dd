//! CLI entry point for the crop price reporter.
//!
//! Reads per-crop price CSVs from a directory, derives state-wide
//! aggregates and moving averages, and writes daily and weekly Excel
//! reports.

use anyhow::Result;
use clap::Parser;
use crop_price_reporter::config::ReportConfig;
use crop_price_reporter::pipeline;
use std::path::PathBuf;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "crop_price_reporter")]
#[command(about = "Builds daily and weekly crop price reports from CSV data", long_about = None)]
struct Cli {
    /// Directory containing the per-crop price CSV files
    #[arg(short, long, default_value = "data/data/processed")]
    data_dir: PathBuf,

    /// Path of the daily report spreadsheet
    #[arg(long, default_value = "Crop_price_forecast_Daily.xlsx")]
    daily_output: PathBuf,

    /// Path of the weekly report spreadsheet
    #[arg(long, default_value = "Crop_price_forecast_Weekly.xlsx")]
    weekly_output: PathBuf,

    /// Crops to report on, in report section order
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_value = "capsicum,onion,tomato,wheat"
    )]
    crops: Vec<String>,
}

fn main() -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    tracing_subscriber::registry().with(stderr_layer).init();

    let cli = Cli::parse();
    let config = ReportConfig {
        data_dir: cli.data_dir,
        daily_output: cli.daily_output,
        weekly_output: cli.weekly_output,
        crops: cli.crops,
    };

    pipeline::run(&config)
}
