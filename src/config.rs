//! Runtime configuration for the reporting pipeline.

use std::path::PathBuf;

/// Everything the pipeline needs for one run: where the source CSVs live,
/// where the two spreadsheets go, and which crops to report on.
///
/// Crop order here is the section order in both reports.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub data_dir: PathBuf,
    pub daily_output: PathBuf,
    pub weekly_output: PathBuf,
    pub crops: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data/data/processed"),
            daily_output: PathBuf::from("Crop_price_forecast_Daily.xlsx"),
            weekly_output: PathBuf::from("Crop_price_forecast_Weekly.xlsx"),
            crops: ["capsicum", "onion", "tomato", "wheat"]
                .map(String::from)
                .to_vec(),
        }
    }
}
