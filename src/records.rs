//! Row types used by the reporting pipeline.

use chrono::NaiveDate;
use serde::Deserialize;

/// District name assigned to the synthetic state-wide aggregate rows.
pub const ALL_DISTRICTS: &str = "All Districts";

/// Crop type assigned to the synthetic state-wide aggregate rows.
pub const FULL_STATE: &str = "full_state";

/// A single row deserialized from a source CSV file, before normalization.
///
/// The rename attributes map the source column headers onto the canonical
/// snake_case schema. Dates arrive as day-first strings and are parsed by
/// the loader.
#[derive(Debug, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "District")]
    pub district: String,
    #[serde(rename = "Min Price")]
    pub min_price: f64,
    #[serde(rename = "Max Price")]
    pub max_price: f64,
    #[serde(rename = "Modal Price")]
    pub modal_price: f64,
    #[serde(rename = "Average Price")]
    pub average: f64,
}

/// A normalized price observation. Covers both district-level rows and the
/// synthetic "All Districts" rows.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRow {
    pub date: NaiveDate,
    pub district: String,
    pub crop_type: String,
    pub min_price: f64,
    pub max_price: f64,
    pub modal_price: f64,
    pub average: f64,
}

/// A fully derived report row: observation plus trailing moving averages.
/// Field order matches the spreadsheet column order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub date: NaiveDate,
    pub district: String,
    pub crop_type: String,
    pub min_price: f64,
    pub max_price: f64,
    pub modal_price: f64,
    pub average: f64,
    pub moving_avg_7: f64,
    pub moving_avg_30: f64,
}

/// One crop's normalized rows plus the district ordering recorded from the
/// input, used as the sort key for report assembly.
#[derive(Debug)]
pub struct CropSeries {
    pub crop: String,
    pub rows: Vec<PriceRow>,
    pub district_order: Vec<String>,
}
