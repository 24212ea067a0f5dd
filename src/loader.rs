//! CSV loading and normalization.
//!
//! Finds the source files for a crop, parses day-first dates, maps the
//! source columns onto the canonical schema, and records the first-seen
//! district order used later as the report sort key.

use anyhow::{Result, bail};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::records::{CropSeries, PriceRow, RawRecord};

/// Date formats accepted in source files. Day-first forms are tried before
/// ISO so `01-02-2024` reads as the 1st of February.
const DATE_FORMATS: &[&str] = &["%d-%m-%Y", "%d/%m/%Y", "%Y-%m-%d"];

/// Parses a day-first date string, falling back to ISO format.
pub fn parse_day_first(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Ok(date);
        }
    }
    bail!("unparseable date: {value:?}");
}

/// Returns the CSV files in `dir` whose filename contains `crop`, sorted by
/// name so concatenation order is deterministic.
pub fn find_crop_files(dir: &Path, crop: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.extension().and_then(|e| e.to_str()) != Some("csv") {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.contains(crop) {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Loads and normalizes all source rows for one crop.
///
/// Returns `None` when no file in `dir` matches the crop name; the crop is
/// simply omitted from the reports. All other failures (missing columns,
/// unparseable dates, malformed CSV) propagate.
pub fn load_crop(dir: &Path, crop: &str) -> Result<Option<CropSeries>> {
    let files = find_crop_files(dir, crop)?;
    if files.is_empty() {
        warn!(crop, dir = %dir.display(), "No CSV found for crop, skipping");
        return Ok(None);
    }

    let mut rows = Vec::new();
    let mut district_order: Vec<String> = Vec::new();

    for path in &files {
        let mut rdr = csv::Reader::from_path(path)?;
        let mut file_rows = 0usize;

        for result in rdr.deserialize() {
            let record: RawRecord = result?;
            let date = parse_day_first(&record.date)?;

            if !district_order.contains(&record.district) {
                district_order.push(record.district.clone());
            }

            rows.push(PriceRow {
                date,
                district: record.district,
                crop_type: crop.to_string(),
                min_price: record.min_price,
                max_price: record.max_price,
                modal_price: record.modal_price,
                average: record.average,
            });
            file_rows += 1;
        }

        debug!(file = %path.display(), rows = file_rows, "Loaded source file");
    }

    info!(
        crop,
        files = files.len(),
        rows = rows.len(),
        districts = district_order.len(),
        "Crop data loaded"
    );

    Ok(Some(CropSeries {
        crop: crop.to_string(),
        rows,
        district_order,
    }))
}
