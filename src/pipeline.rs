//! Pipeline orchestration.
//!
//! Runs each configured crop through load, full-state aggregation, and
//! moving averages, then assembles the daily and weekly spreadsheets in
//! crop order.

use anyhow::Result;
use std::path::Path;
use tracing::info;

use crate::analyzers::{aggregate, rolling, weekly};
use crate::config::ReportConfig;
use crate::loader;
use crate::output;
use crate::records::{CropSeries, FULL_STATE, ReportRow};

/// One crop's fully derived rows plus the district ordering needed at
/// assembly time.
#[derive(Debug)]
pub struct CropReport {
    pub crop: String,
    pub district_order: Vec<String>,
    pub rows: Vec<ReportRow>,
}

/// Runs one crop through the derivation stages. Returns `None` when the
/// loader found no source files for it.
pub fn process_crop(dir: &Path, crop: &str) -> Result<Option<CropReport>> {
    let Some(series) = loader::load_crop(dir, crop)? else {
        return Ok(None);
    };
    let CropSeries {
        crop,
        rows,
        district_order,
    } = series;

    let full_state = aggregate::full_state_rows(&rows);
    let mut combined = rows;
    combined.extend(full_state);

    let rows = rolling::with_moving_averages(&combined);

    Ok(Some(CropReport {
        crop,
        district_order,
        rows,
    }))
}

/// Daily section for one crop: district rows sorted by recorded district
/// order then date, followed by that crop's full-state rows sorted by date.
pub fn assemble_daily(report: &CropReport) -> Vec<ReportRow> {
    let rank = |district: &str| {
        report
            .district_order
            .iter()
            .position(|d| d == district)
            .unwrap_or(usize::MAX)
    };

    let mut districts: Vec<ReportRow> = report
        .rows
        .iter()
        .filter(|r| r.crop_type != FULL_STATE)
        .cloned()
        .collect();
    districts.sort_by_key(|r| (rank(&r.district), r.date));

    let mut full_state: Vec<ReportRow> = report
        .rows
        .iter()
        .filter(|r| r.crop_type == FULL_STATE)
        .cloned()
        .collect();
    full_state.sort_by_key(|r| r.date);

    districts.extend(full_state);
    districts
}

/// Runs the whole pipeline: every configured crop in order, then both
/// spreadsheets. Crops with no source files are skipped.
pub fn run(config: &ReportConfig) -> Result<()> {
    let mut reports = Vec::new();
    for crop in &config.crops {
        if let Some(report) = process_crop(&config.data_dir, crop)? {
            reports.push(report);
        }
    }

    let mut daily_rows = Vec::new();
    let mut weekly_rows = Vec::new();

    for report in &reports {
        let crop_daily = assemble_daily(report);
        weekly_rows.extend(weekly::weekly_report(&crop_daily, &report.district_order));
        daily_rows.extend(crop_daily);
    }

    output::write_report(&config.daily_output, "Daily", &daily_rows)?;
    output::write_report(&config.weekly_output, "Weekly", &weekly_rows)?;

    info!(
        crops = reports.len(),
        daily_rows = daily_rows.len(),
        weekly_rows = weekly_rows.len(),
        "Pipeline run complete"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::ALL_DISTRICTS;
    use chrono::NaiveDate;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    fn report_row(day: u32, district: &str, crop_type: &str) -> ReportRow {
        ReportRow {
            date: d(day),
            district: district.to_string(),
            crop_type: crop_type.to_string(),
            min_price: 1.0,
            max_price: 2.0,
            modal_price: 1.5,
            average: 1.5,
            moving_avg_7: 1.5,
            moving_avg_30: 1.5,
        }
    }

    /// Two districts A (first seen) and B, three dates each: the daily
    /// section must list all A rows date-sorted, then all B rows, then the
    /// three "All Districts" rows.
    #[test]
    fn test_assemble_daily_ordering() {
        let mut rows = Vec::new();
        for day in [2, 1, 3] {
            rows.push(report_row(day, "B", "onion"));
            rows.push(report_row(day, "A", "onion"));
            rows.push(report_row(day, ALL_DISTRICTS, FULL_STATE));
        }

        let report = CropReport {
            crop: "onion".to_string(),
            district_order: vec!["A".to_string(), "B".to_string()],
            rows,
        };

        let daily = assemble_daily(&report);
        let keys: Vec<(&str, NaiveDate)> = daily
            .iter()
            .map(|r| (r.district.as_str(), r.date))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("A", d(1)),
                ("A", d(2)),
                ("A", d(3)),
                ("B", d(1)),
                ("B", d(2)),
                ("B", d(3)),
                (ALL_DISTRICTS, d(1)),
                (ALL_DISTRICTS, d(2)),
                (ALL_DISTRICTS, d(3)),
            ]
        );
    }

    #[test]
    fn test_process_crop_row_count_and_invariant() {
        let dir = std::env::temp_dir().join("crop_reporter_test_process");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("onion_prices.csv"),
            "Date,District,Min Price,Max Price,Modal Price,Average Price\n\
             01-06-2024,Indore,1000,1400,1200,1190\n\
             01-06-2024,Bhopal,800,1200,1000,990\n\
             02-06-2024,Indore,1010,1410,1210,1200\n",
        )
        .unwrap();

        let report = process_crop(&dir, "onion").unwrap().unwrap();

        // 3 district rows + one aggregate row per distinct date (2 dates).
        assert_eq!(report.rows.len(), 5);

        let agg: Vec<_> = report
            .rows
            .iter()
            .filter(|r| r.crop_type == FULL_STATE)
            .collect();
        assert_eq!(agg.len(), 2);
        // Mean of that date's district modal prices.
        let day_one = agg.iter().find(|r| r.date == d(1)).unwrap();
        assert_eq!(day_one.modal_price, 1100.0);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_process_crop_missing_is_none() {
        let dir = std::env::temp_dir().join("crop_reporter_test_process_missing");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        assert!(process_crop(&dir, "wheat").unwrap().is_none());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
