use std::collections::HashMap;

use crate::analyzers::utility::mean;
use crate::records::{PriceRow, ReportRow};

/// Short trailing window for modal price, in rows (one row per day).
pub const WINDOW_SHORT: usize = 7;

/// Long trailing window for modal price.
pub const WINDOW_LONG: usize = 30;

/// Trailing windowed mean with a minimum period of 1: position `i` is the
/// mean of the last `window` values up to and including `i`, so there are
/// no leading gaps.
pub fn trailing_means(values: &[f64], window: usize) -> Vec<f64> {
    (0..values.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            mean(&values[start..=i])
        })
        .collect()
}

/// Attaches 7-day and 30-day trailing means of modal price to each row.
///
/// The windows run independently per (crop_type, district) series, ordered
/// by date within the series: one district's values never feed another
/// district's averages, and the "All Districts" aggregate forms its own
/// series. Output rows keep the input order.
pub fn with_moving_averages(rows: &[PriceRow]) -> Vec<ReportRow> {
    let mut groups: HashMap<(&str, &str), Vec<usize>> = HashMap::new();
    for (i, row) in rows.iter().enumerate() {
        groups
            .entry((row.crop_type.as_str(), row.district.as_str()))
            .or_default()
            .push(i);
    }

    let mut avg_short = vec![0.0; rows.len()];
    let mut avg_long = vec![0.0; rows.len()];

    for indices in groups.values() {
        let mut indices = indices.clone();
        // Stable sort: duplicate dates keep their input order.
        indices.sort_by_key(|&i| rows[i].date);

        let modal: Vec<f64> = indices.iter().map(|&i| rows[i].modal_price).collect();
        let short = trailing_means(&modal, WINDOW_SHORT);
        let long = trailing_means(&modal, WINDOW_LONG);

        for (k, &i) in indices.iter().enumerate() {
            avg_short[i] = short[k];
            avg_long[i] = long[k];
        }
    }

    rows.iter()
        .enumerate()
        .map(|(i, r)| ReportRow {
            date: r.date,
            district: r.district.clone(),
            crop_type: r.crop_type.clone(),
            min_price: r.min_price,
            max_price: r.max_price,
            modal_price: r.modal_price,
            average: r.average,
            moving_avg_7: avg_short[i],
            moving_avg_30: avg_long[i],
        })
        .collect()
}
