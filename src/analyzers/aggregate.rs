use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::analyzers::utility::mean;
use crate::records::{ALL_DISTRICTS, FULL_STATE, PriceRow};

/// Synthesizes the state-wide series for one crop: one "All Districts" row
/// per distinct date, each price field the mean of that date's district
/// rows. Output is sorted by date.
pub fn full_state_rows(rows: &[PriceRow]) -> Vec<PriceRow> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&PriceRow>> = BTreeMap::new();
    for row in rows {
        by_date.entry(row.date).or_default().push(row);
    }

    by_date
        .into_iter()
        .map(|(date, day)| {
            let field = |get: fn(&PriceRow) -> f64| {
                mean(&day.iter().map(|r| get(r)).collect::<Vec<_>>())
            };

            PriceRow {
                date,
                district: ALL_DISTRICTS.to_string(),
                crop_type: FULL_STATE.to_string(),
                min_price: field(|r| r.min_price),
                max_price: field(|r| r.max_price),
                modal_price: field(|r| r.modal_price),
                average: field(|r| r.average),
            }
        })
        .collect()
}
