use chrono::{Datelike, Duration, NaiveDate};
use std::collections::{BTreeMap, HashMap};

use crate::analyzers::utility::mean;
use crate::records::{ALL_DISTRICTS, ReportRow};

/// Returns the Sunday on or after `date`: the label of the week-ending bin
/// the date falls into.
pub fn week_ending(date: NaiveDate) -> NaiveDate {
    let to_sunday = 6 - i64::from(date.weekday().num_days_from_monday());
    date + Duration::days(to_sunday)
}

/// Resamples one crop's daily rows into week-ending means.
///
/// Rows are grouped per district series (the "All Districts" aggregate is
/// its own series) and bucketed by [`week_ending`]; every numeric column,
/// moving averages included, is replaced by its in-bucket mean. Output
/// lists districts in `district_order`, then the aggregate series, each
/// sorted by week date.
pub fn weekly_report(daily: &[ReportRow], district_order: &[String]) -> Vec<ReportRow> {
    let mut series: HashMap<&str, BTreeMap<NaiveDate, Vec<&ReportRow>>> = HashMap::new();
    for row in daily {
        series
            .entry(row.district.as_str())
            .or_default()
            .entry(week_ending(row.date))
            .or_default()
            .push(row);
    }

    let mut out = Vec::new();
    let ordered = district_order
        .iter()
        .map(String::as_str)
        .chain([ALL_DISTRICTS]);

    for district in ordered {
        let Some(weeks) = series.get(district) else {
            continue;
        };

        for (&week, rows) in weeks {
            let field = |get: fn(&ReportRow) -> f64| {
                mean(&rows.iter().map(|r| get(r)).collect::<Vec<_>>())
            };

            out.push(ReportRow {
                date: week,
                district: district.to_string(),
                crop_type: rows[0].crop_type.clone(),
                min_price: field(|r| r.min_price),
                max_price: field(|r| r.max_price),
                modal_price: field(|r| r.modal_price),
                average: field(|r| r.average),
                moving_avg_7: field(|r| r.moving_avg_7),
                moving_avg_30: field(|r| r.moving_avg_30),
            });
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::FULL_STATE;
    use chrono::Weekday;

    fn row(date: NaiveDate, district: &str, crop_type: &str, modal: f64) -> ReportRow {
        ReportRow {
            date,
            district: district.to_string(),
            crop_type: crop_type.to_string(),
            min_price: modal - 100.0,
            max_price: modal + 100.0,
            modal_price: modal,
            average: modal,
            moving_avg_7: modal,
            moving_avg_30: modal,
        }
    }

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    #[test]
    fn test_week_ending_maps_to_sunday() {
        // 2024-06-03 is a Monday, 2024-06-09 the following Sunday.
        assert_eq!(week_ending(d(3)), d(9));
        assert_eq!(week_ending(d(5)), d(9));
        assert_eq!(week_ending(d(9)), d(9));
        assert_eq!(week_ending(d(10)), d(16));
        assert_eq!(week_ending(d(3)).weekday(), Weekday::Sun);
    }

    #[test]
    fn test_weekly_means_per_bucket() {
        // Monday and Tuesday of one week, Monday of the next.
        let daily = vec![
            row(d(3), "Indore", "onion", 100.0),
            row(d(4), "Indore", "onion", 200.0),
            row(d(10), "Indore", "onion", 400.0),
        ];

        let weekly = weekly_report(&daily, &["Indore".to_string()]);
        assert_eq!(weekly.len(), 2);
        assert_eq!(weekly[0].date, d(9));
        assert_eq!(weekly[0].modal_price, 150.0);
        assert_eq!(weekly[0].min_price, 50.0);
        assert_eq!(weekly[0].moving_avg_7, 150.0);
        assert_eq!(weekly[1].date, d(16));
        assert_eq!(weekly[1].modal_price, 400.0);
    }

    #[test]
    fn test_weekly_ordering_districts_then_aggregate() {
        let order = vec!["Indore".to_string(), "Bhopal".to_string()];
        let daily = vec![
            row(d(3), "Bhopal", "onion", 1.0),
            row(d(3), "Indore", "onion", 2.0),
            row(d(3), ALL_DISTRICTS, FULL_STATE, 1.5),
        ];

        let weekly = weekly_report(&daily, &order);
        let districts: Vec<&str> = weekly.iter().map(|r| r.district.as_str()).collect();
        assert_eq!(districts, vec!["Indore", "Bhopal", ALL_DISTRICTS]);
        assert_eq!(weekly[2].crop_type, FULL_STATE);
    }

    #[test]
    fn test_weekly_dates_fall_on_week_boundaries() {
        let daily: Vec<ReportRow> = (1..=14)
            .map(|day| row(d(day), "Indore", "onion", day as f64))
            .collect();

        let weekly = weekly_report(&daily, &["Indore".to_string()]);
        assert!(weekly.iter().all(|r| r.date.weekday() == Weekday::Sun));
    }
}
