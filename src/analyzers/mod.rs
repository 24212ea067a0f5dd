//! Tabular aggregation stages of the reporting pipeline.
//!
//! This module derives the state-wide "All Districts" series per crop,
//! attaches trailing moving averages per (crop_type, district) series, and
//! resamples daily rows into week-ending means.

pub mod aggregate;
pub mod rolling;
pub mod utility;
pub mod weekly;
